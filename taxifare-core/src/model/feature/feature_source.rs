use super::FeatureColumn;

/// anything that can supply a value for each [`FeatureColumn`].
///
/// implemented by engineered historical trips (training) and by
/// prediction requests (inference), so that both paths assemble
/// their vectors through the same [`super::FeatureSchema`].
pub trait FeatureSource {
    fn feature(&self, column: &FeatureColumn) -> f64;
}
