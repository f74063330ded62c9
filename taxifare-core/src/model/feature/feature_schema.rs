use super::{FeatureColumn, FeatureSource, FeatureVector};
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// the ordered list of inputs a model is trained on.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Hash)]
#[serde(transparent)]
pub struct FeatureSchema(Vec<FeatureColumn>);

impl FeatureSchema {
    pub fn new(columns: Vec<FeatureColumn>) -> FeatureSchema {
        FeatureSchema(columns)
    }

    /// the 10-feature schema used by the fare and duration trees
    pub fn tree() -> FeatureSchema {
        use FeatureColumn as C;
        FeatureSchema(vec![
            C::StartHour,
            C::StartMinute,
            C::PassengerCount,
            C::PickupLongitude,
            C::PickupLatitude,
            C::DropoffLongitude,
            C::DropoffLatitude,
            C::RateCode,
            C::DayOfWeek,
            C::GpsDistance,
        ])
    }

    /// the 5-feature schema used by the tip amount regression
    pub fn regression() -> FeatureSchema {
        use FeatureColumn as C;
        FeatureSchema(vec![
            C::StartHour,
            C::DayOfWeek,
            C::GpsDistance,
            C::PickupLatitude,
            C::PickupLongitude,
        ])
    }

    pub fn columns(&self) -> &[FeatureColumn] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// raw values in schema order, used when building training matrices
    pub fn values<S: FeatureSource>(&self, source: &S) -> Vec<f64> {
        self.0.iter().map(|c| source.feature(c)).collect()
    }

    /// values in schema order, tagged with this schema for later validation
    pub fn vectorize<S: FeatureSource>(&self, source: &S) -> FeatureVector {
        FeatureVector::new(self.clone(), self.values(source))
    }
}

impl Display for FeatureSchema {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let names = self.0.iter().map(|c| c.to_string()).collect::<Vec<_>>();
        write!(f, "[{}]", names.join(","))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Indexed;

    impl FeatureSource for Indexed {
        fn feature(&self, column: &FeatureColumn) -> f64 {
            FeatureSchema::tree()
                .columns()
                .iter()
                .position(|c| c == column)
                .unwrap() as f64
        }
    }

    #[test]
    fn test_schema_sizes() {
        assert_eq!(FeatureSchema::tree().len(), 10);
        assert_eq!(FeatureSchema::regression().len(), 5);
    }

    #[test]
    fn test_values_follow_schema_order() {
        let tree = FeatureSchema::tree().values(&Indexed);
        assert_eq!(tree, (0..10).map(|i| i as f64).collect::<Vec<_>>());
        // hour, day_of_week, gps_distance, pickup_latitude, pickup_longitude
        let regression = FeatureSchema::regression().values(&Indexed);
        assert_eq!(regression, vec![0.0, 8.0, 9.0, 4.0, 3.0]);
    }

    #[test]
    fn test_schema_serializes_as_column_names() {
        let json = serde_json::to_string(&FeatureSchema::regression()).unwrap();
        assert_eq!(
            json,
            r#"["start_hour","day_of_week","gps_distance","pickup_latitude","pickup_longitude"]"#
        );
    }
}
