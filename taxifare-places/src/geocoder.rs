use crate::PlaceSuggestion;
use taxifare_core::model::request::Coordinate;

/// a source of address suggestions and coordinates.
///
/// lookups never fail outright: a failed call yields no suggestions or no
/// coordinates, and callers report that to the user.
pub trait Geocoder {
    /// ranked candidate places for some free-text input. empty on failure.
    fn suggestions(&self, input: &str) -> Vec<PlaceSuggestion>;

    /// location of a place previously returned by [`Geocoder::suggestions`].
    /// `None` on failure.
    fn coordinates(&self, place_id: &str) -> Option<Coordinate>;

    /// looks up an address and resolves its first suggestion.
    fn resolve(&self, input: &str) -> Option<(PlaceSuggestion, Coordinate)> {
        let suggestion = self.suggestions(input).into_iter().next()?;
        let coordinate = self.coordinates(&suggestion.place_id)?;
        Some((suggestion, coordinate))
    }
}
