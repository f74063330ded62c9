use geo::{Distance, Geodesic, Point};
use uom::si::f64::Length;
use uom::si::length::{meter, mile};

/// geodesic distance between two points on the WGS-84 ellipsoid.
///
/// # Arguments
///
/// * `src_point` - origin, with x = longitude and y = latitude
/// * `dst_point` - destination, with x = longitude and y = latitude
///
/// # Returns
///
/// * the distance as a [`Length`] value
pub fn compute_geodesic(src_point: Point<f64>, dst_point: Point<f64>) -> Length {
    Length::new::<meter>(Geodesic.distance(src_point, dst_point))
}

/// great-circle distance in statute miles between a pickup and a dropoff location,
/// each given as (latitude, longitude).
pub fn gps_distance_miles(pickup: (f64, f64), dropoff: (f64, f64)) -> f64 {
    let (pickup_lat, pickup_lon) = pickup;
    let (dropoff_lat, dropoff_lon) = dropoff;
    let src = Point::new(pickup_lon, pickup_lat);
    let dst = Point::new(dropoff_lon, dropoff_lat);
    compute_geodesic(src, dst).get::<mile>()
}

#[cfg(test)]
mod tests {
    use super::gps_distance_miles;

    const EMPIRE_STATE: (f64, f64) = (40.7484, -73.9857);
    const WILLIAMSBURG: (f64, f64) = (40.7306, -73.9352);

    #[test]
    fn test_midtown_to_williamsburg() {
        let distance = gps_distance_miles(EMPIRE_STATE, WILLIAMSBURG);
        assert!(
            (2.8..=3.0).contains(&distance),
            "expected roughly 2.9 miles, found {distance}"
        );
    }

    #[test]
    fn test_distance_is_symmetric() {
        let pairs = [
            (EMPIRE_STATE, WILLIAMSBURG),
            ((40.6413, -73.7781), (40.7769, -73.8740)),
            ((40.0, -74.0), (40.0, -74.0)),
        ];
        for (a, b) in pairs {
            let ab = gps_distance_miles(a, b);
            let ba = gps_distance_miles(b, a);
            assert!((ab - ba).abs() < 1e-9, "{ab} != {ba}");
        }
    }

    #[test]
    fn test_same_point_is_zero() {
        assert!(gps_distance_miles(EMPIRE_STATE, EMPIRE_STATE).abs() < 1e-9);
    }
}
