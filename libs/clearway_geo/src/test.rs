use approx::assert_relative_eq;

use crate::{BoundingBox, EARTH_RADIUS, GeoError, LatLng, distance_meters, haversine, lat_lng};

const CITY_HALL: (f64, f64) = (37.5665, 126.9780);
const SEOUL_STATION: (f64, f64) = (37.5547, 126.9707);
const GANGNAM: (f64, f64) = (37.4979, 127.0276);

#[test]
fn distance_is_symmetric() {
    let pairs = [
        (CITY_HALL, SEOUL_STATION),
        (SEOUL_STATION, GANGNAM),
        (CITY_HALL, GANGNAM),
        ((0.0, 179.9), (0.0, -179.9)),
    ];

    for ((lat1, lon1), (lat2, lon2)) in pairs {
        let forward = distance_meters(lat1, lon1, lat2, lon2);
        let backward = distance_meters(lat2, lon2, lat1, lon1);
        assert_relative_eq!(forward, backward, max_relative = 1e-12);
    }
}

#[test]
fn distance_is_non_negative() {
    let (lat, lng) = CITY_HALL;
    assert_eq!(distance_meters(lat, lng, lat, lng), 0.0);

    let (lat2, lng2) = GANGNAM;
    assert!(distance_meters(lat, lng, lat2, lng2) > 0.0);
}

#[test]
fn one_degree_of_latitude() {
    let expected = EARTH_RADIUS * std::f64::consts::PI / 180.0;
    assert_relative_eq!(distance_meters(0.0, 0.0, 1.0, 0.0), expected, max_relative = 1e-9);
}

#[test]
fn city_hall_to_seoul_station() {
    let (lat1, lon1) = CITY_HALL;
    let (lat2, lon2) = SEOUL_STATION;
    // Roughly 1.45km as the crow flies.
    assert_relative_eq!(distance_meters(lat1, lon1, lat2, lon2), 1450.0, max_relative = 0.02);
}

#[test]
fn non_finite_input_is_infinitely_far() {
    let (lat, lng) = CITY_HALL;
    assert_eq!(distance_meters(f64::NAN, lng, lat, lng), f64::INFINITY);
    assert_eq!(distance_meters(lat, f64::NAN, lat, lng), f64::INFINITY);
    assert_eq!(distance_meters(lat, lng, f64::INFINITY, lng), f64::INFINITY);
    assert_eq!(distance_meters(lat, lng, lat, f64::NEG_INFINITY), f64::INFINITY);
}

#[test]
fn haversine_matches_raw_coordinates() {
    let a = lat_lng(CITY_HALL.0, CITY_HALL.1);
    let b = lat_lng(GANGNAM.0, GANGNAM.1);

    assert_eq!(a.latitude(), CITY_HALL.0);
    assert_eq!(a.longitude(), CITY_HALL.1);
    assert_eq!(
        haversine(&a, &b),
        distance_meters(CITY_HALL.0, CITY_HALL.1, GANGNAM.0, GANGNAM.1)
    );
}

#[test]
fn bounding_box_around_point() {
    let center = lat_lng(CITY_HALL.0, CITY_HALL.1);
    let bounds = BoundingBox::around(center, 0.01).expect("valid bounds");

    assert_relative_eq!(bounds.min_lat, 37.5565, max_relative = 1e-12);
    assert_relative_eq!(bounds.max_lat, 37.5765, max_relative = 1e-12);
    assert_relative_eq!(bounds.min_lng, 126.9680, max_relative = 1e-12);
    assert_relative_eq!(bounds.max_lng, 126.9880, max_relative = 1e-12);

    assert!(bounds.contains(&center));
    assert!(!bounds.contains(&lat_lng(GANGNAM.0, GANGNAM.1)));
}

#[test]
fn bounding_box_rejects_bad_input() {
    let center = lat_lng(CITY_HALL.0, CITY_HALL.1);

    assert!(matches!(
        BoundingBox::around(lat_lng(f64::NAN, 0.0), 0.01),
        Err(GeoError::InvalidCoordinate(_))
    ));
    assert!(BoundingBox::around(center, 0.0).is_err());
    assert!(BoundingBox::around(center, -0.01).is_err());
}

#[test]
fn accessors_read_the_geo_axes() {
    let point = lat_lng(CITY_HALL.0, CITY_HALL.1);

    assert_eq!(point.y(), CITY_HALL.0);
    assert_eq!(point.x(), CITY_HALL.1);
    assert_eq!(point.latitude(), point.y());
    assert_eq!(point.longitude(), point.x());
    assert!(!lat_lng(f64::NAN, CITY_HALL.1).is_finite());
}
