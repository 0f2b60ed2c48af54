//! Tests for coordinate construction and parsing

use super::*;

#[test]
fn test_clubhouse_coordinates() {
    let result = GeoPoint::new(35.7796, -78.6382);
    assert!(result.is_ok(), "Valid coordinates should not error");

    let point = result.unwrap();
    assert_eq!(point.latitude(), 35.7796);
    assert_eq!(point.longitude(), -78.6382);
    assert_eq!(point.as_tuple(), (35.7796, -78.6382));
}

#[test]
fn test_range_boundaries_are_inclusive() {
    assert!(GeoPoint::new(90.0, 180.0).is_ok());
    assert!(GeoPoint::new(-90.0, -180.0).is_ok());
    assert!(GeoPoint::new(0.0, 0.0).is_ok());
}

#[test]
fn test_invalid_latitude_too_high() {
    let result = GeoPoint::new(90.0001, 0.0);
    assert!(matches!(result, Err(CoordError::InvalidLatitude(_))));
}

#[test]
fn test_invalid_latitude_too_low() {
    let result = GeoPoint::new(-91.0, 0.0);
    assert!(matches!(result, Err(CoordError::InvalidLatitude(_))));
}

#[test]
fn test_invalid_longitude() {
    let result = GeoPoint::new(0.0, 180.5);
    assert!(matches!(result, Err(CoordError::InvalidLongitude(_))));

    let result = GeoPoint::new(0.0, -181.0);
    assert!(matches!(result, Err(CoordError::InvalidLongitude(_))));
}

#[test]
fn test_non_finite_values_rejected() {
    assert!(matches!(
        GeoPoint::new(f64::NAN, 0.0),
        Err(CoordError::InvalidLatitude(_))
    ));
    assert!(matches!(
        GeoPoint::new(0.0, f64::INFINITY),
        Err(CoordError::InvalidLongitude(_))
    ));
}

#[test]
fn test_latitude_checked_before_longitude() {
    let result = GeoPoint::new(100.0, 200.0);
    assert_eq!(result, Err(CoordError::InvalidLatitude(100.0)));
}

#[test]
fn test_parse_with_and_without_spaces() {
    let compact: GeoPoint = "35.7798,-78.6385".parse().unwrap();
    let spaced: GeoPoint = " 35.7798 , -78.6385 ".parse().unwrap();

    assert_eq!(compact, spaced);
    assert_eq!(compact.as_tuple(), (35.7798, -78.6385));
}

#[test]
fn test_parse_malformed() {
    for text in ["", "35.7798", "abc,def", "35.7798;-78.6385", "1,2,3"] {
        let result = text.parse::<GeoPoint>();
        assert!(
            matches!(result, Err(CoordError::Malformed(_))),
            "'{}' should be malformed, got {:?}",
            text,
            result
        );
    }
}

#[test]
fn test_parse_out_of_range_reports_range_error() {
    let result = "95.0,10.0".parse::<GeoPoint>();
    assert_eq!(result, Err(CoordError::InvalidLatitude(95.0)));
}

#[test]
fn test_try_from_tuple() {
    let point = GeoPoint::try_from((35.7790, -78.6390)).unwrap();
    assert_eq!(point.latitude(), 35.7790);
    assert!(GeoPoint::try_from((0.0, 999.0)).is_err());
}

#[test]
fn test_display_uses_four_decimals() {
    let point = GeoPoint::new(35.77961, -78.6382).unwrap();
    assert_eq!(point.to_string(), "35.7796, -78.6382");
}

#[test]
fn test_map_url_for_destination() {
    let hole_10 = GeoPoint::new(35.7825, -78.636).unwrap();
    assert_eq!(
        hole_10.map_url(DEFAULT_MAP_ZOOM),
        "https://www.openstreetmap.org/?mlat=35.7825&mlon=-78.636#map=17/35.7825/-78.636"
    );
}

#[test]
fn test_search_url_encodes_query() {
    assert_eq!(
        search_url("Hole 10"),
        "https://www.openstreetmap.org/search?query=Hole+10"
    );
    assert_eq!(
        search_url("  Raleigh, NC  "),
        "https://www.openstreetmap.org/search?query=Raleigh%2C+NC"
    );
    assert_eq!(
        search_url("a=b&c?d#e"),
        "https://www.openstreetmap.org/search?query=a%3Db%26c%3Fd%23e"
    );
}

#[test]
fn test_search_url_empty_query() {
    assert_eq!(search_url(""), "https://www.openstreetmap.org/search?query=");
}

#[test]
fn test_error_messages() {
    let err = CoordError::InvalidLatitude(91.0);
    assert_eq!(
        err.to_string(),
        "Invalid latitude: 91 (must be between -90 and 90)"
    );

    let err = CoordError::Malformed("x".to_string());
    assert!(err.to_string().contains("'x'"));
}
