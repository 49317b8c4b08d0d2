use geomark_core::{validate_citation, validate_spatial, Citation, SpatialInfo, Violation};

fn located(latitude: f64, longitude: f64) -> SpatialInfo {
    SpatialInfo {
        latitude: Some(latitude),
        longitude: Some(longitude),
        ..SpatialInfo::default()
    }
}

#[test]
fn empty_record_passes_with_no_violations() {
    assert!(validate_spatial(&SpatialInfo::default()).is_empty());
}

#[test]
fn coordinates_at_valid_precision_pass() {
    assert!(validate_spatial(&located(37.55607, 126.97187)).is_empty());
    assert!(validate_spatial(&located(-37.5560745, 126.9718732)).is_empty());
}

#[test]
fn one_decimal_place_fails_precision() {
    let violations = validate_spatial(&located(37.5, 126.97187));
    assert_eq!(violations, vec![Violation::LatitudePrecision { digits: 1 }]);
}

#[test]
fn more_than_seven_decimal_places_fails_precision() {
    let violations = validate_spatial(&located(37.5560745123, 126.97187));
    assert_eq!(violations.len(), 1);
    assert!(matches!(
        violations[0],
        Violation::LatitudePrecision { digits } if digits > 7
    ));
}

#[test]
fn out_of_range_and_precision_are_reported_together() {
    let violations = validate_spatial(&located(137.5, 126.97187));
    assert_eq!(
        violations,
        vec![
            Violation::LatitudeOutOfRange(137.5),
            Violation::LatitudePrecision { digits: 1 },
        ]
    );
}

#[test]
fn longitude_has_its_own_domain() {
    let violations = validate_spatial(&located(37.55607, -180.12345));
    assert_eq!(violations, vec![Violation::LongitudeOutOfRange(-180.12345)]);
}

#[test]
fn altitude_domain_is_enforced() {
    let mut info = located(37.55607, 126.97187);
    info.altitude = Some(9500.0);
    assert_eq!(
        validate_spatial(&info),
        vec![Violation::AltitudeOutOfRange(9500.0)]
    );

    info.altitude = Some(-499.9);
    assert!(validate_spatial(&info).is_empty());
}

#[test]
fn timestamp_must_be_rfc3339() {
    let mut info = SpatialInfo::default();

    info.timestamp = Some("2024-05-01T12:30:00+09:00".to_string());
    assert!(validate_spatial(&info).is_empty());

    info.timestamp = Some("yesterday at noon".to_string());
    assert_eq!(
        validate_spatial(&info),
        vec![Violation::InvalidTimestamp("yesterday at noon".to_string())]
    );

    // Date-only text is not a date-time.
    info.timestamp = Some("2024-05-01".to_string());
    assert_eq!(validate_spatial(&info).len(), 1);
}

#[test]
fn validator_is_total_for_non_finite_coordinates() {
    let violations = validate_spatial(&located(f64::NAN, f64::INFINITY));
    assert_eq!(violations.len(), 4);
}

#[test]
fn citation_content_must_be_non_empty_and_bounded() {
    let empty = Citation::Url {
        content: String::new(),
        url: "https://example.org".to_string(),
    };
    assert_eq!(validate_citation(&empty), vec![Violation::EmptyContent]);

    let oversized = Citation::Url {
        content: "x".repeat(501),
        url: "https://example.org".to_string(),
    };
    assert_eq!(
        validate_citation(&oversized),
        vec![Violation::ContentTooLong { chars: 501 }]
    );

    let at_limit = Citation::Url {
        content: "x".repeat(500),
        url: "https://example.org".to_string(),
    };
    assert!(validate_citation(&at_limit).is_empty());
}

#[test]
fn url_citation_requires_well_formed_url() {
    let citation = Citation::Url {
        content: "statute".to_string(),
        url: "not a url".to_string(),
    };
    assert_eq!(
        validate_citation(&citation),
        vec![Violation::InvalidCitationUrl("not a url".to_string())]
    );
}

#[test]
fn user_citation_restricts_id_character_class() {
    let good = Citation::User {
        content: "per counsel".to_string(),
        user_id: "counsel_01".to_string(),
    };
    assert!(validate_citation(&good).is_empty());

    let bad = Citation::User {
        content: "per counsel".to_string(),
        user_id: "counsel-01!".to_string(),
    };
    assert_eq!(
        validate_citation(&bad),
        vec![Violation::InvalidUserId("counsel-01!".to_string())]
    );
}

#[test]
fn spatial_citation_surfaces_nested_violations() {
    let citation = Citation::Spatial {
        content: "site inspection".to_string(),
        spatial: Some(SpatialInfo {
            latitude: Some(37.5),
            longitude: Some(126.97187),
            ..SpatialInfo::default()
        }),
    };
    assert_eq!(
        validate_citation(&citation),
        vec![Violation::LatitudePrecision { digits: 1 }]
    );
}

#[test]
fn all_citation_problems_are_reported_in_one_pass() {
    let citation = Citation::User {
        content: String::new(),
        user_id: "bad id".to_string(),
    };
    let violations = validate_citation(&citation);
    assert!(violations.contains(&Violation::EmptyContent));
    assert!(violations.contains(&Violation::InvalidUserId("bad id".to_string())));
    assert_eq!(violations.len(), 2);
}
