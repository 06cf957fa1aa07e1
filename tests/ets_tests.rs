use farebox::agency::{AgencyPolicy, FeedViolation, RouteType, ets_lrt::EtsLrt};
use farebox::gtfs::models::{GtfsRoute, GtfsStop};

fn route(id: &str, short_name: Option<&str>) -> GtfsRoute {
    GtfsRoute {
        route_id: id.to_string(),
        agency_id: Some("1".to_string()),
        route_short_name: short_name.map(str::to_string),
        route_long_name: None,
        route_type: 0,
        route_color: None,
        route_text_color: None,
    }
}

fn stop(id: &str, code: Option<&str>) -> GtfsStop {
    GtfsStop {
        stop_id: id.to_string(),
        stop_code: code.map(str::to_string),
        stop_name: "Churchill Station".to_string(),
        stop_lat: None,
        stop_lon: None,
    }
}

#[test]
fn agency_identity() {
    let ets = EtsLrt::new();
    assert_eq!(ets.agency_name(), "ETS");
    assert_eq!(ets.agency_id(), "1");
    assert_eq!(ets.agency_route_type(), RouteType::LightRail);
    assert_eq!(ets.agency_route_type().gtfs_code(), 0);
}

#[test]
fn host_flags() {
    let ets = EtsLrt::new();
    assert!(ets.default_exclude_enabled());
    assert!(ets.default_route_id_enabled());
    assert!(!ets.use_route_short_name_for_route_id());
    assert!(ets.default_agency_color_enabled());
    assert!(ets.direction_finder_enabled());
}

#[test]
fn short_name_is_route_id_verbatim() {
    let ets = EtsLrt::new();
    assert_eq!(ets.route_short_name(&route("21R", Some("501"))), "21R");
    assert_eq!(ets.route_short_name(&route("", Some("501"))), "");
}

#[test]
fn long_name_strips_leading_lrt() {
    let ets = EtsLrt::new();
    assert_eq!(ets.clean_route_long_name("LRT Capital Line"), "Capital Line");
    assert_eq!(ets.clean_route_long_name("lrt Metro Line"), "Metro Line");
    // Only a leading prefix goes away.
    assert_eq!(ets.clean_route_long_name("Capital LRT Line"), "Capital LRT Line");
}

#[test]
fn headsign_strips_lrt_prefix() {
    let ets = EtsLrt::new();
    assert_eq!(
        ets.clean_trip_headsign("Clareview LRT - Century Park"),
        "Century Park"
    );
    assert_eq!(
        ets.clean_trip_headsign("Health Sciences lrt- NAIT"),
        "NAIT"
    );
    assert_eq!(ets.clean_trip_headsign("Century Park"), "Century Park");
}

#[test]
fn headsign_normalizes_bounds_and_streets() {
    let ets = EtsLrt::new();
    assert_eq!(
        ets.clean_trip_headsign("Churchill Northbound via Jasper Avenue"),
        "Churchill NB via Jasper Ave"
    );
}

#[test]
fn stop_name_drops_station_and_stop_suffixes() {
    let ets = EtsLrt::new();
    assert_eq!(ets.clean_stop_name("Churchill Station"), "Churchill");
    assert_eq!(ets.clean_stop_name("Century Park stop"), "Century Park");
    assert_eq!(ets.clean_stop_name("Bay Enterprise Square"), "Bay Enterprise Sq");
}

#[test]
fn stop_name_abbreviates_edmonton() {
    let ets = EtsLrt::new();
    let cleaned = ets.clean_stop_name("Edmonton Health Sciences / Jubilee Station");
    assert!(cleaned.starts_with("Edm "), "got {cleaned:?}");
    assert!(!cleaned.contains("Station"), "got {cleaned:?}");
    assert!(!cleaned.contains("Edmonton"), "got {cleaned:?}");
}

#[test]
fn cleaners_are_idempotent() {
    let ets = EtsLrt::new();
    for input in [
        "LRT Capital Line",
        "Clareview LRT - Century Park",
        "Churchill Station",
        "Edmonton Health Sciences / Jubilee Station",
        "106TH street northbound stop",
    ] {
        let long_name = ets.clean_route_long_name(input);
        assert_eq!(ets.clean_route_long_name(&long_name), long_name);
        let headsign = ets.clean_trip_headsign(input);
        assert_eq!(ets.clean_trip_headsign(&headsign), headsign);
        let stop_name = ets.clean_stop_name(input);
        assert_eq!(ets.clean_stop_name(&stop_name), stop_name);
    }
}

#[test]
fn missing_colors_by_realtime_code() {
    let ets = EtsLrt::new();
    assert_eq!(
        ets.provide_missing_route_color(&route("21R", Some("501"))).unwrap(),
        "4895D0"
    );
    assert_eq!(
        ets.provide_missing_route_color(&route("22R", Some("502"))).unwrap(),
        "DB1E32"
    );
    assert_eq!(
        ets.provide_missing_route_color(&route("23R", Some("503"))).unwrap(),
        "2B6A3B"
    );
}

#[test]
fn missing_colors_by_line_name() {
    let ets = EtsLrt::new();
    assert_eq!(
        ets.provide_missing_route_color(&route("21R", Some("Capital"))).unwrap(),
        "4895D0"
    );
    assert_eq!(
        ets.provide_missing_route_color(&route("22R", Some("metro"))).unwrap(),
        "DB1E32"
    );
    assert_eq!(
        ets.provide_missing_route_color(&route("23R", Some("VALLEY"))).unwrap(),
        "2B6A3B"
    );
}

#[test]
fn unknown_route_color_is_fatal() {
    let ets = EtsLrt::new();
    let err = ets
        .provide_missing_route_color(&route("9", Some("Airport")))
        .unwrap_err();
    match err {
        FeedViolation::UnknownRouteColor { route_id, .. } => assert_eq!(route_id, "9"),
        other => panic!("unexpected violation: {other:?}"),
    }
}

#[test]
fn color_map_totality() {
    let ets = EtsLrt::new();
    let known = ["4895D0", "DB1E32", "2B6A3B"];
    for short_name in ["500", "501", "502", "503", "504", "Capital", "metro", "Valley", "X"] {
        match ets.provide_missing_route_color(&route("r", Some(short_name))) {
            Ok(color) => assert!(known.contains(&color.as_str()), "got {color:?}"),
            Err(FeedViolation::UnknownRouteColor { .. }) => {}
            Err(other) => panic!("unexpected violation: {other:?}"),
        }
    }
}

#[test]
fn stop_codes_must_be_digits() {
    let ets = EtsLrt::new();
    assert_eq!(ets.stop_code(&stop("S1", Some("1234"))).unwrap(), "1234");

    for bad in [Some("A12"), Some(""), None] {
        let err = ets.stop_code(&stop("S1", bad)).unwrap_err();
        match err {
            FeedViolation::NonNumericStopCode { stop_id, .. } => assert_eq!(stop_id, "S1"),
            other => panic!("unexpected violation: {other:?}"),
        }
    }
}

#[test]
fn parallel_invocation_matches_serial() {
    let ets = EtsLrt::new();
    let inputs = [
        "Clareview LRT - Century Park",
        "Century Park LRT - Clareview",
        "Health Sciences LRT - NAIT",
        "Churchill Northbound",
    ];
    let serial: Vec<String> = inputs.iter().map(|s| ets.clean_trip_headsign(s)).collect();

    std::thread::scope(|scope| {
        let ets = &ets;
        let handles: Vec<_> = inputs
            .iter()
            .map(|s| scope.spawn(move || ets.clean_trip_headsign(s)))
            .collect();
        let parallel: Vec<String> = handles.into_iter().map(|h| h.join().unwrap()).collect();
        assert_eq!(parallel, serial);
    });
}
