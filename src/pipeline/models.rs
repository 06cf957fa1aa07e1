use serde::Serialize;

/// The display-ready dataset produced by one pipeline run.
#[derive(Debug, Default, Clone)]
pub struct Dataset {
    pub agency: Agency,
    pub routes: Vec<Route>,
    pub stops: Vec<Stop>,
    pub trips: Vec<Trip>,
}

/// Agency identity as declared by the policy, not the feed.
#[derive(Debug, Default, Clone, Serialize)]
pub struct Agency {
    pub agency_id: String,
    pub agency_name: String,
    pub route_type: i32,
}

#[derive(Debug, Default, Clone, Serialize)]
pub struct Route {
    /// Canonical numeric identifier derived by the host.
    pub route_id: u64,
    /// Byte-for-byte what the policy emitted; real-time consumers key by it.
    pub short_name: String,
    pub long_name: String,
    /// Six uppercase hex characters, no prefix.
    pub color: String,
    pub route_type: i32,
}

#[derive(Debug, Default, Clone, Serialize)]
pub struct Stop {
    pub stop_id: String,
    pub stop_code: String,
    pub name: String,
    pub lat: Option<f64>,
    pub lon: Option<f64>,
}

#[derive(Debug, Default, Clone, Serialize)]
pub struct Trip {
    pub trip_id: String,
    pub route_id: u64,
    pub headsign: String,
    /// 0 outbound, 1 inbound, unset when it cannot be determined.
    pub direction: Option<u8>,
}
