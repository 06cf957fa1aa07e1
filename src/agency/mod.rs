use crate::gtfs::models::{GtfsRoute, GtfsStop};
use crate::shared::text;
use thiserror::Error;

pub mod ets_lrt;

/// A feed schema violation the pipeline is not allowed to paper over.
/// Surfaced to the host, which logs the offending record and aborts the run.
#[derive(Error, Debug)]
pub enum FeedViolation {
    #[error("no colour known for route {route_id} ({route})")]
    UnknownRouteColor { route_id: String, route: String },
    #[error("stop code {code:?} for stop {stop_id} is not a digit string")]
    NonNumericStopCode { stop_id: String, code: String },
}

/// The transit mode an agency operates, as coded in GTFS `route_type`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteType {
    LightRail,
    Subway,
    Rail,
    Bus,
    Ferry,
    CableCar,
    Gondola,
    Funicular,
}

impl RouteType {
    pub fn gtfs_code(&self) -> i32 {
        match self {
            RouteType::LightRail => 0,
            RouteType::Subway => 1,
            RouteType::Rail => 2,
            RouteType::Bus => 3,
            RouteType::Ferry => 4,
            RouteType::CableCar => 5,
            RouteType::Gondola => 6,
            RouteType::Funicular => 7,
        }
    }
}

/// The customization point of the pipeline: one policy object per agency,
/// constructed once per run and consulted for every record.
///
/// Every operation except the three identity accessors has a default body,
/// so an agency overrides only what it customizes. Implementations hold no
/// mutable state; the host may call them from many threads at once.
pub trait AgencyPolicy: Send + Sync {
    fn agency_name(&self) -> &str;

    fn agency_id(&self) -> &str;

    fn agency_route_type(&self) -> RouteType;

    /// When true the host drops routes whose feed agency id differs from
    /// [`AgencyPolicy::agency_id`].
    fn default_exclude_enabled(&self) -> bool {
        false
    }

    /// When true the host derives the canonical route identifier from its
    /// default numeric policy instead of trusting the feed.
    fn default_route_id_enabled(&self) -> bool {
        false
    }

    fn use_route_short_name_for_route_id(&self) -> bool {
        true
    }

    /// When true the host asks [`AgencyPolicy::provide_missing_route_color`]
    /// for routes the feed left colourless.
    fn default_agency_color_enabled(&self) -> bool {
        false
    }

    /// When true the host infers inbound/outbound directions from the set
    /// of cleaned headsigns per route.
    fn direction_finder_enabled(&self) -> bool {
        false
    }

    fn route_short_name(&self, route: &GtfsRoute) -> String {
        route.route_short_name.clone().unwrap_or_default()
    }

    fn clean_route_long_name(&self, name: &str) -> String {
        text::clean_label(name)
    }

    /// Called only for routes without a feed colour. The default policy
    /// knows no colours and fails the run.
    fn provide_missing_route_color(&self, route: &GtfsRoute) -> Result<String, FeedViolation> {
        Err(FeedViolation::UnknownRouteColor {
            route_id: route.route_id.clone(),
            route: format!("{route:?}"),
        })
    }

    fn clean_trip_headsign(&self, headsign: &str) -> String {
        text::clean_label(headsign)
    }

    fn clean_stop_name(&self, name: &str) -> String {
        text::clean_label(name)
    }

    fn stop_code(&self, stop: &GtfsStop) -> Result<String, FeedViolation> {
        Ok(stop.stop_code.clone().unwrap_or_default())
    }
}
