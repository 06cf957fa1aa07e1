use crate::agency::{AgencyPolicy, FeedViolation, RouteType};
use crate::gtfs::models::{GtfsRoute, GtfsStop};
use crate::shared::text::{self, Cleaner, match_words};

const AGENCY_ID: &str = "1"; // Edmonton Transit Service only
const AGENCY_NAME: &str = "ETS";

const RSN_CAPITAL_LINE: &str = "Capital";
const RSN_METRO_LINE: &str = "Metro";
const RSN_VALLEY_LINE: &str = "Valley";

// https://www.edmonton.ca/ets/lrt-station-locations
const COLOR_CAPITAL_LINE: &str = "4895D0"; // blue
const COLOR_METRO_LINE: &str = "DB1E32"; // red
const COLOR_VALLEY_LINE: &str = "2B6A3B"; // green

/// Edmonton Transit Service light rail.
///
/// Feed route ids double as the emitted short names because the real-time
/// provider keys by them; the human-readable line name lives in the
/// long-name slot instead.
pub struct EtsLrt {
    starts_with_lrt: Cleaner,
    headsign_lrt_prefix: Cleaner,
    ends_with_station_stop: Cleaner,
    edmonton: Cleaner,
}

impl EtsLrt {
    pub fn new() -> Self {
        Self {
            starts_with_lrt: Cleaner::case_insensitive(r"^lrt ", ""),
            headsign_lrt_prefix: Cleaner::case_insensitive(r"^.+\s+lrt\s*-\s*", ""),
            ends_with_station_stop: Cleaner::case_insensitive(
                r"(?:\s*(?:station|stop))+\s*$",
                "",
            ),
            edmonton: Cleaner::case_insensitive(&match_words("edmonton"), "Edm"),
        }
    }
}

impl Default for EtsLrt {
    fn default() -> Self {
        Self::new()
    }
}

impl AgencyPolicy for EtsLrt {
    fn agency_name(&self) -> &str {
        AGENCY_NAME
    }

    fn agency_id(&self) -> &str {
        AGENCY_ID
    }

    fn agency_route_type(&self) -> RouteType {
        RouteType::LightRail
    }

    fn default_exclude_enabled(&self) -> bool {
        true
    }

    fn default_route_id_enabled(&self) -> bool {
        true
    }

    fn use_route_short_name_for_route_id(&self) -> bool {
        false
    }

    fn default_agency_color_enabled(&self) -> bool {
        true
    }

    fn direction_finder_enabled(&self) -> bool {
        true
    }

    fn route_short_name(&self, route: &GtfsRoute) -> String {
        // Route id string kept verbatim, used by the real-time provider.
        route.route_id.clone()
    }

    fn clean_route_long_name(&self, name: &str) -> String {
        let name = self.starts_with_lrt.clean(name);
        text::clean_label(&name)
    }

    fn provide_missing_route_color(&self, route: &GtfsRoute) -> Result<String, FeedViolation> {
        let rsn = route.route_short_name.as_deref().unwrap_or("");
        if text::is_digits_only(rsn) {
            if let Ok(n) = rsn.parse::<u32>() {
                match n {
                    501 => return Ok(COLOR_CAPITAL_LINE.into()), // 21R
                    502 => return Ok(COLOR_METRO_LINE.into()),   // 22R
                    503 => return Ok(COLOR_VALLEY_LINE.into()),  // 23R
                    _ => {}
                }
            }
        }
        if rsn.eq_ignore_ascii_case(RSN_CAPITAL_LINE) {
            Ok(COLOR_CAPITAL_LINE.into())
        } else if rsn.eq_ignore_ascii_case(RSN_METRO_LINE) {
            Ok(COLOR_METRO_LINE.into())
        } else if rsn.eq_ignore_ascii_case(RSN_VALLEY_LINE) {
            Ok(COLOR_VALLEY_LINE.into())
        } else {
            Err(FeedViolation::UnknownRouteColor {
                route_id: route.route_id.clone(),
                route: format!("{route:?}"),
            })
        }
    }

    fn clean_trip_headsign(&self, headsign: &str) -> String {
        let headsign = self.headsign_lrt_prefix.clean(headsign);
        let headsign = text::clean_bounds(&headsign);
        let headsign = text::clean_street_types(&headsign);
        text::clean_label(&headsign)
    }

    fn clean_stop_name(&self, name: &str) -> String {
        let name = self.ends_with_station_stop.clean(name);
        let name = self.edmonton.clean(&name);
        let name = text::clean_street_types(&name);
        let name = text::clean_numbers(&name);
        text::clean_label(&name)
    }

    fn stop_code(&self, stop: &GtfsStop) -> Result<String, FeedViolation> {
        let code = stop.stop_code.as_deref().unwrap_or("");
        if !text::is_digits_only(code) {
            return Err(FeedViolation::NonNumericStopCode {
                stop_id: stop.stop_id.clone(),
                code: code.to_string(),
            });
        }
        // Kept unchanged, used by the real-time provider.
        Ok(code.to_string())
    }
}
