use crate::{
    agency::{AgencyPolicy, FeedViolation},
    gtfs::{
        self, GtfsReader,
        models::{GtfsRoute, GtfsStop, GtfsTrip},
    },
};
use rayon::prelude::*;
use std::{collections::HashMap, io, path::Path, time::Instant};
use thiserror::Error;
use tracing::{debug, warn};

mod direction;
mod models;
mod writer;
pub use models::*;

#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
    #[error("Feed error: {0}")]
    Gtfs(#[from] gtfs::Error),
    #[error("Csv error: {0}")]
    Csv(#[from] csv::Error),
    #[error(transparent)]
    Violation(#[from] FeedViolation),
    #[error("route id {0:?} does not reduce to a numeric id")]
    UnparsableRouteId(String),
}

/// The host: consults an [`AgencyPolicy`] for every raw record and turns a
/// feed into a display-ready [`Dataset`].
pub struct Pipeline<P> {
    policy: P,
}

impl<P: AgencyPolicy> Pipeline<P> {
    pub fn new(policy: P) -> Self {
        Self { policy }
    }

    pub fn policy(&self) -> &P {
        &self.policy
    }

    /// Builds the normalized dataset and writes it out in one go.
    pub fn run(&self, reader: &GtfsReader, out_dir: &Path) -> Result<Dataset, Error> {
        let dataset = self.build(reader)?;
        writer::write_dataset(&dataset, out_dir)?;
        Ok(dataset)
    }

    pub fn build(&self, reader: &GtfsReader) -> Result<Dataset, Error> {
        self.check_agency(reader)?;
        let (routes, route_id_map) = self.build_routes(reader)?;
        let stops = self.build_stops(reader)?;
        let trips = self.build_trips(reader, &route_id_map)?;

        Ok(Dataset {
            agency: Agency {
                agency_id: self.policy.agency_id().to_string(),
                agency_name: self.policy.agency_name().to_string(),
                route_type: self.policy.agency_route_type().gtfs_code(),
            },
            routes,
            stops,
            trips,
        })
    }

    fn check_agency(&self, reader: &GtfsReader) -> Result<(), Error> {
        let policy_id = self.policy.agency_id();
        let mut found = false;
        reader.stream_agencies(|(_, agency)| {
            // A feed that omits agency_id is single-agency by definition.
            if agency.agency_id.as_deref().is_none_or(|id| id == policy_id) {
                found = true;
            }
        })?;
        if !found {
            warn!("Agency {policy_id} not present in the feed agency table");
        }
        Ok(())
    }

    fn build_routes(
        &self,
        reader: &GtfsReader,
    ) -> Result<(Vec<Route>, HashMap<String, u64>), Error> {
        debug!("Loading routes...");
        let now = Instant::now();
        let mut raw: Vec<GtfsRoute> = Vec::new();
        reader.stream_routes(|(_, route)| raw.push(route))?;

        let before = raw.len();
        if self.policy.default_exclude_enabled() {
            let policy_id = self.policy.agency_id();
            raw.retain(|route| route.agency_id.as_deref().is_none_or(|id| id == policy_id));
        }
        if raw.len() != before {
            debug!(
                "Excluded {} routes outside agency {}",
                before - raw.len(),
                self.policy.agency_id()
            );
        }

        let mut routes = Vec::with_capacity(raw.len());
        let mut route_id_map = HashMap::with_capacity(raw.len());
        for route in &raw {
            let route_id = self.canonical_route_id(route)?;
            routes.push(Route {
                route_id,
                short_name: self.policy.route_short_name(route),
                long_name: self
                    .policy
                    .clean_route_long_name(route.route_long_name.as_deref().unwrap_or("")),
                color: self.route_color(route)?,
                route_type: self.policy.agency_route_type().gtfs_code(),
            });
            route_id_map.insert(route.route_id.clone(), route_id);
        }
        debug!("Loading routes took {:?}", now.elapsed());
        Ok((routes, route_id_map))
    }

    fn canonical_route_id(&self, route: &GtfsRoute) -> Result<u64, Error> {
        let source = if self.policy.use_route_short_name_for_route_id() {
            self.policy.route_short_name(route)
        } else {
            route.route_id.clone()
        };
        numeric_route_id(&source).ok_or(Error::UnparsableRouteId(source))
    }

    fn route_color(&self, route: &GtfsRoute) -> Result<String, Error> {
        match route.route_color.as_deref().filter(|c| !c.is_empty()) {
            Some(color) => Ok(color.to_uppercase()),
            None if self.policy.default_agency_color_enabled() => {
                Ok(self.policy.provide_missing_route_color(route)?)
            }
            None => Ok(String::new()),
        }
    }

    fn build_stops(&self, reader: &GtfsReader) -> Result<Vec<Stop>, Error> {
        debug!("Loading stops...");
        let now = Instant::now();
        let mut raw: Vec<GtfsStop> = Vec::new();
        reader.stream_stops(|(_, stop)| raw.push(stop))?;

        let stops = raw
            .par_iter()
            .map(|stop| {
                Ok(Stop {
                    stop_id: stop.stop_id.clone(),
                    stop_code: self.policy.stop_code(stop)?,
                    name: self.policy.clean_stop_name(&stop.stop_name),
                    lat: stop.stop_lat,
                    lon: stop.stop_lon,
                })
            })
            .collect::<Result<Vec<_>, FeedViolation>>()?;
        debug!("Loading stops took {:?}", now.elapsed());
        Ok(stops)
    }

    fn build_trips(
        &self,
        reader: &GtfsReader,
        route_id_map: &HashMap<String, u64>,
    ) -> Result<Vec<Trip>, Error> {
        debug!("Loading trips...");
        let now = Instant::now();
        let mut raw: Vec<GtfsTrip> = Vec::new();
        reader.stream_trips(|(_, trip)| raw.push(trip))?;

        // Trips of excluded routes fall out with their route.
        let mut trips: Vec<Trip> = raw
            .par_iter()
            .filter_map(|trip| {
                let route_id = route_id_map.get(&trip.route_id)?;
                Some(Trip {
                    trip_id: trip.trip_id.clone(),
                    route_id: *route_id,
                    headsign: self
                        .policy
                        .clean_trip_headsign(trip.trip_headsign.as_deref().unwrap_or("")),
                    direction: trip.direction_id,
                })
            })
            .collect();

        if self.policy.direction_finder_enabled() {
            direction::infer_directions(&mut trips);
        }
        debug!("Loading trips took {:?}", now.elapsed());
        Ok(trips)
    }
}

fn numeric_route_id(source: &str) -> Option<u64> {
    let digits: String = source.chars().take_while(|c| c.is_ascii_digit()).collect();
    if digits.is_empty() {
        return None;
    }
    let base: u64 = digits.parse().ok()?;
    let rest = &source[digits.len()..];
    let mut rest_chars = rest.chars();
    match (rest_chars.next(), rest_chars.next()) {
        // Plain numeric id.
        (None, _) => Some(base),
        // One trailing letter maps into a disjoint block, so 21R and 21
        // never collide.
        (Some(letter), None) if letter.is_ascii_alphabetic() => {
            let letter = letter.to_ascii_uppercase();
            Some(base + 1_000_000 * (letter as u64 - 'A' as u64 + 1))
        }
        _ => None,
    }
}

#[test]
fn numeric_route_ids() {
    assert_eq!(numeric_route_id("501"), Some(501));
    assert_eq!(numeric_route_id("21R"), Some(21 + 18_000_000));
    assert_eq!(numeric_route_id("21r"), Some(21 + 18_000_000));
    assert_eq!(numeric_route_id("R21"), None);
    assert_eq!(numeric_route_id(""), None);
}
