use farebox::{
    agency::{AgencyPolicy, ets_lrt::EtsLrt},
    gtfs::{Config, GtfsReader},
    pipeline::Pipeline,
};
use std::{path::PathBuf, time::Instant};
use tracing::{error, info};

fn main() {
    tracing_subscriber::fmt().init();

    let args: Vec<_> = std::env::args().collect();
    if args.len() < 3 {
        error!("Usage: farebox <gtfs zip or directory> <output directory>");
        std::process::exit(1);
    }
    let input = PathBuf::from(&args[1]);
    let out_dir = PathBuf::from(&args[2]);

    let reader = GtfsReader::new(Config::default()).from_path(input);
    let pipeline = Pipeline::new(EtsLrt::new());

    info!("Normalizing {} feed...", pipeline.policy().agency_name());
    let now = Instant::now();
    let dataset = match pipeline.run(&reader, &out_dir) {
        Ok(dataset) => dataset,
        Err(err) => {
            error!("{err}");
            std::process::exit(1);
        }
    };
    info!(
        "Wrote {} routes, {} stops, {} trips in {:?}",
        dataset.routes.len(),
        dataset.stops.len(),
        dataset.trips.len(),
        now.elapsed()
    );
}
