use super::models::{Agency, Dataset, Route, Stop, Trip};
use std::{fs, path::Path};
use tracing::info;

pub fn write_dataset(dataset: &Dataset, out_dir: &Path) -> Result<(), super::Error> {
    fs::create_dir_all(out_dir)?;
    write_agency(out_dir, &dataset.agency)?;
    write_routes(out_dir, &dataset.routes)?;
    write_stops(out_dir, &dataset.stops)?;
    write_trips(out_dir, &dataset.trips)?;
    Ok(())
}

fn write_agency(out_dir: &Path, agency: &Agency) -> Result<(), super::Error> {
    info!("Writing agency.txt");
    let mut wtr = csv::Writer::from_path(out_dir.join("agency.txt"))?;
    wtr.serialize(agency)?;
    wtr.flush()?;
    Ok(())
}

fn write_routes(out_dir: &Path, routes: &[Route]) -> Result<(), super::Error> {
    info!("Writing routes.txt");
    let mut wtr = csv::Writer::from_path(out_dir.join("routes.txt"))?;
    for route in routes {
        wtr.serialize(route)?;
    }
    wtr.flush()?;
    Ok(())
}

fn write_stops(out_dir: &Path, stops: &[Stop]) -> Result<(), super::Error> {
    info!("Writing stops.txt");
    let mut wtr = csv::Writer::from_path(out_dir.join("stops.txt"))?;
    for stop in stops {
        wtr.serialize(stop)?;
    }
    wtr.flush()?;
    Ok(())
}

fn write_trips(out_dir: &Path, trips: &[Trip]) -> Result<(), super::Error> {
    info!("Writing trips.txt");
    let mut wtr = csv::Writer::from_path(out_dir.join("trips.txt"))?;
    for trip in trips {
        wtr.serialize(trip)?;
    }
    wtr.flush()?;
    Ok(())
}
