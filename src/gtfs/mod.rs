use csv::Reader;
use serde::de::DeserializeOwned;
use std::{
    fs::File,
    io::{self, Read},
    path::{Path, PathBuf},
};
use thiserror::Error;
use tracing::warn;
use zip::{ZipArchive, read::ZipFile};

mod config;
pub mod models;
pub use config::*;
use models::*;

#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
    #[error("Zip error: {0}")]
    Zip(#[from] zip::result::ZipError),
    #[error("Csv error: {0}")]
    Csv(#[from] csv::Error),
    #[error("Could not find file with name: {0}")]
    FileNotFound(String),
}

#[derive(Default)]
pub enum StorageType {
    #[default]
    None,
    Zip(PathBuf),
    Dir(PathBuf),
}

/// Streams raw feed records out of a GTFS archive or an unpacked feed
/// directory, one file at a time.
#[derive(Default)]
pub struct GtfsReader {
    config: Config,
    storage: StorageType,
}

impl GtfsReader {
    pub fn new(config: self::Config) -> Self {
        Self {
            config,
            storage: Default::default(),
        }
    }

    pub fn from_zip(mut self, path: PathBuf) -> Self {
        self.storage = StorageType::Zip(path);
        self
    }

    pub fn from_dir(mut self, path: PathBuf) -> Self {
        self.storage = StorageType::Dir(path);
        self
    }

    /// Picks zip or directory storage from what the path points at.
    pub fn from_path(self, path: PathBuf) -> Self {
        if path.is_dir() {
            self.from_dir(path)
        } else {
            self.from_zip(path)
        }
    }

    pub fn stream_agencies<F>(&self, f: F) -> Result<(), self::Error>
    where
        F: FnMut((usize, GtfsAgency)),
    {
        self.stream(&self.config.agency_path, f)
    }

    pub fn stream_routes<F>(&self, f: F) -> Result<(), self::Error>
    where
        F: FnMut((usize, GtfsRoute)),
    {
        self.stream(&self.config.routes_path, f)
    }

    pub fn stream_stops<F>(&self, f: F) -> Result<(), self::Error>
    where
        F: FnMut((usize, GtfsStop)),
    {
        self.stream(&self.config.stops_path, f)
    }

    pub fn stream_trips<F>(&self, f: F) -> Result<(), self::Error>
    where
        F: FnMut((usize, GtfsTrip)),
    {
        self.stream(&self.config.trips_path, f)
    }

    fn stream<T, F>(&self, file_name: &str, f: F) -> Result<(), self::Error>
    where
        T: DeserializeOwned,
        F: FnMut((usize, T)),
    {
        match &self.storage {
            StorageType::None => Ok(()),
            StorageType::Zip(path) => stream_from_zip::<T, F>(path, file_name, f),
            StorageType::Dir(path) => stream_from_dir::<T, F>(path, file_name, f),
        }
    }
}

fn stream_from_zip<T, F>(zip_path: &PathBuf, file_name: &str, f: F) -> Result<(), self::Error>
where
    T: DeserializeOwned,
    F: FnMut((usize, T)),
{
    let zip_file = File::open(zip_path)?;
    let mut archive = ZipArchive::new(zip_file)?;
    let file = get_file(&mut archive, file_name)?;
    let mut reader = csv::Reader::from_reader(file);
    read_rows(&mut reader, file_name, f)
}

fn stream_from_dir<T, F>(dir: &Path, file_name: &str, f: F) -> Result<(), self::Error>
where
    T: DeserializeOwned,
    F: FnMut((usize, T)),
{
    let path = dir.join(file_name);
    if !path.is_file() {
        return Err(self::Error::FileNotFound(file_name.to_string()));
    }
    let mut reader = csv::Reader::from_path(path)?;
    read_rows(&mut reader, file_name, f)
}

fn read_rows<R, T, F>(reader: &mut Reader<R>, file_name: &str, mut f: F) -> Result<(), self::Error>
where
    R: Read,
    T: DeserializeOwned,
    F: FnMut((usize, T)),
{
    reader
        .deserialize()
        .enumerate()
        .filter_map(|(i, row)| match row {
            Ok(value) => Some((i, value)),
            Err(err) => {
                warn!("Skipping row {i} of {file_name}: {err}");
                None
            }
        })
        .for_each(|pair| f(pair));
    Ok(())
}

fn get_file<'a>(
    archive: &'a mut ZipArchive<File>,
    name: &'a str,
) -> Result<ZipFile<'a, File>, self::Error> {
    let index = archive
        .index_for_name(name)
        .ok_or(self::Error::FileNotFound(name.to_string()))?;
    let file = archive.by_index(index)?;
    Ok(file)
}
