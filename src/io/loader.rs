use std::fs::File;
use std::io::Read;
use std::path::Path;
use std::str::FromStr;

use csv::{ReaderBuilder, StringRecord, Trim};
use tracing::info;

use crate::errors::LoadError;
use crate::trajectory_system::sample::Trajectory;

/// Selects a trajectory field by header name or zero-based column index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ColumnBinding {
    Index(usize),
    Name(String),
}

impl ColumnBinding {
    fn resolve(&self, headers: Option<&StringRecord>) -> Result<usize, LoadError> {
        match self {
            ColumnBinding::Index(index) => Ok(*index),
            ColumnBinding::Name(name) => headers
                .and_then(|headers| headers.iter().position(|header| header == name.as_str()))
                .ok_or_else(|| LoadError::MissingColumn(name.clone())),
        }
    }
}

impl FromStr for ColumnBinding {
    type Err = std::convert::Infallible;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Ok(match value.trim().parse::<usize>() {
            Ok(index) => ColumnBinding::Index(index),
            Err(_) => ColumnBinding::Name(value.trim().to_string()),
        })
    }
}

/// Column bindings for the three fields the heating model needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrajectoryColumns {
    pub time: ColumnBinding,
    pub altitude: ColumnBinding,
    pub mach: ColumnBinding,
    pub has_header: bool,
}

impl Default for TrajectoryColumns {
    /// Layout of the flight dynamics log: time, altitude and Mach in
    /// columns 0, 5 and 22 under a single header row.
    fn default() -> Self {
        TrajectoryColumns {
            time: ColumnBinding::Index(0),
            altitude: ColumnBinding::Index(5),
            mach: ColumnBinding::Index(22),
            has_header: true,
        }
    }
}

pub fn load_trajectory<P: AsRef<Path>>(
    path: P,
    columns: &TrajectoryColumns,
) -> Result<Trajectory, LoadError> {
    let path = path.as_ref();
    info!("Loading trajectory from {:?}", path);
    let file = File::open(path)?;
    read_trajectory(file, columns)
}

pub fn read_trajectory<R: Read>(
    reader: R,
    columns: &TrajectoryColumns,
) -> Result<Trajectory, LoadError> {
    let mut reader = ReaderBuilder::new()
        .has_headers(columns.has_header)
        .trim(Trim::All)
        .flexible(true)
        .comment(Some(b'#'))
        .from_reader(reader);

    let headers = if columns.has_header {
        Some(reader.headers()?.clone())
    } else {
        None
    };
    let time_column = columns.time.resolve(headers.as_ref())?;
    let altitude_column = columns.altitude.resolve(headers.as_ref())?;
    let mach_column = columns.mach.resolve(headers.as_ref())?;

    let mut time = Vec::new();
    let mut altitude = Vec::new();
    let mut mach = Vec::new();

    for (row, record) in reader.records().enumerate() {
        let record = record?;
        if record.iter().all(|field| field.is_empty()) {
            continue;
        }
        time.push(parse_field(&record, row, time_column)?);
        altitude.push(parse_field(&record, row, altitude_column)?);
        mach.push(parse_field(&record, row, mach_column)?);
    }

    info!("Loaded {} trajectory samples", time.len());
    Ok(Trajectory::from_series(&time, &altitude, &mach)?)
}

fn parse_field(record: &StringRecord, row: usize, column: usize) -> Result<f64, LoadError> {
    let value = record.get(column).unwrap_or("");
    value.parse::<f64>().map_err(|_| LoadError::InvalidValue {
        row,
        column,
        value: value.to_string(),
    })
}
