use std::fs::{self, File};
use std::io::Write;
use std::path::Path;

use serde::Serialize;
use tracing::info;

use crate::errors::LoadError;
use crate::simulation::HeatingHistory;

#[derive(Debug, Serialize)]
struct OutputRow {
    time_s: f64,
    altitude_m: f64,
    velocity_m_s: f64,
    ambient_temperature_k: f64,
    q_convective_w_m2: f64,
    q_radiative_w_m2: f64,
    surface_temperature_k: f64,
}

/// Writes the heating history as CSV, one row per trajectory sample.
pub fn write_history<W: Write>(writer: W, history: &HeatingHistory) -> Result<(), LoadError> {
    let mut writer = csv::Writer::from_writer(writer);
    for ((record, kinematics), &altitude) in history
        .records
        .iter()
        .zip(&history.kinematics)
        .zip(&history.altitudes)
    {
        writer.serialize(OutputRow {
            time_s: record.time,
            altitude_m: altitude,
            velocity_m_s: kinematics.velocity,
            ambient_temperature_k: record.ambient_temperature,
            q_convective_w_m2: record.q_convective,
            q_radiative_w_m2: record.q_radiative,
            surface_temperature_k: record.surface_temperature,
        })?;
    }
    writer.flush()?;
    Ok(())
}

pub fn save_history<P: AsRef<Path>>(path: P, history: &HeatingHistory) -> Result<(), LoadError> {
    let path = path.as_ref();
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    write_history(File::create(path)?, history)?;
    info!("Wrote {} rows to {:?}", history.len(), path);
    Ok(())
}
