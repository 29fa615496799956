//! JSON line-delimited run logging.
//!
//! Appends one JSON object per synthesis or spectrum run under `logs/`, so a
//! session's work can be replayed or audited without a logging framework.

use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::Path;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use serde::Serialize;

use crate::spectral::PowerSpectrum;

fn log_dir() -> io::Result<()> {
    fs::create_dir_all("logs")
}

fn append_json_line<P: AsRef<Path>, T: Serialize>(path: P, value: &T) -> io::Result<()> {
    let mut file = OpenOptions::new().create(true).append(true).open(path)?;
    serde_json::to_writer(&mut file, value)
        .map_err(|err| io::Error::new(io::ErrorKind::Other, err))?;
    file.write_all(b"\n")
}

fn timestamp_ms() -> u128 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_millis()
}

#[derive(Debug, Serialize)]
pub struct SynthesisLogEntry {
    pub operation: String,
    pub components: usize,
    pub samples: usize,
    pub elapsed_ms: u128,
    pub timestamp_ms: u128,
}

pub fn log_synthesis(
    operation: &str,
    components: usize,
    samples: usize,
    elapsed: Duration,
) -> io::Result<()> {
    log_dir()?;
    let entry = SynthesisLogEntry {
        operation: operation.to_string(),
        components,
        samples,
        elapsed_ms: elapsed.as_millis(),
        timestamp_ms: timestamp_ms(),
    };
    append_json_line("logs/synthesis.jsonl", &entry)
}

#[derive(Debug, Serialize)]
pub struct SpectrumLogEntry {
    pub bins: usize,
    pub dominant_frequency: Option<f64>,
    pub peak_power: Option<f64>,
    pub timestamp_ms: u128,
}

pub fn log_spectrum(spectrum: &PowerSpectrum) -> io::Result<()> {
    log_dir()?;
    let entry = SpectrumLogEntry {
        bins: spectrum.len(),
        dominant_frequency: spectrum.dominant_frequency(),
        peak_power: spectrum.dominant_bin().map(|bin| spectrum.powers[bin]),
        timestamp_ms: timestamp_ms(),
    };
    append_json_line("logs/spectrum.jsonl", &entry)
}
