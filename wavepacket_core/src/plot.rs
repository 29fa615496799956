//! Rendering collaborator for waveforms, spectra and frame sequences.
//!
//! Consumes the engine's outputs (an [`Evaluation`], a [`PowerSpectrum`] or a
//! [`FrameSet`]) and writes PNG charts. All file I/O of the crate lives here;
//! the engine itself only ever returns data.

use std::fs;
use std::path::{Path, PathBuf};

use ndarray::ArrayView1;
use plotters::prelude::*;

use crate::animate::FrameSet;
use crate::error::{PacketError, PacketResult};
use crate::evaluate::Evaluation;
use crate::spectral::PowerSpectrum;

const CHART_SIZE: (u32, u32) = (1000, 500);

/// Teal, the default waveform color.
pub const WAVEFORM_COLOR: RGBColor = RGBColor(0, 128, 128);
/// Crimson, the conventional spectrum color.
pub const SPECTRUM_COLOR: RGBColor = RGBColor(220, 20, 60);

/// Recognized rendering options.
///
/// Replaces an open-ended keyword-argument bag with an explicit struct;
/// unsupported combinations fail loudly in [`PlotOptions::validate`] instead
/// of being ignored.
#[derive(Debug, Clone, PartialEq)]
pub struct PlotOptions {
    /// Line color
    pub color: RGBColor,
    /// Symmetric y-range bound; `None` fits the data
    pub y_limit: Option<f64>,
    /// Whether to write the chart at all
    pub save: bool,
    /// Destination file, required when `save` is true
    pub output_path: Option<PathBuf>,
}

impl Default for PlotOptions {
    fn default() -> Self {
        Self {
            color: WAVEFORM_COLOR,
            y_limit: None,
            save: false,
            output_path: None,
        }
    }
}

impl PlotOptions {
    /// Options that save to `path` with default styling.
    pub fn save_to(path: impl Into<PathBuf>) -> Self {
        Self {
            save: true,
            output_path: Some(path.into()),
            ..Self::default()
        }
    }

    /// Check option combinations.
    ///
    /// # Errors
    /// * `MissingOutputPath` when `save` is true without a destination.
    pub fn validate(&self) -> PacketResult<()> {
        if self.save && self.output_path.is_none() {
            return Err(PacketError::MissingOutputPath);
        }
        Ok(())
    }
}

/// Render an evaluated waveform as a line chart.
///
/// `sweep` must be the sample coordinates the evaluation was produced from.
/// With `save` disabled this validates and returns without writing, letting
/// callers reuse one options value for dry runs.
pub fn render_waveform(
    sweep: ArrayView1<'_, f64>,
    evaluation: &Evaluation,
    options: &PlotOptions,
) -> PacketResult<()> {
    options.validate()?;
    let Some(path) = options.output_path.as_deref().filter(|_| options.save) else {
        return Ok(());
    };
    let series: Vec<(f64, f64)> = sweep
        .iter()
        .copied()
        .zip(evaluation.samples.iter().copied())
        .collect();
    line_chart(
        path,
        &evaluation.annotation,
        evaluation.axis_label,
        "Amplitude (a.u.)",
        &series,
        options.color,
        options.y_limit,
    )
}

/// Render a power spectrum as a line chart over its frequency bins.
pub fn render_power_spectrum(
    spectrum: &PowerSpectrum,
    title: &str,
    options: &PlotOptions,
) -> PacketResult<()> {
    options.validate()?;
    let Some(path) = options.output_path.as_deref().filter(|_| options.save) else {
        return Ok(());
    };
    let series: Vec<(f64, f64)> = spectrum
        .frequencies
        .iter()
        .copied()
        .zip(spectrum.powers.iter().copied())
        .collect();
    line_chart(
        path,
        title,
        "f (Hz)",
        "Power (a.u.)",
        &series,
        options.color,
        options.y_limit,
    )
}

/// Export a frame sequence as numbered PNGs under `directory`.
///
/// Every frame shares the y-range fixed by the set's peak amplitude, so the
/// resulting images assemble into a stable animation. Returns the written
/// paths in frame order.
pub fn render_frames(
    set: &FrameSet,
    positions: ArrayView1<'_, f64>,
    directory: &Path,
    color: RGBColor,
) -> PacketResult<Vec<PathBuf>> {
    fs::create_dir_all(directory).map_err(render_err)?;
    let y_limit = if set.peak_amplitude > 0.0 {
        set.peak_amplitude
    } else {
        1.0
    };
    let mut written = Vec::with_capacity(set.len());
    for (index, frame) in set.frames.iter().enumerate() {
        let path = directory.join(format!("frame_{:04}.png", index));
        let series: Vec<(f64, f64)> = positions
            .iter()
            .copied()
            .zip(frame.waveform.iter().copied())
            .collect();
        line_chart(
            &path,
            &format!("Wave packet at t = {:.3} s", frame.time),
            "x (m)",
            "Amplitude (a.u.)",
            &series,
            color,
            Some(y_limit),
        )?;
        written.push(path);
    }
    Ok(written)
}

fn line_chart(
    path: &Path,
    title: &str,
    x_label: &str,
    y_label: &str,
    series: &[(f64, f64)],
    color: RGBColor,
    y_limit: Option<f64>,
) -> PacketResult<()> {
    if series.is_empty() {
        return Err(PacketError::render("cannot draw an empty sample set"));
    }
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(render_err)?;
    }

    let (x_range, y_range) = chart_ranges(series, y_limit);
    let root = BitMapBackend::new(path, CHART_SIZE).into_drawing_area();
    root.fill(&WHITE).map_err(render_err)?;

    let mut chart = ChartBuilder::on(&root)
        .caption(title, ("sans-serif", 24))
        .margin(10)
        .x_label_area_size(40)
        .y_label_area_size(60)
        .build_cartesian_2d(x_range, y_range)
        .map_err(render_err)?;
    chart
        .configure_mesh()
        .x_desc(x_label)
        .y_desc(y_label)
        .draw()
        .map_err(render_err)?;
    chart
        .draw_series(LineSeries::new(series.iter().copied(), &color))
        .map_err(render_err)?;
    root.present().map_err(render_err)?;
    Ok(())
}

fn chart_ranges(
    series: &[(f64, f64)],
    y_limit: Option<f64>,
) -> (std::ops::Range<f64>, std::ops::Range<f64>) {
    let mut x_min = f64::INFINITY;
    let mut x_max = f64::NEG_INFINITY;
    let mut y_min = f64::INFINITY;
    let mut y_max = f64::NEG_INFINITY;
    for &(x, y) in series {
        x_min = x_min.min(x);
        x_max = x_max.max(x);
        y_min = y_min.min(y);
        y_max = y_max.max(y);
    }
    if x_min == x_max {
        x_min -= 0.5;
        x_max += 0.5;
    }
    let y_range = match y_limit {
        Some(limit) => -limit.abs()..limit.abs(),
        None => {
            if y_min == y_max {
                y_min -= 1.0;
                y_max += 1.0;
            }
            let pad = 0.05 * (y_max - y_min);
            (y_min - pad)..(y_max + pad)
        }
    };
    (x_min..x_max, y_range)
}

fn render_err<E: std::fmt::Display>(err: E) -> PacketError {
    PacketError::render(err.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    fn test_save_without_path_fails() {
        let options = PlotOptions {
            save: true,
            ..PlotOptions::default()
        };
        assert_eq!(options.validate().unwrap_err(), PacketError::MissingOutputPath);
    }

    #[test]
    fn test_default_options_validate() {
        assert!(PlotOptions::default().validate().is_ok());
    }

    #[test]
    fn test_unsaved_render_is_a_no_op() {
        let evaluation = Evaluation {
            samples: array![0.0, 1.0],
            axis_label: "x (m)",
            annotation: "Wave packet at t = 0 s".to_string(),
        };
        let sweep = array![0.0, 1.0];
        render_waveform(sweep.view(), &evaluation, &PlotOptions::default()).unwrap();
    }

    #[test]
    fn test_chart_ranges_respect_limit() {
        let series = [(0.0, -3.0), (1.0, 2.0)];
        let (_, y) = chart_ranges(&series, Some(5.0));
        assert_eq!(y, -5.0..5.0);
    }

    #[test]
    fn test_chart_ranges_pad_degenerate_data() {
        let series = [(2.0, 1.0)];
        let (x, y) = chart_ranges(&series, None);
        assert!(x.start < x.end);
        assert!(y.start < 1.0 && y.end > 1.0);
    }
}
