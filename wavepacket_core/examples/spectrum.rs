use std::error::Error;

use ndarray::{array, Array1};

use wavepacket_core::logging;
use wavepacket_core::plot::{self, SPECTRUM_COLOR};
use wavepacket_core::{Dispersion, PlotOptions, WavePacket};

/// Three-tone packet whose spectrum should show exactly three peaks.
fn main() -> Result<(), Box<dyn Error>> {
    let packet = WavePacket::new(
        array![0.5, 1.25, 2.0],
        array![1.0, 0.6, 0.3],
        Dispersion::Quadratic { c: 1.0 },
    )?;

    // 4096 samples at 64 Hz: bin width ~0.0156 Hz
    let times: Array1<f64> = (0..4096).map(|j| j as f64 / 64.0).collect();
    let spectrum = packet.power_spectrum(times.view(), 0.0)?;
    logging::log_spectrum(&spectrum)?;

    if let Some(frequency) = spectrum.dominant_frequency() {
        println!("Dominant frequency: {:.4} Hz", frequency);
    }

    let options = PlotOptions {
        color: SPECTRUM_COLOR,
        save: true,
        output_path: Some("out/power_spectrum.png".into()),
        ..PlotOptions::default()
    };
    plot::render_power_spectrum(&spectrum, "Power spectrum at x = 0 m", &options)?;
    println!("Wrote out/power_spectrum.png ({} bins)", spectrum.len());
    Ok(())
}
