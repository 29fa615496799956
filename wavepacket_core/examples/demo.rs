use std::error::Error;
use std::path::Path;
use std::time::Instant;

use ndarray::Array1;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rand_distr::{Distribution, Triangular};

use wavepacket_core::logging;
use wavepacket_core::plot::{self, WAVEFORM_COLOR};
use wavepacket_core::{
    ComponentOrder, EvalRequest, PlotOptions, SessionConfig, StderrProgress, WavePacket,
};

fn main() -> Result<(), Box<dyn Error>> {
    let config = load_config();
    println!(
        "Loaded config: {} components, seed {}, '{}' dispersion",
        config.components, config.seed, config.relation
    );

    let (frequencies, amplitudes) = sample_spectrum(&config);
    let packet = WavePacket::new(frequencies, amplitudes, config.dispersion()?)?;

    println!("Strongest components:");
    for component in packet
        .components(ComponentOrder::AmplitudeDescending)?
        .iter()
        .take(10)
    {
        println!(
            "  {:>8.4} Hz  {:>8.4} a.u.",
            component.frequency, component.amplitude
        );
    }

    let positions = Array1::linspace(
        -config.position_span,
        config.position_span,
        config.position_samples,
    );
    let started = Instant::now();
    let request = EvalRequest::along_position(positions.clone(), 0.0);
    let evaluation = packet.evaluate(&request)?;
    logging::log_synthesis(
        "evaluate_position",
        packet.len(),
        evaluation.samples.len(),
        started.elapsed(),
    )?;

    let options = PlotOptions::save_to("out/wave_packet.png");
    plot::render_waveform(positions.view(), &evaluation, &options)?;
    println!("Wrote out/wave_packet.png");

    let frames =
        packet.generate_frames_observed(2.0, 0.05, positions.view(), &StderrProgress)?;
    let written = plot::render_frames(
        &frames,
        positions.view(),
        Path::new("out/frames"),
        WAVEFORM_COLOR,
    )?;
    println!(
        "Wrote {} frames to out/frames (peak amplitude {:.4})",
        written.len(),
        frames.peak_amplitude
    );
    Ok(())
}

fn load_config() -> SessionConfig {
    SessionConfig::load_from_file("config/session.toml").unwrap_or_else(|err| {
        eprintln!("Falling back to default config: {err}");
        SessionConfig::default()
    })
}

/// Draw a random spectrum: triangular frequency density over the configured
/// band, amplitudes following p_f(A) = A on [0, √f] via inverse sampling.
fn sample_spectrum(config: &SessionConfig) -> (Array1<f64>, Array1<f64>) {
    let mut rng = StdRng::seed_from_u64(config.seed);
    let mode = (config.frequency_span * 2.0 / 3.0).min(config.frequency_span);
    let triangular =
        Triangular::new(0.0, config.frequency_span, mode).expect("valid triangular support");
    let frequencies: Array1<f64> = (0..config.components)
        .map(|_| triangular.sample(&mut rng))
        .collect();
    let amplitudes = frequencies.mapv(|f| (f * rng.gen::<f64>()).sqrt());
    (frequencies, amplitudes)
}
