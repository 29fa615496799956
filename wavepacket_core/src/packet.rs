//! Wave-packet construction, component listing and waveform synthesis.
//!
//! A [`WavePacket`] is a superposition of cosine components. Each component i
//! contributes `A_i · cos(k_i·x − 2πf_i·t)`, where the wavenumber `k_i` comes
//! from the packet's dispersion relation. The packet is immutable after
//! construction and every operation is a pure `&self` query, so instances can
//! be shared freely across threads.

use std::cmp::Ordering;
use std::f64::consts::PI;

use ndarray::{Array1, ArrayView1};
use serde::{Deserialize, Serialize};

use crate::dispersion::Dispersion;
use crate::error::{PacketError, PacketResult};
use crate::progress::{Progress, Silent};

/// One (frequency, amplitude) pair of the packet's spectral content.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Component {
    /// Frequency in Hz
    pub frequency: f64,
    /// Amplitude in arbitrary units
    pub amplitude: f64,
}

/// Sort key for [`WavePacket::components`].
///
/// Unrecognized keys cannot exist: the listing contract is closed over these
/// two orders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ComponentOrder {
    /// Increasing frequency, ties by original index
    #[default]
    FrequencyAscending,
    /// Decreasing amplitude, ties by original index
    AmplitudeDescending,
}

/// Superposition of cosine waves with a dispersion relation.
#[derive(Debug, Clone)]
pub struct WavePacket {
    frequencies: Array1<f64>,
    amplitudes: Array1<f64>,
    dispersion: Dispersion,
}

impl WavePacket {
    /// Build a packet from parallel frequency/amplitude arrays and a
    /// dispersion relation with its parameters already bound.
    ///
    /// # Errors
    /// * `ShapeMismatch` when the arrays disagree in length.
    pub fn new(
        frequencies: Array1<f64>,
        amplitudes: Array1<f64>,
        dispersion: Dispersion,
    ) -> PacketResult<Self> {
        if frequencies.len() != amplitudes.len() {
            return Err(PacketError::shape_mismatch(
                frequencies.len(),
                amplitudes.len(),
            ));
        }
        Ok(Self {
            frequencies,
            amplitudes,
            dispersion,
        })
    }

    /// Number of spectral components.
    pub fn len(&self) -> usize {
        self.frequencies.len()
    }

    /// True when the packet carries no components.
    pub fn is_empty(&self) -> bool {
        self.frequencies.is_empty()
    }

    pub fn frequencies(&self) -> ArrayView1<'_, f64> {
        self.frequencies.view()
    }

    pub fn amplitudes(&self) -> ArrayView1<'_, f64> {
        self.amplitudes.view()
    }

    pub fn dispersion(&self) -> &Dispersion {
        &self.dispersion
    }

    /// List the packet's components sorted per `order`.
    ///
    /// The sort is stable: equal keys keep their original index order. Any
    /// tabular rendering of the result is the caller's business.
    ///
    /// # Errors
    /// * `EmptyPacket` when the packet has no components.
    pub fn components(&self, order: ComponentOrder) -> PacketResult<Vec<Component>> {
        if self.is_empty() {
            return Err(PacketError::empty_packet("components"));
        }
        let mut listed: Vec<Component> = self
            .frequencies
            .iter()
            .zip(self.amplitudes.iter())
            .map(|(&frequency, &amplitude)| Component {
                frequency,
                amplitude,
            })
            .collect();
        match order {
            ComponentOrder::FrequencyAscending => listed.sort_by(|a, b| {
                a.frequency
                    .partial_cmp(&b.frequency)
                    .unwrap_or(Ordering::Equal)
            }),
            ComponentOrder::AmplitudeDescending => listed.sort_by(|a, b| {
                b.amplitude
                    .partial_cmp(&a.amplitude)
                    .unwrap_or(Ordering::Equal)
            }),
        }
        Ok(listed)
    }

    /// Sampled waveform along the x-axis at a fixed instant.
    ///
    /// Computes `Σ_i A_i · cos(k_i·x − 2πf_i·t)` for every position, with the
    /// wavenumbers evaluated once per call. Cost is O(N · |positions|).
    ///
    /// # Errors
    /// * `EmptyPacket` when the packet has no components.
    pub fn synthesize_along_position(
        &self,
        positions: ArrayView1<'_, f64>,
        fixed_time: f64,
    ) -> PacketResult<Array1<f64>> {
        self.synthesize_along_position_observed(positions, fixed_time, &Silent)
    }

    /// Position-axis synthesis reporting its advance to `progress`.
    ///
    /// The observer sees one `advance` per component and must not change the
    /// result; the plain variant is exactly this call with a no-op observer.
    pub fn synthesize_along_position_observed(
        &self,
        positions: ArrayView1<'_, f64>,
        fixed_time: f64,
        progress: &dyn Progress,
    ) -> PacketResult<Array1<f64>> {
        self.superpose(positions, "synthesize_along_position", progress, |k, f, x| {
            k * x - 2.0 * PI * f * fixed_time
        })
    }

    /// Sampled waveform along the t-axis at a fixed position.
    ///
    /// Same summation as the position variant with the roles of position and
    /// time swapped in the cosine argument.
    pub fn synthesize_along_time(
        &self,
        times: ArrayView1<'_, f64>,
        fixed_position: f64,
    ) -> PacketResult<Array1<f64>> {
        self.synthesize_along_time_observed(times, fixed_position, &Silent)
    }

    /// Time-axis synthesis reporting its advance to `progress`.
    pub fn synthesize_along_time_observed(
        &self,
        times: ArrayView1<'_, f64>,
        fixed_position: f64,
        progress: &dyn Progress,
    ) -> PacketResult<Array1<f64>> {
        self.superpose(times, "synthesize_along_time", progress, |k, f, t| {
            k * fixed_position - 2.0 * PI * f * t
        })
    }

    /// Shared accumulation loop for both synthesis axes.
    ///
    /// `phase(k_i, f_i, sample)` yields the cosine argument of component i at
    /// one sweep sample. Components are summed in index order 0..N−1 so that
    /// repeated calls round identically.
    fn superpose<F>(
        &self,
        sweep: ArrayView1<'_, f64>,
        operation: &'static str,
        progress: &dyn Progress,
        phase: F,
    ) -> PacketResult<Array1<f64>>
    where
        F: Fn(f64, f64, f64) -> f64,
    {
        if self.is_empty() {
            return Err(PacketError::empty_packet(operation));
        }
        let wavenumbers = self.dispersion.wavenumbers(self.frequencies.view());
        let mut waveform = Array1::<f64>::zeros(sweep.len());

        progress.begin(self.len());
        for (index, ((&frequency, &amplitude), &k)) in self
            .frequencies
            .iter()
            .zip(self.amplitudes.iter())
            .zip(wavenumbers.iter())
            .enumerate()
        {
            for (value, &sample) in waveform.iter_mut().zip(sweep.iter()) {
                *value += amplitude * phase(k, frequency, sample).cos();
            }
            progress.advance(index + 1);
        }
        progress.finish();
        Ok(waveform)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::progress::recording::Recorder;
    use ndarray::array;

    fn three_component_packet() -> WavePacket {
        WavePacket::new(
            array![3.0, 1.0, 2.0],
            array![0.3, 0.1, 0.2],
            Dispersion::Linear { c: 1.0 },
        )
        .expect("lengths match")
    }

    #[test]
    fn test_construction_rejects_mismatched_lengths() {
        let err = WavePacket::new(
            array![1.0, 2.0, 3.0],
            array![0.5, 0.5],
            Dispersion::Linear { c: 1.0 },
        )
        .unwrap_err();
        assert_eq!(
            err,
            PacketError::ShapeMismatch {
                frequencies: 3,
                amplitudes: 2
            }
        );
    }

    #[test]
    fn test_empty_packet_constructs_but_refuses_synthesis() {
        let packet =
            WavePacket::new(array![], array![], Dispersion::Linear { c: 1.0 }).expect("empty ok");
        assert!(packet.is_empty());
        let err = packet
            .synthesize_along_position(array![0.0].view(), 0.0)
            .unwrap_err();
        assert!(matches!(err, PacketError::EmptyPacket { .. }));
    }

    #[test]
    fn test_synthesis_at_origin_sums_amplitudes() {
        // Every cosine argument is 0 at x = 0, t = 0
        let packet = three_component_packet();
        let waveform = packet
            .synthesize_along_position(array![0.0].view(), 0.0)
            .unwrap();
        assert!((waveform[0] - 0.6).abs() < 1e-12);
    }

    #[test]
    fn test_time_axis_matches_position_axis_at_origin() {
        let packet = three_component_packet();
        let along_x = packet
            .synthesize_along_position(array![0.0].view(), 0.25)
            .unwrap();
        let along_t = packet
            .synthesize_along_time(array![0.25].view(), 0.0)
            .unwrap();
        assert!((along_x[0] - along_t[0]).abs() < 1e-12);
    }

    #[test]
    fn test_components_frequency_ascending() {
        let packet = three_component_packet();
        let listed = packet.components(ComponentOrder::FrequencyAscending).unwrap();
        let freqs: Vec<f64> = listed.iter().map(|c| c.frequency).collect();
        let amps: Vec<f64> = listed.iter().map(|c| c.amplitude).collect();
        assert_eq!(freqs, vec![1.0, 2.0, 3.0]);
        assert_eq!(amps, vec![0.1, 0.2, 0.3]);
    }

    #[test]
    fn test_components_amplitude_descending_differs() {
        // Non-degenerate fixture: the two orders disagree
        let packet = three_component_packet();
        let listed = packet
            .components(ComponentOrder::AmplitudeDescending)
            .unwrap();
        let amps: Vec<f64> = listed.iter().map(|c| c.amplitude).collect();
        assert_eq!(amps, vec![0.3, 0.2, 0.1]);
        assert_eq!(listed[0].frequency, 3.0);
    }

    #[test]
    fn test_components_stable_on_ties() {
        let packet = WavePacket::new(
            array![1.0, 1.0, 1.0],
            array![0.5, 0.4, 0.6],
            Dispersion::Linear { c: 1.0 },
        )
        .unwrap();
        let listed = packet.components(ComponentOrder::FrequencyAscending).unwrap();
        let amps: Vec<f64> = listed.iter().map(|c| c.amplitude).collect();
        // Equal frequencies keep original index order
        assert_eq!(amps, vec![0.5, 0.4, 0.6]);
    }

    #[test]
    fn test_components_on_empty_packet() {
        let packet =
            WavePacket::new(array![], array![], Dispersion::Linear { c: 1.0 }).unwrap();
        let err = packet.components(ComponentOrder::default()).unwrap_err();
        assert!(matches!(err, PacketError::EmptyPacket { .. }));
    }

    #[test]
    fn test_repeat_synthesis_is_bit_identical() {
        let packet = three_component_packet();
        let sweep = Array1::linspace(-10.0, 10.0, 501);
        let first = packet.synthesize_along_position(sweep.view(), 0.7).unwrap();
        let second = packet.synthesize_along_position(sweep.view(), 0.7).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_observer_does_not_change_result() {
        let packet = three_component_packet();
        let sweep = Array1::linspace(0.0, 5.0, 64);
        let recorder = Recorder::default();
        let observed = packet
            .synthesize_along_position_observed(sweep.view(), 0.1, &recorder)
            .unwrap();
        let silent = packet.synthesize_along_position(sweep.view(), 0.1).unwrap();
        assert_eq!(observed, silent);
        assert_eq!(*recorder.begun.lock().unwrap(), vec![3]);
        assert_eq!(*recorder.advanced.lock().unwrap(), vec![1, 2, 3]);
        assert_eq!(*recorder.finished.lock().unwrap(), 1);
    }

    #[test]
    fn test_packet_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<WavePacket>();
    }
}
