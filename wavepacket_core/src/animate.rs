//! Animation-frame sequencing.
//!
//! A frame is one position-axis waveform snapshot at a fixed instant. Frame
//! instants are produced by linear spacing over the frame count, never by
//! repeated addition, so long sequences do not drift. The running maximum
//! absolute amplitude over all frames is tracked for renderers that need a
//! stable y-range.

use ndarray::{Array1, ArrayView1};
use rayon::prelude::*;
use std::sync::atomic::{AtomicUsize, Ordering};

use crate::error::{PacketError, PacketResult};
use crate::packet::WavePacket;
use crate::progress::{Progress, Silent};

/// One waveform snapshot at a fixed instant.
#[derive(Debug, Clone, PartialEq)]
pub struct Frame {
    /// Instant of the snapshot in seconds
    pub time: f64,
    /// Waveform samples, parallel to the positions the set was built from
    pub waveform: Array1<f64>,
}

/// Materialized, restartable frame sequence plus its amplitude bound.
#[derive(Debug, Clone, PartialEq)]
pub struct FrameSet {
    /// Frames in increasing time order, from 0 to the requested duration
    pub frames: Vec<Frame>,
    /// Maximum |amplitude| over every sample of every frame
    pub peak_amplitude: f64,
}

impl FrameSet {
    pub fn len(&self) -> usize {
        self.frames.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }
}

impl WavePacket {
    /// Generate `floor(duration/step) + 1` evenly spaced frames from 0 to
    /// `duration` inclusive.
    ///
    /// Per-sample progress is suppressed inside each frame; use
    /// [`WavePacket::generate_frames_observed`] for frame-level reporting.
    ///
    /// # Errors
    /// * `NonPositiveStep` when `step <= 0`.
    /// * `EmptyPacket` when the packet has no components.
    pub fn generate_frames(
        &self,
        duration: f64,
        step: f64,
        positions: ArrayView1<'_, f64>,
    ) -> PacketResult<FrameSet> {
        self.generate_frames_observed(duration, step, positions, &Silent)
    }

    /// Frame generation with one progress notification per completed frame.
    ///
    /// Frames are synthesized in parallel; `advance` reports the completion
    /// count, not the frame index. Output ordering and values are identical
    /// to a sequential run.
    pub fn generate_frames_observed(
        &self,
        duration: f64,
        step: f64,
        positions: ArrayView1<'_, f64>,
        progress: &dyn Progress,
    ) -> PacketResult<FrameSet> {
        if !(step > 0.0) {
            return Err(PacketError::non_positive_step(step));
        }
        let count = (duration / step).floor() as usize + 1;
        let instants = Array1::linspace(0.0, duration, count).to_vec();

        progress.begin(count);
        let completed = AtomicUsize::new(0);
        let frames: Vec<Frame> = instants
            .par_iter()
            .map(|&time| {
                let waveform = self.synthesize_along_position(positions, time)?;
                progress.advance(completed.fetch_add(1, Ordering::Relaxed) + 1);
                Ok(Frame { time, waveform })
            })
            .collect::<PacketResult<Vec<Frame>>>()?;
        progress.finish();

        let peak_amplitude = frames
            .iter()
            .flat_map(|frame| frame.waveform.iter())
            .fold(0.0_f64, |peak, &value| peak.max(value.abs()));
        Ok(FrameSet {
            frames,
            peak_amplitude,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dispersion::Dispersion;
    use crate::progress::recording::Recorder;
    use ndarray::array;

    fn packet() -> WavePacket {
        WavePacket::new(
            array![1.0, 2.0],
            array![1.0, 0.5],
            Dispersion::Linear { c: 1.0 },
        )
        .unwrap()
    }

    #[test]
    fn test_frame_count_and_instants() {
        let set = packet()
            .generate_frames(1.0, 0.5, array![0.0].view())
            .unwrap();
        assert_eq!(set.len(), 3);
        let times: Vec<f64> = set.frames.iter().map(|f| f.time).collect();
        assert_eq!(times, vec![0.0, 0.5, 1.0]);
    }

    #[test]
    fn test_zero_duration_yields_single_frame() {
        let set = packet()
            .generate_frames(0.0, 0.5, array![0.0].view())
            .unwrap();
        assert_eq!(set.len(), 1);
        assert_eq!(set.frames[0].time, 0.0);
    }

    #[test]
    fn test_step_must_be_positive() {
        let err = packet()
            .generate_frames(1.0, 0.0, array![0.0].view())
            .unwrap_err();
        assert_eq!(err, PacketError::NonPositiveStep { step: 0.0 });
    }

    #[test]
    fn test_frames_match_direct_synthesis() {
        let p = packet();
        let positions = Array1::linspace(-2.0, 2.0, 41);
        let set = p.generate_frames(0.4, 0.2, positions.view()).unwrap();
        for frame in &set.frames {
            let direct = p
                .synthesize_along_position(positions.view(), frame.time)
                .unwrap();
            assert_eq!(frame.waveform, direct);
        }
    }

    #[test]
    fn test_peak_amplitude_is_running_maximum() {
        let p = packet();
        let positions = Array1::linspace(-5.0, 5.0, 101);
        let set = p.generate_frames(1.0, 0.25, positions.view()).unwrap();
        let expected = set
            .frames
            .iter()
            .flat_map(|f| f.waveform.iter())
            .fold(0.0_f64, |m, &v| m.max(v.abs()));
        assert_eq!(set.peak_amplitude, expected);
        // At x = 0, t = 0 the waveform equals the amplitude sum
        assert!(set.peak_amplitude >= 1.5 - 1e-12);
    }

    #[test]
    fn test_frame_progress_counts_frames_not_samples() {
        let recorder = Recorder::default();
        let set = packet()
            .generate_frames_observed(1.0, 0.5, array![0.0, 1.0].view(), &recorder)
            .unwrap();
        assert_eq!(set.len(), 3);
        assert_eq!(*recorder.begun.lock().unwrap(), vec![3]);
        let mut advanced = recorder.advanced.lock().unwrap().clone();
        advanced.sort_unstable();
        assert_eq!(advanced, vec![1, 2, 3]);
    }

    #[test]
    fn test_empty_packet_fails() {
        let empty =
            WavePacket::new(array![], array![], Dispersion::Linear { c: 1.0 }).unwrap();
        let err = empty
            .generate_frames(1.0, 0.5, array![0.0].view())
            .unwrap_err();
        assert!(matches!(err, PacketError::EmptyPacket { .. }));
    }
}
