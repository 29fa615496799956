//! Progress observers for long-running syntheses.
//!
//! Synthesis over many components can take a while; the engine reports its
//! advance through this seam so a host can show feedback. Observers must not
//! influence results: the waveform is identical whichever observer is used.

use std::io::{self, Write};

/// Observer notified while a summation or frame sequence is produced.
///
/// `advance` receives the number of completed units so far. Implementations
/// must tolerate out-of-order calls: frame generation advances from worker
/// threads.
pub trait Progress: Send + Sync {
    fn begin(&self, total: usize);
    fn advance(&self, completed: usize);
    fn finish(&self);
}

/// No-op observer, the default for every plain synthesis call.
#[derive(Debug, Clone, Copy, Default)]
pub struct Silent;

impl Progress for Silent {
    fn begin(&self, _total: usize) {}
    fn advance(&self, _completed: usize) {}
    fn finish(&self) {}
}

/// Coarse stderr counter in the spirit of a terminal progress bar.
#[derive(Debug, Clone, Copy, Default)]
pub struct StderrProgress;

impl Progress for StderrProgress {
    fn begin(&self, total: usize) {
        eprintln!("Generating the wave... ({total} components)");
    }

    fn advance(&self, completed: usize) {
        // Throttled so tight loops do not spend their time printing
        if completed % 64 == 0 {
            eprint!("\r{completed} done");
            let _ = io::stderr().flush();
        }
    }

    fn finish(&self) {
        eprintln!("\rdone");
    }
}
