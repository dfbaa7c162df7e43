use std::time::{Duration, Instant};

use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};

/// Spinner on stderr while the providers are queried. Draws nothing when
/// stderr is not a terminal.
pub struct ProgressTracker {
    pb: ProgressBar,
    start_time: Instant,
}

impl ProgressTracker {
    pub fn new() -> Self {
        Self::with_target(ProgressDrawTarget::stderr())
    }

    pub fn hidden() -> Self {
        Self::with_target(ProgressDrawTarget::hidden())
    }

    fn with_target(target: ProgressDrawTarget) -> Self {
        let pb = ProgressBar::with_draw_target(None, target);
        pb.set_style(
            ProgressStyle::default_spinner()
                .template("{spinner} {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_spinner()),
        );

        Self {
            pb,
            start_time: Instant::now(),
        }
    }

    pub fn start(&self, query: &str) {
        self.pb.set_message(format!("Searching for \"{}\"...", query));
        self.pb.enable_steady_tick(Duration::from_millis(100));
    }

    pub fn checking_streaming(&self) {
        self.pb.set_message("Checking streaming availability...");
    }

    pub fn finish(&self) {
        tracing::debug!(
            "Lookup finished in {:.2} seconds",
            self.start_time.elapsed().as_secs_f32()
        );
        self.pb.finish_and_clear();
    }
}
