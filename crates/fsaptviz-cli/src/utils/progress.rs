use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};
use std::future::Future;
use std::time::Duration;

const SPINNER_TICK_MS: u64 = 80;

/// Stderr spinner shown while waiting on the analysis service.
pub struct RequestSpinner {
    pb: ProgressBar,
}

impl RequestSpinner {
    pub fn new(message: impl Into<String>) -> Self {
        let pb = ProgressBar::new_spinner().with_style(Self::spinner_style());
        pb.set_draw_target(ProgressDrawTarget::stderr());
        pb.set_message(message.into());
        pb.enable_steady_tick(Duration::from_millis(SPINNER_TICK_MS));
        Self { pb }
    }

    /// A spinner that never draws, for `--quiet` runs.
    pub fn hidden() -> Self {
        let pb = ProgressBar::hidden();
        Self { pb }
    }

    pub fn finish_ok(&self, message: impl Into<String>) {
        self.pb.disable_steady_tick();
        self.pb.finish_with_message(format!("✓ {}", message.into()));
    }

    pub fn finish_err(&self, message: impl Into<String>) {
        self.pb.disable_steady_tick();
        self.pb.finish_with_message(format!("✗ {}", message.into()));
    }

    pub fn is_finished(&self) -> bool {
        self.pb.is_finished()
    }

    fn spinner_style() -> ProgressStyle {
        ProgressStyle::with_template("{spinner:.green} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
    }
}

/// Runs `request` behind a spinner, closing it with a check or a cross.
pub async fn with_spinner<T, E, F>(message: &str, quiet: bool, request: F) -> Result<T, E>
where
    F: Future<Output = Result<T, E>>,
{
    let spinner = if quiet {
        RequestSpinner::hidden()
    } else {
        RequestSpinner::new(message)
    };
    let result = request.await;
    match &result {
        Ok(_) => spinner.finish_ok(message),
        Err(_) => spinner.finish_err(format!("{} failed", message)),
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spinner_finishes_on_success_and_failure() {
        let spinner = RequestSpinner::hidden();
        assert!(!spinner.is_finished());
        spinner.finish_ok("Fetched pairs");
        assert!(spinner.is_finished());

        let spinner = RequestSpinner::hidden();
        spinner.finish_err("Fetch failed");
        assert!(spinner.is_finished());
    }

    #[tokio::test]
    async fn with_spinner_passes_the_result_through() {
        let ok: Result<u32, String> = with_spinner("Working", true, async { Ok(7) }).await;
        assert_eq!(ok, Ok(7));

        let err: Result<u32, String> =
            with_spinner("Working", true, async { Err("boom".to_string()) }).await;
        assert_eq!(err, Err("boom".to_string()));
    }
}
