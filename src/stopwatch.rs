//! Stopwatch widget.

use std::time::Duration;

use tokio::time::{Instant, MissedTickBehavior, interval};

/// Refresh cadence of the stopwatch display.
pub const STOPWATCH_TICK: Duration = Duration::from_millis(10);

/// Elapsed-time counter with start/stop/reset.
#[derive(Clone, Debug, Default)]
pub struct Stopwatch {
    /// Time accumulated before the current run.
    banked: Duration,
    /// Start of the current run, if running.
    started_at: Option<Instant>,
}

impl Stopwatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_running(&self) -> bool {
        self.started_at.is_some()
    }

    /// Start counting. No-op while already running.
    pub fn start(&mut self) {
        if self.started_at.is_none() {
            self.started_at = Some(Instant::now());
        }
    }

    /// Stop counting, keeping the elapsed time.
    pub fn stop(&mut self) {
        if let Some(started_at) = self.started_at.take() {
            self.banked += started_at.elapsed();
        }
    }

    /// Stop and zero the counter.
    pub fn reset(&mut self) {
        self.started_at = None;
        self.banked = Duration::ZERO;
    }

    pub fn elapsed(&self) -> Duration {
        self.banked + self.started_at.map(|t| t.elapsed()).unwrap_or_default()
    }

    /// Reset is only offered once there is something to reset.
    pub fn can_reset(&self) -> bool {
        self.is_running() || !self.elapsed().is_zero()
    }

    /// `MM:SS.cc` display of the elapsed time.
    pub fn display(&self) -> String {
        format_stopwatch(self.elapsed())
    }
}

/// Format a duration as `MM:SS.cc` (centiseconds). Minutes keep growing past 99.
pub fn format_stopwatch(elapsed: Duration) -> String {
    let millis = elapsed.as_millis();
    let total_seconds = millis / 1000;
    let minutes = total_seconds / 60;
    let seconds = total_seconds % 60;
    let centis = (millis % 1000) / 10;
    format!("{minutes:02}:{seconds:02}.{centis:02}")
}

/// Start `stopwatch` and refresh every [`STOPWATCH_TICK`] until the future is
/// dropped. Dropping it releases the interval; call [`Stopwatch::stop`] on
/// the caller's copy to freeze the reading.
pub async fn run_stopwatch(stopwatch: &mut Stopwatch, mut on_tick: impl FnMut(&Stopwatch)) {
    stopwatch.start();

    let mut ticker = interval(STOPWATCH_TICK);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);
    loop {
        ticker.tick().await;
        on_tick(stopwatch);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format() {
        assert_eq!(format_stopwatch(Duration::ZERO), "00:00.00");
        assert_eq!(format_stopwatch(Duration::from_millis(1234)), "00:01.23");
        assert_eq!(format_stopwatch(Duration::from_millis(61_009)), "01:01.00");
        assert_eq!(format_stopwatch(Duration::from_secs(6000)), "100:00.00");
    }

    #[tokio::test(start_paused = true)]
    async fn test_start_stop_accumulates() {
        let mut watch = Stopwatch::new();
        assert!(!watch.can_reset());

        watch.start();
        tokio::time::advance(Duration::from_millis(1500)).await;
        watch.stop();
        assert_eq!(watch.elapsed(), Duration::from_millis(1500));

        tokio::time::advance(Duration::from_secs(5)).await;
        assert_eq!(watch.elapsed(), Duration::from_millis(1500));

        watch.start();
        tokio::time::advance(Duration::from_millis(500)).await;
        assert_eq!(watch.display(), "00:02.00");

        watch.reset();
        assert!(!watch.is_running());
        assert_eq!(watch.elapsed(), Duration::ZERO);
        assert!(!watch.can_reset());
    }

    #[tokio::test(start_paused = true)]
    async fn test_run_refreshes_until_dropped() {
        let mut watch = Stopwatch::new();
        let mut ticks = 0;
        let _ = tokio::time::timeout(
            Duration::from_millis(100),
            run_stopwatch(&mut watch, |_| ticks += 1),
        )
        .await;
        watch.stop();

        assert!(ticks >= 10);
        assert_eq!(watch.elapsed(), Duration::from_millis(100));
    }
}
