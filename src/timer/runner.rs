//! Drives a [`TimerState`] on a one-second interval.

use std::time::Duration;

use tokio::time::{MissedTickBehavior, interval};
use tracing::debug;

use super::{Tick, TimerState};

/// Tick cadence of the countdown.
pub const TIMER_TICK: Duration = Duration::from_millis(1000);

/// Run `timer` until it finishes, calling `on_tick` after every change.
///
/// The timer is started if it is paused. Dropping the returned future stops
/// the countdown and releases the interval.
pub async fn run_countdown(
    mut timer: TimerState,
    mut on_tick: impl FnMut(&TimerState),
) -> TimerState {
    if !timer.is_running() && !timer.toggle() {
        return timer;
    }

    let mut ticker = interval(TIMER_TICK);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
    // The first tick completes immediately.
    ticker.tick().await;
    on_tick(&timer);

    loop {
        ticker.tick().await;
        match timer.tick() {
            Tick::Running => on_tick(&timer),
            Tick::Finished => {
                debug!("Timer of {}s finished", timer.initial());
                on_tick(&timer);
                break;
            }
            Tick::Idle => break,
        }
    }

    timer
}
