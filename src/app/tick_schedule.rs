//! Timing of marquee ticks.
//!
//! Holds the fixed tick interval and builds the `Interval` the driver awaits
//! between title updates.

use std::time::Duration;

use tokio::time::{Instant, Interval, MissedTickBehavior, interval_at};

/// Delay between two title updates (250ms, ~4 updates per second).
pub const TICK_INTERVAL: Duration = Duration::from_millis(250);

/// Deadline of the first scheduled tick for a marquee activated at `activated_at`.
///
/// Activation itself ticks immediately, so the schedule starts one interval later.
pub fn first_scheduled_tick(activated_at: Instant) -> Instant {
    activated_at + TICK_INTERVAL
}

/// Timer for the recurring ticks.
///
/// A late tick pushes the following ones back instead of firing a burst to
/// catch up, so each update is one interval after the previous one.
pub fn tick_timer(activated_at: Instant) -> Interval {
    let mut timer = interval_at(first_scheduled_tick(activated_at), TICK_INTERVAL);
    timer.set_missed_tick_behavior(MissedTickBehavior::Delay);
    timer
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn interval_is_quarter_second() {
        assert_eq!(TICK_INTERVAL, Duration::from_millis(250));
    }

    #[test]
    fn first_scheduled_tick_is_one_interval_after_activation() {
        let now = Instant::now();

        assert_eq!(first_scheduled_tick(now), now + TICK_INTERVAL);
    }

    #[tokio::test(start_paused = true)]
    async fn timer_fires_at_each_interval() {
        let start = Instant::now();
        let mut timer = tick_timer(start);

        assert_eq!(timer.tick().await, start + TICK_INTERVAL);
        assert_eq!(timer.tick().await, start + TICK_INTERVAL * 2);
    }

    #[tokio::test(start_paused = true)]
    async fn late_tick_delays_the_rest() {
        let start = Instant::now();
        let mut timer = tick_timer(start);

        tokio::time::advance(TICK_INTERVAL * 3).await;
        let late = timer.tick().await;

        assert_eq!(late, start + TICK_INTERVAL);
        assert_eq!(timer.tick().await, start + TICK_INTERVAL * 4);
    }
}
