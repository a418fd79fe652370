use chrono::DateTime;
use std::time::{Instant, SystemTime, UNIX_EPOCH};

use crate::modules::widgets::resend_timer::{ClockHandle, ClockSource};

/// Function to format timestamp as readable date
pub fn format_timestamp(timestamp: u64) -> String {
    DateTime::from_timestamp(timestamp as i64, 0)
        .unwrap_or_default()
        .format("%Y-%m-%d %H:%M:%S")
        .to_string()
}

/// Get current Unix timestamp
pub fn get_current_timestamp() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap()
        .as_secs()
}

/// Clock source backed by the process monotonic clock.
/// Handles report whole elapsed seconds on demand, so a blocking
/// console host can catch the countdown up between prompts.
pub struct SteadyClock;

struct SteadyHandle {
    armed_at: Instant,
    consumed: u64,
    cancelled: bool,
}

impl ClockHandle for SteadyHandle {
    fn take_ticks(&mut self) -> u32 {
        if self.cancelled {
            return 0;
        }
        let elapsed = self.armed_at.elapsed().as_secs();
        let pending = elapsed.saturating_sub(self.consumed);
        self.consumed = elapsed;
        pending.min(u32::MAX as u64) as u32
    }

    fn cancel(&mut self) {
        self.cancelled = true;
    }
}

impl ClockSource for SteadyClock {
    fn arm(&mut self) -> Box<dyn ClockHandle> {
        Box::new(SteadyHandle {
            armed_at: Instant::now(),
            consumed: 0,
            cancelled: false,
        })
    }
}
