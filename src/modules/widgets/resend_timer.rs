use log::debug;

/// Handle to a one-second clock armed for a single timer instance
pub trait ClockHandle {
    /// Whole seconds elapsed since arming that have not been consumed yet
    fn take_ticks(&mut self) -> u32;

    /// Stop the clock; no further ticks may be reported after this
    fn cancel(&mut self);
}

/// Capability implemented by the hosting environment that owns the wall
/// clock. The timer itself only reacts to ticks; it never sleeps or
/// reads the time.
pub trait ClockSource {
    fn arm(&mut self) -> Box<dyn ClockHandle>;
}

/// One-shot resend countdown.
///
/// Starts at a configured duration, ticks down once per second and
/// flips into an enabled state at zero, gating the resend action until
/// `restart` re-arms it. At most one clock handle is active per
/// instance: restarting cancels the previous handle before arming a new
/// one, and dropping the timer cancels any outstanding handle.
pub struct ResendTimer {
    duration: u32,
    remaining: u32,
    clock: Option<Box<dyn ClockHandle>>,
}

impl ResendTimer {
    /// Create a timer already counting down from `duration` seconds
    pub fn start(duration: u32, source: &mut dyn ClockSource) -> Self {
        Self {
            duration,
            remaining: duration,
            clock: Some(source.arm()),
        }
    }

    pub fn remaining_seconds(&self) -> u32 {
        self.remaining
    }

    /// True iff the countdown has reached zero and resend is available
    pub fn is_enabled(&self) -> bool {
        self.remaining == 0
    }

    /// Advance the countdown by one second. No-op once enabled; on
    /// reaching zero the clock handle is canceled so no further ticks
    /// arrive until `restart`.
    pub fn tick(&mut self) {
        if self.remaining == 0 {
            return;
        }
        self.remaining -= 1;
        if self.remaining == 0 {
            debug!("resend countdown finished");
            self.release_clock();
        }
    }

    /// Drain pending seconds from the active clock handle into ticks.
    /// Called by the host whenever it gets a chance to update.
    pub fn poll(&mut self) {
        let pending = match self.clock.as_mut() {
            Some(clock) => clock.take_ticks(),
            None => return,
        };
        for _ in 0..pending {
            if self.is_enabled() {
                break;
            }
            self.tick();
        }
    }

    /// Reset to the full duration and arm a fresh clock. Valid at any
    /// time; the previous handle is always canceled first so two clocks
    /// never run concurrently for the same instance.
    pub fn restart(&mut self, source: &mut dyn ClockSource) {
        self.release_clock();
        self.remaining = self.duration;
        self.clock = Some(source.arm());
    }

    /// Countdown rendered as zero-padded "MM:SS"
    pub fn display(&self) -> String {
        format_mm_ss(self.remaining)
    }

    fn release_clock(&mut self) {
        if let Some(mut clock) = self.clock.take() {
            clock.cancel();
        }
    }
}

impl Drop for ResendTimer {
    fn drop(&mut self) {
        // The owning screen may be torn down mid-countdown; the clock
        // must not keep ticking for a widget that is gone
        self.release_clock();
    }
}

/// Format a second count as "MM:SS" with zero-padded minutes and seconds
pub fn format_mm_ss(seconds: u32) -> String {
    format!("{:02}:{:02}", seconds / 60, seconds % 60)
}
