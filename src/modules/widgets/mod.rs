pub mod code_entry;
pub mod resend_timer;

// Re-export the main types and functions
pub use code_entry::{CodeEntry, FocusController};
pub use resend_timer::{format_mm_ss, ClockHandle, ClockSource, ResendTimer};
