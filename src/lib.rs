// First, declare the modules folder itself
mod modules;

// Re-export everything from modules for easier access
pub use modules::{
    flow,
    gateway,
    screens,
    utils,
    widgets,
};

// Re-export commonly used types
pub use modules::flow::FlowConfig;
pub use modules::gateway::{Channel, CodeDelivery, SignInGateway};
pub use modules::widgets::code_entry::{CodeEntry, FocusController};
pub use modules::widgets::resend_timer::{format_mm_ss, ResendTimer};

// Constants
pub const CODE_LENGTH: usize = 6;
pub const RESEND_COOLDOWN_SECS: u32 = 60;
pub const MOBILE_NUMBER_MAX_LEN: usize = 11;
pub const LOGIN_PIN_LEN: usize = 6;
pub const SIMULATED_LATENCY_MS: u64 = 1000;
pub const MAX_CODE_ATTEMPTS: u32 = 3;
