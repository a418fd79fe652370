pub mod delivery;
pub mod signin;

// Re-export the main types and functions
pub use delivery::{Channel, CodeDelivery, SentCode, SimulatedDelivery};
pub use signin::{SignInGateway, SimulatedGateway};
