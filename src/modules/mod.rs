// Declare all modules
pub mod flow;
pub mod gateway;
pub mod screens;
pub mod utils;
pub mod widgets;

// No re-exports here as they're handled in lib.rs
