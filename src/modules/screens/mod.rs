pub mod signin;
pub mod verification;

// Re-export the main types and functions
pub use signin::{handle_signin_screen, SigninFieldError, SigninForm, SigninOutcome};
pub use verification::{
    handle_verification_screen, CellCursor, VerificationOptions, VerificationOutcome,
};
