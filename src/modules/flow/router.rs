use super::config::FlowConfig;
use crate::modules::gateway::{Channel, CodeDelivery, SignInGateway};
use crate::modules::screens::{
    handle_signin_screen, handle_verification_screen, SigninOutcome, VerificationOptions,
    VerificationOutcome,
};
use crate::modules::utils::logging::log_screen_event;
use crate::modules::widgets::ClockSource;

// Placeholder destination for the email channel; the flow never
// collects a real address
const EMAIL_ON_FILE: &str = "email-on-file";

/// Screens of the flow, visited in order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Signin,
    Otp,
    SecurityCheck,
    Done,
}

/// Result of driving the whole flow
#[derive(Debug)]
pub enum FlowOutcome {
    Completed, // Both verification screens passed
    Exit,      // The user quit partway through
}

/// Route to show after a verification screen finishes
fn next_route(current: Route, verified: bool) -> Route {
    match (current, verified) {
        (Route::Otp, true) => Route::SecurityCheck,
        (Route::Otp, false) => Route::Signin,
        (Route::SecurityCheck, true) => Route::Done,
        (Route::SecurityCheck, false) => Route::Otp,
        (route, _) => route,
    }
}

/// OTP screen: SMS channel, submits as soon as the last cell fills
fn otp_options(config: &FlowConfig) -> VerificationOptions {
    VerificationOptions {
        screen_name: "otp",
        title: "Enter OTP code to verify",
        intro: "Enter the 6-digit code we just sent to your SMS.",
        channel: Channel::Sms,
        code_length: config.code_length,
        cooldown_secs: config.resend_cooldown_secs,
        max_attempts: config.max_code_attempts,
        explicit_submit: false,
    }
}

/// Security check: email channel, explicit submit with Enter
fn security_options(config: &FlowConfig) -> VerificationOptions {
    VerificationOptions {
        screen_name: "security_check",
        title: "Security Check",
        intro: "We would like to verify your account ownership using the code we sent to your email.",
        channel: Channel::Email,
        code_length: config.code_length,
        cooldown_secs: config.resend_cooldown_secs,
        max_attempts: config.max_code_attempts,
        explicit_submit: true,
    }
}

/// Drive the sign-in flow screen by screen until it completes or the
/// user exits
pub fn run_flow(
    config: &FlowConfig,
    gateway: &mut dyn SignInGateway,
    delivery: &mut dyn CodeDelivery,
    clock: &mut dyn ClockSource,
) -> Result<FlowOutcome, String> {
    let mut route = Route::Signin;
    let mut mobile_number = String::new();

    loop {
        match route {
            Route::Signin => match handle_signin_screen(
                config.mobile_number_max_len,
                config.login_pin_len,
                gateway,
            )? {
                SigninOutcome::SignedIn(number) => {
                    mobile_number = number;
                    route = Route::Otp;
                }
                SigninOutcome::Exit => return Ok(FlowOutcome::Exit),
            },
            Route::Otp => {
                let options = otp_options(config);
                match handle_verification_screen(&options, &mobile_number, delivery, clock)? {
                    VerificationOutcome::Verified(_) => route = next_route(Route::Otp, true),
                    VerificationOutcome::Back => route = next_route(Route::Otp, false),
                    VerificationOutcome::Exit => return Ok(FlowOutcome::Exit),
                }
            }
            Route::SecurityCheck => {
                let options = security_options(config);
                match handle_verification_screen(&options, EMAIL_ON_FILE, delivery, clock)? {
                    VerificationOutcome::Verified(_) => {
                        route = next_route(Route::SecurityCheck, true)
                    }
                    VerificationOutcome::Back => route = next_route(Route::SecurityCheck, false),
                    VerificationOutcome::Exit => return Ok(FlowOutcome::Exit),
                }
            }
            Route::Done => {
                log_screen_event("flow", "completed");
                println!("\nAll checks passed. You're signed in!");
                return Ok(FlowOutcome::Completed);
            }
        }
    }
}
