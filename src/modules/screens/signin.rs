use crate::modules::gateway::SignInGateway;
use crate::modules::utils::io::{read_line, read_masked};
use crate::modules::utils::logging::log_screen_event;

/// Field-level validation failures, returned to the caller as a value
/// so the host layer decides how to present them
#[derive(Debug, PartialEq, Eq)]
pub enum SigninFieldError {
    EmptyMobileNumber,
    EmptyLoginPin,
}

impl SigninFieldError {
    pub fn message(&self) -> &'static str {
        match self {
            SigninFieldError::EmptyMobileNumber => "Please enter your mobile number.",
            SigninFieldError::EmptyLoginPin => "Please enter your login PIN.",
        }
    }
}

/// Result of running the sign-in screen
#[derive(Debug)]
pub enum SigninOutcome {
    SignedIn(String), // Mobile number the user signed in with
    Exit,             // Exit the program
}

/// Sign-in form state: digit-restricted text fields.
/// Edits that contain non-digits or exceed the field cap are rejected
/// as a whole, leaving the previous value in place.
pub struct SigninForm {
    mobile_number: String,
    login_pin: String,
    mobile_max: usize,
    pin_max: usize,
}

impl SigninForm {
    pub fn new(mobile_max: usize, pin_max: usize) -> Self {
        Self {
            mobile_number: String::new(),
            login_pin: String::new(),
            mobile_max,
            pin_max,
        }
    }

    pub fn mobile_number(&self) -> &str {
        &self.mobile_number
    }

    pub fn login_pin(&self) -> &str {
        &self.login_pin
    }

    /// Replace the mobile number; returns whether the edit was accepted
    pub fn set_mobile_number(&mut self, input: &str) -> bool {
        if input.len() <= self.mobile_max && input.chars().all(|c| c.is_ascii_digit()) {
            self.mobile_number = input.to_string();
            true
        } else {
            false
        }
    }

    /// Replace the login PIN; returns whether the edit was accepted
    pub fn set_login_pin(&mut self, input: &str) -> bool {
        if input.len() <= self.pin_max && input.chars().all(|c| c.is_ascii_digit()) {
            self.login_pin = input.to_string();
            true
        } else {
            false
        }
    }

    /// Structured validation result; an empty error list means the form
    /// is ready to submit
    pub fn validate(&self) -> Result<(), Vec<SigninFieldError>> {
        let mut errors = Vec::new();
        if self.mobile_number.trim().is_empty() {
            errors.push(SigninFieldError::EmptyMobileNumber);
        }
        if self.login_pin.trim().is_empty() {
            errors.push(SigninFieldError::EmptyLoginPin);
        }
        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

/// Run the sign-in screen until the user signs in or exits
pub fn handle_signin_screen(
    mobile_max: usize,
    pin_max: usize,
    gateway: &mut dyn SignInGateway,
) -> Result<SigninOutcome, String> {
    log_screen_event("signin", "enter");

    loop {
        println!("\n=== Sign in ===");
        println!("Complete your details below to continue to your account.");
        println!("(Type 'exit' at any prompt to quit)\n");

        let mut form = SigninForm::new(mobile_max, pin_max);

        // Mobile number field
        loop {
            println!("Mobile number (up to {} digits):", mobile_max);
            let input = read_line().map_err(|e| format!("Failed to read input: {}", e))?;
            if input.eq_ignore_ascii_case("exit") {
                return Ok(SigninOutcome::Exit);
            }
            if form.set_mobile_number(&input) {
                break;
            }
            println!("Digits only, up to {} of them. Please try again.", mobile_max);
        }

        // Login PIN field, masked
        loop {
            println!("Login PIN (up to {} digits):", pin_max);
            let input = read_masked().map_err(|e| format!("Failed to read PIN: {}", e))?;
            if input.eq_ignore_ascii_case("exit") {
                return Ok(SigninOutcome::Exit);
            }
            if form.set_login_pin(&input) {
                break;
            }
            println!("Digits only, up to {} of them. Please try again.", pin_max);
        }

        if let Err(errors) = form.validate() {
            for error in &errors {
                println!("{}", error.message());
            }
            continue;
        }

        println!("\nSigning in...");
        match gateway.sign_in(form.mobile_number(), form.login_pin()) {
            Ok(()) => {
                log_screen_event("signin", "success");
                return Ok(SigninOutcome::SignedIn(form.mobile_number().to_string()));
            }
            Err(e) => {
                println!("Sign-in failed: {}", e);
                continue;
            }
        }
    }
}
