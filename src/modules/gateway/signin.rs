use std::thread;
use std::time::Duration;

use crate::modules::utils::logging::log_flow_event;

/// Abstract sign-in operation.
/// Stand-in seam for a real credential check; implementations report
/// success or failure as a result value, never by crashing the flow.
pub trait SignInGateway {
    fn sign_in(&mut self, mobile_number: &str, login_pin: &str) -> Result<(), String>;
}

/// Simulated gateway: accepts any well-formed credentials after a
/// fixed latency
pub struct SimulatedGateway {
    latency_ms: u64,
}

impl SimulatedGateway {
    pub fn new(latency_ms: u64) -> Self {
        Self { latency_ms }
    }
}

impl SignInGateway for SimulatedGateway {
    fn sign_in(&mut self, mobile_number: &str, _login_pin: &str) -> Result<(), String> {
        thread::sleep(Duration::from_millis(self.latency_ms));
        log_flow_event("sign_in", mobile_number, true, None);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simulated_gateway_accepts_credentials() {
        let mut gateway = SimulatedGateway::new(0);
        assert!(gateway.sign_in("09171234567", "123456").is_ok());
    }
}
