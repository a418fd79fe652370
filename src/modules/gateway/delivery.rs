use rand::distributions::Uniform;
use rand::Rng;
use std::thread;
use std::time::Duration;

use crate::modules::utils::logging::log_flow_event;
use crate::modules::utils::time::get_current_timestamp;

/// Delivery channel for a verification code
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Channel {
    Sms,
    Email,
}

impl Channel {
    pub fn label(&self) -> &'static str {
        match self {
            Channel::Sms => "SMS",
            Channel::Email => "email",
        }
    }
}

/// A code handed to a delivery channel, kept by the screen for later
/// comparison against the user's entry
pub struct SentCode {
    pub code: String,
    pub channel: Channel,
    pub sent_at: u64,
}

/// Abstract code delivery operation.
/// Stand-in seam for a real delivery request; implementations decide
/// the transport and report success or failure as a result value.
pub trait CodeDelivery {
    fn deliver(&mut self, channel: Channel, destination: &str) -> Result<SentCode, String>;
}

/// Simulated delivery: generates a random code, waits for a fixed
/// latency and prints the code to the console instead of sending it
pub struct SimulatedDelivery {
    latency_ms: u64,
    code_length: usize,
}

impl SimulatedDelivery {
    pub fn new(latency_ms: u64, code_length: usize) -> Self {
        Self {
            latency_ms,
            code_length,
        }
    }

    /// Generate a code of decimal digits using random numbers
    fn generate_code(&self) -> String {
        rand::thread_rng()
            .sample_iter(&Uniform::new(0, 10))
            .take(self.code_length)
            .map(|d: i32| d.to_string())
            .collect()
    }
}

impl CodeDelivery for SimulatedDelivery {
    fn deliver(&mut self, channel: Channel, destination: &str) -> Result<SentCode, String> {
        // Simulated transport latency
        thread::sleep(Duration::from_millis(self.latency_ms));

        let code = self.generate_code();
        log_flow_event(
            "code_delivery",
            destination,
            true,
            Some(channel.label()),
        );
        println!(
            "(simulated {}) Your verification code is: {}",
            channel.label(),
            code
        );

        Ok(SentCode {
            code,
            channel,
            sent_at: get_current_timestamp(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generated_code_is_all_digits_of_requested_length() {
        let delivery = SimulatedDelivery::new(0, 6);

        for _ in 0..20 {
            let code = delivery.generate_code();
            assert_eq!(code.len(), 6);
            assert!(code.chars().all(|c| c.is_ascii_digit()));
        }
    }

    #[test]
    fn test_deliver_returns_the_generated_code() {
        let mut delivery = SimulatedDelivery::new(0, 4);

        let sent = delivery.deliver(Channel::Sms, "09170000000").unwrap();
        assert_eq!(sent.channel, Channel::Sms);
        assert_eq!(sent.code.len(), 4);
        assert!(sent.sent_at > 0);
    }

    #[test]
    fn test_channel_labels() {
        assert_eq!(Channel::Sms.label(), "SMS");
        assert_eq!(Channel::Email.label(), "email");
    }
}
