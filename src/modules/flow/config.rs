use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::Read;
use std::path::Path;

use crate::{
    CODE_LENGTH, LOGIN_PIN_LEN, MAX_CODE_ATTEMPTS, MOBILE_NUMBER_MAX_LEN, RESEND_COOLDOWN_SECS,
    SIMULATED_LATENCY_MS,
};

/// Tunable settings for the flow, loadable from a JSON file.
/// Missing fields fall back to the built-in defaults.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FlowConfig {
    pub code_length: usize,
    pub resend_cooldown_secs: u32,
    pub mobile_number_max_len: usize,
    pub login_pin_len: usize,
    pub simulated_latency_ms: u64,
    pub max_code_attempts: u32,
}

impl Default for FlowConfig {
    fn default() -> Self {
        Self {
            code_length: CODE_LENGTH,
            resend_cooldown_secs: RESEND_COOLDOWN_SECS,
            mobile_number_max_len: MOBILE_NUMBER_MAX_LEN,
            login_pin_len: LOGIN_PIN_LEN,
            simulated_latency_ms: SIMULATED_LATENCY_MS,
            max_code_attempts: MAX_CODE_ATTEMPTS,
        }
    }
}

impl FlowConfig {
    /// Load configuration from a JSON file
    pub fn load(path: &Path) -> Result<Self, String> {
        let mut file =
            File::open(path).map_err(|e| format!("Failed to open config file: {}", e))?;
        let mut data = String::new();
        file.read_to_string(&mut data)
            .map_err(|e| format!("Failed to read config file: {}", e))?;
        serde_json::from_str(&data).map_err(|e| format!("Invalid config file: {}", e))
    }
}
