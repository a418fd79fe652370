use env_logger::{Builder, WriteStyle};
use log::{info, warn, LevelFilter};
use std::fs::OpenOptions;

/// Initialize the logging system with file output
pub fn initialize_logging() -> Result<(), Box<dyn std::error::Error>> {
    // Create or append to log file with proper permissions
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open("sixcode.log")?;

    // Configure the logging system
    Builder::new()
        // Set default log level
        .filter_level(LevelFilter::Info)
        // Enable timestamps
        .format_timestamp_secs()
        // Enable module path in logs
        .format_module_path(true)
        // Set colored output for console
        .write_style(WriteStyle::Auto)
        // Write to the log file instead of stderr
        .target(env_logger::Target::Pipe(Box::new(file)))
        .init();

    info!("Logging system initialized");
    Ok(())
}

/// Helper function to mask sensitive data before logging
fn format_sensitive(text: &str) -> String {
    if text.len() <= 4 {
        return "*".repeat(text.len());
    }
    format!("{}***{}", &text[0..2], &text[text.len() - 2..])
}

/// Structured logging for flow events (sign-in, delivery, verification)
pub fn log_flow_event(event_type: &str, subject: &str, success: bool, details: Option<&str>) {
    let timestamp = chrono::Local::now().format("%Y-%m-%d %H:%M:%S").to_string();
    if success {
        info!(
            "Flow event: type={}, subject={}, success=true, timestamp={}, details={:?}",
            event_type,
            format_sensitive(subject),
            timestamp,
            details
        );
    } else {
        warn!(
            "Flow event: type={}, subject={}, success=false, timestamp={}, details={:?}",
            event_type,
            format_sensitive(subject),
            timestamp,
            details
        );
    }
}

/// Structured logging for screen transitions
pub fn log_screen_event(screen: &str, action: &str) {
    let timestamp = chrono::Local::now().format("%Y-%m-%d %H:%M:%S").to_string();
    info!(
        "Screen event: screen={}, action={}, timestamp={}",
        screen, action, timestamp
    );
}
