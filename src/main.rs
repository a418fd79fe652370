use clap::{Arg, Command}; // Import necessary modules from clap for command-line argument parsing
use std::path::Path;
use std::process;

use sixcode::flow::{run_flow, FlowConfig, FlowOutcome};
use sixcode::gateway::{SimulatedDelivery, SimulatedGateway};
use sixcode::utils::logging::initialize_logging;
use sixcode::utils::time::SteadyClock;

fn main() {
    if let Err(e) = initialize_logging() {
        eprintln!("Warning: Failed to initialize logging: {}", e);
    }

    // Define the command-line interface using clap
    let matches = Command::new("sixcode")
        .about("A console walkthrough of a sign-in and code-verification flow")
        .arg(
            Arg::new("config")
                .long("config")
                .help("Path to a JSON config file")
                .value_name("FILE"),
        )
        .arg(
            Arg::new("cooldown")
                .long("cooldown")
                .help("Resend cooldown in seconds")
                .value_name("SECONDS")
                .value_parser(clap::value_parser!(u32)),
        )
        .arg(
            Arg::new("code-length")
                .long("code-length")
                .help("Number of cells in the verification code")
                .value_name("CELLS")
                .value_parser(clap::value_parser!(usize)),
        )
        .arg(
            Arg::new("latency")
                .long("latency")
                .help("Simulated network latency in milliseconds")
                .value_name("MS")
                .value_parser(clap::value_parser!(u64)),
        )
        .get_matches(); // Parse the command-line arguments

    // Load the config file if one was given, otherwise use defaults
    let mut config = match matches.get_one::<String>("config") {
        Some(path) => match FlowConfig::load(Path::new(path)) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("{}", e);
                process::exit(1);
            }
        },
        None => FlowConfig::default(),
    };

    // Command-line flags override the config file
    if let Some(cooldown) = matches.get_one::<u32>("cooldown") {
        config.resend_cooldown_secs = *cooldown;
    }
    if let Some(code_length) = matches.get_one::<usize>("code-length") {
        config.code_length = *code_length;
    }
    if let Some(latency) = matches.get_one::<u64>("latency") {
        config.simulated_latency_ms = *latency;
    }

    let mut gateway = SimulatedGateway::new(config.simulated_latency_ms);
    let mut delivery = SimulatedDelivery::new(config.simulated_latency_ms, config.code_length);
    let mut clock = SteadyClock;

    match run_flow(&config, &mut gateway, &mut delivery, &mut clock) {
        Ok(FlowOutcome::Completed) | Ok(FlowOutcome::Exit) => {}
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    }
}
