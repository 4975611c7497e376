//! Example: Scan one port and print the scanner's entry for it.
//!
//! Usage:
//!   cargo run --example scan_ports                   # google.com 443
//!   cargo run --example scan_ports -- 10.0.0.1 22

use portprobe_core::{PortState, ScanInvoker};
use std::env;

fn main() {
    let args: Vec<String> = env::args().collect();
    let address = args.get(1).map(String::as_str).unwrap_or("google.com");
    let port: u16 = match args.get(2).map(|p| p.parse()) {
        None => 443,
        Some(Ok(p)) => p,
        Some(Err(_)) => {
            eprintln!("Invalid port: {}", args[2]);
            return;
        }
    };

    let invoker = ScanInvoker::new();
    println!("Running: {}\n", invoker.command_line(&invoker.request(address, port)).join(" "));

    match invoker.scan(address, port) {
        Ok(result) => match result.port(port) {
            Ok(payload) => {
                println!("{}", payload);
                println!("State: {}", PortState::from_payload(payload));
            }
            Err(e) => eprintln!("{}", e),
        },
        Err(e) => {
            eprintln!("Error scanning port: {}", e);
        }
    }
}
