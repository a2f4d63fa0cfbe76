//! Example: Scanning for BLE devices
//!
//! Runs an active LE scan on hci0 for ten seconds and prints every
//! advertising report.
//!
//! Note: This example requires root privileges (or CAP_NET_RAW), as opening
//! raw HCI sockets requires elevated permissions.

use blescan::scan::{advertising_only, ScanSessionBuilder};
use blescan::ScanConfig;
use std::time::Duration;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    println!("Opening HCI socket for device 0...");
    let mut session = ScanSessionBuilder::open(ScanConfig::default())?
        .filter(advertising_only)
        .on_event(|event| {
            for report in event.advertising_reports().unwrap_or_default() {
                let name = report.local_name().unwrap_or_default();
                println!(
                    "{} {:<18} {:>4} dBm  {} {}",
                    report.address_string(),
                    report.report_type,
                    report.rssi,
                    report.payload_hex(),
                    name
                );
            }
        })
        .build()?;

    let cancel = session.cancel_handle();
    std::thread::spawn(move || {
        std::thread::sleep(Duration::from_secs(10));
        cancel.cancel();
    });

    println!("Scanning for 10 seconds...");
    let stats = session.run()?;

    println!(
        "Scan complete: {} packets, {} delivered, {} decode errors",
        stats.packets, stats.delivered, stats.decode_errors
    );
    Ok(())
}
