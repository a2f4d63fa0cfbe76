//! Example: Reading HCI events
//!
//! Dumps every event packet seen on hci0 for five seconds, as hex and in
//! decoded form. Start a scan elsewhere (e.g. `bluetoothctl scan on`) to see
//! advertising reports.

use blescan::hci::constants::HCI_MAX_EVENT_SIZE;
use blescan::{decode, EventFilter, HciError, HciSocket, HciTransport, RawFrame};
use std::time::{Duration, Instant};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    println!("Opening HCI socket for device 0...");
    let mut socket = HciSocket::open(0)?;
    socket.set_receive_timeout(Some(Duration::from_millis(100)));
    socket.set_event_filter(&EventFilter::all_events())?;

    println!("\nReading HCI events for 5 seconds...");
    let start_time = Instant::now();

    while start_time.elapsed() < Duration::from_secs(5) {
        let packet = match socket.receive(HCI_MAX_EVENT_SIZE) {
            Ok(packet) => packet,
            Err(HciError::Timeout) => continue,
            Err(e) => return Err(e.into()),
        };

        if let Ok(frame) = RawFrame::parse(&packet) {
            println!("{}", frame.to_hex());
        }
        match decode(&packet) {
            Ok(event) => println!("  {:?}", event),
            Err(e) => println!("  {}", e),
        }
    }

    socket.close()?;
    println!("Finished reading events");
    Ok(())
}
