//! Example: Reading HCI events
//!
//! This example demonstrates how to read and decode HCI events using the
//! bluewire library.

use bluewire::constants::{EVT_CMD_COMPLETE, EVT_CMD_STATUS};
use bluewire::{CommandCompleteEvent, CommandPacket, CommandStatusEvent, HciSocket, Opcode};
use std::time::Duration;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("Opening HCI socket for device 0...");
    let socket = HciSocket::open(0)?;

    // Send a Reset command to get some events
    println!("Sending HCI Reset command...");
    socket.send_command(&CommandPacket::new(Opcode::RESET, vec![]))?;
    println!("Reset command sent successfully!");

    // Read events for a few seconds
    println!("\nReading HCI events for 5 seconds...");
    let start_time = std::time::Instant::now();

    while start_time.elapsed() < Duration::from_secs(5) {
        match socket.read_event_timeout(Some(Duration::from_millis(100))) {
            Ok(event) => match event.event_code {
                EVT_CMD_COMPLETE => {
                    let complete = CommandCompleteEvent::parse(&event)?;
                    println!(
                        "Command Complete: opcode {}, status {:?}",
                        complete.opcode,
                        complete.status()
                    );
                }
                EVT_CMD_STATUS => {
                    let status = CommandStatusEvent::parse(&event)?;
                    println!("Command Status: opcode {}, status {}", status.opcode, status.status);
                }
                code => {
                    println!("Event {:#04X}: {:02X?}", code, event.parameters);
                }
            },
            Err(e) => {
                if e.to_string().contains("Timed out") {
                    // This is expected when no events are available
                    continue;
                }
                eprintln!("Error reading event: {}", e);
            }
        }
    }

    Ok(())
}
