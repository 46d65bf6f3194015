//! Example: Sending HCI commands
//!
//! This example demonstrates how to build and send HCI commands using the
//! bluewire library.

use bluewire::masks::EventMask;
use bluewire::{CommandPacket, HciSocket, Opcode};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("Opening HCI socket for device 0...");
    let socket = HciSocket::open(0)?;

    // Send a Reset command
    println!("Sending HCI Reset command...");
    socket.send_command(&CommandPacket::new(Opcode::RESET, vec![]))?;
    println!("Reset command sent successfully!");

    // Enable every event the controller can report
    println!("\nSetting the event mask...");
    let mask = EventMask::all();
    socket.send_command(&CommandPacket::new(
        Opcode::SET_EVENT_MASK,
        mask.to_le_bytes().to_vec(),
    ))?;
    println!("Event mask set!");

    // Start an inquiry with the general inquiry access code
    println!("\nStarting an inquiry...");
    let mut params = Vec::new();
    params.extend_from_slice(&bluewire::constants::GIAC_LAP);
    params.push(0x08); // Inquiry_Length: 8 * 1.28s
    params.push(0x00); // Num_Responses: unlimited
    socket.send_command(&CommandPacket::new(Opcode::INQUIRY, params))?;
    println!("Inquiry started!");

    Ok(())
}
