//! # Quickstart Example
//!
//! Minimal example demonstrating the basics of korri-lin:
//! - Configure a receiver
//! - Feed it a simulated UART stream (break, sync, PID, data, checksum)
//! - Read verified frames and the last-byte timestamp
//!
//! This example uses `std` for a quick trial run.
//!
//! ```bash
//! cargo run --example quickstart
//! ```

use std::collections::VecDeque;

use embassy_sync::blocking_mutex::raw::NoopRawMutex;
use embassy_time::Instant;
use korri_lin::protocol::config::LinConfig;
use korri_lin::protocol::frame::builder::LinFrameBuilder;
use korri_lin::protocol::receiver::{FrameStore, LinReceiver, ReadOutcome};
use korri_lin::protocol::transport::traits::byte_source::ByteSource;

/// UART replaying a recorded capture.
struct ReplayUart {
    bytes: VecDeque<(u8, bool)>,
    last_error: bool,
}

impl ReplayUart {
    fn new() -> Self {
        Self {
            bytes: VecDeque::new(),
            last_error: false,
        }
    }

    fn push_frame(&mut self, wire: &[u8]) {
        // The break reads as 0x00, the sync byte carries the framing error.
        self.bytes.push_back((0x00, false));
        self.bytes.push_back((wire[0], true));
        self.bytes.extend(wire[1..].iter().map(|byte| (*byte, false)));
    }
}

impl ByteSource for ReplayUart {
    fn try_next_byte(&mut self) -> Option<u8> {
        let (byte, error) = self.bytes.pop_front()?;
        self.last_error = error;
        Some(byte)
    }

    fn had_framing_error(&self) -> bool {
        self.last_error
    }
}

fn main() {
    println!("=== korri-lin Quickstart ===\n");

    // ======================================================================
    // 1. Build a capture: three frames, one of them corrupted
    // ======================================================================
    println!("1. Building a simulated bus capture");

    let mut uart = ReplayUart::new();
    let frames: [(u8, &[u8]); 3] = [
        (0x10, &[0x12, 0x34]),
        (0x22, &[0x01, 0x02, 0x03, 0x04]),
        (0x3C, &[0x7F, 0x06, 0xB2, 0x00, 0xFF, 0xFF, 0xFF, 0xFF]),
    ];
    for (index, (id, payload)) in frames.iter().enumerate() {
        let wire = match LinFrameBuilder::new(*id, payload).build() {
            Ok(wire) => wire,
            Err(e) => {
                eprintln!("   Build error: {}", e);
                return;
            }
        };
        let mut bytes = wire.as_slice().to_vec();
        if index == 1 {
            // Flip a data bit to show a rejected frame.
            bytes[2] ^= 0x01;
        }
        print!("   id {:#04x}: ", id);
        for byte in &bytes {
            print!("{:02X} ", byte);
        }
        println!();
        uart.push_frame(&bytes);
    }
    println!();

    // ======================================================================
    // 2. Run the receiver
    // ======================================================================
    println!("2. Decoding");

    let store = FrameStore::<NoopRawMutex>::new();
    let mut tick = 0u64;
    let clock = move || {
        tick += 1;
        Instant::from_millis(tick)
    };
    let mut receiver = LinReceiver::new(LinConfig::default(), uart, clock, &store);

    loop {
        match receiver.poll() {
            ReadOutcome::Idle => break,
            ReadOutcome::Consumed => {}
            ReadOutcome::Rejected(reason) => println!("   frame rejected: {:?}", reason),
            ReadOutcome::Verified(frame) => println!(
                "   frame verified: id {:#04x}, dlc {}, payload {:02X?}",
                frame.id,
                frame.dlc,
                frame.payload()
            ),
        }
    }
    println!();

    // ======================================================================
    // 3. Inspect the receiver state
    // ======================================================================
    println!("3. Receiver state");
    if let Some(frame) = receiver.get_data() {
        println!("   last frame: id {:#04x}", frame.id);
    }
    if let Some(at) = receiver.timestamp_of_last_byte() {
        println!("   last byte at: {} ms", at.as_millis());
    }
    println!("   stats: {:?}", receiver.stats());
}
