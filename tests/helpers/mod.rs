//! Test doubles to simulate the UART, clock, timer and transceiver during
//! integration tests.
use embassy_time::Instant;
use korri_lin::protocol::config::LinConfig;
use korri_lin::protocol::transport::traits::{
    byte_source::ByteSource,
    lin_clock::LinClock,
    lin_timer::LinTimer,
    transceiver::{LinTransceiver, TransceiverMode},
};
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use tokio::time::{sleep, Duration};

#[derive(Clone, Default)]
#[allow(dead_code)]
/// In-memory UART. Clones share the same FIFO so a test can keep pushing
/// bytes after handing one end to the receiver.
pub struct MockUart {
    fifo: Arc<Mutex<VecDeque<(u8, bool)>>>,
    last_error: bool,
}

#[allow(dead_code)]
impl MockUart {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a byte with its framing-error flag.
    pub fn push(&self, byte: u8, framing_error: bool) {
        self.fifo.lock().unwrap().push_back((byte, framing_error));
    }

    pub fn push_bytes(&self, bytes: &[u8]) {
        for byte in bytes {
            self.push(*byte, false);
        }
    }

    /// Break read as `0x00`, then the frame with the framing error on the sync byte.
    pub fn push_frame(&self, wire: &[u8]) {
        self.push(0x00, false);
        self.push(wire[0], true);
        self.push_bytes(&wire[1..]);
    }

    pub fn pending(&self) -> usize {
        self.fifo.lock().unwrap().len()
    }
}

impl ByteSource for MockUart {
    fn try_next_byte(&mut self) -> Option<u8> {
        let (byte, error) = self.fifo.lock().unwrap().pop_front()?;
        self.last_error = error;
        Some(byte)
    }

    fn had_framing_error(&self) -> bool {
        self.last_error
    }
}

#[derive(Clone, Default)]
#[allow(dead_code)]
/// Manually driven clock.
pub struct MockClock {
    millis: Arc<Mutex<u64>>,
}

#[allow(dead_code)]
impl MockClock {
    pub fn advance(&self, millis: u64) {
        *self.millis.lock().unwrap() += millis;
    }

    pub fn instant(&self) -> Instant {
        Instant::from_millis(*self.millis.lock().unwrap())
    }
}

impl LinClock for MockClock {
    fn now(&mut self) -> Instant {
        self.instant()
    }
}

#[allow(dead_code)]
/// Timer based on `tokio::time::sleep` to drive delays in tests.
pub struct MockTimer;

impl LinTimer for MockTimer {
    async fn delay_ms(&mut self, millis: u32) {
        sleep(Duration::from_millis(millis as u64)).await;
    }
}

#[derive(Default)]
#[allow(dead_code)]
/// Transceiver recording the calls it receives.
pub struct MockTransceiver {
    pub configured_baud: Option<u32>,
    pub mode: Option<TransceiverMode>,
    pub fail_init: bool,
}

impl LinTransceiver for MockTransceiver {
    type Error = &'static str;

    fn init(&mut self, config: &LinConfig) -> Result<(), Self::Error> {
        if self.fail_init {
            return Err("uart unavailable");
        }
        self.configured_baud = Some(config.baud());
        self.mode = Some(TransceiverMode::Sleep);
        Ok(())
    }

    fn set_mode(&mut self, mode: TransceiverMode) -> Result<(), Self::Error> {
        self.mode = Some(mode);
        Ok(())
    }
}
