//! LIN receiver: pulls bytes from a [`ByteSource`], assembles frames, checks
//! them, and publishes the verified ones to a [`FrameStore`].
//!
//! The receiver is cooperative. Each call to [`LinReceiver::poll`] (or
//! [`LinReceiver::read`]) consumes at most one byte and returns immediately,
//! so it can sit in a super-loop next to unrelated work.
//!
//! # Example
//!
//! ```rust,ignore
//! use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
//! use embassy_time::Instant;
//! use korri_lin::protocol::{config::LinConfig, receiver::{FrameStore, LinReceiver}};
//!
//! static STORE: FrameStore<CriticalSectionRawMutex> = FrameStore::new();
//!
//! let mut receiver = LinReceiver::new(LinConfig::default(), uart, || Instant::now(), &STORE);
//! loop {
//!     if receiver.read() {
//!         let frame = receiver.get_data().unwrap();
//!         // handle frame.id / frame.payload()
//!     }
//!     // other work
//! }
//! ```
use embassy_sync::blocking_mutex::raw::RawMutex;
use embassy_time::{Duration, Instant};

use crate::error::InitError;
use crate::protocol::config::LinConfig;
use crate::protocol::frame::LinFrame;
use crate::protocol::transport::traits::{
    byte_source::ByteSource,
    lin_clock::LinClock,
    lin_timer::LinTimer,
    transceiver::{LinTransceiver, TransceiverMode},
};
use crate::protocol::transport::{LIN_BUS_IDLE_TIMEOUT_MS, LIN_POLL_INTERVAL_MS};

pub mod assembler;
pub mod store;

pub use assembler::{FrameAssembler, ProcessResult, ReceiverPhase};
pub use store::FrameStore;

//==================================================================================Enums and Structs
/// Result of one receive step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ReadOutcome {
    /// No byte was pending.
    Idle,
    /// A byte was consumed but no frame finished.
    Consumed,
    /// A frame finished but failed validation and was discarded.
    Rejected(RejectReason),
    /// A frame passed validation and was published.
    Verified(LinFrame),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum RejectReason {
    ChecksumMismatch,
    /// Only reported when parity checking is enabled in the configuration.
    ParityMismatch,
    /// Identifier mapped to no payload length. Indicates an internal fault.
    UnresolvedLength,
}

/// Running counters, wrapping on overflow.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ReceiverStats {
    /// Bytes taken from the source.
    pub bytes_received: u32,
    /// Bytes dropped while waiting for a sync.
    pub bytes_ignored: u32,
    pub syncs_detected: u32,
    pub frames_verified: u32,
    pub frames_rejected: u32,
}

/// Receive side of a LIN node.
pub struct LinReceiver<'s, B, C, M>
where
    B: ByteSource,
    C: LinClock,
    M: RawMutex,
{
    config: LinConfig,
    source: B,
    clock: C,
    store: &'s FrameStore<M>,
    assembler: FrameAssembler,
    stats: ReceiverStats,
}

impl<'s, B, C, M> LinReceiver<'s, B, C, M>
where
    B: ByteSource,
    C: LinClock,
    M: RawMutex,
{
    /// Build a receiver over an already configured byte source.
    pub fn new(config: LinConfig, source: B, clock: C, store: &'s FrameStore<M>) -> Self {
        Self {
            config,
            source,
            clock,
            store,
            assembler: FrameAssembler::new(),
            stats: ReceiverStats::default(),
        }
    }

    /// Bring up the transceiver (UART, pins, enable line) then build the receiver.
    pub fn with_transceiver<T: LinTransceiver>(
        transceiver: &mut T,
        config: LinConfig,
        source: B,
        clock: C,
        store: &'s FrameStore<M>,
    ) -> Result<Self, InitError<T::Error>> {
        transceiver.init(&config).map_err(InitError::Transceiver)?;
        transceiver
            .set_mode(TransceiverMode::Normal)
            .map_err(InitError::Transceiver)?;

        #[cfg(feature = "defmt")]
        defmt::info!("LIN transceiver ready at {} baud", config.baud());

        Ok(Self::new(config, source, clock, store))
    }

    //==================================================================================Receive
    /// Consume at most one pending byte and report what it did.
    pub fn poll(&mut self) -> ReadOutcome {
        let Some(byte) = self.source.try_next_byte() else {
            return ReadOutcome::Idle;
        };
        let framing_error = self.source.had_framing_error();
        self.store.record_byte(self.clock.now());
        self.stats.bytes_received = self.stats.bytes_received.wrapping_add(1);

        match self.assembler.process_byte(byte, framing_error) {
            ProcessResult::Ignored => {
                self.stats.bytes_ignored = self.stats.bytes_ignored.wrapping_add(1);
                ReadOutcome::Consumed
            }
            ProcessResult::SyncDetected => {
                #[cfg(feature = "defmt")]
                defmt::trace!("LIN sync detected");
                self.stats.syncs_detected = self.stats.syncs_detected.wrapping_add(1);
                ReadOutcome::Consumed
            }
            ProcessResult::ByteConsumed => ReadOutcome::Consumed,
            ProcessResult::FrameComplete => self.validate(),
        }
    }

    /// Consume at most one pending byte. `true` exactly when that byte
    /// completed a frame that passed validation.
    pub fn read(&mut self) -> bool {
        matches!(self.poll(), ReadOutcome::Verified(_))
    }

    /// Poll until a frame verifies, sleeping on `timer` while the source is empty.
    pub async fn next_frame<T: LinTimer>(&mut self, timer: &mut T) -> LinFrame {
        loop {
            match self.poll() {
                ReadOutcome::Verified(frame) => return frame,
                ReadOutcome::Idle => timer.delay_ms(LIN_POLL_INTERVAL_MS).await,
                ReadOutcome::Consumed | ReadOutcome::Rejected(_) => {}
            }
        }
    }

    fn validate(&mut self) -> ReadOutcome {
        let outcome = match LinFrame::from_raw(self.assembler.raw(), self.config.legacy_mode()) {
            Err(_) => ReadOutcome::Rejected(RejectReason::UnresolvedLength),
            Ok(frame) if self.config.verify_parity() && !frame.pid.has_valid_parity() => {
                ReadOutcome::Rejected(RejectReason::ParityMismatch)
            }
            Ok(frame) if !frame.valid => ReadOutcome::Rejected(RejectReason::ChecksumMismatch),
            Ok(frame) => ReadOutcome::Verified(frame),
        };

        match outcome {
            ReadOutcome::Verified(frame) => {
                #[cfg(feature = "defmt")]
                defmt::debug!("LIN frame verified: id={=u8:#x} dlc={=u8}", frame.id, frame.dlc);
                self.store.publish(frame);
                self.stats.frames_verified = self.stats.frames_verified.wrapping_add(1);
            }
            ReadOutcome::Rejected(_reason) => {
                #[cfg(feature = "defmt")]
                defmt::warn!(
                    "LIN frame rejected: id={=u8:#x} reason={}",
                    self.assembler.id(),
                    _reason
                );
                self.stats.frames_rejected = self.stats.frames_rejected.wrapping_add(1);
            }
            ReadOutcome::Idle | ReadOutcome::Consumed => {}
        }
        outcome
    }

    //==================================================================================Accessors
    /// Last verified frame, `None` until a frame has passed validation.
    pub fn get_data(&self) -> Option<LinFrame> {
        self.store.latest()
    }

    /// Monotonic time of the most recent byte taken from the source.
    pub fn timestamp_of_last_byte(&self) -> Option<Instant> {
        self.store.last_byte_at()
    }

    /// Time elapsed since the last byte, `None` if no byte was ever received.
    pub fn bus_idle_for(&self, now: Instant) -> Option<Duration> {
        self.timestamp_of_last_byte()
            .map(|last| now.checked_duration_since(last).unwrap_or(Duration::from_ticks(0)))
    }

    /// Whether the bus has been silent long enough for a LIN 2.x node to sleep.
    pub fn is_bus_idle(&self, now: Instant) -> bool {
        self.bus_idle_for(now)
            .map_or(true, |idle| idle >= Duration::from_millis(LIN_BUS_IDLE_TIMEOUT_MS))
    }

    pub fn phase(&self) -> ReceiverPhase {
        self.assembler.phase()
    }

    pub fn stats(&self) -> ReceiverStats {
        self.stats
    }

    pub fn config(&self) -> &LinConfig {
        &self.config
    }

    /// Direct access to the byte source (flushing a FIFO, test injection…).
    pub fn source_mut(&mut self) -> &mut B {
        &mut self.source
    }

    /// Drop the frame in progress and wait for the next sync.
    pub fn resync(&mut self) {
        self.assembler.reset();
    }

    /// Release the byte source and clock.
    pub fn into_parts(self) -> (B, C) {
        (self.source, self.clock)
    }
}
