//! Byte-position state machine recovering LIN frame boundaries from an
//! unframed UART stream.
//!
//! Each byte is placed into a fixed 11-slot [`RawFrame`] by position:
//!
//! ```text
//! slot   0      1     2 ..= 9         10        (11)
//!        SYNC   PID   DATA (2/4/8)    CHECKSUM  (next BREAK, never written)
//! ```
//!
//! Short payloads skip the unused data slots so the checksum byte always lands
//! in slot 10. Once the checksum slot is written the position parks on the
//! break slot and further bytes are dropped until the next sync.
use crate::core::{
    RawFrame, BREAK_SLOT, CHECKSUM_SLOT, DATA_SLOT, ID_MASK, MAX_DATA_LEN, PID_SLOT,
    SYNC_SLOT,
};
use crate::protocol::frame::resolve_dlc;

//==================================================================================Enums
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ProcessResult {
    /// Byte arrived while waiting for a sync and was dropped.
    Ignored,
    /// Byte marked the start of a new frame and was stored in the sync slot.
    SyncDetected,
    /// Byte stored in the working frame; more bytes are expected.
    ByteConsumed,
    /// Checksum byte stored; the working frame is ready for validation.
    FrameComplete,
}

/// Where the assembler stands within a frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ReceiverPhase {
    /// Between frames, waiting for a break followed by a sync byte.
    WaitSync,
    ReadingPid,
    ReadingData,
    ReadingChecksum,
}

//==================================================================================Frame sync
/// Decide whether the current byte starts a new frame.
///
/// A break field reads as `0x00` and makes the UART flag a framing error on
/// the next byte. The error alone is not enough: it must follow a zero byte.
#[inline]
pub fn is_sync_marker(prev_byte: Option<u8>, framing_error: bool) -> bool {
    framing_error && prev_byte == Some(0x00)
}

//==================================================================================Assembler
/// Working-frame state: raw buffer plus position counter.
#[derive(Debug, Clone, Copy)]
pub struct FrameAssembler {
    raw: RawFrame,
    position: usize,
    id: u8,
    dlc: u8,
    prev_byte: Option<u8>,
}

impl Default for FrameAssembler {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameAssembler {
    /// Instantiate an assembler waiting for the first sync.
    pub const fn new() -> Self {
        Self {
            raw: RawFrame::new(),
            position: BREAK_SLOT,
            id: 0,
            dlc: 0,
            prev_byte: None,
        }
    }

    /// Feed one received byte together with its framing-error flag.
    ///
    /// A sync marker forces the position back to the sync slot whatever the
    /// current state, so a corrupted frame never wedges the decoder.
    pub fn process_byte(&mut self, byte: u8, framing_error: bool) -> ProcessResult {
        let prev_byte = self.prev_byte.replace(byte);
        let synced = is_sync_marker(prev_byte, framing_error);

        if synced {
            self.position = SYNC_SLOT;
        } else if self.position == PID_SLOT {
            self.id = byte & ID_MASK;
            self.dlc = resolve_dlc(self.id);
        } else if self.position == DATA_SLOT + self.dlc as usize {
            // First byte past the payload: jump to the checksum slot.
            self.position += MAX_DATA_LEN - self.dlc as usize;
        }

        if self.position >= BREAK_SLOT {
            return ProcessResult::Ignored;
        }

        self.raw.store(self.position, byte);

        if self.position == CHECKSUM_SLOT {
            self.position = BREAK_SLOT;
            return ProcessResult::FrameComplete;
        }

        self.position += 1;
        if synced {
            ProcessResult::SyncDetected
        } else {
            ProcessResult::ByteConsumed
        }
    }

    /// Drop the working frame and wait for the next sync.
    pub fn reset(&mut self) {
        self.position = BREAK_SLOT;
        self.prev_byte = None;
        // Buffer is left as is; the next frame overwrites it.
    }

    /// Working buffer, valid for parsing right after [`ProcessResult::FrameComplete`].
    #[inline]
    pub fn raw(&self) -> &RawFrame {
        &self.raw
    }

    /// Slot the next byte will be written to.
    #[inline]
    pub fn position(&self) -> usize {
        self.position
    }

    /// Identifier decoded from the current frame's PID.
    #[inline]
    pub fn id(&self) -> u8 {
        self.id
    }

    /// Payload length resolved from the current frame's identifier.
    #[inline]
    pub fn dlc(&self) -> u8 {
        self.dlc
    }

    pub fn phase(&self) -> ReceiverPhase {
        match self.position {
            PID_SLOT => ReceiverPhase::ReadingPid,
            p if p > CHECKSUM_SLOT || p == SYNC_SLOT => ReceiverPhase::WaitSync,
            p if p >= DATA_SLOT + self.dlc as usize => ReceiverPhase::ReadingChecksum,
            _ => ReceiverPhase::ReadingData,
        }
    }
}
