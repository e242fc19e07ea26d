//! Defines the raw byte layout of a LIN frame as it sits in the receive buffer.
//!
//! The receiver writes bytes into a fixed [`RawFrame`] by slot index, the frame
//! model parses named fields back out of it. The two views never alias.

/// Slot of the sync byte (`0x55`).
pub const SYNC_SLOT: usize = 0;
/// Slot of the protected identifier.
pub const PID_SLOT: usize = 1;
/// First data slot. Data occupies slots 2 to 9.
pub const DATA_SLOT: usize = 2;
/// Slot of the checksum byte.
pub const CHECKSUM_SLOT: usize = 10;
/// Conceptual slot of the next break field. Never written.
pub const BREAK_SLOT: usize = 11;

/// Number of physically stored slots (sync, PID, 8 data bytes, checksum).
pub const RAW_FRAME_LEN: usize = 11;
/// Largest payload a LIN frame can carry.
pub const MAX_DATA_LEN: usize = 8;

/// Value expected in the sync slot.
pub const SYNC_BYTE: u8 = 0x55;
/// Largest 6-bit frame identifier.
pub const MAX_FRAME_ID: u8 = 0x3F;
/// Mask extracting the identifier from a PID byte.
pub const ID_MASK: u8 = 0x3F;

/// Fixed 11-slot storage for a frame being assembled.
///
/// Unused data slots keep whatever the previous frame left there; only the
/// first `dlc` data slots are meaningful once the identifier is known.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RawFrame {
    pub bytes: [u8; RAW_FRAME_LEN],
}

impl Default for RawFrame {
    fn default() -> Self {
        Self::new()
    }
}

impl RawFrame {
    /// Create a zeroed buffer.
    pub const fn new() -> Self {
        Self {
            bytes: [0; RAW_FRAME_LEN],
        }
    }

    /// Write `byte` at `slot`. Slots past the checksum are silently dropped.
    #[inline]
    pub fn store(&mut self, slot: usize, byte: u8) {
        if let Some(cell) = self.bytes.get_mut(slot) {
            *cell = byte;
        }
    }

    #[inline]
    pub fn pid(&self) -> u8 {
        self.bytes[PID_SLOT]
    }

    #[inline]
    pub fn checksum(&self) -> u8 {
        self.bytes[CHECKSUM_SLOT]
    }

    /// The eight data slots, populated or not.
    #[inline]
    pub fn data(&self) -> &[u8] {
        &self.bytes[DATA_SLOT..CHECKSUM_SLOT]
    }

    /// Immutable view over the whole buffer.
    #[inline]
    pub fn as_slice(&self) -> &[u8] {
        &self.bytes
    }
}
