//! LIN frame model: protected identifier, data length resolution, and the
//! validated frame handed to the application.
use crate::core::{
    RawFrame, CHECKSUM_SLOT, DATA_SLOT, ID_MASK, MAX_DATA_LEN, PID_SLOT, RAW_FRAME_LEN,
    SYNC_SLOT,
};
use crate::error::FrameParseError;
use crate::infra::checksum::{self, ChecksumKind};

pub mod builder;

//==================================================================================DLC
/// Payload length implied by a 6-bit identifier.
///
/// * `0x00..=0x1F` → 2 bytes
/// * `0x20..=0x2F` → 4 bytes
/// * `0x30..=0x3F` → 8 bytes
///
/// Returns 0 for identifiers that do not fit in 6 bits; callers treat that as
/// an internal fault rather than inventing a length.
#[inline]
pub const fn resolve_dlc(id: u8) -> u8 {
    match id {
        0x00..=0x1F => 2,
        0x20..=0x2F => 4,
        0x30..=0x3F => 8,
        _ => 0,
    }
}

//==================================================================================PID
/// Protected identifier: 6-bit frame identifier plus two parity bits.
///
/// ```text
/// bit   7    6    5..0
///       P1   P0   ID
/// P0 = ID0 ^ ID1 ^ ID2 ^ ID4
/// P1 = !(ID1 ^ ID3 ^ ID4 ^ ID5)
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Pid(pub u8);

impl Pid {
    /// Build a PID with correct parity for `id`. Bits above the sixth are dropped.
    #[inline]
    pub const fn from_id(id: u8) -> Self {
        let id = id & ID_MASK;
        Self(id | Self::parity_for(id))
    }

    /// Raw byte as seen on the bus.
    #[inline]
    pub const fn raw(&self) -> u8 {
        self.0
    }

    /// Frame identifier (low 6 bits).
    #[inline]
    pub const fn id(&self) -> u8 {
        self.0 & ID_MASK
    }

    /// Received parity bits, still in position 6 and 7.
    #[inline]
    pub const fn parity_bits(&self) -> u8 {
        self.0 & !ID_MASK
    }

    /// Parity bits the identifier calls for, in position 6 and 7.
    #[inline]
    pub const fn expected_parity(&self) -> u8 {
        Self::parity_for(self.id())
    }

    #[inline]
    pub const fn has_valid_parity(&self) -> bool {
        self.parity_bits() == self.expected_parity()
    }

    const fn parity_for(id: u8) -> u8 {
        let p0 = (id ^ (id >> 1) ^ (id >> 2) ^ (id >> 4)) & 1;
        let p1 = !((id >> 1) ^ (id >> 3) ^ (id >> 4) ^ (id >> 5)) & 1;
        (p0 << 6) | (p1 << 7)
    }
}

//==================================================================================FRAME
/// Decoded LIN frame.
///
/// `data` always reserves eight bytes; only the first `dlc` belong to this
/// frame. Use [`LinFrame::payload`] to get exactly those.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct LinFrame {
    /// Sync byte as received. Expected `0x55` but not checked.
    pub sync: u8,
    pub pid: Pid,
    /// 6-bit identifier extracted from the PID.
    pub id: u8,
    /// Payload length: 2, 4 or 8.
    pub dlc: u8,
    pub data: [u8; MAX_DATA_LEN],
    pub checksum: u8,
    /// Whether the checksum matched when the frame was parsed.
    pub valid: bool,
}

impl LinFrame {
    /// Read named fields out of a raw 11-slot buffer and validate its checksum.
    ///
    /// Data slots beyond `dlc` are copied as-is but take no part in validation.
    pub fn parse(raw: &[u8], legacy_mode: bool) -> Result<Self, FrameParseError> {
        if raw.len() < RAW_FRAME_LEN {
            return Err(FrameParseError::TooShort {
                asked: RAW_FRAME_LEN,
                available: raw.len(),
            });
        }

        let pid = Pid(raw[PID_SLOT]);
        let id = pid.id();
        let dlc = resolve_dlc(id);
        if dlc == 0 {
            return Err(FrameParseError::UnresolvedLength { id });
        }

        let mut data = [0u8; MAX_DATA_LEN];
        data.copy_from_slice(&raw[DATA_SLOT..CHECKSUM_SLOT]);
        let checksum = raw[CHECKSUM_SLOT];
        let kind = ChecksumKind::select(id, legacy_mode);
        let valid = checksum::verify(kind, pid.raw(), &data[..dlc as usize], checksum);

        Ok(Self {
            sync: raw[SYNC_SLOT],
            pid,
            id,
            dlc,
            data,
            checksum,
            valid,
        })
    }

    /// Parse a frame out of the receiver's working buffer.
    pub fn from_raw(raw: &RawFrame, legacy_mode: bool) -> Result<Self, FrameParseError> {
        Self::parse(raw.as_slice(), legacy_mode)
    }

    /// The `dlc` bytes that belong to this frame.
    #[inline]
    pub fn payload(&self) -> &[u8] {
        let len = (self.dlc as usize).min(MAX_DATA_LEN);
        &self.data[..len]
    }

    /// Checksum scheme this frame is validated with.
    #[inline]
    pub fn checksum_kind(&self, legacy_mode: bool) -> ChecksumKind {
        ChecksumKind::select(self.id, legacy_mode)
    }

    /// Diagnostic frames (`0x3C..=0x3F`) carry master requests and slave responses.
    #[inline]
    pub fn is_diagnostic(&self) -> bool {
        self.id >= checksum::FIRST_DIAGNOSTIC_ID
    }
}
