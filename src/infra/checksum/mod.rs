//! LIN data checksums.
//!
//! Both schemes are an inverted 8-bit sum: the transmitter sends
//! `0xFF - sum(covered bytes)`, so summing the covered bytes together with the
//! received checksum byte must land on `0xFF`.
//!
//! * **Classic** (LIN 1.x, diagnostic identifiers `0x3C..=0x3F`): data bytes only.
//! * **Enhanced** (LIN 2.x): protected identifier byte plus data bytes.

/// Identifiers from this value upward always use the classic checksum.
pub const FIRST_DIAGNOSTIC_ID: u8 = 0x3C;

/// Value the covered bytes plus the checksum byte must sum to.
const CHECKSUM_TARGET: u8 = 0xFF;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ChecksumKind {
    /// Sum over the data bytes.
    Classic,
    /// Sum over the PID byte and the data bytes.
    Enhanced,
}

impl ChecksumKind {
    /// Pick the scheme for a frame identifier.
    ///
    /// Legacy mode forces the classic scheme for every identifier so that
    /// LIN 1.x slaves can be decoded.
    #[inline]
    pub const fn select(id: u8, legacy_mode: bool) -> Self {
        if legacy_mode || id >= FIRST_DIAGNOSTIC_ID {
            ChecksumKind::Classic
        } else {
            ChecksumKind::Enhanced
        }
    }
}

/// Modulo-256 sum of the bytes covered by `kind`.
fn covered_sum(kind: ChecksumKind, pid: u8, data: &[u8]) -> u8 {
    let seed = match kind {
        ChecksumKind::Classic => 0,
        ChecksumKind::Enhanced => pid,
    };
    data.iter().fold(seed, |acc, byte| acc.wrapping_add(*byte))
}

/// Checksum byte a transmitter appends for `data` (and `pid` when enhanced).
pub fn compute(kind: ChecksumKind, pid: u8, data: &[u8]) -> u8 {
    CHECKSUM_TARGET.wrapping_sub(covered_sum(kind, pid, data))
}

/// Validate a received checksum byte against the covered bytes.
///
/// `data` must contain exactly the `dlc` meaningful payload bytes.
pub fn verify(kind: ChecksumKind, pid: u8, data: &[u8], checksum: u8) -> bool {
    covered_sum(kind, pid, data).wrapping_add(checksum) == CHECKSUM_TARGET
}
