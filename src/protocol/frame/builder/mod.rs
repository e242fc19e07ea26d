//! Serializes a frame into the byte sequence a LIN master and slave put on the
//! bus after the break field: sync, PID, data, checksum.
use crate::core::{MAX_FRAME_ID, RAW_FRAME_LEN, SYNC_BYTE};
use crate::error::FrameBuildError;
use crate::infra::checksum::{self, ChecksumKind};
use crate::protocol::frame::{resolve_dlc, LinFrame, Pid};

/// Bytes of a serialized frame, break field excluded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct WireFrame {
    bytes: [u8; RAW_FRAME_LEN],
    len: usize,
}

impl WireFrame {
    #[inline]
    pub fn as_slice(&self) -> &[u8] {
        &self.bytes[..self.len]
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Checksum byte (last byte on the wire).
    #[inline]
    pub fn checksum(&self) -> u8 {
        self.bytes[self.len - 1]
    }
}

#[derive(Debug)]
/// Parameters of the frame to serialize.
pub struct LinFrameBuilder<'a> {
    id: u8,
    payload: &'a [u8],
    kind: Option<ChecksumKind>,
    legacy_mode: bool,
    pid_override: Option<u8>,
}

impl<'a> LinFrameBuilder<'a> {
    /// Frame for `id` carrying `payload`. The payload length must match the
    /// identifier's DLC.
    pub fn new(id: u8, payload: &'a [u8]) -> Self {
        Self {
            id,
            payload,
            kind: None,
            legacy_mode: false,
            pid_override: None,
        }
    }

    /// Serialize the same identifier and payload as an already decoded frame.
    pub fn from_frame(frame: &'a LinFrame) -> Self {
        Self::new(frame.id, frame.payload()).with_pid(frame.pid.raw())
    }

    /// Select the checksum scheme the way a LIN 1.x node would.
    pub fn legacy_mode(mut self, legacy_mode: bool) -> Self {
        self.legacy_mode = legacy_mode;
        self
    }

    /// Force a checksum scheme regardless of identifier and legacy mode.
    pub fn with_checksum_kind(mut self, kind: ChecksumKind) -> Self {
        self.kind = Some(kind);
        self
    }

    /// Send `pid` as-is instead of computing parity bits. Its low six bits
    /// must still match the identifier.
    pub fn with_pid(mut self, pid: u8) -> Self {
        self.pid_override = Some(pid);
        self
    }

    /// Produce the wire bytes.
    pub fn build(&self) -> Result<WireFrame, FrameBuildError> {
        let mut bytes = [0u8; RAW_FRAME_LEN];
        let len = self.write_to(&mut bytes)?;
        Ok(WireFrame { bytes, len })
    }

    /// Write the wire bytes into `buffer`, returning how many were written.
    pub fn write_to(&self, buffer: &mut [u8]) -> Result<usize, FrameBuildError> {
        if self.id > MAX_FRAME_ID {
            return Err(FrameBuildError::InvalidIdentifier { id: self.id });
        }

        let dlc = resolve_dlc(self.id);
        if self.payload.len() != dlc as usize {
            return Err(FrameBuildError::PayloadLengthMismatch {
                len: self.payload.len(),
                expected: dlc,
            });
        }

        let pid = match self.pid_override {
            Some(raw) if Pid(raw).id() == self.id => raw,
            Some(_) => return Err(FrameBuildError::InvalidIdentifier { id: self.id }),
            None => Pid::from_id(self.id).raw(),
        };

        // sync + pid + data + checksum
        let total = 2 + self.payload.len() + 1;
        if buffer.len() < total {
            return Err(FrameBuildError::BufferTooSmall {
                asked: total,
                available: buffer.len(),
            });
        }

        let kind = self
            .kind
            .unwrap_or_else(|| ChecksumKind::select(self.id, self.legacy_mode));

        buffer[0] = SYNC_BYTE;
        buffer[1] = pid;
        buffer[2..2 + self.payload.len()].copy_from_slice(self.payload);
        buffer[total - 1] = checksum::compute(kind, pid, self.payload);

        Ok(total)
    }
}
