//! Error definitions shared across library modules.
//!
//! Malformed bus traffic is not an error here: it surfaces as a rejected read
//! outcome. These types cover API misuse (building or parsing frames) and the
//! hardware collaborators.
use thiserror_no_std::Error;

#[derive(Error, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
/// Errors that can occur while serializing a frame into wire bytes.
pub enum FrameBuildError {
    /// Identifier does not fit in 6 bits.
    #[error("Invalid frame identifier: {id:#04x}")]
    InvalidIdentifier { id: u8 },
    /// Payload length does not match the length implied by the identifier.
    #[error("Payload length {len} does not match DLC {expected} for this identifier")]
    PayloadLengthMismatch { len: usize, expected: u8 },
    /// Output buffer cannot hold the serialized frame.
    #[error("Buffer too small -> asked: {asked}, available: {available}")]
    BufferTooSmall { asked: usize, available: usize },
}

#[derive(Error, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
/// Errors raised while reading named fields out of a raw buffer.
pub enum FrameParseError {
    /// Buffer is shorter than the fixed raw frame layout.
    #[error("Raw frame too short -> asked: {asked}, available: {available}")]
    TooShort { asked: usize, available: usize },
    /// Identifier maps to no payload length. Unreachable with a masked PID.
    #[error("Unresolved data length for identifier {id:#04x}")]
    UnresolvedLength { id: u8 },
}

#[derive(Error, Debug)]
/// Failures while bringing up the transceiver before receiving.
pub enum InitError<E: core::fmt::Debug> {
    /// The transceiver refused the configuration.
    #[error("Transceiver init error: {0:?}")]
    Transceiver(E),
}
