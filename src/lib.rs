//! `korri-lin` library: a `no_std` LIN bus receiver that recovers frames from
//! the raw byte stream of a UART. The crate exposes the frame layout
//! contract, checksum algorithms, and the protocol layer (frame model,
//! receiver state machine, hardware abstraction traits).
#![no_std]
//==================================================================================
/// Raw frame layout shared by the receiver and the frame parser.
pub mod core;
/// Frame building and parsing errors, plus collaborator errors.
pub mod error;
/// Byte-level algorithms: classic and enhanced LIN checksums.
pub mod infra;
/// LIN protocol implementation: frames, configuration, receiver, and
/// transport traits.
pub mod protocol;
//==================================================================================
