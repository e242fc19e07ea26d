//! Byte-level algorithms used by the protocol layer.
pub mod checksum;
