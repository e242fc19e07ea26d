//! High-level components of the LIN protocol: frame model, receiver
//! configuration, the receive state machine, and the physical-layer traits.
pub mod config;
pub mod frame;
pub mod receiver;
pub mod transport;
