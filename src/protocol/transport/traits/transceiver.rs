//! Boundary to the UART and LIN transceiver setup. Implementations own pin
//! modes and baud configuration; the decoder never touches hardware state.
use crate::protocol::config::LinConfig;

/// Power mode of the transceiver, driven through its chip-select/enable pin.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TransceiverMode {
    /// Enable pin low. The transceiver still wakes on a falling bus edge.
    Sleep,
    /// Enable pin high, ready to receive.
    Normal,
}

/// Contract to configure the UART and LIN transceiver.
pub trait LinTransceiver {
    type Error: core::fmt::Debug;

    /// Start the UART at the configured baud rate (8N1) and set up the pins.
    fn init(&mut self, config: &LinConfig) -> Result<(), Self::Error>;

    /// Switch the transceiver power mode.
    fn set_mode(&mut self, mode: TransceiverMode) -> Result<(), Self::Error>;
}
