//! Receiver configuration, fixed at construction.
//!
//! Pin numbers and baud rate are only handed to the
//! [`LinTransceiver`](crate::protocol::transport::traits::transceiver::LinTransceiver)
//! collaborator; the decoder itself only reads the two protocol flags.
//!
//! # Example
//!
//! ```
//! use korri_lin::protocol::config::LinConfig;
//!
//! let config = LinConfig::builder()
//!     .tx_pin(1)
//!     .rx_pin(0)
//!     .baud(19_200)
//!     .cs_pin(2)
//!     .legacy_mode(true)
//!     .build();
//!
//! assert_eq!(config.baud(), 19_200);
//! assert!(config.legacy_mode());
//! ```
use crate::protocol::transport::LIN_DEFAULT_BAUD;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct LinConfig {
    tx_pin: u8,
    rx_pin: u8,
    baud: u32,
    cs_pin: u8,
    legacy_mode: bool,
    verify_parity: bool,
}

impl Default for LinConfig {
    fn default() -> Self {
        Self::builder().build()
    }
}

impl LinConfig {
    /// Create a builder holding the default wiring (TX 1, RX 0, CS 2, 9600 baud).
    #[inline]
    pub const fn builder() -> LinConfigBuilder {
        LinConfigBuilder::new()
    }

    #[inline]
    pub const fn tx_pin(&self) -> u8 {
        self.tx_pin
    }

    #[inline]
    pub const fn rx_pin(&self) -> u8 {
        self.rx_pin
    }

    #[inline]
    pub const fn baud(&self) -> u32 {
        self.baud
    }

    /// Chip-select / enable pin of the transceiver.
    #[inline]
    pub const fn cs_pin(&self) -> u8 {
        self.cs_pin
    }

    /// Force the classic checksum for every identifier (LIN 1.x buses).
    #[inline]
    pub const fn legacy_mode(&self) -> bool {
        self.legacy_mode
    }

    /// Reject frames whose PID parity bits do not match the identifier.
    #[inline]
    pub const fn verify_parity(&self) -> bool {
        self.verify_parity
    }
}

/// Fluent builder for [`LinConfig`].
#[derive(Debug, Clone, Copy)]
pub struct LinConfigBuilder {
    config: LinConfig,
}

impl LinConfigBuilder {
    #[inline]
    pub const fn new() -> Self {
        Self {
            config: LinConfig {
                tx_pin: 1,
                rx_pin: 0,
                baud: LIN_DEFAULT_BAUD,
                cs_pin: 2,
                legacy_mode: false,
                verify_parity: false,
            },
        }
    }

    #[inline]
    pub const fn tx_pin(mut self, pin: u8) -> Self {
        self.config.tx_pin = pin;
        self
    }

    #[inline]
    pub const fn rx_pin(mut self, pin: u8) -> Self {
        self.config.rx_pin = pin;
        self
    }

    /// Set the bus bit rate.
    ///
    /// # Panics
    /// Panics when `baud` is zero.
    #[inline]
    pub const fn baud(mut self, baud: u32) -> Self {
        assert!(baud > 0, "Baud rate must be non-zero");
        self.config.baud = baud;
        self
    }

    #[inline]
    pub const fn cs_pin(mut self, pin: u8) -> Self {
        self.config.cs_pin = pin;
        self
    }

    #[inline]
    pub const fn legacy_mode(mut self, enabled: bool) -> Self {
        self.config.legacy_mode = enabled;
        self
    }

    #[inline]
    pub const fn verify_parity(mut self, enabled: bool) -> Self {
        self.config.verify_parity = enabled;
        self
    }

    #[inline]
    pub const fn build(self) -> LinConfig {
        self.config
    }
}

impl Default for LinConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = LinConfig::default();
        assert_eq!(config.tx_pin(), 1);
        assert_eq!(config.rx_pin(), 0);
        assert_eq!(config.baud(), 9600);
        assert_eq!(config.cs_pin(), 2);
        assert!(!config.legacy_mode());
        assert!(!config.verify_parity());
    }

    #[test]
    fn test_builder_overrides() {
        let config = LinConfig::builder()
            .tx_pin(18)
            .rx_pin(19)
            .baud(19_200)
            .cs_pin(7)
            .legacy_mode(true)
            .verify_parity(true)
            .build();
        assert_eq!(config.tx_pin(), 18);
        assert_eq!(config.rx_pin(), 19);
        assert_eq!(config.baud(), 19_200);
        assert_eq!(config.cs_pin(), 7);
        assert!(config.legacy_mode());
        assert!(config.verify_parity());
    }

    #[test]
    /// Configuration can be built in a const context.
    fn test_const_config() {
        const CONFIG: LinConfig = LinConfig::builder().baud(10_417).build();
        assert_eq!(CONFIG.baud(), 10_417);
    }

    #[test]
    #[should_panic]
    fn test_zero_baud_panics() {
        let _ = LinConfig::builder().baud(0);
    }
}
