//! Abstraction traits for the hardware collaborators (UART byte source, clock,
//! timer, and transceiver).
pub mod byte_source;
pub mod lin_clock;
pub mod lin_timer;
pub mod transceiver;
