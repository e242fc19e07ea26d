//! LIN physical layer boundary: abstraction traits for the UART byte source,
//! clock, timer and transceiver, plus the bus timing constants.
//!
//! ## LIN Timing Constants

pub mod traits;

/// Default bit rate when none is configured (bits/s).
///
/// LIN allows 1 to 20 kbit/s. 9600, 10417 and 19200 are the common choices.
pub const LIN_DEFAULT_BAUD: u32 = 9600;

/// Bus inactivity after which a LIN 2.x node may go to sleep (ms).
///
/// The decoder has no timeout of its own. Callers compare this against
/// the timestamp of the last received byte, see
/// [`LinReceiver::is_bus_idle`](crate::protocol::receiver::LinReceiver::is_bus_idle).
pub const LIN_BUS_IDLE_TIMEOUT_MS: u64 = 4000;

/// Delay between two polls of an empty byte source in
/// [`LinReceiver::next_frame`](crate::protocol::receiver::LinReceiver::next_frame) (ms).
///
/// One byte at 19200 baud takes ~0.5 ms; at 9600 baud ~1 ms. Polling every
/// millisecond keeps up with a UART FIFO of a few bytes at either rate.
pub const LIN_POLL_INTERVAL_MS: u32 = 1;
