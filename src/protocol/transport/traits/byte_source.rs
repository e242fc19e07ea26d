//! Non-blocking access to bytes received by the UART. Lets the decoder run
//! against a hardware peripheral or a synthetic stream alike.

/// Source of received bytes plus the UART framing-error flag.
///
/// A LIN break field is a dominant level held longer than one character, so
/// the UART reads it as `0x00` and flags a framing error on the following
/// byte. That flag is the only synchronization signal the decoder gets.
pub trait ByteSource {
    /// Return the next received byte, or `None` when nothing is pending.
    /// Must not block.
    fn try_next_byte(&mut self) -> Option<u8>;

    /// Whether the byte last returned by [`try_next_byte`](Self::try_next_byte)
    /// was received with a framing error.
    fn had_framing_error(&self) -> bool;
}
