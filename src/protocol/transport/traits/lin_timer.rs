//! Asynchronous timer abstraction used to back off while the byte source is
//! empty.

/// Timer trait abstraction; must remain thread-safe when applicable.
pub trait LinTimer {
    /// Asynchronously wait for `millis` milliseconds.
    fn delay_ms<'a>(
        &'a mut self,
        millis: u32,
    ) -> impl core::future::Future<Output = ()> + 'a;
}
