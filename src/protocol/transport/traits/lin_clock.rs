//! Monotonic time source used to stamp received bytes.
use embassy_time::Instant;

/// Clock trait abstraction.
///
/// On firmware with an embassy time driver, `|| Instant::now()` is enough.
pub trait LinClock {
    /// Current monotonic time.
    fn now(&mut self) -> Instant;
}

impl<F> LinClock for F
where
    F: FnMut() -> Instant,
{
    fn now(&mut self) -> Instant {
        self()
    }
}
