//! Publication point for decoded frames.
//!
//! The store holds the last verified frame and the timestamp of the last
//! received byte. Both are replaced as whole values under an
//! [`embassy_sync`] blocking mutex, so a reader in another execution context
//! (main loop vs. UART interrupt) never sees a half-written frame.
//!
//! Pick the raw mutex to match the deployment:
//! * `NoopRawMutex` when the receiver and the reader share one context;
//! * `CriticalSectionRawMutex` for a `static` store shared with an interrupt.
use core::cell::Cell;

use embassy_sync::blocking_mutex::{raw::RawMutex, Mutex};
use embassy_time::Instant;

use crate::protocol::frame::LinFrame;

#[derive(Debug, Clone, Copy)]
struct StoreState {
    frame: Option<LinFrame>,
    last_byte_at: Option<Instant>,
}

/// Shared slot for the verified frame and the last-byte timestamp.
pub struct FrameStore<M: RawMutex> {
    state: Mutex<M, Cell<StoreState>>,
}

impl<M: RawMutex> Default for FrameStore<M> {
    fn default() -> Self {
        Self::new()
    }
}

impl<M: RawMutex> FrameStore<M> {
    /// Empty store. Usable in a `static` initializer.
    pub const fn new() -> Self {
        Self {
            state: Mutex::new(Cell::new(StoreState {
                frame: None,
                last_byte_at: None,
            })),
        }
    }

    /// Replace the verified frame in one step.
    pub fn publish(&self, frame: LinFrame) {
        self.state.lock(|cell| {
            let mut state = cell.get();
            state.frame = Some(frame);
            cell.set(state);
        });
    }

    pub fn record_byte(&self, at: Instant) {
        self.state.lock(|cell| {
            let mut state = cell.get();
            state.last_byte_at = Some(at);
            cell.set(state);
        });
    }

    /// Last verified frame, `None` until one has been published.
    pub fn latest(&self) -> Option<LinFrame> {
        self.state.lock(|cell| cell.get().frame)
    }

    pub fn last_byte_at(&self) -> Option<Instant> {
        self.state.lock(|cell| cell.get().last_byte_at)
    }
}
