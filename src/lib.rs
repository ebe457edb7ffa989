//! A fixed-capacity FIFO ring buffer with oldest-element eviction.
//!
//! The crate exposes a single container, [`BoundedRingBuffer`]: a bounded
//! queue that drops its oldest element instead of rejecting an insert once
//! the capacity chosen at construction is reached. There is no internal
//! synchronization; callers sharing a buffer across threads must wrap it in
//! a lock.

pub mod error;
pub mod ring_buffer;

pub use error::{RingCapError, RingCapResult};
pub use ring_buffer::BoundedRingBuffer;
