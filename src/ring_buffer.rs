use log::trace;

use crate::error::{RingCapError, RingCapResult};

/// A fixed-capacity FIFO buffer that evicts the oldest element to make room
/// when a new element arrives at full capacity.
///
/// Backed by an index-wrapped array, so `enqueue` and `dequeue` are O(1).
#[derive(Debug, Clone)]
pub struct BoundedRingBuffer<T> {
    buf: Vec<Option<T>>,
    head: usize,
    len: usize,
}

impl<T> BoundedRingBuffer<T> {
    /// Creates an empty buffer holding at most `capacity` elements.
    ///
    /// The capacity is fixed for the lifetime of the buffer.
    pub fn new(capacity: usize) -> RingCapResult<Self> {
        if capacity == 0 {
            return Err(RingCapError::InvalidCapacity(capacity));
        }
        let mut buf = Vec::with_capacity(capacity);
        buf.resize_with(capacity, || None);
        Ok(Self {
            buf,
            head: 0,
            len: 0,
        })
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn is_full(&self) -> bool {
        self.len == self.buf.len()
    }

    pub fn capacity(&self) -> usize {
        self.buf.len()
    }

    /// Appends `item` at the back. At full capacity the front element is
    /// dropped first, so the length never grows past `capacity`.
    pub fn enqueue(&mut self, item: T) {
        let cap = self.buf.len();
        if self.len < cap {
            let tail = (self.head + self.len) % cap;
            self.buf[tail] = Some(item);
            self.len += 1;
        } else {
            trace!("buffer full (capacity {cap}), evicting oldest element");
            self.buf[self.head] = Some(item);
            self.head = (self.head + 1) % cap;
        }
    }

    /// Removes and returns the oldest element, or `None` if the buffer is
    /// empty. Empty is a normal outcome, not an error.
    pub fn dequeue(&mut self) -> Option<T> {
        if self.len == 0 {
            return None;
        }
        let item = self.buf[self.head].take();
        self.head = (self.head + 1) % self.buf.len();
        self.len -= 1;
        item
    }

    /// Returns the oldest element without removing it, or `None` if the
    /// buffer is empty.
    pub fn peek(&self) -> Option<&T> {
        if self.len == 0 {
            return None;
        }
        self.buf[self.head].as_ref()
    }

    /// Drops all retained elements. The buffer stays usable afterwards.
    pub fn clear(&mut self) {
        for slot in self.buf.iter_mut() {
            *slot = None;
        }
        self.head = 0;
        self.len = 0;
    }

    /// Iterates over the retained elements from oldest to newest.
    pub fn iter(&self) -> impl Iterator<Item = &T> + '_ {
        let cap = self.buf.len();
        (0..self.len).filter_map(move |i| self.buf[(self.head + i) % cap].as_ref())
    }
}
