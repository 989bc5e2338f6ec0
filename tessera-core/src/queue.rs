//! Partial-paint request queue
//!
//! Requests raised while a paint is in flight wait here until the engine
//! goes idle. The queue is a fixed ring of slots; a slot holding a region
//! is pending. Enqueueing into a pending slot would overwrite a request
//! that has not been painted yet, so it is refused with [`QueueFull`] and
//! the caller decides whether to drop, coalesce, or retry.

use crate::geometry::Region;

/// Default queue capacity
pub const QUEUE_CAPACITY: usize = 32;

/// The slot at the head of the queue is still pending
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct QueueFull;

/// Bounded FIFO of pending repaint regions
///
/// `N` must be a power of two so head and tail wrap with a mask.
#[derive(Debug, Clone)]
pub struct PaintQueue<const N: usize = QUEUE_CAPACITY> {
    slots: [Option<Region>; N],
    /// Next slot to fill
    head: usize,
    /// Next slot to drain
    tail: usize,
}

impl<const N: usize> Default for PaintQueue<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const N: usize> PaintQueue<N> {
    const CAPACITY_IS_POWER_OF_TWO: () = assert!(
        N.is_power_of_two(),
        "paint queue capacity must be a power of two"
    );

    const MASK: usize = N - 1;

    /// Create an empty queue
    pub const fn new() -> Self {
        #[allow(clippy::let_unit_value)]
        let () = Self::CAPACITY_IS_POWER_OF_TWO;
        Self {
            slots: [None; N],
            head: 0,
            tail: 0,
        }
    }

    /// Append a region at the head slot
    pub fn push(&mut self, region: Region) -> Result<(), QueueFull> {
        let slot = &mut self.slots[self.head];
        if slot.is_some() {
            return Err(QueueFull);
        }
        *slot = Some(region);
        self.head = (self.head + 1) & Self::MASK;
        Ok(())
    }

    /// Take the oldest pending region
    pub fn pop(&mut self) -> Option<Region> {
        let region = self.slots[self.tail].take()?;
        self.tail = (self.tail + 1) & Self::MASK;
        Some(region)
    }

    /// Oldest pending region, left in place
    pub fn peek(&self) -> Option<&Region> {
        self.slots[self.tail].as_ref()
    }

    /// Number of pending regions
    pub fn len(&self) -> usize {
        if self.is_full() {
            N
        } else {
            self.head.wrapping_sub(self.tail) & Self::MASK
        }
    }

    pub fn is_empty(&self) -> bool {
        self.slots[self.tail].is_none()
    }

    pub fn is_full(&self) -> bool {
        self.slots[self.head].is_some()
    }

    pub const fn capacity(&self) -> usize {
        N
    }

    /// Slot the next push will fill
    pub const fn head(&self) -> usize {
        self.head
    }

    /// Slot the next pop will drain
    pub const fn tail(&self) -> usize {
        self.tail
    }

    /// Drop every pending region
    pub fn clear(&mut self) {
        self.slots = [None; N];
        self.head = 0;
        self.tail = 0;
    }
}
