//! Recording bus for unit tests

use core::cell::Cell;
use std::vec::Vec;

use crate::traits::DisplayBus;
use crate::window::{cmd, AddressWindow};

/// One transaction seen by the bus
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Op {
    Command(u8),
    Data(u8),
    Async(u8),
    Flush,
}

/// Bus that records every transaction
///
/// With `stall_every = Some(n)`, every n-th readiness poll reports busy.
pub struct MockBus {
    pub ops: Vec<Op>,
    pub stall_every: Option<u32>,
    polls: Cell<u32>,
}

impl MockBus {
    pub fn new() -> Self {
        Self {
            ops: Vec::new(),
            stall_every: None,
            polls: Cell::new(0),
        }
    }

    pub fn stalling(every: u32) -> Self {
        Self {
            stall_every: Some(every),
            ..Self::new()
        }
    }

    /// Pixel bytes queued through the non-blocking path
    pub fn pixel_bytes(&self) -> Vec<u8> {
        self.ops
            .iter()
            .filter_map(|op| match op {
                Op::Async(b) => Some(*b),
                _ => None,
            })
            .collect()
    }

    pub fn flushes(&self) -> usize {
        self.ops.iter().filter(|op| **op == Op::Flush).count()
    }

    /// Every address window programmed so far, decoded
    pub fn windows(&self) -> Vec<AddressWindow> {
        let mut windows = Vec::new();
        for (i, op) in self.ops.iter().enumerate() {
            if *op != Op::Command(cmd::COLUMN_ADDRESS_SET) {
                continue;
            }
            let arg = |at: usize| match self.ops[i + at] {
                Op::Data(b) => b as u16,
                other => panic!("expected window argument, got {:?}", other),
            };
            assert_eq!(self.ops[i + 5], Op::Command(cmd::PAGE_ADDRESS_SET));
            assert_eq!(self.ops[i + 10], Op::Command(cmd::MEMORY_WRITE));
            windows.push(AddressWindow {
                x_start: arg(1) << 8 | arg(2),
                x_end: arg(3) << 8 | arg(4),
                y_start: arg(6) << 8 | arg(7),
                y_end: arg(8) << 8 | arg(9),
            });
        }
        windows
    }
}

impl DisplayBus for MockBus {
    type Error = ();

    fn command(&mut self, cmd: u8) -> Result<(), ()> {
        self.ops.push(Op::Command(cmd));
        Ok(())
    }

    fn data(&mut self, byte: u8) -> Result<(), ()> {
        self.ops.push(Op::Data(byte));
        Ok(())
    }

    fn data_async(&mut self, byte: u8) -> Result<(), ()> {
        self.ops.push(Op::Async(byte));
        Ok(())
    }

    fn is_ready(&self) -> bool {
        let polls = self.polls.get() + 1;
        self.polls.set(polls);
        match self.stall_every {
            Some(n) => polls % n != 0,
            None => true,
        }
    }

    fn flush(&mut self) -> Result<(), ()> {
        self.ops.push(Op::Flush);
        Ok(())
    }
}
