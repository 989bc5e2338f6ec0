//! Shared-log mocks for driver tests

use std::cell::RefCell;
use std::rc::Rc;
use std::vec::Vec;

use embedded_hal::delay::DelayNs;
use tessera_hal::{OutputPin, SpiTransport};

use crate::bus::SpiDisplayBus;

/// Everything the driver did, in order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    Dc(bool),
    Reset(bool),
    Write(u8),
    Async(u8),
    WaitIdle,
    Drain,
    DelayMs(u32),
}

/// A byte as the controller sees it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Wire {
    Command(u8),
    Data(u8),
}

struct State {
    events: Vec<Event>,
    ready: bool,
    /// Current D/C level
    dc: bool,
    /// D/C level when `events` was last cleared
    dc_at_start: bool,
}

#[derive(Clone)]
pub struct Log(Rc<RefCell<State>>);

impl Log {
    pub fn new() -> Self {
        Self(Rc::new(RefCell::new(State {
            events: Vec::new(),
            ready: true,
            dc: true,
            dc_at_start: true,
        })))
    }

    fn push(&self, event: Event) {
        let mut state = self.0.borrow_mut();
        if let Event::Dc(high) = event {
            state.dc = high;
        }
        state.events.push(event);
    }

    pub fn events(&self) -> Vec<Event> {
        self.0.borrow().events.clone()
    }

    /// Forget recorded events; the D/C level carries over into `wire()`
    pub fn clear(&self) {
        let mut state = self.0.borrow_mut();
        state.events.clear();
        state.dc_at_start = state.dc;
    }

    pub fn set_ready(&self, ready: bool) {
        self.0.borrow_mut().ready = ready;
    }

    /// Bytes on the wire, classified by the D/C level at the time
    pub fn wire(&self) -> Vec<Wire> {
        let state = self.0.borrow();
        let mut data = state.dc_at_start;
        let mut wire = Vec::new();
        for event in state.events.iter() {
            match *event {
                Event::Dc(high) => data = high,
                Event::Write(b) | Event::Async(b) if data => wire.push(Wire::Data(b)),
                Event::Write(b) | Event::Async(b) => wire.push(Wire::Command(b)),
                _ => {}
            }
        }
        wire
    }

    pub fn transport(&self) -> MockTransport {
        MockTransport { log: self.clone() }
    }

    pub fn dc(&self) -> MockPin {
        MockPin {
            log: self.clone(),
            reset: false,
            high: false,
        }
    }

    pub fn reset(&self) -> MockPin {
        MockPin {
            log: self.clone(),
            reset: true,
            high: true,
        }
    }

    pub fn delay(&self) -> MockDelay {
        MockDelay { log: self.clone() }
    }
}

pub struct MockTransport {
    log: Log,
}

impl SpiTransport for MockTransport {
    type Error = ();

    fn write(&mut self, byte: u8) -> Result<(), ()> {
        self.log.push(Event::Write(byte));
        Ok(())
    }

    fn write_async(&mut self, byte: u8) -> Result<(), ()> {
        self.log.push(Event::Async(byte));
        Ok(())
    }

    fn is_ready(&self) -> bool {
        self.log.0.borrow().ready
    }

    fn is_busy(&self) -> bool {
        false
    }

    fn is_receive_full(&self) -> bool {
        true
    }

    fn discard_received(&mut self) {}

    fn wait_idle(&mut self) {
        self.log.push(Event::WaitIdle);
    }

    fn wait_receive_full(&mut self) {
        self.log.push(Event::Drain);
    }
}

pub struct MockPin {
    log: Log,
    reset: bool,
    high: bool,
}

impl OutputPin for MockPin {
    fn set_high(&mut self) {
        self.high = true;
        self.log.push(if self.reset {
            Event::Reset(true)
        } else {
            Event::Dc(true)
        });
    }

    fn set_low(&mut self) {
        self.high = false;
        self.log.push(if self.reset {
            Event::Reset(false)
        } else {
            Event::Dc(false)
        });
    }

    fn is_set_high(&self) -> bool {
        self.high
    }
}

pub struct MockDelay {
    log: Log,
}

impl DelayNs for MockDelay {
    fn delay_ns(&mut self, _ns: u32) {}

    fn delay_ms(&mut self, ms: u32) {
        self.log.push(Event::DelayMs(ms));
    }
}

/// A bus over a fresh log
pub fn bus() -> (SpiDisplayBus<MockTransport, MockPin>, Log) {
    let log = Log::new();
    let bus = SpiDisplayBus::new(log.transport(), log.dc());
    (bus, log)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tessera_core::DisplayBus;

    #[test]
    fn test_wire_keeps_dc_level_across_clear() {
        let (mut bus, log) = bus();
        bus.command(0x10).unwrap();
        log.clear();

        // D/C is still low, so the next command needs no toggle
        bus.command(0x11).unwrap();
        assert_eq!(log.wire(), [Wire::Command(0x11)]);
    }
}
