//! Paint state machine
//!
//! A non-blocking scheduler: each [`PaintEngine::tick`] does at most one
//! unit of work (program an address window, send one pixel byte, or pick
//! up one queued request) and returns. A tick that finds the transport busy
//! does nothing and the next one retries; that is the only backpressure.
//! The one blocking wait is the drain after the final byte of a paint.
//!
//! Not reentrant. `tick()` and the request methods must be called from the
//! same execution context; callers that raise repaints from interrupt
//! handlers have to serialize against the main loop themselves.

use super::{PaintPolicy, PaintRequest, PaintState, Repaint, RequestError, Tick, TransferPhase};
use crate::color::Rgb24;
use crate::config::PanelConfig;
use crate::geometry::{ActiveBounds, Region, SweepCursor};
use crate::queue::{PaintQueue, QUEUE_CAPACITY};
use crate::traits::{DisplayBus, PixelProvider};
use crate::window::{self, AddressWindow};

/// Framebuffer-less paint scheduler
///
/// `N` is the partial-paint queue capacity (a power of two).
#[derive(Debug, Clone)]
pub struct PaintEngine<const N: usize = QUEUE_CAPACITY> {
    /// Panel width in pixels
    width: u16,
    /// Panel height in pixels
    height: u16,
    /// Handling of requests raised mid-paint
    policy: PaintPolicy,
    /// Current state
    state: PaintState,
    /// Rectangle being streamed; meaningless while idle
    bounds: ActiveBounds,
    /// Pixel being streamed
    cursor: SweepCursor,
    /// Next byte of the current pixel
    phase: TransferPhase,
    /// Masked color of the current pixel, once fetched
    pixel: Option<Rgb24>,
    /// Requests waiting for the engine to go idle
    queue: PaintQueue<N>,
}

impl<const N: usize> PaintEngine<N> {
    /// Create an idle engine for a `width` x `height` panel
    pub const fn new(width: u16, height: u16, policy: PaintPolicy) -> Self {
        let full = ActiveBounds {
            x_start: 0,
            x_end: width,
            y_start: 0,
            y_end: height,
        };
        Self {
            width,
            height,
            policy,
            state: PaintState::Idle,
            bounds: full,
            cursor: full.origin(),
            phase: TransferPhase::ChannelHigh,
            pixel: None,
            queue: PaintQueue::new(),
        }
    }

    /// Create an idle engine from a panel configuration
    pub const fn from_config(config: &PanelConfig) -> Self {
        Self::new(config.width, config.height, config.policy)
    }

    /// Panel size as `(width, height)`
    pub const fn panel_size(&self) -> (u16, u16) {
        (self.width, self.height)
    }

    pub const fn policy(&self) -> PaintPolicy {
        self.policy
    }

    pub const fn state(&self) -> PaintState {
        self.state
    }

    /// True from the moment a paint is accepted until its final byte has
    /// drained
    pub fn is_painting(&self) -> bool {
        self.state != PaintState::Idle
    }

    /// Rectangle currently being painted, if any
    pub fn active_bounds(&self) -> Option<ActiveBounds> {
        self.is_painting().then_some(self.bounds)
    }

    /// Pixel currently being streamed
    pub const fn cursor(&self) -> SweepCursor {
        self.cursor
    }

    /// Next byte of the current pixel
    pub const fn transfer_phase(&self) -> TransferPhase {
        self.phase
    }

    /// Requests waiting for the current paint to finish
    pub const fn queue(&self) -> &PaintQueue<N> {
        &self.queue
    }

    /// Repaint the whole panel
    ///
    /// While busy this always queues a fresh full-panel entry (queue
    /// policy), even if partial requests are already waiting.
    pub fn request_full_paint(&mut self) -> Result<PaintRequest, RequestError> {
        self.request(Repaint::Full)
    }

    /// Repaint `region`, clipped to the panel
    pub fn request_partial_paint(&mut self, region: Region) -> Result<PaintRequest, RequestError> {
        self.request(Repaint::Region(region))
    }

    /// Accept a repaint request
    ///
    /// Idle: the paint starts and the address window goes out on the next
    /// tick. Busy: the region is queued or merged per the policy. A paint
    /// in flight is never cancelled or replaced.
    pub fn request(&mut self, repaint: Repaint) -> Result<PaintRequest, RequestError> {
        let region = match repaint {
            Repaint::Full => Region::full(self.width, self.height),
            Repaint::Region(region) => region,
        };
        let Some(region) = region.clip(self.width, self.height) else {
            return Ok(PaintRequest::Ignored);
        };

        if !self.is_painting() {
            self.begin(ActiveBounds::from(region));
            return Ok(PaintRequest::Started);
        }

        match self.policy {
            PaintPolicy::Queue => {
                if let Err(e) = self.queue.push(region) {
                    #[cfg(feature = "defmt")]
                    defmt::warn!("Paint queue full, refusing {}", region);
                    return Err(e.into());
                }
                Ok(PaintRequest::Queued)
            }
            PaintPolicy::Merge => Ok(self.merge(region)),
        }
    }

    /// Advance the pipeline by at most one unit of work
    ///
    /// Call on every iteration of the application loop. With nothing
    /// active and nothing queued this returns [`Tick::Idle`] and changes
    /// nothing.
    pub fn tick<B, P>(&mut self, bus: &mut B, provider: &P) -> Result<Tick, B::Error>
    where
        B: DisplayBus,
        P: PixelProvider + ?Sized,
    {
        match self.state {
            PaintState::Idle => match self.queue.pop() {
                Some(region) => {
                    self.begin(ActiveBounds::from(region));
                    Ok(Tick::Dequeued)
                }
                None => Ok(Tick::Idle),
            },
            PaintState::Addressing => {
                window::program(bus, &AddressWindow::from(&self.bounds))?;
                self.state = PaintState::Streaming;
                Ok(Tick::Addressed)
            }
            PaintState::Streaming => self.stream(bus, provider),
            PaintState::Draining => {
                self.drain(bus)?;
                Ok(Tick::Completed)
            }
        }
    }

    /// Reset the sweep onto `bounds` and arm addressing
    fn begin(&mut self, bounds: ActiveBounds) {
        #[cfg(feature = "defmt")]
        defmt::debug!("Paint start {}", bounds);

        self.bounds = bounds;
        self.cursor = bounds.origin();
        self.phase = TransferPhase::ChannelHigh;
        self.pixel = None;
        self.state = PaintState::Addressing;
    }

    fn merge(&mut self, region: Region) -> PaintRequest {
        let incoming = ActiveBounds::from(region);
        if self.bounds.contains(&incoming) {
            return PaintRequest::Absorbed;
        }

        let merged = self.bounds.union(&incoming);
        #[cfg(feature = "defmt")]
        defmt::debug!("Paint bounds grown to {}", merged);
        self.begin(merged);
        PaintRequest::Merged
    }

    fn stream<B, P>(&mut self, bus: &mut B, provider: &P) -> Result<Tick, B::Error>
    where
        B: DisplayBus,
        P: PixelProvider + ?Sized,
    {
        if !bus.is_ready() {
            return Ok(Tick::Stalled);
        }

        let color = match self.pixel {
            Some(color) => color,
            None => {
                let color = provider.pixel(self.cursor.x, self.cursor.y).masked();
                self.pixel = Some(color);
                color
            }
        };

        let sent = self.phase;
        bus.data_async(color.bytes()[sent.index()])?;

        match sent.next() {
            Some(next) => self.phase = next,
            None => {
                self.phase = TransferPhase::ChannelHigh;
                self.pixel = None;
                if self.cursor.advance(&self.bounds) {
                    self.state = PaintState::Draining;
                    self.drain(bus)?;
                    return Ok(Tick::Completed);
                }
            }
        }

        Ok(Tick::Sent(sent))
    }

    /// Wait out the final byte and go idle
    ///
    /// On a bus error the engine stays in `Draining` and the next tick
    /// retries.
    fn drain<B: DisplayBus>(&mut self, bus: &mut B) -> Result<(), B::Error> {
        bus.flush()?;
        self.state = PaintState::Idle;

        #[cfg(feature = "defmt")]
        defmt::debug!("Paint complete, {} queued", self.queue.len());

        Ok(())
    }
}
