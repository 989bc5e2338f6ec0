use embedded_hal::delay::DelayNs;
use tessera_core::config::{ConfigError, PanelConfig};
use tessera_core::paint::{PaintEngine, PaintRequest, Repaint, RequestError, Tick};
use tessera_core::window::{self, AddressWindow};
use tessera_core::{DisplayBus, PixelProvider, Region, QUEUE_CAPACITY};
use tessera_hal::OutputPin;

use super::commands::*;
use super::init::INIT_TABLE;

/// Driver error
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DriverError<E> {
    /// Transport failure
    Bus(E),
    /// Panel configuration rejected at construction
    Config(ConfigError),
}

impl<E> From<ConfigError> for DriverError<E> {
    fn from(e: ConfigError) -> Self {
        DriverError::Config(e)
    }
}

/// ILI9341 panel with its paint engine
///
/// Owns the bus and the reset line. Painting goes through [`tick`](Self::tick);
/// lifecycle commands block for their delays and must not be issued while
/// [`is_painting`](Self::is_painting) is true.
pub struct Ili9341<B, RST, const N: usize = QUEUE_CAPACITY> {
    bus: B,
    reset: RST,
    config: PanelConfig,
    engine: PaintEngine<N>,
}

impl<B, RST, const N: usize> Ili9341<B, RST, N>
where
    B: DisplayBus,
    RST: OutputPin,
{
    /// Create a driver; nothing is sent until [`init`](Self::init)
    pub fn new(bus: B, reset: RST, config: PanelConfig) -> Result<Self, DriverError<B::Error>> {
        config.validate()?;
        Ok(Self {
            bus,
            reset,
            config,
            engine: PaintEngine::from_config(&config),
        })
    }

    pub fn config(&self) -> &PanelConfig {
        &self.config
    }

    /// Paint engine state, for inspection
    pub fn engine(&self) -> &PaintEngine<N> {
        &self.engine
    }

    /// Give back the bus and reset pin
    pub fn release(self) -> (B, RST) {
        (self.bus, self.reset)
    }

    /// Reset and configure the controller
    ///
    /// Leaves the panel awake with the full-panel address window armed and
    /// the display still off; follow with [`display_on`](Self::display_on)
    /// once the first frame has been painted.
    pub fn init<D: DelayNs>(&mut self, delay: &mut D) -> Result<(), DriverError<B::Error>> {
        #[cfg(feature = "defmt")]
        defmt::info!(
            "ILI9341 init {}x{}, MADCTL {=u8:#x}",
            self.config.width,
            self.config.height,
            self.config.memory_access.bits()
        );

        self.reset.set_high();
        delay.delay_ms(1);
        self.reset.set_low();
        delay.delay_ms(1);
        self.reset.set_high();
        delay.delay_ms(RESET_DELAY_MS);

        self.command(SOFTWARE_RESET)?;
        delay.delay_ms(RESET_DELAY_MS);
        self.command(DISPLAY_OFF)?;

        for &(cmd, params) in INIT_TABLE {
            self.command_with_data(cmd, params)?;
        }
        self.command_with_data(MEMORY_ACCESS_CONTROL, &[self.config.memory_access.bits()])?;
        self.command_with_data(PIXEL_FORMAT_SET, &[PIXEL_FORMAT_18BPP])?;

        self.command(SLEEP_OUT)?;
        delay.delay_ms(SLEEP_OUT_DELAY_MS);

        window::program(
            &mut self.bus,
            &AddressWindow::full(self.config.width, self.config.height),
        )
        .map_err(DriverError::Bus)
    }

    /// Dim the backlight and enter sleep
    pub fn sleep<D: DelayNs>(&mut self, delay: &mut D) -> Result<(), DriverError<B::Error>> {
        self.warn_if_painting();
        self.command_with_data(WRITE_CTRL_DISPLAY, &[CTRL_BACKLIGHT_DIM])?;
        self.command_with_data(WRITE_BRIGHTNESS, &[0x01])?;
        self.command(DISPLAY_OFF)?;
        self.command(SLEEP_IN)?;
        delay.delay_ms(RESET_DELAY_MS);
        Ok(())
    }

    /// Leave sleep, restore the backlight and show the panel
    pub fn wake<D: DelayNs>(&mut self, delay: &mut D) -> Result<(), DriverError<B::Error>> {
        self.warn_if_painting();
        self.command_with_data(WRITE_CTRL_DISPLAY, &[CTRL_BACKLIGHT_ON])?;
        self.command(SLEEP_OUT)?;
        delay.delay_ms(SLEEP_OUT_DELAY_MS);
        self.command(DISPLAY_ON)
    }

    pub fn display_on(&mut self) -> Result<(), DriverError<B::Error>> {
        self.warn_if_painting();
        self.command(DISPLAY_ON)
    }

    pub fn display_off(&mut self) -> Result<(), DriverError<B::Error>> {
        self.warn_if_painting();
        self.command(DISPLAY_OFF)
    }

    /// Repaint the whole panel
    pub fn request_full_paint(&mut self) -> Result<PaintRequest, RequestError> {
        self.engine.request_full_paint()
    }

    /// Repaint one region
    pub fn request_partial_paint(&mut self, region: Region) -> Result<PaintRequest, RequestError> {
        self.engine.request_partial_paint(region)
    }

    /// Forward a repaint raised by the pixel provider
    pub fn request(&mut self, repaint: Repaint) -> Result<PaintRequest, RequestError> {
        self.engine.request(repaint)
    }

    pub fn is_painting(&self) -> bool {
        self.engine.is_painting()
    }

    /// Advance the paint pipeline by one step
    pub fn tick<P>(&mut self, provider: &P) -> Result<Tick, DriverError<B::Error>>
    where
        P: PixelProvider + ?Sized,
    {
        self.engine
            .tick(&mut self.bus, provider)
            .map_err(DriverError::Bus)
    }

    fn command(&mut self, cmd: u8) -> Result<(), DriverError<B::Error>> {
        self.bus.command(cmd).map_err(DriverError::Bus)
    }

    fn command_with_data(&mut self, cmd: u8, data: &[u8]) -> Result<(), DriverError<B::Error>> {
        self.bus.command_with_data(cmd, data).map_err(DriverError::Bus)
    }

    fn warn_if_painting(&self) {
        #[cfg(feature = "defmt")]
        if self.engine.is_painting() {
            defmt::warn!("ILI9341 lifecycle command during a paint");
        }
    }
}
