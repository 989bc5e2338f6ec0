//! Tessera - framebuffer-less panel demo
//!
//! Drives an ILI9341 on SPI0 and shows the uptime as a large clock label.
//! The panel is painted straight from the label compositor, one byte per
//! loop iteration, interleaved with everything else the loop does.
//!
//! Wiring: SCK GPIO18, MOSI GPIO19, MISO GPIO16, CS GPIO17 (held low),
//! D/C GPIO20, RESET GPIO21.

#![no_std]
#![no_main]

use core::fmt::Write;

use defmt::*;
use embassy_executor::Spawner;
use embassy_futures::yield_now;
use embassy_rp::gpio::{Level, Output};
use embassy_rp::pac;
use embassy_rp::spi::Spi;
use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::signal::Signal;
use embassy_time::{Delay, Duration, Ticker};
use heapless::String;
use {defmt_rtt as _, panic_probe as _};

use tessera_core::config::{parse_config, Config};
use tessera_core::{PaintRequest, Repaint, Rgb24};
use tessera_drivers::{Ili9341, SpiDisplayBus};
use tessera_gui::{Compositor, GlyphTable};
use tessera_hal::SpiConfig;
use tessera_hal_rp2040::{spi_config, ControlPin, Rp2040Transport};

mod font;

/// Embedded panel configuration (compiled into firmware)
/// Edit panel.toml and rebuild to customize
const PANEL_CONFIG: &str = include_str!("../panel.toml");

/// Clock label: scale 4 glyphs, 32 px tall
const CLOCK_SCALE: u8 = 4;
const CLOCK_SPACING: u8 = 1;
const CLOCK_X: u16 = 16;
const CLOCK_Y: u16 = 104;

/// Seconds since boot, raised once a second
static SECOND_SIGNAL: Signal<CriticalSectionRawMutex, u32> = Signal::new();

/// Main entry point
#[embassy_executor::main]
async fn main(spawner: Spawner) {
    info!("Tessera firmware starting...");

    let p = embassy_rp::init(Default::default());

    let config = load_config();
    info!(
        "Panel {}x{}, policy {}, SPI {} Hz",
        config.panel.width, config.panel.height, config.panel.policy, config.panel.spi_frequency_hz
    );

    // SPI0, chip select tied low for the whole session
    let spi_cfg = spi_config(&SpiConfig::with_frequency(config.panel.spi_frequency_hz));
    let spi = Spi::new_blocking(p.SPI0, p.PIN_18, p.PIN_19, p.PIN_16, spi_cfg);
    let _cs = Output::new(p.PIN_17, Level::Low);
    let dc = ControlPin::new(p.PIN_20, Level::High);
    let reset = ControlPin::new(p.PIN_21, Level::High);

    let bus = SpiDisplayBus::new(Rp2040Transport::new(spi, pac::SPI0), dc);
    let mut panel: Ili9341<_, _> = unwrap!(Ili9341::new(bus, reset, config.panel));

    unwrap!(panel.init(&mut Delay));

    let mut gui: Compositor<GlyphTable> = Compositor::new(font::DIGITS);
    forward(&mut panel, gui.set_background(config.ui.background));

    let (clock, repaint) = unwrap!(gui.add_label(
        "00:00:00",
        CLOCK_SCALE,
        CLOCK_SPACING,
        Rgb24::WHITE,
        CLOCK_X,
        CLOCK_Y
    ));
    forward(&mut panel, repaint);

    // Show the panel only once the first frame is in
    while panel.is_painting() {
        unwrap!(panel.tick(&gui));
    }
    unwrap!(panel.display_on());
    info!("Panel up");

    unwrap!(spawner.spawn(seconds_task()));

    let mut text: String<8> = String::new();
    loop {
        if let Some(seconds) = SECOND_SIGNAL.try_take() {
            text.clear();
            let (h, m, s) = (seconds / 3600 % 100, seconds / 60 % 60, seconds % 60);
            if write!(text, "{:02}:{:02}:{:02}", h, m, s).is_ok() {
                match gui.set_text(clock, &text) {
                    Ok(repaint) => forward(&mut panel, repaint),
                    Err(e) => warn!("Clock update failed: {}", e),
                }
            }
        }

        unwrap!(panel.tick(&gui));
        yield_now().await;
    }
}

/// Parse the embedded config, falling back to defaults
fn load_config() -> Config {
    match parse_config(PANEL_CONFIG) {
        Ok(config) => config,
        Err(e) => {
            // build.rs already checked the file, so this is unexpected
            error!("Failed to parse embedded panel.toml: {}", e);
            error!("Using default configuration");
            Config::default()
        }
    }
}

/// Hand a compositor repaint to the driver
fn forward<B, RST>(panel: &mut Ili9341<B, RST>, repaint: Repaint)
where
    B: tessera_core::DisplayBus,
    RST: tessera_hal::OutputPin,
{
    match panel.request(repaint) {
        Ok(PaintRequest::Queued) => debug!("Repaint queued: {}", repaint),
        Ok(_) => {}
        Err(e) => warn!("Repaint dropped: {}", e),
    }
}

/// Raises [`SECOND_SIGNAL`] once a second
#[embassy_executor::task]
async fn seconds_task() {
    let mut ticker = Ticker::every(Duration::from_secs(1));
    let mut seconds: u32 = 0;

    loop {
        ticker.next().await;
        seconds = seconds.wrapping_add(1);
        SECOND_SIGNAL.signal(seconds);
    }
}
