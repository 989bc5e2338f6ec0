//! ILI9341 command set (the subset this driver sends)

/// Software reset
pub const SOFTWARE_RESET: u8 = 0x01;
/// Enter sleep mode
pub const SLEEP_IN: u8 = 0x10;
/// Exit sleep mode
pub const SLEEP_OUT: u8 = 0x11;
/// Gamma curve select
pub const GAMMA_SET: u8 = 0x26;
/// Blank the panel
pub const DISPLAY_OFF: u8 = 0x28;
/// Show frame memory
pub const DISPLAY_ON: u8 = 0x29;
/// Memory access control (MADCTL)
pub const MEMORY_ACCESS_CONTROL: u8 = 0x36;
/// Pixel format set (COLMOD)
pub const PIXEL_FORMAT_SET: u8 = 0x3A;
/// Backlight brightness
pub const WRITE_BRIGHTNESS: u8 = 0x51;
/// Brightness/backlight control enables
pub const WRITE_CTRL_DISPLAY: u8 = 0x53;
/// Frame rate control, normal mode
pub const FRAME_RATE_CONTROL: u8 = 0xB1;
/// Display function control
pub const DISPLAY_FUNCTION_CONTROL: u8 = 0xB6;
/// Backlight control 8
pub const BACKLIGHT_CONTROL: u8 = 0xBF;
/// Power control 1
pub const POWER_CONTROL_1: u8 = 0xC0;
/// Power control 2
pub const POWER_CONTROL_2: u8 = 0xC1;
/// VCOM control 1
pub const VCOM_CONTROL_1: u8 = 0xC5;
/// VCOM control 2
pub const VCOM_CONTROL_2: u8 = 0xC7;
/// Power control A
pub const POWER_CONTROL_A: u8 = 0xCB;
/// Power control B
pub const POWER_CONTROL_B: u8 = 0xCF;
/// Positive gamma correction
pub const POSITIVE_GAMMA: u8 = 0xE0;
/// Negative gamma correction
pub const NEGATIVE_GAMMA: u8 = 0xE1;
/// Driver timing control A
pub const DRIVER_TIMING_A: u8 = 0xE8;
/// Driver timing control B
pub const DRIVER_TIMING_B: u8 = 0xEA;
/// Power on sequence control
pub const POWER_ON_SEQUENCE: u8 = 0xED;
/// Enable 3-gamma control
pub const ENABLE_3_GAMMA: u8 = 0xF2;
/// Pump ratio control
pub const PUMP_RATIO: u8 = 0xF7;

/// COLMOD value: 18 bits per pixel on both interfaces
pub const PIXEL_FORMAT_18BPP: u8 = 0x66;

/// CTRL DISPLAY: brightness control block on, backlight on
pub const CTRL_BACKLIGHT_ON: u8 = 0x2C;
/// CTRL DISPLAY: brightness control block on, dimming on, backlight off
pub const CTRL_BACKLIGHT_DIM: u8 = 0x28;
/// CTRL DISPLAY used at init: brightness control block only
pub const CTRL_BRIGHTNESS_ONLY: u8 = 0x20;

/// Settle time after a reset pulse or software reset, ms
pub const RESET_DELAY_MS: u32 = 5;
/// Settle time after SLEEP OUT, ms
pub const SLEEP_OUT_DELAY_MS: u32 = 100;
