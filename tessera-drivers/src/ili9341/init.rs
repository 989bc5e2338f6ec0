//! Manufacturer init table
//!
//! Opaque tuning values from the panel vendor, sent verbatim after reset.
//! Scan direction and pixel format are not in here; the driver sends them
//! from the panel configuration.

use super::commands::*;

/// `(command, parameters)` in transmission order
pub static INIT_TABLE: &[(u8, &[u8])] = &[
    (POWER_ON_SEQUENCE, &[0x64, 0x03, 0x12, 0x81]),
    (DRIVER_TIMING_A, &[0x85, 0x00, 0x78]),
    (DRIVER_TIMING_B, &[0x00, 0x00]),
    (POWER_CONTROL_A, &[0x39, 0x2C, 0x00, 0x34, 0x02]),
    (POWER_CONTROL_B, &[0x00, 0xC1, 0x30]),
    (PUMP_RATIO, &[0x20]),
    (POWER_CONTROL_1, &[0x09]),
    (POWER_CONTROL_2, &[0x01]),
    (VCOM_CONTROL_1, &[0x18, 0x64]),
    (VCOM_CONTROL_2, &[0x9F]),
    (FRAME_RATE_CONTROL, &[0x00, 0x18]),
    (DISPLAY_FUNCTION_CONTROL, &[0x0A, 0x82, 0x27, 0x00]),
    (ENABLE_3_GAMMA, &[0x00]),
    (GAMMA_SET, &[0x01]),
    (
        POSITIVE_GAMMA,
        &[
            0x0F, 0x31, 0x2B, 0x0C, 0x0E, 0x08, 0x4E, 0xF1, 0x37, 0x07, 0x10, 0x03, 0x0E, 0x09,
            0x00,
        ],
    ),
    (
        NEGATIVE_GAMMA,
        &[
            0x00, 0x0E, 0x14, 0x03, 0x11, 0x07, 0x31, 0xC1, 0x48, 0x08, 0x0F, 0x0C, 0x31, 0x36,
            0x0F,
        ],
    ),
    (ENABLE_3_GAMMA, &[0x03]),
    (BACKLIGHT_CONTROL, &[0x04]),
    (WRITE_CTRL_DISPLAY, &[CTRL_BRIGHTNESS_ONLY]),
    (WRITE_BRIGHTNESS, &[0xFF]),
];
