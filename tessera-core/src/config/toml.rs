//! Minimal TOML reader for `panel.toml`
//!
//! Handles only the subset the panel configuration needs, without
//! allocating:
//! - `[panel]`, `[panel.memory_access]` and `[ui]` section headers
//! - key = value pairs (decimal or `0x` hex integers, `_` separators,
//!   booleans, quoted strings)
//! - comments (`# ...`), whole-line or trailing
//!
//! Keys the reader does not know are rejected rather than skipped, so a
//! misspelt key cannot silently fall back to its default.

use super::types::{Config, ConfigError};
use crate::color::Rgb24;
use crate::paint::PaintPolicy;

/// Current parsing context
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Section {
    Root,
    Panel,
    MemoryAccess,
    Ui,
}

/// Parse and validate a `panel.toml` document
///
/// Sections and keys that are absent keep their defaults.
pub fn parse_config(input: &str) -> Result<Config, ConfigError> {
    let mut config = Config::default();
    let mut section = Section::Root;

    for line in input.lines() {
        let line = strip_comment(line).trim();
        if line.is_empty() {
            continue;
        }

        if let Some(header) = line.strip_prefix('[') {
            let name = header.strip_suffix(']').ok_or(ConfigError::InvalidSection)?;
            section = parse_section_header(name)?;
            continue;
        }

        let (key, value) = parse_key_value(line).ok_or(ConfigError::InvalidValue)?;
        apply_value(section, key, value, &mut config)?;
    }

    config.validate()?;
    Ok(config)
}

fn parse_section_header(header: &str) -> Result<Section, ConfigError> {
    match header.trim() {
        "panel" => Ok(Section::Panel),
        "panel.memory_access" => Ok(Section::MemoryAccess),
        "ui" => Ok(Section::Ui),
        _ => Err(ConfigError::InvalidSection),
    }
}

/// Drop a trailing comment unless the `#` sits inside a string
fn strip_comment(line: &str) -> &str {
    let mut in_string = false;
    for (i, c) in line.char_indices() {
        match c {
            '"' => in_string = !in_string,
            '#' if !in_string => return &line[..i],
            _ => {}
        }
    }
    line
}

/// Split "key = value"
fn parse_key_value(line: &str) -> Option<(&str, &str)> {
    let (key, value) = line.split_once('=')?;
    let key = key.trim();
    let value = value.trim();
    if key.is_empty() || value.is_empty() {
        return None;
    }
    Some((key, value))
}

fn parse_string(value: &str) -> Result<&str, ConfigError> {
    value
        .strip_prefix('"')
        .and_then(|v| v.strip_suffix('"'))
        .ok_or(ConfigError::InvalidValue)
}

/// Decimal or `0x` hex, with optional `_` separators
fn parse_int(value: &str) -> Result<u32, ConfigError> {
    let (digits, radix) = match value
        .strip_prefix("0x")
        .or_else(|| value.strip_prefix("0X"))
    {
        Some(hex) => (hex, 16),
        None => (value, 10),
    };
    if digits.is_empty() || digits.starts_with('_') {
        return Err(ConfigError::InvalidValue);
    }

    let mut result: u32 = 0;
    for c in digits.chars().filter(|c| *c != '_') {
        let digit = c.to_digit(radix).ok_or(ConfigError::InvalidValue)?;
        result = result
            .checked_mul(radix)
            .and_then(|r| r.checked_add(digit))
            .ok_or(ConfigError::InvalidValue)?;
    }
    Ok(result)
}

fn parse_u16(value: &str) -> Result<u16, ConfigError> {
    u16::try_from(parse_int(value)?).map_err(|_| ConfigError::InvalidValue)
}

fn parse_bool(value: &str) -> Result<bool, ConfigError> {
    match value {
        "true" => Ok(true),
        "false" => Ok(false),
        _ => Err(ConfigError::InvalidValue),
    }
}

fn parse_policy(value: &str) -> Result<PaintPolicy, ConfigError> {
    match parse_string(value)? {
        "queue" => Ok(PaintPolicy::Queue),
        "merge" => Ok(PaintPolicy::Merge),
        _ => Err(ConfigError::InvalidValue),
    }
}

fn parse_color(value: &str) -> Result<Rgb24, ConfigError> {
    let rgb = parse_int(value)?;
    if rgb > 0x00FF_FFFF {
        return Err(ConfigError::InvalidValue);
    }
    Ok(Rgb24::from_u32(rgb))
}

fn apply_value(
    section: Section,
    key: &str,
    value: &str,
    config: &mut Config,
) -> Result<(), ConfigError> {
    match section {
        Section::Root => return Err(ConfigError::InvalidSection),
        Section::Panel => {
            let p = &mut config.panel;
            match key {
                "width" => p.width = parse_u16(value)?,
                "height" => p.height = parse_u16(value)?,
                "policy" => p.policy = parse_policy(value)?,
                "spi_frequency_hz" => p.spi_frequency_hz = parse_int(value)?,
                _ => return Err(ConfigError::UnknownKey),
            }
        }
        Section::MemoryAccess => {
            let m = &mut config.panel.memory_access;
            match key {
                "row_invert" => m.row_invert = parse_bool(value)?,
                "column_invert" => m.column_invert = parse_bool(value)?,
                "row_column_exchange" => m.row_column_exchange = parse_bool(value)?,
                "bgr" => m.bgr = parse_bool(value)?,
                _ => return Err(ConfigError::UnknownKey),
            }
        }
        Section::Ui => match key {
            "background" => config.ui.background = parse_color(value)?,
            _ => return Err(ConfigError::UnknownKey),
        },
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const PANEL_TOML: &str = r#"
# Landscape ILI9341 on SPI0

[panel]
width = 320
height = 240
policy = "merge"          # grow the active paint
spi_frequency_hz = 9_000_000

[panel.memory_access]
row_column_exchange = true
bgr = false

[ui]
background = 0x102030
"#;

    #[test]
    fn test_parse_full_document() {
        let config = parse_config(PANEL_TOML).unwrap();
        assert_eq!(config.panel.width, 320);
        assert_eq!(config.panel.height, 240);
        assert_eq!(config.panel.policy, PaintPolicy::Merge);
        assert_eq!(config.panel.spi_frequency_hz, 9_000_000);
        assert!(config.panel.memory_access.row_column_exchange);
        assert!(!config.panel.memory_access.bgr);
        assert_eq!(config.ui.background, Rgb24::from_u32(0x102030));
    }

    #[test]
    fn test_empty_document_is_default() {
        assert_eq!(parse_config(""), Ok(Config::default()));
        assert_eq!(parse_config("# nothing here\n\n"), Ok(Config::default()));
    }

    #[test]
    fn test_partial_section_keeps_defaults() {
        let config = parse_config("[panel]\nwidth = 240\nheight = 320\n").unwrap();
        assert_eq!((config.panel.width, config.panel.height), (240, 320));
        assert_eq!(config.panel.policy, PaintPolicy::Queue);
        assert_eq!(config.ui, Default::default());
    }

    #[test]
    fn test_rejects_unknown_section_and_key() {
        assert_eq!(
            parse_config("[backlight]\nlevel = 3\n"),
            Err(ConfigError::InvalidSection)
        );
        assert_eq!(parse_config("width = 320\n"), Err(ConfigError::InvalidSection));
        assert_eq!(
            parse_config("[panel]\nwidht = 320\n"),
            Err(ConfigError::UnknownKey)
        );
        assert_eq!(parse_config("[panel\n"), Err(ConfigError::InvalidSection));
        // Scan flags live in their own table
        assert_eq!(
            parse_config("[panel]\nbgr = true\n"),
            Err(ConfigError::UnknownKey)
        );
    }

    #[test]
    fn test_rejects_bad_values() {
        assert_eq!(
            parse_config("[panel]\nwidth = wide\n"),
            Err(ConfigError::InvalidValue)
        );
        assert_eq!(
            parse_config("[panel]\nwidth = 70000\n"),
            Err(ConfigError::InvalidValue)
        );
        assert_eq!(
            parse_config("[panel]\npolicy = queue\n"),
            Err(ConfigError::InvalidValue)
        );
        assert_eq!(
            parse_config("[panel.memory_access]\nbgr = yes\n"),
            Err(ConfigError::InvalidValue)
        );
        assert_eq!(
            parse_config("[ui]\nbackground = 0x1000000\n"),
            Err(ConfigError::InvalidValue)
        );
        assert_eq!(parse_config("[panel]\nwidth\n"), Err(ConfigError::InvalidValue));
    }

    #[test]
    fn test_validates_dimensions() {
        assert_eq!(
            parse_config("[panel]\nwidth = 480\n"),
            Err(ConfigError::InvalidDimensions)
        );
        assert_eq!(
            parse_config("[panel]\nheight = 0\n"),
            Err(ConfigError::InvalidDimensions)
        );
    }

    #[test]
    fn test_parse_int_forms() {
        assert_eq!(parse_int("42"), Ok(42));
        assert_eq!(parse_int("0xFF"), Ok(255));
        assert_eq!(parse_int("0x00_ff_00"), Ok(0xFF00));
        assert_eq!(parse_int("1_000"), Ok(1000));
        assert_eq!(parse_int("0x"), Err(ConfigError::InvalidValue));
        assert_eq!(parse_int("-1"), Err(ConfigError::InvalidValue));
        assert_eq!(parse_int("99999999999"), Err(ConfigError::InvalidValue));
    }

    #[test]
    fn test_hash_inside_string_is_not_a_comment() {
        assert_eq!(strip_comment(r#"name = "a#b" # c"#), r#"name = "a#b" "#);
    }
}
