//! Build script for tessera-firmware
//!
//! - Sets up linker search paths for memory.x
//! - Validates panel.toml at compile time

use std::env;
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

use tessera_core::config::{parse_config, Config};

fn main() {
    setup_linker();
    validate_config();
}

/// Set up linker search paths and scripts
fn setup_linker() {
    let out_dir = PathBuf::from(env::var("OUT_DIR").expect("OUT_DIR not set"));

    let memory_x = include_bytes!("memory.x");
    let mut f = File::create(out_dir.join("memory.x")).expect("cannot create memory.x");
    f.write_all(memory_x).expect("cannot write memory.x");

    println!("cargo:rustc-link-search={}", out_dir.display());
    println!("cargo:rustc-link-arg-bins=--nmagic");
    println!("cargo:rustc-link-arg-bins=-Tlink.x");
    println!("cargo:rustc-link-arg-bins=-Tlink-rp.x");
    println!("cargo:rustc-link-arg-bins=-Tdefmt.x");

    println!("cargo:rerun-if-changed=memory.x");
    println!("cargo:rerun-if-changed=build.rs");
}

/// Check panel.toml three ways: TOML syntax, the serde schema, and the
/// reader the firmware itself uses at boot. All three must agree.
fn validate_config() {
    println!("cargo:rerun-if-changed=panel.toml");

    let config_path = Path::new("panel.toml");
    let content = match fs::read_to_string(config_path) {
        Ok(content) => content,
        Err(e) => fail("Failed to read panel.toml", &e.to_string()),
    };

    if let Err(e) = toml::from_str::<toml::Value>(&content) {
        fail("Invalid TOML syntax in panel.toml", &e.to_string());
    }

    let schema: Config = match toml::from_str(&content) {
        Ok(config) => config,
        Err(e) => fail("panel.toml does not match the config schema", &e.to_string()),
    };
    if let Err(e) = schema.validate() {
        fail("Invalid panel configuration", &format!("{:?}", e));
    }

    match parse_config(&content) {
        Ok(parsed) if parsed == schema => {}
        Ok(parsed) => fail(
            "Boot-time reader disagrees with panel.toml",
            &format!("toml: {:?}\nboot: {:?}", schema, parsed),
        ),
        Err(e) => fail(
            "panel.toml uses syntax the boot-time reader rejects",
            &format!("{:?}", e),
        ),
    }

    println!("cargo:warning=panel.toml validated successfully");
}

fn fail(title: &str, detail: &str) -> ! {
    panic!(
        "\n\
        ╔══════════════════════════════════════════════════════════════════╗\n\
        ║  ERROR: {:<57}║\n\
        ╠══════════════════════════════════════════════════════════════════╣\n\
        {}\n\
        ╚══════════════════════════════════════════════════════════════════╝\n",
        title,
        format_error_lines(detail)
    );
}

/// Format error message lines with box drawing
fn format_error_lines(msg: &str) -> String {
    msg.lines()
        .map(|line| {
            let truncated = if line.len() > 64 {
                format!("{}...", &line[..61])
            } else {
                line.to_string()
            };
            format!("║  {:<64} ║", truncated)
        })
        .collect::<Vec<_>>()
        .join("\n")
}
