//! Face configuration loading
//!
//! `face.toml` is embedded at build time (and checked by the build
//! script). Parsing needs an allocator, which the board provides.

use nimbus_core::config::FaceConfig;

/// Configuration compiled into the firmware
pub const EMBEDDED_CONFIG: &str = include_str!("../face.toml");

/// Load the embedded configuration, falling back to defaults
pub fn load_config() -> FaceConfig {
    parse_or_default(EMBEDDED_CONFIG)
}

/// Parse `input`, logging and falling back to defaults if it is invalid
pub fn parse_or_default(input: &str) -> FaceConfig {
    match FaceConfig::from_toml(input) {
        Ok(config) => {
            defmt::info!(
                "face config: fallback {} ms, refresh every {} min",
                config.fallback_wait_ms,
                config.refresh_interval_min
            );
            config
        }
        Err(e) => {
            defmt::warn!("face config rejected ({}), using defaults", e);
            FaceConfig::default()
        }
    }
}
