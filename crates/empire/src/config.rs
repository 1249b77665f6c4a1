//! CLI configuration: a thin wrapper around `empire_config` shared types.
//!
//! Re-exports the shared types and resolves the effective output settings,
//! with `GlobalOpts` flags taking priority over config file defaults.

use clap::ValueEnum;

use crate::cli::{ColorMode, GlobalOpts, OutputFormat};
use crate::error::CliError;
use crate::output;

// ── Re-exports from shared crate ────────────────────────────────────

pub use empire_config::{Config, config_path, load_config, save_config};

/// Output settings every command handler renders with.
#[derive(Debug, Clone)]
pub struct Settings {
    pub output: OutputFormat,
    pub color: bool,
    pub quiet: bool,
    pub yes: bool,
    /// Map colors as `#RRGGBB`, never empty.
    pub palette: Vec<String>,
    pub palette_source: PaletteSource,
}

/// Where the map colors came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaletteSource {
    Medieval,
    Config,
}

impl Settings {
    /// Palette color for the `index`-th empire, wrapping around.
    pub fn color_at(&self, index: usize) -> &str {
        self.palette
            .get(index % self.palette.len().max(1))
            .map_or("", String::as_str)
    }
}

/// Merge CLI flags over config defaults.
pub fn resolve_settings(global: &GlobalOpts, cfg: &Config) -> Result<Settings, CliError> {
    // 1. Output format (flag > env > config)
    let output = match global.output {
        Some(format) => format,
        None => parse_value::<OutputFormat>("defaults.output", &cfg.defaults.output)?,
    };

    // 2. Color mode (flag > config)
    let color_mode = match global.color {
        Some(mode) => mode,
        None => parse_value::<ColorMode>("defaults.color", &cfg.defaults.color)?,
    };

    // 3. Palette (config override > medieval)
    let palette = cfg.palette_colors()?;

    Ok(Settings {
        output,
        color: output::should_color(color_mode),
        quiet: global.quiet,
        yes: global.yes,
        palette,
        palette_source: if cfg.palette.is_some() {
            PaletteSource::Config
        } else {
            PaletteSource::Medieval
        },
    })
}

fn parse_value<T: ValueEnum>(field: &str, raw: &str) -> Result<T, CliError> {
    T::from_str(raw, true).map_err(|_| CliError::Validation {
        field: field.into(),
        reason: format!("unknown value '{raw}'"),
    })
}
