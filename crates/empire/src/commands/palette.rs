//! `empire palette`: the map colors empires are painted with.

use serde::Serialize;
use tabled::Tabled;

use empire_core::MEDIEVAL_PALETTE;

use crate::config::{PaletteSource, Settings};
use crate::error::CliError;
use crate::output;

#[derive(Serialize)]
struct PaletteEntry {
    name: String,
    hex: String,
}

#[derive(Tabled)]
struct PaletteRow {
    #[tabled(rename = "#")]
    slot: usize,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Color")]
    swatch: String,
}

fn entries(settings: &Settings) -> Vec<PaletteEntry> {
    if settings.palette_source == PaletteSource::Config {
        settings
            .palette
            .iter()
            .enumerate()
            .map(|(idx, hex)| PaletteEntry {
                name: format!("custom-{}", idx + 1),
                hex: hex.clone(),
            })
            .collect()
    } else {
        MEDIEVAL_PALETTE
            .iter()
            .map(|c| PaletteEntry {
                name: c.name.to_owned(),
                hex: c.hex.to_owned(),
            })
            .collect()
    }
}

#[allow(clippy::unnecessary_wraps)]
pub fn handle(settings: &Settings) -> Result<(), CliError> {
    let data = entries(settings);
    let out = output::render_list(
        settings.output,
        &data,
        |idx, e| PaletteRow {
            slot: idx + 1,
            name: e.name.clone(),
            swatch: output::swatch(&e.hex, settings.color),
        },
        |e| e.hex.clone(),
    );
    output::print_output(&out, settings.quiet);
    Ok(())
}
