//! Empire command handlers.

use tabled::Tabled;

use empire_core::Empire;

use crate::cli::{EmpiresArgs, EmpiresCommand};
use crate::config::Settings;
use crate::error::CliError;
use crate::output;

use super::util;

// ── Table row ───────────────────────────────────────────────────────

#[derive(Tabled)]
struct EmpireRow {
    #[tabled(rename = "#")]
    rank: usize,
    #[tabled(rename = "Color")]
    color: String,
    #[tabled(rename = "Symbol")]
    symbol: String,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Base Token")]
    base_token: String,
    #[tabled(rename = "Distributed")]
    distributed: String,
    #[tabled(rename = "Burned")]
    burned: String,
}

impl EmpireRow {
    fn new(idx: usize, e: &Empire, settings: &Settings) -> Self {
        Self {
            rank: idx + 1,
            color: output::swatch(settings.color_at(idx), settings.color),
            symbol: e.token_symbol.clone(),
            name: e.token_name.clone(),
            base_token: e.base_token.clone(),
            distributed: util::format_amount(e.total_distributed),
            burned: util::format_amount(e.total_burned),
        }
    }
}

// ── Detail view ─────────────────────────────────────────────────────

fn detail(e: &Empire, idx: usize, settings: &Settings) -> String {
    let mut lines = vec![
        format!("Name:         {}", e.token_name),
        format!("Symbol:       {}", e.token_symbol),
        format!("Base token:   {}", e.base_token),
        format!("Distributed:  {}", util::format_amount(e.total_distributed)),
        format!("Burned:       {}", util::format_amount(e.total_burned)),
        format!(
            "Map color:    {}",
            output::swatch(settings.color_at(idx), settings.color)
        ),
    ];
    if let Some(ref logo) = e.logo_uri {
        lines.push(format!("Logo:         {logo}"));
    }
    lines.join("\n")
}

/// Exact base token first, then case-insensitive symbol.
fn find_empire<'a>(empires: &'a [Empire], token: &str) -> Option<(usize, &'a Empire)> {
    empires
        .iter()
        .position(|e| e.base_token == token)
        .or_else(|| {
            empires
                .iter()
                .position(|e| e.token_symbol.eq_ignore_ascii_case(token))
        })
        .map(|idx| (idx, &empires[idx]))
}

// ── Handler ─────────────────────────────────────────────────────────

pub fn handle(args: EmpiresArgs, settings: &Settings) -> Result<(), CliError> {
    match args.command {
        EmpiresCommand::List(payload) => {
            let resp = util::load_empires(payload.file.as_deref())?;
            let out = output::render_list(
                settings.output,
                &resp.empires,
                |idx, e| EmpireRow::new(idx, e, settings),
                |e| e.base_token.clone(),
            );
            output::print_output(&out, settings.quiet);
            Ok(())
        }

        EmpiresCommand::Show { token, payload } => {
            let resp = util::load_empires(payload.file.as_deref())?;
            let (idx, empire) =
                find_empire(&resp.empires, &token).ok_or_else(|| CliError::NotFound {
                    resource_type: "empire".into(),
                    identifier: token.clone(),
                    list_command: "empires list".into(),
                })?;
            let out = output::render_single(
                settings.output,
                empire,
                |e| detail(e, idx, settings),
                |e| e.base_token.clone(),
            );
            output::print_output(&out, settings.quiet);
            Ok(())
        }
    }
}
