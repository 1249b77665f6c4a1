//! Config subcommand handlers.

use dialoguer::Select;

use crate::cli::{ConfigArgs, ConfigCommand, OutputFormat};
use crate::config::{self, Config, Settings};
use crate::error::CliError;
use crate::output;

// ── Helpers ─────────────────────────────────────────────────────────

const OUTPUT_CHOICES: &[&str] = &["table", "json", "json-compact", "yaml", "plain"];
const COLOR_CHOICES: &[&str] = &["auto", "always", "never"];

/// Map a dialoguer / interactive I/O failure into CliError.
fn prompt_err(e: impl std::fmt::Display) -> CliError {
    CliError::Validation {
        field: "interactive".into(),
        reason: format!("prompt failed: {e}"),
    }
}

fn prompt_choice(prompt: &str, choices: &[&str]) -> Result<String, CliError> {
    let selection = Select::new()
        .with_prompt(prompt)
        .items(choices)
        .default(0)
        .interact()
        .map_err(prompt_err)?;
    Ok(choices.get(selection).copied().unwrap_or_default().to_owned())
}

fn render_toml(cfg: &Config) -> Result<String, CliError> {
    toml::to_string_pretty(cfg).map_err(|e| CliError::Validation {
        field: "config".into(),
        reason: format!("failed to serialize: {e}"),
    })
}

// ── Handler ─────────────────────────────────────────────────────────

pub fn handle(args: &ConfigArgs, settings: &Settings) -> Result<(), CliError> {
    match args.command {
        // ── Init: defaults with --yes, otherwise a short wizard ─────
        ConfigCommand::Init => {
            let config_path = config::config_path();
            if config_path.exists()
                && !super::util::confirm(
                    &format!("Overwrite existing config at {}?", config_path.display()),
                    settings.yes,
                )?
            {
                return Ok(());
            }

            let mut cfg = Config::default();
            if !settings.yes {
                eprintln!("⚔  empire configuration wizard");
                eprintln!("   Config path: {}\n", config_path.display());
                cfg.defaults.output = prompt_choice("Default output format", OUTPUT_CHOICES)?;
                cfg.defaults.color = prompt_choice("Color output", COLOR_CHOICES)?;
            }

            let path = config::save_config(&cfg)?;
            tracing::info!(path = %path.display(), "config written");
            if !settings.quiet {
                eprintln!("Config written to {}", path.display());
            }
            Ok(())
        }

        // ── Show: resolved config ───────────────────────────────────
        ConfigCommand::Show => {
            let cfg = config::load_config()?;
            let out = match settings.output {
                OutputFormat::Table | OutputFormat::Plain => render_toml(&cfg)?,
                format => output::render_single(format, &cfg, |_| String::new(), |_| String::new()),
            };
            output::print_output(out.trim_end(), settings.quiet);
            Ok(())
        }

        ConfigCommand::Path => {
            output::print_output(&config::config_path().display().to_string(), settings.quiet);
            Ok(())
        }
    }
}
