//! `empire validate`: check a payload and report every violation.

use serde::Serialize;
use tabled::Tabled;

use empire_core::{EmpiresResponse, ValidationFailure, Violation, format_failure, validate};

use crate::cli::{OutputFormat, PayloadArgs};
use crate::config::Settings;
use crate::error::CliError;
use crate::output;

use super::util;

// ── Report shapes ───────────────────────────────────────────────────

#[derive(Serialize)]
struct Accepted<'a> {
    valid: bool,
    source: &'a str,
    empires: usize,
    total_count: u64,
    page: u64,
    total_pages: u64,
    items_per_page: u64,
    query_time: f64,
}

impl<'a> Accepted<'a> {
    fn new(source: &'a str, resp: &EmpiresResponse) -> Self {
        Self {
            valid: true,
            source,
            empires: resp.empires.len(),
            total_count: resp.total_count,
            page: resp.page,
            total_pages: resp.total_pages(),
            items_per_page: resp.items_per_page,
            query_time: resp.query_time,
        }
    }
}

#[derive(Serialize)]
struct Rejected<'a> {
    valid: bool,
    source: &'a str,
    #[serde(flatten)]
    failure: &'a ValidationFailure,
}

// ── Table row ───────────────────────────────────────────────────────

#[derive(Tabled)]
struct ViolationRow {
    #[tabled(rename = "#")]
    index: usize,
    #[tabled(rename = "Field")]
    field: String,
    #[tabled(rename = "Problem")]
    message: String,
}

impl ViolationRow {
    fn new(index: usize, v: &Violation) -> Self {
        Self {
            index: index + 1,
            field: if v.is_root() {
                "(root)".into()
            } else {
                v.field_path()
            },
            message: v.message.clone(),
        }
    }
}

// ── Handler ─────────────────────────────────────────────────────────

pub fn handle(args: &PayloadArgs, settings: &Settings) -> Result<(), CliError> {
    let payload = util::read_payload(args.file.as_deref())?;
    let source = payload.source_name.as_str();

    match validate(&payload.value) {
        Ok(resp) => {
            let out = output::render_single(
                settings.output,
                &Accepted::new(source, &resp),
                |a| {
                    format!(
                        "{} {source}: {} empire(s), page {} of {} ({} total)",
                        output::status_mark(true, settings.color),
                        a.empires,
                        a.page,
                        a.total_pages,
                        a.total_count,
                    )
                },
                |_| "valid".into(),
            );
            output::print_output(&out, settings.quiet);
            Ok(())
        }
        Err(failure) => {
            let out = render_failure(settings, source, &failure);
            output::print_output(&out, settings.quiet);
            Err(CliError::rejected(source, &failure))
        }
    }
}

fn render_failure(settings: &Settings, source: &str, failure: &ValidationFailure) -> String {
    match settings.output {
        OutputFormat::Table => {
            let heading = format!(
                "{} {source}: {} violation(s)",
                output::status_mark(false, settings.color),
                failure.len()
            );
            let table = output::render_list(
                settings.output,
                failure.violations(),
                ViolationRow::new,
                ToString::to_string,
            );
            format!("{heading}\n{table}")
        }
        OutputFormat::Plain => format_failure(failure),
        format => output::render_single(
            format,
            &Rejected {
                valid: false,
                source,
                failure,
            },
            |_| String::new(),
            |_| String::new(),
        ),
    }
}
