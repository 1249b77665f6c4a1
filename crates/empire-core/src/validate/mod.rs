// ── Response validation ──
//
// Recursive descent over an untrusted `serde_json::Value`. Checks run in
// schema declaration order and never stop at the first problem, so one
// call reports everything wrong with a payload:
//
//   1. envelope keys: empires, totalCount, queryTime, page, itemsPerPage
//   2. inside `empires`: the length check, then each element by index
//   3. inside an element: base_token .. logo_uri
//   4. inside a number: integer check, then the lower bound

mod rules;
mod violation;

use serde_json::Value;

pub use violation::{
    JsonType, PathSegment, ValidationFailure, Violation, ViolationKind, format_failure,
};

use crate::model::{Empire, EmpiresResponse};
use rules::{Bound, Collector, NumberRule, TextRule};

// ── Empire rules ────────────────────────────────────────────────────

const BASE_TOKEN: TextRule = TextRule {
    empty: "Base token identifier is required",
};
const TOKEN_NAME: TextRule = TextRule {
    empty: "Token name is required",
};
const TOKEN_SYMBOL: TextRule = TextRule {
    empty: "Token symbol is required",
};
const TOTAL_DISTRIBUTED: NumberRule = NumberRule {
    integer: None,
    bound: Some(Bound::NonNegative(
        "Total distributed value must be non-negative",
    )),
};
const TOTAL_BURNED: NumberRule = NumberRule {
    integer: None,
    bound: Some(Bound::NonNegative("Total burned tokens must be non-negative")),
};
const LOGO_URI: &str = "Logo URI must be a valid URL";

// ── Envelope rules ──────────────────────────────────────────────────

const EMPIRES_MIN: &str = "At least one empire must be present in the response";
const TOTAL_COUNT: NumberRule = NumberRule {
    integer: Some("Total count must be an integer"),
    bound: Some(Bound::NonNegative("Total count must be non-negative")),
};
const PAGE: NumberRule = NumberRule {
    integer: Some("Page number must be an integer"),
    bound: Some(Bound::Positive("Page number must be positive")),
};
const ITEMS_PER_PAGE: NumberRule = NumberRule {
    integer: Some("Items per page must be an integer"),
    bound: Some(Bound::Positive("Items per page must be positive")),
};

/// Validate an untrusted value as one page of the empires API.
///
/// On success every field constraint holds and the value can be used
/// without further checks. On failure the returned [`ValidationFailure`]
/// lists every violation in the payload; nothing is partially accepted
/// and no defaults are filled in. Pure and stateless: identical input
/// always yields identical output.
pub fn validate(input: &Value) -> Result<EmpiresResponse, ValidationFailure> {
    let mut collector = Collector::default();
    let response = check_response(&mut collector, input);
    let violations = collector.into_violations();

    match response {
        Some(response) if violations.is_empty() => {
            tracing::debug!(
                empires = response.empires.len(),
                page = response.page,
                "empires response accepted"
            );
            Ok(response)
        }
        _ => {
            let failure = ValidationFailure::new(violations);
            tracing::debug!(violations = failure.len(), "empires response rejected");
            Err(failure)
        }
    }
}

fn check_response(c: &mut Collector, value: &Value) -> Option<EmpiresResponse> {
    let object = c.object(value)?;

    let empires = c.required(object, "empires", check_empires);
    let total_count = c.required(object, "totalCount", |c, v| c.count(v, TOTAL_COUNT));
    let query_time = c.required(object, "queryTime", |c, v| c.number(v, NumberRule::ANY));
    let page = c.required(object, "page", |c, v| c.count(v, PAGE));
    let items_per_page = c.required(object, "itemsPerPage", |c, v| c.count(v, ITEMS_PER_PAGE));

    Some(EmpiresResponse::new(
        empires?,
        total_count?,
        query_time?,
        page?,
        items_per_page?,
    ))
}

fn check_empires(c: &mut Collector, value: &Value) -> Option<Vec<Empire>> {
    let items = c.array(value)?;

    let mut ok = true;
    if items.is_empty() {
        c.report(ViolationKind::TooSmall, EMPIRES_MIN);
        ok = false;
    }

    let mut empires = Vec::with_capacity(items.len());
    for (idx, item) in items.iter().enumerate() {
        match c.at(PathSegment::Index(idx), |c| check_empire(c, item)) {
            Some(empire) => empires.push(empire),
            None => ok = false,
        }
    }
    ok.then_some(empires)
}

fn check_empire(c: &mut Collector, value: &Value) -> Option<Empire> {
    let object = c.object(value)?;

    let base_token = c.required(object, "base_token", |c, v| c.text(v, BASE_TOKEN));
    let token_name = c.required(object, "token_name", |c, v| c.text(v, TOKEN_NAME));
    let token_symbol = c.required(object, "token_symbol", |c, v| c.text(v, TOKEN_SYMBOL));
    let total_distributed = c.required(object, "total_distributed", |c, v| {
        c.number(v, TOTAL_DISTRIBUTED)
    });
    let total_burned = c.required(object, "total_burned", |c, v| c.number(v, TOTAL_BURNED));
    let logo_uri = c.optional(object, "logo_uri", |c, v| c.url(v, LOGO_URI));

    Some(Empire::new(
        base_token?,
        token_name?,
        token_symbol?,
        total_distributed?,
        total_burned?,
        logo_uri?,
    ))
}
