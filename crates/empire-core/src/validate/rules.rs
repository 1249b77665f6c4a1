// ── Field rules and the violation collector ──
//
// `Collector` walks the input tree keeping the current path, records a
// `Violation` for every broken rule, and hands back `None` for any value
// that failed. A check returns `None` only after reporting at least one
// violation.

use serde_json::{Map, Number, Value};

use super::violation::{JsonType, PathSegment, Violation, ViolationKind};
use crate::model::LogoUri;

/// A string field that must not be empty.
#[derive(Debug, Clone, Copy)]
pub(crate) struct TextRule {
    pub empty: &'static str,
}

/// Lower bound for a numeric field.
#[derive(Debug, Clone, Copy)]
pub(crate) enum Bound {
    /// `>= 0`
    NonNegative(&'static str),
    /// `> 0`
    Positive(&'static str),
}

impl Bound {
    fn admits(self, value: f64) -> bool {
        match self {
            Self::NonNegative(_) => value >= 0.0,
            Self::Positive(_) => value > 0.0,
        }
    }

    fn message(self) -> &'static str {
        match self {
            Self::NonNegative(msg) | Self::Positive(msg) => msg,
        }
    }
}

/// A numeric field: optional integer requirement, optional lower bound.
#[derive(Debug, Clone, Copy)]
pub(crate) struct NumberRule {
    pub integer: Option<&'static str>,
    pub bound: Option<Bound>,
}

impl NumberRule {
    pub const ANY: Self = Self {
        integer: None,
        bound: None,
    };
}

#[derive(Debug, Default)]
pub(crate) struct Collector {
    path: Vec<PathSegment>,
    violations: Vec<Violation>,
}

impl Collector {
    /// Run `check` with `segment` appended to the current path.
    pub fn at<T>(&mut self, segment: PathSegment, check: impl FnOnce(&mut Self) -> T) -> T {
        self.path.push(segment);
        let out = check(self);
        self.path.pop();
        out
    }

    pub fn report(&mut self, kind: ViolationKind, message: impl Into<String>) {
        let violation = Violation {
            path: self.path.clone(),
            kind,
            message: message.into(),
        };
        tracing::trace!(field = %violation.field_path(), message = %violation.message, "violation");
        self.violations.push(violation);
    }

    pub fn into_violations(self) -> Vec<Violation> {
        self.violations
    }

    fn type_mismatch(&mut self, expected: JsonType, value: &Value) {
        let received = JsonType::of(value);
        self.report(
            ViolationKind::InvalidType { expected, received },
            format!("Expected {expected}, received {received}"),
        );
    }

    // ── Structure ──

    pub fn object<'a>(&mut self, value: &'a Value) -> Option<&'a Map<String, Value>> {
        if let Value::Object(map) = value {
            Some(map)
        } else {
            self.type_mismatch(JsonType::Object, value);
            None
        }
    }

    pub fn array<'a>(&mut self, value: &'a Value) -> Option<&'a [Value]> {
        if let Value::Array(items) = value {
            Some(items)
        } else {
            self.type_mismatch(JsonType::Array, value);
            None
        }
    }

    /// Check a key that must be present.
    pub fn required<T>(
        &mut self,
        object: &Map<String, Value>,
        key: &'static str,
        check: impl FnOnce(&mut Self, &Value) -> Option<T>,
    ) -> Option<T> {
        self.at(PathSegment::Key(key), |c| match object.get(key) {
            Some(value) => check(c, value),
            None => {
                c.report(ViolationKind::Required, "Required");
                None
            }
        })
    }

    /// Check a key that may be absent.
    ///
    /// `Some(None)` means absent, `Some(Some(_))` present and valid,
    /// `None` present and invalid.
    pub fn optional<T>(
        &mut self,
        object: &Map<String, Value>,
        key: &'static str,
        check: impl FnOnce(&mut Self, &Value) -> Option<T>,
    ) -> Option<Option<T>> {
        match object.get(key) {
            None => Some(None),
            Some(value) => self.at(PathSegment::Key(key), |c| check(c, value)).map(Some),
        }
    }

    // ── Scalars ──

    pub fn text(&mut self, value: &Value, rule: TextRule) -> Option<String> {
        let Value::String(s) = value else {
            self.type_mismatch(JsonType::String, value);
            return None;
        };
        if s.is_empty() {
            self.report(ViolationKind::TooSmall, rule.empty);
            return None;
        }
        Some(s.clone())
    }

    pub fn url(&mut self, value: &Value, message: &'static str) -> Option<LogoUri> {
        let Value::String(s) = value else {
            self.type_mismatch(JsonType::String, value);
            return None;
        };
        match LogoUri::parse(s) {
            Ok(uri) => Some(uri),
            Err(_) => {
                self.report(ViolationKind::InvalidUrl, message);
                None
            }
        }
    }

    /// Numeric field; every broken rule is reported, not just the first.
    pub fn number(&mut self, value: &Value, rule: NumberRule) -> Option<f64> {
        let Value::Number(number) = value else {
            self.type_mismatch(JsonType::Number, value);
            return None;
        };
        let Some(float) = number.as_f64() else {
            self.type_mismatch(JsonType::Number, value);
            return None;
        };

        let mut ok = true;
        if let Some(message) = rule.integer {
            if !is_integral(number) {
                self.report(ViolationKind::NotInteger, message);
                ok = false;
            }
        }
        if let Some(bound) = rule.bound {
            if !bound.admits(float) {
                self.report(ViolationKind::TooSmall, bound.message());
                ok = false;
            }
        }
        ok.then_some(float)
    }

    /// Integer field with a non-negative or positive bound.
    pub fn count(&mut self, value: &Value, rule: NumberRule) -> Option<u64> {
        debug_assert!(rule.integer.is_some() && rule.bound.is_some());
        let float = self.number(value, rule)?;
        Some(value.as_u64().unwrap_or_else(|| saturating_u64(float)))
    }
}

/// Integers written with a fractional part of zero (`1.0`) count.
#[allow(clippy::float_cmp)]
fn is_integral(number: &Number) -> bool {
    if number.is_i64() || number.is_u64() {
        return true;
    }
    number
        .as_f64()
        .is_some_and(|f| f.is_finite() && f.trunc() == f)
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss, clippy::as_conversions)]
fn saturating_u64(value: f64) -> u64 {
    // `as` saturates at the u64 bounds.
    value as u64
}
