// ── Empire domain types ──

use std::fmt;

use serde::Serialize;
use url::Url;

use super::palette::{PaletteColor, color_for};

/// A single empire token record with its distribution and burn statistics.
///
/// Only produced by [`crate::validate()`], so every instance satisfies the
/// field constraints: non-empty identifiers, non-negative totals, and a
/// well-formed logo URL when one is present.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[non_exhaustive]
pub struct Empire {
    /// Unique identifier for the empire token.
    pub base_token: String,
    /// Full name of the empire token.
    pub token_name: String,
    /// Symbol/ticker of the empire token.
    pub token_symbol: String,
    /// Total distributed value in USD.
    pub total_distributed: f64,
    /// Total number of tokens burned.
    pub total_burned: f64,
    /// Logo image location; `None` when the API omitted the key.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub logo_uri: Option<LogoUri>,
}

/// One page of empires as returned by the API.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
#[non_exhaustive]
pub struct EmpiresResponse {
    /// Never empty.
    pub empires: Vec<Empire>,
    pub total_count: u64,
    /// Server-side query execution time, unconstrained.
    pub query_time: f64,
    /// 1-based.
    pub page: u64,
    pub items_per_page: u64,
}

impl EmpiresResponse {
    pub(crate) fn new(
        empires: Vec<Empire>,
        total_count: u64,
        query_time: f64,
        page: u64,
        items_per_page: u64,
    ) -> Self {
        Self {
            empires,
            total_count,
            query_time,
            page,
            items_per_page,
        }
    }

    /// Number of pages needed to list `total_count` empires.
    pub fn total_pages(&self) -> u64 {
        self.total_count.div_ceil(self.items_per_page.max(1))
    }

    /// Whether this page is the last one (or beyond it).
    pub fn is_last_page(&self) -> bool {
        self.page >= self.total_pages()
    }

    /// Pair each empire with its map color, by position on the page.
    pub fn colored(&self) -> impl Iterator<Item = (&Empire, &'static PaletteColor)> {
        self.empires
            .iter()
            .enumerate()
            .map(|(idx, empire)| (empire, color_for(idx)))
    }
}

impl Empire {
    pub(crate) fn new(
        base_token: String,
        token_name: String,
        token_symbol: String,
        total_distributed: f64,
        total_burned: f64,
        logo_uri: Option<LogoUri>,
    ) -> Self {
        Self {
            base_token,
            token_name,
            token_symbol,
            total_distributed,
            total_burned,
            logo_uri,
        }
    }
}

// ── LogoUri ─────────────────────────────────────────────────────────

/// An absolute URL, kept exactly as the API sent it.
///
/// `Url` normalizes on parse (trailing slashes, case), so the original
/// text is what gets displayed and serialized.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogoUri {
    raw: String,
    url: Url,
}

impl LogoUri {
    /// Accept `raw` only if it parses as an absolute URL.
    pub fn parse(raw: &str) -> Result<Self, url::ParseError> {
        let url = Url::parse(raw)?;
        Ok(Self {
            raw: raw.to_owned(),
            url,
        })
    }

    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// The parsed form, for callers that need scheme or host.
    pub fn url(&self) -> &Url {
        &self.url
    }
}

impl Serialize for LogoUri {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.raw)
    }
}

impl fmt::Display for LogoUri {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}
