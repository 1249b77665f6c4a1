// ── Empire Builder domain model ──
//
// Typed values produced by the validator plus the passive map structures
// the renderer consumes. Nothing here can be built from untrusted input
// without going through `crate::validate`.

pub mod empire;
pub mod palette;
pub mod territory;

// ── Re-exports ──────────────────────────────────────────────────────

pub use empire::{Empire, EmpiresResponse, LogoUri};
pub use palette::{MEDIEVAL_PALETTE, PaletteColor, color_for};
pub use territory::Territory;
