// ─────────────────────────────────────────────────────────────────────
// Rankine — Chip Parameter Types
// License: MIT
// ─────────────────────────────────────────────────────────────────────
pub mod chip;
pub mod error;
