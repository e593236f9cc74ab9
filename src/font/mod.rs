//! Glyph loading and emoji substitution
//!
//! Handles:
//! - Per-codepoint bitmap glyph loading with caching (GlyphStore)
//! - Fallback "unknown" glyph for unsupported codepoints
//! - Inline `:token:` emoji substitution via private-use codepoints

pub mod emoji;
pub mod store;

pub use emoji::substitute;
pub use store::{DirGlyphSource, Glyph, GlyphSource, GlyphStore};
