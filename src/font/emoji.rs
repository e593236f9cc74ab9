//! Inline emoji substitution
//!
//! Rewrites `:token:` runs in a message into synthetic private-use
//! codepoints when the glyph source carries a bitmap named after the
//! token. Unknown tokens and unterminated runs stay literal, so any
//! input renders something.

use anyhow::Result;
use log::debug;

use super::store::GlyphStore;

/// Replace recognized `:token:` runs with synthetic codepoints.
///
/// Scans left to right, toggling in/out of a candidate token on each
/// literal `:`. A completed run is looked up by name; on a hit the
/// store mints a fresh private-use codepoint for it and the run
/// collapses to that single character in the output. On a miss the run
/// is emitted unchanged, colons included, and the closing colon does
/// not reopen a token.
pub fn substitute(text: &str, store: &mut GlyphStore) -> Result<String> {
    let mut out = String::with_capacity(text.len());
    let mut token: Option<String> = None;

    for ch in text.chars() {
        match (ch, token.as_mut()) {
            (':', None) => token = Some(String::new()),
            (':', Some(name)) => {
                match store.intern_named(name)? {
                    Some(synthetic) => {
                        debug!("Substituting ':{}:' with U+{:04X}", name, synthetic as u32);
                        out.push(synthetic);
                    }
                    None => {
                        out.push(':');
                        out.push_str(name);
                        out.push(':');
                    }
                }
                token = None;
            }
            (_, Some(name)) => name.push(ch),
            (_, None) => out.push(ch),
        }
    }

    // Unterminated run at end of input stays literal
    if let Some(name) = token {
        out.push(':');
        out.push_str(&name);
    }

    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::{is_private_use, PRIVATE_USE_BASE};
    use crate::font::testutil::{bitmap, MapGlyphSource};
    use crate::font::GlyphStore;

    fn store_with(names: &[&str]) -> GlyphStore {
        let mut source = MapGlyphSource::new(bitmap(5, 9));
        for name in names {
            source = source.with_named(name, 8, 8);
        }
        GlyphStore::new(Box::new(source)).unwrap()
    }

    #[test]
    fn test_known_token_becomes_private_codepoint() {
        let mut store = store_with(&["heart"]);
        let out = substitute("I :heart: rust", &mut store).unwrap();
        let expected: String = format!("I {} rust", char::from_u32(PRIVATE_USE_BASE).unwrap());
        assert_eq!(out, expected);
        assert!(out.chars().any(|c| is_private_use(c as u32)));
    }

    #[test]
    fn test_unknown_token_stays_literal() {
        let mut store = store_with(&[]);
        let out = substitute(":notarealicon:", &mut store).unwrap();
        assert_eq!(out, ":notarealicon:");
    }

    #[test]
    fn test_repeated_token_gets_fresh_codepoints() {
        let mut store = store_with(&["ok"]);
        let out = substitute(":ok::ok:", &mut store).unwrap();
        let chars: Vec<u32> = out.chars().map(|c| c as u32).collect();
        assert_eq!(chars, vec![PRIVATE_USE_BASE, PRIVATE_USE_BASE + 1]);
    }

    #[test]
    fn test_empty_token_is_literal() {
        let mut store = store_with(&["heart"]);
        assert_eq!(substitute("a::b", &mut store).unwrap(), "a::b");
    }

    #[test]
    fn test_trailing_colon_is_literal() {
        let mut store = store_with(&["heart"]);
        assert_eq!(substitute("5:", &mut store).unwrap(), "5:");
        assert_eq!(substitute("ends :heart", &mut store).unwrap(), "ends :heart");
    }

    #[test]
    fn test_miss_then_hit() {
        let mut store = store_with(&["sun"]);
        let out = substitute(":moon: and :sun:", &mut store).unwrap();
        let expected = format!(":moon: and {}", char::from_u32(PRIVATE_USE_BASE).unwrap());
        assert_eq!(out, expected);
    }

    #[test]
    fn test_colon_only_text() {
        let mut store = store_with(&[]);
        // Pairs collapse to literal empty tokens, odd trailing colon stays
        assert_eq!(substitute(":::", &mut store).unwrap(), ":::");
    }
}
