//! Text layout
//!
//! Breaks a message into lines that fit a pixel budget and measures
//! each line from its glyph bitmaps:
//! - No-wrap: break on `\n` only, lines kept verbatim however wide
//! - Word-wrap: greedy packing of whitespace-separated words, with a
//!   midpoint split for words wider than a whole line

pub mod split;

pub use split::split_word;

use crate::font::GlyphStore;

/// One horizontal run of glyphs painted at a single vertical offset.
///
/// Width is the plain sum of glyph widths (no inter-glyph spacing);
/// height is the tallest glyph on the line, or the space glyph's
/// height when the line is empty so blank lines still take up room.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line {
    pub text: String,
    pub width: u32,
    pub height: u32,
}

impl Line {
    fn measured(store: &GlyphStore, text: String) -> Self {
        let width = measure_width(store, &text);
        let height = text
            .chars()
            .map(|c| store.get(c).height)
            .max()
            .unwrap_or_else(|| store.get(' ').height);
        Self {
            text,
            width,
            height,
        }
    }
}

fn measure_width(store: &GlyphStore, text: &str) -> u32 {
    text.chars().map(|c| store.get(c).width).sum()
}

/// Lay a message out as measured lines.
///
/// `max_width` only constrains word-wrap mode; no-wrap lines may
/// exceed it (the compositor clips, never truncates). Empty input
/// yields exactly one empty line.
pub fn layout_text(store: &GlyphStore, text: &str, max_width: u32, wrap: bool) -> Vec<Line> {
    if wrap {
        text.split('\n')
            .flat_map(|segment| wrap_segment(store, segment, max_width))
            .map(|line| Line::measured(store, line))
            .collect()
    } else {
        text.split('\n')
            .map(|segment| Line::measured(store, segment.to_string()))
            .collect()
    }
}

/// Greedily pack one explicit line's words into width-bounded lines.
///
/// A word that does not fit on a non-empty line starts the next line
/// unchecked. A word that does not fit on an *empty* line is split
/// near its midpoint; the tail becomes the new current line and is
/// not re-measured until the next word arrives. A segment with no
/// words (empty or whitespace-only) still produces one empty line.
fn wrap_segment(store: &GlyphStore, segment: &str, max_width: u32) -> Vec<String> {
    let mut done: Vec<String> = Vec::new();
    let mut current = String::new();

    for word in segment.split_whitespace() {
        let candidate = if current.is_empty() {
            word.to_string()
        } else {
            format!("{} {}", current, word)
        };

        if measure_width(store, &candidate) <= max_width {
            current = candidate;
        } else if !current.is_empty() {
            done.push(std::mem::take(&mut current));
            current = word.to_string();
        } else {
            // Lone word wider than the whole budget: break it
            let (head, tail) = split_word(word);
            done.push(head);
            current = tail;
        }
    }

    done.push(current);
    done
}
