//! Glyph store
//!
//! Resolves codepoints to bitmap glyphs, loading each resource at most
//! once per render. Codepoints without a bitmap resolve to the designated
//! "unknown" fallback glyph, so resolution itself never fails.

use anyhow::{anyhow, Context, Result};
use image::GrayImage;
use log::{debug, info, warn};
use std::collections::HashMap;
use std::path::{Path, PathBuf};

use crate::constants::{PRIVATE_USE_BASE, PRIVATE_USE_END};

/// One renderable bitmap: a character glyph or a synthetic emoji
#[derive(Debug, Clone)]
pub struct Glyph {
    /// Grayscale pixels, row-major
    pub bitmap: GrayImage,
    /// Bitmap width (pixels)
    pub width: u32,
    /// Bitmap height (pixels)
    pub height: u32,
}

impl Glyph {
    fn new(bitmap: GrayImage) -> Self {
        Self {
            width: bitmap.width(),
            height: bitmap.height(),
            bitmap,
        }
    }
}

/// Resource lookup for glyph bitmaps.
///
/// Lookups that find nothing return `Ok(None)`; only actual read or
/// decode failures are errors. The fallback must always be present.
pub trait GlyphSource {
    /// Bitmap for a codepoint, if the source carries one
    fn load_codepoint(&self, cp: u32) -> Result<Option<GrayImage>>;
    /// Bitmap registered under an arbitrary name (emoji tokens)
    fn load_named(&self, name: &str) -> Result<Option<GrayImage>>;
    /// The substitute bitmap for codepoints with no resource
    fn load_fallback(&self) -> Result<GrayImage>;
}

/// Filesystem glyph source: one image per codepoint in a single directory.
///
/// Naming convention:
/// - `<decimal codepoint>.png` (e.g. `65.png` for 'A')
/// - `unknown.png` for the fallback
/// - `<token>.png` for emoji (e.g. `heart.png` for `:heart:`)
pub struct DirGlyphSource {
    dir: PathBuf,
}

impl DirGlyphSource {
    pub fn new<P: AsRef<Path>>(dir: P) -> Self {
        Self {
            dir: dir.as_ref().to_path_buf(),
        }
    }

    fn load_file(&self, file_name: &str) -> Result<Option<GrayImage>> {
        let path = self.dir.join(file_name);
        if !path.exists() {
            return Ok(None);
        }
        let img = image::open(&path)
            .with_context(|| format!("Failed to load glyph: {}", path.display()))?;
        Ok(Some(img.to_luma8()))
    }
}

impl GlyphSource for DirGlyphSource {
    fn load_codepoint(&self, cp: u32) -> Result<Option<GrayImage>> {
        self.load_file(&format!("{}.png", cp))
    }

    fn load_named(&self, name: &str) -> Result<Option<GrayImage>> {
        // Token text comes straight from user input; keep it a plain
        // file name, not a path.
        if name.is_empty() || name.contains(['/', '\\', '.']) {
            return Ok(None);
        }
        self.load_file(&format!("{}.png", name))
    }

    fn load_fallback(&self) -> Result<GrayImage> {
        let path = self.dir.join("unknown.png");
        let img = image::open(&path)
            .with_context(|| format!("Failed to load fallback glyph: {}", path.display()))?;
        Ok(img.to_luma8())
    }
}

/// Codepoint -> glyph cache for one render invocation.
///
/// Built incrementally: `ensure_text` preloads everything a message needs,
/// `intern_named` adds synthetic emoji glyphs under private-use codepoints.
/// After that, `get` is infallible.
pub struct GlyphStore {
    source: Box<dyn GlyphSource>,
    /// Codepoint -> glyph map
    glyphs: HashMap<char, Glyph>,
    /// Substitute for codepoints with no resource
    fallback: Glyph,
    /// Next synthetic codepoint to hand out (monotonic, never reused)
    next_private: u32,
}

impl GlyphStore {
    /// Create a store over any glyph source.
    ///
    /// Loads the fallback glyph eagerly; a source without a fallback
    /// is unusable and this is the one place store setup can fail.
    pub fn new(source: Box<dyn GlyphSource>) -> Result<Self> {
        let fallback = Glyph::new(source.load_fallback()?);
        debug!(
            "Glyph store ready, fallback {}x{}",
            fallback.width, fallback.height
        );
        Ok(Self {
            source,
            glyphs: HashMap::new(),
            fallback,
            next_private: PRIVATE_USE_BASE,
        })
    }

    /// Create a store over a glyph directory
    pub fn open<P: AsRef<Path>>(dir: P) -> Result<Self> {
        info!("Glyph directory: {}", dir.as_ref().display());
        Self::new(Box::new(DirGlyphSource::new(dir)))
    }

    /// Make sure a codepoint has a loaded glyph.
    ///
    /// Performs at most one resource load per codepoint; a missing
    /// resource silently substitutes the fallback bitmap.
    pub fn ensure(&mut self, ch: char) -> Result<()> {
        if self.glyphs.contains_key(&ch) {
            return Ok(());
        }
        let bitmap = match self.source.load_codepoint(ch as u32)? {
            Some(bitmap) => bitmap,
            None => {
                debug!("No glyph for U+{:04X}, using fallback", ch as u32);
                self.fallback.bitmap.clone()
            }
        };
        self.glyphs.insert(ch, Glyph::new(bitmap));
        Ok(())
    }

    /// Preload every glyph a message needs.
    ///
    /// The space glyph is always loaded: it separates words during
    /// wrapping and supplies the height of blank lines.
    pub fn ensure_text(&mut self, text: &str) -> Result<()> {
        self.ensure(' ')?;
        for ch in text.chars().filter(|&c| c != '\n') {
            self.ensure(ch)?;
        }
        Ok(())
    }

    /// Register a named bitmap under a fresh private-use codepoint.
    ///
    /// Returns the minted codepoint, or None when the source has no
    /// bitmap for the name (the caller keeps the text literal).
    pub fn intern_named(&mut self, name: &str) -> Result<Option<char>> {
        let Some(bitmap) = self.source.load_named(name)? else {
            return Ok(None);
        };
        if self.next_private > PRIVATE_USE_END {
            warn!("Private-use range exhausted, keeping ':{}:' literal", name);
            return Ok(None);
        }
        let cp = self.next_private;
        self.next_private += 1;
        let ch = char::from_u32(cp)
            .ok_or_else(|| anyhow!("Invalid synthetic codepoint U+{:04X}", cp))?;
        self.glyphs.insert(ch, Glyph::new(bitmap));
        debug!("Emoji '{}' -> U+{:04X}", name, cp);
        Ok(Some(ch))
    }

    /// Glyph for a codepoint, falling back to the "unknown" glyph.
    ///
    /// Codepoints preloaded via `ensure_text` return their own bitmap;
    /// anything else gets the fallback, so this never fails.
    pub fn get(&self, ch: char) -> &Glyph {
        self.glyphs.get(&ch).unwrap_or(&self.fallback)
    }

    /// Number of loaded glyphs (excluding the fallback)
    pub fn len(&self) -> usize {
        self.glyphs.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::font::testutil::{bitmap, MapGlyphSource};

    #[test]
    fn test_missing_codepoint_uses_fallback() {
        let source = MapGlyphSource::new(bitmap(5, 9)).with_chars("A", 6, 10);
        let mut store = GlyphStore::new(Box::new(source)).unwrap();
        store.ensure('A').unwrap();
        store.ensure('B').unwrap();

        assert_eq!(store.get('A').width, 6);
        // 'B' has no resource: fallback dimensions
        assert_eq!(store.get('B').width, 5);
        assert_eq!(store.get('B').height, 9);
    }

    #[test]
    fn test_single_load_per_codepoint() {
        let source = MapGlyphSource::new(bitmap(5, 9)).with_chars("x", 6, 10);
        let loads = source.load_counter();
        let mut store = GlyphStore::new(Box::new(source)).unwrap();
        store.ensure('x').unwrap();
        store.ensure('x').unwrap();
        store.ensure('x').unwrap();

        assert_eq!(loads.get(), 1);
        assert_eq!(store.len(), 1);
        assert_eq!(store.get('x').width, 6);
    }

    #[test]
    fn test_unloaded_codepoint_resolves_to_fallback() {
        let source = MapGlyphSource::new(bitmap(4, 7));
        let store = GlyphStore::new(Box::new(source)).unwrap();
        // Never ensured: still resolves, with fallback dimensions
        assert_eq!(store.get('Z').width, 4);
        assert_eq!(store.get('Z').height, 7);
    }

    #[test]
    fn test_intern_named_mints_distinct_codepoints() {
        let source = MapGlyphSource::new(bitmap(4, 7)).with_named("heart", 8, 8);
        let mut store = GlyphStore::new(Box::new(source)).unwrap();

        let a = store.intern_named("heart").unwrap().unwrap();
        let b = store.intern_named("heart").unwrap().unwrap();
        assert_eq!(a as u32, PRIVATE_USE_BASE);
        assert_eq!(b as u32, PRIVATE_USE_BASE + 1);
        assert_eq!(store.get(a).width, 8);
    }

    #[test]
    fn test_intern_unknown_name_is_none() {
        let source = MapGlyphSource::new(bitmap(4, 7));
        let mut store = GlyphStore::new(Box::new(source)).unwrap();
        assert!(store.intern_named("nope").unwrap().is_none());
        assert!(store.intern_named("").unwrap().is_none());
    }
}
