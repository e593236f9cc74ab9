//! Global constants for signwrite
//!
//! Consolidates display geometry, codepoint, and serialization constants
//! to eliminate magic numbers throughout the codebase.

// ============================================================================
// Display Geometry
// ============================================================================

/// Physical display width in pixels
pub const DISPLAY_WIDTH: u32 = 128;

/// Physical display height in pixels
pub const DISPLAY_HEIGHT: u32 = 64;

// ============================================================================
// Codepoints
// ============================================================================

/// First codepoint handed out for synthetic emoji glyphs
/// (Unicode Private Use Area, U+E000 - U+F8FF)
pub const PRIVATE_USE_BASE: u32 = 0xE000;

/// Last codepoint of the Private Use Area
pub const PRIVATE_USE_END: u32 = 0xF8FF;

// ============================================================================
// Serialization
// ============================================================================

/// Grayscale level at or above which a pixel counts as lit
pub const ON_THRESHOLD: u8 = 128;

/// Byte emitted for a lit pixel in raw frame output
pub const FRAME_ON: u8 = 0x01;

/// Byte emitted for an unlit pixel in raw frame output
pub const FRAME_OFF: u8 = 0x00;

/// Check if a code point falls in the synthetic emoji range
#[inline]
pub const fn is_private_use(cp: u32) -> bool {
    cp >= PRIVATE_USE_BASE && cp <= PRIVATE_USE_END
}
