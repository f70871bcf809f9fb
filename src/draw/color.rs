//! RGBA color type and predefined color constants.

/// Represents an RGBA color with 8-bit integer components.
///
/// Integer channels match the scene file encoding, where every color field
/// is written as a plain 0-255 value.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Color {
    /// Red component (0 = none, 255 = full)
    pub r: u8,
    /// Green component (0 = none, 255 = full)
    pub g: u8,
    /// Blue component (0 = none, 255 = full)
    pub b: u8,
    /// Alpha/opacity (0 = fully transparent, 255 = fully opaque)
    pub a: u8,
}

impl Color {
    /// Creates a new opaque color from RGB components.
    pub fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Creates a new color from RGBA components.
    pub fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }
}

// ============================================================================
// Predefined Color Constants (classic editor palette)
// ============================================================================

/// Predefined red color
pub const RED: Color = Color {
    r: 255,
    g: 0,
    b: 0,
    a: 255,
};

/// Predefined green color
pub const GREEN: Color = Color {
    r: 0,
    g: 255,
    b: 0,
    a: 255,
};

/// Predefined blue color
pub const BLUE: Color = Color {
    r: 0,
    g: 0,
    b: 255,
    a: 255,
};

/// Predefined cyan color
pub const CYAN: Color = Color {
    r: 0,
    g: 255,
    b: 255,
    a: 255,
};

/// Predefined magenta color, also used for the selection frame
pub const MAGENTA: Color = Color {
    r: 255,
    g: 0,
    b: 255,
    a: 255,
};

/// Predefined yellow color
pub const YELLOW: Color = Color {
    r: 255,
    g: 255,
    b: 0,
    a: 255,
};

/// Predefined white color
pub const WHITE: Color = Color {
    r: 255,
    g: 255,
    b: 255,
    a: 255,
};

/// Predefined black color
pub const BLACK: Color = Color {
    r: 0,
    g: 0,
    b: 0,
    a: 255,
};
