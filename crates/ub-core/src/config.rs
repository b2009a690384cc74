//! Session configuration.

/// Where and how the palette places new components.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PaletteConfig {
    /// Spawn position shared by every new component. Overlapping spawns are
    /// expected; there is no placement algorithm.
    pub spawn_x: f64,
    pub spawn_y: f64,
}

impl Default for PaletteConfig {
    fn default() -> Self {
        Self {
            spawn_x: 100.0,
            spawn_y: 100.0,
        }
    }
}

/// Top-level configuration for a builder session.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SessionConfig {
    pub palette: PaletteConfig,
    /// Offset of a duplicate relative to its original, in canvas units.
    pub duplicate_offset: (f64, f64),
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            palette: PaletteConfig::default(),
            duplicate_offset: (20.0, 20.0),
        }
    }
}
