use kurbo::Rect;
use ub_core::Color;

/// Gap between an item's edge and its selection outline.
const SELECTION_GAP: f64 = 1.0;

/// Theme-dependent colors for the canvas renderer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CanvasTheme {
    pub background: Color,
    pub grid: Color,
    /// Button fill and selection outline.
    pub accent: Color,
    /// Text drawn on top of `accent`.
    pub accent_text: Color,
    pub input_bg: Color,
    pub border: Color,
    /// Image placeholder fill.
    pub muted_bg: Color,
    /// Captions and input placeholders.
    pub muted_text: Color,
    pub selection_width: f64,
}

impl CanvasTheme {
    /// Light theme: warm white canvas.
    pub fn light() -> Self {
        Self {
            background: Color::rgba(0.961, 0.961, 0.969, 1.0),
            grid: Color::rgba(0.0, 0.0, 0.0, 0.05),
            accent: Color::rgba(0.486, 0.227, 0.929, 1.0),
            accent_text: Color::WHITE,
            input_bg: Color::WHITE,
            border: Color::rgba(0.82, 0.82, 0.84, 1.0),
            muted_bg: Color::rgba(0.9, 0.9, 0.92, 1.0),
            muted_text: Color::rgba(0.525, 0.525, 0.545, 1.0),
            selection_width: 2.0,
        }
    }

    /// Dark theme, the builder default.
    pub fn dark() -> Self {
        Self {
            background: Color::rgba(0.067, 0.067, 0.078, 1.0),
            grid: Color::rgba(1.0, 1.0, 1.0, 0.04),
            accent: Color::rgba(0.545, 0.361, 0.965, 1.0),
            accent_text: Color::WHITE,
            input_bg: Color::rgba(0.149, 0.149, 0.169, 1.0),
            border: Color::rgba(0.235, 0.235, 0.263, 1.0),
            muted_bg: Color::rgba(0.153, 0.153, 0.176, 1.0),
            muted_text: Color::rgba(0.596, 0.596, 0.616, 1.0),
            selection_width: 2.0,
        }
    }
}

impl CanvasTheme {
    /// Path the selection outline is stroked along, just outside `bounds`.
    pub fn selection_outline(&self, bounds: Rect) -> Rect {
        bounds.inflate(SELECTION_GAP, SELECTION_GAP)
    }

    /// Everything the outline stroke paints, outer half of the line included.
    pub fn selection_extent(&self, bounds: Rect) -> Rect {
        let half = self.selection_width / 2.0;
        self.selection_outline(bounds).inflate(half, half)
    }
}

impl Default for CanvasTheme {
    fn default() -> Self {
        Self::dark()
    }
}
