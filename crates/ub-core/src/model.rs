//! Component document model.
//!
//! A document is a flat, ordered list of `CanvasComponent`s. Each component
//! has a fixed kind, free canvas geometry, and an open property bag. The bag
//! is deliberately weakly typed; readers go through the typed accessors on
//! `CanvasComponent`, which apply one explicit default-and-coerce rule per
//! key instead of relying on whatever happens to be stored.

use crate::id::ComponentId;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

// ─── Colors ──────────────────────────────────────────────────────────────

/// RGBA color. Stored as 4 × f32 [0.0, 1.0].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

/// Helper to parse a single hex digit.
pub fn hex_val(c: u8) -> Option<u8> {
    match c {
        b'0'..=b'9' => Some(c - b'0'),
        b'a'..=b'f' => Some(c - b'a' + 10),
        b'A'..=b'F' => Some(c - b'A' + 10),
        _ => None,
    }
}

impl Color {
    pub const WHITE: Color = Color::rgba(1.0, 1.0, 1.0, 1.0);
    pub const TRANSPARENT: Color = Color::rgba(0.0, 0.0, 0.0, 0.0);

    pub const fn rgba(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Parse a hex color string: `#RGB`, `#RGBA`, `#RRGGBB`, `#RRGGBBAA`.
    /// The string may optionally start with `#`.
    pub fn from_hex(hex: &str) -> Option<Self> {
        let hex = hex.strip_prefix('#').unwrap_or(hex);
        let bytes = hex.as_bytes();

        let short = |i: usize| hex_val(bytes[i]).map(|v| (v * 17) as f32 / 255.0);
        let long = |i: usize| {
            let hi = hex_val(bytes[i])?;
            let lo = hex_val(bytes[i + 1])?;
            Some((hi << 4 | lo) as f32 / 255.0)
        };

        match bytes.len() {
            3 => Some(Self::rgba(short(0)?, short(1)?, short(2)?, 1.0)),
            4 => Some(Self::rgba(short(0)?, short(1)?, short(2)?, short(3)?)),
            6 => Some(Self::rgba(long(0)?, long(2)?, long(4)?, 1.0)),
            8 => Some(Self::rgba(long(0)?, long(2)?, long(4)?, long(6)?)),
            _ => None,
        }
    }

    /// Parse a user-entered CSS color. `#` literals take the hex fast path;
    /// everything else (`red`, `rgb(...)`, `hsl(...)`, `transparent`) goes
    /// through a full CSS color parser. `None` means the caller should fall
    /// back to a default.
    pub fn parse(s: &str) -> Option<Self> {
        let s = s.trim();
        if s.starts_with('#') {
            return Self::from_hex(s);
        }
        let [r, g, b, a] = csscolorparser::parse(s).ok()?.to_rgba8();
        let unit = |v: u8| f32::from(v) / 255.0;
        Some(Self::rgba(unit(r), unit(g), unit(b), unit(a)))
    }

    pub fn is_transparent(&self) -> bool {
        self.a <= 0.0
    }

    /// Emit as `#RRGGBB`, or `#RRGGBBAA` when not fully opaque.
    pub fn to_hex(&self) -> String {
        let [r, g, b, a] = self.to_rgba8();
        if a == 255 {
            format!("#{r:02X}{g:02X}{b:02X}")
        } else {
            format!("#{r:02X}{g:02X}{b:02X}{a:02X}")
        }
    }

    /// CSS color string usable by Canvas2D and SVG.
    pub fn to_css(&self) -> String {
        let [r, g, b, a] = self.to_rgba8();
        if a == 255 {
            format!("#{r:02X}{g:02X}{b:02X}")
        } else {
            format!("rgba({r}, {g}, {b}, {})", self.a.clamp(0.0, 1.0))
        }
    }

    fn to_rgba8(self) -> [u8; 4] {
        let q = |v: f32| (v.clamp(0.0, 1.0) * 255.0).round() as u8;
        [q(self.r), q(self.g), q(self.b), q(self.a)]
    }
}

// ─── Component kinds ─────────────────────────────────────────────────────

/// The closed set of component kinds the palette can place.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ComponentKind {
    Text,
    Button,
    Input,
    Image,
    Container,
}

impl ComponentKind {
    /// Palette order.
    pub const ALL: [ComponentKind; 5] = [
        ComponentKind::Text,
        ComponentKind::Button,
        ComponentKind::Input,
        ComponentKind::Image,
        ComponentKind::Container,
    ];

    /// Stable lowercase name, used in ids and the JS bridge.
    pub fn name(self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Button => "button",
            Self::Input => "input",
            Self::Image => "image",
            Self::Container => "container",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|k| k.name().eq_ignore_ascii_case(name.trim()))
    }

    /// Human-readable name shown in the palette.
    pub fn display_name(self) -> &'static str {
        match self {
            Self::Text => "Text",
            Self::Button => "Button",
            Self::Input => "Input",
            Self::Image => "Image",
            Self::Container => "Container",
        }
    }

    /// Whether the kind renders a text/placeholder string and font settings.
    pub fn has_text_content(self) -> bool {
        matches!(self, Self::Text | Self::Button | Self::Input)
    }
}

impl fmt::Display for ComponentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// ─── Font weight ─────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FontWeight {
    #[default]
    Normal,
    Medium,
    Semibold,
    Bold,
}

impl FontWeight {
    pub const ALL: [FontWeight; 4] = [
        FontWeight::Normal,
        FontWeight::Medium,
        FontWeight::Semibold,
        FontWeight::Bold,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Self::Normal => "normal",
            Self::Medium => "medium",
            Self::Semibold => "semibold",
            Self::Bold => "bold",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|w| w.name().eq_ignore_ascii_case(name.trim()))
    }

    /// Numeric CSS weight (100..900).
    pub fn css_weight(self) -> u16 {
        match self {
            Self::Normal => 400,
            Self::Medium => 500,
            Self::Semibold => 600,
            Self::Bold => 700,
        }
    }
}

// ─── Property bag ────────────────────────────────────────────────────────

/// Well-known property keys.
pub mod keys {
    pub const TEXT: &str = "text";
    pub const COLOR: &str = "color";
    pub const BACKGROUND_COLOR: &str = "backgroundColor";
    pub const FONT_SIZE: &str = "fontSize";
    pub const FONT_WEIGHT: &str = "fontWeight";
    pub const PADDING: &str = "padding";
    pub const BORDER_RADIUS: &str = "borderRadius";
}

/// Fallbacks used when a key is unset or holds something unusable.
pub mod defaults {
    pub const TEXT: &str = "";
    pub const COLOR: &str = "#ffffff";
    pub const BACKGROUND_COLOR: &str = "transparent";
    pub const FONT_SIZE: f64 = 16.0;
    pub const PADDING: f64 = 12.0;
    pub const BORDER_RADIUS: f64 = 8.0;
}

/// A scalar property value. Untagged so it maps onto plain JSON scalars.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PropValue {
    Bool(bool),
    Num(f64),
    Str(String),
}

impl PropValue {
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Str(s) => Some(s),
            _ => None,
        }
    }

    /// Numeric view: numbers as-is, numeric strings parsed.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Num(n) if n.is_finite() => Some(*n),
            Self::Str(s) => s.trim().parse::<f64>().ok().filter(|n| n.is_finite()),
            _ => None,
        }
    }

    /// Text view: strings as-is, other scalars formatted.
    pub fn to_text(&self) -> String {
        match self {
            Self::Str(s) => s.clone(),
            Self::Num(n) => n.to_string(),
            Self::Bool(b) => b.to_string(),
        }
    }
}

impl From<&str> for PropValue {
    fn from(s: &str) -> Self {
        Self::Str(s.to_string())
    }
}

impl From<String> for PropValue {
    fn from(s: String) -> Self {
        Self::Str(s)
    }
}

impl From<f64> for PropValue {
    fn from(n: f64) -> Self {
        Self::Num(n)
    }
}

impl From<i32> for PropValue {
    fn from(n: i32) -> Self {
        Self::Num(f64::from(n))
    }
}

impl From<bool> for PropValue {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}

/// Open string-keyed property map.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Properties(BTreeMap<String, PropValue>);

impl Properties {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: &str) -> Option<&PropValue> {
        self.0.get(key)
    }

    pub fn set(&mut self, key: impl Into<String>, value: impl Into<PropValue>) {
        self.0.insert(key.into(), value.into());
    }

    /// Builder form of `set`.
    #[must_use]
    pub fn with(mut self, key: impl Into<String>, value: impl Into<PropValue>) -> Self {
        self.set(key, value);
        self
    }

    /// Shallow merge: every key in `patch` overwrites, all others survive.
    pub fn merge(&mut self, patch: Properties) {
        self.0.extend(patch.0);
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

// ─── Components ──────────────────────────────────────────────────────────

/// A single placed UI element.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CanvasComponent {
    pub id: ComponentId,
    #[serde(rename = "type")]
    pub kind: ComponentKind,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub properties: Properties,
}

impl CanvasComponent {
    /// A bare component at the origin with no size and no properties.
    pub fn new(id: ComponentId, kind: ComponentKind) -> Self {
        Self {
            id,
            kind,
            x: 0.0,
            y: 0.0,
            width: 0.0,
            height: 0.0,
            properties: Properties::new(),
        }
    }

    /// Apply a partial update. `kind` and `id` are not patchable.
    pub fn apply(&mut self, patch: ComponentPatch) {
        if let Some(x) = patch.x {
            self.x = x;
        }
        if let Some(y) = patch.y {
            self.y = y;
        }
        if let Some(width) = patch.width {
            self.width = width;
        }
        if let Some(height) = patch.height {
            self.height = height;
        }
        if let Some(props) = patch.properties {
            self.properties.merge(props);
        }
    }

    pub fn text(&self) -> String {
        self.properties
            .get(keys::TEXT)
            .map(PropValue::to_text)
            .unwrap_or_else(|| defaults::TEXT.to_string())
    }

    /// Raw text color string as entered (may be malformed).
    pub fn color_str(&self) -> String {
        self.str_or(keys::COLOR, defaults::COLOR)
    }

    pub fn background_color_str(&self) -> String {
        self.str_or(keys::BACKGROUND_COLOR, defaults::BACKGROUND_COLOR)
    }

    /// Parsed text color; malformed values fall back to white.
    pub fn color(&self) -> Color {
        Color::parse(&self.color_str()).unwrap_or(Color::WHITE)
    }

    /// Parsed background; malformed values fall back to transparent.
    pub fn background_color(&self) -> Color {
        Color::parse(&self.background_color_str()).unwrap_or(Color::TRANSPARENT)
    }

    pub fn font_size(&self) -> f64 {
        self.num_or(keys::FONT_SIZE, defaults::FONT_SIZE)
    }

    pub fn font_weight(&self) -> FontWeight {
        self.properties
            .get(keys::FONT_WEIGHT)
            .and_then(PropValue::as_str)
            .and_then(FontWeight::from_name)
            .unwrap_or_default()
    }

    pub fn padding(&self) -> f64 {
        self.num_or(keys::PADDING, defaults::PADDING)
    }

    pub fn border_radius(&self) -> f64 {
        self.num_or(keys::BORDER_RADIUS, defaults::BORDER_RADIUS)
    }

    /// Zero or negative sizes are allowed but never drawn or hit.
    pub fn is_degenerate(&self) -> bool {
        !(self.width > 0.0 && self.height > 0.0)
    }

    fn str_or(&self, key: &str, fallback: &str) -> String {
        match self.properties.get(key) {
            Some(PropValue::Str(s)) => s.clone(),
            _ => fallback.to_string(),
        }
    }

    fn num_or(&self, key: &str, fallback: f64) -> f64 {
        self.properties
            .get(key)
            .and_then(PropValue::as_f64)
            .unwrap_or(fallback)
    }
}

/// Partial update for a component's top-level fields.
///
/// `properties`, when present, is shallow-merged into the existing bag.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ComponentPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub x: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub y: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub properties: Option<Properties>,
}

impl ComponentPatch {
    pub fn position(x: f64, y: f64) -> Self {
        Self {
            x: Some(x),
            y: Some(y),
            ..Self::default()
        }
    }

    /// Patch a single property key.
    pub fn property(key: impl Into<String>, value: impl Into<PropValue>) -> Self {
        Self {
            properties: Some(Properties::new().with(key, value)),
            ..Self::default()
        }
    }
}
