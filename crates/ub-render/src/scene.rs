//! Document → display list.
//!
//! `render_document` is a pure function of the component list, the
//! selection and the theme. It resolves every property through the
//! per-key default rules, so painters (Canvas2D, SVG) never look at the raw
//! property bag and never have to cope with malformed values.

use crate::hit::component_rect;
use crate::theme::CanvasTheme;
use kurbo::Rect;
use ub_core::{CanvasComponent, Color, ComponentId, ComponentKind, FontWeight};

/// Image placeholders keep a fixed rounding regardless of `borderRadius`.
const IMAGE_CORNER_RADIUS: f64 = 8.0;
const CAPTION_FONT_SIZE: f64 = 14.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LabelRole {
    /// User content (Text, Button).
    Content,
    /// Input placeholder, left-aligned and muted.
    Placeholder,
    /// Fixed kind caption ("Container", "Image Placeholder").
    Caption,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Label {
    pub text: String,
    pub role: LabelRole,
    pub color: Color,
    pub font_size: f64,
    pub weight: FontWeight,
    /// Horizontal inset for left-aligned labels.
    pub padding: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Border {
    pub color: Color,
    pub width: f64,
}

/// One component, ready to paint.
#[derive(Debug, Clone, PartialEq)]
pub struct DrawItem {
    pub id: ComponentId,
    pub kind: ComponentKind,
    pub bounds: Rect,
    pub fill: Option<Color>,
    pub border: Option<Border>,
    pub corner_radius: f64,
    pub label: Option<Label>,
    /// Drawn with an accent outline on top of the item.
    pub selected: bool,
    /// Zero or negative size; painters skip it.
    pub degenerate: bool,
}

/// Build the display list, back-to-front.
pub fn render_document(
    components: &[CanvasComponent],
    selected: Option<ComponentId>,
    theme: &CanvasTheme,
) -> Vec<DrawItem> {
    components
        .iter()
        .map(|c| render_component(c, selected == Some(c.id), theme))
        .collect()
}

fn render_component(c: &CanvasComponent, selected: bool, theme: &CanvasTheme) -> DrawItem {
    let mut item = DrawItem {
        id: c.id,
        kind: c.kind,
        bounds: component_rect(c),
        fill: None,
        border: None,
        corner_radius: 0.0,
        label: None,
        selected,
        degenerate: c.is_degenerate(),
    };

    match c.kind {
        ComponentKind::Text => {
            item.label = Some(content_label(c, c.color()));
        }
        ComponentKind::Button => {
            item.fill = Some(theme.accent);
            item.corner_radius = c.border_radius();
            item.label = Some(content_label(c, theme.accent_text));
        }
        ComponentKind::Input => {
            item.fill = Some(theme.input_bg);
            item.border = Some(Border {
                color: theme.border,
                width: 1.0,
            });
            item.corner_radius = c.border_radius();
            item.label = Some(Label {
                text: c.text(),
                role: LabelRole::Placeholder,
                color: theme.muted_text,
                font_size: c.font_size(),
                weight: FontWeight::Normal,
                padding: c.padding(),
            });
        }
        ComponentKind::Container => {
            let bg = c.background_color();
            item.fill = (!bg.is_transparent()).then_some(bg);
            item.corner_radius = c.border_radius();
            item.label = Some(caption("Container", theme));
        }
        ComponentKind::Image => {
            item.fill = Some(theme.muted_bg);
            item.corner_radius = IMAGE_CORNER_RADIUS;
            item.label = Some(caption("Image Placeholder", theme));
        }
    }

    log::trace!(
        "DRAW {} {} at ({}, {}) selected={}",
        item.kind,
        item.id,
        item.bounds.x0,
        item.bounds.y0,
        item.selected
    );
    item
}

fn content_label(c: &CanvasComponent, color: Color) -> Label {
    Label {
        text: c.text(),
        role: LabelRole::Content,
        color,
        font_size: c.font_size(),
        weight: c.font_weight(),
        padding: c.padding(),
    }
}

fn caption(text: &str, theme: &CanvasTheme) -> Label {
    Label {
        text: text.to_string(),
        role: LabelRole::Caption,
        color: theme.muted_text,
        font_size: CAPTION_FONT_SIZE,
        weight: FontWeight::Normal,
        padding: 0.0,
    }
}
