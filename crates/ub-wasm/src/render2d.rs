//! Canvas2D painter.
//!
//! Draws the display list built by `ub_render::render_document` onto an
//! HTML `<canvas>` via `CanvasRenderingContext2d`. All styling decisions are
//! already made in the display list; this module only issues draw calls.

use kurbo::Rect;
use ub_render::{CanvasTheme, DrawItem, Label, LabelRole};
use web_sys::CanvasRenderingContext2d;

const FONT_FAMILY: &str = "Inter, system-ui, sans-serif";
const GRID_SPACING: f64 = 20.0;

/// Paint the full canvas: background, grid, then items back-to-front.
pub fn render_items(
    ctx: &CanvasRenderingContext2d,
    items: &[DrawItem],
    canvas_width: f64,
    canvas_height: f64,
    theme: &CanvasTheme,
) {
    // Clear canvas
    ctx.set_fill_style_str(&theme.background.to_css());
    ctx.fill_rect(0.0, 0.0, canvas_width, canvas_height);

    draw_grid(ctx, canvas_width, canvas_height, theme);

    for item in items.iter().filter(|i| !i.degenerate) {
        draw_item(ctx, item, theme);
    }
}

fn draw_item(ctx: &CanvasRenderingContext2d, item: &DrawItem, theme: &CanvasTheme) {
    let b = item.bounds;
    log::trace!("paint {} {}", item.kind, item.id);

    ctx.save();

    if let Some(fill) = item.fill {
        rounded_rect_path(ctx, b, item.corner_radius);
        ctx.set_fill_style_str(&fill.to_css());
        ctx.fill();
    }

    if let Some(border) = item.border {
        rounded_rect_path(ctx, b, item.corner_radius);
        ctx.set_stroke_style_str(&border.color.to_css());
        ctx.set_line_width(border.width);
        ctx.stroke();
    }

    if let Some(label) = &item.label
        && !label.text.is_empty()
    {
        draw_label(ctx, b, label);
    }

    // Selection highlight
    if item.selected {
        ctx.set_stroke_style_str(&theme.accent.to_css());
        ctx.set_line_width(theme.selection_width);
        rounded_rect_path(ctx, theme.selection_outline(b), item.corner_radius);
        ctx.stroke();
    }

    ctx.restore();
}

fn draw_label(ctx: &CanvasRenderingContext2d, b: Rect, label: &Label) {
    ctx.set_font(&format!(
        "{} {}px {FONT_FAMILY}",
        label.weight.css_weight(),
        label.font_size
    ));
    ctx.set_fill_style_str(&label.color.to_css());
    ctx.set_text_baseline("middle");

    let cy = b.center().y;
    let x = match label.role {
        LabelRole::Placeholder => {
            ctx.set_text_align("left");
            b.x0 + label.padding
        }
        LabelRole::Content | LabelRole::Caption => {
            ctx.set_text_align("center");
            b.center().x
        }
    };
    let _ = ctx.fill_text(&label.text, x, cy);
}

fn draw_grid(ctx: &CanvasRenderingContext2d, width: f64, height: f64, theme: &CanvasTheme) {
    ctx.set_fill_style_str(&theme.grid.to_css());
    let mut x = 0.0;
    while x < width {
        let mut y = 0.0;
        while y < height {
            ctx.fill_rect(x, y, 1.0, 1.0);
            y += GRID_SPACING;
        }
        x += GRID_SPACING;
    }
}

// ─── Helpers ─────────────────────────────────────────────────────────────

fn rounded_rect_path(ctx: &CanvasRenderingContext2d, b: Rect, r: f64) {
    let (x, y, w, h) = (b.x0, b.y0, b.width(), b.height());
    let r = r.max(0.0).min(w / 2.0).min(h / 2.0);
    ctx.begin_path();
    ctx.move_to(x + r, y);
    ctx.line_to(x + w - r, y);
    ctx.arc_to(x + w, y, x + w, y + r, r).unwrap_or(());
    ctx.line_to(x + w, y + h - r);
    ctx.arc_to(x + w, y + h, x + w - r, y + h, r).unwrap_or(());
    ctx.line_to(x + r, y + h);
    ctx.arc_to(x, y + h, x, y + h - r, r).unwrap_or(());
    ctx.line_to(x, y + r);
    ctx.arc_to(x, y, x + r, y, r).unwrap_or(());
    ctx.close_path();
}
