//! Display list → standalone SVG document.

use crate::scene::{DrawItem, Label, LabelRole};
use crate::theme::CanvasTheme;
use kurbo::Rect;
use std::fmt::Write;

const EMPTY_EXTENT: Rect = Rect::new(0.0, 0.0, 0.0, 0.0);

/// Render drawable items as an SVG string. The view box is the union of all
/// drawable bounds, widened to hold the selection outline; an empty document
/// yields an empty view box.
pub fn render_svg(items: &[DrawItem], theme: &CanvasTheme) -> String {
    let drawable: Vec<&DrawItem> = items.iter().filter(|i| !i.degenerate).collect();
    let extent = drawable
        .iter()
        .map(|i| {
            if i.selected {
                theme.selection_extent(i.bounds)
            } else {
                i.bounds
            }
        })
        .reduce(|a, b| a.union(b))
        .unwrap_or(EMPTY_EXTENT);

    let mut out = String::new();
    let _ = writeln!(
        out,
        r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="{} {} {} {}" width="{}" height="{}">"#,
        num(extent.x0),
        num(extent.y0),
        num(extent.width()),
        num(extent.height()),
        num(extent.width()),
        num(extent.height()),
    );
    let _ = writeln!(
        out,
        r#"  <rect x="{}" y="{}" width="{}" height="{}" fill="{}"/>"#,
        num(extent.x0),
        num(extent.y0),
        num(extent.width()),
        num(extent.height()),
        theme.background.to_css(),
    );

    for item in drawable {
        write_item(&mut out, item, theme);
    }

    out.push_str("</svg>\n");
    out
}

fn write_item(out: &mut String, item: &DrawItem, theme: &CanvasTheme) {
    let b = item.bounds;
    let _ = write!(out, r#"  <g data-id="{}">"#, escape(item.id.as_str()));

    if item.fill.is_some() || item.border.is_some() {
        let fill = item
            .fill
            .map(|f| f.to_css())
            .unwrap_or_else(|| "none".to_string());
        let _ = write!(
            out,
            r#"<rect x="{}" y="{}" width="{}" height="{}" rx="{}" fill="{}""#,
            num(b.x0),
            num(b.y0),
            num(b.width()),
            num(b.height()),
            num(item.corner_radius),
            fill,
        );
        if let Some(border) = item.border {
            let _ = write!(
                out,
                r#" stroke="{}" stroke-width="{}""#,
                border.color.to_css(),
                num(border.width)
            );
        }
        out.push_str("/>");
    }

    if let Some(label) = &item.label
        && !label.text.is_empty()
    {
        write_label(out, b, label);
    }

    if item.selected {
        let outline = theme.selection_outline(b);
        let _ = write!(
            out,
            r#"<rect x="{}" y="{}" width="{}" height="{}" rx="{}" fill="none" stroke="{}" stroke-width="{}"/>"#,
            num(outline.x0),
            num(outline.y0),
            num(outline.width()),
            num(outline.height()),
            num(item.corner_radius),
            theme.accent.to_css(),
            num(theme.selection_width),
        );
    }

    out.push_str("</g>\n");
}

fn write_label(out: &mut String, b: Rect, label: &Label) {
    let (x, anchor) = match label.role {
        LabelRole::Placeholder => (b.x0 + label.padding, "start"),
        LabelRole::Content | LabelRole::Caption => (b.center().x, "middle"),
    };
    let _ = write!(
        out,
        r#"<text x="{}" y="{}" font-size="{}" font-weight="{}" fill="{}" text-anchor="{}" dominant-baseline="central">{}</text>"#,
        num(x),
        num(b.center().y),
        num(label.font_size),
        label.weight.css_weight(),
        label.color.to_css(),
        anchor,
        escape(&label.text),
    );
}

/// Format without a trailing `.0` for whole numbers.
fn num(v: f64) -> String {
    if v.fract() == 0.0 && v.abs() < 1e15 {
        format!("{}", v as i64)
    } else {
        format!("{v:.2}")
    }
}

fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for ch in s.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(ch),
        }
    }
    out
}
