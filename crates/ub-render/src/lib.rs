pub mod hit;
pub mod scene;
pub mod svg;
pub mod theme;

pub use hit::{component_rect, hit_test};
pub use scene::{Border, DrawItem, Label, LabelRole, render_document};
pub use svg::render_svg;
pub use theme::CanvasTheme;
