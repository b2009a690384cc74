//! WASM bridge for UB: exposes the builder session to JavaScript.
//!
//! Compiled via `wasm-pack build --target web` and loaded by the builder
//! page. JS owns the DOM (palette buttons, panel inputs, toolbar) and calls
//! into `BuilderCanvas` for every interaction, then re-renders.

mod render2d;

use ub_core::{ComponentId, ComponentKind};
use ub_editor::input::Modifiers;
use ub_editor::palette::Palette;
use ub_editor::properties::Dimension;
use ub_editor::session::BuilderSession;
use ub_render::CanvasTheme;
use wasm_bindgen::prelude::*;
use web_sys::CanvasRenderingContext2d;

/// The main WASM-facing canvas controller.
///
/// Holds the builder session plus view state (size, theme). All
/// interaction from the page goes through this struct.
#[wasm_bindgen]
pub struct BuilderCanvas {
    session: BuilderSession,
    width: f64,
    height: f64,
    /// `true` = dark (default), `false` = light.
    dark_mode: bool,
}

#[wasm_bindgen]
impl BuilderCanvas {
    /// Create a new canvas controller with the given dimensions.
    #[wasm_bindgen(constructor)]
    pub fn new(width: f64, height: f64) -> Self {
        console_error_panic_hook_setup();

        Self {
            session: BuilderSession::default(),
            width,
            height,
            dark_mode: true,
        }
    }

    /// Render the document to a Canvas2D context.
    pub fn render(&self, ctx: &CanvasRenderingContext2d) {
        let theme = self.theme();
        let items = self.session.display_list(&theme);
        render2d::render_items(ctx, &items, self.width, self.height, &theme);
    }

    /// Switch between light and dark canvas themes.
    pub fn set_theme(&mut self, is_dark: bool) {
        self.dark_mode = is_dark;
    }

    /// Resize the canvas.
    pub fn resize(&mut self, width: f64, height: f64) {
        self.width = width;
        self.height = height;
    }

    // ─── Palette ─────────────────────────────────────────────────────────

    /// Place a new component of `kind` (`"text"`, `"button"`, ...).
    /// Returns the new id, or an empty string for an unknown kind.
    pub fn add_component(&mut self, kind: &str) -> String {
        let Some(kind) = ComponentKind::from_name(kind) else {
            log::warn!("unknown component kind {kind:?}");
            return String::new();
        };
        match self.session.add_component(kind) {
            Ok(id) => id.as_str().to_string(),
            Err(err) => {
                log::warn!("add_component failed: {err}");
                String::new()
            }
        }
    }

    /// Palette entries as a JSON array of `{kind, name, description}`.
    pub fn get_palette_json(&self) -> String {
        serde_json::to_string(&Palette::entries()).unwrap_or_else(|_| "[]".to_string())
    }

    // ─── Pointer ─────────────────────────────────────────────────────────

    /// Handle pointer down at canvas-local (x, y). Returns true if the
    /// selection changed.
    pub fn handle_pointer_down(&mut self, x: f64, y: f64) -> bool {
        self.session.pointer_down(x, y)
    }

    /// Handle pointer move. Returns true if a dragged component moved.
    pub fn handle_pointer_move(&mut self, x: f64, y: f64) -> bool {
        self.session.pointer_move(x, y)
    }

    /// Handle pointer up. Returns true if a drag was in progress.
    pub fn handle_pointer_up(&mut self, x: f64, y: f64) -> bool {
        self.session.pointer_up(x, y)
    }

    pub fn is_dragging(&self) -> bool {
        self.session.is_dragging()
    }

    // ─── Keyboard Shortcut API ───────────────────────────────────────────

    /// Handle a keyboard event. Returns a JSON string:
    /// `{"action":"<action>"|null, "changed":bool}`
    pub fn handle_key(
        &mut self,
        key: &str,
        ctrl: bool,
        shift: bool,
        alt: bool,
        meta: bool,
    ) -> String {
        let outcome = self.session.handle_key(
            key,
            Modifiers {
                shift,
                ctrl,
                alt,
                meta,
            },
        );
        serde_json::to_string(&outcome)
            .unwrap_or_else(|_| r#"{"action":null,"changed":false}"#.to_string())
    }

    // ─── Selection ───────────────────────────────────────────────────────

    /// Get the currently selected component id, or empty string if none.
    pub fn get_selected_id(&self) -> String {
        self.session
            .store()
            .selected()
            .map(|id| id.as_str().to_string())
            .unwrap_or_default()
    }

    /// Select a component by id; an empty id clears the selection.
    /// Returns `true` if the selection is now what was asked for.
    pub fn select_by_id(&mut self, id: &str) -> bool {
        let target = if id.is_empty() {
            None
        } else {
            let Some(id) = ComponentId::lookup(id) else {
                log::warn!("select_by_id: no component {id:?}");
                return false;
            };
            Some(id)
        };
        match self.session.select(target) {
            Ok(_) => true,
            Err(err) => {
                log::warn!("select_by_id: {err}");
                false
            }
        }
    }

    /// Delete the selected component. Returns true if one was removed.
    pub fn delete_selected(&mut self) -> bool {
        self.session.delete_selected()
    }

    /// Duplicate the selected component. Returns the copy's id, or empty
    /// string if nothing was selected.
    pub fn duplicate_selected(&mut self) -> String {
        match self.session.duplicate_selected() {
            Ok(Some(id)) => id.as_str().to_string(),
            Ok(None) => String::new(),
            Err(err) => {
                log::warn!("duplicate_selected failed: {err}");
                String::new()
            }
        }
    }

    /// `"{kind} selected"`, or empty string with no selection.
    pub fn toolbar_status(&self) -> String {
        self.session.toolbar_status().unwrap_or_default()
    }

    // ─── Property panel ──────────────────────────────────────────────────

    /// Set `x`, `y`, `width` or `height` from raw input text.
    /// Non-numeric input is stored as 0.
    pub fn set_dimension(&mut self, field: &str, raw: &str) -> bool {
        let Some(dimension) = Dimension::from_name(field) else {
            log::warn!("unknown dimension {field:?}");
            return false;
        };
        self.session
            .set_dimension(dimension, raw)
            .unwrap_or_else(|err| {
                log::warn!("set_dimension failed: {err}");
                false
            })
    }

    /// Set a string property (text, color, fontWeight, ...).
    pub fn set_property_str(&mut self, key: &str, value: &str) -> bool {
        self.session.set_property(key, value).unwrap_or_else(|err| {
            log::warn!("set_property failed: {err}");
            false
        })
    }

    /// Set a numeric property (fontSize, borderRadius, ...).
    pub fn set_property_num(&mut self, key: &str, value: f64) -> bool {
        self.session.set_property(key, value).unwrap_or_else(|err| {
            log::warn!("set_property failed: {err}");
            false
        })
    }

    /// Panel view model as JSON: `{"state":"empty"}` or
    /// `{"state":"editing", ...}`.
    pub fn get_panel_json(&self) -> String {
        serde_json::to_string(&self.session.panel())
            .unwrap_or_else(|_| r#"{"state":"empty"}"#.to_string())
    }

    // ─── Document ────────────────────────────────────────────────────────

    /// All components in z-order as a JSON array.
    pub fn get_document_json(&self) -> String {
        serde_json::to_string(self.session.store().components())
            .unwrap_or_else(|_| "[]".to_string())
    }

    /// Export the document as a standalone SVG string.
    pub fn export_svg(&self) -> String {
        self.session.export_svg(&self.theme())
    }
}

// ─── Private helpers ─────────────────────────────────────────────────────

impl BuilderCanvas {
    fn theme(&self) -> CanvasTheme {
        if self.dark_mode {
            CanvasTheme::dark()
        } else {
            CanvasTheme::light()
        }
    }
}

/// Install a panic hook that logs to the browser console.
fn console_error_panic_hook_setup() {
    #[cfg(target_arch = "wasm32")]
    {
        use std::sync::Once;
        static SET_HOOK: Once = Once::new();
        SET_HOOK.call_once(|| {
            std::panic::set_hook(Box::new(|info| {
                let msg = format!("UB WASM panic: {info}");
                web_sys::console::error_1(&msg.into());
            }));
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn add_and_select_round_trip() {
        let mut canvas = BuilderCanvas::new(800.0, 600.0);
        let id = canvas.add_component("Button");
        assert_eq!(id, "button-0");
        assert!(canvas.select_by_id(&id));
        assert_eq!(canvas.get_selected_id(), id);
        assert_eq!(canvas.toolbar_status(), "button selected");
        assert!(canvas.select_by_id(""));
        assert_eq!(canvas.get_selected_id(), "");
    }

    #[test]
    fn unknown_inputs_are_rejected_quietly() {
        let mut canvas = BuilderCanvas::new(800.0, 600.0);
        assert_eq!(canvas.add_component("slider"), "");
        assert!(!canvas.select_by_id("nope"));
        assert!(!canvas.set_dimension("depth", "4"));
        assert!(!canvas.set_property_str("text", "no selection"));
    }

    #[test]
    fn selecting_unknown_id_leaves_interner_alone() {
        let mut canvas = BuilderCanvas::new(800.0, 600.0);
        let id = canvas.add_component("text");
        assert!(canvas.select_by_id(&id));
        assert!(!canvas.select_by_id("typed-by-hand-4411"));
        assert_eq!(ComponentId::lookup("typed-by-hand-4411"), None);
        assert_eq!(canvas.get_selected_id(), id);
    }

    #[test]
    fn document_json_uses_type_field() {
        let mut canvas = BuilderCanvas::new(800.0, 600.0);
        canvas.add_component("text");
        let doc: serde_json::Value = serde_json::from_str(&canvas.get_document_json()).unwrap();
        assert_eq!(doc[0]["type"], "text");
        assert_eq!(doc[0]["width"], 200.0);
        assert_eq!(doc[0]["properties"]["text"], "Sample Text");
    }

    #[test]
    fn pointer_drag_and_key_json() {
        let mut canvas = BuilderCanvas::new(800.0, 600.0);
        let id = canvas.add_component("image");
        assert!(canvas.handle_pointer_down(120.0, 120.0));
        assert!(canvas.handle_pointer_move(220.0, 320.0));
        assert!(canvas.handle_pointer_up(220.0, 320.0));
        assert_eq!(canvas.get_selected_id(), id);

        let json: serde_json::Value =
            serde_json::from_str(&canvas.handle_key("Delete", false, false, false, false))
                .unwrap();
        assert_eq!(json["action"], "delete");
        assert_eq!(json["changed"], true);
        assert_eq!(canvas.get_document_json(), "[]");
    }

    #[test]
    fn panel_json_tracks_selection() {
        let mut canvas = BuilderCanvas::new(800.0, 600.0);
        assert_eq!(canvas.get_panel_json(), r#"{"state":"empty"}"#);
        let id = canvas.add_component("input");
        canvas.select_by_id(&id);
        assert!(canvas.set_dimension("width", "12px"));
        let panel: serde_json::Value = serde_json::from_str(&canvas.get_panel_json()).unwrap();
        assert_eq!(panel["state"], "editing");
        assert_eq!(panel["width"], 12.0);
        assert_eq!(panel["content"]["label"], "Placeholder");
    }

    #[test]
    fn palette_json_lists_five_kinds() {
        let canvas = BuilderCanvas::new(800.0, 600.0);
        let palette: serde_json::Value = serde_json::from_str(&canvas.get_palette_json()).unwrap();
        assert_eq!(palette.as_array().map(Vec::len), Some(5));
        assert_eq!(palette[4]["description"], "Layout container");
    }
}
