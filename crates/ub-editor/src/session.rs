//! Builder session: owns the document and routes user intent into it.
//!
//! One session per open canvas. Hosts (the WASM bridge, tests) feed it
//! canvas-local pointer events, key presses and panel edits; everything
//! ends up as `DocumentStore` mutations, which observers see synchronously.

use crate::drag::DragController;
use crate::input::{InputEvent, Modifiers};
use crate::palette::Palette;
use crate::properties::{Dimension, PanelState, PropertyEditor};
use crate::shortcuts::{ShortcutAction, ShortcutMap};
use kurbo::Point;
use serde::Serialize;
use ub_core::{
    ComponentId, ComponentKind, DocumentStore, IdGenerator, ObserverId, PropValue, SessionConfig,
    StoreError, StoreEvent,
};
use ub_render::{CanvasTheme, DrawItem, hit_test, render_document, render_svg};

/// Result of a key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct KeyOutcome {
    pub action: Option<ShortcutAction>,
    /// The document or selection changed.
    pub changed: bool,
}

#[derive(Debug)]
pub struct BuilderSession {
    store: DocumentStore,
    palette: Palette,
    drag: DragController,
    config: SessionConfig,
}

impl Default for BuilderSession {
    fn default() -> Self {
        Self::new(SessionConfig::default())
    }
}

impl BuilderSession {
    pub fn new(config: SessionConfig) -> Self {
        Self {
            store: DocumentStore::new(),
            palette: Palette::new(config.palette),
            drag: DragController::new(),
            config,
        }
    }

    pub fn with_id_generator(config: SessionConfig, ids: impl IdGenerator + 'static) -> Self {
        Self {
            store: DocumentStore::new(),
            palette: Palette::with_id_generator(config.palette, ids),
            drag: DragController::new(),
            config,
        }
    }

    pub fn store(&self) -> &DocumentStore {
        &self.store
    }

    pub fn is_dragging(&self) -> bool {
        self.drag.is_dragging()
    }

    // ─── Observers ───────────────────────────────────────────────────────

    pub fn subscribe(
        &mut self,
        observer: impl FnMut(&StoreEvent, &DocumentStore) + 'static,
    ) -> ObserverId {
        self.store.subscribe(observer)
    }

    pub fn unsubscribe(&mut self, id: ObserverId) -> bool {
        self.store.unsubscribe(id)
    }

    // ─── Document edits ──────────────────────────────────────────────────

    /// Place a new component from the palette. The selection is untouched.
    pub fn add_component(&mut self, kind: ComponentKind) -> Result<ComponentId, StoreError> {
        self.palette.add(&mut self.store, kind)
    }

    /// Set or clear the selection. Returns whether it changed.
    pub fn select(&mut self, id: Option<ComponentId>) -> Result<bool, StoreError> {
        let before = self.store.selected();
        self.store.select(id)?;
        Ok(before != self.store.selected())
    }

    pub fn set_dimension(&mut self, dimension: Dimension, raw: &str) -> Result<bool, StoreError> {
        PropertyEditor::set_dimension(&mut self.store, dimension, raw)
    }

    pub fn set_property(
        &mut self,
        key: &str,
        value: impl Into<PropValue>,
    ) -> Result<bool, StoreError> {
        PropertyEditor::set_property(&mut self.store, key, value)
    }

    /// Remove the selected component. Returns `false` if nothing was
    /// selected.
    pub fn delete_selected(&mut self) -> bool {
        let Some(id) = self.store.selected() else {
            return false;
        };
        if self.drag.target() == Some(id) {
            self.drag.end_drag();
        }
        self.store.remove(id).is_some()
    }

    /// Copy the selected component under a fresh id, shifted by the
    /// configured offset, and select the copy.
    pub fn duplicate_selected(&mut self) -> Result<Option<ComponentId>, StoreError> {
        let Some(original) = self.store.selected_component() else {
            return Ok(None);
        };
        let mut copy = original.clone();
        copy.id = self.palette.fresh_id(copy.kind);
        let (dx, dy) = self.config.duplicate_offset;
        copy.x += dx;
        copy.y += dy;

        log::debug!("duplicate {} -> {}", original.id, copy.id);
        let id = self.store.add(copy)?;
        self.store.select(Some(id))?;
        Ok(Some(id))
    }

    pub fn panel(&self) -> PanelState {
        PropertyEditor::panel(&self.store)
    }

    // ─── Input ───────────────────────────────────────────────────────────

    /// Pointer pressed at canvas-local (x, y). Returns whether the
    /// selection changed.
    pub fn pointer_down(&mut self, x: f64, y: f64) -> bool {
        self.handle_input(&InputEvent::pointer_down(x, y))
    }

    /// Returns whether a dragged component moved.
    pub fn pointer_move(&mut self, x: f64, y: f64) -> bool {
        self.drag.move_drag(&mut self.store, Point::new(x, y))
    }

    /// Returns whether a drag was in progress.
    pub fn pointer_up(&mut self, _x: f64, _y: f64) -> bool {
        self.drag.end_drag()
    }

    /// Route a normalized input event. Returns whether the document or the
    /// selection changed.
    pub fn handle_input(&mut self, event: &InputEvent) -> bool {
        match event {
            InputEvent::Key { key, modifiers } => self.handle_key(key, *modifiers).changed,
            InputEvent::PointerDown { x, y } => {
                let hit = hit_test(self.store.components(), *x, *y);
                self.drag.handle(&mut self.store, event, hit)
            }
            InputEvent::PointerMove { .. } | InputEvent::PointerUp { .. } => {
                self.drag.handle(&mut self.store, event, None)
            }
        }
    }

    pub fn handle_key(&mut self, key: &str, modifiers: Modifiers) -> KeyOutcome {
        let Some(action) = ShortcutMap::resolve_with(key, modifiers) else {
            return KeyOutcome::default();
        };
        let changed = match action {
            ShortcutAction::Delete => self.delete_selected(),
            ShortcutAction::Deselect => {
                self.drag.end_drag();
                self.select(None).unwrap_or(false)
            }
            ShortcutAction::Duplicate => match self.duplicate_selected() {
                Ok(copy) => copy.is_some(),
                Err(err) => {
                    log::warn!("duplicate failed: {err}");
                    false
                }
            },
        };
        log::debug!("key {key:?} -> {action:?} (changed: {changed})");
        KeyOutcome {
            action: Some(action),
            changed,
        }
    }

    // ─── Output ──────────────────────────────────────────────────────────

    /// `"{kind} selected"` for the toolbar, or `None` with no selection.
    pub fn toolbar_status(&self) -> Option<String> {
        self.store
            .selected_component()
            .map(|c| format!("{} selected", c.kind))
    }

    pub fn display_list(&self, theme: &CanvasTheme) -> Vec<DrawItem> {
        render_document(self.store.components(), self.store.selected(), theme)
    }

    pub fn export_svg(&self, theme: &CanvasTheme) -> String {
        render_svg(&self.display_list(theme), theme)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn add_leaves_selection_alone() {
        let mut session = BuilderSession::default();
        let a = session.add_component(ComponentKind::Text).unwrap();
        session.select(Some(a)).unwrap();
        session.add_component(ComponentKind::Button).unwrap();
        assert_eq!(session.store().selected(), Some(a));
    }

    #[test]
    fn pointer_down_hits_topmost() {
        let mut session = BuilderSession::default();
        session.add_component(ComponentKind::Container).unwrap();
        let top = session.add_component(ComponentKind::Button).unwrap();
        assert!(session.pointer_down(150.0, 120.0));
        assert_eq!(session.store().selected(), Some(top));
        assert!(session.is_dragging());
    }

    #[test]
    fn toolbar_status_names_the_kind() {
        let mut session = BuilderSession::default();
        assert_eq!(session.toolbar_status(), None);
        let id = session.add_component(ComponentKind::Image).unwrap();
        session.select(Some(id)).unwrap();
        assert_eq!(session.toolbar_status().as_deref(), Some("image selected"));
    }

    #[test]
    fn delete_while_dragging_ends_gesture() {
        let mut session = BuilderSession::default();
        session.add_component(ComponentKind::Text).unwrap();
        session.pointer_down(110.0, 110.0);
        assert!(session.delete_selected());
        assert!(!session.is_dragging());
        assert!(!session.pointer_move(300.0, 300.0));
        assert!(session.store().is_empty());
    }

    #[test]
    fn duplicate_without_selection_is_none() {
        let mut session = BuilderSession::default();
        session.add_component(ComponentKind::Text).unwrap();
        assert_eq!(session.duplicate_selected(), Ok(None));
        assert_eq!(session.store().len(), 1);
    }

    #[test]
    fn unbound_key_does_nothing() {
        let mut session = BuilderSession::default();
        assert_eq!(session.handle_key("q", Modifiers::NONE), KeyOutcome::default());
    }

    #[test]
    fn display_list_marks_selection() {
        let mut session = BuilderSession::default();
        let id = session.add_component(ComponentKind::Button).unwrap();
        session.select(Some(id)).unwrap();
        let items = session.display_list(&CanvasTheme::light());
        assert_eq!(items.len(), 1);
        assert!(items[0].selected);
        assert!(session.export_svg(&CanvasTheme::light()).contains("Click me"));
    }
}
