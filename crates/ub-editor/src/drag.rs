//! Drag controller: pointer gesture → position updates.
//!
//! ```text
//!            pointer-down on component
//!   Idle ─────────────────────────────▶ Dragging { id, offset }
//!    ▲                                   │  ▲
//!    │ pointer-up / target gone          │  │ pointer-move: update(id, {x, y})
//!    └───────────────────────────────────┘  │ pointer-down: restart on new target
//! ```
//!
//! The offset between the pointer and the component's top-left corner is
//! captured once at gesture start, so the final position only depends on
//! the last pointer position, never on how many moves arrived in between.
//! Every move is written through `DocumentStore::update` immediately;
//! pointer-up performs no write of its own.

use crate::input::InputEvent;
use kurbo::{Point, Vec2};
use ub_core::{ComponentId, ComponentPatch, DocumentStore, StoreError};

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum DragState {
    #[default]
    Idle,
    Dragging {
        id: ComponentId,
        /// Pointer position minus the component's top-left at gesture start.
        offset: Vec2,
    },
}

#[derive(Debug, Default)]
pub struct DragController {
    state: DragState,
}

impl DragController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> DragState {
        self.state
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.state, DragState::Dragging { .. })
    }

    /// Id of the component under drag, if any.
    pub fn target(&self) -> Option<ComponentId> {
        match self.state {
            DragState::Dragging { id, .. } => Some(id),
            DragState::Idle => None,
        }
    }

    /// Start (or restart) a gesture on `id`: select it and capture the
    /// pointer offset. On `NotFound` the controller is left idle.
    pub fn begin_drag(
        &mut self,
        store: &mut DocumentStore,
        id: ComponentId,
        pointer: Point,
    ) -> Result<(), StoreError> {
        let Some(component) = store.get(id) else {
            self.state = DragState::Idle;
            return Err(StoreError::NotFound(id));
        };
        let offset = pointer - Point::new(component.x, component.y);

        if let DragState::Dragging { id: previous, .. } = self.state {
            log::debug!("drag restarted: {previous} -> {id}");
        }

        store.select(Some(id))?;
        self.state = DragState::Dragging { id, offset };
        log::debug!("drag begin {id} offset=({}, {})", offset.x, offset.y);
        Ok(())
    }

    /// Move the dragged component so the captured offset is preserved.
    /// Returns `true` if the store was updated.
    ///
    /// If the target is no longer the selected component (deleted, or the
    /// selection was cleared mid-gesture) the controller drops back to
    /// `Idle` and the move is ignored.
    pub fn move_drag(&mut self, store: &mut DocumentStore, pointer: Point) -> bool {
        let DragState::Dragging { id, offset } = self.state else {
            return false;
        };
        if store.selected() != Some(id) {
            log::debug!("drag target {id} no longer selected; ending gesture");
            self.state = DragState::Idle;
            return false;
        }

        let target = pointer - offset;
        log::trace!("drag move {id} -> ({}, {})", target.x, target.y);
        match store.update(id, ComponentPatch::position(target.x, target.y)) {
            Ok(()) => true,
            Err(err) => {
                log::warn!("drag move dropped: {err}");
                self.state = DragState::Idle;
                false
            }
        }
    }

    /// End the gesture. Returns whether a drag was active.
    pub fn end_drag(&mut self) -> bool {
        let was_dragging = self.is_dragging();
        if let DragState::Dragging { id, .. } = self.state {
            log::debug!("drag end {id}");
        }
        self.state = DragState::Idle;
        was_dragging
    }

    /// Route a normalized input event. `hit` is the topmost component under
    /// the pointer for pointer-down events. Returns `true` if the document
    /// or selection changed.
    ///
    /// Pointer-down on empty canvas clears the selection.
    pub fn handle(
        &mut self,
        store: &mut DocumentStore,
        event: &InputEvent,
        hit: Option<ComponentId>,
    ) -> bool {
        match event {
            InputEvent::PointerDown { x, y } => match hit {
                Some(id) => {
                    let before = store.selected();
                    match self.begin_drag(store, id, Point::new(*x, *y)) {
                        Ok(()) => before != store.selected(),
                        Err(err) => {
                            log::warn!("pointer-down ignored: {err}");
                            false
                        }
                    }
                }
                None => {
                    self.state = DragState::Idle;
                    let had_selection = store.selected().is_some();
                    // Clearing is always valid.
                    let _ = store.select(None);
                    had_selection
                }
            },
            InputEvent::PointerMove { x, y } => self.move_drag(store, Point::new(*x, *y)),
            InputEvent::PointerUp { .. } => {
                self.end_drag();
                false
            }
            InputEvent::Key { .. } => false,
        }
    }
}
