//! Document store: the single source of truth for placed components.
//!
//! Holds the ordered component list (insertion order = z-order,
//! back-to-front) and the at-most-one selection. All mutation goes through
//! `add` / `update` / `remove` / `select`; each successful call notifies
//! every subscribed observer synchronously before returning. There is no
//! batching or debouncing: a drag of N moves produces N notifications.

use crate::error::StoreError;
use crate::id::ComponentId;
use crate::model::{CanvasComponent, ComponentPatch};
use smallvec::SmallVec;
use std::fmt;

/// What changed in a single store mutation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreEvent {
    Added(ComponentId),
    Updated(ComponentId),
    Removed {
        id: ComponentId,
        was_selected: bool,
    },
    SelectionChanged(Option<ComponentId>),
}

/// Handle returned by `subscribe`, used to unsubscribe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ObserverId(u64);

/// Observers see the event and a read-only view of the store after the
/// mutation has been applied.
pub type Observer = Box<dyn FnMut(&StoreEvent, &DocumentStore)>;

#[derive(Default)]
pub struct DocumentStore {
    components: Vec<CanvasComponent>,
    selected: Option<ComponentId>,
    observers: SmallVec<[(ObserverId, Observer); 2]>,
    next_observer: u64,
    /// Bumped once per notified mutation.
    revision: u64,
}

impl fmt::Debug for DocumentStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DocumentStore")
            .field("components", &self.components)
            .field("selected", &self.selected)
            .field("observers", &self.observers.len())
            .field("revision", &self.revision)
            .finish()
    }
}

impl DocumentStore {
    pub fn new() -> Self {
        Self::default()
    }

    // ─── Mutations ───────────────────────────────────────────────────────

    /// Append a component to the end of the z-order.
    pub fn add(&mut self, component: CanvasComponent) -> Result<ComponentId, StoreError> {
        let id = component.id;
        if self.contains(id) {
            log::error!("add rejected: {id} already exists");
            return Err(StoreError::DuplicateId(id));
        }
        log::debug!("add {id} ({})", component.kind);
        self.components.push(component);
        self.notify(StoreEvent::Added(id));
        Ok(id)
    }

    /// Merge `patch` into the component's top-level fields. A properties
    /// patch is merged key by key; keys it does not mention are kept.
    pub fn update(&mut self, id: ComponentId, patch: ComponentPatch) -> Result<(), StoreError> {
        let component = self
            .components
            .iter_mut()
            .find(|c| c.id == id)
            .ok_or(StoreError::NotFound(id))?;
        log::trace!("update {id}: {patch:?}");
        component.apply(patch);
        self.notify(StoreEvent::Updated(id));
        Ok(())
    }

    /// Remove a component, clearing the selection if it pointed at it.
    /// Unknown ids are a no-op and return `None`.
    pub fn remove(&mut self, id: ComponentId) -> Option<CanvasComponent> {
        let pos = self.index_of(id)?;
        let removed = self.components.remove(pos);
        let was_selected = self.selected == Some(id);
        if was_selected {
            self.selected = None;
        }
        log::debug!("remove {id} (was_selected: {was_selected})");
        self.notify(StoreEvent::Removed { id, was_selected });
        if was_selected {
            self.notify(StoreEvent::SelectionChanged(None));
        }
        Some(removed)
    }

    /// Set or clear the selection. The id must exist; on `NotFound` the
    /// selection is left as it was. Re-selecting the current value does
    /// not notify.
    pub fn select(&mut self, id: Option<ComponentId>) -> Result<(), StoreError> {
        if let Some(id) = id
            && !self.contains(id)
        {
            return Err(StoreError::NotFound(id));
        }
        if self.selected == id {
            return Ok(());
        }
        self.selected = id;
        self.notify(StoreEvent::SelectionChanged(id));
        Ok(())
    }

    // ─── Observers ───────────────────────────────────────────────────────

    pub fn subscribe(
        &mut self,
        observer: impl FnMut(&StoreEvent, &DocumentStore) + 'static,
    ) -> ObserverId {
        let id = ObserverId(self.next_observer);
        self.next_observer += 1;
        self.observers.push((id, Box::new(observer)));
        id
    }

    /// Returns `false` if the observer was not subscribed.
    pub fn unsubscribe(&mut self, id: ObserverId) -> bool {
        let before = self.observers.len();
        self.observers.retain(|(oid, _)| *oid != id);
        self.observers.len() != before
    }

    fn notify(&mut self, event: StoreEvent) {
        self.revision += 1;
        // Observers only get `&DocumentStore`, so they cannot re-enter a
        // mutation while the list is taken out.
        let mut observers = std::mem::take(&mut self.observers);
        for (_, observer) in observers.iter_mut() {
            observer(&event, self);
        }
        self.observers = observers;
    }

    // ─── Queries ─────────────────────────────────────────────────────────

    /// Components in z-order, back-to-front.
    pub fn components(&self) -> &[CanvasComponent] {
        &self.components
    }

    pub fn get(&self, id: ComponentId) -> Option<&CanvasComponent> {
        self.components.iter().find(|c| c.id == id)
    }

    pub fn index_of(&self, id: ComponentId) -> Option<usize> {
        self.components.iter().position(|c| c.id == id)
    }

    pub fn contains(&self, id: ComponentId) -> bool {
        self.index_of(id).is_some()
    }

    pub fn len(&self) -> usize {
        self.components.len()
    }

    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }

    pub fn selected(&self) -> Option<ComponentId> {
        self.selected
    }

    pub fn selected_component(&self) -> Option<&CanvasComponent> {
        self.selected.and_then(|id| self.get(id))
    }

    pub fn revision(&self) -> u64 {
        self.revision
    }
}
