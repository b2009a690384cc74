//! Keyboard shortcut mapping.
//!
//! Maps key + modifier combos to semantic `ShortcutAction`s so the binding
//! table is shared by every host instead of living in page script.

use crate::input::Modifiers;
use serde::Serialize;

/// Actions that keyboard shortcuts can trigger.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum ShortcutAction {
    /// Remove the selected component.
    Delete,
    /// Clear the selection.
    Deselect,
    /// Copy the selected component next to itself.
    Duplicate,
}

/// Resolves key events into shortcut actions.
///
/// `meta` is ⌘ on macOS; `ctrl` plays the same role elsewhere.
pub struct ShortcutMap;

impl ShortcutMap {
    /// Resolve a key event to an action.
    ///
    /// `key` is the `KeyboardEvent.key` value (e.g. `"d"`, `"Delete"`).
    /// Returns `None` if the key combo has no binding.
    pub fn resolve(
        key: &str,
        ctrl: bool,
        shift: bool,
        alt: bool,
        meta: bool,
    ) -> Option<ShortcutAction> {
        Self::resolve_with(
            key,
            Modifiers {
                shift,
                ctrl,
                alt,
                meta,
            },
        )
    }

    /// Same as [`resolve`](Self::resolve) with the modifiers already bundled.
    pub fn resolve_with(key: &str, modifiers: Modifiers) -> Option<ShortcutAction> {
        if modifiers.command() {
            return match key {
                "d" | "D" if !modifiers.shift => Some(ShortcutAction::Duplicate),
                _ => None,
            };
        }

        match key {
            "Delete" | "Backspace" => Some(ShortcutAction::Delete),
            "Escape" => Some(ShortcutAction::Deselect),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolve_delete() {
        assert_eq!(
            ShortcutMap::resolve("Delete", false, false, false, false),
            Some(ShortcutAction::Delete)
        );
        assert_eq!(
            ShortcutMap::resolve("Backspace", false, false, false, false),
            Some(ShortcutAction::Delete)
        );
        // Shift does not change the meaning of Delete.
        assert_eq!(
            ShortcutMap::resolve("Delete", false, true, false, false),
            Some(ShortcutAction::Delete)
        );
    }

    #[test]
    fn resolve_escape() {
        assert_eq!(
            ShortcutMap::resolve("Escape", false, false, false, false),
            Some(ShortcutAction::Deselect)
        );
    }

    #[test]
    fn resolve_duplicate() {
        // Cmd+D
        assert_eq!(
            ShortcutMap::resolve("d", false, false, false, true),
            Some(ShortcutAction::Duplicate)
        );
        // Ctrl+D
        assert_eq!(
            ShortcutMap::resolve("D", true, false, false, false),
            Some(ShortcutAction::Duplicate)
        );
        assert_eq!(ShortcutMap::resolve("d", true, true, false, false), None);
    }

    #[test]
    fn resolve_modifier_precedence() {
        assert_eq!(ShortcutMap::resolve("d", false, false, false, false), None);
        assert_eq!(ShortcutMap::resolve("Delete", false, false, false, true), None);
    }

    #[test]
    fn resolve_unknown_key() {
        assert_eq!(ShortcutMap::resolve("q", false, false, false, false), None);
        assert_eq!(ShortcutMap::resolve("7", false, false, false, false), None);
    }

    #[test]
    fn resolve_with_modifiers() {
        let cmd = Modifiers {
            meta: true,
            ..Modifiers::NONE
        };
        assert_eq!(
            ShortcutMap::resolve_with("d", cmd),
            Some(ShortcutAction::Duplicate)
        );
        assert_eq!(
            ShortcutMap::resolve_with("Escape", Modifiers::NONE),
            Some(ShortcutAction::Deselect)
        );
        let ctrl_shift = Modifiers {
            ctrl: true,
            shift: true,
            ..Modifiers::NONE
        };
        assert_eq!(ShortcutMap::resolve_with("d", ctrl_shift), None);
        assert_eq!(ShortcutMap::resolve_with("Backspace", cmd), None);
    }
}
