//! Component palette: builds default-configured components.

use serde::Serialize;
use std::fmt;
use ub_core::{
    CanvasComponent, ComponentId, ComponentKind, DocumentStore, IdGenerator, PaletteConfig,
    Properties, SequentialIds, StoreError, keys,
};

/// Per-kind creation defaults.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ComponentDefaults {
    pub width: f64,
    pub height: f64,
    pub text: &'static str,
    pub background_color: &'static str,
}

pub fn defaults_for(kind: ComponentKind) -> ComponentDefaults {
    let (width, height, text, background_color) = match kind {
        ComponentKind::Text => (200.0, 40.0, "Sample Text", "transparent"),
        ComponentKind::Button => (120.0, 40.0, "Click me", "transparent"),
        ComponentKind::Input => (300.0, 40.0, "placeholder", "transparent"),
        ComponentKind::Container => (300.0, 200.0, "", "#1a1a1a"),
        ComponentKind::Image => (300.0, 200.0, "", "transparent"),
    };
    ComponentDefaults {
        width,
        height,
        text,
        background_color,
    }
}

/// A palette button as shown to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PaletteEntry {
    pub kind: ComponentKind,
    pub name: &'static str,
    pub description: &'static str,
}

pub struct Palette {
    ids: Box<dyn IdGenerator>,
    config: PaletteConfig,
}

impl fmt::Debug for Palette {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Palette")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::new(PaletteConfig::default())
    }
}

impl Palette {
    /// Palette backed by a fresh `SequentialIds` counter.
    pub fn new(config: PaletteConfig) -> Self {
        Self::with_id_generator(config, SequentialIds::new())
    }

    pub fn with_id_generator(config: PaletteConfig, ids: impl IdGenerator + 'static) -> Self {
        Self {
            ids: Box::new(ids),
            config,
        }
    }

    /// The placeable kinds, in palette order.
    pub fn entries() -> Vec<PaletteEntry> {
        ComponentKind::ALL
            .into_iter()
            .map(|kind| PaletteEntry {
                kind,
                name: kind.display_name(),
                description: match kind {
                    ComponentKind::Text => "Add text content",
                    ComponentKind::Button => "Interactive button",
                    ComponentKind::Input => "Text input field",
                    ComponentKind::Image => "Add images",
                    ComponentKind::Container => "Layout container",
                },
            })
            .collect()
    }

    /// Draw a new id from the injected generator.
    pub fn fresh_id(&mut self, kind: ComponentKind) -> ComponentId {
        self.ids.next_id(kind)
    }

    /// Build a component of `kind` at the spawn point with kind defaults.
    pub fn create(&mut self, kind: ComponentKind) -> CanvasComponent {
        let d = defaults_for(kind);
        let mut component = CanvasComponent::new(self.fresh_id(kind), kind);
        component.x = self.config.spawn_x;
        component.y = self.config.spawn_y;
        component.width = d.width;
        component.height = d.height;
        component.properties = Properties::new()
            .with(keys::TEXT, d.text)
            .with(keys::BACKGROUND_COLOR, d.background_color)
            .with(keys::COLOR, "#ffffff")
            .with(keys::FONT_SIZE, 16)
            .with(keys::FONT_WEIGHT, "normal")
            .with(keys::PADDING, 12)
            .with(keys::BORDER_RADIUS, 8);
        component
    }

    /// Create a component and append it to the store.
    pub fn add(
        &mut self,
        store: &mut DocumentStore,
        kind: ComponentKind,
    ) -> Result<ComponentId, StoreError> {
        let component = self.create(kind);
        store.add(component)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use ub_core::{FontWeight, PropValue};

    #[test]
    fn defaults_table() {
        let mut palette = Palette::default();
        let cases = [
            (ComponentKind::Text, 200.0, 40.0, "Sample Text", "transparent"),
            (ComponentKind::Button, 120.0, 40.0, "Click me", "transparent"),
            (ComponentKind::Input, 300.0, 40.0, "placeholder", "transparent"),
            (ComponentKind::Container, 300.0, 200.0, "", "#1a1a1a"),
            (ComponentKind::Image, 300.0, 200.0, "", "transparent"),
        ];
        for (kind, w, h, text, bg) in cases {
            let c = palette.create(kind);
            assert_eq!(c.kind, kind);
            assert_eq!((c.x, c.y), (100.0, 100.0));
            assert_eq!((c.width, c.height), (w, h), "{kind}");
            assert_eq!(c.text(), text);
            assert_eq!(c.background_color_str(), bg);
        }
    }

    #[test]
    fn shared_style_defaults() {
        let c = Palette::default().create(ComponentKind::Button);
        assert_eq!(c.color_str(), "#ffffff");
        assert_eq!(c.font_size(), 16.0);
        assert_eq!(c.font_weight(), FontWeight::Normal);
        assert_eq!(c.padding(), 12.0);
        assert_eq!(c.border_radius(), 8.0);
        assert_eq!(c.properties.get(keys::FONT_SIZE), Some(&PropValue::Num(16.0)));
    }

    #[test]
    fn back_to_back_adds_get_distinct_ids() {
        let mut store = DocumentStore::new();
        let mut palette = Palette::default();
        let a = palette.add(&mut store, ComponentKind::Text).unwrap();
        let b = palette.add(&mut store, ComponentKind::Text).unwrap();
        assert_ne!(a, b);
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn spawn_point_is_configurable() {
        let mut palette = Palette::new(PaletteConfig {
            spawn_x: -5.0,
            spawn_y: 40.0,
        });
        let c = palette.create(ComponentKind::Image);
        assert_eq!((c.x, c.y), (-5.0, 40.0));
    }

    #[test]
    fn injected_generator_is_used() {
        struct Fixed(u32);
        impl IdGenerator for Fixed {
            fn next_id(&mut self, kind: ComponentKind) -> ComponentId {
                self.0 += 1;
                ComponentId::intern(&format!("fixed-{kind}-{}", self.0))
            }
        }
        let mut palette = Palette::with_id_generator(PaletteConfig::default(), Fixed(0));
        assert_eq!(palette.create(ComponentKind::Input).id.as_str(), "fixed-input-1");
    }

    #[test]
    fn entries_follow_palette_order() {
        let names: Vec<&str> = Palette::entries().iter().map(|e| e.name).collect();
        assert_eq!(names, vec!["Text", "Button", "Input", "Image", "Container"]);
    }
}
