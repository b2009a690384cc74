//! Property editor: edits on the selected component, plus the view model
//! the host renders as the properties panel.
//!
//! Both setters act on whatever the store currently has selected. With no
//! selection they do nothing and report `Ok(false)`.

use serde::Serialize;
use ub_core::{
    CanvasComponent, ComponentId, ComponentKind, ComponentPatch, DocumentStore, FontWeight,
    PropValue, StoreError,
};

// ─── Numeric input ───────────────────────────────────────────────────────

/// The four numeric geometry fields the panel exposes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Dimension {
    X,
    Y,
    Width,
    Height,
}

impl Dimension {
    pub const ALL: [Dimension; 4] = [
        Dimension::X,
        Dimension::Y,
        Dimension::Width,
        Dimension::Height,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Self::X => "x",
            Self::Y => "y",
            Self::Width => "width",
            Self::Height => "height",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|d| d.name().eq_ignore_ascii_case(name.trim()))
    }

    fn patch(self, value: f64) -> ComponentPatch {
        let mut patch = ComponentPatch::default();
        match self {
            Self::X => patch.x = Some(value),
            Self::Y => patch.y = Some(value),
            Self::Width => patch.width = Some(value),
            Self::Height => patch.height = Some(value),
        }
        patch
    }
}

/// Parse a numeric field the way a browser `parseInt(raw, 10)` would:
/// surrounding whitespace is ignored, an optional sign is accepted and the
/// leading run of digits is used (`"12px"` → 12, `"3.9"` → 3). Input with
/// no leading digits yields 0. Out-of-range values saturate.
pub fn parse_integer_input(raw: &str) -> i64 {
    let s = raw.trim();
    let (negative, rest) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };
    let end = rest
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(rest.len());
    let digits = &rest[..end];

    if digits.is_empty() {
        log::debug!("numeric input {raw:?} is not a number; using 0");
        return 0;
    }

    let signed = if negative {
        format!("-{digits}")
    } else {
        digits.to_string()
    };
    signed.parse::<i64>().unwrap_or_else(|_| {
        log::debug!("numeric input {raw:?} out of range; saturating");
        if negative { i64::MIN } else { i64::MAX }
    })
}

// ─── Editing ─────────────────────────────────────────────────────────────

pub struct PropertyEditor;

impl PropertyEditor {
    /// Set `x`, `y`, `width` or `height` of the selected component from raw
    /// text input. Returns `Ok(true)` if the store was updated.
    pub fn set_dimension(
        store: &mut DocumentStore,
        dimension: Dimension,
        raw: &str,
    ) -> Result<bool, StoreError> {
        let Some(id) = store.selected() else {
            log::debug!("set {} ignored: nothing selected", dimension.name());
            return Ok(false);
        };
        let value = parse_integer_input(raw) as f64;
        store.update(id, dimension.patch(value))?;
        Ok(true)
    }

    /// Write a property on the selected component as given. No coercion or
    /// validation; readers apply the per-key default rules.
    pub fn set_property(
        store: &mut DocumentStore,
        key: &str,
        value: impl Into<PropValue>,
    ) -> Result<bool, StoreError> {
        let Some(id) = store.selected() else {
            log::debug!("set {key} ignored: nothing selected");
            return Ok(false);
        };
        store.update(id, ComponentPatch::property(key, value))?;
        Ok(true)
    }

    pub fn panel(store: &DocumentStore) -> PanelState {
        match store.selected_component() {
            Some(component) => PanelState::Editing(PanelModel::from_component(component)),
            None => PanelState::Empty,
        }
    }
}

// ─── Panel view model ────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SliderRange {
    pub min: f64,
    pub max: f64,
    pub step: f64,
}

pub const FONT_SIZE_RANGE: SliderRange = SliderRange {
    min: 12.0,
    max: 48.0,
    step: 1.0,
};

pub const BORDER_RADIUS_RANGE: SliderRange = SliderRange {
    min: 0.0,
    max: 24.0,
    step: 1.0,
};

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "state", rename_all = "camelCase")]
pub enum PanelState {
    /// Nothing selected: the panel shows its neutral placeholder.
    Empty,
    Editing(PanelModel),
}

impl PanelState {
    pub fn model(&self) -> Option<&PanelModel> {
        match self {
            Self::Editing(model) => Some(model),
            Self::Empty => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PanelModel {
    pub id: ComponentId,
    pub kind: ComponentKind,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    /// Only for kinds that carry a text string.
    pub content: Option<ContentSection>,
    pub style: StyleSection,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentSection {
    /// "Placeholder" for inputs, "Text" otherwise.
    pub label: &'static str,
    pub text: String,
    pub font_size: f64,
    pub font_size_range: SliderRange,
    pub font_weight: FontWeight,
    pub font_weight_options: Vec<&'static str>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StyleSection {
    /// Raw text color as stored, so the input shows what the user typed.
    pub color: String,
    /// Containers only.
    pub background_color: Option<String>,
    pub border_radius: f64,
    pub border_radius_range: SliderRange,
}

impl PanelModel {
    pub fn from_component(c: &CanvasComponent) -> Self {
        let content = c.kind.has_text_content().then(|| ContentSection {
            label: match c.kind {
                ComponentKind::Input => "Placeholder",
                _ => "Text",
            },
            text: c.text(),
            font_size: c.font_size(),
            font_size_range: FONT_SIZE_RANGE,
            font_weight: c.font_weight(),
            font_weight_options: FontWeight::ALL.into_iter().map(FontWeight::name).collect(),
        });

        Self {
            id: c.id,
            kind: c.kind,
            x: c.x,
            y: c.y,
            width: c.width,
            height: c.height,
            content,
            style: StyleSection {
                color: c.color_str(),
                background_color: (c.kind == ComponentKind::Container)
                    .then(|| c.background_color_str()),
                border_radius: c.border_radius(),
                border_radius_range: BORDER_RADIUS_RANGE,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use ub_core::{Properties, keys};

    fn store_with_selected(name: &str, kind: ComponentKind) -> (DocumentStore, ComponentId) {
        let mut store = DocumentStore::new();
        let mut c = CanvasComponent::new(ComponentId::intern(name), kind);
        c.x = 100.0;
        c.y = 100.0;
        c.width = 200.0;
        c.height = 40.0;
        c.properties = Properties::new()
            .with(keys::TEXT, "Sample Text")
            .with(keys::FONT_SIZE, 16);
        let id = store.add(c).unwrap();
        store.select(Some(id)).unwrap();
        (store, id)
    }

    #[test]
    fn parse_integer_input_prefix_semantics() {
        assert_eq!(parse_integer_input("250"), 250);
        assert_eq!(parse_integer_input("  -40 "), -40);
        assert_eq!(parse_integer_input("+7"), 7);
        assert_eq!(parse_integer_input("12px"), 12);
        assert_eq!(parse_integer_input("3.9"), 3);
        assert_eq!(parse_integer_input("abc"), 0);
        assert_eq!(parse_integer_input(""), 0);
        assert_eq!(parse_integer_input("-"), 0);
        assert_eq!(parse_integer_input("99999999999999999999"), i64::MAX);
    }

    #[test]
    fn dimension_names() {
        assert_eq!(Dimension::from_name("Width"), Some(Dimension::Width));
        assert_eq!(Dimension::from_name(" y "), Some(Dimension::Y));
        assert_eq!(Dimension::from_name("depth"), None);
    }

    #[test]
    fn set_dimension_writes_parsed_value() {
        let (mut store, id) = store_with_selected("prop-dim", ComponentKind::Text);
        assert_eq!(
            PropertyEditor::set_dimension(&mut store, Dimension::Height, "64"),
            Ok(true)
        );
        assert_eq!(
            PropertyEditor::set_dimension(&mut store, Dimension::Width, "abc"),
            Ok(true)
        );
        let c = store.get(id).unwrap();
        assert_eq!((c.width, c.height), (0.0, 64.0));
    }

    #[test]
    fn setters_are_noops_without_selection() {
        let (mut store, id) = store_with_selected("prop-none", ComponentKind::Button);
        store.select(None).unwrap();
        let rev = store.revision();
        assert_eq!(
            PropertyEditor::set_dimension(&mut store, Dimension::X, "5"),
            Ok(false)
        );
        assert_eq!(
            PropertyEditor::set_property(&mut store, keys::COLOR, "#000000"),
            Ok(false)
        );
        assert_eq!(store.revision(), rev);
        assert_eq!(store.get(id).unwrap().x, 100.0);
    }

    #[test]
    fn set_property_stores_value_verbatim() {
        let (mut store, id) = store_with_selected("prop-raw", ComponentKind::Text);
        PropertyEditor::set_property(&mut store, keys::COLOR, "not-a-color").unwrap();
        PropertyEditor::set_property(&mut store, keys::FONT_SIZE, 0).unwrap();
        let c = store.get(id).unwrap();
        assert_eq!(c.color_str(), "not-a-color");
        assert_eq!(c.font_size(), 0.0);
        assert_eq!(c.text(), "Sample Text");
    }

    #[test]
    fn panel_is_empty_without_selection() {
        assert_eq!(PropertyEditor::panel(&DocumentStore::new()), PanelState::Empty);
    }

    #[test]
    fn panel_sections_depend_on_kind() {
        let (store, _) = store_with_selected("prop-input", ComponentKind::Input);
        let panel = PropertyEditor::panel(&store);
        let model = panel.model().unwrap();
        let content = model.content.as_ref().unwrap();
        assert_eq!(content.label, "Placeholder");
        assert_eq!(content.font_weight_options, vec!["normal", "medium", "semibold", "bold"]);
        assert_eq!(model.style.background_color, None);

        let (store, _) = store_with_selected("prop-container", ComponentKind::Container);
        let panel = PropertyEditor::panel(&store);
        let model = panel.model().unwrap();
        assert!(model.content.is_none());
        assert_eq!(model.style.background_color.as_deref(), Some("transparent"));
        assert_eq!(model.style.border_radius, 8.0);
    }

    #[test]
    fn panel_serializes_with_state_tag() {
        let (store, _) = store_with_selected("prop-json", ComponentKind::Button);
        let json = serde_json::to_value(PropertyEditor::panel(&store)).unwrap();
        assert_eq!(json["state"], "editing");
        assert_eq!(json["kind"], "button");
        assert_eq!(json["content"]["fontSizeRange"]["max"], 48.0);
        assert_eq!(json["style"]["color"], "#ffffff");

        let empty = serde_json::to_value(PanelState::Empty).unwrap();
        assert_eq!(empty, serde_json::json!({ "state": "empty" }));
    }
}
