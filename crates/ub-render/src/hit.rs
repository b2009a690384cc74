//! Hit testing: point → component lookup.
//!
//! Walks the document front-to-back (reverse insertion order) so the
//! topmost component under the pointer wins.

use kurbo::{Point, Rect};
use ub_core::{CanvasComponent, ComponentId};

/// Canvas-space rectangle of a component. kurbo normalizes negative sizes,
/// so callers check `is_degenerate` before trusting the result.
pub fn component_rect(component: &CanvasComponent) -> Rect {
    Rect::from_origin_size(
        (component.x, component.y),
        (component.width, component.height),
    )
}

/// Find the topmost component at canvas-local position (px, py).
/// Returns `None` when the point is over empty canvas.
pub fn hit_test(components: &[CanvasComponent], px: f64, py: f64) -> Option<ComponentId> {
    let point = Point::new(px, py);
    components
        .iter()
        .rev()
        .filter(|c| !c.is_degenerate())
        .find(|c| component_rect(c).contains(point))
        .map(|c| c.id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ub_core::ComponentKind;

    fn placed(name: &str, x: f64, y: f64, w: f64, h: f64) -> CanvasComponent {
        let mut c = CanvasComponent::new(ComponentId::intern(name), ComponentKind::Container);
        c.x = x;
        c.y = y;
        c.width = w;
        c.height = h;
        c
    }

    #[test]
    fn topmost_component_wins() {
        let components = vec![
            placed("hit-back", 0.0, 0.0, 300.0, 200.0),
            placed("hit-front", 100.0, 100.0, 120.0, 40.0),
        ];
        assert_eq!(
            hit_test(&components, 110.0, 110.0),
            Some(ComponentId::intern("hit-front"))
        );
        assert_eq!(
            hit_test(&components, 10.0, 10.0),
            Some(ComponentId::intern("hit-back"))
        );
    }

    #[test]
    fn miss_returns_none() {
        let components = vec![placed("hit-miss", 0.0, 0.0, 50.0, 50.0)];
        assert_eq!(hit_test(&components, 75.0, 10.0), None);
        // Right/bottom edges are exclusive.
        assert_eq!(hit_test(&components, 50.0, 10.0), None);
    }

    #[test]
    fn negative_positions_are_hittable() {
        let components = vec![placed("hit-neg", -80.0, -30.0, 100.0, 40.0)];
        assert_eq!(
            hit_test(&components, -10.0, -5.0),
            Some(ComponentId::intern("hit-neg"))
        );
    }

    #[test]
    fn degenerate_sizes_never_hit() {
        let components = vec![
            placed("hit-zero", 0.0, 0.0, 0.0, 40.0),
            placed("hit-negsize", 50.0, 50.0, -20.0, -20.0),
        ];
        assert_eq!(hit_test(&components, 0.0, 10.0), None);
        assert_eq!(hit_test(&components, 40.0, 40.0), None);
    }
}
