//! Resize grip hit-regions
//!
//! Pure classifier: given the current window size and the chrome config it
//! computes the three resize-detection rectangles. No I/O, no side effects.
//! The controller recomputes these before every pointer-event decision, so
//! the rects are never stale across a resize.

use casement_core::{Point, Rect, Size};
use casement_platform::Cursor;

use crate::config::ChromeConfig;

/// Which grip a point landed in
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GripRegion {
    /// Bottom-right square, diagonal resize
    Corner,
    /// Right-edge strip, horizontal resize
    Right,
    /// Bottom-edge strip, vertical resize
    Bottom,
}

impl GripRegion {
    /// Cursor glyph shown while hovering or resizing through this grip
    pub fn cursor(&self) -> Cursor {
        match self {
            GripRegion::Corner => Cursor::ResizeNWSE,
            GripRegion::Right => Cursor::ResizeEW,
            GripRegion::Bottom => Cursor::ResizeNS,
        }
    }
}

/// The three resize-detection rectangles for a window geometry.
///
/// The right strip spans from below the title bar to `grip + margin` above
/// the bottom edge; the bottom strip reserves the same margin near the right
/// edge. The margins keep the edge grips from fighting the corner grip.
/// Extents are clamped to zero when the window is too small, and a degenerate
/// rect never matches a hit test.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GripRects {
    pub corner: Rect,
    pub right: Rect,
    pub bottom: Rect,
}

impl GripRects {
    /// Compute grip rects for the given window size.
    pub fn compute(size: Size, config: &ChromeConfig) -> Self {
        let w = size.width;
        let h = size.height;
        let grip = config.grip_size;
        let margin = config.side_grip_margin;
        let titlebar = config.titlebar_height;

        let corner = Rect::new(w - grip, h - grip, grip, grip).clamped();
        let right = Rect::new(w - grip, titlebar, grip, h - grip - margin - titlebar).clamped();
        let bottom = Rect::new(grip, h - grip, w - grip - margin, grip).clamped();

        Self {
            corner,
            right,
            bottom,
        }
    }

    /// Classify a window-local point. Corner takes precedence when clamping
    /// makes regions overlap.
    pub fn region_at(&self, point: Point) -> Option<GripRegion> {
        if self.corner.contains(point) {
            Some(GripRegion::Corner)
        } else if self.right.contains(point) {
            Some(GripRegion::Right)
        } else if self.bottom.contains(point) {
            Some(GripRegion::Bottom)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> ChromeConfig {
        ChromeConfig {
            titlebar_height: 30.0,
            grip_size: 4.0,
            side_grip_margin: 20.0,
            ..Default::default()
        }
    }

    #[test]
    fn test_corner_rect_geometry() {
        let rects = GripRects::compute(Size::new(300.0, 200.0), &config());
        assert_eq!(rects.corner, Rect::new(296.0, 196.0, 4.0, 4.0));
    }

    #[test]
    fn test_right_strip_spans_titlebar_to_margin() {
        let rects = GripRects::compute(Size::new(300.0, 200.0), &config());
        assert_eq!(rects.right.x, 296.0);
        assert_eq!(rects.right.y, 30.0);
        // ends grip + margin above the bottom edge
        assert_eq!(rects.right.bottom(), 200.0 - 4.0 - 20.0);
    }

    #[test]
    fn test_bottom_strip_reserves_right_margin() {
        let rects = GripRects::compute(Size::new(300.0, 200.0), &config());
        assert_eq!(rects.bottom.y, 196.0);
        assert_eq!(rects.bottom.x, 4.0);
        assert_eq!(rects.bottom.right(), 300.0 - 20.0);
    }

    #[test]
    fn test_regions_pairwise_disjoint() {
        let config = config();
        let min = 2.0 * config.grip_size + config.side_grip_margin;
        for w in [min, 100.0, 300.0, 1920.0] {
            for h in [min + config.titlebar_height, 200.0, 1080.0] {
                let rects = GripRects::compute(Size::new(w, h), &config);
                assert!(!rects.corner.intersects(&rects.right), "w={w} h={h}");
                assert!(!rects.corner.intersects(&rects.bottom), "w={w} h={h}");
                assert!(!rects.right.intersects(&rects.bottom), "w={w} h={h}");
            }
        }
    }

    #[test]
    fn test_classification() {
        let rects = GripRects::compute(Size::new(300.0, 200.0), &config());
        assert_eq!(
            rects.region_at(Point::new(298.0, 198.0)),
            Some(GripRegion::Corner)
        );
        assert_eq!(
            rects.region_at(Point::new(298.0, 100.0)),
            Some(GripRegion::Right)
        );
        assert_eq!(
            rects.region_at(Point::new(150.0, 198.0)),
            Some(GripRegion::Bottom)
        );
        assert_eq!(rects.region_at(Point::new(150.0, 100.0)), None);
    }

    #[test]
    fn test_margin_is_dead_zone() {
        let rects = GripRects::compute(Size::new(300.0, 200.0), &config());
        // Inside the bottom strip's reserved margin, left of the corner
        assert_eq!(rects.region_at(Point::new(290.0, 198.0)), None);
        // Inside the right strip's reserved margin, above the corner
        assert_eq!(rects.region_at(Point::new(298.0, 190.0)), None);
    }

    #[test]
    fn test_tiny_window_clamps_to_degenerate() {
        // Height smaller than titlebar + grip + margin: right strip collapses
        let rects = GripRects::compute(Size::new(40.0, 20.0), &config());
        assert_eq!(rects.right.height, 0.0);
        // Degenerate strip never matches
        assert_eq!(rects.region_at(Point::new(38.0, 10.0)), None);
        // Corner still classifies, taking precedence over anything left
        assert_eq!(
            rects.region_at(Point::new(38.0, 18.0)),
            Some(GripRegion::Corner)
        );
    }

    #[test]
    fn test_cursor_glyphs() {
        assert_eq!(GripRegion::Corner.cursor(), Cursor::ResizeNWSE);
        assert_eq!(GripRegion::Right.cursor(), Cursor::ResizeEW);
        assert_eq!(GripRegion::Bottom.cursor(), Cursor::ResizeNS);
    }
}
