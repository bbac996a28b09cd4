//! Testimonial reel: the doubled card list and drag-to-scroll arithmetic

use super::content::Testimonial;

/// Pixels scrolled per pixel of pointer travel
pub const DRAG_MULTIPLIER: f64 = 2.0;

/// A card slot in the reel
#[derive(Debug, Clone, PartialEq)]
pub struct ReelItem<'a> {
    /// `{id}` on the first pass, `duplicate-{id}` on the second
    pub key: String,
    /// Position across both passes, drives the float parameters
    pub index: usize,
    pub testimonial: &'a Testimonial,
}

/// The list rendered twice back to back so the marquee loops seamlessly
pub fn reel_items(testimonials: &[Testimonial]) -> Vec<ReelItem<'_>> {
    let first = testimonials.iter().map(|t| t.id.to_string());
    let second = testimonials.iter().map(|t| format!("duplicate-{}", t.id));

    first
        .chain(second)
        .zip(testimonials.iter().chain(testimonials.iter()))
        .enumerate()
        .map(|(index, (key, testimonial))| ReelItem {
            key,
            index,
            testimonial,
        })
        .collect()
}

/// Mouse drag state for a horizontally scrollable container
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct DragScroll {
    dragging: bool,
    start_x: f64,
    origin_scroll: f64,
}

impl DragScroll {
    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    /// Mouse down at container-relative `x` while scrolled to `scroll_left`
    pub fn begin(&mut self, x: f64, scroll_left: f64) {
        self.dragging = true;
        self.start_x = x;
        self.origin_scroll = scroll_left;
    }

    /// New `scroll_left` for a move to `x`, or `None` when not dragging
    pub fn drag_to(&self, x: f64) -> Option<f64> {
        self.dragging
            .then(|| self.origin_scroll - (x - self.start_x) * DRAG_MULTIPLIER)
    }

    /// Mouse up or leave
    pub fn end(&mut self) {
        self.dragging = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::content::default_testimonials;

    #[test]
    fn test_reel_doubles_list() {
        let testimonials = default_testimonials();
        let items = reel_items(&testimonials);
        assert_eq!(items.len(), testimonials.len() * 2);
        assert_eq!(items[0].key, testimonials[0].id.to_string());
        assert_eq!(
            items[testimonials.len()].key,
            format!("duplicate-{}", testimonials[0].id)
        );
        assert_eq!(items.last().map(|i| i.index), Some(items.len() - 1));
    }

    #[test]
    fn test_reel_empty() {
        assert!(reel_items(&[]).is_empty());
    }

    #[test]
    fn test_drag_ignored_until_begin() {
        let drag = DragScroll::default();
        assert!(!drag.is_dragging());
        assert_eq!(drag.drag_to(100.0), None);
    }

    #[test]
    fn test_drag_uses_multiplier() {
        let mut drag = DragScroll::default();
        drag.begin(100.0, 400.0);
        assert_eq!(drag.drag_to(130.0), Some(340.0));
        assert_eq!(drag.drag_to(80.0), Some(440.0));

        drag.end();
        assert_eq!(drag.drag_to(0.0), None);
    }
}
