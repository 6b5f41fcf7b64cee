//! Collision detection between the runner and obstacles
//!
//! Everything here is a strict axis-aligned overlap test: rectangles that
//! merely touch along an edge do not collide. The first overlap found ends
//! the run, so detection short-circuits on the first hit.

use super::rect::Rect;

/// Strict AABB overlap test; touching edges do not count
#[inline]
pub fn rects_overlap(a: &Rect, b: &Rect) -> bool {
    a.left() < b.right() && a.right() > b.left() && a.top() < b.bottom() && a.bottom() > b.top()
}

/// Find the first obstacle rect overlapping the player rect
///
/// Returns the index into `obstacles` of the first hit, in iteration order.
/// Remaining obstacles are not tested once a hit is found; exactly one
/// collision causes exactly one phase transition.
pub fn first_hit<I>(player: &Rect, obstacles: I) -> Option<usize>
where
    I: IntoIterator<Item = Rect>,
{
    obstacles
        .into_iter()
        .position(|obs| rects_overlap(player, &obs))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overlap_basic() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        let b = Rect::new(5.0, 5.0, 10.0, 10.0);
        assert!(rects_overlap(&a, &b));
        assert!(rects_overlap(&b, &a));
    }

    #[test]
    fn test_no_overlap_disjoint() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        let b = Rect::new(20.0, 0.0, 10.0, 10.0);
        assert!(!rects_overlap(&a, &b));

        let c = Rect::new(0.0, 30.0, 10.0, 10.0);
        assert!(!rects_overlap(&a, &c));
    }

    #[test]
    fn test_touching_edges_do_not_collide() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        // Shares the x=10 edge exactly
        let b = Rect::new(10.0, 0.0, 10.0, 10.0);
        assert!(!rects_overlap(&a, &b));

        // Shares the y=10 edge exactly
        let c = Rect::new(0.0, 10.0, 10.0, 10.0);
        assert!(!rects_overlap(&a, &c));

        // One pixel of actual overlap does collide
        let d = Rect::new(9.0, 0.0, 10.0, 10.0);
        assert!(rects_overlap(&a, &d));
    }

    #[test]
    fn test_first_hit_short_circuit() {
        let player = Rect::new(80.0, 140.0, 30.0, 40.0);
        let rects = vec![
            Rect::new(300.0, 130.0, 15.0, 50.0),
            Rect::new(90.0, 130.0, 15.0, 50.0),
            Rect::new(85.0, 130.0, 15.0, 50.0),
        ];
        // Second obstacle is the first overlap in iteration order
        assert_eq!(first_hit(&player, rects.iter().copied()), Some(1));

        let clear = vec![Rect::new(300.0, 130.0, 15.0, 50.0)];
        assert_eq!(first_hit(&player, clear.iter().copied()), None);
    }
}
