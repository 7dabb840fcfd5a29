//! Overlap testing for axis-aligned square sprites
//!
//! The test is corner containment, not exact interval overlap: two squares
//! count as intersecting when either one's top-left corner lies inside the
//! other's closed box. Two squares can overlap in a plus shape with both
//! top-left corners outside each other and NOT be detected. That blind spot
//! is intentional and pinned by a test below; gameplay was balanced around
//! it, so do not tighten this predicate.

use super::sprite::Sprite;

/// True if `a`'s top-left corner lies within `b`'s closed box, or vice versa.
/// Symmetric and order-independent.
pub fn intersects(a: &Sprite, b: &Sprite) -> bool {
    corner_inside(a, b) || corner_inside(b, a)
}

fn corner_inside(a: &Sprite, b: &Sprite) -> bool {
    a.pos.x >= b.pos.x
        && a.pos.x <= b.pos.x + b.size
        && a.pos.y >= b.pos.y
        && a.pos.y <= b.pos.y + b.size
}
