//! Pixel-accurate collision between entities.

use crate::entity::{Entity, Hitbox};

/// True when the solid pixels of the two hitboxes overlap. Bounding boxes are
/// only used to skip the per-pixel test.
pub fn hitboxes_collide(a: &Hitbox<'_>, b: &Hitbox<'_>) -> bool {
    if !a.bounds().intersects(&b.bounds()) {
        return false;
    }
    let offset = (b.origin.0 - a.origin.0, b.origin.1 - a.origin.1);
    a.mask.overlaps(b.mask, offset)
}

pub fn collide_mask(a: &impl Entity, b: &impl Entity) -> bool {
    match (a.hitbox(), b.hitbox()) {
        (Some(a), Some(b)) => hitboxes_collide(&a, &b),
        _ => false,
    }
}

/// Index of the first entity in `others` that `subject` touches.
pub fn first_collision<E: Entity>(subject: &impl Entity, others: &[E]) -> Option<usize> {
    others.iter().position(|other| collide_mask(subject, other))
}
