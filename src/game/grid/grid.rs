use rand::Rng;

use crate::game::types::Slot;

/// Build a grid of `slot_count` hidden slots.
pub fn generate_grid(slot_count: usize) -> Vec<Slot> {
    vec![Slot::HIDDEN; slot_count]
}

/// Number of picks made per spawn cycle.
pub fn target_count(slot_count: usize) -> usize {
    slot_count.div_ceil(3)
}

/// Draw spawn targets uniformly from `[0, slot_count)`, with replacement.
/// Duplicates are kept; raising the same slot twice is harmless.
pub fn pick_targets<R: Rng>(rng: &mut R, slot_count: usize) -> Vec<usize> {
    if slot_count == 0 {
        return Vec::new();
    }
    (0..target_count(slot_count))
        .map(|_| rng.random_range(0..slot_count))
        .collect()
}

/// Build a fresh grid with the given targets raised. Out-of-range targets are skipped.
pub fn raise_targets(slot_count: usize, targets: &[usize]) -> Vec<Slot> {
    let mut slots = generate_grid(slot_count);
    for &target in targets {
        if let Some(slot) = slots.get_mut(target) {
            *slot = Slot::RAISED;
        }
    }
    slots
}
