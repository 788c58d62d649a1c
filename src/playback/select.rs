use rand::Rng;

use super::types::{Direction, SelectionPolicy};

/// Index to load when navigating in `direction` from `current` in a
/// playlist of `len` tracks. `len` must be non-zero.
///
/// Sequential navigation clamps at the ends instead of wrapping.
pub(super) fn next_index<R: Rng + ?Sized>(
    policy: SelectionPolicy,
    direction: Direction,
    current: usize,
    len: usize,
    rng: &mut R,
) -> usize {
    debug_assert!(len > 0);
    match policy {
        SelectionPolicy::Random => rng.gen_range(0..len),
        SelectionPolicy::Sequential => match direction {
            Direction::Next => (current + 1).min(len - 1),
            Direction::Previous => current.saturating_sub(1),
        },
    }
}
