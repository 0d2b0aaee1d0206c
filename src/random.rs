use rand::distr::uniform::SampleUniform;
use rand::Rng;

use crate::surface::LetterState;

/// Uniform in-place Fisher-Yates shuffle: every permutation of
/// `items` is equally likely, O(n). Slices of length <= 1 come back
/// unchanged.
pub fn shuffle<T, R: Rng>(items: &mut [T], rng: &mut R) {
    for i in (1..items.len()).rev() {
        let j = rng.random_range(0..=i);
        items.swap(i, j);
    }
}

/// Uniform inclusive draw from `[min, max]`. A degenerate range
/// (`max <= min`) collapses to `min`.
pub fn between<T, R>(min: T, max: T, rng: &mut R) -> T
where
    T: SampleUniform + PartialOrd + Copy,
    R: Rng,
{
    if max <= min {
        return min;
    }
    rng.random_range(min..=max)
}

/// Partial state for cycle pre-seeding: five equally likely outcomes,
/// three of which land on `Idle`. The 3/5 Idle, 1/5 State1, 1/5 State2
/// skew is intentional noise so a fresh cycle starts from a ragged
/// mixture rather than a clean slate. `State3` is never pre-seeded.
pub fn preseed_state<R: Rng>(rng: &mut R) -> LetterState {
    match rng.random_range(0..5) {
        0 => LetterState::State1,
        1 => LetterState::State2,
        _ => LetterState::Idle,
    }
}
