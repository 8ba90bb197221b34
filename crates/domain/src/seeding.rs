// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::types::Participant;
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};

/// How the closed registration list is turned into seeds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum SeedingPolicy {
    /// Seed 1 is the first participant to register, and so on.
    #[default]
    RegistrationOrder,
    /// A reproducible permutation of the registration order.
    Shuffled {
        /// The RNG seed. The same seed always yields the same order.
        seed: u64,
    },
}

/// Orders participants into seeds according to a policy.
///
/// # Arguments
///
/// * `participants` - Participants in registration order
/// * `policy` - The seeding policy
///
/// # Returns
///
/// The participants in seed order (index 0 is seed 1).
#[must_use]
pub fn apply_seeding(participants: &[Participant], policy: SeedingPolicy) -> Vec<Participant> {
    let mut seeded: Vec<Participant> = participants.to_vec();
    if let SeedingPolicy::Shuffled { seed } = policy {
        let mut rng: StdRng = StdRng::seed_from_u64(seed);
        seeded.shuffle(&mut rng);
    }
    seeded
}

/// Returns the number of first-round positions needed for `participants` entrants.
///
/// This is the smallest power of two that is at least `participants` (and at least 2).
#[must_use]
pub fn bracket_size(participants: usize) -> usize {
    participants.max(2).next_power_of_two()
}

/// Returns the standard bracket placement of seeds for a bracket of `size` positions.
///
/// Adjacent pairs in the result are first-round opponents: seed 1 meets seed
/// `size`, seed 2 meets seed `size - 1`, and the top two seeds land in
/// opposite halves so they can only meet in the final.
///
/// `size` must be a power of two.
///
/// # Examples
///
/// ```
/// use bracketcraft_domain::standard_seed_order;
///
/// assert_eq!(standard_seed_order(4), vec![1, 4, 2, 3]);
/// assert_eq!(standard_seed_order(8), vec![1, 8, 4, 5, 2, 7, 3, 6]);
/// ```
#[must_use]
pub fn standard_seed_order(size: usize) -> Vec<usize> {
    let mut order: Vec<usize> = vec![1];
    while order.len() < size {
        let next_len: usize = order.len() * 2;
        order = order
            .iter()
            .flat_map(|&seed| [seed, next_len + 1 - seed])
            .collect();
    }
    order
}
