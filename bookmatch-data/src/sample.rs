//! Reproducible user sampling.

use bookmatch_core::UserId;
use rand::SeedableRng;
use rand::seq::SliceRandom;
use rand_chacha::ChaCha8Rng;

/// Default number of users drawn for an evaluation run.
pub const DEFAULT_SAMPLE_SIZE: usize = 5;

/// Draw up to `amount` distinct users from `users` using a seeded generator.
///
/// Sampling is without replacement: each input position is drawn at most
/// once, and asking for more users than exist returns all of them. The order
/// of the sample is unspecified but fixed by the seed and input.
///
/// # Examples
/// ```
/// use bookmatch_core::UserId;
/// use bookmatch_data::sample_users;
///
/// let users: Vec<UserId> = ["1", "2", "3", "4"].into_iter().map(UserId::from).collect();
/// let first = sample_users(&users, 2, 7);
/// assert_eq!(first.len(), 2);
/// assert_eq!(first, sample_users(&users, 2, 7));
/// ```
#[must_use]
pub fn sample_users(users: &[UserId], amount: usize, seed: u64) -> Vec<UserId> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    users.choose_multiple(&mut rng, amount).cloned().collect()
}
