#![forbid(unsafe_code)]

use rand::Rng;

pub mod report;
pub mod roster;

pub use rand_seeder::Seeder;

/// Minimum number of teams needed to draw a matchup.
pub const MIN_MATCHUP_TEAMS: usize = report::MIN_MATCHUP_TEAMS;

/// Deterministic random generator used for matchup draws.
pub type RandGen = rand_pcg::Pcg64;

/// Generates a random seed.
pub fn gen_seed() -> [u8; 32] {
    rand::thread_rng().gen()
}

/// Generates a [`Seeder`] from a random seed.
pub fn gen_seeder() -> Seeder {
    Seeder::from(gen_seed())
}
