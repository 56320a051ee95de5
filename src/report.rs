use crate::roster::Team;
use crate::{RandGen, Seeder};
use rand::Rng;
use std::io::Write;
use thiserror::Error;

/// Minimum number of teams needed to draw a matchup.
pub const MIN_MATCHUP_TEAMS: usize = 1;

#[derive(Error, Debug)]
#[non_exhaustive]
pub enum ReportError {
    /// Not enough teams to draw a matchup (see [`MIN_MATCHUP_TEAMS`]).
    #[error("not enough teams to draw a matchup ({0} needed, but {1} were provided)")]
    NotEnoughTeams(usize, usize),
    /// An error occurred while writing the report.
    #[error("an error occurred while writing the report: {0}")]
    Io(#[from] std::io::Error),
}

/// Writes one ranking line per team, in roster order.
pub fn display_all(out: &mut impl Write, teams: &[Team]) -> Result<(), ReportError> {
    for team in teams {
        writeln!(out, "{}", team.ranking_line())?;
    }
    Ok(())
}

/// Draws two teams at random and writes a three-line matchup report declaring
/// the higher-ranked one.
///
/// The two indices are drawn independently with replacement, so the same team
/// may face itself. The same [`Seeder`] always selects the same pair.
pub fn compare_random_pair(
    out: &mut impl Write,
    teams: &[Team],
    mut seeder: Seeder,
) -> Result<(), ReportError> {
    if teams.is_empty() {
        return Err(ReportError::NotEnoughTeams(MIN_MATCHUP_TEAMS, teams.len()));
    }

    let mut rng: RandGen = seeder.make_rng();
    let first = rng.gen_range(0..teams.len());
    let second = rng.gen_range(0..teams.len());

    for line in matchup_lines(&teams[first], &teams[second]) {
        writeln!(out, "{line}")?;
    }
    Ok(())
}

// The first draw wins only on a strictly higher ranking; a tie (including the
// same team drawn twice) goes to the second draw.
fn matchup_lines(first: &Team, second: &Team) -> [String; 3] {
    let (winner, loser) = if first.ranking > second.ranking {
        (first, second)
    } else {
        (second, first)
    };

    [
        winner.ranking_line(),
        loser.ranking_line(),
        format!("The {} {} are higher ranked.", winner.city, winner.name),
    ]
}
