use bracket_rankings::report::{self, ReportError};
use bracket_rankings::roster::major_league;
use bracket_rankings::{gen_seeder, Seeder};
use clap::Parser;
use std::io;

#[derive(Parser, Debug)]
#[command(version, about = "Prints the league roster and a random ranking matchup")]
struct Cli {
    /// Seed for the matchup draw. Random when omitted.
    #[arg(long)]
    seed: Option<String>,
}

fn main() -> Result<(), ReportError> {
    let cli = Cli::parse();
    let teams = major_league();
    let mut stdout = io::stdout().lock();

    report::display_all(&mut stdout, &teams)?;

    let seeder = match &cli.seed {
        Some(seed) => Seeder::from(seed.as_str()),
        None => gen_seeder(),
    };
    report::compare_random_pair(&mut stdout, &teams, seeder)?;

    Ok(())
}
