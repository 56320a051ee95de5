use serde::{Deserialize, Serialize};

/// A team of the league.
#[derive(Serialize, Deserialize, Clone, Debug, Eq, PartialEq)]
pub struct Team {
    /// Home city of the team.
    pub city: String,
    /// Name of the team.
    pub name: String,
    /// League ranking. Higher values win matchup comparisons.
    pub ranking: i32,
}

impl Team {
    #[inline]
    /// Creates a new `Team`.
    pub fn new(city: impl Into<String>, name: impl Into<String>, ranking: i32) -> Team {
        Team {
            city: city.into(),
            name: name.into(),
            ranking,
        }
    }

    #[inline]
    /// The ranking sentence printed for this team in reports.
    pub fn ranking_line(&self) -> String {
        format!(
            "The {} {} have a ranking of {}.",
            self.city, self.name, self.ranking
        )
    }
}

/// The built-in major league roster, in its fixed order.
pub fn major_league() -> Vec<Team> {
    vec![
        Team::new("Arizona", "Diamondbacks", 3),
        Team::new("Oakland", "Athletics", 4),
        Team::new("Atlanta", "Braves", 2),
        Team::new("Baltimore", "Orioles", 2),
        Team::new("Boston", "Red Sox", 3),
        Team::new("Chicago", "Cubs", 2),
        Team::new("Chicago", "White Sox", 5),
        Team::new("Cincinnati", "Reds", 4),
        Team::new("Cleveland", "Guardians", 1),
        Team::new("Colorado", "Rockies", 5),
        Team::new("Detroit", "Tigers", 3),
        Team::new("Houston", "Astros", 1),
        Team::new("Kansas City", "Royals", 2),
        Team::new("Los Angeles", "Angels", 5),
        Team::new("Los Angeles", "Dodgers", 1),
        Team::new("Miami", "Marlins", 5),
        Team::new("Milwaukee", "Brewers", 1),
        Team::new("Minnesota", "Twins", 4),
        Team::new("New York", "Mets", 3),
        Team::new("New York", "Yankees", 1),
        Team::new("Philadelphia", "Phillies", 1),
        Team::new("Pittsburgh", "Pirates", 5),
        Team::new("San Diego", "Padres", 2),
        Team::new("San Francisco", "Giants", 4),
        Team::new("Seattle", "Mariners", 2),
        Team::new("St. Louis", "Cardinals", 3),
        Team::new("Tampa Bay", "Rays", 4),
        Team::new("Texas", "Rangers", 3),
        Team::new("Toronto", "Blue Jays", 5),
        Team::new("Washington", "Nationals", 4),
    ]
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_roster_order() {
        let teams = major_league();

        assert_eq!(teams.len(), 30);
        assert_eq!(teams[0], Team::new("Arizona", "Diamondbacks", 3));
        assert_eq!(teams[8], Team::new("Cleveland", "Guardians", 1));
        assert_eq!(teams[29], Team::new("Washington", "Nationals", 4));
    }

    #[test]
    fn test_roster_rankings_in_range() {
        for team in major_league() {
            assert!(
                (1..=5).contains(&team.ranking),
                "{} {} has ranking {}",
                team.city,
                team.name,
                team.ranking
            );
        }
    }

    #[test]
    fn test_ranking_line() {
        let team = Team::new("Toronto", "Blue Jays", 5);
        assert_eq!(
            team.ranking_line(),
            "The Toronto Blue Jays have a ranking of 5."
        );
    }

    #[test]
    fn test_team_serialization() {
        let team = Team::new("Houston", "Astros", 1);
        let json = serde_json::to_string(&team).unwrap();
        assert_eq!(
            json,
            r#"{"city":"Houston","name":"Astros","ranking":1}"#
        );
        assert_eq!(serde_json::from_str::<Team>(&json).unwrap(), team);
    }
}
