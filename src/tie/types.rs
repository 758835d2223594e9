//! Fixture and decision types.

use serde::{Deserialize, Serialize};

use crate::error::{Result, TieError};

/// Goals scored in one leg.
///
/// `home` is the hosting side's score, `away` the visiting side's.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Leg {
    pub home: u64,
    pub away: u64,
}

impl Leg {
    pub fn new(home: u64, away: u64) -> Self {
        Self { home, away }
    }
}

/// The two sides of a tie, in fixture order.
///
/// `first` hosts leg 1 and `second` hosts leg 2.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TeamPair {
    pub first: String,
    pub second: String,
}

impl TeamPair {
    pub fn new(first: impl Into<String>, second: impl Into<String>) -> Self {
        Self {
            first: first.into(),
            second: second.into(),
        }
    }

    /// Returns the label for the given side.
    pub fn label(&self, side: Side) -> &str {
        match side {
            Side::First => &self.first,
            Side::Second => &self.second,
        }
    }
}

impl Default for TeamPair {
    /// Positional labels "Team 1" and "Team 2".
    fn default() -> Self {
        Self::new("Team 1", "Team 2")
    }
}

/// One side of the tie.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    /// Home in leg 1, away in leg 2.
    First,
    /// Away in leg 1, home in leg 2.
    Second,
}

/// A two-legged tie: both legs and the teams contesting it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Fixture {
    pub teams: TeamPair,
    pub legs: [Leg; 2],
}

impl Fixture {
    /// Builds a fixture. `None` teams fall back to the positional labels.
    pub fn new(teams: Option<TeamPair>, first_leg: Leg, second_leg: Leg) -> Self {
        Self {
            teams: teams.unwrap_or_default(),
            legs: [first_leg, second_leg],
        }
    }

    /// Builds a fixture from slices, checking counts.
    ///
    /// Game count is checked before team count. An empty `teams` slice
    /// selects the default labels.
    pub fn from_parts<S: AsRef<str>>(teams: &[S], legs: &[Leg]) -> Result<Self> {
        let legs: [Leg; 2] = match legs.len() {
            0 => return Err(TieError::MissingGames),
            2 => [legs[0], legs[1]],
            count => return Err(TieError::GameCount { count }),
        };
        let teams = match teams {
            [] => TeamPair::default(),
            [first, second] => TeamPair::new(first.as_ref(), second.as_ref()),
            _ => return Err(TieError::TeamCount { count: teams.len() }),
        };
        Ok(Self { teams, legs })
    }

    pub fn first_leg(&self) -> Leg {
        self.legs[0]
    }

    pub fn second_leg(&self) -> Leg {
        self.legs[1]
    }

    /// Computes the per-side goal counts used by the rule chain.
    pub fn tally(&self) -> Tally {
        let [first_leg, second_leg] = self.legs;
        Tally {
            aggregate_first: u128::from(first_leg.home) + u128::from(second_leg.away),
            aggregate_second: u128::from(first_leg.away) + u128::from(second_leg.home),
            away_first: u128::from(second_leg.away),
            away_second: u128::from(first_leg.away),
        }
    }
}

/// Goal counts derived from a fixture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Tally {
    /// Goals by the first side over both legs.
    pub aggregate_first: u128,
    /// Goals by the second side over both legs.
    pub aggregate_second: u128,
    /// Goals by the first side as visitor (leg 2).
    pub away_first: u128,
    /// Goals by the second side as visitor (leg 1).
    pub away_second: u128,
}

/// Why a decision was reached.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Reason {
    /// Won on aggregate goals.
    Aggregate,
    /// Aggregate level, won on away goals.
    AwayGoals,
    /// Level on aggregate and on away goals.
    FullTie,
    /// Level on aggregate with the away-goals rule disabled.
    Tie,
}

impl Reason {
    /// Upper-case tag, as serialized.
    pub fn as_str(self) -> &'static str {
        match self {
            Reason::Aggregate => "AGGREGATE",
            Reason::AwayGoals => "AWAY_GOALS",
            Reason::FullTie => "FULL_TIE",
            Reason::Tie => "TIE",
        }
    }

    /// Whether this reason names a winner.
    pub fn is_decisive(self) -> bool {
        matches!(self, Reason::Aggregate | Reason::AwayGoals)
    }
}

impl std::fmt::Display for Reason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The resolved tie.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Decision {
    /// Winning team's label, `None` on any tie.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub winner: Option<String>,
    pub reason: Reason,
}

/// Result shaped by [`TieOptions::full_result`](super::TieOptions::full_result).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Outcome {
    Full(Decision),
    Winner(Option<String>),
}

impl Outcome {
    /// Winning label regardless of shape.
    pub fn winner(&self) -> Option<&str> {
        match self {
            Outcome::Full(decision) => decision.winner.as_deref(),
            Outcome::Winner(winner) => winner.as_deref(),
        }
    }

    /// The full decision, if this outcome carries one.
    pub fn decision(&self) -> Option<&Decision> {
        match self {
            Outcome::Full(decision) => Some(decision),
            Outcome::Winner(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_labels() {
        let fixture = Fixture::new(None, Leg::new(1, 0), Leg::new(0, 0));
        assert_eq!(fixture.teams.label(Side::First), "Team 1");
        assert_eq!(fixture.teams.label(Side::Second), "Team 2");
    }

    #[test]
    fn test_tally_roles_swap_between_legs() {
        let fixture = Fixture::new(None, Leg::new(2, 1), Leg::new(3, 2));
        let tally = fixture.tally();
        assert_eq!(tally.aggregate_first, 4);
        assert_eq!(tally.aggregate_second, 4);
        assert_eq!(tally.away_first, 2);
        assert_eq!(tally.away_second, 1);
    }

    #[test]
    fn test_tally_does_not_overflow() {
        let fixture = Fixture::new(None, Leg::new(u64::MAX, 0), Leg::new(0, u64::MAX));
        assert_eq!(fixture.tally().aggregate_first, 2 * u128::from(u64::MAX));
    }

    #[test]
    fn test_from_parts_counts() {
        let legs = [Leg::new(1, 0), Leg::new(0, 0)];
        let no_teams: [&str; 0] = [];

        assert!(matches!(
            Fixture::from_parts(&no_teams, &[]),
            Err(TieError::MissingGames)
        ));
        assert!(matches!(
            Fixture::from_parts(&no_teams, &legs[..1]),
            Err(TieError::GameCount { count: 1 })
        ));
        assert!(matches!(
            Fixture::from_parts(&["foo"], &legs),
            Err(TieError::TeamCount { count: 1 })
        ));
        // game count is reported before team count
        assert!(matches!(
            Fixture::from_parts(&["foo", "bar", "baz"], &[legs[0]; 3]),
            Err(TieError::GameCount { count: 3 })
        ));

        let fixture = Fixture::from_parts(&["foo", "bar"], &legs).unwrap();
        assert_eq!(fixture.teams, TeamPair::new("foo", "bar"));
        assert_eq!(fixture.second_leg(), Leg::new(0, 0));

        let fixture = Fixture::from_parts(&no_teams, &legs).unwrap();
        assert_eq!(fixture.teams, TeamPair::default());
    }

    #[test]
    fn test_decision_serialization() {
        let won = Decision {
            winner: Some("foo".into()),
            reason: Reason::AwayGoals,
        };
        assert_eq!(
            serde_json::to_string(&won).unwrap(),
            r#"{"winner":"foo","reason":"AWAY_GOALS"}"#
        );

        let tied = Decision {
            winner: None,
            reason: Reason::FullTie,
        };
        assert_eq!(
            serde_json::to_string(&tied).unwrap(),
            r#"{"reason":"FULL_TIE"}"#
        );
    }

    #[test]
    fn test_outcome_serialization() {
        let scalar = Outcome::Winner(Some("bar".into()));
        assert_eq!(serde_json::to_string(&scalar).unwrap(), r#""bar""#);
        assert_eq!(
            serde_json::to_string(&Outcome::Winner(None)).unwrap(),
            "null"
        );
    }

    #[test]
    fn test_reason_tags() {
        assert_eq!(Reason::Tie.to_string(), "TIE");
        assert!(Reason::Aggregate.is_decisive());
        assert!(!Reason::FullTie.is_decisive());
    }
}
