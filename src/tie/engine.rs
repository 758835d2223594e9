//! Tie-break rule chain.
//!
//! # Algorithm
//!
//! 1. Aggregate: the side with more goals over both legs wins.
//! 2. Away goals (only if enabled and aggregates are level): the side
//!    with more goals as visitor wins.
//! 3. Otherwise the tie stands: `FULL_TIE` when away goals were
//!    consulted, `TIE` when the rule is disabled.
//!
//! The chain stops at the first decisive criterion.

use serde_json::Value;
use tracing::{debug, trace};

use super::config::TieOptions;
use super::types::{Decision, Fixture, Outcome, Reason, Side, Tally};
use super::validate::parse_fixture;
use crate::error::Result;

/// One comparison in the chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Criterion {
    Aggregate,
    AwayGoals,
}

impl Criterion {
    fn scores(self, tally: &Tally) -> (u128, u128) {
        match self {
            Criterion::Aggregate => (tally.aggregate_first, tally.aggregate_second),
            Criterion::AwayGoals => (tally.away_first, tally.away_second),
        }
    }

    fn reason(self) -> Reason {
        match self {
            Criterion::Aggregate => Reason::Aggregate,
            Criterion::AwayGoals => Reason::AwayGoals,
        }
    }

    /// Returns the side that strictly leads on this criterion.
    fn leader(self, tally: &Tally) -> Option<Side> {
        let (first, second) = self.scores(tally);
        match first.cmp(&second) {
            std::cmp::Ordering::Greater => Some(Side::First),
            std::cmp::Ordering::Less => Some(Side::Second),
            std::cmp::Ordering::Equal => None,
        }
    }
}

/// Criteria in the order they are consulted.
fn criteria(options: &TieOptions) -> &'static [Criterion] {
    if options.away_goals_rule {
        &[Criterion::Aggregate, Criterion::AwayGoals]
    } else {
        &[Criterion::Aggregate]
    }
}

/// Resolves the tie and reports which rule decided it.
///
/// Ignores [`TieOptions::full_result`]; see [`winner`] and [`shape`].
///
/// # Examples
///
/// ```
/// use u_twoleg::tie::{evaluate, Fixture, Leg, Reason, TeamPair, TieOptions};
///
/// let fixture = Fixture::new(
///     Some(TeamPair::new("foo", "bar")),
///     Leg::new(2, 1),
///     Leg::new(3, 2),
/// );
/// let decision = evaluate(&fixture, &TieOptions::default());
/// assert_eq!(decision.winner.as_deref(), Some("foo"));
/// assert_eq!(decision.reason, Reason::AwayGoals);
/// ```
pub fn evaluate(fixture: &Fixture, options: &TieOptions) -> Decision {
    let (side, reason) = decide(&fixture.tally(), options);
    let decision = Decision {
        winner: side.map(|s| fixture.teams.label(s).to_owned()),
        reason,
    };
    debug!(
        first = %fixture.teams.first,
        second = %fixture.teams.second,
        winner = decision.winner.as_deref().unwrap_or("-"),
        reason = %decision.reason,
        "tie resolved"
    );
    decision
}

/// Resolves the tie and returns only the winning label.
///
/// `None` on any tie.
pub fn winner<'a>(fixture: &'a Fixture, options: &TieOptions) -> Option<&'a str> {
    decide(&fixture.tally(), options)
        .0
        .map(|side| fixture.teams.label(side))
}

fn decide(tally: &Tally, options: &TieOptions) -> (Option<Side>, Reason) {
    trace!(?tally, away_goals_rule = options.away_goals_rule, "evaluating tie");

    for criterion in criteria(options) {
        if let Some(side) = criterion.leader(tally) {
            return (Some(side), criterion.reason());
        }
    }

    if options.away_goals_rule {
        (None, Reason::FullTie)
    } else {
        (None, Reason::Tie)
    }
}

/// Shapes a decision per [`TieOptions::full_result`].
pub fn shape(decision: Decision, options: &TieOptions) -> Outcome {
    if options.full_result {
        Outcome::Full(decision)
    } else {
        Outcome::Winner(decision.winner)
    }
}

/// Validates dynamic fixture data and resolves the tie.
///
/// # Errors
///
/// Returns the first failed validation check; see
/// [`parse_fixture`](super::parse_fixture).
///
/// # Examples
///
/// ```
/// use serde_json::json;
/// use u_twoleg::tie::{resolve, Outcome, TieOptions};
///
/// let data = json!({
///     "teams": ["foo", "bar"],
///     "games": [{ "home": 2, "away": 3 }, { "home": 4, "away": 2 }]
/// });
/// let outcome = resolve(&data, &TieOptions::default().with_full_result(false)).unwrap();
/// assert_eq!(outcome, Outcome::Winner(Some("bar".into())));
/// ```
pub fn resolve(data: &Value, options: &TieOptions) -> Result<Outcome> {
    let fixture = parse_fixture(data)?;
    Ok(shape(evaluate(&fixture, options), options))
}

/// Parses a JSON document and resolves the tie.
pub fn resolve_str(document: &str, options: &TieOptions) -> Result<Outcome> {
    let data: Value = serde_json::from_str(document)?;
    resolve(&data, options)
}

/// Resolves a batch of ties, preserving order.
///
/// Runs in parallel with the `parallel` feature.
pub fn evaluate_all(fixtures: &[Fixture], options: &TieOptions) -> Vec<Decision> {
    #[cfg(feature = "parallel")]
    {
        use rayon::prelude::*;
        fixtures
            .par_iter()
            .map(|fixture| evaluate(fixture, options))
            .collect()
    }
    #[cfg(not(feature = "parallel"))]
    {
        fixtures
            .iter()
            .map(|fixture| evaluate(fixture, options))
            .collect()
    }
}
