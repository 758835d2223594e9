//! Validation of dynamic fixture data.
//!
//! Checks run in a fixed order and the first failure is reported:
//!
//! 1. game count
//! 2. leg shape (both legs)
//! 3. team count
//! 4. team shape
//!
//! No scoring happens until every check passes.

use serde_json::{Map, Value};
use tracing::debug;

use super::types::{Fixture, Leg, TeamPair};
use crate::error::{Result, TieError};

/// Validates a `{ teams?, games }` value and builds a [`Fixture`].
///
/// # Examples
///
/// ```
/// use serde_json::json;
/// use u_twoleg::tie::{parse_fixture, Leg};
///
/// let fixture = parse_fixture(&json!({
///     "games": [{ "home": 2, "away": 1 }, { "home": 1, "away": 1 }]
/// }))
/// .unwrap();
/// assert_eq!(fixture.teams.first, "Team 1");
/// assert_eq!(fixture.first_leg(), Leg::new(2, 1));
/// ```
pub fn parse_fixture(data: &Value) -> Result<Fixture> {
    let result = parse_object(data);
    if let Err(e) = &result {
        debug!(kind = e.kind(), error = %e, "rejected fixture data");
    }
    result
}

fn parse_object(data: &Value) -> Result<Fixture> {
    // Not an object: there is no games info to read.
    let Some(object) = data.as_object() else {
        return Err(TieError::MissingGames);
    };

    let games = game_entries(object)?;
    let first_leg = parse_leg(&games[0], 1)?;
    let second_leg = parse_leg(&games[1], 2)?;
    let teams = parse_teams(object.get("teams"))?;

    Ok(Fixture::new(teams, first_leg, second_leg))
}

fn game_entries(object: &Map<String, Value>) -> Result<&[Value]> {
    match object.get("games") {
        None | Some(Value::Null) => Err(TieError::MissingGames),
        Some(Value::Array(games)) => match games.len() {
            0 => Err(TieError::MissingGames),
            2 => Ok(games.as_slice()),
            count => Err(TieError::GameCount { count }),
        },
        Some(other) => Err(TieError::InvalidGameData {
            leg: 0,
            detail: format!("games must be a list, got {}", type_name(other)),
        }),
    }
}

fn parse_leg(value: &Value, leg: usize) -> Result<Leg> {
    let Some(object) = value.as_object() else {
        return Err(TieError::InvalidGameData {
            leg,
            detail: format!("must be an object, got {}", type_name(value)),
        });
    };
    Ok(Leg {
        home: parse_score(object, "home", leg)?,
        away: parse_score(object, "away", leg)?,
    })
}

/// Largest integer a float carries exactly (2^53).
const MAX_EXACT_FLOAT: f64 = 9_007_199_254_740_992.0;

fn parse_score(object: &Map<String, Value>, field: &str, leg: usize) -> Result<u64> {
    let invalid = |detail: String| TieError::InvalidGameData { leg, detail };

    let value = object
        .get(field)
        .ok_or_else(|| invalid(format!("is missing `{field}`")))?;
    let Value::Number(n) = value else {
        return Err(invalid(format!("has non-integer `{field}`: {value}")));
    };
    if let Some(score) = n.as_u64() {
        return Ok(score);
    }
    if n.is_i64() {
        return Err(invalid(format!("has negative `{field}`: {value}")));
    }
    score_from_float(n.as_f64())
        .ok_or_else(|| invalid(format!("has non-integer `{field}`: {value}")))
}

/// Accepts whole, non-negative floats like `2.0` up to 2^53.
fn score_from_float(f: Option<f64>) -> Option<u64> {
    let f = f?;
    if f.is_finite() && f >= 0.0 && f.fract() == 0.0 && f <= MAX_EXACT_FLOAT {
        Some(f as u64)
    } else {
        None
    }
}

fn parse_teams(value: Option<&Value>) -> Result<Option<TeamPair>> {
    let teams = match value {
        None | Some(Value::Null) => return Ok(None),
        Some(Value::Array(teams)) => teams,
        Some(_) => return Err(TieError::InvalidTeamData { index: 0 }),
    };

    match teams.as_slice() {
        [] => Ok(None),
        [first, second] => {
            let label = |index: usize, value: &Value| {
                value
                    .as_str()
                    .map(str::to_owned)
                    .ok_or(TieError::InvalidTeamData { index })
            };
            Ok(Some(TeamPair {
                first: label(0, first)?,
                second: label(1, second)?,
            }))
        }
        _ => Err(TieError::TeamCount { count: teams.len() }),
    }
}

fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
