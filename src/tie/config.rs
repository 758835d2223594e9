//! Tie resolution options.

use serde::Deserialize;

use crate::error::{Result, TieError};

/// Options controlling how a tie is resolved and reported.
///
/// Deserializes from the camelCase option object (`fullResult`,
/// `awayGoalsRule`); absent fields keep their defaults and unknown fields
/// are ignored.
///
/// # Examples
///
/// ```
/// use u_twoleg::tie::TieOptions;
///
/// let options = TieOptions::default()
///     .with_full_result(false)
///     .with_away_goals_rule(false);
/// assert!(!options.full_result);
/// assert!(!options.away_goals_rule);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TieOptions {
    /// Return the full decision (winner and reason) rather than the winner only.
    pub full_result: bool,

    /// Break aggregate ties on away goals.
    pub away_goals_rule: bool,
}

impl Default for TieOptions {
    fn default() -> Self {
        Self {
            full_result: true,
            away_goals_rule: true,
        }
    }
}

impl TieOptions {
    /// Sets whether the full decision is returned.
    pub fn with_full_result(mut self, full: bool) -> Self {
        self.full_result = full;
        self
    }

    /// Enables or disables the away-goals tie-break.
    pub fn with_away_goals_rule(mut self, enabled: bool) -> Self {
        self.away_goals_rule = enabled;
        self
    }

    /// Reads options from a dynamic value.
    ///
    /// `null` yields the defaults.
    pub fn from_value(value: &serde_json::Value) -> Result<Self> {
        if value.is_null() {
            return Ok(Self::default());
        }
        if !value.is_object() {
            return Err(TieError::InvalidOptions(format!(
                "expected an object, got {value}"
            )));
        }
        serde_json::from_value(value.clone()).map_err(|e| TieError::InvalidOptions(e.to_string()))
    }
}
