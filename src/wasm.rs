//! JavaScript bindings.

use serde::Serialize;
use wasm_bindgen::prelude::*;

use crate::tie::{resolve, Outcome, Reason, TieOptions};

/// Decision as handed to JS: `winner` is always present, `undefined` on a tie.
#[derive(Serialize)]
struct JsDecision<'a> {
    winner: Option<&'a str>,
    reason: Reason,
}

/// Resolves a two-legged tie.
///
/// `data` is `{ teams?, games }`, `options` is `{ fullResult?, awayGoalsRule? }`
/// or `undefined`. Returns the decision object, the winner string, or
/// `undefined` for a tie when `fullResult` is false.
#[wasm_bindgen(js_name = evaluate)]
pub fn evaluate_js(data: JsValue, options: JsValue) -> Result<JsValue, JsError> {
    let data: serde_json::Value = serde_wasm_bindgen::from_value(data)?;
    let options = if options.is_undefined() || options.is_null() {
        TieOptions::default()
    } else {
        let value: serde_json::Value = serde_wasm_bindgen::from_value(options)?;
        TieOptions::from_value(&value)?
    };

    match resolve(&data, &options)? {
        Outcome::Full(decision) => {
            let decision = JsDecision {
                winner: decision.winner.as_deref(),
                reason: decision.reason,
            };
            Ok(serde_wasm_bindgen::to_value(&decision)?)
        }
        Outcome::Winner(Some(winner)) => Ok(JsValue::from_str(&winner)),
        Outcome::Winner(None) => Ok(JsValue::UNDEFINED),
    }
}
