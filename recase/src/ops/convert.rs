//! Convert operation - case conversion of every input.

use eyre::{Result, WrapErr};
use recase_core::Case;

use crate::reports::ConvertReport;

/// Execute the convert operation.
///
/// With `json` set, each input is parsed as a JSON value before
/// conversion, so `null` converts to an empty string and non-text values
/// are rejected.
pub fn convert(inputs: &[String], case: Case, json: bool) -> Result<ConvertReport> {
    let outputs = inputs
        .iter()
        .map(|input| convert_one(input, case, json))
        .collect::<Result<Vec<_>>>()?;

    Ok(ConvertReport { case, outputs })
}

fn convert_one(input: &str, case: Case, json: bool) -> Result<String> {
    if !json {
        return Ok(case.apply(input));
    }

    let value: serde_json::Value = serde_json::from_str(input)
        .wrap_err_with(|| format!("invalid JSON input '{}'", input))?;
    Ok(case.convert(&value)?)
}
