use crate::ClientResult;
use crate::contracts::envelope::{SuccessEnvelope, success};
use crate::contracts::types::CadenceData;
use crate::schedule::cadence::{Cadence, normalize_cadence};

/// Reports how one free-text cadence spelling normalizes. Never fails on
/// unknown input; `recognized` is false instead.
pub fn run(input: &str) -> ClientResult<SuccessEnvelope> {
    let cadence = normalize_cadence(input).cadence();

    let data = CadenceData {
        input: input.to_string(),
        recognized: cadence.is_some(),
        cadence: cadence.map(|value| value.as_str().to_string()),
        monthly_factor: cadence.map(Cadence::monthly_factor),
        accepted_cadences: Cadence::ALL
            .iter()
            .map(|value| value.as_str().to_string())
            .collect(),
    };

    success("cadence", data)
}
