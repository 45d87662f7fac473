use crate::core::state::load_all_counters;
use crate::util::aliases::CounterResult;
use crate::util::traits::ResultExtensions;
use cosmwasm_std::{to_json_binary, Binary, Deps};

/// A query that fetches all [CounterDefinitions](crate::core::types::counter_definition::CounterDefinition)
/// from the contract's internal storage in ascending name order.
///
/// # Parameters
///
/// * `deps` A dependencies object provided by the cosmwasm framework.  Allows access to useful
/// resources like contract internal storage.
pub fn query_counters(deps: &Deps) -> CounterResult<Binary> {
    to_json_binary(&load_all_counters(deps.storage)?)?.to_ok()
}
