use crate::core::state::may_load_counter_by_name;
use crate::util::aliases::CounterResult;
use crate::util::traits::ResultExtensions;
use cosmwasm_std::{to_json_binary, Binary, Deps};

/// A query that fetches a target [CounterDefinition](crate::core::types::counter_definition::CounterDefinition)
/// from the contract's internal storage.  A missing counter serializes as an empty Option
/// rather than producing an error.
///
/// # Parameters
///
/// * `deps` A dependencies object provided by the cosmwasm framework.  Allows access to useful
/// resources like contract internal storage.
/// * `name` The unique name of the counter to look up.
pub fn query_counter(deps: &Deps, name: String) -> CounterResult<Binary> {
    to_json_binary(&may_load_counter_by_name(deps.storage, name)?)?.to_ok()
}
