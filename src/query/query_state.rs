use crate::core::state::config_read;
use crate::util::aliases::CounterResult;
use crate::util::traits::ResultExtensions;
use cosmwasm_std::{to_json_binary, Binary, Deps};

/// A query that fetches the contract's internal [State](crate::core::state::State) value.
///
/// # Parameters
///
/// * `deps` A dependencies object provided by the cosmwasm framework.  Allows access to useful
/// resources like contract internal storage.
pub fn query_state(deps: &Deps) -> CounterResult<Binary> {
    to_json_binary(&config_read(deps.storage).load()?)?.to_ok()
}
