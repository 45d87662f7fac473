use crate::core::error::ContractError;
use crate::core::types::counter_definition::CounterDefinition;
use crate::util::aliases::CounterResult;
use crate::util::traits::ResultExtensions;
use cosmwasm_std::{Addr, Order, StdError, Storage};
use cosmwasm_storage::{singleton, singleton_read, ReadonlySingleton, Singleton};
use cw_storage_plus::Map;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

pub static STATE_KEY: &[u8] = b"state";

/// All counter records, keyed by their unique names.
const COUNTERS: Map<&str, CounterDefinition> = Map::new("counters");

/// The core configuration of the contract, created during instantiation.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
pub struct State {
    /// A human-readable label describing the registry.
    pub contract_name: String,
    /// The address that sent the instantiation message.  The only sender allowed to invoke
    /// the administrative execution routes.
    pub admin: Addr,
}
impl State {
    pub fn new<S: Into<String>>(contract_name: S, admin: Addr) -> State {
        State {
            contract_name: contract_name.into(),
            admin,
        }
    }
}

pub fn config(storage: &mut dyn Storage) -> Singleton<State> {
    singleton(storage, STATE_KEY)
}

pub fn config_read(storage: &dyn Storage) -> ReadonlySingleton<State> {
    singleton_read(storage, STATE_KEY)
}

/// Stores a new counter in contract storage.  Produces an error if a counter with the same
/// name has already been stored.
pub fn insert_counter(
    storage: &mut dyn Storage,
    counter: &CounterDefinition,
) -> CounterResult<()> {
    if COUNTERS.has(storage, &counter.name) {
        ContractError::RecordAlreadyExists {
            explanation: format!("a counter with name [{}] already exists", counter.name),
        }
        .to_err()
    } else {
        COUNTERS.save(storage, &counter.name, counter)?.to_ok()
    }
}

/// Overwrites an existing counter in contract storage.  Produces an error if no counter with
/// the same name has yet been stored.
pub fn replace_counter(
    storage: &mut dyn Storage,
    counter: &CounterDefinition,
) -> CounterResult<()> {
    if !COUNTERS.has(storage, &counter.name) {
        ContractError::RecordNotFound {
            explanation: format!("no counter with name [{}] exists", counter.name),
        }
        .to_err()
    } else {
        COUNTERS.save(storage, &counter.name, counter)?.to_ok()
    }
}

/// Fetches a counter from contract storage by its unique name, producing a RecordNotFound
/// error if no such counter exists.
pub fn load_counter_by_name<S: Into<String>>(
    storage: &dyn Storage,
    name: S,
) -> CounterResult<CounterDefinition> {
    let name = name.into();
    if let Some(counter) = may_load_counter_by_name(storage, &name)? {
        counter.to_ok()
    } else {
        ContractError::RecordNotFound {
            explanation: format!("no counter with name [{}] exists", name),
        }
        .to_err()
    }
}

/// Fetches a counter from contract storage by its unique name, if present.
pub fn may_load_counter_by_name<S: Into<String>>(
    storage: &dyn Storage,
    name: S,
) -> CounterResult<Option<CounterDefinition>> {
    let name = name.into();
    COUNTERS.may_load(storage, &name)?.to_ok()
}

/// Fetches all stored counters in ascending name order.
pub fn load_all_counters(storage: &dyn Storage) -> CounterResult<Vec<CounterDefinition>> {
    COUNTERS
        .range(storage, None, None, Order::Ascending)
        .map(|result| result.map(|(_, counter)| counter))
        .collect::<Result<Vec<CounterDefinition>, StdError>>()?
        .to_ok()
}
