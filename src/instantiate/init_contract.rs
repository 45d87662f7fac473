use crate::core::msg::InitMsg;
use crate::core::state::{config, insert_counter, State};
use crate::migrate::version_info::migrate_version_info;
use crate::util::aliases::EntryPointResponse;
use crate::util::contract_helpers::check_funds_are_empty;
use crate::util::event_attributes::{EventAttributes, EventType};
use crate::util::traits::ResultExtensions;
use cosmwasm_std::{DepsMut, Env, MessageInfo, Response};

/// The main functionality executed when the smart contract is first instantiated.  This creates
/// the internal contract [State](crate::core::state::State) value, as well as any
/// [CounterDefinitions](crate::core::types::counter_definition::CounterDefinition) provided in
/// the init msg.
///
/// # Parameters
///
/// * `deps` A dependencies object provided by the cosmwasm framework.  Allows access to useful
/// resources like contract internal storage.
/// * `env` An environment object provided by the cosmwasm framework.  Describes the contract's
/// details, as well as blockchain information at the time of the transaction.
/// * `info` A message information object provided by the cosmwasm framework.  Describes the sender
/// of the instantiation message, as well as the funds provided as an amount during the transaction.
/// * `msg` A custom instantiation message defined by this contract for creating the initial
/// configuration used by the contract.
pub fn init_contract(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    msg: InitMsg,
) -> EntryPointResponse {
    check_funds_are_empty(&info)?;
    // Note: This vector can remain empty on instantiation, and future executions by the admin can
    // append new counters. When no counters are supplied, this contract will not be able to take
    // adjustment input until they are
    for input in msg.counters.iter() {
        insert_counter(deps.storage, &input.as_counter_definition())?;
    }
    // Convert the init message into a state value that will drive the contract's future executions
    let state = State::new(msg.contract_name, info.sender);
    // Store the state by grabbing a mutable instance of the contract configuration
    config(deps.storage).save(&state)?;
    // Set the version info to the default contract values on instantiation
    migrate_version_info(deps.storage)?;
    Response::new()
        .add_attributes(EventAttributes::new(EventType::InstantiateContract))
        .to_ok()
}
