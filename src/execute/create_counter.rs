use crate::core::error::ContractError;
use crate::core::msg::ExecuteMsg;
use crate::core::state::insert_counter;
use crate::core::types::counter_definition::CounterDefinitionInput;
use crate::util::aliases::{CounterResult, EntryPointResponse};
use crate::util::contract_helpers::{check_admin_only, check_funds_are_empty};
use crate::util::event_attributes::{EventAttributes, EventType};
use crate::util::traits::ResultExtensions;
use cosmwasm_std::{DepsMut, MessageInfo, Response};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
pub struct CreateCounterV1 {
    pub counter: CounterDefinitionInput,
}
impl CreateCounterV1 {
    pub fn new(counter: CounterDefinitionInput) -> Self {
        CreateCounterV1 { counter }
    }

    pub fn from_execute_msg(msg: ExecuteMsg) -> CounterResult<Self> {
        match msg {
            ExecuteMsg::CreateCounter { counter } => CreateCounterV1::new(counter).to_ok(),
            _ => ContractError::InvalidMessageType {
                expected_message_type: "ExecuteMsg::CreateCounter".to_string(),
            }
            .to_err(),
        }
    }
}

/// Stores a brand new counter in the registry.  Only the contract admin may invoke this route.
///
/// # Parameters
///
/// * `deps` A dependencies object provided by the cosmwasm framework.  Allows access to useful
/// resources like contract internal storage.
/// * `info` A message information object provided by the cosmwasm framework.  Describes the sender
/// of the message, as well as the funds provided as an amount during the transaction.
/// * `msg` The validated input payload derived from the matched [ExecuteMsg](crate::core::msg::ExecuteMsg)
/// variant.
pub fn create_counter(
    deps: DepsMut,
    info: MessageInfo,
    msg: CreateCounterV1,
) -> EntryPointResponse {
    check_admin_only(&deps.as_ref(), &info)?;
    check_funds_are_empty(&info)?;
    let counter = msg.counter.into_counter_definition();
    // Duplicate names are rejected by the insert, keeping each counter's history unambiguous
    insert_counter(deps.storage, &counter)?;
    Response::new()
        .add_attributes(
            EventAttributes::for_counter_event(EventType::CreateCounter, &counter.name)
                .set_new_value(counter.value),
        )
        .to_ok()
}
