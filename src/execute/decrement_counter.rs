use crate::core::error::ContractError;
use crate::core::msg::ExecuteMsg;
use crate::core::state::{load_counter_by_name, replace_counter};
use crate::util::aliases::{CounterResult, EntryPointResponse};
use crate::util::contract_helpers::check_funds_are_empty;
use crate::util::event_attributes::{EventAttributes, EventType};
use crate::util::traits::ResultExtensions;
use cosmwasm_std::{DepsMut, MessageInfo, Response, Uint128};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Clone, PartialEq, JsonSchema)]
pub struct DecrementCounterV1 {
    pub name: String,
    pub amount: Option<Uint128>,
}
impl DecrementCounterV1 {
    pub fn new<S: Into<String>>(name: S, amount: Option<Uint128>) -> Self {
        DecrementCounterV1 {
            name: name.into(),
            amount,
        }
    }

    pub fn from_execute_msg(msg: ExecuteMsg) -> CounterResult<Self> {
        match msg {
            ExecuteMsg::DecrementCounter { name, amount } => {
                DecrementCounterV1::new(name, amount).to_ok()
            }
            _ => ContractError::InvalidMessageType {
                expected_message_type: "ExecuteMsg::DecrementCounter".to_string(),
            }
            .to_err(),
        }
    }
}

/// Decreases the tracked value of a stored counter.  Open to any sender.  When no amount is
/// supplied, the counter's configured step is used.  Counters never drop below zero - an
/// adjustment that would do so is rejected outright.
///
/// # Parameters
///
/// * `deps` A dependencies object provided by the cosmwasm framework.  Allows access to useful
/// resources like contract internal storage.
/// * `info` A message information object provided by the cosmwasm framework.  Describes the sender
/// of the message, as well as the funds provided as an amount during the transaction.
/// * `msg` The validated input payload derived from the matched [ExecuteMsg](crate::core::msg::ExecuteMsg)
/// variant.
pub fn decrement_counter(
    deps: DepsMut,
    info: MessageInfo,
    msg: DecrementCounterV1,
) -> EntryPointResponse {
    check_funds_are_empty(&info)?;
    let mut counter = load_counter_by_name(deps.storage, &msg.name)?;
    if !counter.enabled {
        return ContractError::CounterDisabled { name: counter.name }.to_err();
    }
    let amount = msg.amount.unwrap_or(counter.step);
    let previous_value = counter.value;
    counter.value =
        previous_value
            .checked_sub(amount)
            .map_err(|_| ContractError::CounterUnderflow {
                name: counter.name.clone(),
                value: previous_value,
                amount,
            })?;
    replace_counter(deps.storage, &counter)?;
    Response::new()
        .add_attributes(
            EventAttributes::for_counter_event(EventType::DecrementCounter, &counter.name)
                .set_previous_value(previous_value)
                .set_new_value(counter.value),
        )
        .to_ok()
}
