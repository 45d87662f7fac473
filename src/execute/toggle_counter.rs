use crate::core::error::ContractError;
use crate::core::msg::ExecuteMsg;
use crate::core::state::{load_counter_by_name, replace_counter};
use crate::util::aliases::{CounterResult, EntryPointResponse};
use crate::util::contract_helpers::{check_admin_only, check_funds_are_empty};
use crate::util::event_attributes::{EventAttributes, EventType};
use crate::util::traits::ResultExtensions;
use cosmwasm_std::{DepsMut, MessageInfo, Response};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Clone, PartialEq, JsonSchema)]
pub struct ToggleCounterV1 {
    pub name: String,
    pub expected_result: bool,
}
impl ToggleCounterV1 {
    pub fn new<S: Into<String>>(name: S, expected_result: bool) -> Self {
        ToggleCounterV1 {
            name: name.into(),
            expected_result,
        }
    }

    pub fn from_execute_msg(msg: ExecuteMsg) -> CounterResult<Self> {
        match msg {
            ExecuteMsg::ToggleCounter {
                name,
                expected_result,
            } => ToggleCounterV1::new(name, expected_result).to_ok(),
            _ => ContractError::InvalidMessageType {
                expected_message_type: "ExecuteMsg::ToggleCounter".to_string(),
            }
            .to_err(),
        }
    }
}

/// Flips the enabled flag of a stored counter, blocking or unblocking the open adjustment
/// routes.  Only the contract admin may invoke this route.
///
/// # Parameters
///
/// * `deps` A dependencies object provided by the cosmwasm framework.  Allows access to useful
/// resources like contract internal storage.
/// * `info` A message information object provided by the cosmwasm framework.  Describes the sender
/// of the message, as well as the funds provided as an amount during the transaction.
/// * `msg` The validated input payload derived from the matched [ExecuteMsg](crate::core::msg::ExecuteMsg)
/// variant.
pub fn toggle_counter(
    deps: DepsMut,
    info: MessageInfo,
    msg: ToggleCounterV1,
) -> EntryPointResponse {
    check_admin_only(&deps.as_ref(), &info)?;
    check_funds_are_empty(&info)?;
    let mut counter = load_counter_by_name(deps.storage, &msg.name)?;
    // Never toggle the state if the caller didn't expect the target result
    // If current state == expected result, then the requestor wants to change TO the current state. So this is a no-op.
    if counter.enabled == msg.expected_result {
        return ContractError::UnexpectedState {
            explanation: format!(
                "expected to toggle to [enabled = {}], but toggle would set value to [enabled = {}]",
                msg.expected_result, !counter.enabled
            ),
        }
        .to_err();
    }
    counter.enabled = msg.expected_result;
    replace_counter(deps.storage, &counter)?;
    Response::new()
        .add_attributes(
            EventAttributes::for_counter_event(EventType::ToggleCounter, &counter.name)
                .set_new_value(counter.enabled),
        )
        .to_ok()
}
