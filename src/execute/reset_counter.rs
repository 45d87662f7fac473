use crate::core::error::ContractError;
use crate::core::msg::ExecuteMsg;
use crate::core::state::{load_counter_by_name, replace_counter};
use crate::util::aliases::{CounterResult, EntryPointResponse};
use crate::util::contract_helpers::{check_admin_only, check_funds_are_empty};
use crate::util::event_attributes::{EventAttributes, EventType};
use crate::util::traits::ResultExtensions;
use cosmwasm_std::{DepsMut, MessageInfo, Response, Uint128};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Clone, PartialEq, JsonSchema)]
pub struct ResetCounterV1 {
    pub name: String,
    pub value: Option<Uint128>,
}
impl ResetCounterV1 {
    pub fn new<S: Into<String>>(name: S, value: Option<Uint128>) -> Self {
        ResetCounterV1 {
            name: name.into(),
            value,
        }
    }

    pub fn from_execute_msg(msg: ExecuteMsg) -> CounterResult<Self> {
        match msg {
            ExecuteMsg::ResetCounter { name, value } => ResetCounterV1::new(name, value).to_ok(),
            _ => ContractError::InvalidMessageType {
                expected_message_type: "ExecuteMsg::ResetCounter".to_string(),
            }
            .to_err(),
        }
    }
}

/// Rewrites the tracked value of a stored counter.  Only the contract admin may invoke this
/// route.  When no value is supplied, the counter restarts at zero.  The enabled flag is
/// intentionally not consulted - disabling a counter blocks only the open adjustment routes.
///
/// # Parameters
///
/// * `deps` A dependencies object provided by the cosmwasm framework.  Allows access to useful
/// resources like contract internal storage.
/// * `info` A message information object provided by the cosmwasm framework.  Describes the sender
/// of the message, as well as the funds provided as an amount during the transaction.
/// * `msg` The validated input payload derived from the matched [ExecuteMsg](crate::core::msg::ExecuteMsg)
/// variant.
pub fn reset_counter(deps: DepsMut, info: MessageInfo, msg: ResetCounterV1) -> EntryPointResponse {
    check_admin_only(&deps.as_ref(), &info)?;
    check_funds_are_empty(&info)?;
    let mut counter = load_counter_by_name(deps.storage, &msg.name)?;
    let previous_value = counter.value;
    counter.value = msg.value.unwrap_or_else(Uint128::zero);
    replace_counter(deps.storage, &counter)?;
    Response::new()
        .add_attributes(
            EventAttributes::for_counter_event(EventType::ResetCounter, &counter.name)
                .set_previous_value(previous_value)
                .set_new_value(counter.value),
        )
        .to_ok()
}

#[cfg(test)]
mod tests {
    use crate::contract::execute;
    use crate::core::error::ContractError;
    use crate::core::msg::ExecuteMsg;
    use crate::core::state::{insert_counter, load_counter_by_name};
    use crate::core::types::counter_definition::CounterDefinition;
    use crate::execute::reset_counter::{reset_counter, ResetCounterV1};
    use crate::testutil::test_constants::{
        DEFAULT_ADMIN_ADDRESS, DEFAULT_COUNTER_NAME, DEFAULT_COUNTER_START,
    };
    use crate::testutil::test_utilities::{
        empty_mock_info, single_attribute_for_key, test_instantiate_success, InstArgs,
    };
    use crate::util::constants::{NEW_VALUE_KEY, PREVIOUS_VALUE_KEY};
    use crate::util::traits::OptionExtensions;
    use cosmwasm_std::testing::{mock_dependencies, mock_env, mock_info};
    use cosmwasm_std::{coin, Uint128};

    #[test]
    fn test_valid_reset_to_zero_via_execute() {
        let mut deps = mock_dependencies();
        test_instantiate_success(deps.as_mut(), InstArgs::default());
        let response = execute(
            deps.as_mut(),
            mock_env(),
            empty_mock_info(DEFAULT_ADMIN_ADDRESS),
            ExecuteMsg::ResetCounter {
                name: DEFAULT_COUNTER_NAME.to_string(),
                value: None,
            },
        )
        .expect("expected the reset route to work correctly");
        assert_eq!(
            DEFAULT_COUNTER_START.to_string(),
            single_attribute_for_key(&response, PREVIOUS_VALUE_KEY),
            "the previous value attribute should hold the pre-reset value",
        );
        assert_eq!(
            "0",
            single_attribute_for_key(&response, NEW_VALUE_KEY),
            "an unspecified reset value should restart the counter at zero",
        );
        let counter = load_counter_by_name(deps.as_ref().storage, DEFAULT_COUNTER_NAME)
            .expect("the default counter should remain in storage");
        assert_eq!(
            Uint128::zero(),
            counter.value,
            "the stored counter should be reset to zero",
        );
    }

    #[test]
    fn test_valid_reset_to_explicit_value() {
        let mut deps = mock_dependencies();
        test_instantiate_success(deps.as_mut(), InstArgs::default());
        reset_counter(
            deps.as_mut(),
            empty_mock_info(DEFAULT_ADMIN_ADDRESS),
            ResetCounterV1::new(DEFAULT_COUNTER_NAME, Uint128::new(777).to_some()),
        )
        .expect("expected the reset function to return properly");
        let counter = load_counter_by_name(deps.as_ref().storage, DEFAULT_COUNTER_NAME)
            .expect("the default counter should remain in storage");
        assert_eq!(
            Uint128::new(777),
            counter.value,
            "the stored counter should be reset to the explicit value",
        );
    }

    #[test]
    fn test_valid_reset_on_disabled_counter() {
        let mut deps = mock_dependencies();
        test_instantiate_success(deps.as_mut(), InstArgs::default());
        insert_counter(
            deps.as_mut().storage,
            &CounterDefinition::new("disabled_counter", Uint128::new(55), Uint128::new(1), false),
        )
        .expect("inserting the disabled counter should succeed");
        reset_counter(
            deps.as_mut(),
            empty_mock_info(DEFAULT_ADMIN_ADDRESS),
            ResetCounterV1::new("disabled_counter", None),
        )
        .expect("the admin should be able to reset a disabled counter");
        let counter = load_counter_by_name(deps.as_ref().storage, "disabled_counter")
            .expect("the disabled counter should remain in storage");
        assert_eq!(
            Uint128::zero(),
            counter.value,
            "the disabled counter should be reset to zero",
        );
        assert!(
            !counter.enabled,
            "resetting a counter should not flip its enabled flag",
        );
    }

    #[test]
    fn test_invalid_reset_for_invalid_sender() {
        let mut deps = mock_dependencies();
        test_instantiate_success(deps.as_mut(), InstArgs::default());
        let error = reset_counter(
            deps.as_mut(),
            empty_mock_info("not-the-admin"),
            ResetCounterV1::new(DEFAULT_COUNTER_NAME, None),
        )
        .unwrap_err();
        assert!(
            matches!(error, ContractError::Unauthorized { .. }),
            "expected the unauthorized response to be returned when a different address than the admin is the sender, but got: {:?}",
            error,
        );
    }

    #[test]
    fn test_invalid_reset_for_provided_funds() {
        let mut deps = mock_dependencies();
        test_instantiate_success(deps.as_mut(), InstArgs::default());
        let error = reset_counter(
            deps.as_mut(),
            mock_info(DEFAULT_ADMIN_ADDRESS, &[coin(10, "coindenom")]),
            ResetCounterV1::new(DEFAULT_COUNTER_NAME, None),
        )
        .unwrap_err();
        assert!(
            matches!(error, ContractError::InvalidFunds(_)),
            "expected the invalid funds response to be returned when funds are provided, but got: {:?}",
            error,
        );
    }

    #[test]
    fn test_invalid_reset_for_missing_counter() {
        let mut deps = mock_dependencies();
        test_instantiate_success(deps.as_mut(), InstArgs::default());
        let error = reset_counter(
            deps.as_mut(),
            empty_mock_info(DEFAULT_ADMIN_ADDRESS),
            ResetCounterV1::new("nothere", None),
        )
        .unwrap_err();
        assert!(
            matches!(error, ContractError::RecordNotFound { .. }),
            "expected the record not found response for an unknown counter name, but got: {:?}",
            error,
        );
    }
}
