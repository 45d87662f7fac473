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
pub struct IncrementCounterV1 {
    pub name: String,
    pub amount: Option<Uint128>,
}
impl IncrementCounterV1 {
    pub fn new<S: Into<String>>(name: S, amount: Option<Uint128>) -> Self {
        IncrementCounterV1 {
            name: name.into(),
            amount,
        }
    }

    pub fn from_execute_msg(msg: ExecuteMsg) -> CounterResult<Self> {
        match msg {
            ExecuteMsg::IncrementCounter { name, amount } => {
                IncrementCounterV1::new(name, amount).to_ok()
            }
            _ => ContractError::InvalidMessageType {
                expected_message_type: "ExecuteMsg::IncrementCounter".to_string(),
            }
            .to_err(),
        }
    }
}

/// Increases the tracked value of a stored counter.  Open to any sender, as counting is the
/// entire purpose of the registry.  When no amount is supplied, the counter's configured step
/// is used.
///
/// # Parameters
///
/// * `deps` A dependencies object provided by the cosmwasm framework.  Allows access to useful
/// resources like contract internal storage.
/// * `info` A message information object provided by the cosmwasm framework.  Describes the sender
/// of the message, as well as the funds provided as an amount during the transaction.
/// * `msg` The validated input payload derived from the matched [ExecuteMsg](crate::core::msg::ExecuteMsg)
/// variant.
pub fn increment_counter(
    deps: DepsMut,
    info: MessageInfo,
    msg: IncrementCounterV1,
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
            .checked_add(amount)
            .map_err(|_| ContractError::CounterOverflow {
                name: counter.name.clone(),
                value: previous_value,
                amount,
            })?;
    replace_counter(deps.storage, &counter)?;
    Response::new()
        .add_attributes(
            EventAttributes::for_counter_event(EventType::IncrementCounter, &counter.name)
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
    use crate::execute::increment_counter::{increment_counter, IncrementCounterV1};
    use crate::testutil::test_constants::{
        DEFAULT_COUNTER_NAME, DEFAULT_COUNTER_START, DEFAULT_COUNTER_STEP, DEFAULT_SENDER_ADDRESS,
    };
    use crate::testutil::test_utilities::{
        empty_mock_info, single_attribute_for_key, test_instantiate_success, InstArgs,
    };
    use crate::util::constants::{
        COUNTER_EVENT_TYPE_KEY, COUNTER_NAME_KEY, NEW_VALUE_KEY, PREVIOUS_VALUE_KEY,
    };
    use crate::util::event_attributes::EventType;
    use crate::util::traits::OptionExtensions;
    use cosmwasm_std::testing::{mock_dependencies, mock_env, mock_info};
    use cosmwasm_std::{coin, Uint128};

    #[test]
    fn test_valid_increment_by_default_step_via_execute() {
        let mut deps = mock_dependencies();
        test_instantiate_success(deps.as_mut(), InstArgs::default());
        let response = execute(
            deps.as_mut(),
            mock_env(),
            empty_mock_info(DEFAULT_SENDER_ADDRESS),
            ExecuteMsg::IncrementCounter {
                name: DEFAULT_COUNTER_NAME.to_string(),
                amount: None,
            },
        )
        .expect("expected the increment route to work correctly");
        assert_eq!(
            4,
            response.attributes.len(),
            "incrementing should produce the correct number of attributes",
        );
        assert_eq!(
            EventType::IncrementCounter.event_name().as_str(),
            single_attribute_for_key(&response, COUNTER_EVENT_TYPE_KEY),
            "the proper event type should be emitted",
        );
        assert_eq!(
            DEFAULT_COUNTER_NAME,
            single_attribute_for_key(&response, COUNTER_NAME_KEY),
            "the counter name attribute should be emitted",
        );
        assert_eq!(
            DEFAULT_COUNTER_START.to_string(),
            single_attribute_for_key(&response, PREVIOUS_VALUE_KEY),
            "the previous value attribute should hold the pre-increment value",
        );
        assert_eq!(
            (DEFAULT_COUNTER_START + DEFAULT_COUNTER_STEP).to_string(),
            single_attribute_for_key(&response, NEW_VALUE_KEY),
            "the new value attribute should hold the post-increment value",
        );
        let counter = load_counter_by_name(deps.as_ref().storage, DEFAULT_COUNTER_NAME)
            .expect("the default counter should remain in storage");
        assert_eq!(
            Uint128::new(DEFAULT_COUNTER_START + DEFAULT_COUNTER_STEP),
            counter.value,
            "the stored counter should hold the incremented value",
        );
    }

    #[test]
    fn test_valid_increment_by_explicit_amount() {
        let mut deps = mock_dependencies();
        test_instantiate_success(deps.as_mut(), InstArgs::default());
        increment_counter(
            deps.as_mut(),
            empty_mock_info(DEFAULT_SENDER_ADDRESS),
            IncrementCounterV1::new(DEFAULT_COUNTER_NAME, Uint128::new(42).to_some()),
        )
        .expect("expected the increment function to return properly");
        let counter = load_counter_by_name(deps.as_ref().storage, DEFAULT_COUNTER_NAME)
            .expect("the default counter should remain in storage");
        assert_eq!(
            Uint128::new(DEFAULT_COUNTER_START + 42),
            counter.value,
            "the stored counter should be increased by the explicit amount",
        );
    }

    #[test]
    fn test_invalid_increment_for_provided_funds() {
        let mut deps = mock_dependencies();
        test_instantiate_success(deps.as_mut(), InstArgs::default());
        let error = increment_counter(
            deps.as_mut(),
            mock_info(DEFAULT_SENDER_ADDRESS, &[coin(100, "coindenom")]),
            IncrementCounterV1::new(DEFAULT_COUNTER_NAME, None),
        )
        .unwrap_err();
        assert!(
            matches!(error, ContractError::InvalidFunds(_)),
            "expected the invalid funds response to be returned when funds are provided, but got: {:?}",
            error,
        );
    }

    #[test]
    fn test_invalid_increment_for_missing_counter() {
        let mut deps = mock_dependencies();
        test_instantiate_success(deps.as_mut(), InstArgs::default());
        let error = increment_counter(
            deps.as_mut(),
            empty_mock_info(DEFAULT_SENDER_ADDRESS),
            IncrementCounterV1::new("nothere", None),
        )
        .unwrap_err();
        assert!(
            matches!(error, ContractError::RecordNotFound { .. }),
            "expected the record not found response for an unknown counter name, but got: {:?}",
            error,
        );
    }

    #[test]
    fn test_invalid_increment_for_disabled_counter() {
        let mut deps = mock_dependencies();
        test_instantiate_success(deps.as_mut(), InstArgs::default());
        insert_counter(
            deps.as_mut().storage,
            &CounterDefinition::new("disabled_counter", Uint128::zero(), Uint128::new(1), false),
        )
        .expect("inserting the disabled counter should succeed");
        let error = increment_counter(
            deps.as_mut(),
            empty_mock_info(DEFAULT_SENDER_ADDRESS),
            IncrementCounterV1::new("disabled_counter", None),
        )
        .unwrap_err();
        match error {
            ContractError::CounterDisabled { name } => {
                assert_eq!(
                    "disabled_counter", name,
                    "the disabled error should name the target counter",
                );
            }
            _ => panic!("unexpected error encountered: {:?}", error),
        };
    }

    #[test]
    fn test_invalid_increment_for_value_overflow() {
        let mut deps = mock_dependencies();
        test_instantiate_success(deps.as_mut(), InstArgs::default());
        insert_counter(
            deps.as_mut().storage,
            &CounterDefinition::new("maxed_out", Uint128::MAX, Uint128::new(1), true),
        )
        .expect("inserting the maxed out counter should succeed");
        let error = increment_counter(
            deps.as_mut(),
            empty_mock_info(DEFAULT_SENDER_ADDRESS),
            IncrementCounterV1::new("maxed_out", None),
        )
        .unwrap_err();
        match error {
            ContractError::CounterOverflow {
                name,
                value,
                amount,
            } => {
                assert_eq!(
                    "maxed_out", name,
                    "the overflow error should name the target counter",
                );
                assert_eq!(
                    Uint128::MAX,
                    value,
                    "the overflow error should hold the unchanged counter value",
                );
                assert_eq!(
                    Uint128::new(1),
                    amount,
                    "the overflow error should hold the attempted adjustment amount",
                );
            }
            _ => panic!("unexpected error encountered: {:?}", error),
        };
        let counter = load_counter_by_name(deps.as_ref().storage, "maxed_out")
            .expect("the maxed out counter should remain in storage");
        assert_eq!(
            Uint128::MAX,
            counter.value,
            "a failed increment should leave the stored value untouched",
        );
    }
}
