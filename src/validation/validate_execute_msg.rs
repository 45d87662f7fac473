use crate::core::error::ContractError;
use crate::core::msg::ExecuteMsg;
use crate::core::types::counter_definition::CounterDefinitionInput;
use crate::util::aliases::CounterResult;
use crate::util::traits::ResultExtensions;
use crate::validation::validate_init_msg::validate_counter_definition_input;
use cosmwasm_std::Uint128;

pub fn validate_execute_msg(msg: &ExecuteMsg) -> Result<(), ContractError> {
    match msg {
        ExecuteMsg::CreateCounter { counter } => validate_create_counter(counter),
        ExecuteMsg::IncrementCounter { name, amount } => {
            validate_counter_adjustment("ExecuteMsg::IncrementCounter", name, amount)
        }
        ExecuteMsg::DecrementCounter { name, amount } => {
            validate_counter_adjustment("ExecuteMsg::DecrementCounter", name, amount)
        }
        ExecuteMsg::ResetCounter { name, .. } => {
            validate_counter_name_only("ExecuteMsg::ResetCounter", name)
        }
        ExecuteMsg::ToggleCounter { name, .. } => {
            validate_counter_name_only("ExecuteMsg::ToggleCounter", name)
        }
    }
}

fn validate_create_counter(counter: &CounterDefinitionInput) -> CounterResult<()> {
    to_validation_result(
        "ExecuteMsg::CreateCounter",
        validate_counter_definition_input(counter),
    )
}

fn validate_counter_adjustment(
    message_type: &str,
    name: &str,
    amount: &Option<Uint128>,
) -> CounterResult<()> {
    let mut invalid_fields: Vec<String> = vec![];
    if name.is_empty() {
        invalid_fields.push("name: must not be blank".to_string());
    }
    if let Some(amount) = amount {
        if amount.is_zero() {
            invalid_fields.push("amount: must be greater than zero when provided".to_string());
        }
    }
    to_validation_result(message_type, invalid_fields)
}

fn validate_counter_name_only(message_type: &str, name: &str) -> CounterResult<()> {
    let mut invalid_fields: Vec<String> = vec![];
    if name.is_empty() {
        invalid_fields.push("name: must not be blank".to_string());
    }
    to_validation_result(message_type, invalid_fields)
}

fn to_validation_result(message_type: &str, invalid_fields: Vec<String>) -> CounterResult<()> {
    if !invalid_fields.is_empty() {
        ContractError::InvalidMessageFields {
            message_type: message_type.to_string(),
            invalid_fields,
        }
        .to_err()
    } else {
        Ok(())
    }
}
