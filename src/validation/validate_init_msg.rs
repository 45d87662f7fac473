use crate::core::error::ContractError;
use crate::core::msg::InitMsg;
use crate::core::types::counter_definition::CounterDefinitionInput;
use crate::util::functions::distinct_count_by_property;
use crate::util::traits::ResultExtensions;

pub fn validate_init_msg(msg: &InitMsg) -> Result<(), ContractError> {
    let mut invalid_fields: Vec<String> = vec![];
    if msg.contract_name.is_empty() {
        invalid_fields.push("contract_name: must not be blank".to_string());
    }
    if distinct_count_by_property(&msg.counters, |counter| &counter.name) != msg.counters.len() {
        invalid_fields
            .push("counters: each definition must specify a unique counter name".to_string());
    }
    let mut counter_messages = msg
        .counters
        .iter()
        .flat_map(validate_counter_definition_input)
        .collect::<Vec<String>>();
    invalid_fields.append(&mut counter_messages);
    if !invalid_fields.is_empty() {
        ContractError::InvalidMessageFields {
            message_type: "Instantiate".to_string(),
            invalid_fields,
        }
        .to_err()
    } else {
        Ok(())
    }
}

/// Produces a message for each malformed field on a single counter input.  Shared with the
/// [CreateCounter](crate::core::msg::ExecuteMsg::CreateCounter) route's validation.
pub fn validate_counter_definition_input(input: &CounterDefinitionInput) -> Vec<String> {
    let mut invalid_fields: Vec<String> = vec![];
    if input.name.is_empty() {
        invalid_fields.push("counter:name: must not be blank".to_string());
    }
    if input.name.contains(char::is_whitespace) {
        invalid_fields.push("counter:name: must not contain whitespace".to_string());
    }
    if let Some(step) = input.step {
        if step.is_zero() {
            invalid_fields.push("counter:step: must be greater than zero".to_string());
        }
    }
    invalid_fields
}
