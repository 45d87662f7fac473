use cosmwasm_std::{
    testing::{mock_env, mock_info, MockApi, MockQuerier, MockStorage},
    DepsMut, Env, MessageInfo, OwnedDeps, Response, Uint128,
};

use crate::core::types::counter_definition::{CounterDefinition, CounterDefinitionInput};
use crate::util::traits::OptionExtensions;
use crate::{
    contract::instantiate,
    core::msg::InitMsg,
    util::aliases::EntryPointResponse,
};

use super::test_constants::{
    DEFAULT_ADMIN_ADDRESS, DEFAULT_CONTRACT_NAME, DEFAULT_COUNTER_NAME, DEFAULT_COUNTER_START,
    DEFAULT_COUNTER_STEP,
};

pub type MockOwnedDeps = OwnedDeps<MockStorage, MockApi, MockQuerier>;

pub fn get_default_counter_input() -> CounterDefinitionInput {
    CounterDefinitionInput {
        name: DEFAULT_COUNTER_NAME.into(),
        start_value: Uint128::new(DEFAULT_COUNTER_START).to_some(),
        step: Uint128::new(DEFAULT_COUNTER_STEP).to_some(),
        // Specifying None will cause the underlying code to always choose enabled: true
        enabled: None,
    }
}

pub fn get_default_counter_inputs() -> Vec<CounterDefinitionInput> {
    vec![get_default_counter_input()]
}

pub fn get_default_counter_definition() -> CounterDefinition {
    get_default_counter_input().into_counter_definition()
}

pub struct InstArgs {
    pub env: Env,
    pub info: MessageInfo,
    pub contract_name: String,
    pub counters: Vec<CounterDefinitionInput>,
}
impl Default for InstArgs {
    fn default() -> Self {
        InstArgs {
            env: mock_env(),
            info: mock_info(DEFAULT_ADMIN_ADDRESS, &[]),
            contract_name: DEFAULT_CONTRACT_NAME.into(),
            counters: get_default_counter_inputs(),
        }
    }
}

pub fn test_instantiate(deps: DepsMut, args: InstArgs) -> EntryPointResponse {
    instantiate(
        deps,
        args.env,
        args.info,
        InitMsg {
            contract_name: args.contract_name,
            counters: args.counters,
        },
    )
}

pub fn test_instantiate_success(deps: DepsMut, args: InstArgs) -> Response {
    test_instantiate(deps, args).expect("expected instantiation to succeed")
}

pub fn empty_mock_info<S: Into<String>>(sender: S) -> MessageInfo {
    mock_info(&sender.into(), &[])
}

pub fn single_attribute_for_key<'a>(response: &'a Response, key: &'a str) -> &'a str {
    response
        .attributes
        .iter()
        .find(|attr| attr.key.as_str() == key)
        .unwrap()
        .value
        .as_str()
}
