use crate::core::types::counter_definition::CounterDefinitionInput;
use cosmwasm_std::Uint128;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
pub struct InitMsg {
    pub contract_name: String,
    pub counters: Vec<CounterDefinitionInput>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum ExecuteMsg {
    CreateCounter {
        counter: CounterDefinitionInput,
    },
    IncrementCounter {
        name: String,
        amount: Option<Uint128>,
    },
    DecrementCounter {
        name: String,
        amount: Option<Uint128>,
    },
    ResetCounter {
        name: String,
        value: Option<Uint128>,
    },
    ToggleCounter {
        name: String,
        expected_result: bool,
    },
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum QueryMsg {
    QueryCounter { name: String },
    QueryCounters {},
    QueryState {},
    QueryVersion {},
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum MigrateMsg {
    ContractUpgrade {},
}
