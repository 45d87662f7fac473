use crate::core::msg::{ExecuteMsg, InitMsg, MigrateMsg, QueryMsg};
use crate::execute::create_counter::{create_counter, CreateCounterV1};
use crate::execute::decrement_counter::{decrement_counter, DecrementCounterV1};
use crate::execute::increment_counter::{increment_counter, IncrementCounterV1};
use crate::execute::reset_counter::{reset_counter, ResetCounterV1};
use crate::execute::toggle_counter::{toggle_counter, ToggleCounterV1};
use crate::instantiate::init_contract::init_contract;
use crate::migrate::migrate_contract::migrate_contract;
use crate::query::query_counter::query_counter;
use crate::query::query_counters::query_counters;
use crate::query::query_state::query_state;
use crate::query::query_version::query_version;
use crate::util::aliases::{CounterResult, EntryPointResponse};
use crate::validation::validate_execute_msg::validate_execute_msg;
use crate::validation::validate_init_msg::validate_init_msg;
#[cfg(not(feature = "library"))]
use cosmwasm_std::entry_point;
use cosmwasm_std::{Binary, Deps, DepsMut, Env, MessageInfo};

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn instantiate(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    msg: InitMsg,
) -> EntryPointResponse {
    // Ensure the init message is properly formatted before doing anything
    validate_init_msg(&msg)?;
    // Execute the core instantiation code
    init_contract(deps, env, info, msg)
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn query(deps: Deps, _env: Env, msg: QueryMsg) -> CounterResult<Binary> {
    match msg {
        QueryMsg::QueryCounter { name } => query_counter(&deps, name),
        QueryMsg::QueryCounters {} => query_counters(&deps),
        QueryMsg::QueryState {} => query_state(&deps),
        QueryMsg::QueryVersion {} => query_version(&deps),
    }
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn execute(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    msg: ExecuteMsg,
) -> EntryPointResponse {
    // Ensure the execute message is properly formatted before doing anything
    validate_execute_msg(&msg)?;
    match msg {
        ExecuteMsg::CreateCounter { .. } => {
            create_counter(deps, info, CreateCounterV1::from_execute_msg(msg)?)
        }
        ExecuteMsg::IncrementCounter { .. } => {
            increment_counter(deps, info, IncrementCounterV1::from_execute_msg(msg)?)
        }
        ExecuteMsg::DecrementCounter { .. } => {
            decrement_counter(deps, info, DecrementCounterV1::from_execute_msg(msg)?)
        }
        ExecuteMsg::ResetCounter { .. } => {
            reset_counter(deps, info, ResetCounterV1::from_execute_msg(msg)?)
        }
        ExecuteMsg::ToggleCounter { .. } => {
            toggle_counter(deps, info, ToggleCounterV1::from_execute_msg(msg)?)
        }
    }
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn migrate(deps: DepsMut, _env: Env, msg: MigrateMsg) -> EntryPointResponse {
    match msg {
        MigrateMsg::ContractUpgrade {} => migrate_contract(deps),
    }
}
