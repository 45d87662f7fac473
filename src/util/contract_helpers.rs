use crate::core::error::ContractError;
use crate::core::state::config_read;
use crate::util::aliases::CounterResult;
use crate::util::traits::ResultExtensions;

use cosmwasm_std::{Deps, MessageInfo};

/// Ensures that only the admin of the contract can call into a route.
///
/// # Parameters
///
/// * `deps` A dependencies object provided by the cosmwasm framework.  Allows access to useful
/// resources like contract internal storage.
/// * `info` A message information object provided by the cosmwasm framework.  Describes the sender
/// of the message, as well as the funds provided as an amount during the transaction.
///
/// # Examples
/// ```
/// use cosmwasm_std::Addr;
/// use cosmwasm_std::testing::{mock_dependencies, mock_info};
/// use counter_registry_smart_contract::core::state::{config, State};
/// use counter_registry_smart_contract::util::contract_helpers::check_admin_only;
///
/// let mut deps = mock_dependencies();
/// config(deps.as_mut().storage).save(&State { contract_name: "counter-registry".to_string(), admin: Addr::unchecked("admin-name") })
///     .expect("expected state to save successfully");
/// let info = mock_info("admin-name", &[]);
/// check_admin_only(&deps.as_ref(), &info).expect("admin-name was used as the admin and should return a success");
/// ```
pub fn check_admin_only(deps: &Deps, info: &MessageInfo) -> CounterResult<()> {
    let state = config_read(deps.storage).load()?;
    if info.sender != state.admin {
        ContractError::Unauthorized {
            explanation: "admin required".to_string(),
        }
        .to_err()
    } else {
        Ok(())
    }
}

/// Ensures that the info provided to the route does not include any funds.
///
/// # Parameters
///
/// * `info` A message information object provided by the cosmwasm framework.  Describes the sender
/// of the message, as well as the funds provided as an amount during the transaction.
///
/// # Examples
/// ```
/// use cosmwasm_std::testing::mock_info;
/// use counter_registry_smart_contract::util::contract_helpers::check_funds_are_empty;
///
/// let info = mock_info("admin-name", &[]);
/// check_funds_are_empty(&info).expect("no coin provided in info - should be success");
/// ```
pub fn check_funds_are_empty(info: &MessageInfo) -> CounterResult<()> {
    if !info.funds.is_empty() {
        ContractError::InvalidFunds("route requires no funds be present".to_string()).to_err()
    } else {
        Ok(())
    }
}
