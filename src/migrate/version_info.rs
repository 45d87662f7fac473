use cosmwasm_std::Storage;
use cw2::{get_contract_version, set_contract_version, ContractVersion};

use crate::util::aliases::CounterResult;
use crate::util::traits::ResultExtensions;

/// The name recorded in version storage.  Prevents other contract code from overwriting this
/// contract during a migration.
pub const CONTRACT_NAME: &str = concat!("crates.io:", env!("CARGO_PKG_NAME"));
/// The version recorded in version storage.  Always follows the env declared in Cargo.toml.
pub const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Overwrites the stored version info with the values compiled into the current contract code.
/// Returns the newly-stored record.
pub fn migrate_version_info(storage: &mut dyn Storage) -> CounterResult<ContractVersion> {
    set_contract_version(storage, CONTRACT_NAME, CONTRACT_VERSION)?;
    get_version_info(storage)
}

/// Pulls the version info for the contract out of the version store.
pub fn get_version_info(storage: &dyn Storage) -> CounterResult<ContractVersion> {
    get_contract_version(storage)?.to_ok()
}
