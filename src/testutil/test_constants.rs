/// This address should be used for the contract administrator address in state
pub const DEFAULT_ADMIN_ADDRESS: &str = "admin";
/// Use this address in a circumstance that is testing a user incrementing or decrementing a counter
pub const DEFAULT_SENDER_ADDRESS: &str = "sender";
/// The contract name stored in state when using test_instantiate
pub const DEFAULT_CONTRACT_NAME: &str = "counter-registry-test";
/// The default counter added by test_instantiate should be expected to have this name
pub const DEFAULT_COUNTER_NAME: &str = "test_counter";
/// This amount directly relates to the starting value of the default counter
pub const DEFAULT_COUNTER_START: u128 = 100;
/// This is the default step configured on the default counter
pub const DEFAULT_COUNTER_STEP: u128 = 1;
