//! Contains the functionality used in the [contract file](crate::contract) to perform initial
//! request validation before any route logic runs.

/// Contains the validation logic for each [ExecuteMsg](crate::core::msg::ExecuteMsg) variant.
pub mod validate_execute_msg;
/// Contains the validation logic for the [InitMsg](crate::core::msg::InitMsg).
pub mod validate_init_msg;
