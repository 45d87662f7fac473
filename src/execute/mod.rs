//! Contains all execution routes used by the [contract file](crate::contract).

/// Contains the functionality used by the [CreateCounter](crate::core::msg::ExecuteMsg::CreateCounter)
/// [ExecuteMsg](crate::core::msg::ExecuteMsg) variant when invoked via the [execute](crate::contract::execute)
/// function.
pub mod create_counter;
/// Contains the functionality used by the [DecrementCounter](crate::core::msg::ExecuteMsg::DecrementCounter)
/// [ExecuteMsg](crate::core::msg::ExecuteMsg) variant when invoked via the [execute](crate::contract::execute)
/// function.
pub mod decrement_counter;
/// Contains the functionality used by the [IncrementCounter](crate::core::msg::ExecuteMsg::IncrementCounter)
/// [ExecuteMsg](crate::core::msg::ExecuteMsg) variant when invoked via the [execute](crate::contract::execute)
/// function.
pub mod increment_counter;
/// Contains the functionality used by the [ResetCounter](crate::core::msg::ExecuteMsg::ResetCounter)
/// [ExecuteMsg](crate::core::msg::ExecuteMsg) variant when invoked via the [execute](crate::contract::execute)
/// function.
pub mod reset_counter;
/// Contains the functionality used by the [ToggleCounter](crate::core::msg::ExecuteMsg::ToggleCounter)
/// [ExecuteMsg](crate::core::msg::ExecuteMsg) variant when invoked via the [execute](crate::contract::execute)
/// function.
pub mod toggle_counter;
