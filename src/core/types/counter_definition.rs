use cosmwasm_std::Uint128;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Defines a single named counter tracked by the contract.  Stored keyed by its unique
/// [name](CounterDefinition::name) value.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
pub struct CounterDefinition {
    /// The unique name of the counter.  Used as the storage key for all lookups.
    pub name: String,
    /// The current tracked value of the counter.
    pub value: Uint128,
    /// The amount added or subtracted when an adjustment route is invoked without an
    /// explicit amount.
    pub step: Uint128,
    /// Whether or not the open adjustment routes may act on this counter.
    pub enabled: bool,
}
impl CounterDefinition {
    pub fn new<S: Into<String>>(name: S, value: Uint128, step: Uint128, enabled: bool) -> Self {
        CounterDefinition {
            name: name.into(),
            value,
            step,
            enabled,
        }
    }
}

/// The request-side shape of a [CounterDefinition].  All values except the name are optional
/// and fall back to sane defaults when omitted by the caller.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
pub struct CounterDefinitionInput {
    /// The unique name of the counter to create.
    pub name: String,
    /// The value the counter begins tracking at.  Defaults to zero.
    pub start_value: Option<Uint128>,
    /// The default adjustment amount.  Defaults to one.
    pub step: Option<Uint128>,
    /// Whether or not the counter begins its life enabled.  Defaults to true.
    pub enabled: Option<bool>,
}
impl CounterDefinitionInput {
    pub fn new<S: Into<String>>(
        name: S,
        start_value: Option<Uint128>,
        step: Option<Uint128>,
        enabled: Option<bool>,
    ) -> Self {
        CounterDefinitionInput {
            name: name.into(),
            start_value,
            step,
            enabled,
        }
    }

    /// Moves this input into a storable [CounterDefinition], applying defaults for all
    /// unspecified values.
    pub fn into_counter_definition(self) -> CounterDefinition {
        CounterDefinition {
            name: self.name,
            value: self.start_value.unwrap_or_else(Uint128::zero),
            step: self.step.unwrap_or_else(|| Uint128::new(1)),
            enabled: self.enabled.unwrap_or(true),
        }
    }

    /// Clones this input and converts it into a storable [CounterDefinition].
    pub fn as_counter_definition(&self) -> CounterDefinition {
        self.clone().into_counter_definition()
    }
}
