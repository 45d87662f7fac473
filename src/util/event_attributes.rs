use super::constants::{
    COUNTER_EVENT_TYPE_KEY, COUNTER_NAME_KEY, NEW_VALUE_KEY, PREVIOUS_VALUE_KEY,
};

/// Each execution route emits one of these values as its `counter_event_type` attribute,
/// allowing event stream consumers to discern which route produced a transaction.
pub enum EventType {
    InstantiateContract,
    MigrateContract,
    CreateCounter,
    IncrementCounter,
    DecrementCounter,
    ResetCounter,
    ToggleCounter,
}
#[allow(clippy::from_over_into)]
impl Into<String> for EventType {
    fn into(self) -> String {
        match self {
            EventType::InstantiateContract => "instantiate_contract",
            EventType::MigrateContract => "migrate_contract",
            EventType::CreateCounter => "create_counter",
            EventType::IncrementCounter => "increment_counter",
            EventType::DecrementCounter => "decrement_counter",
            EventType::ResetCounter => "reset_counter",
            EventType::ToggleCounter => "toggle_counter",
        }
        .into()
    }
}
impl EventType {
    pub fn event_name(self) -> String {
        self.into()
    }
}

/// A builder that standardizes the attribute keys and values emitted in each route's
/// [Response](cosmwasm_std::Response).
pub struct EventAttributes {
    attributes: Vec<(String, String)>,
}
impl EventAttributes {
    pub fn new(event_type: EventType) -> Self {
        EventAttributes {
            attributes: vec![(COUNTER_EVENT_TYPE_KEY.into(), event_type.into())],
        }
    }

    pub fn for_counter_event<T: Into<String>>(event_type: EventType, counter_name: T) -> Self {
        Self::new(event_type).set_counter_name(counter_name)
    }

    pub fn set_counter_name<T: Into<String>>(mut self, counter_name: T) -> Self {
        self.attributes
            .push((COUNTER_NAME_KEY.into(), counter_name.into()));
        self
    }

    pub fn set_previous_value<T: ToString>(mut self, previous_value: T) -> Self {
        self.attributes
            .push((PREVIOUS_VALUE_KEY.into(), previous_value.to_string()));
        self
    }

    pub fn set_new_value<T: ToString>(mut self, new_value: T) -> Self {
        self.attributes
            .push((NEW_VALUE_KEY.into(), new_value.to_string()));
        self
    }
}

impl IntoIterator for EventAttributes {
    type Item = (String, String);

    type IntoIter = std::vec::IntoIter<Self::Item>;

    fn into_iter(self) -> Self::IntoIter {
        self.attributes.into_iter()
    }
}
