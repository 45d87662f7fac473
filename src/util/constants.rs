// Execution output attributes.  All should be prefixed with "counter_" to make them easy to
// discern when observed in the event stream

/// Value = Event Type correlating to EventType enum into String values (String)
pub const COUNTER_EVENT_TYPE_KEY: &str = "counter_event_type";
/// Value = Counter Name (String)
pub const COUNTER_NAME_KEY: &str = "counter_name";
/// Value = The counter's tracked value before the execution route ran (Uint128 as String)
pub const PREVIOUS_VALUE_KEY: &str = "counter_previous_value";
/// Value = Any new value being changed that can be coerced to a string target. Dynamic to be used on various routes (String)
pub const NEW_VALUE_KEY: &str = "counter_new_value";
