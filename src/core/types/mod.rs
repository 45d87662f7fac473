//! Contains the struct definitions used as nested values within request and storage types.

/// The definition of a named counter, both in its stored form and its request input form.
pub mod counter_definition;
