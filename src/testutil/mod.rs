//! Shared helpers used by the test suites of each module.  Only compiled for tests, or when
//! the enable-test-utils feature is active.

/// Contains default values used to construct test messages and state.
pub mod test_constants;
/// Contains helper functions for instantiating the contract and inspecting responses in tests.
pub mod test_utilities;
