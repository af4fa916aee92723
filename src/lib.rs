//! Cross-crate integration tests for the pisweep workspace.
