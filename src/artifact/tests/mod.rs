//! Unit tests for the artifact contract.
