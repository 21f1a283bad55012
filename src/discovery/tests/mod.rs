//! Unit tests for adapter discovery.

mod classifier_tests;
mod tagger_tests;
