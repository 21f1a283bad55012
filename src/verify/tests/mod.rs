//! Tests for resolving classes from adapter sources.
