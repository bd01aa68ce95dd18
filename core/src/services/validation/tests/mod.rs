//! Tests for the validation rule sets
