//! Tests for the family repository mock
