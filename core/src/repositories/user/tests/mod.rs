//! Tests for the user repository mock

#[cfg(test)]
mod mock_tests;
