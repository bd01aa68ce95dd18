//! Tests for the family group service

#[cfg(test)]
mod service_tests;
