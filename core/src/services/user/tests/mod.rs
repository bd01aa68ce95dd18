//! Tests for the user account service

#[cfg(test)]
mod service_tests;
