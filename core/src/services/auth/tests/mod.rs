//! Tests for the authorization service
