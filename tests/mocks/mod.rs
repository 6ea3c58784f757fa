//! Shared fixtures and backend stubs for the e2e tests

pub mod entities;
pub mod test_server;
