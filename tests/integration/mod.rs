//! Integration tests with mock HTTP server

pub mod mock_server;

pub mod billing;
pub mod members_invites;
pub mod usage;
