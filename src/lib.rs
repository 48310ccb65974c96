//! # deepgram-manage
//!
//! Async client for the [Deepgram](https://developers.deepgram.com/api-reference/)
//! speech-recognition management REST API: projects, API keys, members,
//! invitations, usage, and account balances.
//!
//! ## Overview
//!
//! Every call authenticates with a Deepgram API key (`Authorization: Token ...`),
//! hits a fixed endpoint under `https://api.deepgram.com/v1`, and decodes the
//! JSON answer into a typed record. Vendor-level errors embedded in otherwise
//! successful responses are detected and surfaced as [`Error::Vendor`], distinct
//! from transport failures and HTTP status failures.
//!
//! Records returned by the API expose their own follow-up calls: a [`Project`]
//! can list its keys, members, invitations, usage, and balances without going
//! back through the root client.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use deepgram_manage::Deepgram;
//!
//! #[tokio::main]
//! async fn main() -> deepgram_manage::Result<()> {
//!     // Reads the API key from the keyring or DEEPGRAM_API_KEY.
//!     let deepgram = Deepgram::builder().build()?;
//!
//!     for project in deepgram.projects().await? {
//!         println!("{}: {}", project.project_id, project.name);
//!         for key in project.keys().await? {
//!             println!("  key {} ({})", key.api_key_id, key.comment);
//!         }
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Module Organization
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`client`] | Root client handle and builder |
//! | [`transport`] | Shared HTTP request/response routine |
//! | [`projects`] | Project records and follow-up calls |
//! | [`keys`] | API key management |
//! | [`members`] | Project members and their scopes |
//! | [`invites`] | Outstanding project invitations |
//! | [`usage`] | Request history, usage summaries, usage fields |
//! | [`billing`] | Account balances |

pub mod billing;
pub mod client;
pub mod invites;
pub mod keys;
pub mod members;
pub mod projects;
pub mod transport;
pub mod usage;

// Re-export main types for convenience
pub use billing::Balance;
pub use client::{Deepgram, DeepgramBuilder};
pub use invites::{Invite, NewInvite};
pub use keys::{ApiKey, CreatedKey, NewKey};
pub use members::Member;
pub use projects::{Project, ProjectUpdate};
pub use usage::{
    FieldsOptions, RequestOptions, UsageFields, UsageOptions, UsageRequest, UsageRequests,
    UsageSummary,
};

/// Result type alias for the library
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for the library
pub mod error;
pub use error::{Error, ErrorKind};
