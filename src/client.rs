//! Root client for the management API.
//!
//! Keep the public surface small and predictable: a cheap-to-clone handle
//! plus a builder. Implementation details live under `src/client/`.

mod builder;
mod core;

pub use builder::DeepgramBuilder;
pub use core::Deepgram;
