//! # Keygen Ops
//!
//! Key pair generation for datasite setup.
//!
//! Callers depend on the [`KeyProvider`] trait. The default implementation,
//! [`SshKeygenProvider`], shells out to `ssh-keygen` and owns executable
//! resolution, argument construction, and error normalization. A native
//! crypto implementation can replace it without touching callers.

mod command_runner;
mod error;
mod provider;

pub use command_runner::{CommandRunOutput, KeygenCommandRunner};
pub use error::KeygenError;
pub use provider::{KeyProvider, KeySpec, SshKeygenProvider};
