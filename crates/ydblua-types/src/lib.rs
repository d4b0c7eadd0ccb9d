//! Shared types for the ydb-lua bridge.
//!
//! This crate defines the C ABI structures exchanged with the YottaDB
//! external-call interface, the status codes returned to the host, the
//! flattened interpreter error, and the external-call table that binds
//! the bridge's entry points in the host.

mod abi;
pub mod callout;
mod error;
mod status;
mod version;

pub use abi::{copy_c_string, YdbInt, YdbString, OUTPUT_STRING_MAXIMUM_LENGTH};
pub use error::{ExecError, ExecResult};
pub use status::Status;
pub use version::{VERSION, VERSION_NUMBER};
