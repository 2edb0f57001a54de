//! Application-level configuration.
//!
//! This module provides configuration types that control how use cases behave:
//!
//! - [`RemoteSourceParams`]: request fan-out for the remote vote source

pub mod source_params;

pub use source_params::RemoteSourceParams;
