//! # Signup Sample Application
//!
//! Account registration built from endofunk's containers.
//!
//! ## Overview
//!
//! A signup request arrives as JSON and passes through three stages:
//!
//! 1. Parsing, where a malformed document is an [`Outcome::Failure`](endofunk::data::Outcome).
//! 2. Field validation, where every broken field is reported at once via
//!    [`Validation`](endofunk::data::Validation).
//! 3. Policy lookup, where limits such as the minimum password length come
//!    from a [`Reader`](endofunk::data::Reader) environment instead of
//!    function arguments.
//!
//! ## Module Structure
//!
//! - `error`: Field and workflow error types
//! - `input`: The JSON request and its parser
//! - `policy`: Site-wide signup rules
//! - `workflow`: Field validators and the registration pipeline

#![forbid(unsafe_code)]

pub mod error;
pub mod input;
pub mod policy;
pub mod workflow;

pub use error::{FieldError, SignupError};
pub use input::SignupRequest;
pub use policy::Policy;
pub use workflow::{Account, register};
