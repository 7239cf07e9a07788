//! Adapter between a host numeric runtime's ndarray objects and the
//! fixed-layout array descriptors consumed by generated native code.
//!
//! The host side is reached through the narrow [`host::HostObject`] /
//! [`host::HostRuntime`] traits, so the validation and conversion logic
//! is testable against a mock runtime. Descriptors are always views:
//! they borrow the host-owned buffer and never free it.

pub mod convert;
pub mod descriptor;
pub mod dtype;
pub mod error;
pub mod host;
pub mod layout;
pub mod scalar;
pub mod validate;
