//! Well-known metadata keys.
//!
//! Metadata is free-form, but a few keys are written by the resource layer
//! and the coordinator and read by downstream components.

/// Marks a destination that was supplied by the operator rather than
/// assigned by the coordinator. Written as the string `"true"`.
pub const IS_USER_MANAGED_DESTINATION: &str = "system.IsUserManagedDestination";

/// Creation time in epoch milliseconds, stamped by the coordinator during
/// initialization.
pub const CREATION_TIMESTAMP: &str = "system.creation.ms";

/// The metadata value used for boolean flags.
pub const TRUE: &str = "true";
