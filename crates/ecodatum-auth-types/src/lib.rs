//! Authentication types shared across EcoDatum services.
//!
//! Token issuance lives in the gateway; services only see the identity it injects.

pub mod identity;

pub use identity::{IdentityHeaders, USER_ID_HEADER};
