//! HTTP plumbing shared by EcoDatum services.

pub mod health;
pub mod middleware;
pub mod serde;
pub mod tracing;
