//! User identity constants.

use uuid::Uuid;

/// Identifier reserved for the root user.
///
/// Whoever holds this id bypasses organization membership checks, provided the
/// persisted row still matches the configured name and email.
pub const ROOT_USER_ID: Uuid = Uuid::from_u128(1);
