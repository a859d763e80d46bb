pub mod access;
pub mod image;
pub mod lookup;
pub mod measurement;
pub mod note;
pub mod organization;
pub mod site;
pub mod survey;
pub mod user;
pub mod visibility;

use crate::domain::repository::{PasswordHasher, Store};
use crate::domain::types::RootUserConfig;
use crate::error::ApiError;

use self::access::AccessControl;

/// Single entry point for reading and changing EcoDatum entities.
///
/// Writes run in a fixed order: referenced rows must exist, then the caller's
/// membership is checked where the operation belongs to an organization, then one
/// persistence write happens and the stored entity is returned. Reads carry no access
/// check; callers consult [`AccessControl`] before exposing results.
#[derive(Clone)]
pub struct ModelManager<R, H> {
    pub repo: R,
    pub hasher: H,
    pub access: AccessControl<R>,
}

impl<R: Store, H: PasswordHasher> ModelManager<R, H> {
    pub fn new(repo: R, hasher: H, root_user: RootUserConfig) -> Self {
        let access = AccessControl::new(repo.clone(), root_user);
        Self {
            repo,
            hasher,
            access,
        }
    }
}

/// Turn an absent value into `error`.
pub fn expect<T>(value: Option<T>, error: ApiError) -> Result<T, ApiError> {
    value.ok_or(error)
}
