use sea_orm::DatabaseConnection;

use crate::domain::types::RootUserConfig;
use crate::infra::db::DbStore;
use crate::infra::password::BcryptHasher;
use crate::usecase::ModelManager;

pub type Manager = ModelManager<DbStore, BcryptHasher>;

/// Shared application state passed to every handler via axum `State`.
#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
    pub root_user: RootUserConfig,
}

impl AppState {
    pub fn store(&self) -> DbStore {
        DbStore {
            db: self.db.clone(),
        }
    }

    pub fn manager(&self) -> Manager {
        ModelManager::new(self.store(), BcryptHasher, self.root_user.clone())
    }
}
