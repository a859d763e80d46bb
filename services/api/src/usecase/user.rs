use uuid::Uuid;

use crate::domain::repository::{PasswordHasher, Store};
use crate::domain::types::{Measurement, Survey, User};
use crate::error::ApiError;
use crate::usecase::{ModelManager, expect};

pub struct CreateUserInput {
    pub name: String,
    pub email: String,
    pub password: String,
}

#[derive(Default)]
pub struct UpdateUserInput {
    pub name: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
}

impl<R: Store, H: PasswordHasher> ModelManager<R, H> {
    // ── Create ───────────────────────────────────────────────────────────────

    pub async fn create_user(&self, input: CreateUserInput) -> Result<User, ApiError> {
        validate_user_fields(&input.name, &input.email, &input.password)?;
        if self.repo.find_user_by_email(&input.email).await?.is_some() {
            return Err(ApiError::EmailAlreadyExists);
        }
        let user = User {
            id: Uuid::now_v7(),
            name: input.name,
            email: input.email,
            password: self.hasher.hash(&input.password).await?,
        };
        self.repo.insert_user(&user).await?;
        tracing::info!(user_id = %user.id, "user created");
        Ok(user)
    }

    /// Insert the configured root user if absent, or check the stored one against
    /// configuration.
    pub async fn ensure_root_user(&self, password: &str) -> Result<User, ApiError> {
        let root = &self.access.root_user;
        if let Some(stored) = self.repo.find_user(root.id).await? {
            if !root.matches(&stored) {
                return Err(ApiError::RootUserMismatch);
            }
            return Ok(stored);
        }
        validate_user_fields(&root.name, &root.email, password)?;
        if self.repo.find_user_by_email(&root.email).await?.is_some() {
            return Err(ApiError::EmailAlreadyExists);
        }
        let user = User {
            id: root.id,
            name: root.name.clone(),
            email: root.email.clone(),
            password: self.hasher.hash(password).await?,
        };
        self.repo.insert_user(&user).await?;
        tracing::info!(user_id = %user.id, "root user created");
        Ok(user)
    }

    // ── Read ─────────────────────────────────────────────────────────────────

    pub async fn find_user(&self, id: Uuid) -> Result<User, ApiError> {
        expect(self.repo.find_user(id).await?, ApiError::UserNotFound)
    }

    pub async fn find_user_by_email(&self, email: &str) -> Result<User, ApiError> {
        expect(
            self.repo.find_user_by_email(email).await?,
            ApiError::UserNotFound,
        )
    }

    pub async fn list_users(&self) -> Result<Vec<User>, ApiError> {
        self.repo.list_users().await
    }

    /// Creator of the survey.
    pub async fn find_survey_owner(&self, survey: &Survey) -> Result<User, ApiError> {
        self.find_user(survey.user_id).await
    }

    /// Creator of the survey the measurement was taken in.
    pub async fn find_measurement_owner(
        &self,
        measurement: &Measurement,
    ) -> Result<User, ApiError> {
        let survey = expect(
            self.repo.find_survey(measurement.survey_id).await?,
            ApiError::SurveyNotFound,
        )?;
        self.find_survey_owner(&survey).await
    }

    // ── Update ───────────────────────────────────────────────────────────────

    pub async fn update_user(&self, id: Uuid, input: UpdateUserInput) -> Result<User, ApiError> {
        let mut user = self.find_user(id).await?;
        if user.id == self.access.root_user.id && (input.name.is_some() || input.email.is_some())
        {
            return Err(ApiError::PreconditionFailed(
                "root user identity is fixed by configuration",
            ));
        }
        if let Some(name) = input.name {
            if name.trim().is_empty() {
                return Err(ApiError::InvalidInput("name must not be empty"));
            }
            user.name = name;
        }
        if let Some(email) = input.email {
            if email.trim().is_empty() {
                return Err(ApiError::InvalidInput("email must not be empty"));
            }
            if let Some(other) = self.repo.find_user_by_email(&email).await? {
                if other.id != user.id {
                    return Err(ApiError::EmailAlreadyExists);
                }
            }
            user.email = email;
        }
        if let Some(password) = input.password {
            if password.is_empty() {
                return Err(ApiError::InvalidInput("password must not be empty"));
            }
            user.password = self.hasher.hash(&password).await?;
        }
        self.repo.update_user(&user).await?;
        tracing::info!(user_id = %user.id, "user updated");
        Ok(user)
    }

    // ── Delete ───────────────────────────────────────────────────────────────

    pub async fn delete_user(&self, id: Uuid) -> Result<(), ApiError> {
        let user = self.find_user(id).await?;
        if user.id == self.access.root_user.id {
            return Err(ApiError::PreconditionFailed("root user cannot be deleted"));
        }
        if self.repo.user_has_dependents(user.id).await? {
            return Err(ApiError::HasDependents("user"));
        }
        if !self.repo.delete_user(user.id).await? {
            return Err(ApiError::UserNotFound);
        }
        tracing::info!(user_id = %user.id, "user deleted");
        Ok(())
    }
}

fn validate_user_fields(name: &str, email: &str, password: &str) -> Result<(), ApiError> {
    if name.trim().is_empty() {
        return Err(ApiError::InvalidInput("name must not be empty"));
    }
    if email.trim().is_empty() {
        return Err(ApiError::InvalidInput("email must not be empty"));
    }
    if password.is_empty() {
        return Err(ApiError::InvalidInput("password must not be empty"));
    }
    Ok(())
}
