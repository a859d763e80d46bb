use uuid::Uuid;

use ecodatum_domain::organization::is_valid_organization_code;
use ecodatum_domain::role::RoleName;

use crate::domain::repository::{PasswordHasher, Store};
use crate::domain::types::{Organization, Role, Site, Survey, User, UserOrganizationRole};
use crate::error::ApiError;
use crate::usecase::{ModelManager, expect};

pub struct CreateOrganizationInput {
    pub name: String,
    pub description: Option<String>,
    pub code: String,
}

#[derive(Default)]
pub struct UpdateOrganizationInput {
    pub name: Option<String>,
    pub description: Option<String>,
    pub code: Option<String>,
}

impl<R: Store, H: PasswordHasher> ModelManager<R, H> {
    // ── Create ───────────────────────────────────────────────────────────────

    /// Create an organization with `user` as its first ADMINISTRATOR.
    pub async fn create_organization(
        &self,
        user: &User,
        input: CreateOrganizationInput,
    ) -> Result<Organization, ApiError> {
        if !is_valid_organization_code(&input.code) {
            return Err(ApiError::InvalidOrganizationCode);
        }
        let user = self.find_user(user.id).await?;
        let role = self.get_role(RoleName::Administrator).await?;

        let organization = Organization {
            id: Uuid::now_v7(),
            name: input.name,
            description: input.description,
            code: input.code,
        };
        let membership = UserOrganizationRole {
            id: Uuid::now_v7(),
            user_id: user.id,
            organization_id: organization.id,
            role_id: role.id,
        };
        self.repo
            .insert_organization_with_member(&organization, &membership)
            .await?;
        tracing::info!(
            organization_id = %organization.id,
            user_id = %user.id,
            "organization created"
        );
        Ok(organization)
    }

    pub async fn add_user_to_organization(
        &self,
        user: &User,
        organization: &Organization,
        role: &Role,
    ) -> Result<UserOrganizationRole, ApiError> {
        let user = self.find_user(user.id).await?;
        let organization = self.find_organization(organization.id).await?;
        let role = expect(
            self.repo.find_role(role.id).await?,
            ApiError::LookupNotFound("role"),
        )?;
        if let Some(existing) = self
            .repo
            .find_membership(user.id, organization.id, Some(role.id))
            .await?
        {
            return Ok(existing);
        }
        let membership = UserOrganizationRole {
            id: Uuid::now_v7(),
            user_id: user.id,
            organization_id: organization.id,
            role_id: role.id,
        };
        self.repo.insert_membership(&membership).await?;
        tracing::info!(
            organization_id = %organization.id,
            user_id = %user.id,
            role = %role.name,
            "member added"
        );
        Ok(membership)
    }

    pub async fn add_user_to_organization_by_name(
        &self,
        user: &User,
        organization: &Organization,
        role: RoleName,
    ) -> Result<UserOrganizationRole, ApiError> {
        let role = self.get_role(role).await?;
        self.add_user_to_organization(user, organization, &role)
            .await
    }

    // ── Read ─────────────────────────────────────────────────────────────────

    pub async fn find_organization(&self, id: Uuid) -> Result<Organization, ApiError> {
        expect(
            self.repo.find_organization(id).await?,
            ApiError::OrganizationNotFound,
        )
    }

    pub async fn find_organization_for_site(&self, site: &Site) -> Result<Organization, ApiError> {
        self.access.organization_of_site(site).await
    }

    pub async fn find_organization_for_survey(
        &self,
        survey: &Survey,
    ) -> Result<Organization, ApiError> {
        self.access.organization_of_survey(survey).await
    }

    pub async fn list_organizations(&self) -> Result<Vec<Organization>, ApiError> {
        self.repo.list_organizations().await
    }

    pub async fn list_organizations_for_user(
        &self,
        user: &User,
    ) -> Result<Vec<Organization>, ApiError> {
        self.repo.list_organizations_by_user(user.id).await
    }

    pub async fn list_members(
        &self,
        organization: &Organization,
    ) -> Result<Vec<UserOrganizationRole>, ApiError> {
        self.repo
            .list_memberships_by_organization(organization.id)
            .await
    }

    // ── Update ───────────────────────────────────────────────────────────────

    pub async fn update_organization(
        &self,
        id: Uuid,
        input: UpdateOrganizationInput,
    ) -> Result<Organization, ApiError> {
        let mut organization = self.find_organization(id).await?;
        if let Some(code) = input.code {
            if !is_valid_organization_code(&code) {
                return Err(ApiError::InvalidOrganizationCode);
            }
            organization.code = code;
        }
        if let Some(name) = input.name {
            organization.name = name;
        }
        if let Some(description) = input.description {
            organization.description = Some(description);
        }
        self.repo.update_organization(&organization).await?;
        tracing::info!(organization_id = %organization.id, "organization updated");
        Ok(organization)
    }

    // ── Delete ───────────────────────────────────────────────────────────────

    pub async fn delete_organization(&self, id: Uuid) -> Result<(), ApiError> {
        let organization = self.find_organization(id).await?;
        if self.repo.organization_has_sites(organization.id).await? {
            return Err(ApiError::HasDependents("organization"));
        }
        if !self.repo.delete_organization(organization.id).await? {
            return Err(ApiError::OrganizationNotFound);
        }
        tracing::info!(organization_id = %organization.id, "organization deleted");
        Ok(())
    }
}
