use anyhow::Context as _;
use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder, SqlErr, TransactionTrait, sea_query::Query,
};
use uuid::Uuid;

use ecodatum_api_schema::{
    abiotic_factors, image_types, images, measurement_units, measurements, notes, organizations,
    roles, sites, surveys, user_organization_roles, users,
};
use ecodatum_domain::abiotic_factor::AbioticFactorName;
use ecodatum_domain::image_type::ImageTypeName;
use ecodatum_domain::measurement_unit::MeasurementUnitName;
use ecodatum_domain::role::RoleName;

use crate::domain::repository::{
    ImageRepository, LookupRepository, MeasurementRepository, MembershipRepository,
    NoteRepository, OrganizationRepository, SiteRepository, SurveyRepository, UserRepository,
};
use crate::domain::types::{
    AbioticFactor, Image, ImageType, Measurement, MeasurementUnit, Note, Organization, Role,
    Site, Survey, User, UserOrganizationRole,
};
use crate::error::ApiError;

/// PostgreSQL-backed store implementing every repository port.
#[derive(Clone)]
pub struct DbStore {
    pub db: DatabaseConnection,
}

fn is_unique_violation(err: &DbErr) -> bool {
    matches!(err.sql_err(), Some(SqlErr::UniqueConstraintViolation(_)))
}

// ── Users ────────────────────────────────────────────────────────────────────

impl UserRepository for DbStore {
    async fn find_user(&self, id: Uuid) -> Result<Option<User>, ApiError> {
        let model = users::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .context("find user by id")?;
        Ok(model.map(user_from_model))
    }

    async fn find_user_by_email(&self, email: &str) -> Result<Option<User>, ApiError> {
        let model = users::Entity::find()
            .filter(users::Column::Email.eq(email))
            .one(&self.db)
            .await
            .context("find user by email")?;
        Ok(model.map(user_from_model))
    }

    async fn list_users(&self) -> Result<Vec<User>, ApiError> {
        let models = users::Entity::find()
            .order_by_asc(users::Column::Id)
            .all(&self.db)
            .await
            .context("list users")?;
        Ok(models.into_iter().map(user_from_model).collect())
    }

    async fn insert_user(&self, user: &User) -> Result<(), ApiError> {
        let result = user_active_model(user).insert(&self.db).await;
        match result {
            Ok(_) => Ok(()),
            Err(e) if is_unique_violation(&e) => Err(ApiError::EmailAlreadyExists),
            Err(e) => Err(anyhow::Error::new(e).context("insert user").into()),
        }
    }

    async fn update_user(&self, user: &User) -> Result<(), ApiError> {
        let result = user_active_model(user).update(&self.db).await;
        match result {
            Ok(_) => Ok(()),
            Err(e) if is_unique_violation(&e) => Err(ApiError::EmailAlreadyExists),
            Err(e) => Err(anyhow::Error::new(e).context("update user").into()),
        }
    }

    async fn delete_user(&self, id: Uuid) -> Result<bool, ApiError> {
        let deleted = self
            .db
            .transaction::<_, bool, DbErr>(|txn| {
                Box::pin(async move {
                    user_organization_roles::Entity::delete_many()
                        .filter(user_organization_roles::Column::UserId.eq(id))
                        .exec(txn)
                        .await?;
                    let result = users::Entity::delete_by_id(id).exec(txn).await?;
                    Ok(result.rows_affected > 0)
                })
            })
            .await
            .context("delete user")?;
        Ok(deleted)
    }

    async fn user_has_dependents(&self, id: Uuid) -> Result<bool, ApiError> {
        let sites = sites::Entity::find()
            .filter(sites::Column::UserId.eq(id))
            .count(&self.db)
            .await
            .context("count sites by creator")?;
        if sites > 0 {
            return Ok(true);
        }
        let surveys = surveys::Entity::find()
            .filter(surveys::Column::UserId.eq(id))
            .count(&self.db)
            .await
            .context("count surveys by creator")?;
        Ok(surveys > 0)
    }
}

fn user_active_model(user: &User) -> users::ActiveModel {
    users::ActiveModel {
        id: Set(user.id),
        name: Set(user.name.clone()),
        email: Set(user.email.clone()),
        password: Set(user.password.clone()),
    }
}

fn user_from_model(model: users::Model) -> User {
    User {
        id: model.id,
        name: model.name,
        email: model.email,
        password: model.password,
    }
}

// ── Organizations ────────────────────────────────────────────────────────────

impl OrganizationRepository for DbStore {
    async fn find_organization(&self, id: Uuid) -> Result<Option<Organization>, ApiError> {
        let model = organizations::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .context("find organization by id")?;
        Ok(model.map(organization_from_model))
    }

    async fn list_organizations(&self) -> Result<Vec<Organization>, ApiError> {
        let models = organizations::Entity::find()
            .order_by_asc(organizations::Column::Id)
            .all(&self.db)
            .await
            .context("list organizations")?;
        Ok(models.into_iter().map(organization_from_model).collect())
    }

    async fn list_organizations_by_user(
        &self,
        user_id: Uuid,
    ) -> Result<Vec<Organization>, ApiError> {
        let memberships = Query::select()
            .column(user_organization_roles::Column::OrganizationId)
            .from(user_organization_roles::Entity)
            .and_where(user_organization_roles::Column::UserId.eq(user_id))
            .to_owned();
        let models = organizations::Entity::find()
            .filter(organizations::Column::Id.in_subquery(memberships))
            .order_by_asc(organizations::Column::Id)
            .all(&self.db)
            .await
            .context("list organizations by user")?;
        Ok(models.into_iter().map(organization_from_model).collect())
    }

    async fn insert_organization_with_member(
        &self,
        organization: &Organization,
        membership: &UserOrganizationRole,
    ) -> Result<(), ApiError> {
        let organization = organization.clone();
        let membership = membership.clone();
        self.db
            .transaction::<_, (), DbErr>(|txn| {
                Box::pin(async move {
                    organization_active_model(&organization).insert(txn).await?;
                    membership_active_model(&membership).insert(txn).await?;
                    Ok(())
                })
            })
            .await
            .context("insert organization with member")?;
        Ok(())
    }

    async fn update_organization(&self, organization: &Organization) -> Result<(), ApiError> {
        organization_active_model(organization)
            .update(&self.db)
            .await
            .context("update organization")?;
        Ok(())
    }

    async fn delete_organization(&self, id: Uuid) -> Result<bool, ApiError> {
        let deleted = self
            .db
            .transaction::<_, bool, DbErr>(|txn| {
                Box::pin(async move {
                    user_organization_roles::Entity::delete_many()
                        .filter(user_organization_roles::Column::OrganizationId.eq(id))
                        .exec(txn)
                        .await?;
                    let result = organizations::Entity::delete_by_id(id).exec(txn).await?;
                    Ok(result.rows_affected > 0)
                })
            })
            .await
            .context("delete organization")?;
        Ok(deleted)
    }

    async fn organization_has_sites(&self, id: Uuid) -> Result<bool, ApiError> {
        let count = sites::Entity::find()
            .filter(sites::Column::OrganizationId.eq(id))
            .count(&self.db)
            .await
            .context("count sites by organization")?;
        Ok(count > 0)
    }
}

fn organization_active_model(organization: &Organization) -> organizations::ActiveModel {
    organizations::ActiveModel {
        id: Set(organization.id),
        name: Set(organization.name.clone()),
        description: Set(organization.description.clone()),
        code: Set(organization.code.clone()),
    }
}

fn organization_from_model(model: organizations::Model) -> Organization {
    Organization {
        id: model.id,
        name: model.name,
        description: model.description,
        code: model.code,
    }
}

// ── Memberships ──────────────────────────────────────────────────────────────

impl MembershipRepository for DbStore {
    async fn find_membership(
        &self,
        user_id: Uuid,
        organization_id: Uuid,
        role_id: Option<Uuid>,
    ) -> Result<Option<UserOrganizationRole>, ApiError> {
        let mut query = user_organization_roles::Entity::find()
            .filter(user_organization_roles::Column::UserId.eq(user_id))
            .filter(user_organization_roles::Column::OrganizationId.eq(organization_id));
        if let Some(role_id) = role_id {
            query = query.filter(user_organization_roles::Column::RoleId.eq(role_id));
        }
        let model = query.one(&self.db).await.context("find membership")?;
        Ok(model.map(membership_from_model))
    }

    async fn insert_membership(&self, membership: &UserOrganizationRole) -> Result<(), ApiError> {
        membership_active_model(membership)
            .insert(&self.db)
            .await
            .context("insert membership")?;
        Ok(())
    }

    async fn list_memberships_by_organization(
        &self,
        organization_id: Uuid,
    ) -> Result<Vec<UserOrganizationRole>, ApiError> {
        let models = user_organization_roles::Entity::find()
            .filter(user_organization_roles::Column::OrganizationId.eq(organization_id))
            .order_by_asc(user_organization_roles::Column::Id)
            .all(&self.db)
            .await
            .context("list memberships by organization")?;
        Ok(models.into_iter().map(membership_from_model).collect())
    }
}

fn membership_active_model(
    membership: &UserOrganizationRole,
) -> user_organization_roles::ActiveModel {
    user_organization_roles::ActiveModel {
        id: Set(membership.id),
        user_id: Set(membership.user_id),
        organization_id: Set(membership.organization_id),
        role_id: Set(membership.role_id),
    }
}

fn membership_from_model(model: user_organization_roles::Model) -> UserOrganizationRole {
    UserOrganizationRole {
        id: model.id,
        user_id: model.user_id,
        organization_id: model.organization_id,
        role_id: model.role_id,
    }
}

// ── Lookups ──────────────────────────────────────────────────────────────────

impl LookupRepository for DbStore {
    async fn get_role(&self, name: RoleName) -> Result<Option<Role>, ApiError> {
        let model = roles::Entity::find()
            .filter(roles::Column::Name.eq(name.as_str()))
            .one(&self.db)
            .await
            .context("get role by name")?;
        model.map(role_from_model).transpose()
    }

    async fn get_abiotic_factor(
        &self,
        name: AbioticFactorName,
    ) -> Result<Option<AbioticFactor>, ApiError> {
        let model = abiotic_factors::Entity::find()
            .filter(abiotic_factors::Column::Name.eq(name.as_str()))
            .one(&self.db)
            .await
            .context("get abiotic factor by name")?;
        model.map(abiotic_factor_from_model).transpose()
    }

    async fn get_measurement_unit(
        &self,
        name: MeasurementUnitName,
    ) -> Result<Option<MeasurementUnit>, ApiError> {
        let model = measurement_units::Entity::find()
            .filter(measurement_units::Column::Name.eq(name.as_str()))
            .one(&self.db)
            .await
            .context("get measurement unit by name")?;
        model.map(measurement_unit_from_model).transpose()
    }

    async fn get_image_type(&self, name: ImageTypeName) -> Result<Option<ImageType>, ApiError> {
        let model = image_types::Entity::find()
            .filter(image_types::Column::Name.eq(name.as_str()))
            .one(&self.db)
            .await
            .context("get image type by name")?;
        model.map(image_type_from_model).transpose()
    }

    async fn find_role(&self, id: Uuid) -> Result<Option<Role>, ApiError> {
        let model = roles::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .context("find role by id")?;
        model.map(role_from_model).transpose()
    }

    async fn find_abiotic_factor(&self, id: Uuid) -> Result<Option<AbioticFactor>, ApiError> {
        let model = abiotic_factors::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .context("find abiotic factor by id")?;
        model.map(abiotic_factor_from_model).transpose()
    }

    async fn find_measurement_unit(
        &self,
        id: Uuid,
    ) -> Result<Option<MeasurementUnit>, ApiError> {
        let model = measurement_units::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .context("find measurement unit by id")?;
        model.map(measurement_unit_from_model).transpose()
    }

    async fn find_image_type(&self, id: Uuid) -> Result<Option<ImageType>, ApiError> {
        let model = image_types::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .context("find image type by id")?;
        model.map(image_type_from_model).transpose()
    }

    async fn list_roles(&self) -> Result<Vec<Role>, ApiError> {
        let models = roles::Entity::find()
            .order_by_asc(roles::Column::Name)
            .all(&self.db)
            .await
            .context("list roles")?;
        models.into_iter().map(role_from_model).collect()
    }

    async fn list_abiotic_factors(&self) -> Result<Vec<AbioticFactor>, ApiError> {
        let models = abiotic_factors::Entity::find()
            .order_by_asc(abiotic_factors::Column::Name)
            .all(&self.db)
            .await
            .context("list abiotic factors")?;
        models.into_iter().map(abiotic_factor_from_model).collect()
    }

    async fn list_measurement_units(&self) -> Result<Vec<MeasurementUnit>, ApiError> {
        let models = measurement_units::Entity::find()
            .order_by_asc(measurement_units::Column::Name)
            .all(&self.db)
            .await
            .context("list measurement units")?;
        models.into_iter().map(measurement_unit_from_model).collect()
    }

    async fn list_image_types(&self) -> Result<Vec<ImageType>, ApiError> {
        let models = image_types::Entity::find()
            .order_by_asc(image_types::Column::Name)
            .all(&self.db)
            .await
            .context("list image types")?;
        models.into_iter().map(image_type_from_model).collect()
    }
}

// Stored names that no longer parse mean the lookup table drifted from the code.

fn role_from_model(model: roles::Model) -> Result<Role, ApiError> {
    Ok(Role {
        id: model.id,
        name: model.name.parse::<RoleName>().context("parse role name")?,
    })
}

fn abiotic_factor_from_model(model: abiotic_factors::Model) -> Result<AbioticFactor, ApiError> {
    Ok(AbioticFactor {
        id: model.id,
        name: model
            .name
            .parse::<AbioticFactorName>()
            .context("parse abiotic factor name")?,
    })
}

fn measurement_unit_from_model(
    model: measurement_units::Model,
) -> Result<MeasurementUnit, ApiError> {
    Ok(MeasurementUnit {
        id: model.id,
        name: model
            .name
            .parse::<MeasurementUnitName>()
            .context("parse measurement unit name")?,
    })
}

fn image_type_from_model(model: image_types::Model) -> Result<ImageType, ApiError> {
    Ok(ImageType {
        id: model.id,
        name: model.name.parse::<ImageTypeName>().context("parse image type name")?,
    })
}

// ── Sites ────────────────────────────────────────────────────────────────────

impl SiteRepository for DbStore {
    async fn find_site(&self, id: Uuid) -> Result<Option<Site>, ApiError> {
        let model = sites::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .context("find site by id")?;
        Ok(model.map(site_from_model))
    }

    async fn list_sites(&self) -> Result<Vec<Site>, ApiError> {
        let models = sites::Entity::find()
            .order_by_asc(sites::Column::Id)
            .all(&self.db)
            .await
            .context("list sites")?;
        Ok(models.into_iter().map(site_from_model).collect())
    }

    async fn list_sites_by_organization(
        &self,
        organization_id: Uuid,
    ) -> Result<Vec<Site>, ApiError> {
        let models = sites::Entity::find()
            .filter(sites::Column::OrganizationId.eq(organization_id))
            .order_by_asc(sites::Column::Id)
            .all(&self.db)
            .await
            .context("list sites by organization")?;
        Ok(models.into_iter().map(site_from_model).collect())
    }

    async fn insert_site(&self, site: &Site) -> Result<(), ApiError> {
        site_active_model(site)
            .insert(&self.db)
            .await
            .context("insert site")?;
        Ok(())
    }

    async fn update_site(&self, site: &Site) -> Result<(), ApiError> {
        site_active_model(site)
            .update(&self.db)
            .await
            .context("update site")?;
        Ok(())
    }

    async fn delete_site(&self, id: Uuid) -> Result<bool, ApiError> {
        let result = sites::Entity::delete_by_id(id)
            .exec(&self.db)
            .await
            .context("delete site")?;
        Ok(result.rows_affected > 0)
    }

    async fn site_has_surveys(&self, id: Uuid) -> Result<bool, ApiError> {
        let count = surveys::Entity::find()
            .filter(surveys::Column::SiteId.eq(id))
            .count(&self.db)
            .await
            .context("count surveys by site")?;
        Ok(count > 0)
    }
}

fn site_active_model(site: &Site) -> sites::ActiveModel {
    sites::ActiveModel {
        id: Set(site.id),
        name: Set(site.name.clone()),
        latitude: Set(site.latitude),
        longitude: Set(site.longitude),
        altitude: Set(site.altitude),
        horizontal_accuracy: Set(site.horizontal_accuracy),
        vertical_accuracy: Set(site.vertical_accuracy),
        organization_id: Set(site.organization_id),
        user_id: Set(site.user_id),
    }
}

fn site_from_model(model: sites::Model) -> Site {
    Site {
        id: model.id,
        name: model.name,
        latitude: model.latitude,
        longitude: model.longitude,
        altitude: model.altitude,
        horizontal_accuracy: model.horizontal_accuracy,
        vertical_accuracy: model.vertical_accuracy,
        organization_id: model.organization_id,
        user_id: model.user_id,
    }
}

// ── Surveys ──────────────────────────────────────────────────────────────────

impl SurveyRepository for DbStore {
    async fn find_survey(&self, id: Uuid) -> Result<Option<Survey>, ApiError> {
        let model = surveys::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .context("find survey by id")?;
        Ok(model.map(survey_from_model))
    }

    async fn list_surveys(&self) -> Result<Vec<Survey>, ApiError> {
        let models = surveys::Entity::find()
            .order_by_desc(surveys::Column::Date)
            .all(&self.db)
            .await
            .context("list surveys")?;
        Ok(models.into_iter().map(survey_from_model).collect())
    }

    async fn list_surveys_by_site(&self, site_id: Uuid) -> Result<Vec<Survey>, ApiError> {
        let models = surveys::Entity::find()
            .filter(surveys::Column::SiteId.eq(site_id))
            .order_by_desc(surveys::Column::Date)
            .all(&self.db)
            .await
            .context("list surveys by site")?;
        Ok(models.into_iter().map(survey_from_model).collect())
    }

    async fn list_surveys_by_user(&self, user_id: Uuid) -> Result<Vec<Survey>, ApiError> {
        let memberships = Query::select()
            .column(user_organization_roles::Column::OrganizationId)
            .from(user_organization_roles::Entity)
            .and_where(user_organization_roles::Column::UserId.eq(user_id))
            .to_owned();
        let site_ids = Query::select()
            .column(sites::Column::Id)
            .from(sites::Entity)
            .and_where(sites::Column::OrganizationId.in_subquery(memberships))
            .to_owned();
        let models = surveys::Entity::find()
            .filter(surveys::Column::SiteId.in_subquery(site_ids))
            .order_by_desc(surveys::Column::Date)
            .all(&self.db)
            .await
            .context("list surveys by user")?;
        Ok(models.into_iter().map(survey_from_model).collect())
    }

    async fn insert_survey(&self, survey: &Survey) -> Result<(), ApiError> {
        survey_active_model(survey)
            .insert(&self.db)
            .await
            .context("insert survey")?;
        Ok(())
    }

    async fn update_survey(&self, survey: &Survey) -> Result<(), ApiError> {
        survey_active_model(survey)
            .update(&self.db)
            .await
            .context("update survey")?;
        Ok(())
    }

    async fn delete_survey(&self, id: Uuid) -> Result<bool, ApiError> {
        let result = surveys::Entity::delete_by_id(id)
            .exec(&self.db)
            .await
            .context("delete survey")?;
        Ok(result.rows_affected > 0)
    }

    async fn survey_has_records(&self, id: Uuid) -> Result<bool, ApiError> {
        let measurements = measurements::Entity::find()
            .filter(measurements::Column::SurveyId.eq(id))
            .count(&self.db)
            .await
            .context("count measurements by survey")?;
        let notes = notes::Entity::find()
            .filter(notes::Column::SurveyId.eq(id))
            .count(&self.db)
            .await
            .context("count notes by survey")?;
        let images = images::Entity::find()
            .filter(images::Column::SurveyId.eq(id))
            .count(&self.db)
            .await
            .context("count images by survey")?;
        Ok(measurements + notes + images > 0)
    }
}

fn survey_active_model(survey: &Survey) -> surveys::ActiveModel {
    surveys::ActiveModel {
        id: Set(survey.id),
        date: Set(survey.date),
        site_id: Set(survey.site_id),
        user_id: Set(survey.user_id),
    }
}

fn survey_from_model(model: surveys::Model) -> Survey {
    Survey {
        id: model.id,
        date: model.date,
        site_id: model.site_id,
        user_id: model.user_id,
    }
}

// ── Measurements ─────────────────────────────────────────────────────────────

impl MeasurementRepository for DbStore {
    async fn find_measurement(&self, id: Uuid) -> Result<Option<Measurement>, ApiError> {
        let model = measurements::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .context("find measurement by id")?;
        Ok(model.map(measurement_from_model))
    }

    async fn list_measurements_by_survey(
        &self,
        survey_id: Uuid,
    ) -> Result<Vec<Measurement>, ApiError> {
        let models = measurements::Entity::find()
            .filter(measurements::Column::SurveyId.eq(survey_id))
            .order_by_asc(measurements::Column::Id)
            .all(&self.db)
            .await
            .context("list measurements by survey")?;
        Ok(models.into_iter().map(measurement_from_model).collect())
    }

    async fn insert_measurement(&self, measurement: &Measurement) -> Result<(), ApiError> {
        measurement_active_model(measurement)
            .insert(&self.db)
            .await
            .context("insert measurement")?;
        Ok(())
    }

    async fn update_measurement(&self, measurement: &Measurement) -> Result<(), ApiError> {
        measurement_active_model(measurement)
            .update(&self.db)
            .await
            .context("update measurement")?;
        Ok(())
    }

    async fn delete_measurement(&self, id: Uuid) -> Result<bool, ApiError> {
        let result = measurements::Entity::delete_by_id(id)
            .exec(&self.db)
            .await
            .context("delete measurement")?;
        Ok(result.rows_affected > 0)
    }
}

fn measurement_active_model(measurement: &Measurement) -> measurements::ActiveModel {
    measurements::ActiveModel {
        id: Set(measurement.id),
        value: Set(measurement.value),
        abiotic_factor_id: Set(measurement.abiotic_factor_id),
        measurement_unit_id: Set(measurement.measurement_unit_id),
        survey_id: Set(measurement.survey_id),
    }
}

fn measurement_from_model(model: measurements::Model) -> Measurement {
    Measurement {
        id: model.id,
        value: model.value,
        abiotic_factor_id: model.abiotic_factor_id,
        measurement_unit_id: model.measurement_unit_id,
        survey_id: model.survey_id,
    }
}

// ── Notes ────────────────────────────────────────────────────────────────────

impl NoteRepository for DbStore {
    async fn find_note(&self, id: Uuid) -> Result<Option<Note>, ApiError> {
        let model = notes::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .context("find note by id")?;
        Ok(model.map(note_from_model))
    }

    async fn list_notes_by_survey(&self, survey_id: Uuid) -> Result<Vec<Note>, ApiError> {
        let models = notes::Entity::find()
            .filter(notes::Column::SurveyId.eq(survey_id))
            .order_by_asc(notes::Column::Id)
            .all(&self.db)
            .await
            .context("list notes by survey")?;
        Ok(models.into_iter().map(note_from_model).collect())
    }

    async fn insert_note(&self, note: &Note) -> Result<(), ApiError> {
        note_active_model(note)
            .insert(&self.db)
            .await
            .context("insert note")?;
        Ok(())
    }

    async fn update_note(&self, note: &Note) -> Result<(), ApiError> {
        note_active_model(note)
            .update(&self.db)
            .await
            .context("update note")?;
        Ok(())
    }

    async fn delete_note(&self, id: Uuid) -> Result<bool, ApiError> {
        let result = notes::Entity::delete_by_id(id)
            .exec(&self.db)
            .await
            .context("delete note")?;
        Ok(result.rows_affected > 0)
    }
}

fn note_active_model(note: &Note) -> notes::ActiveModel {
    notes::ActiveModel {
        id: Set(note.id),
        text: Set(note.text.clone()),
        survey_id: Set(note.survey_id),
    }
}

fn note_from_model(model: notes::Model) -> Note {
    Note {
        id: model.id,
        text: model.text,
        survey_id: model.survey_id,
    }
}

// ── Images ───────────────────────────────────────────────────────────────────

impl ImageRepository for DbStore {
    async fn find_image(&self, id: Uuid) -> Result<Option<Image>, ApiError> {
        let model = images::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .context("find image by id")?;
        Ok(model.map(image_from_model))
    }

    async fn list_images_by_survey(&self, survey_id: Uuid) -> Result<Vec<Image>, ApiError> {
        let models = images::Entity::find()
            .filter(images::Column::SurveyId.eq(survey_id))
            .order_by_asc(images::Column::Id)
            .all(&self.db)
            .await
            .context("list images by survey")?;
        Ok(models.into_iter().map(image_from_model).collect())
    }

    async fn insert_image(&self, image: &Image) -> Result<(), ApiError> {
        image_active_model(image)
            .insert(&self.db)
            .await
            .context("insert image")?;
        Ok(())
    }

    async fn update_image(&self, image: &Image) -> Result<(), ApiError> {
        image_active_model(image)
            .update(&self.db)
            .await
            .context("update image")?;
        Ok(())
    }

    async fn delete_image(&self, id: Uuid) -> Result<bool, ApiError> {
        let result = images::Entity::delete_by_id(id)
            .exec(&self.db)
            .await
            .context("delete image")?;
        Ok(result.rows_affected > 0)
    }
}

fn image_active_model(image: &Image) -> images::ActiveModel {
    images::ActiveModel {
        id: Set(image.id),
        base64_encoded: Set(image.base64_encoded.clone()),
        description: Set(image.description.clone()),
        image_type_id: Set(image.image_type_id),
        survey_id: Set(image.survey_id),
    }
}

fn image_from_model(model: images::Model) -> Image {
    Image {
        id: model.id,
        base64_encoded: model.base64_encoded,
        description: model.description,
        image_type_id: model.image_type_id,
        survey_id: model.survey_id,
    }
}
