use uuid::Uuid;

use ecodatum_domain::abiotic_factor::AbioticFactorName;
use ecodatum_domain::measurement_unit::MeasurementUnitName;

use crate::domain::repository::{PasswordHasher, Store};
use crate::domain::types::{AbioticFactor, Measurement, MeasurementUnit, Survey, User};
use crate::error::ApiError;
use crate::usecase::{ModelManager, expect};

#[derive(Default)]
pub struct UpdateMeasurementInput {
    pub value: Option<f64>,
    pub abiotic_factor_id: Option<Uuid>,
    pub measurement_unit_id: Option<Uuid>,
}

impl<R: Store, H: PasswordHasher> ModelManager<R, H> {
    // ── Create ───────────────────────────────────────────────────────────────

    pub async fn create_measurement(
        &self,
        user: &User,
        survey: &Survey,
        value: f64,
        abiotic_factor: &AbioticFactor,
        measurement_unit: &MeasurementUnit,
    ) -> Result<Measurement, ApiError> {
        if !value.is_finite() {
            return Err(ApiError::InvalidInput("measurement value must be finite"));
        }
        let survey = self.find_survey(survey.id).await?;
        let abiotic_factor = self.find_abiotic_factor(abiotic_factor.id).await?;
        let measurement_unit = self.find_measurement_unit(measurement_unit.id).await?;
        self.assert_survey_member(user, &survey).await?;

        let measurement = Measurement {
            id: Uuid::now_v7(),
            value,
            abiotic_factor_id: abiotic_factor.id,
            measurement_unit_id: measurement_unit.id,
            survey_id: survey.id,
        };
        self.repo.insert_measurement(&measurement).await?;
        tracing::info!(
            measurement_id = %measurement.id,
            survey_id = %measurement.survey_id,
            "measurement created"
        );
        Ok(measurement)
    }

    pub async fn create_measurement_by_name(
        &self,
        user: &User,
        survey: &Survey,
        value: f64,
        abiotic_factor: AbioticFactorName,
        measurement_unit: MeasurementUnitName,
    ) -> Result<Measurement, ApiError> {
        let abiotic_factor = self.get_abiotic_factor(abiotic_factor).await?;
        let measurement_unit = self.get_measurement_unit(measurement_unit).await?;
        self.create_measurement(user, survey, value, &abiotic_factor, &measurement_unit)
            .await
    }

    // ── Read ─────────────────────────────────────────────────────────────────

    pub async fn find_measurement(&self, id: Uuid) -> Result<Measurement, ApiError> {
        expect(
            self.repo.find_measurement(id).await?,
            ApiError::MeasurementNotFound,
        )
    }

    pub async fn list_measurements_for_survey(
        &self,
        survey: &Survey,
    ) -> Result<Vec<Measurement>, ApiError> {
        self.repo.list_measurements_by_survey(survey.id).await
    }

    // ── Update ───────────────────────────────────────────────────────────────

    pub async fn update_measurement(
        &self,
        id: Uuid,
        input: UpdateMeasurementInput,
    ) -> Result<Measurement, ApiError> {
        let mut measurement = self.find_measurement(id).await?;
        if let Some(value) = input.value {
            if !value.is_finite() {
                return Err(ApiError::InvalidInput("measurement value must be finite"));
            }
            measurement.value = value;
        }
        if let Some(id) = input.abiotic_factor_id {
            measurement.abiotic_factor_id = self.find_abiotic_factor(id).await?.id;
        }
        if let Some(id) = input.measurement_unit_id {
            measurement.measurement_unit_id = self.find_measurement_unit(id).await?.id;
        }
        self.repo.update_measurement(&measurement).await?;
        tracing::info!(measurement_id = %measurement.id, "measurement updated");
        Ok(measurement)
    }

    // ── Delete ───────────────────────────────────────────────────────────────

    pub async fn delete_measurement(&self, id: Uuid) -> Result<(), ApiError> {
        let measurement = self.find_measurement(id).await?;
        if !self.repo.delete_measurement(measurement.id).await? {
            return Err(ApiError::MeasurementNotFound);
        }
        tracing::info!(measurement_id = %measurement.id, "measurement deleted");
        Ok(())
    }

    // ── Helpers ──────────────────────────────────────────────────────────────

    async fn find_abiotic_factor(&self, id: Uuid) -> Result<AbioticFactor, ApiError> {
        expect(
            self.repo.find_abiotic_factor(id).await?,
            ApiError::LookupNotFound("abiotic factor"),
        )
    }

    async fn find_measurement_unit(&self, id: Uuid) -> Result<MeasurementUnit, ApiError> {
        expect(
            self.repo.find_measurement_unit(id).await?,
            ApiError::LookupNotFound("measurement unit"),
        )
    }

    /// Records under a survey may only be added by the root user or a member of the
    /// organization that owns the survey's site.
    pub(crate) async fn assert_survey_member(
        &self,
        user: &User,
        survey: &Survey,
    ) -> Result<(), ApiError> {
        let user = self.find_user(user.id).await?;
        if !self.access.can_access_survey(&user, survey).await? {
            return Err(ApiError::PreconditionFailed(
                "user does not belong to the survey's organization",
            ));
        }
        Ok(())
    }
}
