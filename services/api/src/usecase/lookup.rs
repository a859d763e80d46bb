use ecodatum_domain::abiotic_factor::AbioticFactorName;
use ecodatum_domain::image_type::ImageTypeName;
use ecodatum_domain::measurement_unit::MeasurementUnitName;
use ecodatum_domain::role::RoleName;

use crate::domain::repository::{PasswordHasher, Store};
use crate::domain::types::{AbioticFactor, ImageType, MeasurementUnit, Role};
use crate::error::ApiError;
use crate::usecase::{ModelManager, expect};

// Lookup rows are seeded by migration, so a missing one is an integrity failure.

impl<R: Store, H: PasswordHasher> ModelManager<R, H> {
    pub async fn get_role(&self, name: RoleName) -> Result<Role, ApiError> {
        expect(
            self.repo.get_role(name).await?,
            ApiError::PreconditionFailed("role is not seeded"),
        )
    }

    pub async fn get_abiotic_factor(
        &self,
        name: AbioticFactorName,
    ) -> Result<AbioticFactor, ApiError> {
        expect(
            self.repo.get_abiotic_factor(name).await?,
            ApiError::PreconditionFailed("abiotic factor is not seeded"),
        )
    }

    pub async fn get_measurement_unit(
        &self,
        name: MeasurementUnitName,
    ) -> Result<MeasurementUnit, ApiError> {
        expect(
            self.repo.get_measurement_unit(name).await?,
            ApiError::PreconditionFailed("measurement unit is not seeded"),
        )
    }

    pub async fn get_image_type(&self, name: ImageTypeName) -> Result<ImageType, ApiError> {
        expect(
            self.repo.get_image_type(name).await?,
            ApiError::PreconditionFailed("image type is not seeded"),
        )
    }

    pub async fn list_roles(&self) -> Result<Vec<Role>, ApiError> {
        self.repo.list_roles().await
    }

    pub async fn list_abiotic_factors(&self) -> Result<Vec<AbioticFactor>, ApiError> {
        self.repo.list_abiotic_factors().await
    }

    pub async fn list_measurement_units(&self) -> Result<Vec<MeasurementUnit>, ApiError> {
        self.repo.list_measurement_units().await
    }

    pub async fn list_image_types(&self) -> Result<Vec<ImageType>, ApiError> {
        self.repo.list_image_types().await
    }
}
