use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "measurements")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub value: f64,
    pub abiotic_factor_id: Uuid,
    pub measurement_unit_id: Uuid,
    pub survey_id: Uuid,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::surveys::Entity",
        from = "Column::SurveyId",
        to = "super::surveys::Column::Id"
    )]
    Survey,
    #[sea_orm(
        belongs_to = "super::abiotic_factors::Entity",
        from = "Column::AbioticFactorId",
        to = "super::abiotic_factors::Column::Id"
    )]
    AbioticFactor,
    #[sea_orm(
        belongs_to = "super::measurement_units::Entity",
        from = "Column::MeasurementUnitId",
        to = "super::measurement_units::Column::Id"
    )]
    MeasurementUnit,
}

impl Related<super::surveys::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Survey.def()
    }
}

impl Related<super::abiotic_factors::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::AbioticFactor.def()
    }
}

impl Related<super::measurement_units::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::MeasurementUnit.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
