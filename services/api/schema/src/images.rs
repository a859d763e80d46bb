use sea_orm::entity::prelude::*;

/// Survey photo stored inline as base64 text.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "images")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    #[sea_orm(column_type = "Text")]
    pub base64_encoded: String,
    pub description: Option<String>,
    pub image_type_id: Uuid,
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
        belongs_to = "super::image_types::Entity",
        from = "Column::ImageTypeId",
        to = "super::image_types::Column::Id"
    )]
    ImageType,
}

impl Related<super::surveys::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Survey.def()
    }
}

impl Related<super::image_types::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ImageType.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
