use sea_orm::entity::prelude::*;

/// Organization owning sites through its members.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "organizations")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub code: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::user_organization_roles::Entity")]
    UserOrganizationRoles,
    #[sea_orm(has_many = "super::sites::Entity")]
    Sites,
}

impl Related<super::user_organization_roles::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::UserOrganizationRoles.def()
    }
}

impl Related<super::sites::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Sites.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
