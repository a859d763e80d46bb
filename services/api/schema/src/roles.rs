use sea_orm::entity::prelude::*;

/// Organization membership role, seeded from `RoleName`.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "roles")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    #[sea_orm(unique)]
    pub name: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::user_organization_roles::Entity")]
    UserOrganizationRoles,
}

impl Related<super::user_organization_roles::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::UserOrganizationRoles.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
