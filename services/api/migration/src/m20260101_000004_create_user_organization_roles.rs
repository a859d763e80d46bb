use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(UserOrganizationRoles::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(UserOrganizationRoles::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(UserOrganizationRoles::UserId)
                            .uuid()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(UserOrganizationRoles::OrganizationId)
                            .uuid()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(UserOrganizationRoles::RoleId)
                            .uuid()
                            .not_null(),
                    )
                    // Membership rows go away with their user or organization.
                    .foreign_key(
                        ForeignKey::create()
                            .from(UserOrganizationRoles::Table, UserOrganizationRoles::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(
                                UserOrganizationRoles::Table,
                                UserOrganizationRoles::OrganizationId,
                            )
                            .to(Organizations::Table, Organizations::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(UserOrganizationRoles::Table, UserOrganizationRoles::RoleId)
                            .to(Roles::Table, Roles::Id)
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("uq_user_organization_roles_user_org_role")
                    .table(UserOrganizationRoles::Table)
                    .col(UserOrganizationRoles::UserId)
                    .col(UserOrganizationRoles::OrganizationId)
                    .col(UserOrganizationRoles::RoleId)
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(UserOrganizationRoles::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum UserOrganizationRoles {
    Table,
    Id,
    UserId,
    OrganizationId,
    RoleId,
}

#[derive(DeriveIden)]
enum Users {
    Table,
    Id,
}

#[derive(DeriveIden)]
enum Organizations {
    Table,
    Id,
}

#[derive(DeriveIden)]
enum Roles {
    Table,
    Id,
}
