use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Sites::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Sites::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Sites::Name).string().not_null())
                    .col(ColumnDef::new(Sites::Latitude).double().not_null())
                    .col(ColumnDef::new(Sites::Longitude).double().not_null())
                    .col(ColumnDef::new(Sites::Altitude).double().null())
                    .col(ColumnDef::new(Sites::HorizontalAccuracy).double().null())
                    .col(ColumnDef::new(Sites::VerticalAccuracy).double().null())
                    .col(ColumnDef::new(Sites::OrganizationId).uuid().not_null())
                    .col(ColumnDef::new(Sites::UserId).uuid().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .from(Sites::Table, Sites::OrganizationId)
                            .to(Organizations::Table, Organizations::Id)
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(Sites::Table, Sites::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_sites_organization_id")
                    .table(Sites::Table)
                    .col(Sites::OrganizationId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Sites::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Sites {
    Table,
    Id,
    Name,
    Latitude,
    Longitude,
    Altitude,
    HorizontalAccuracy,
    VerticalAccuracy,
    OrganizationId,
    UserId,
}

#[derive(DeriveIden)]
enum Organizations {
    Table,
    Id,
}

#[derive(DeriveIden)]
enum Users {
    Table,
    Id,
}
