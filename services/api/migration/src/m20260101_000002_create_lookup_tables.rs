use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.create_table(lookup_table(Roles::Table)).await?;
        manager.create_table(lookup_table(AbioticFactors::Table)).await?;
        manager.create_table(lookup_table(MeasurementUnits::Table)).await?;
        manager.create_table(lookup_table(ImageTypes::Table)).await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(ImageTypes::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(MeasurementUnits::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(AbioticFactors::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Roles::Table).to_owned())
            .await
    }
}

/// Every lookup table has the same `(id, unique name)` shape.
fn lookup_table<T: IntoIden + 'static>(table: T) -> TableCreateStatement {
    Table::create()
        .table(table)
        .if_not_exists()
        .col(ColumnDef::new(Lookup::Id).uuid().not_null().primary_key())
        .col(ColumnDef::new(Lookup::Name).string().not_null().unique_key())
        .to_owned()
}

#[derive(DeriveIden)]
enum Lookup {
    Id,
    Name,
}

#[derive(DeriveIden)]
enum Roles {
    Table,
}

#[derive(DeriveIden)]
enum AbioticFactors {
    Table,
}

#[derive(DeriveIden)]
enum MeasurementUnits {
    Table,
}

#[derive(DeriveIden)]
enum ImageTypes {
    Table,
}
