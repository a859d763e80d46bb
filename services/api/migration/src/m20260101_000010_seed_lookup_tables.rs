use sea_orm_migration::prelude::*;
use uuid::Uuid;

use ecodatum_domain::abiotic_factor::AbioticFactorName;
use ecodatum_domain::image_type::ImageTypeName;
use ecodatum_domain::measurement_unit::MeasurementUnitName;
use ecodatum_domain::role::RoleName;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        seed(manager, Roles::Table, RoleName::ALL.iter().map(|n| n.as_str())).await?;
        seed(
            manager,
            AbioticFactors::Table,
            AbioticFactorName::ALL.iter().map(|n| n.as_str()),
        )
        .await?;
        seed(
            manager,
            MeasurementUnits::Table,
            MeasurementUnitName::ALL.iter().map(|n| n.as_str()),
        )
        .await?;
        seed(
            manager,
            ImageTypes::Table,
            ImageTypeName::ALL.iter().map(|n| n.as_str()),
        )
        .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .exec_stmt(Query::delete().from_table(ImageTypes::Table).to_owned())
            .await?;
        manager
            .exec_stmt(Query::delete().from_table(MeasurementUnits::Table).to_owned())
            .await?;
        manager
            .exec_stmt(Query::delete().from_table(AbioticFactors::Table).to_owned())
            .await?;
        manager
            .exec_stmt(Query::delete().from_table(Roles::Table).to_owned())
            .await
    }
}

async fn seed<T, I>(manager: &SchemaManager<'_>, table: T, names: I) -> Result<(), DbErr>
where
    T: IntoIden + 'static,
    I: IntoIterator<Item = &'static str>,
{
    manager.exec_stmt(seed_statement(table, names)?).await
}

/// One multi-row insert per lookup table. Names that are already present are kept.
fn seed_statement<T, I>(table: T, names: I) -> Result<InsertStatement, DbErr>
where
    T: IntoIden + 'static,
    I: IntoIterator<Item = &'static str>,
{
    let mut insert = Query::insert();
    insert
        .into_table(table)
        .columns([Lookup::Id, Lookup::Name])
        .on_conflict(OnConflict::column(Lookup::Name).do_nothing().to_owned());
    for name in names {
        insert
            .values([Uuid::now_v7().into(), name.into()])
            .map_err(|e| DbErr::Custom(e.to_string()))?;
    }
    Ok(insert.to_owned())
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
