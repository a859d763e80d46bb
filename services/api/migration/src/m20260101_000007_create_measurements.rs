use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Measurements::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Measurements::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Measurements::Value).double().not_null())
                    .col(
                        ColumnDef::new(Measurements::AbioticFactorId)
                            .uuid()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Measurements::MeasurementUnitId)
                            .uuid()
                            .not_null(),
                    )
                    .col(ColumnDef::new(Measurements::SurveyId).uuid().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .from(Measurements::Table, Measurements::SurveyId)
                            .to(Surveys::Table, Surveys::Id)
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(Measurements::Table, Measurements::AbioticFactorId)
                            .to(AbioticFactors::Table, AbioticFactors::Id)
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(Measurements::Table, Measurements::MeasurementUnitId)
                            .to(MeasurementUnits::Table, MeasurementUnits::Id)
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_measurements_survey_id")
                    .table(Measurements::Table)
                    .col(Measurements::SurveyId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Measurements::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Measurements {
    Table,
    Id,
    Value,
    AbioticFactorId,
    MeasurementUnitId,
    SurveyId,
}

#[derive(DeriveIden)]
enum Surveys {
    Table,
    Id,
}

#[derive(DeriveIden)]
enum AbioticFactors {
    Table,
    Id,
}

#[derive(DeriveIden)]
enum MeasurementUnits {
    Table,
    Id,
}
