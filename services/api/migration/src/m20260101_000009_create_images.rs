use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Images::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Images::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Images::Base64Encoded).text().not_null())
                    .col(ColumnDef::new(Images::Description).string().null())
                    .col(ColumnDef::new(Images::ImageTypeId).uuid().not_null())
                    .col(ColumnDef::new(Images::SurveyId).uuid().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .from(Images::Table, Images::SurveyId)
                            .to(Surveys::Table, Surveys::Id)
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(Images::Table, Images::ImageTypeId)
                            .to(ImageTypes::Table, ImageTypes::Id)
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Images::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Images {
    Table,
    Id,
    Base64Encoded,
    Description,
    ImageTypeId,
    SurveyId,
}

#[derive(DeriveIden)]
enum Surveys {
    Table,
    Id,
}

#[derive(DeriveIden)]
enum ImageTypes {
    Table,
    Id,
}
