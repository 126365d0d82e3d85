use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Singleton by convention: a fixed-key row, replaced on every set.
        manager
            .create_table(
                Table::create()
                    .table(HeroImage::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(HeroImage::SingletonKey)
                            .text()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(HeroImage::ImageUrl).text().not_null())
                    .col(
                        ColumnDef::new(HeroImage::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(HeroImage::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum HeroImage {
    Table,
    SingletonKey,
    ImageUrl,
    UpdatedAt,
}
