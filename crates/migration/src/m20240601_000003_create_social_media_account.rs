//! Create `social_media_account` table owned by `influencer` (cascade delete).
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(SocialMediaAccount::Table)
                    .if_not_exists()
                    .col(uuid(SocialMediaAccount::Id).primary_key())
                    .col(uuid(SocialMediaAccount::InfluencerId).not_null())
                    .col(string_len(SocialMediaAccount::Platform, 10).not_null())
                    .col(string_len(SocialMediaAccount::Username, 50).not_null())
                    .col(timestamp_with_time_zone(SocialMediaAccount::CreatedAt).not_null())
                    .col(timestamp_with_time_zone(SocialMediaAccount::UpdatedAt).not_null())
                    .col(
                        ColumnDef::new(SocialMediaAccount::DeletedAt)
                            .timestamp_with_time_zone()
                            .null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_account_influencer")
                            .from(SocialMediaAccount::Table, SocialMediaAccount::InfluencerId)
                            .to(Influencer::Table, Influencer::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(SocialMediaAccount::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum SocialMediaAccount {
    Table,
    Id,
    InfluencerId,
    Platform,
    Username,
    CreatedAt,
    UpdatedAt,
    DeletedAt,
}

#[derive(DeriveIden)]
enum Influencer { Table, Id }
