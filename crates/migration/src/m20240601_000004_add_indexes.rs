use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Influencer: index on manager_id for the manager filter
        manager
            .create_index(
                Index::create()
                    .name("idx_influencer_manager")
                    .table(Influencer::Table)
                    .col(Influencer::ManagerId)
                    .to_owned(),
            )
            .await?;

        // Influencer: default ordering
        manager
            .create_index(
                Index::create()
                    .name("idx_influencer_created_at")
                    .table(Influencer::Table)
                    .col(Influencer::CreatedAt)
                    .to_owned(),
            )
            .await?;

        // SocialMediaAccount: composite unique (influencer_id, platform, username)
        manager
            .create_index(
                Index::create()
                    .name("uniq_account_influencer_platform_username")
                    .table(SocialMediaAccount::Table)
                    .col(SocialMediaAccount::InfluencerId)
                    .col(SocialMediaAccount::Platform)
                    .col(SocialMediaAccount::Username)
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(Index::drop().name("idx_influencer_manager").table(Influencer::Table).to_owned())
            .await?;
        manager
            .drop_index(Index::drop().name("idx_influencer_created_at").table(Influencer::Table).to_owned())
            .await?;
        manager
            .drop_index(
                Index::drop()
                    .name("uniq_account_influencer_platform_username")
                    .table(SocialMediaAccount::Table)
                    .to_owned(),
            )
            .await
    }
}

#[derive(DeriveIden)]
enum Influencer { Table, ManagerId, CreatedAt }

#[derive(DeriveIden)]
enum SocialMediaAccount { Table, InfluencerId, Platform, Username }
