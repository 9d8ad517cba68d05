//! Create `influencer` table with a nullable FK to `employee`.
//!
//! Removing an employee sets `manager_id` to NULL instead of deleting influencers.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Influencer::Table)
                    .if_not_exists()
                    .col(uuid(Influencer::Id).primary_key())
                    .col(string_len(Influencer::FirstName, 50).not_null())
                    .col(string_len(Influencer::LastName, 50).not_null())
                    .col(ColumnDef::new(Influencer::ManagerId).uuid().null())
                    .col(timestamp_with_time_zone(Influencer::CreatedAt).not_null())
                    .col(timestamp_with_time_zone(Influencer::UpdatedAt).not_null())
                    .col(
                        ColumnDef::new(Influencer::DeletedAt)
                            .timestamp_with_time_zone()
                            .null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_influencer_manager")
                            .from(Influencer::Table, Influencer::ManagerId)
                            .to(Employee::Table, Employee::Id)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Influencer::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Influencer { Table, Id, FirstName, LastName, ManagerId, CreatedAt, UpdatedAt, DeletedAt }

#[derive(DeriveIden)]
enum Employee { Table, Id }
