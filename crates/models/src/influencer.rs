use sea_orm::{entity::prelude::*, sea_query::{Expr, ForeignKeyAction}, Set};
use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::{employee, social_media_account};

/// Shared by employees and influencers.
pub const MAX_NAME_LEN: usize = 50;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "influencer")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub manager_id: Option<Uuid>,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
    pub deleted_at: Option<DateTimeWithTimeZone>,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {
    Manager,
    SocialMediaAccounts,
}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Relation::Manager => Entity::belongs_to(employee::Entity)
                .from(Column::ManagerId)
                .to(employee::Column::Id)
                .on_delete(ForeignKeyAction::SetNull)
                .into(),
            Relation::SocialMediaAccounts => Entity::has_many(social_media_account::Entity).into(),
        }
    }
}

impl Related<employee::Entity> for Entity {
    fn to() -> RelationDef { Relation::Manager.def() }
}

impl Related<social_media_account::Entity> for Entity {
    fn to() -> RelationDef { Relation::SocialMediaAccounts.def() }
}

#[async_trait::async_trait]
impl ActiveModelBehavior for ActiveModel {
    async fn before_save<C>(mut self, _db: &C, insert: bool) -> Result<Self, DbErr>
    where
        C: ConnectionTrait,
    {
        let now: DateTimeWithTimeZone = Utc::now().into();
        if insert {
            if self.id.is_not_set() { self.id = Set(Uuid::new_v4()); }
            if self.created_at.is_not_set() { self.created_at = Set(now); }
        }
        self.updated_at = Set(now);
        Ok(self)
    }
}

/// Detach every influencer managed by `manager_id`; returns the number of rows touched.
///
/// Bulk updates skip `before_save`, so `updated_at` is written here.
pub async fn clear_manager<C: ConnectionTrait>(db: &C, manager_id: Uuid) -> Result<u64, DbErr> {
    let now: DateTimeWithTimeZone = Utc::now().into();
    let res = Entity::update_many()
        .col_expr(Column::ManagerId, Expr::value(Option::<Uuid>::None))
        .col_expr(Column::UpdatedAt, Expr::value(now))
        .filter(Column::ManagerId.eq(manager_id))
        .exec(db)
        .await?;
    Ok(res.rows_affected)
}
