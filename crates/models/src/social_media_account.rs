use sea_orm::{entity::prelude::*, sea_query::ForeignKeyAction, QueryOrder, Set};
use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::{influencer, platform::Platform};

pub const MAX_USERNAME_LEN: usize = 50;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "social_media_account")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub influencer_id: Uuid,
    pub platform: Platform,
    pub username: String,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
    pub deleted_at: Option<DateTimeWithTimeZone>,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {
    Influencer,
}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Relation::Influencer => Entity::belongs_to(influencer::Entity)
                .from(Column::InfluencerId)
                .to(influencer::Column::Id)
                .on_delete(ForeignKeyAction::Cascade)
                .into(),
        }
    }
}

impl Related<influencer::Entity> for Entity {
    fn to() -> RelationDef { Relation::Influencer.def() }
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

/// Whether `influencer_id` already owns the exact (platform, username) pair.
pub async fn exists<C: ConnectionTrait>(
    db: &C,
    influencer_id: Uuid,
    platform: Platform,
    username: &str,
) -> Result<bool, DbErr> {
    let found = Entity::find()
        .filter(Column::InfluencerId.eq(influencer_id))
        .filter(Column::Platform.eq(platform))
        .filter(Column::Username.eq(username))
        .one(db)
        .await?;
    Ok(found.is_some())
}

pub async fn insert<C: ConnectionTrait>(
    db: &C,
    influencer_id: Uuid,
    platform: Platform,
    username: &str,
) -> Result<Model, DbErr> {
    ActiveModel {
        influencer_id: Set(influencer_id),
        platform: Set(platform),
        username: Set(username.to_string()),
        deleted_at: Set(None),
        ..Default::default()
    }
    .insert(db)
    .await
}

pub async fn delete_for_influencer<C: ConnectionTrait>(db: &C, influencer_id: Uuid) -> Result<u64, DbErr> {
    let res = Entity::delete_many()
        .filter(Column::InfluencerId.eq(influencer_id))
        .exec(db)
        .await?;
    Ok(res.rows_affected)
}

/// Accounts of the given influencers in default order.
pub async fn list_for_influencers<C: ConnectionTrait>(db: &C, influencer_ids: &[Uuid]) -> Result<Vec<Model>, DbErr> {
    if influencer_ids.is_empty() {
        return Ok(Vec::new());
    }
    Entity::find()
        .filter(Column::InfluencerId.is_in(influencer_ids.iter().copied()))
        .order_by_asc(Column::CreatedAt)
        .order_by_asc(Column::Id)
        .all(db)
        .await
}
