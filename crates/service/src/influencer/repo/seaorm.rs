use std::collections::HashMap;

use async_trait::async_trait;
use sea_orm::sea_query::{Expr, Func, LikeExpr};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, ConnectionTrait, DatabaseConnection, DbErr, EntityTrait, JoinType,
    QueryFilter, QueryOrder, QuerySelect, QueryTrait, RelationTrait, Set, TransactionTrait,
};
use tracing::{debug, info};
use uuid::Uuid;

use models::{employee, influencer, social_media_account};

use crate::employee::domain::EmployeeView;
use crate::errors::ServiceError;
use crate::influencer::domain::{
    InfluencerChanges, InfluencerView, ListFilter, NewInfluencer, SocialAccountView, ValidatedAccount,
};
use crate::influencer::repository::InfluencerRepository;
use crate::influencer::validator::{ACCOUNTS, INVALID_MANAGER};

const ACCOUNT_TAKEN: (&str, &str) = (ACCOUNTS, "The fields influencer, platform, username must make a unique set.");
const MANAGER_FK: (&str, &str) = ("manager_id", INVALID_MANAGER);

fn write_err(e: DbErr) -> ServiceError { ServiceError::from_write(e, ACCOUNT_TAKEN, MANAGER_FK) }

/// SeaORM-backed repository implementation.
pub struct SeaOrmInfluencerRepository {
    pub db: DatabaseConnection,
}

#[async_trait]
impl InfluencerRepository for SeaOrmInfluencerRepository {
    async fn list(&self, filter: &ListFilter) -> Result<Vec<InfluencerView>, ServiceError> {
        let terms = filter.search_terms();
        let mut query = influencer::Entity::find()
            .join(JoinType::LeftJoin, influencer::Relation::Manager.def())
            .apply_if(filter.manager_id, |q, id| q.filter(influencer::Column::ManagerId.eq(id)));
        for term in &terms {
            query = query.filter(term_matches(term));
        }
        let rows = query
            .order_by_asc(influencer::Column::CreatedAt)
            .order_by_asc(influencer::Column::Id)
            .all(&self.db)
            .await?;
        debug!(count = rows.len(), terms = terms.len(), "influencers_listed");
        Ok(assemble(&self.db, rows).await?)
    }

    async fn get(&self, id: Uuid) -> Result<Option<InfluencerView>, ServiceError> {
        let Some(row) = influencer::Entity::find_by_id(id).one(&self.db).await? else {
            return Ok(None);
        };
        Ok(assemble(&self.db, vec![row]).await?.pop())
    }

    async fn exists(&self, id: Uuid) -> Result<bool, ServiceError> {
        Ok(influencer::Entity::find_by_id(id).one(&self.db).await?.is_some())
    }

    async fn create(&self, new: NewInfluencer) -> Result<InfluencerView, ServiceError> {
        let txn = self.db.begin().await?;
        let mut row = influencer::ActiveModel {
            first_name: Set(new.first_name),
            last_name: Set(new.last_name),
            manager_id: Set(None),
            deleted_at: Set(None),
            ..Default::default()
        }
        .insert(&txn)
        .await
        .map_err(write_err)?;

        if let Some(manager_id) = new.manager_id {
            let mut am: influencer::ActiveModel = row.into();
            am.manager_id = Set(Some(manager_id));
            row = am.update(&txn).await.map_err(write_err)?;
        }
        insert_accounts(&txn, row.id, &new.accounts).await?;
        txn.commit().await?;

        info!(influencer_id = %row.id, accounts = new.accounts.len(), "influencer_created");
        self.reload(row.id).await
    }

    async fn update(&self, id: Uuid, changes: InfluencerChanges) -> Result<InfluencerView, ServiceError> {
        let txn = self.db.begin().await?;
        let mut am: influencer::ActiveModel = influencer::Entity::find_by_id(id)
            .one(&txn).await?
            .ok_or_else(|| ServiceError::not_found("influencer"))?
            .into();
        if let Some(v) = changes.first_name { am.first_name = Set(v); }
        if let Some(v) = changes.last_name { am.last_name = Set(v); }
        am.manager_id = Set(changes.manager_id);
        am.update(&txn).await.map_err(write_err)?;

        if let Some(accounts) = &changes.replace_accounts {
            let removed = social_media_account::delete_for_influencer(&txn, id).await?;
            insert_accounts(&txn, id, accounts).await?;
            debug!(influencer_id = %id, removed, inserted = accounts.len(), "accounts_replaced");
        }
        txn.commit().await?;

        info!(influencer_id = %id, "influencer_updated");
        self.reload(id).await
    }

    async fn delete(&self, id: Uuid) -> Result<bool, ServiceError> {
        let txn = self.db.begin().await?;
        social_media_account::delete_for_influencer(&txn, id).await?;
        let res = influencer::Entity::delete_by_id(id).exec(&txn).await?;
        txn.commit().await?;
        if res.rows_affected > 0 {
            info!(influencer_id = %id, "influencer_deleted");
        }
        Ok(res.rows_affected > 0)
    }
}

impl SeaOrmInfluencerRepository {
    async fn reload(&self, id: Uuid) -> Result<InfluencerView, ServiceError> {
        self.get(id).await?.ok_or_else(|| ServiceError::not_found("influencer"))
    }
}

/// Insert accounts that the influencer does not already own.
async fn insert_accounts<C: ConnectionTrait>(
    db: &C,
    influencer_id: Uuid,
    accounts: &[ValidatedAccount],
) -> Result<(), ServiceError> {
    for acc in accounts {
        if social_media_account::exists(db, influencer_id, acc.platform, &acc.username).await? {
            continue;
        }
        social_media_account::insert(db, influencer_id, acc.platform, &acc.username)
            .await
            .map_err(write_err)?;
    }
    Ok(())
}

/// One search term must hit an influencer or manager name, case-insensitively.
fn term_matches(term: &str) -> Condition {
    let escaped = term.to_lowercase().replace('\\', "\\\\").replace('%', "\\%").replace('_', "\\_");
    let pattern = format!("%{escaped}%");
    let columns = [
        Expr::col((influencer::Entity, influencer::Column::FirstName)),
        Expr::col((influencer::Entity, influencer::Column::LastName)),
        Expr::col((employee::Entity, employee::Column::FirstName)),
        Expr::col((employee::Entity, employee::Column::LastName)),
    ];
    columns.into_iter().fold(Condition::any(), |cond, col| {
        cond.add(Expr::expr(Func::lower(col)).like(LikeExpr::new(pattern.clone()).escape('\\')))
    })
}

/// Attach accounts and managers to influencer rows, keeping row order.
async fn assemble<C: ConnectionTrait>(db: &C, rows: Vec<influencer::Model>) -> Result<Vec<InfluencerView>, DbErr> {
    let ids: Vec<Uuid> = rows.iter().map(|r| r.id).collect();
    let mut accounts: HashMap<Uuid, Vec<SocialAccountView>> = HashMap::new();
    for acc in social_media_account::list_for_influencers(db, &ids).await? {
        accounts.entry(acc.influencer_id).or_default().push(acc.into());
    }

    let manager_ids: Vec<Uuid> = rows.iter().filter_map(|r| r.manager_id).collect();
    let managers: HashMap<Uuid, EmployeeView> = if manager_ids.is_empty() {
        HashMap::new()
    } else {
        employee::Entity::find()
            .filter(employee::Column::Id.is_in(manager_ids))
            .all(db)
            .await?
            .into_iter()
            .map(|m| (m.id, EmployeeView::from(m)))
            .collect()
    };

    Ok(rows
        .into_iter()
        .map(|r| InfluencerView {
            id: r.id,
            social_media_accounts: accounts.remove(&r.id).unwrap_or_default(),
            manager: r.manager_id.and_then(|mid| managers.get(&mid).cloned()),
            first_name: r.first_name,
            last_name: r.last_name,
        })
        .collect())
}
