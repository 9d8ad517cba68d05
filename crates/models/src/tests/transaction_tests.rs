use sea_orm::{ActiveModelTrait, EntityTrait, Set, TransactionTrait};
use anyhow::Result;

use super::setup_test_db;
use crate::{influencer, social_media_account, Platform};

/// Test basic transaction commit
#[tokio::test]
async fn test_transaction_commit() -> Result<()> {
    let db = setup_test_db().await?;

    let txn = db.begin().await?;
    let am = influencer::ActiveModel {
        first_name: Set("Ana".into()),
        last_name: Set("Lee".into()),
        manager_id: Set(None),
        deleted_at: Set(None),
        ..Default::default()
    };
    let created = am.insert(&txn).await?;
    social_media_account::insert(&txn, created.id, Platform::Tiktok, "alee").await?;
    txn.commit().await?;

    assert!(influencer::Entity::find_by_id(created.id).one(&db).await?.is_some());
    assert_eq!(social_media_account::list_for_influencers(&db, &[created.id]).await?.len(), 1);
    Ok(())
}

/// Test transaction rollback leaves neither the row nor its children
#[tokio::test]
async fn test_transaction_rollback() -> Result<()> {
    let db = setup_test_db().await?;

    let txn = db.begin().await?;
    let am = influencer::ActiveModel {
        first_name: Set("Ana".into()),
        last_name: Set("Lee".into()),
        manager_id: Set(None),
        deleted_at: Set(None),
        ..Default::default()
    };
    let created = am.insert(&txn).await?;
    social_media_account::insert(&txn, created.id, Platform::Tiktok, "alee").await?;
    txn.rollback().await?;

    assert!(influencer::Entity::find_by_id(created.id).one(&db).await?.is_none());
    assert!(social_media_account::list_for_influencers(&db, &[created.id]).await?.is_empty());
    Ok(())
}
