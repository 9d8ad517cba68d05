use sea_orm::{EntityTrait, SqlErr};
use anyhow::Result;

use super::{insert_employee, insert_influencer, setup_test_db};
use crate::{employee, influencer, social_media_account, Platform};

#[tokio::test]
async fn employee_email_is_unique() -> Result<()> {
    let db = setup_test_db().await?;

    insert_employee(&db, "Maria", "Silva", "dup@example.com").await?;
    let err = insert_employee(&db, "Mario", "Silva", "dup@example.com").await.unwrap_err();
    let db_err = err.downcast::<sea_orm::DbErr>()?;
    assert!(matches!(db_err.sql_err(), Some(SqlErr::UniqueConstraintViolation(_))));
    Ok(())
}

#[tokio::test]
async fn account_triple_is_unique_per_influencer() -> Result<()> {
    let db = setup_test_db().await?;

    let a = insert_influencer(&db, "Ana", "Lee", None).await?;
    let b = insert_influencer(&db, "Bo", "Kim", None).await?;
    social_media_account::insert(&db, a.id, Platform::Tiktok, "dancer").await?;

    let err = social_media_account::insert(&db, a.id, Platform::Tiktok, "dancer").await.unwrap_err();
    assert!(matches!(err.sql_err(), Some(SqlErr::UniqueConstraintViolation(_))));

    // same pair on another platform or another influencer is fine
    social_media_account::insert(&db, a.id, Platform::Instagram, "dancer").await?;
    social_media_account::insert(&db, b.id, Platform::Tiktok, "dancer").await?;
    Ok(())
}

#[tokio::test]
async fn deleting_employee_sets_manager_null() -> Result<()> {
    let db = setup_test_db().await?;

    let m = insert_employee(&db, "Boss", "Person", "boss@example.com").await?;
    let i = insert_influencer(&db, "Ana", "Lee", Some(m.id)).await?;

    employee::Entity::delete_by_id(m.id).exec(&db).await?;

    let row = influencer::Entity::find_by_id(i.id).one(&db).await?.unwrap();
    assert_eq!(row.manager_id, None);
    Ok(())
}

#[tokio::test]
async fn deleting_influencer_cascades_accounts() -> Result<()> {
    let db = setup_test_db().await?;

    let i = insert_influencer(&db, "Ana", "Lee", None).await?;
    let acc = social_media_account::insert(&db, i.id, Platform::Instagram, "@alee").await?;

    influencer::Entity::delete_by_id(i.id).exec(&db).await?;

    assert!(social_media_account::Entity::find_by_id(acc.id).one(&db).await?.is_none());
    Ok(())
}
