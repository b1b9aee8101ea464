use super::*;

/// Tests that an inserted siege is found.
///
/// Expected: Ok(true)
#[tokio::test]
async fn returns_true_for_existing_siege() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_siege_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let siege = factory::create_siege(db).await?;

    assert!(SiegeRepository::new(db).exists(siege.id).await?);

    Ok(())
}

/// Tests an id that was never inserted.
///
/// Expected: Ok(false)
#[tokio::test]
async fn returns_false_for_unknown_siege() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_siege_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_siege(db).await?;

    assert!(!SiegeRepository::new(db).exists(99999).await?);

    Ok(())
}
