use super::*;
use test_utils::factory::siege::SiegeFactory;

/// Tests that sieges come back most recent first.
///
/// Inserts the older siege first so insertion order and date order disagree.
///
/// Expected: Ok with the later siege first
#[tokio::test]
async fn returns_sieges_by_date_descending() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_siege_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let older = SiegeFactory::new(db)
        .name("E2")
        .date(Utc.with_ymd_and_hms(2025, 4, 1, 20, 0, 0).unwrap())
        .build()
        .await?;
    let newer = SiegeFactory::new(db)
        .name("E1")
        .date(Utc.with_ymd_and_hms(2025, 5, 1, 20, 0, 0).unwrap())
        .build()
        .await?;

    let repo = SiegeRepository::new(db);
    let sieges = repo.get_all().await?;

    assert_eq!(sieges.len(), 2);
    assert_eq!(sieges[0].id, newer.id);
    assert_eq!(sieges[0].name.as_deref(), Some("E1"));
    assert_eq!(sieges[1].id, older.id);

    Ok(())
}

/// Tests that sieges sharing a date keep insertion order.
///
/// Expected: Ok with sieges ordered by id
#[tokio::test]
async fn keeps_insertion_order_for_equal_dates() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_siege_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let date = Utc.with_ymd_and_hms(2025, 5, 1, 20, 0, 0).unwrap();
    let first = SiegeFactory::new(db).date(date).build().await?;
    let second = SiegeFactory::new(db).date(date).build().await?;

    let sieges = SiegeRepository::new(db).get_all().await?;

    assert_eq!(
        sieges.iter().map(|s| s.id).collect::<Vec<_>>(),
        vec![first.id, second.id]
    );

    Ok(())
}

/// Tests listing with no sieges stored.
///
/// Expected: Ok(empty vec)
#[tokio::test]
async fn returns_empty_when_no_sieges() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_siege_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let sieges = SiegeRepository::new(db).get_all().await?;

    assert!(sieges.is_empty());

    Ok(())
}

/// Tests that a database error is surfaced when the table is missing.
///
/// Expected: Err(DbErr)
#[tokio::test]
async fn fails_when_table_missing() -> Result<(), DbErr> {
    let test = TestBuilder::new().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let result = SiegeRepository::new(db).get_all().await;

    assert!(result.is_err());

    Ok(())
}
