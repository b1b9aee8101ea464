use super::*;

/// Tests that only the requested siege's stats are returned, with nullable columns intact.
///
/// Expected: Ok with one row, missing guild and totals as None
#[tokio::test]
async fn returns_stats_for_siege() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_siege_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let siege = factory::create_siege(db).await?;
    let other = factory::create_siege(db).await?;
    let stat = PlayerStatFactory::new(db, siege.id)
        .player_name("Ragnar")
        .guild_name(None)
        .kills(None)
        .deaths(Some(2))
        .points(None)
        .build()
        .await?;
    factory::create_player_stat(db, other.id).await?;

    let stats = PlayerStatRepository::new(db)
        .get_by_siege_id(siege.id)
        .await?;

    assert_eq!(stats.len(), 1);
    assert_eq!(stats[0].id, stat.id);
    assert_eq!(stats[0].player_name, "Ragnar");
    assert!(stats[0].guild_name.is_none());
    assert!(stats[0].kills.is_none());
    assert_eq!(stats[0].deaths, Some(2));

    Ok(())
}

/// Tests a siege without stats.
///
/// Expected: Ok(empty vec)
#[tokio::test]
async fn returns_empty_without_stats() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_siege_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let siege = factory::create_siege(db).await?;

    let stats = PlayerStatRepository::new(db)
        .get_by_siege_id(siege.id)
        .await?;

    assert!(stats.is_empty());

    Ok(())
}

/// Tests that a row missing a required column is rejected at the repository boundary.
///
/// The table is created by hand so `player_name` accepts NULL, as an externally managed
/// schema might.
///
/// Expected: Err(DbErr::Type)
#[tokio::test]
async fn fails_on_null_player_name() -> Result<(), DbErr> {
    let test = TestBuilder::new().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    db.execute_unprepared(
        "CREATE TABLE siege_player_stats (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            siege_id INTEGER NOT NULL,
            player_name TEXT,
            guild_name TEXT,
            kills INTEGER,
            deaths INTEGER,
            points INTEGER
        )",
    )
    .await?;
    db.execute_unprepared(
        "INSERT INTO siege_player_stats (siege_id, player_name, kills) VALUES (1, NULL, 3)",
    )
    .await?;

    let result = PlayerStatRepository::new(db).get_by_siege_id(1).await;

    assert!(matches!(result, Err(DbErr::Type(_))), "{:?}", result);

    Ok(())
}
