use super::*;

/// Tests set-membership filtering of kill records.
///
/// Kills of a stat outside the requested set must not be returned.
///
/// Expected: Ok with the two kills of the requested stat in insertion order
#[tokio::test]
async fn returns_kills_for_requested_stats() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_siege_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let siege = factory::create_siege(db).await?;
    let stat = factory::create_player_stat(db, siege.id).await?;
    let other = factory::create_player_stat(db, siege.id).await?;

    PlayerKillFactory::new(db, stat.id, 2)
        .victim_name("Bjorn")
        .points_earned(Some(3))
        .build()
        .await?;
    PlayerKillFactory::new(db, stat.id, 1)
        .victim_name("Ivar")
        .points_earned(None)
        .build()
        .await?;
    factory::create_player_kill(db, other.id, 1).await?;

    let kills = PlayerStatRepository::new(db)
        .get_kills_by_stat_ids(&[stat.id])
        .await?;

    assert_eq!(kills.len(), 2);
    assert!(kills.iter().all(|k| k.siege_player_stat_id == stat.id));
    assert_eq!(kills[0].victim_name, "Bjorn");
    assert_eq!(kills[0].life_number, 2);
    assert_eq!(kills[0].points_earned, Some(3));
    assert_eq!(kills[1].points_earned, None);

    Ok(())
}

/// Tests the empty id set short-circuit.
///
/// Works even without the kills table, proving no query is issued.
///
/// Expected: Ok(empty vec)
#[tokio::test]
async fn returns_empty_for_empty_id_set() -> Result<(), DbErr> {
    let test = TestBuilder::new().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let kills = PlayerStatRepository::new(db)
        .get_kills_by_stat_ids(&[])
        .await?;

    assert!(kills.is_empty());

    Ok(())
}
