use super::*;

/// Tests set-membership filtering of death records across several stats.
///
/// Expected: Ok with deaths of both requested stats, none of the third
#[tokio::test]
async fn returns_deaths_for_requested_stats() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_siege_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let siege = factory::create_siege(db).await?;
    let first = factory::create_player_stat(db, siege.id).await?;
    let second = factory::create_player_stat(db, siege.id).await?;
    let excluded = factory::create_player_stat(db, siege.id).await?;

    PlayerDeathFactory::new(db, first.id, 1)
        .killer_name("Rollo")
        .build()
        .await?;
    factory::create_player_death(db, second.id, 1).await?;
    factory::create_player_death(db, second.id, 2).await?;
    factory::create_player_death(db, excluded.id, 1).await?;

    let deaths = PlayerStatRepository::new(db)
        .get_deaths_by_stat_ids(&[first.id, second.id])
        .await?;

    assert_eq!(deaths.len(), 3);
    assert!(deaths.iter().all(|d| d.siege_player_stat_id != excluded.id));
    assert_eq!(deaths[0].killer_name, "Rollo");

    Ok(())
}
