use super::*;

/// Tests lookup through the denormalized siege column.
///
/// Rows without the column filled in are invisible to this lookup, which is why the
/// stat id lookup is the default.
///
/// Expected: Ok with only the kill that carries the siege id
#[tokio::test]
async fn returns_only_rows_with_siege_id() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_siege_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let siege = factory::create_siege(db).await?;
    let stat = factory::create_player_stat(db, siege.id).await?;

    PlayerKillFactory::new(db, stat.id, 1)
        .siege_id(siege.id)
        .victim_name("Tagged")
        .build()
        .await?;
    PlayerKillFactory::new(db, stat.id, 2)
        .victim_name("Untagged")
        .build()
        .await?;

    let repo = PlayerStatRepository::new(db);
    let by_siege = repo.get_kills_by_siege_id(siege.id).await?;
    let by_stat = repo.get_kills_by_stat_ids(&[stat.id]).await?;

    assert_eq!(by_siege.len(), 1);
    assert_eq!(by_siege[0].victim_name, "Tagged");
    assert_eq!(by_stat.len(), 2);

    Ok(())
}

/// Tests death lookup through the denormalized siege column.
///
/// Expected: Ok with the tagged death only
#[tokio::test]
async fn returns_deaths_with_siege_id() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_siege_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let siege = factory::create_siege(db).await?;
    let stat = factory::create_player_stat(db, siege.id).await?;

    PlayerDeathFactory::new(db, stat.id, 1)
        .siege_id(siege.id)
        .build()
        .await?;
    factory::create_player_death(db, stat.id, 2).await?;

    let deaths = PlayerStatRepository::new(db)
        .get_deaths_by_siege_id(siege.id)
        .await?;

    assert_eq!(deaths.len(), 1);
    assert_eq!(deaths[0].life_number, 1);

    Ok(())
}
