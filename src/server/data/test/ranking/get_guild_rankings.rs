use super::*;

/// Tests that guild rankings are ordered by score descending.
///
/// Expected: Ok with highest score first
#[tokio::test]
async fn orders_by_score_descending() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_ranking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let siege = factory::create_siege(db).await?;
    factory::create_guild_ranking(db, siege.id, "Iron Wolves", 300).await?;
    factory::create_guild_ranking(db, siege.id, "Red Hand", 900).await?;
    factory::create_guild_ranking(db, siege.id, "Stormborn", 500).await?;

    let rankings = RankingRepository::new(db)
        .get_guild_rankings(siege.id, None)
        .await?;

    let names: Vec<&str> = rankings.iter().map(|r| r.guild_name.as_str()).collect();
    assert_eq!(names, vec!["Red Hand", "Stormborn", "Iron Wolves"]);
    assert_eq!(rankings[0].score, 900);

    Ok(())
}

/// Tests the tie-break between equal scores.
///
/// Expected: Ok with the first inserted guild ranked first
#[tokio::test]
async fn breaks_ties_by_insertion_order() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_ranking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let siege = factory::create_siege(db).await?;
    factory::create_guild_ranking(db, siege.id, "First", 700).await?;
    factory::create_guild_ranking(db, siege.id, "Second", 700).await?;

    let top = RankingRepository::new(db)
        .get_guild_rankings(siege.id, Some(1))
        .await?;

    assert_eq!(top.len(), 1);
    assert_eq!(top[0].guild_name, "First");

    Ok(())
}

/// Tests that rankings of other sieges are excluded and the limit applies.
///
/// Expected: Ok with only the requested siege's top row
#[tokio::test]
async fn filters_by_siege_and_applies_limit() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_ranking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let siege = factory::create_siege(db).await?;
    let other = factory::create_siege(db).await?;
    factory::create_guild_ranking(db, siege.id, "Iron Wolves", 300).await?;
    factory::create_guild_ranking(db, siege.id, "Red Hand", 200).await?;
    factory::create_guild_ranking(db, other.id, "Elsewhere", 5000).await?;

    let top = RankingRepository::new(db)
        .get_guild_rankings(siege.id, Some(1))
        .await?;

    assert_eq!(top.len(), 1);
    assert_eq!(top[0].guild_name, "Iron Wolves");

    Ok(())
}

/// Tests a siege without guild rankings.
///
/// Expected: Ok(empty vec)
#[tokio::test]
async fn returns_empty_without_rankings() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_ranking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let siege = factory::create_siege(db).await?;

    let rankings = RankingRepository::new(db)
        .get_guild_rankings(siege.id, None)
        .await?;

    assert!(rankings.is_empty());

    Ok(())
}
