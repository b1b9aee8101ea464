use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "sieges")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub date: DateTimeUtc,
    pub name: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub description: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::siege_guild_ranking::Entity")]
    SiegeGuildRanking,
    #[sea_orm(has_many = "super::siege_player_ranking::Entity")]
    SiegePlayerRanking,
    #[sea_orm(has_many = "super::siege_player_stat::Entity")]
    SiegePlayerStat,
}

impl Related<super::siege_guild_ranking::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::SiegeGuildRanking.def()
    }
}

impl Related<super::siege_player_ranking::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::SiegePlayerRanking.def()
    }
}

impl Related<super::siege_player_stat::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::SiegePlayerStat.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
