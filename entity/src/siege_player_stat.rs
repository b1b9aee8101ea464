use sea_orm::entity::prelude::*;

/// Per-player totals for one siege.
///
/// `id` is the join key for the per-life kill and death records. Guild and the numeric totals
/// are nullable upstream and defaulted when the stats are aggregated.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "siege_player_stats")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub siege_id: i32,
    pub player_name: String,
    pub guild_name: Option<String>,
    pub kills: Option<i32>,
    pub deaths: Option<i32>,
    pub points: Option<i32>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::siege::Entity",
        from = "Column::SiegeId",
        to = "super::siege::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Siege,
    #[sea_orm(has_many = "super::siege_player_kill::Entity")]
    SiegePlayerKill,
    #[sea_orm(has_many = "super::siege_player_death::Entity")]
    SiegePlayerDeath,
}

impl Related<super::siege::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Siege.def()
    }
}

impl Related<super::siege_player_kill::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::SiegePlayerKill.def()
    }
}

impl Related<super::siege_player_death::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::SiegePlayerDeath.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
