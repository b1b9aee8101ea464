use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "siege_player_deaths")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub siege_player_stat_id: i32,
    /// Denormalized copy of the owning stat's siege. Not every row carries it.
    pub siege_id: Option<i32>,
    pub life_number: i32,
    pub killer_name: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::siege_player_stat::Entity",
        from = "Column::SiegePlayerStatId",
        to = "super::siege_player_stat::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    SiegePlayerStat,
}

impl Related<super::siege_player_stat::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::SiegePlayerStat.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
