use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "siege_guild_rankings")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub siege_id: i32,
    pub guild_name: String,
    pub score: i32,
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
}

impl Related<super::siege::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Siege.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
