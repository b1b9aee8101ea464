use sea_orm::{DatabaseConnection, DbErr, EntityTrait, QueryOrder};

use crate::server::model::siege::Siege;

pub struct SiegeRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> SiegeRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets all sieges, most recent first
    ///
    /// Sieges sharing a date keep insertion order.
    pub async fn get_all(&self) -> Result<Vec<Siege>, DbErr> {
        let sieges = entity::prelude::Siege::find()
            .order_by_desc(entity::siege::Column::Date)
            .order_by_asc(entity::siege::Column::Id)
            .all(self.db)
            .await?;

        Ok(sieges.into_iter().map(Siege::from_entity).collect())
    }

    /// Checks whether a siege with the given id exists
    pub async fn exists(&self, id: i32) -> Result<bool, DbErr> {
        let siege = entity::prelude::Siege::find_by_id(id).one(self.db).await?;

        Ok(siege.is_some())
    }
}
