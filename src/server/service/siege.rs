use futures::future::join_all;

use crate::server::{
    data::store::SiegeStore,
    error::AppError,
    model::{siege::SiegeWithHighlights, NO_RESULT},
};

pub struct SiegeService<'a> {
    store: &'a dyn SiegeStore,
}

impl<'a> SiegeService<'a> {
    pub fn new(store: &'a dyn SiegeStore) -> Self {
        Self { store }
    }

    /// Lists all sieges, most recent first, with their top guild and MVP names.
    ///
    /// The top guild and MVP lookups of every siege run concurrently. A failed lookup only
    /// affects its own field, which falls back to the `"—"` placeholder.
    ///
    /// # Returns
    /// - `Ok(Vec<SiegeWithHighlights>)` - One entry per stored siege, in listing order
    /// - `Err(AppError::DbErr)` - The siege listing itself failed
    pub async fn list_with_highlights(&self) -> Result<Vec<SiegeWithHighlights>, AppError> {
        let sieges = self.store.list_sieges().await?;

        let highlights = join_all(sieges.iter().map(|siege| self.highlights(siege.id))).await;

        Ok(sieges
            .into_iter()
            .zip(highlights)
            .map(|(siege, (top_guild, mvp))| SiegeWithHighlights {
                siege,
                top_guild,
                mvp,
            })
            .collect())
    }

    async fn highlights(&self, siege_id: i32) -> (String, String) {
        let (guild, player) = tokio::join!(
            self.store.guild_rankings(siege_id, Some(1)),
            self.store.player_rankings(siege_id, Some(1)),
        );

        let top_guild = match guild {
            Ok(rows) => rows.into_iter().next().map(|ranking| ranking.guild_name),
            Err(err) => {
                tracing::warn!(siege_id, "Failed to fetch top guild: {}", err);
                None
            }
        };

        let mvp = match player {
            Ok(rows) => rows.into_iter().next().map(|ranking| ranking.player_name),
            Err(err) => {
                tracing::warn!(siege_id, "Failed to fetch MVP: {}", err);
                None
            }
        };

        (
            top_guild.unwrap_or_else(|| NO_RESULT.to_string()),
            mvp.unwrap_or_else(|| NO_RESULT.to_string()),
        )
    }
}
