//! Factory methods for creating test data.
//!
//! Each record set has its own factory module with a `Factory` struct for customization
//! and a `create_*` convenience function for quick default creation. Factories do not
//! create their parents: insert the siege (and player stat, for per-life records) first,
//! since the in-memory database enforces foreign keys.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! let siege = factory::create_siege(&db).await?;
//! let stat = factory::create_player_stat(&db, siege.id).await?;
//! factory::create_player_kill(&db, stat.id, 1).await?;
//! ```
//!
//! # Customization
//!
//! ```rust,ignore
//! use test_utils::factory::guild_ranking::GuildRankingFactory;
//!
//! let ranking = GuildRankingFactory::new(&db, siege.id)
//!     .guild_name("Iron Wolves")
//!     .score(1200)
//!     .build()
//!     .await?;
//! ```
//!
//! # Available Factories
//!
//! - `siege` - Siege events
//! - `guild_ranking` - Guild scores per siege
//! - `player_ranking` - Player scores per siege
//! - `player_stat` - Per-player totals per siege
//! - `player_kill` - Per-life kill records
//! - `player_death` - Per-life death records
//! - `helpers` - Id counter and multi-entity helpers

pub mod guild_ranking;
pub mod helpers;
pub mod player_death;
pub mod player_kill;
pub mod player_ranking;
pub mod player_stat;
pub mod siege;

pub use guild_ranking::create_guild_ranking;
pub use player_death::create_player_death;
pub use player_kill::create_player_kill;
pub use player_ranking::create_player_ranking;
pub use player_stat::create_player_stat;
pub use siege::create_siege;
