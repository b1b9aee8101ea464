pub use super::siege::Entity as Siege;
pub use super::siege_guild_ranking::Entity as SiegeGuildRanking;
pub use super::siege_player_death::Entity as SiegePlayerDeath;
pub use super::siege_player_kill::Entity as SiegePlayerKill;
pub use super::siege_player_ranking::Entity as SiegePlayerRanking;
pub use super::siege_player_stat::Entity as SiegePlayerStat;
