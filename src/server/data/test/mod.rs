mod player_stat;
mod ranking;
mod siege;
