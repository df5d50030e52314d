pub mod lineup;
pub mod matchup;
pub mod overlay;
pub mod scoreboard;
pub mod stat_blocks;
pub mod status_bar;
