pub mod charts;
pub mod details;
pub mod languages;
pub mod overview;
pub mod stat_cards;
pub mod status;
pub mod top_bar;
