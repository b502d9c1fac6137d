pub mod actions;
pub mod controllers;
pub mod controller;
pub mod state;
pub mod theme;
pub mod ui;

mod app;

pub use state::AppState;
