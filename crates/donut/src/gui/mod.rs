pub mod app;
pub mod menu;
pub mod theme;
