pub mod app;
pub mod components;
pub mod consent;
pub mod fonts;
pub mod screen;
pub mod theme;
