pub mod app;
pub mod input;
pub mod pacing;
pub mod ui;
