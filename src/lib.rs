pub mod cli;
pub mod i18n;
pub mod models;
pub mod translation;
pub mod ui;
pub mod utils;
