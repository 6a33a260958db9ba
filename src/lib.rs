#![warn(clippy::all, clippy::pedantic, clippy::nursery)]

pub mod cache;
pub mod config;
mod error;
pub mod fetch;
pub mod menu;
pub mod parse;
pub mod reservation;
pub mod scrape_menus;
mod transpose;

pub use error::{Error, Result};
