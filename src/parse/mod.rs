mod collect;
mod error;
pub mod labels;
pub mod menu_page;
mod reservation_page;
mod static_selector;
mod tables;
mod text_from_selection;

pub use error::{Error, Result};
pub use labels::{Course, Service};
pub use menu_page::{DayItems, MenuPage, ServiceWeek, WEEKDAYS};
pub use reservation_page::{parse_reservations, ReservationRow};
pub use tables::locate_tables;
