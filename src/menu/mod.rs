mod dish;
mod week_menu;

pub use dish::{DayCourses, Dish};
pub use week_menu::{reconcile, WeekMenu};
