pub mod aggregate;
pub mod input;
pub mod screen;

pub use aggregate::{Totals, aggregate};
pub use input::load_meal;
pub use screen::{MealRow, MealScreen, PendingRemoval, RowState, SlotId};
