pub mod prompts;
pub mod render;

pub use prompts::{
    MealAction, WeightAction, meal_menu, prompt_meal_action, prompt_weight_action, prompt_yes_no,
    weight_menu,
};
pub use render::{display_chart, display_meal, display_weight_entry, format_meal, format_totals};
