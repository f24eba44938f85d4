use dialoguer::{Confirm, Select};

use crate::error::Result;
use crate::meal::{MealScreen, SlotId};
use crate::weight::Key;

/// What the user chose on the meal screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MealAction {
    Remove(SlotId),
    Back,
}

/// What the user chose on the weight screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WeightAction {
    Press(Key),
    Log,
    Back,
}

/// Menu entries for the meal screen. Rows whose removal is in flight get no
/// remove entry.
pub fn meal_menu(screen: &MealScreen) -> Vec<(String, MealAction)> {
    let mut items: Vec<(String, MealAction)> = screen
        .rows()
        .iter()
        .filter(|row| screen.can_remove(row.slot))
        .map(|row| {
            (
                format!("REMOVE {}", row.entry.description),
                MealAction::Remove(row.slot),
            )
        })
        .collect();

    items.push(("Back".to_string(), MealAction::Back));
    items
}

/// Keypad entries in layout order, followed by "Log Weight" and "Back".
pub fn weight_menu() -> Vec<(String, WeightAction)> {
    let mut items: Vec<(String, WeightAction)> = Key::all()
        .map(|key| (key.label(), WeightAction::Press(key)))
        .collect();

    items.push(("Log Weight".to_string(), WeightAction::Log));
    items.push(("Back".to_string(), WeightAction::Back));
    items
}

fn select<A: Copy>(prompt: &str, items: &[(String, A)], default: usize) -> Result<(usize, A)> {
    let labels: Vec<&str> = items.iter().map(|(label, _)| label.as_str()).collect();

    let selection = Select::new()
        .with_prompt(prompt)
        .items(&labels)
        .default(default.min(labels.len().saturating_sub(1)))
        .interact()?;

    Ok((selection, items[selection].1))
}

/// Prompt for the next meal screen action.
pub fn prompt_meal_action(screen: &MealScreen) -> Result<MealAction> {
    let items = meal_menu(screen);
    let (_, action) = select("Choose a food to remove", &items, 0)?;
    Ok(action)
}

/// Prompt for the next keypad press.
///
/// `last` keeps the cursor on the previously pressed entry.
pub fn prompt_weight_action(last: usize) -> Result<(usize, WeightAction)> {
    select("Keypad", &weight_menu(), last)
}

/// Prompt for yes/no confirmation.
pub fn prompt_yes_no(prompt: &str, default: bool) -> Result<bool> {
    Ok(Confirm::new()
        .with_prompt(prompt)
        .default(default)
        .interact()?)
}
