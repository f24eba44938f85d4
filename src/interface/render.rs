use crate::meal::{MealRow, MealScreen, RowState, Totals};
use crate::models::FoodEntry;
use crate::weight::{ChartData, WeightEntryBuffer};

const SPARK_LEVELS: [char; 8] = ['▁', '▂', '▃', '▄', '▅', '▆', '▇', '█'];

pub const NO_MEAL_DATA: &str = "No meal data available.";
pub const NO_WEIGHT_DATA: &str = "No weight data available.";

fn fmt_opt(value: Option<f64>) -> String {
    format!("{:.1}", value.unwrap_or(0.0))
}

/// Totals block shown at the top of the meal screen.
pub fn format_totals(totals: &Totals) -> String {
    format!(
        "Calories: {:.1}\nProtein: {:.1}g\nFat: {:.1}g\nCarbohydrates: {:.1}g",
        totals.calories, totals.protein, totals.fat, totals.carbohydrates
    )
}

/// Full nutrition card for one food.
pub fn format_food_entry(food: &FoodEntry) -> String {
    let mut lines = vec![
        food.description.clone(),
        format!("  Servings: {}", fmt_opt(food.selected_servings)),
        format!("  Calories: {}", fmt_opt(food.calories)),
        format!("  Carbohydrates: {}", fmt_opt(food.carbohydrates)),
        format!("  Fat: {}", fmt_opt(food.fat)),
        format!("  Protein: {}", fmt_opt(food.protein)),
        format!("  Saturated Fat: {}", fmt_opt(food.saturated_fat)),
        format!("  Trans Fats: {}", fmt_opt(food.trans_fat)),
        format!("  Sugar: {}", fmt_opt(food.sugars)),
        format!("  Sodium: {}", fmt_opt(food.sodium)),
        format!("  Calcium: {}", fmt_opt(food.calcium)),
        format!("  Iron: {}", fmt_opt(food.iron)),
    ];

    if let Some(ingredients) = food.ingredients.as_deref().filter(|s| !s.is_empty()) {
        lines.push(format!("  Ingredients: {}", ingredients));
    }

    lines.join("\n")
}

fn format_row(index: usize, row: &MealRow) -> String {
    let card = format_food_entry(&row.entry);
    match row.state {
        RowState::Visible => format!("{:>3}. {}", index + 1, card),
        RowState::Fading => format!("{:>3}. (removing...) {}", index + 1, card),
    }
}

/// The meal screen: totals, then each food or the "no data" notice.
pub fn format_meal(screen: &MealScreen) -> String {
    let mut out = format!("=== Meal ===\n{}\n\n", format_totals(&screen.totals()));

    if screen.is_empty() {
        out.push_str(NO_MEAL_DATA);
        out.push('\n');
        return out;
    }

    for (i, row) in screen.rows().iter().enumerate() {
        out.push_str(&format_row(i, row));
        out.push_str("\n\n");
    }
    out
}

pub fn display_meal(screen: &MealScreen) {
    println!();
    print!("{}", format_meal(screen));
}

/// One-line sparkline of the weight history, scaled between min and max.
pub fn format_sparkline(chart: &ChartData) -> String {
    let (Some(min), Some(max)) = (chart.min(), chart.max()) else {
        return String::new();
    };

    let span = max - min;
    chart
        .points
        .iter()
        .map(|p| {
            if span <= f64::EPSILON {
                SPARK_LEVELS[SPARK_LEVELS.len() / 2]
            } else {
                let ratio = (p.weight - min) / span;
                let idx = (ratio * (SPARK_LEVELS.len() - 1) as f64).round() as usize;
                SPARK_LEVELS[idx.min(SPARK_LEVELS.len() - 1)]
            }
        })
        .collect()
}

/// Print the weight history chart.
pub fn display_chart(chart: &ChartData) {
    println!();
    println!("=== Weight History ===");

    if chart.is_empty() {
        println!("{}", NO_WEIGHT_DATA);
        println!();
        return;
    }

    println!("{}", format_sparkline(chart));
    if let (Some(min), Some(max), Some(latest)) = (chart.min(), chart.max(), chart.latest()) {
        println!(
            "{} entries | min {:.1} | max {:.1} | latest {:.1}",
            chart.points.len(),
            min,
            max,
            latest
        );
    }
    println!();
}

/// Print the weight entry field with today's date.
pub fn display_weight_entry(date: &str, buffer: &WeightEntryBuffer) {
    let shown = if buffer.is_empty() {
        "Enter Weight"
    } else {
        buffer.as_str()
    };
    println!();
    println!("[ {} ]   {}", shown, date);
}
