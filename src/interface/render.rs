use crate::calculator::{FAT_CALORIE_SHARE, KCAL_PER_G_CARB, KCAL_PER_G_FAT, KCAL_PER_G_PROTEIN};
use crate::models::{MacroTargets, Post};

/// Display the calculated daily targets.
pub fn display_targets(targets: &MacroTargets) {
    println!();
    println!("=== Daily Targets ===");
    println!();
    println!("Calories:      {:>5} kcal", targets.calories);
    println!(
        "Protein:       {:>5} g  ({:.0} kcal)",
        targets.proteins,
        targets.proteins as f64 * KCAL_PER_G_PROTEIN
    );
    println!(
        "Fat:           {:>5} g  ({:.0}% of calories)",
        targets.fats,
        FAT_CALORIE_SHARE * 100.0
    );
    println!(
        "Carbohydrates: {:>5} g  ({:.0} kcal)",
        targets.carbohydrates,
        targets.carbohydrates as f64 * KCAL_PER_G_CARB
    );
    println!();

    if targets.carbohydrates < 0 {
        println!(
            "Note: protein and fat ({:.0} kcal) exceed the calorie budget.",
            targets.proteins as f64 * KCAL_PER_G_PROTEIN + targets.fats as f64 * KCAL_PER_G_FAT
        );
        println!();
    }
}

/// Display the post table.
pub fn display_posts(posts: &[Post]) {
    if posts.is_empty() {
        println!("No posts.");
        return;
    }

    let title_width = posts.iter().map(|p| p.title.len()).max().unwrap_or(5).max(5);
    let category_width = posts
        .iter()
        .map(|p| p.category.len())
        .max()
        .unwrap_or(8)
        .max(8);

    println!();
    println!(
        "{:>4}  {:<16}  {:<tw$}  {:<cw$}",
        "id",
        "date_posted",
        "title",
        "category",
        tw = title_width,
        cw = category_width
    );

    for post in posts {
        println!(
            "{:>4}  {:<16}  {:<tw$}  {:<cw$}",
            post.id,
            post.date_posted.format("%Y-%m-%d %H:%M").to_string(),
            post.title,
            post.category,
            tw = title_width,
            cw = category_width
        );
    }

    println!();
    println!("Total posts: {}", posts.len());
    println!();
}
