use crate::commands::{open_store, short_id};
use crate::output::{Output, OutputFormat};
use color_eyre::Result;
use comfy_table::{Cell, Table};
use owo_colors::OwoColorize;
use watchkeep_models::{Category, WatchlistItem};

pub fn run_list(
    watched: bool,
    all: bool,
    category: Option<Category>,
    output: &Output,
) -> Result<()> {
    let store = open_store()?;

    let items: Vec<&WatchlistItem> = if all {
        let mut items = store.get_filtered(false, category);
        items.extend(store.get_filtered(true, category));
        items
    } else {
        store.get_filtered(watched, category)
    };

    if output.format() != OutputFormat::Human {
        let values: Vec<serde_json::Value> = items
            .iter()
            .map(|item| serde_json::to_value(item).unwrap_or_default())
            .collect();
        output.json(&serde_json::Value::Array(values));
        return Ok(());
    }

    if items.is_empty() {
        let what = match (all, watched) {
            (true, _) => "items",
            (_, true) => "watched items",
            _ => "unwatched items",
        };
        match category {
            Some(category) => output.println(format!("No {} in category {}", what, category)),
            None => output.println(format!("No {} yet. Add one with 'watchkeep add'", what)),
        }
        return Ok(());
    }

    println!("{}", render_table(&items));
    Ok(())
}

fn render_table(items: &[&WatchlistItem]) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        Cell::new("Id").add_attribute(comfy_table::Attribute::Bold),
        Cell::new("Title").add_attribute(comfy_table::Attribute::Bold),
        Cell::new("Category").add_attribute(comfy_table::Attribute::Bold),
        Cell::new("Year").add_attribute(comfy_table::Attribute::Bold),
        Cell::new("Rating").add_attribute(comfy_table::Attribute::Bold),
        Cell::new("Watched").add_attribute(comfy_table::Attribute::Bold),
    ]);
    table.load_preset(comfy_table::presets::UTF8_FULL);
    table.apply_modifier(comfy_table::modifiers::UTF8_ROUND_CORNERS);

    for item in items {
        let rating = item
            .rating
            .map(|r| format!("{:.1}", r))
            .unwrap_or_else(|| "-".to_string());
        let watched = if item.watched {
            "✓".green().to_string()
        } else {
            String::new()
        };

        table.add_row(vec![
            Cell::new(short_id(&item.id)),
            Cell::new(&item.title),
            Cell::new(item.category.to_string()),
            Cell::new(item.year.as_deref().unwrap_or("-")),
            Cell::new(rating),
            Cell::new(watched),
        ]);
    }

    table
}
