use crate::commands::{open_store, resolve_id, short_id};
use crate::output::Output;
use color_eyre::eyre::eyre;
use color_eyre::Result;
use watchkeep_models::Category;

pub fn run_edit(
    prefix: &str,
    title: Option<String>,
    description: Option<String>,
    category: Option<Category>,
    output: &Output,
) -> Result<()> {
    if title.is_none() && description.is_none() && category.is_none() {
        output.warn("Nothing to change. Use --title, --description, or --category");
        return Ok(());
    }

    let mut store = open_store()?;
    let id = resolve_id(&store, prefix)?;

    let mut item = store
        .get(&id)
        .cloned()
        .ok_or_else(|| eyre!("No item with id '{}'", id))?;

    if let Some(title) = title {
        let title = title.trim().to_string();
        if title.is_empty() {
            return Err(eyre!("Title must not be empty"));
        }
        item.title = title;
    }
    if let Some(description) = description {
        item.description = description;
    }
    if let Some(category) = category {
        item.category = category;
    }

    match store.update_item(item) {
        Some(id) => output.success(format!("Updated {}", short_id(&id))),
        None => output.error("Item vanished while editing"),
    }

    Ok(())
}
