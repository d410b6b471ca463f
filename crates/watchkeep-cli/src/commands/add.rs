use crate::commands::{open_store, short_id};
use crate::output::Output;
use color_eyre::Result;
use watchkeep_models::Category;

pub async fn run_add(
    title: &str,
    description: &str,
    category: Category,
    output: &Output,
) -> Result<()> {
    let mut store = open_store()?;
    let id = store.add_item(title, description, category).await?;

    if let Some(item) = store.get(&id) {
        let enriched =
            item.poster_url.is_some() || item.year.is_some() || item.rating.is_some();

        match item.year.as_deref() {
            Some(year) => output.success(format!(
                "Added '{}' ({}) [{}] as {}",
                item.title, year, item.category, short_id(&id)
            )),
            None => output.success(format!(
                "Added '{}' [{}] as {}",
                item.title, item.category, short_id(&id)
            )),
        }

        if !enriched {
            output.warn("No metadata found; saved without poster/year/rating");
        }
    }

    Ok(())
}
