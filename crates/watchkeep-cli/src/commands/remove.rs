use crate::commands::{open_store, resolve_id};
use crate::output::Output;
use color_eyre::Result;

pub fn run_remove(prefix: &str, output: &Output) -> Result<()> {
    let mut store = open_store()?;
    let id = resolve_id(&store, prefix)?;

    let title = store
        .get(&id)
        .map(|item| item.title.clone())
        .unwrap_or_else(|| id.clone());

    store.remove_item(&id);
    output.success(format!("Removed '{}'", title));

    Ok(())
}
