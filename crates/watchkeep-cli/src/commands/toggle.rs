use crate::commands::{open_store, resolve_id};
use crate::output::Output;
use color_eyre::Result;

pub fn run_toggle(prefix: &str, output: &Output) -> Result<()> {
    let mut store = open_store()?;
    let id = resolve_id(&store, prefix)?;

    store.toggle_watched(&id);

    match store.get(&id) {
        Some(item) if item.watched => {
            output.success(format!("Marked '{}' watched", item.title))
        }
        Some(item) => output.success(format!("Marked '{}' unwatched", item.title)),
        None => {}
    }

    Ok(())
}
