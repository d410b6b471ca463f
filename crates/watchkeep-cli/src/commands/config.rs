use crate::output::{Output, OutputFormat};
use crate::ConfigCommands;
use color_eyre::eyre::eyre;
use color_eyre::Result;
use comfy_table::{Cell, Table};
use serde_json::json;
use watchkeep_config::{Config, PathManager};

pub fn run_config(cmd: ConfigCommands, output: &Output) -> Result<()> {
    let paths = PathManager::default();

    match cmd {
        ConfigCommands::Show => show_config(&paths, output),
        ConfigCommands::Set { key, value } => set_config(&paths, &key, &value, output),
    }
}

fn show_config(paths: &PathManager, output: &Output) -> Result<()> {
    let config_file = paths.config_file();
    let config = Config::load(&config_file).map_err(|e| eyre!("{}", e))?;

    if output.format() != OutputFormat::Human {
        output.json(&json!({
            "config_file": config_file.display().to_string(),
            "providers": {
                "tmdb_api_key": mask_string(&config.providers.tmdb_api_key),
                "omdb_api_key": mask_string(&config.providers.omdb_api_key),
                "rawg_api_key": mask_string(&config.providers.rawg_api_key),
            },
            "lookup": { "timeout_secs": config.lookup.timeout_secs },
        }));
        return Ok(());
    }

    let mut table = Table::new();
    table.set_header(vec![
        Cell::new("Config File").add_attribute(comfy_table::Attribute::Bold),
        Cell::new(config_file.display().to_string()),
    ]);
    table.add_row(vec![
        Cell::new("TMDb API Key"),
        Cell::new(mask_string(&config.providers.tmdb_api_key)),
    ]);
    table.add_row(vec![
        Cell::new("OMDb API Key"),
        Cell::new(mask_string(&config.providers.omdb_api_key)),
    ]);
    table.add_row(vec![
        Cell::new("RAWG API Key"),
        Cell::new(mask_string(&config.providers.rawg_api_key)),
    ]);
    table.add_row(vec![
        Cell::new("Lookup Timeout"),
        Cell::new(format!("{}s", config.lookup.timeout_secs)),
    ]);
    table.load_preset(comfy_table::presets::UTF8_FULL);
    table.apply_modifier(comfy_table::modifiers::UTF8_ROUND_CORNERS);
    println!("{}", table);

    output.println("Jikan (anime) needs no API key and is always enabled");
    Ok(())
}

fn set_config(paths: &PathManager, key: &str, value: &str, output: &Output) -> Result<()> {
    let config_file = paths.config_file();
    let mut config = Config::load(&config_file).map_err(|e| eyre!("{}", e))?;

    match key {
        "tmdb_api_key" => config.providers.tmdb_api_key = value.to_string(),
        "omdb_api_key" => config.providers.omdb_api_key = value.to_string(),
        "rawg_api_key" => config.providers.rawg_api_key = value.to_string(),
        "timeout_secs" => {
            config.lookup.timeout_secs = value
                .parse()
                .map_err(|_| eyre!("timeout_secs must be a number of seconds"))?;
        }
        _ => {
            return Err(eyre!(
                "Unknown config key: {}. Valid keys: tmdb_api_key, omdb_api_key, rawg_api_key, timeout_secs",
                key
            ));
        }
    }

    config.save(&config_file).map_err(|e| eyre!("{}", e))?;
    output.success(format!("Set {}", key));
    Ok(())
}

fn mask_string(s: &str) -> String {
    if s.is_empty() {
        return "<not set>".to_string();
    }
    if s.len() <= 4 {
        return "*".repeat(s.len());
    }
    format!("{}***{}", &s[..2], &s[s.len() - 2..])
}
