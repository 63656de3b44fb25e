//! Write a starter `globfile.toml`

use std::fs;

use globfile::config::{CONFIG_FILE, Config};
use globfile::output::OutputMode;

const TEMPLATE: &str = r#"# globfile configuration

# Root that `glob[files]:` and `glob[filepaths]:` keys are relative to.
# When unset, the monorepo root (or nearest package.json) is discovered.
# project_root = "."
monorepo = true

[generation]
# "module" (import/export) or "commonjs" (require/module.exports)
module_type = "module"
# "absolute" or "relative" import paths
filepath_type = "absolute"
"#;

/// Create `globfile.toml` in the current directory
pub fn init(force: bool, mode: OutputMode) -> anyhow::Result<()> {
    let path = Config::config_path(&std::env::current_dir()?);

    if path.exists() && !force {
        if mode == OutputMode::Json {
            println!("{}", serde_json::json!({ "created": false, "path": path }));
        } else {
            println!("Already initialized ({CONFIG_FILE} exists).");
            println!("Use --force to overwrite.");
        }
        return Ok(());
    }

    fs::write(&path, TEMPLATE)?;
    if mode == OutputMode::Json {
        println!("{}", serde_json::json!({ "created": true, "path": path }));
    } else {
        println!("Created {CONFIG_FILE}");
    }
    Ok(())
}
