pub mod handlers;

use crate::config::{self, Config};
use libprunex::Prunex;

#[cfg(test)]
mod tests;

/// Load the credentials config and build a connected `Prunex` instance.
///
/// Every image subcommand starts here; a missing or broken config is a
/// user-actionable error, not a panic.
fn build_prunex() -> Result<Prunex, String> {
    let config_path = config::get_config_path();
    let config = Config::load(&config_path).map_err(|e| e.to_string())?;

    let mut builder = Prunex::builder().registry_url(&config.registry_url());
    if let Some(creds) = config.credentials() {
        builder = builder.with_credentials(creds);
    }

    builder
        .build()
        .map_err(|e| format!("Failed to create registry client: {}", e))
}

/// One report line for a planned tag deletion.
fn delete_report_line(image: &str, tag: &str, dry_run: bool) -> String {
    if dry_run {
        format!("{}:{} image would be deleted (dry run)", image, tag)
    } else {
        format!("{}:{} image will be deleted ...", image, tag)
    }
}
