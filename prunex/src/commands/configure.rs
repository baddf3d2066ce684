use crate::config::{self, Config};
use crate::format;
use std::io::Write;

/// Prompt on stdout and read one trimmed line from stdin.
fn prompt_line(label: &str) -> Result<String, String> {
    print!("{}", label);
    std::io::stdout()
        .flush()
        .map_err(|e| format!("Failed to flush stdout: {}", e))?;

    let mut input = String::new();
    std::io::stdin()
        .read_line(&mut input)
        .map_err(|e| format!("Failed to read input: {}", e))?;

    Ok(input.trim().to_string())
}

/// Interactively collect host, repository, and credentials and write them to
/// the config file.
fn configure() -> Result<(), String> {
    let entered_host = prompt_line("Enter Nexus Host: ")?;
    let host = config::validate_host_url(&entered_host)?;
    if entered_host.ends_with('/') {
        format::warning(&format!(
            "Removed trailing slash from Nexus host URL, now: {}",
            host
        ));
    }

    let repository = prompt_line("Enter Nexus Repository Name: ")?;
    let username = prompt_line("Enter Nexus Username: ")?;
    let password = rpassword::prompt_password("Enter Nexus Password: ")
        .map_err(|e| format!("Failed to read password: {}", e))?;

    let config = Config {
        host,
        repository,
        username,
        password,
    };

    let config_path = config::get_config_path();
    config.save(&config_path).map_err(|e| e.to_string())?;

    println!("Configuration saved to: {}", config_path.display());
    Ok(())
}

/// Handle the configure command.
pub fn handle_configure() {
    match configure() {
        Ok(()) => {}
        Err(e) => {
            format::error(&e);
            std::process::exit(1);
        }
    }
}
