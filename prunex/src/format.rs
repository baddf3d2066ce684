use owo_colors::OwoColorize;
use std::io::IsTerminal;

/// Check if we should use colors in output
pub fn should_color() -> bool {
    std::io::stdout().is_terminal() && std::env::var("NO_COLOR").is_err()
}

/// Print a success message with optional coloring
pub fn success(message: &str) {
    if should_color() {
        println!("{} {}", "✓".green().bold(), message);
    } else {
        println!("✓ {}", message);
    }
}

/// Print an error message with optional coloring
pub fn error(message: &str) {
    if should_color() {
        eprintln!("{} {}", "✗".red().bold(), message);
    } else {
        eprintln!("✗ {}", message);
    }
}

/// Print a warning message with optional coloring
pub fn warning(message: &str) {
    if should_color() {
        println!("{} {}", "⚠".yellow().bold(), message);
    } else {
        println!("⚠ {}", message);
    }
}

#[cfg(test)]
mod tests {
    // Coloring depends on the ambient terminal, so the tests only pin that
    // the helpers run without panicking in either mode.

    #[test]
    fn test_helpers_do_not_panic() {
        super::success("done");
        super::warning("careful");
        super::error("broken");
        let _ = super::should_color();
    }
}
