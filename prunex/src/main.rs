use clap::{ArgGroup, CommandFactory, Parser, Subcommand};

mod commands;
mod config;
mod format;

/// Prunex - Registry Tag Pruner
///
/// A CLI tool for pruning Docker image tags in a private (Nexus-hosted)
/// registry: list images and tags, inspect manifests, and delete tags by
/// name or by a keep-N retention policy.
#[derive(Parser, Debug)]
#[command(name = "prunex")]
#[command(version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Configure registry credentials
    Configure,
    /// Manage Docker images
    Image {
        #[command(subcommand)]
        command: ImageCommands,
    },
    /// Generate shell completion scripts
    Completion {
        /// Shell to generate completion for
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

#[derive(Subcommand, Debug)]
enum ImageCommands {
    /// List all images in the repository
    #[command(visible_alias = "ls")]
    List,
    /// Display all image tags
    Tags {
        /// Image name
        #[arg(short, long)]
        name: String,
        /// Sort order: default (numeric suffix) or semver.
        /// Unrecognized values fall back to default.
        #[arg(short, long, default_value = "default")]
        sort: String,
    },
    /// Show image details
    Info {
        /// Image name
        #[arg(short, long)]
        name: String,
        /// Image tag
        #[arg(short, long)]
        tag: String,
    },
    /// Delete an image tag, or prune old tags with --keep
    #[command(group(
        ArgGroup::new("selector")
            .required(true)
            .args(["tag", "keep"]),
    ))]
    Delete {
        /// Image name
        #[arg(short, long)]
        name: String,
        /// Delete exactly this tag
        #[arg(short, long)]
        tag: Option<String>,
        /// Keep the K newest tags and delete the rest
        #[arg(short, long)]
        keep: Option<usize>,
        /// Sort order used to rank tags: default or semver
        #[arg(short, long, default_value = "default")]
        sort: String,
        /// Report what would be deleted without deleting anything
        #[arg(short, long)]
        dry_run: bool,
    },
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    match cli.command {
        Commands::Configure => {
            commands::configure::handle_configure();
        }
        Commands::Image { command } => match command {
            ImageCommands::List => {
                commands::image::handlers::handle_image_list().await;
            }
            ImageCommands::Tags { name, sort } => {
                commands::image::handlers::handle_image_tags(&name, &sort).await;
            }
            ImageCommands::Info { name, tag } => {
                commands::image::handlers::handle_image_info(&name, &tag).await;
            }
            ImageCommands::Delete {
                name,
                tag,
                keep,
                sort,
                dry_run,
            } => {
                commands::image::handlers::handle_image_delete(
                    &name,
                    tag.as_deref(),
                    keep,
                    &sort,
                    dry_run,
                )
                .await;
            }
        },
        Commands::Completion { shell } => {
            let mut cmd = Cli::command();
            let bin_name = cmd.get_name().to_string();
            clap_complete::generate(shell, &mut cmd, bin_name, &mut std::io::stdout());
        }
    }
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
