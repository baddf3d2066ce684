use super::*;
use crate::format;
use libprunex::{RetentionPlan, SortStrategy};

/// Handle the image list command.
pub async fn handle_image_list() {
    let prunex = match build_prunex() {
        Ok(p) => p,
        Err(e) => {
            format::error(&e);
            std::process::exit(1);
        }
    };

    let images = match prunex.list_images().await {
        Ok(imgs) => imgs,
        Err(e) => {
            format::error(&e.to_string());
            std::process::exit(1);
        }
    };

    for image in &images {
        println!("{}", image);
    }
    println!("Total images: {}", images.len());
}

/// Handle the image tags command (list tags, sorted per the strategy).
pub async fn handle_image_tags(name: &str, sort: &str) {
    // Anything other than "semver" silently falls back to the default
    // numeric-extraction order.
    let strategy = SortStrategy::from(sort);

    let prunex = match build_prunex() {
        Ok(p) => p,
        Err(e) => {
            format::error(&e);
            std::process::exit(1);
        }
    };

    let tags = match prunex.sorted_tags(name, strategy).await {
        Ok(tags) => tags,
        Err(e) => {
            format::error(&e.to_string());
            std::process::exit(1);
        }
    };

    for tag in &tags {
        println!("{}", tag);
    }
    println!("There are {} images for {}", tags.len(), name);
}

/// Handle the image info command (manifest size and layers).
pub async fn handle_image_info(name: &str, tag: &str) {
    let prunex = match build_prunex() {
        Ok(p) => p,
        Err(e) => {
            format::error(&e);
            std::process::exit(1);
        }
    };

    let manifest = match prunex.image_manifest(name, tag).await {
        Ok(m) => m,
        Err(e) => {
            format::error(&e.to_string());
            std::process::exit(1);
        }
    };

    println!("Image: {}:{}", name, tag);
    println!("Size: {}", manifest.config().size());
    println!("Layers:");
    for layer in manifest.layers() {
        println!("\t{}\t{}", layer.digest(), layer.size());
    }
}

/// Handle the image delete command: explicit tag, or keep-K retention.
pub async fn handle_image_delete(
    name: &str,
    tag: Option<&str>,
    keep: Option<usize>,
    sort: &str,
    dry_run: bool,
) {
    let prunex = match build_prunex() {
        Ok(p) => p,
        Err(e) => {
            format::error(&e);
            std::process::exit(1);
        }
    };

    // Explicit tag wins; clap already guarantees exactly one of --tag/--keep.
    if let Some(tag) = tag {
        if dry_run {
            println!("{}", delete_report_line(name, tag, true));
            return;
        }
        match prunex.delete_tag(name, tag).await {
            Ok(()) => format::success(&format!("Deleted {}:{}", name, tag)),
            Err(e) => {
                format::error(&e.to_string());
                std::process::exit(1);
            }
        }
        return;
    }

    let keep = keep.unwrap_or(0);
    if keep == 0 {
        format::error("You should either specify the tag or how many images you want to keep");
        std::process::exit(1);
    }

    let strategy = SortStrategy::from(sort);
    prune_by_keep(&prunex, name, keep, strategy, dry_run).await;
}

/// Rank the image's tags, plan the keep-K retention, and carry it out.
///
/// A tag count below the keep-count is an informational outcome: the
/// shortfall is reported and no registry mutation happens.
pub(crate) async fn prune_by_keep(
    prunex: &libprunex::Prunex,
    name: &str,
    keep: usize,
    strategy: SortStrategy,
    dry_run: bool,
) {
    let tags = match prunex.sorted_tags(name, strategy).await {
        Ok(tags) => tags,
        Err(e) => {
            format::error(&e.to_string());
            std::process::exit(1);
        }
    };

    let plan = RetentionPlan::plan(&tags, keep);
    if !plan.sufficient {
        println!("{}", shortfall_line(tags.len()));
        return;
    }

    execute_plan(prunex, name, &plan, keep, dry_run).await;
}

/// Report line for a tag count that falls short of the keep-count.
pub(crate) fn shortfall_line(available: usize) -> String {
    format!("Only {} images are available", available)
}

/// Execute (or report, under dry-run) a retention plan, oldest first.
///
/// Deletions are strictly sequential; the first failure aborts the run and
/// everything after it stays untouched.
pub(crate) async fn execute_plan(
    prunex: &libprunex::Prunex,
    name: &str,
    plan: &RetentionPlan,
    keep: usize,
    dry_run: bool,
) {
    for tag in &plan.to_delete {
        println!("{}", delete_report_line(name, tag, dry_run));
        if !dry_run {
            if let Err(e) = prunex.delete_tag(name, tag).await {
                format::error(&e.to_string());
                std::process::exit(1);
            }
        }
    }

    if dry_run {
        println!(
            "Dry run: {} tags would be deleted, {} kept",
            plan.to_delete.len(),
            keep
        );
    } else if plan.to_delete.is_empty() {
        println!("Nothing to delete, {} or fewer tags present", keep);
    } else {
        format::success(&format!(
            "Deleted {} tags from {}, kept {}",
            plan.to_delete.len(),
            name,
            keep
        ));
    }
}
