//! rename-brand - bulk brand-name replacement
//!
//! Run from the project root (the directory containing `public/`). Walks
//! the whole tree and applies the brand-migration rules in place. Takes no
//! flags; a second run is a no-op.

use std::path::Path;

use colored::Colorize;

use guide_rename::{scan_tree, BRAND_RULES};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_target(false)
        .init();

    println!("{}", "=".repeat(60));
    println!("🏝️  Chiang Mai Guide - brand rename");
    println!("{}", "=".repeat(60));
    println!();

    let root = std::env::current_dir()?;
    if !root.join("public").is_dir() {
        eprintln!(
            "{}",
            "❌ error: run this from the project root (no public/ directory here)".red()
        );
        std::process::exit(1);
    }

    println!("📁 project directory: {}", root.display());
    println!("🔄 replacement rules:");
    for rule in BRAND_RULES {
        println!("   '{}' -> '{}'", rule.from, rule.to);
    }
    println!();
    println!("{}", "-".repeat(60));
    println!();

    let summary = scan_tree(&root, BRAND_RULES)?;

    for (path, occurrences) in &summary.modified {
        println!(
            "{} {} ({} replacements)",
            "✅".green(),
            path.display(),
            occurrences
        );
    }
    for (path, reason) in &summary.skipped {
        println!(
            "{} skipped {}: {}",
            "⚠️ ".yellow(),
            relative_to(path, &root).display(),
            reason
        );
    }

    println!();
    println!("{}", "-".repeat(60));
    println!();
    println!("📊 results:");
    println!("   files scanned:  {}", summary.scanned);
    println!("   files modified: {}", summary.modified.len());
    println!("   replacements:   {}", summary.total_replacements);
    if !summary.skipped.is_empty() {
        println!(
            "   files skipped:  {} {}",
            summary.skipped.len(),
            "(read/write failed)".yellow()
        );
    }
    println!();
    println!("{}", "✅ brand rename complete".green());
    println!("{}", "=".repeat(60));

    Ok(())
}

fn relative_to<'a>(path: &'a Path, root: &Path) -> &'a Path {
    path.strip_prefix(root).unwrap_or(path)
}
