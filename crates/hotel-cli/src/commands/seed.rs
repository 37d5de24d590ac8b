//! Seed import commands
//!
//! Usage: hotel seed import <PATH> | hotel seed demo

use super::CommandResult;
use clap::{Args, Subcommand};
use hotel_engine::Repository;
use std::path::{Path, PathBuf};

#[derive(Debug, Args)]
pub struct SeedArgs {
    #[command(subcommand)]
    pub command: SeedCommand,
}

#[derive(Debug, Subcommand)]
pub enum SeedCommand {
    /// Import a seed file, or every seed file in a directory
    Import(ImportArgs),
    /// Load the built-in sample customer, room and booking
    Demo,
}

#[derive(Debug, Args)]
pub struct ImportArgs {
    /// Path to seed YAML file or directory
    pub path: PathBuf,
}

pub fn execute(args: SeedArgs, repo: &mut Repository) -> CommandResult {
    match args.command {
        SeedCommand::Import(import_args) => execute_import(import_args, repo),
        SeedCommand::Demo => {
            let summary = repo.import_demo()?;
            println!("✓ Imported demo data ({})", summary);
            Ok(())
        }
    }
}

fn execute_import(args: ImportArgs, repo: &mut Repository) -> CommandResult {
    let seed_files = if args.path.is_dir() {
        seed_files_in(&args.path)?
    } else {
        vec![args.path]
    };

    for seed_file in seed_files {
        println!("Importing {}...", seed_file.display());
        let summary = repo.import_seed(&seed_file)?;
        println!("✓ Imported ({})", summary);
    }

    Ok(())
}

/// `.yaml`/`.yml` files directly inside `dir`, sorted for determinism
fn seed_files_in(dir: &Path) -> std::io::Result<Vec<PathBuf>> {
    let mut seed_files: Vec<PathBuf> = std::fs::read_dir(dir)?
        .filter_map(|e| e.ok())
        .map(|e| e.path())
        .filter(|p| {
            p.extension()
                .map(|ext| ext == "yaml" || ext == "yml")
                .unwrap_or(false)
        })
        .collect();

    seed_files.sort();
    Ok(seed_files)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_files_in_filters_and_sorts() {
        let dir = tempfile::TempDir::new().unwrap();
        for name in ["b.yml", "a.yaml", "notes.txt", "c.json"] {
            std::fs::write(dir.path().join(name), "").unwrap();
        }

        let files = seed_files_in(dir.path()).unwrap();
        let names: Vec<_> = files
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
            .collect();

        assert_eq!(names, vec!["a.yaml", "b.yml"]);
    }
}
