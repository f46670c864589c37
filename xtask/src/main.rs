//! Development tasks for html-extractor.
//!
//! Run with `cargo xtask <task>`.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser, Subcommand};

#[derive(Parser)]
#[command(name = "xtask", about = "Development tasks for html-extractor")]
struct Xtask {
    #[command(subcommand)]
    task: Task,
}

#[derive(Subcommand)]
enum Task {
    /// Generate man pages for html-extractor and its subcommands
    GenMan {
        /// Output directory
        #[arg(short, long, default_value = "target/man")]
        out: PathBuf,
    },
}

fn main() -> Result<()> {
    match Xtask::parse().task {
        Task::GenMan { out } => gen_man(&out),
    }
}

fn gen_man(out: &Path) -> Result<()> {
    fs::create_dir_all(out).with_context(|| format!("creating {}", out.display()))?;

    let cmd = html_extractor::cli::Cli::command();
    let name = cmd.get_name().to_string();
    write_page(out, &name, cmd.clone())?;

    for sub in cmd.get_subcommands() {
        let page = format!("{}-{}", name, sub.get_name());
        write_page(out, &page, sub.clone())?;
    }

    println!("Man pages written to {}", out.display());
    Ok(())
}

fn write_page(out: &Path, name: &str, cmd: clap::Command) -> Result<()> {
    let mut buffer = Vec::new();
    clap_mangen::Man::new(cmd).render(&mut buffer)?;
    let path = out.join(format!("{name}.1"));
    fs::write(&path, buffer).with_context(|| format!("writing {}", path.display()))?;
    Ok(())
}
