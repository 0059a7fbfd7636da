use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::prelude::*;

/// Guess the image format of files by their magic bytes
#[derive(Parser, Debug)]
#[command(name = "sniff", version, long_about = None)]
struct Cli {
    /// Descend into all directories, not only the given ones
    #[arg(short, long)]
    recursive: bool,

    /// Files and directories to check
    #[arg(default_value = ".")]
    paths: Vec<PathBuf>,
}

#[derive(Debug, thiserror::Error)]
enum Error {
    #[error("Interrupted")]
    Interrupted,
    #[error("Output: {0}")]
    Output(#[from] std::io::Error),
}

fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::builder().from_env_lossy())
        .with(
            tracing_subscriber::fmt::Layer::default()
                .compact()
                .with_writer(std::io::stderr),
        )
        .init();

    let running = Arc::new(AtomicBool::new(true));
    let r = running.clone();
    ctrlc::set_handler(move || {
        r.store(false, Ordering::SeqCst);
    })
    .context("Failed to set Ctrl+C handler")?;

    let mut walker = Walker {
        out: std::io::stdout().lock(),
        recursive: cli.recursive,
        running: &running,
    };

    match walker.walk(&cli.paths, true) {
        Ok(()) => Ok(ExitCode::SUCCESS),
        Err(Error::Interrupted) => {
            eprintln!("\n[Interrupted]");
            Ok(ExitCode::from(1))
        }
        Err(err) => Err(err).context("Failed to write results"),
    }
}

struct Walker<'a, W> {
    out: W,
    recursive: bool,
    running: &'a AtomicBool,
}

impl<W: Write> Walker<'_, W> {
    /// Prints the format of all files
    ///
    /// Directories given on the top level are always listed, deeper ones only
    /// with `recursive`.
    fn walk(&mut self, paths: &[PathBuf], toplevel: bool) -> Result<(), Error> {
        for path in paths {
            if !self.running.load(Ordering::SeqCst) {
                return Err(Error::Interrupted);
            }

            if path.is_dir() {
                writeln!(self.out, "{}/:", path.display())?;
                if self.recursive || toplevel {
                    writeln!(self.out, "recursing down:")?;
                    self.walk(&list_dir(path), false)?;
                } else {
                    writeln!(self.out, "*** directory (use -r) ***")?;
                }
            } else {
                self.show_file(path)?;
            }
        }

        Ok(())
    }

    fn show_file(&mut self, path: &Path) -> Result<(), Error> {
        let path_display = path.display();
        match sniff::from_path(path) {
            Ok(Some(format)) => writeln!(self.out, "{path_display}: {format}")?,
            Ok(None) => writeln!(self.out, "{path_display}: none")?,
            Err(err) if err.is_not_found() => {
                writeln!(self.out, "{path_display}: *** not found ***")?
            }
            Err(err) => {
                tracing::debug!("Failed to check '{path_display}': {err}");
                writeln!(
                    self.out,
                    "{path_display}: *** cannot read: {} ***",
                    err.io_error()
                )?
            }
        }

        self.out.flush()?;
        Ok(())
    }
}

/// Sorted directory entries, without hidden ones
fn list_dir(dir: &Path) -> Vec<PathBuf> {
    let pattern = Path::new(&glob::Pattern::escape(&dir.to_string_lossy())).join("*");
    let options = glob::MatchOptions {
        require_literal_leading_dot: true,
        ..glob::MatchOptions::new()
    };

    match glob::glob_with(&pattern.to_string_lossy(), options) {
        Ok(paths) => paths
            .filter_map(|entry| {
                entry
                    .inspect_err(|err| tracing::info!("Skipping entry: {err}"))
                    .ok()
            })
            .collect(),
        Err(err) => {
            tracing::info!("Cannot list '{}': {err}", dir.display());
            Vec::new()
        }
    }
}
