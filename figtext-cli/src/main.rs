//! Renders text as block letters using the fonts bundled with `figtext`, or a font file.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context as _, Result};
use clap::Parser;
use figtext::font::GlyphTable;
use figtext::{DEFAULT_TEXT, echo, echo_all, list};
use log::warn;

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let cli = Cli::parse();
    if cli.list {
        list()?;
    } else if cli.view_all {
        echo_all(&cli.text)?;
    } else if let Some(path) = &cli.font_file {
        println!("{}", cli.render_file(path)?);
    } else {
        echo(&cli.text, cli.face.as_deref().unwrap_or_default())?;
    }
    Ok(())
}

#[derive(Parser)]
#[command(version, about)]
struct Cli {
    /// Text to render
    #[arg(default_value = DEFAULT_TEXT)]
    text: String,
    /// Name of a bundled font (see `--list`)
    #[arg(short = 'f', long)]
    face: Option<String>,
    /// Path to an `.flf` file to use instead of a bundled font
    #[arg(long, conflicts_with = "face")]
    font_file: Option<PathBuf>,
    /// List the bundled fonts
    #[arg(short, long)]
    list: bool,
    /// Render the text in every bundled font
    #[arg(short = 'a', long, conflicts_with_all = ["face", "font_file", "list"])]
    view_all: bool,
}

impl Cli {
    fn render_file(&self, path: &Path) -> Result<String> {
        let bytes = fs::read(path).with_context(|| format!("reading {}", path.display()))?;
        let (table, warnings) = GlyphTable::from_bytes_with_warnings(bytes);
        for warning in warnings {
            warn!("{}: {warning}", path.display());
        }
        Ok(table.render(&self.text)?)
    }
}
