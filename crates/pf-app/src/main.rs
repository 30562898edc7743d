use std::io::Read;

use anyhow::{Context, Result};
use clap::Parser;
use pf_render::renderer::{RenderInput, render};

pub mod cli;

fn main() -> Result<()> {
    // 1. Parse CLI
    let cli = cli::Cli::parse();

    // 2. Initialize logging
    env_logger::Builder::new()
        .filter_level(cli.log_level.parse().unwrap_or(log::LevelFilter::Warn))
        .init();

    // 3. Resolve config, then overlay CLI flags
    let mut config = match cli.config {
        Some(ref path) => pf_core::config::load_config(path)?,
        None => pf_core::config::FormatConfig::default(),
    };
    cli.apply_overrides(&mut config);

    // 4. Render
    let output = if let Some(ref path) = cli.image {
        let pixels = pf_source::image::load_image(path)?;
        render(RenderInput::Image(&pixels), &config)?
    } else {
        let text = match cli.text {
            Some(ref text) => text.clone(),
            None => {
                let mut buf = String::new();
                std::io::stdin()
                    .read_to_string(&mut buf)
                    .context("cannot read text from stdin")?;
                // A trailing newline from the shell is not content.
                buf.truncate(buf.trim_end_matches('\n').len());
                buf
            }
        };
        render(RenderInput::Text(&text), &config)?
    };

    println!("{output}");
    Ok(())
}
