//! Command-line arguments and host configuration

use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};
use sketchbook_config::CanvasConfig;

/// Command-line arguments for the sketchbook host.
#[derive(Debug, Clone, Parser)]
#[command(name = "sketchbook")]
#[command(about = "Replay drawing gestures, export PNG and submit to the gallery")]
#[command(version)]
pub struct CliArgs {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Replay a pointer-event script onto a fresh canvas
    Draw(DrawArgs),
    /// List the palette swatches
    Palette,
}

#[derive(Debug, Clone, clap::Args)]
pub struct DrawArgs {
    /// JSON file holding the event script
    #[arg(long)]
    pub script: PathBuf,

    /// Where to write the exported PNG
    #[arg(long, default_value = "painting.png")]
    pub out: PathBuf,

    /// JSON canvas config (missing fields use defaults)
    #[arg(long, env = "SKETCHBOOK_CONFIG")]
    pub config: Option<PathBuf>,

    /// Logical canvas width, overrides config and environment
    #[arg(long)]
    pub width: Option<u32>,

    /// Logical canvas height, overrides config and environment
    #[arg(long)]
    pub height: Option<u32>,

    /// Device pixel ratio, overrides config and environment
    #[arg(long)]
    pub scale: Option<f32>,

    /// Title for the submitted painting (defaults to "Painting <date>")
    #[arg(long)]
    pub title: Option<String>,

    /// Submit the export to the in-process gallery after drawing
    #[arg(long)]
    pub submit: bool,

    /// Identity to submit as
    #[arg(long, env = "SKETCHBOOK_USER", default_value = "local")]
    pub user: String,
}

impl DrawArgs {
    /// Resolve the canvas config: file (or defaults), then environment, then flags
    pub fn canvas_config(&self) -> anyhow::Result<CanvasConfig> {
        let mut config = match &self.config {
            Some(path) => {
                let mut config = CanvasConfig::from_file(path)
                    .with_context(|| format!("loading canvas config {}", path.display()))?;
                config
                    .apply_env()
                    .context("applying SKETCHBOOK_* environment overrides")?;
                config
            }
            None => CanvasConfig::from_env()
                .context("applying SKETCHBOOK_* environment overrides")?,
        };

        if let Some(width) = self.width {
            config.display.width = width;
        }
        if let Some(height) = self.height {
            config.display.height = height;
        }
        if let Some(scale) = self.scale {
            config.display.scale = scale;
        }
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_draw_args() {
        let args = CliArgs::parse_from([
            "sketchbook",
            "draw",
            "--script",
            "strokes.json",
            "--width",
            "320",
            "--scale",
            "2",
            "--submit",
        ]);

        let Command::Draw(draw) = args.command else {
            panic!("expected draw subcommand");
        };
        assert_eq!(draw.script, PathBuf::from("strokes.json"));
        assert_eq!(draw.out, PathBuf::from("painting.png"));
        assert!(draw.submit);

        let config = draw.canvas_config().unwrap();
        assert_eq!(config.display.width, 320);
        assert_eq!(config.display.scale, 2.0);
    }
}
