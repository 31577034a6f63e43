//! Sketchbook - headless drawing host
//!
//! Replays a pointer-event script onto a drawing surface, writes the PNG
//! export and optionally submits it to an in-process gallery.

mod config;
mod script;

use anyhow::{Context, bail};
use clap::Parser;
use painting::{DrawingSurface, PRESET_COLORS};
use sketchbook_gallery::{GalleryClient, InMemoryBackend, UserId, default_title};
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use config::{CliArgs, Command, DrawArgs};
use script::{DrawSession, parse_script};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();

    let args = CliArgs::parse();
    match args.command {
        Command::Draw(draw) => run_draw(draw).await,
        Command::Palette => {
            for (index, color) in PRESET_COLORS.iter().enumerate() {
                println!("{index:>2}  {color}");
            }
            Ok(())
        }
    }
}

/// Initialize logging.
///
/// Set `RUST_LOG` to control log levels (default: info).
fn init_tracing() {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer().with_target(true))
        .init();
}

async fn run_draw(args: DrawArgs) -> anyhow::Result<()> {
    let canvas = args.canvas_config()?;
    let surface = DrawingSurface::new(&canvas).context("creating drawing surface")?;

    let text = std::fs::read_to_string(&args.script)
        .with_context(|| format!("reading script {}", args.script.display()))?;
    let events = parse_script(&text)
        .with_context(|| format!("parsing script {}", args.script.display()))?;

    let mut session = DrawSession::new(surface);
    session.replay(&events);
    if session.surface.is_gesturing() {
        warn!("Script ended mid-gesture; the unfinished stroke is not in history");
    }

    let bytes = session.surface.export_bytes();
    if bytes.is_empty() {
        bail!("export produced no data; nothing to save or submit");
    }
    std::fs::write(&args.out, &bytes)
        .with_context(|| format!("writing {}", args.out.display()))?;
    info!(
        "Wrote {} ({}x{} at scale {}, {} bytes)",
        args.out.display(),
        session.surface.physical_width(),
        session.surface.physical_height(),
        session.surface.scale(),
        bytes.len()
    );

    if args.submit {
        submit(bytes, args.title, UserId(args.user)).await?;
    }
    Ok(())
}

async fn submit(bytes: Vec<u8>, title: Option<String>, user: UserId) -> anyhow::Result<()> {
    let backend = InMemoryBackend::new();
    let mut client = GalleryClient::new(backend.session(user.clone()));

    let created_ms = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0);
    let title = title.unwrap_or_else(|| default_title(created_ms));

    let id = client
        .complete_painting(bytes, title)
        .await
        .context("submitting painting")?;

    let gallery = client.gallery().await.context("fetching gallery")?;
    for painting in gallery {
        println!(
            "{}  \"{}\" by {} ({} bytes)",
            painting.id,
            painting.title,
            painting.author,
            painting.image.len()
        );
    }

    let summary = client
        .rating_summary(&id, Some(&user))
        .await
        .context("fetching ratings")?;
    match summary.average {
        Some(average) => println!("{id}: {average:.1}/10 from {} ratings", summary.total),
        None => println!("{id}: no ratings yet"),
    }
    Ok(())
}
