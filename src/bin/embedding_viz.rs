//! embedding-viz - render the word-embedding vector diagram.
//!
//! Writes `embedding_example.png` to the working directory, then previews
//! the figure in the terminal when stdout is one. Log verbosity follows
//! `RUST_LOG` and defaults to `info`.

use anyhow::{Context, Result};
use embedding_viz::prelude::*;
use std::io::IsTerminal;

/// Output file, relative to the working directory.
const OUTPUT_FILE: &str = "embedding_example.png";

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let points = transform_all(&EMBEDDINGS).context("failed to transform embeddings")?;
    for p in &points {
        tracing::debug!(name = p.name(), x = p.x(), y = p.y(), "display coordinates");
    }

    let scene = Scene::embedding_diagram(&points);
    tracing::info!(
        points = scene.count(MarkKind::Point),
        arrows = scene.count(MarkKind::Arrow),
        labels = scene.count(MarkKind::Label),
        "built scene"
    );

    let figure = EmbeddingFigure::new(scene);
    let fb = figure.save(OUTPUT_FILE).with_context(|| format!("failed to write {OUTPUT_FILE}"))?;

    if std::io::stdout().is_terminal() {
        TerminalPreview::new().print(&fb);
        tracing::info!("shown terminal preview");
    } else {
        tracing::info!("stdout is not a terminal, skipping preview");
    }

    Ok(())
}
