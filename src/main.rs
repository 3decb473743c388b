use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use color_lift::{
    AnsiRenderer, Color, ColorGenerator, Config, ConfigOverrides, Host, Parent, SeededColors,
    ThreadRngColors,
};

#[derive(Parser, Debug)]
#[command(name = "color-lift")]
#[command(version)]
#[command(about = "Click children, watch the parent keep them in sync", long_about = None)]
struct Cli {
    /// TOML config file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Number of children to render
    #[arg(long)]
    children: Option<usize>,

    /// Seed for reproducible colors
    #[arg(long)]
    seed: Option<u64>,

    /// Color children start with, e.g. "#FFF"
    #[arg(long)]
    children_color: Option<Color>,

    /// Print keys and hex values without ANSI swatches
    #[arg(long)]
    no_color: bool,

    /// Enable debug logging (takes precedence over RUST_LOG)
    #[arg(short, long)]
    verbose: bool,

    /// Child keys to click in order, e.g. child-1 child-2
    clicks: Vec<String>,
}

/// `--verbose` wins over `RUST_LOG`, which wins over the `info` default.
fn log_filter(verbose: bool) -> EnvFilter {
    if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let subscriber = FmtSubscriber::builder()
        .with_env_filter(log_filter(cli.verbose))
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)
        .context("failed to set tracing subscriber")?;

    let mut config = match &cli.config {
        Some(path) => Config::load(path)
            .with_context(|| format!("loading config from {}", path.display()))?,
        None => Config::default(),
    };
    config.apply_overrides(ConfigOverrides {
        children: cli.children,
        children_color: cli.children_color,
        seed: cli.seed,
    })?;

    let generator: Arc<dyn ColorGenerator + Send + Sync> = match config.seed {
        Some(seed) => Arc::new(SeededColors::new(seed)),
        None => Arc::new(ThreadRngColors),
    };
    let parent = Parent::with_shared_generator(generator)
        .with_children(config.children)
        .with_initial_children_color(config.children_color.clone());

    let renderer = AnsiRenderer::new(std::io::stdout());
    let renderer = if cli.no_color { renderer.plain() } else { renderer };

    let mut host = Host::mount(parent, renderer);
    tracing::info!(children = config.children, "mounted parent");

    for key in &cli.clicks {
        host.click(key)
            .with_context(|| format!("clicking `{key}`"))?;
    }

    let model = host.unmount();
    tracing::info!(
        parent = %model.color,
        children = %model.children_color,
        "final colors"
    );
    Ok(())
}
