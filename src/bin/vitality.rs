use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::Context as _;
use clap::{Parser, Subcommand};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};
use vitality::{
    Deck, DrawCommand, Position, Presenter, RecordingRenderer, SceneRenderer, parse_keys,
};

#[derive(Parser, Debug)]
#[command(name = "vitality", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Load a deck and check it for errors.
    Validate(ValidateArgs),
    /// Drive a deck with a key script and print the resulting draw calls as JSON.
    Play(PlayArgs),
    /// Drive a deck with a key script and write the final frame as SVG.
    Frame(FrameArgs),
}

#[derive(Parser, Debug)]
struct ValidateArgs {
    /// Input deck JSON.
    #[arg(long = "in")]
    in_path: PathBuf,
}

#[derive(Parser, Debug)]
struct PlayArgs {
    /// Input deck JSON.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Whitespace-separated keys, e.g. "right right g 2 enter".
    #[arg(long, default_value = "")]
    keys: String,
}

#[derive(Parser, Debug)]
struct FrameArgs {
    /// Input deck JSON.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Whitespace-separated keys, e.g. "right right g 2 enter".
    #[arg(long, default_value = "")]
    keys: String,

    /// Sample running animations this many milliseconds after the last key instead of settling
    /// them.
    #[arg(long)]
    at_ms: Option<u64>,

    /// Output SVG path.
    #[arg(long)]
    out: PathBuf,
}

#[derive(serde::Serialize)]
struct PlayReport<'a> {
    position: Position,
    previous: Option<Position>,
    commands: &'a [DrawCommand],
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "vitality=info".into()))
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    match cli.cmd {
        Command::Validate(args) => cmd_validate(args),
        Command::Play(args) => cmd_play(args),
        Command::Frame(args) => cmd_frame(args),
    }
}

fn load(path: &Path) -> anyhow::Result<Deck> {
    let deck =
        Deck::from_path(path).with_context(|| format!("load deck '{}'", path.display()))?;
    deck.validate()
        .with_context(|| format!("validate deck '{}'", path.display()))?;
    Ok(deck)
}

fn drive<R: vitality::Renderer>(presenter: &mut Presenter<R>, keys: &str) -> anyhow::Result<()> {
    for key in parse_keys(keys) {
        presenter
            .handle_key(key)
            .with_context(|| format!("apply key {key:?}"))?;
    }
    tracing::info!(position = ?presenter.position(), "key script done");
    Ok(())
}

fn cmd_validate(args: ValidateArgs) -> anyhow::Result<()> {
    let deck = load(&args.in_path)?;
    println!(
        "{}: ok ({} slides)",
        args.in_path.display(),
        deck.slide_count()
    );
    Ok(())
}

fn cmd_play(args: PlayArgs) -> anyhow::Result<()> {
    let deck = load(&args.in_path)?;
    let mut presenter = Presenter::new(deck, RecordingRenderer::new())?;
    drive(&mut presenter, &args.keys)?;

    let report = PlayReport {
        position: presenter.position(),
        previous: presenter.previous(),
        commands: presenter.renderer().commands(),
    };
    let json = serde_json::to_string_pretty(&report).context("serialize draw trace")?;
    println!("{json}");
    Ok(())
}

fn cmd_frame(args: FrameArgs) -> anyhow::Result<()> {
    let deck = load(&args.in_path)?;
    let scene = SceneRenderer::new(deck.size());
    let mut presenter = Presenter::new(deck, scene)?;
    drive(&mut presenter, &args.keys)?;

    let scene = presenter.renderer_mut();
    match args.at_ms {
        Some(ms) => scene.advance_clock(Duration::from_millis(ms)),
        None => scene.settle(),
    }

    if let Some(parent) = args.out.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }
    std::fs::write(&args.out, scene.to_svg())
        .with_context(|| format!("write svg '{}'", args.out.display()))?;

    eprintln!("wrote {}", args.out.display());
    Ok(())
}
