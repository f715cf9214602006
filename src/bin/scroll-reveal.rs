use std::path::{Path, PathBuf};

use anyhow::Context as _;
use clap::{ArgAction, Parser, Subcommand};
use scroll_reveal::{
    Progress, RevealConfig, RevealText, ScrollHost as _, ScrollSampler, SimHost, ViewportGeometry,
};

#[derive(Parser, Debug)]
#[command(name = "scroll-reveal", version)]
struct Cli {
    /// Increase log verbosity (-v debug, -vv trace). Logs go to stderr.
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the scroll progress for one element position.
    Progress(ProgressArgs),
    /// Print every letter's transform at a given progress.
    Letters(LettersArgs),
    /// Replay a scroll between two element positions through the frame-coalescing sampler.
    Simulate(SimulateArgs),
}

#[derive(Parser, Debug)]
struct ProgressArgs {
    /// Element top relative to the viewport top, in px (may be negative).
    #[arg(long, allow_hyphen_values = true)]
    top: f64,

    /// Viewport height in px.
    #[arg(long)]
    viewport: f64,

    /// Reveal config JSON (window fractions are read from it).
    #[arg(long)]
    config: Option<PathBuf>,
}

#[derive(Parser, Debug)]
struct LettersArgs {
    /// Global progress; clamped into [0, 1].
    #[arg(long, allow_hyphen_values = true)]
    progress: f64,

    /// Reveal config JSON.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Emit JSON instead of a table.
    #[arg(long)]
    json: bool,
}

#[derive(Parser, Debug)]
struct SimulateArgs {
    /// Reveal config JSON.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Element top at the start of the scroll, in px.
    #[arg(long, allow_hyphen_values = true)]
    from: f64,

    /// Element top at the end of the scroll, in px.
    #[arg(long, allow_hyphen_values = true)]
    to: f64,

    /// Number of rendered frames the scroll spans.
    #[arg(long, default_value_t = 10)]
    steps: u32,

    /// Scroll notifications delivered between two frames.
    #[arg(long, default_value_t = 3)]
    events_per_frame: u32,

    /// Viewport height in px.
    #[arg(long, default_value_t = 1000.0)]
    viewport: f64,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    match cli.cmd {
        Command::Progress(args) => cmd_progress(args),
        Command::Letters(args) => cmd_letters(args),
        Command::Simulate(args) => cmd_simulate(args),
    }
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => tracing::Level::WARN,
        1 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
}

fn load_config(path: Option<&Path>) -> anyhow::Result<RevealConfig> {
    match path {
        Some(path) => RevealConfig::from_json_path(path)
            .with_context(|| format!("load reveal config '{}'", path.display())),
        None => Ok(RevealConfig::default()),
    }
}

fn cmd_progress(args: ProgressArgs) -> anyhow::Result<()> {
    let config = load_config(args.config.as_deref())?;
    let progress = config
        .window
        .progress(ViewportGeometry::new(args.top, args.viewport));
    println!("{}", progress.get());
    Ok(())
}

fn cmd_letters(args: LettersArgs) -> anyhow::Result<()> {
    let config = load_config(args.config.as_deref())?;
    let text = config.text().context("build reveal text")?;
    let frame = text.frame(Progress::new(args.progress));

    if args.json {
        let out = serde_json::to_string_pretty(&frame).context("serialize letters")?;
        println!("{out}");
        return Ok(());
    }

    for l in &frame {
        println!(
            "{:>3}  line {}  {}  {}",
            l.letter.index, l.letter.line, l.letter.ch, l.css
        );
    }
    Ok(())
}

fn cmd_simulate(args: SimulateArgs) -> anyhow::Result<()> {
    if args.steps == 0 {
        anyhow::bail!("--steps must be > 0");
    }
    let config = load_config(args.config.as_deref())?;
    let text = config.text().context("build reveal text")?;

    let mut host = SimHost::new(ViewportGeometry::new(args.from, args.viewport));
    let mut sampler = ScrollSampler::attach(&mut host, config.window);
    print_frame(0, args.from, sampler.progress(), &text);

    let events = args.events_per_frame.max(1);
    let total = f64::from(args.steps) * f64::from(events);
    for step in 1..=args.steps {
        for event in 1..=events {
            let done = f64::from(step - 1) * f64::from(events) + f64::from(event);
            let top = args.from + (args.to - args.from) * done / total;
            sampler.host_mut().set_element_top(top);
            sampler.on_scroll();
        }

        let tokens = sampler.host_mut().drain_frames();
        for token in tokens {
            if let Some(progress) = sampler.on_frame(token) {
                let top = sampler.host().geometry().element_top;
                print_frame(step, top, progress, &text);
            }
        }
    }

    sampler.detach();
    let stats = sampler.stats();
    tracing::info!(?stats, "simulation finished");
    eprintln!(
        "{} scroll events, {} samples published, {} frames coalesced away",
        stats.scroll_events, stats.samples_published, stats.frames_cancelled
    );
    Ok(())
}

fn print_frame(step: u32, top: f64, progress: Progress, text: &RevealText) {
    let offsets: Vec<String> = text
        .frame(progress)
        .iter()
        .map(|l| format!("{:.0}", l.transform.y_pct))
        .collect();
    println!(
        "frame {step:>3}  top {top:>8.1}  progress {:.4}  y% [{}]",
        progress.get(),
        offsets.join(" ")
    );
}
