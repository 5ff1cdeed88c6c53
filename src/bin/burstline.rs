use std::{io, path::PathBuf};

use anyhow::Context as _;
use burstline::{
    HeadlessSurface, RandomSource, Rng64, Role, SequenceConfig, Stage, ThreadRandom, presets,
};
use clap::{Args, Parser, Subcommand, ValueEnum};

#[derive(Parser, Debug)]
#[command(name = "burstline", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List built-in presets.
    Presets {
        /// Print the full preset as JSON instead of its name.
        #[arg(long)]
        show: Option<String>,
    },
    /// Print the built descriptor list as JSON.
    Describe(StageArgs),
    /// Print every element's state at one scroll progress.
    Sample {
        #[command(flatten)]
        stage: StageArgs,

        /// Scroll progress; values outside [0, 1] are clamped.
        #[arg(long)]
        progress: f64,
    },
    /// Print states at evenly spaced progress values, one JSON document per line.
    Sweep {
        #[command(flatten)]
        stage: StageArgs,

        /// Number of samples, including both ends.
        #[arg(long, default_value_t = 11)]
        steps: u32,
    },
}

#[derive(Args, Debug)]
struct StageArgs {
    /// Built-in preset name.
    #[arg(long, default_value = "cocoa", conflicts_with = "config")]
    preset: String,

    /// Sequence config JSON.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Seed for reproducible particles and fallback destinations.
    /// Omit for a fresh random sequence on every run.
    #[arg(long)]
    seed: Option<u64>,

    /// Number of ingredient elements on the stage.
    #[arg(long, default_value_t = 6)]
    ingredients: usize,

    /// Override the preset's particle count.
    #[arg(long)]
    particles: Option<usize>,

    /// Leave an element out of the stage.
    #[arg(long, value_enum)]
    without: Vec<Singleton>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Singleton {
    Hero,
    IntroCaption,
    FinalCaption,
    ParticleContainer,
    Preloader,
}

impl Singleton {
    fn role(self) -> Role {
        match self {
            Self::Hero => Role::Hero,
            Self::IntroCaption => Role::IntroCaption,
            Self::FinalCaption => Role::FinalCaption,
            Self::ParticleContainer => Role::ParticleContainer,
            Self::Preloader => Role::Preloader,
        }
    }
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.cmd {
        Command::Presets { show } => cmd_presets(show),
        Command::Describe(args) => cmd_describe(args),
        Command::Sample { stage, progress } => cmd_sample(stage, progress),
        Command::Sweep { stage, steps } => cmd_sweep(stage, steps),
    }
}

fn load_config(args: &StageArgs) -> anyhow::Result<SequenceConfig> {
    let mut config = match &args.config {
        Some(path) => SequenceConfig::from_json_path(path)
            .with_context(|| format!("load sequence config '{}'", path.display()))?,
        None => presets::by_name(&args.preset)?,
    };
    if let Some(n) = args.particles {
        config.particles.count = n;
    }
    Ok(config)
}

fn build_stage(args: &StageArgs) -> anyhow::Result<(HeadlessSurface, Stage)> {
    let config = load_config(args)?;
    let present: Vec<Role> = Role::ALL
        .into_iter()
        .filter(|r| !args.without.iter().any(|w| w.role() == *r))
        .collect();
    let mut surface = HeadlessSurface::with_roles(args.ingredients, &present);

    let mut rng: Box<dyn RandomSource> = match args.seed {
        Some(seed) => Box::new(Rng64::new(seed)),
        None => Box::new(ThreadRandom::new()),
    };
    let stage = Stage::setup(&mut surface, &config, rng.as_mut())
        .with_context(|| format!("set up sequence '{}'", config.name))?;
    Ok((surface, stage))
}

fn print_json<T: serde::Serialize>(value: &T) -> anyhow::Result<()> {
    let s = serde_json::to_string_pretty(value).context("serialize output")?;
    println!("{s}");
    Ok(())
}

fn cmd_presets(show: Option<String>) -> anyhow::Result<()> {
    match show {
        Some(name) => print_json(&presets::by_name(&name)?),
        None => {
            for name in presets::names() {
                println!("{name}");
            }
            Ok(())
        }
    }
}

fn cmd_describe(args: StageArgs) -> anyhow::Result<()> {
    let (_, stage) = build_stage(&args)?;
    let timeline = stage.driver().timeline();
    print_json(&serde_json::json!({
        "total_duration": timeline.total_duration(),
        "cast": stage.cast(),
        "descriptors": timeline.descriptors(),
    }))
}

fn cmd_sample(args: StageArgs, progress: f64) -> anyhow::Result<()> {
    let (mut surface, stage) = build_stage(&args)?;
    let applied = stage.set_scroll_progress(&mut surface, progress);
    print_json(&serde_json::json!({
        "progress": applied,
        "time": stage.driver().time_for(applied),
        "elements": surface.elements(),
    }))
}

fn cmd_sweep(args: StageArgs, steps: u32) -> anyhow::Result<()> {
    if steps < 2 {
        anyhow::bail!("--steps must be at least 2");
    }
    let (_, stage) = build_stage(&args)?;
    let driver = stage.driver();
    for i in 0..steps {
        let p = f64::from(i) / f64::from(steps - 1);
        let line = serde_json::to_string(&serde_json::json!({
            "progress": p,
            "time": driver.time_for(p),
            "states": driver.state_at(p),
        }))
        .context("serialize sweep sample")?;
        println!("{line}");
    }
    Ok(())
}
