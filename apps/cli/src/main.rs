use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Parser;
use epicycles_core::{Simulation, SimulationConfig, WaveformKind};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(author, version, about = "Headless Fourier epicycle simulation runner")]
struct Args {
    /// JSON simulation config; missing fields take their defaults
    #[arg(long)]
    config: Option<PathBuf>,
    /// Number of ticks to simulate
    #[arg(long, default_value_t = 600)]
    frames: usize,
    /// square or sawtooth
    #[arg(long)]
    waveform: Option<WaveformKind>,
    #[arg(long)]
    terms: Option<usize>,
    #[arg(long)]
    rotation_speed: Option<f64>,
    /// Comma-separated commands applied before the run:
    /// add, remove, pause, waveform, reset, faster, slower
    #[arg(long, value_delimiter = ',')]
    commands: Vec<String>,
    /// Log the tip position every N ticks (0 disables)
    #[arg(long, default_value_t = 0)]
    log_every: usize,
    /// Print the final frame as JSON instead of a summary
    #[arg(long)]
    json: bool,
}

#[derive(Debug, Clone, Copy)]
enum Command {
    AddTerm,
    RemoveTerm,
    TogglePause,
    ToggleWaveform,
    Reset,
    Faster,
    Slower,
}

fn parse_command(value: &str) -> Result<Command> {
    let command = match value.trim().to_lowercase().as_str() {
        "add" | "+" => Command::AddTerm,
        "remove" | "-" => Command::RemoveTerm,
        "pause" => Command::TogglePause,
        "waveform" | "f" => Command::ToggleWaveform,
        "reset" | "r" => Command::Reset,
        "faster" | "]" => Command::Faster,
        "slower" | "[" => Command::Slower,
        other => bail!("unknown command: {other}"),
    };
    Ok(command)
}

fn apply(sim: &mut Simulation, command: Command) {
    match command {
        Command::AddTerm => sim.change_term_count(1),
        Command::RemoveTerm => sim.change_term_count(-1),
        Command::TogglePause => sim.toggle_pause(),
        Command::ToggleWaveform => sim.toggle_waveform(),
        Command::Reset => sim.reset(),
        Command::Faster => sim.speed_up(),
        Command::Slower => sim.slow_down(),
    }
}

fn load_config(args: &Args) -> Result<SimulationConfig> {
    let mut config = match &args.config {
        Some(path) => {
            let json = std::fs::read_to_string(path)
                .with_context(|| format!("failed to read config {}", path.display()))?;
            SimulationConfig::from_json_str(&json)
                .with_context(|| format!("invalid config {}", path.display()))?
        }
        None => SimulationConfig::default(),
    };
    if let Some(waveform) = args.waveform {
        config.fourier.waveform = waveform;
    }
    if let Some(terms) = args.terms {
        config.fourier.initial_terms = terms;
    }
    if let Some(speed) = args.rotation_speed {
        config.fourier.rotation_speed = speed;
    }
    Ok(config)
}

fn main() -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("epicycles_cli=info,epicycles_core=info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .compact()
        .init();

    let args = Args::parse();
    let commands = args
        .commands
        .iter()
        .map(|c| parse_command(c))
        .collect::<Result<Vec<_>>>()?;

    let config = load_config(&args)?;
    let mut sim = Simulation::new(config).context("failed to build simulation")?;
    for command in commands {
        apply(&mut sim, command);
    }

    for frame in 1..=args.frames {
        sim.update();
        if args.log_every > 0 && frame % args.log_every == 0 {
            let tip = sim.tip();
            info!(
                frame,
                elapsed_time = sim.elapsed_time(),
                tip_x = tip.x,
                tip_y = tip.y,
                trace_len = sim.trace().len(),
                "progress"
            );
        }
    }

    let state = sim.drawable_state();
    if args.json {
        println!("{}", serde_json::to_string_pretty(&state)?);
    } else {
        println!(
            "{} | terms {} | rot speed {:.2} | t = {:.4} | tip ({:.2}, {:.2}) | trace {} points{}",
            state.waveform,
            state.term_count,
            state.rotation_speed,
            state.elapsed_time,
            state.tip.x,
            state.tip.y,
            state.trace.len(),
            if state.paused { " | paused" } else { "" },
        );
    }
    Ok(())
}
