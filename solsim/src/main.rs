use solsim::{ScenarioConfig, Scenario};
use solsim::{run_2d, run_headless, bench_step};

use bevy::app::AppExit;
use clap::Parser;
use anyhow::{anyhow, Context, Result};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(about = "Newtonian solar system with trails and orbits")]
struct Args {
    /// Scenario file under `scenarios/`; the built-in solar system if omitted
    #[arg(short, long)]
    file_name: Option<String>,

    /// Run this many steps without a window and log the final state
    #[arg(long, value_name = "STEPS")]
    headless: Option<u64>,

    /// Time the integrators and exit
    #[arg(long)]
    bench: bool,
}

// load here to keep main clean
fn load_scenario_from_yaml(file_name: &str) -> Result<ScenarioConfig> {
    let config_path = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("scenarios").join(file_name);
    let file = File::open(&config_path).with_context(|| format!("opening {}", config_path.display()))?;
    let reader = BufReader::new(file);
    let scenario_cfg: ScenarioConfig = serde_yaml::from_reader(reader)
        .with_context(|| format!("parsing {}", config_path.display()))?;

    Ok(scenario_cfg)
}

// The viewer installs its own subscriber through bevy's LogPlugin
fn init_logging() {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();
}

fn main() -> Result<()> {
    let args = Args::parse();

    if args.bench {
        bench_step();
        return Ok(());
    }

    let scenario_cfg = match &args.file_name {
        Some(file_name) => load_scenario_from_yaml(file_name)?,
        None => ScenarioConfig::solar_system(),
    };
    let mut scenario = Scenario::build_scenario(scenario_cfg)?;

    if let Some(steps) = args.headless {
        init_logging();
        run_headless(&mut scenario, steps);
        return Ok(());
    }

    match run_2d(scenario) {
        AppExit::Success => Ok(()),
        AppExit::Error(code) => Err(anyhow!("viewer exited with code {code}")),
    }
}
