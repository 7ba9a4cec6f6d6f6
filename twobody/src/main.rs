use twobody::{Preset, Scenario, ScenarioConfig};
use twobody::run_2d;
use twobody::{bench_convergence, bench_euler};

use anyhow::{Context, Result};
use clap::Parser;
use log::info;

use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(about = "Earth-Moon two-body Euler simulation")]
struct Args {
    /// Scenario YAML under the crate's scenarios/ directory
    #[arg(short, long)]
    file: Option<String>,

    /// Built-in scenario, used when no file is given
    #[arg(short, long, value_enum, default_value_t = Preset::EarthMoon)]
    preset: Preset,

    /// Integrate and log a summary without opening the viewer
    #[arg(long)]
    headless: bool,

    /// Print timing and convergence tables, then exit
    #[arg(long)]
    bench: bool,
}

// load here to keep main clean
fn load_scenario_from_yaml(file_name: &str) -> Result<ScenarioConfig> {
    let config_path = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("scenarios").join(file_name);
    let file = File::open(&config_path).with_context(|| format!("opening {}", config_path.display()))?;
    let reader = BufReader::new(file);
    let scenario_cfg: ScenarioConfig =
        serde_yaml::from_reader(reader).with_context(|| format!("parsing {}", config_path.display()))?;

    Ok(scenario_cfg)
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();

    if args.bench {
        bench_euler()?;
        bench_convergence()?;
        return Ok(());
    }

    let scenario_cfg = match &args.file {
        Some(file_name) => load_scenario_from_yaml(file_name)?,
        None => ScenarioConfig::preset(args.preset),
    };

    let mut scenario = Scenario::build_scenario(scenario_cfg).context("invalid scenario")?;
    let trajectory = scenario.run();

    if let Some((a, b)) = trajectory.last() {
        info!(
            "final: {} at ({:.4e}, {:.4e}) m, {} at ({:.4e}, {:.4e}) m",
            scenario.system.primary.name, a.x, a.y, scenario.system.secondary.name, b.x, b.y
        );
    }

    if !args.headless {
        run_2d(trajectory);
    }

    Ok(())
}
