use std::path::PathBuf;

use anyhow::anyhow;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use nebula_core::Outcome;
use nebula_runner::{report, scenario, Runner};
use nebula_store::Store;

#[derive(Parser)]
#[command(name = "nebula", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Create .nebula/ with a config and an editable copy of the built-in seed
    Init,

    /// Print the dashboard for a fresh session
    Status {
        #[arg(long)]
        json: bool,
    },

    /// Apply a YAML command script to a fresh session and print the result
    Apply {
        #[arg(long)]
        script: PathBuf,
        /// Fail on the first command whose id matches nothing
        #[arg(long)]
        strict: bool,
        #[arg(long)]
        json: bool,
    },

    /// Replay a scenario directory (script.yaml + expected.yaml)
    Scenario { dir: PathBuf },
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt().with_env_filter(EnvFilter::from_default_env()).init();

    let cli = Cli::parse();
    let root = std::env::current_dir()?;

    match cli.cmd {
        Command::Init => {
            Runner::init(&root)?;
            println!("Initialized nebula in {}", root.display());
        }
        Command::Status { json } => {
            let r = Runner::open(root)?;
            print_dashboard(&r, json)?;
        }
        Command::Apply { script, strict, json } => {
            let r = Runner::open(root)?;
            let outcomes = r.apply_script(&script, strict)?;
            for (i, out) in outcomes.iter().enumerate() {
                if let Outcome::Unmatched { target } = out {
                    eprintln!("command #{}: no match for {:?}; skipped", i + 1, target);
                }
            }
            print_dashboard(&r, json)?;
        }
        Command::Scenario { dir } => {
            let exp = scenario::load_expected(&dir)?;
            let res = scenario::simulate(&dir)?;
            let bad = res.mismatches(&exp);
            if !bad.is_empty() {
                for m in &bad {
                    eprintln!("- {m}");
                }
                return Err(anyhow!("scenario {} failed ({} mismatches)", exp.scenario_id, bad.len()));
            }
            println!(
                "scenario {} ok: {} applied, {} unmatched, velocity {}%",
                exp.scenario_id, res.applied, res.unmatched, res.velocity_percent
            );
        }
    }

    Ok(())
}

fn print_dashboard(r: &Runner, json: bool) -> anyhow::Result<()> {
    let snap = r.store.snapshot()?;
    let title = &r.cfg.dashboard.title;
    if json {
        println!("{}", report::render_json(title, &snap)?);
    } else {
        print!("{}", report::render_text(title, &snap)?);
    }
    Ok(())
}
