//! Media Planner — campaign metrics derivation and plan roll-ups.
//!
//! Development CLI around the core engine: seed a template plan, or derive and
//! summarize an existing plan document.

use clap::{Parser, Subcommand};
use planner_core::config::AppConfig;
use planner_core::metrics::MetricsEngine;
use planner_core::months::Language;
use planner_core::plan::PlanData;
use planner_core::summary::summarize_plan;
use planner_core::tables::LookupTables;
use planner_core::templates;
use tracing::info;

#[derive(Parser, Debug)]
#[command(name = "media-planner")]
#[command(about = "Campaign metrics derivation and media plan roll-ups")]
#[command(version)]
struct Cli {
    /// Display language for month-keys (overrides config)
    #[arg(long, env = "MEDIA_PLANNER__LANGUAGE")]
    language: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print a freshly derived launch-template plan as JSON
    Template {
        /// Owner recorded on the generated plan
        #[arg(long, default_value = "local")]
        user: String,
    },
    /// Re-derive every campaign in a plan document and print the result
    Derive {
        /// Path to a plan JSON document
        plan: std::path::PathBuf,
    },
    /// Print plan-level and per-month summaries for a plan document
    Summarize {
        /// Path to a plan JSON document
        plan: std::path::PathBuf,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut config = AppConfig::load().unwrap_or_else(|e| {
        eprintln!("Failed to load config, using defaults: {e}");
        AppConfig::default()
    });

    init_tracing(config.log_json);

    if let Some(tag) = cli.language.as_deref() {
        config.language = match tag {
            "pt-BR" => Language::PtBr,
            "en-US" => Language::EnUs,
            other => anyhow::bail!("Unsupported language tag: {other}"),
        };
    }

    let engine = MetricsEngine::new(LookupTables::default());

    match cli.command {
        Command::Template { user } => {
            let plan = templates::launch_template(&engine, config.language, &user);
            info!(plan_id = %plan.id, "Generated template plan");
            println!("{}", serde_json::to_string_pretty(&plan)?);
        }
        Command::Derive { plan } => {
            let mut plan = read_plan(&plan)?;
            for campaigns in plan.months.values_mut() {
                for campaign in campaigns.iter_mut() {
                    *campaign = engine.recalculate(campaign);
                }
            }
            println!("{}", serde_json::to_string_pretty(&plan)?);
        }
        Command::Summarize { plan } => {
            let plan = read_plan(&plan)?;
            let summary = summarize_plan(&plan);
            info!(
                plan_id = %plan.id,
                months = plan.months.len(),
                budget = summary.totals.budget,
                "Summarized plan"
            );
            println!("{}", serde_json::to_string_pretty(&summary)?);
        }
    }

    Ok(())
}

fn read_plan(path: &std::path::Path) -> anyhow::Result<PlanData> {
    let raw = std::fs::read_to_string(path)?;
    Ok(serde_json::from_str(&raw)?)
}

fn init_tracing(json: bool) {
    let builder = tracing_subscriber::fmt().with_env_filter(
        tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| "media_planner=info,planner_core=info,planner_store=info".into()),
    );
    if json {
        builder.json().init();
    } else {
        builder.init();
    }
}
