// File: crates/report/src/main.rs
// Summary: Report binary: renders the Finance vs Delivery chart (or a configured one) to PNG,
// and checks the trend-report and skill-directory conventions.

mod cli;
mod config;
mod data;
mod telemetry;

use anyhow::{Context, Result};
use chart_core::{ChartRenderer, SkillCatalog, TrendReport};
use tracing::info;

use cli::{Command, RenderArgs};

fn main() -> Result<()> {
    telemetry::init_tracing();

    match cli::parse_args(std::env::args().skip(1))? {
        Command::Render(args) => render(args),
        Command::CheckSkills(dir) => check_skills(&dir),
        Command::CheckTrends(path) => check_trends(&path),
        Command::Help => {
            println!("{}", cli::USAGE);
            Ok(())
        }
    }
}

fn render(args: RenderArgs) -> Result<()> {
    let mut spec = match &args.config {
        Some(path) => config::load_spec(path)?,
        None => chart_core::ChartSpec::default(),
    };
    if let Some(out) = args.output {
        spec.output_path = out;
    }

    let series = match &args.data {
        Some(path) => data::load_series_csv(path)
            .with_context(|| format!("failed to load CSV '{}'", path.display()))?,
        None => config::reference_series(),
    };
    info!(series = series.len(), points = series.first().map_or(0, |s| s.len()), "rendering report chart");

    let artifact = ChartRenderer::new()
        .render(&series, &spec)
        .with_context(|| format!("rendering {}", spec.output_path.display()))?;
    println!("Chart saved to: {}", artifact.path.display());
    Ok(())
}

fn check_skills(dir: &std::path::Path) -> Result<()> {
    let catalog = SkillCatalog::scan(dir)?;
    for skill in &catalog.skills {
        let mark = if skill.has_readme { "ok" } else { "MISSING README.md" };
        println!("{:<24} {}", skill.name, mark);
    }
    catalog.ensure_complete()?;
    println!("{} skills documented", catalog.skills.len());
    Ok(())
}

fn check_trends(path: &std::path::Path) -> Result<()> {
    let text = std::fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    let report = TrendReport::from_json(&text).with_context(|| format!("validating {}", path.display()))?;
    println!(
        "request {} generated at {}: {} trends",
        report.request_id,
        report.generated_at,
        report.trends.len()
    );
    for t in &report.trends {
        println!("  {:<32} {:.2}", t.topic, t.confidence_score);
    }
    Ok(())
}
