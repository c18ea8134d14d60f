// File: crates/report/src/cli.rs
// Summary: Hand-rolled argument parsing for the report binary.

use anyhow::{bail, Context, Result};
use std::path::PathBuf;

pub const USAGE: &str = "\
usage:
  chart-report [render] [--config <spec.json>] [--data <series.csv>] [--output <chart.png>]
  chart-report check-skills <skills-dir>
  chart-report check-trends <report.json>";

#[derive(Debug, Default, PartialEq, Eq)]
pub struct RenderArgs {
    pub config: Option<PathBuf>,
    pub data: Option<PathBuf>,
    pub output: Option<PathBuf>,
}

#[derive(Debug, PartialEq, Eq)]
pub enum Command {
    Render(RenderArgs),
    CheckSkills(PathBuf),
    CheckTrends(PathBuf),
    Help,
}

pub fn parse_args<I: IntoIterator<Item = String>>(args: I) -> Result<Command> {
    let mut args = args.into_iter().peekable();
    match args.peek().map(String::as_str) {
        None => return Ok(Command::Render(RenderArgs::default())),
        Some("-h" | "--help" | "help") => return Ok(Command::Help),
        Some("check-skills") => {
            args.next();
            let dir = args.next().context("check-skills needs a directory")?;
            no_more(args)?;
            return Ok(Command::CheckSkills(dir.into()));
        }
        Some("check-trends") => {
            args.next();
            let file = args.next().context("check-trends needs a JSON file")?;
            no_more(args)?;
            return Ok(Command::CheckTrends(file.into()));
        }
        Some("render") => {
            args.next();
        }
        Some(_) => {}
    }

    let mut out = RenderArgs::default();
    while let Some(flag) = args.next() {
        let slot = match flag.as_str() {
            "--config" => &mut out.config,
            "--data" => &mut out.data,
            "--output" | "-o" => &mut out.output,
            other => bail!("unknown argument {other:?}\n{USAGE}"),
        };
        let value = args.next().with_context(|| format!("{flag} needs a value"))?;
        *slot = Some(PathBuf::from(value));
    }
    Ok(Command::Render(out))
}

fn no_more(mut rest: impl Iterator<Item = String>) -> Result<()> {
    match rest.next() {
        Some(extra) => bail!("unexpected argument {extra:?}\n{USAGE}"),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Result<Command> {
        parse_args(args.iter().map(|s| s.to_string()))
    }

    #[test]
    fn no_args_renders_reference_report() {
        assert_eq!(parse(&[]).unwrap(), Command::Render(RenderArgs::default()));
    }

    #[test]
    fn render_flags() {
        let cmd = parse(&["render", "--data", "d.csv", "-o", "out.png"]).unwrap();
        assert_eq!(
            cmd,
            Command::Render(RenderArgs { config: None, data: Some("d.csv".into()), output: Some("out.png".into()) })
        );
        // `render` is optional
        assert!(matches!(parse(&["--config", "s.json"]).unwrap(), Command::Render(_)));
    }

    #[test]
    fn checks_take_one_path() {
        assert_eq!(parse(&["check-skills", "skills"]).unwrap(), Command::CheckSkills("skills".into()));
        assert_eq!(parse(&["check-trends", "t.json"]).unwrap(), Command::CheckTrends("t.json".into()));
        assert!(parse(&["check-skills"]).is_err());
        assert!(parse(&["check-trends", "a", "b"]).is_err());
    }

    #[test]
    fn rejects_unknown_and_dangling_flags() {
        assert!(parse(&["--bogus"]).is_err());
        assert!(parse(&["--output"]).is_err());
    }
}
