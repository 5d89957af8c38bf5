//! Command-line front end over the version grammar

use std::cmp::Ordering;

use anyhow::Context;
use clap::builder::RangedU64ValueParser;
use clap::{Parser, Subcommand, ValueEnum};
use serde_json::{Value, json};
use tracing::{debug, warn};

use crate::config::{BoundsConfig, Config};
use crate::platform::PlatformRegistry;
use crate::version::{Binary, Build, Number, Release, VersionLayer};

#[derive(Parser, Debug)]
#[command(name = "version-kit")]
#[command(version, about = "Parse, compare and step release/build/binary versions")]
pub struct Cli {
    /// Inline JSON configuration, e.g. '{"bounds":{"alphaMax":3}}'
    #[arg(long, global = true)]
    pub config: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

impl Cli {
    pub fn load_config(&self) -> anyhow::Result<Config> {
        match &self.config {
            Some(json) => Config::from_json(json).context("invalid --config"),
            None => Ok(Config::default()),
        }
    }
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Parse a version and print its canonical form and leftover text
    Parse {
        layer: LayerArg,
        text: String,
        /// Reject leftover text
        #[arg(long)]
        exact: bool,
    },
    /// Check that a version parses exactly and passes validation
    Validate { layer: LayerArg, text: String },
    /// Print -1, 0 or 1
    Compare {
        layer: LayerArg,
        left: String,
        right: String,
    },
    /// Print the following versions
    Next {
        layer: LayerArg,
        text: String,
        #[arg(
            long,
            default_value_t = 1,
            value_parser = RangedU64ValueParser::<usize>::new().range(1..)
        )]
        count: usize,
    },
    /// Print the preceding versions
    Prev {
        layer: LayerArg,
        text: String,
        #[arg(
            long,
            default_value_t = 1,
            value_parser = RangedU64ValueParser::<usize>::new().range(1..)
        )]
        count: usize,
    },
    /// Print the compact form of a release version
    Abbrev { text: String },
    /// Look up a registered platform by name
    Platform { name: String },
    /// List registered platforms
    Platforms,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LayerArg {
    Number,
    Release,
    Build,
    Binary,
}

/// Stepping with the configured bounds
trait Step: VersionLayer {
    fn step_prev(&self, bounds: &BoundsConfig) -> Option<Self>;
    fn step_next(&self, bounds: &BoundsConfig) -> Option<Self>;
}

impl Step for Number {
    fn step_prev(&self, bounds: &BoundsConfig) -> Option<Self> {
        self.prev(&bounds.number_max)
    }

    fn step_next(&self, bounds: &BoundsConfig) -> Option<Self> {
        self.next(&bounds.number_max)
    }
}

impl Step for Release {
    fn step_prev(&self, bounds: &BoundsConfig) -> Option<Self> {
        self.prev(&bounds.release_bounds())
    }

    fn step_next(&self, bounds: &BoundsConfig) -> Option<Self> {
        self.next(&bounds.release_bounds())
    }
}

impl Step for Build {
    fn step_prev(&self, _bounds: &BoundsConfig) -> Option<Self> {
        self.prev()
    }

    fn step_next(&self, bounds: &BoundsConfig) -> Option<Self> {
        self.next(bounds.build_max)
    }
}

impl Step for Binary {
    fn step_prev(&self, _bounds: &BoundsConfig) -> Option<Self> {
        self.prev()
    }

    fn step_next(&self, bounds: &BoundsConfig) -> Option<Self> {
        self.next(bounds.build_max)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Direction {
    Prev,
    Next,
}

/// Runs `command` and returns the text to print on stdout
pub fn execute(
    command: &Command,
    config: &Config,
    registry: &PlatformRegistry,
) -> anyhow::Result<String> {
    debug!("Executing {:?}", command);
    match command {
        Command::Parse { layer, text, exact } => {
            let output = match layer {
                LayerArg::Number => describe::<Number>(text, *exact)?,
                LayerArg::Release => describe::<Release>(text, *exact)?,
                LayerArg::Build => describe::<Build>(text, *exact)?,
                LayerArg::Binary => describe_binary(text, *exact, registry)?,
            };
            Ok(serde_json::to_string_pretty(&output)?)
        }
        Command::Validate { layer, text } => {
            match layer {
                LayerArg::Number => validate::<Number>(text)?,
                LayerArg::Release => validate::<Release>(text)?,
                LayerArg::Build => validate::<Build>(text)?,
                LayerArg::Binary => validate::<Binary>(text)?,
            }
            Ok("valid".to_string())
        }
        Command::Compare { layer, left, right } => {
            let ordering = match layer {
                LayerArg::Number => compare::<Number>(left, right)?,
                LayerArg::Release => compare::<Release>(left, right)?,
                LayerArg::Build => compare::<Build>(left, right)?,
                LayerArg::Binary => compare::<Binary>(left, right)?,
            };
            Ok((ordering as i8).to_string())
        }
        Command::Next { layer, text, count } => {
            step(*layer, text, *count, Direction::Next, config)
        }
        Command::Prev { layer, text, count } => {
            step(*layer, text, *count, Direction::Prev, config)
        }
        Command::Abbrev { text } => Ok(text.parse::<Release>()?.abbrev()),
        Command::Platform { name } => {
            let platform = registry
                .lookup(name)
                .with_context(|| format!("unknown platform {name:?}"))?;
            Ok(serde_json::to_string_pretty(&platform)?)
        }
        Command::Platforms => Ok(serde_json::to_string_pretty(registry)?),
    }
}

fn parse<T: VersionLayer>(text: &str, exact: bool) -> anyhow::Result<(T, String)> {
    let (value, rest) = if exact {
        (text.parse::<T>()?, "")
    } else {
        T::parse_prefix(text)?
    };
    Ok((value, rest.to_string()))
}

fn describe<T: VersionLayer>(text: &str, exact: bool) -> anyhow::Result<Value> {
    let (value, rest) = parse::<T>(text, exact)?;
    Ok(json!({
        "layer": T::LAYER.as_str(),
        "version": value.to_string(),
        "remainder": rest,
    }))
}

fn describe_binary(text: &str, exact: bool, registry: &PlatformRegistry) -> anyhow::Result<Value> {
    let (bin, rest) = parse::<Binary>(text, exact)?;
    let mut output = json!({
        "layer": Binary::LAYER.as_str(),
        "version": bin.to_string(),
        "remainder": rest,
    });
    if let Some(platform) = registry.lookup(&bin.series) {
        output["platform"] = serde_json::to_value(platform)?;
    }
    Ok(output)
}

fn validate<T: VersionLayer>(text: &str) -> anyhow::Result<()> {
    let value = text.parse::<T>()?;
    value
        .validate()
        .inspect_err(|e| warn!("{} failed validation: {}", text, e))?;
    Ok(())
}

fn compare<T: VersionLayer>(left: &str, right: &str) -> anyhow::Result<Ordering> {
    let left = left.parse::<T>()?;
    let right = right.parse::<T>()?;
    Ok(left.compare(&right))
}

fn step(
    layer: LayerArg,
    text: &str,
    count: usize,
    direction: Direction,
    config: &Config,
) -> anyhow::Result<String> {
    let lines = match layer {
        LayerArg::Number => walk::<Number>(text, count, direction, &config.bounds)?,
        LayerArg::Release => walk::<Release>(text, count, direction, &config.bounds)?,
        LayerArg::Build => walk::<Build>(text, count, direction, &config.bounds)?,
        LayerArg::Binary => walk::<Binary>(text, count, direction, &config.bounds)?,
    };
    if lines.is_empty() {
        anyhow::bail!("no {direction:?} version for {text:?}");
    }
    Ok(lines.join("\n"))
}

fn walk<T: Step>(
    text: &str,
    count: usize,
    direction: Direction,
    bounds: &BoundsConfig,
) -> anyhow::Result<Vec<String>> {
    let start = text.parse::<T>()?;
    let lines = std::iter::successors(Some(start), |current| match direction {
        Direction::Prev => current.step_prev(bounds),
        Direction::Next => current.step_next(bounds),
    })
    .skip(1)
    .take(count)
    .map(|v| v.to_string())
    .collect();
    Ok(lines)
}
