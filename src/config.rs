use crate::context::{Context, InvocationKind, SourceLocation};
use crate::prechecks::PrecheckRegistry;
use anyhow::{Context as _, Result};
use clap::{Parser, ValueEnum};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    #[default]
    Text,
    Json,
}

impl std::fmt::Display for ReportFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ReportFormat::Text => write!(f, "text"),
            ReportFormat::Json => write!(f, "json"),
        }
    }
}

#[derive(Debug, Clone)]
pub struct PrecheckConfig {
    pub inputs: Vec<PathBuf>,
    pub inline: Option<Context>,
    pub enabled_prechecks: Option<HashSet<String>>,
    pub report: ReportFormat,
    pub list_prechecks: bool,
}

impl PrecheckConfig {
    pub fn from_args(args: CliArgs) -> Result<Self> {
        let CliArgs {
            config,
            inputs: cli_inputs,
            class_name,
            kind,
            file,
            line,
            column,
            prechecks: cli_prechecks,
            report: cli_report,
            list,
        } = args;

        let file_config = if let Some(path) = config.as_ref() {
            load_config_file(path)?
        } else {
            PartialConfig::default()
        };

        let PartialConfig {
            inputs: file_inputs,
            prechecks: file_prechecks,
            report: file_report,
        } = file_config;

        let config_dir = config
            .as_ref()
            .and_then(|path| path.parent())
            .map(Path::to_path_buf);

        let inputs = if cli_inputs.is_empty() {
            file_inputs
                .unwrap_or_default()
                .into_iter()
                .map(|path| match config_dir.as_ref() {
                    Some(dir) if path.is_relative() => dir.join(path),
                    _ => path,
                })
                .collect()
        } else {
            cli_inputs
        };

        anyhow::ensure!(
            class_name.is_some() || (kind.is_none() && file.is_none()),
            "--kind and --file require --class-name"
        );
        anyhow::ensure!(
            file.is_some() || (line.is_none() && column.is_none()),
            "--line and --column require --file"
        );

        let inline = class_name.map(|raw| {
            let mut ctx = Context::new(raw).with_kind(kind.unwrap_or_default());
            if let Some(file) = file {
                ctx = ctx.with_location(SourceLocation::new(
                    file,
                    line.unwrap_or(1),
                    column.unwrap_or(0),
                ));
            }
            ctx
        });

        let enabled_prechecks = cli_prechecks
            .or(file_prechecks)
            .map(|names| {
                names
                    .into_iter()
                    .map(|name| name.trim().to_ascii_lowercase())
                    .filter(|name| !name.is_empty())
                    .collect::<HashSet<_>>()
            })
            .filter(|set| !set.is_empty());

        let report = cli_report.or(file_report).unwrap_or_default();

        Ok(Self {
            inputs,
            inline,
            enabled_prechecks,
            report,
            list_prechecks: list,
        })
    }

    /// Fail fast on configurations that cannot check anything.
    pub fn validate(&self) -> Result<()> {
        if self.list_prechecks {
            return Ok(());
        }
        anyhow::ensure!(
            !self.inputs.is_empty() || self.inline.is_some(),
            "nothing to check: pass invocation files or --class-name"
        );
        for input in &self.inputs {
            anyhow::ensure!(input.is_file(), "input {:?} is not a file", input);
        }
        Ok(())
    }

    /// The default suite, narrowed to the enabled prechecks if configured.
    pub fn registry(&self) -> Result<PrecheckRegistry> {
        let registry = PrecheckRegistry::default_suite();
        match &self.enabled_prechecks {
            Some(enabled) => Ok(registry.only(enabled)?),
            None => Ok(registry),
        }
    }

    /// Inline invocation first, then every input file in order.
    pub fn load_contexts(&self) -> Result<Vec<Context>> {
        let mut contexts: Vec<Context> = self.inline.iter().cloned().collect();
        for input in &self.inputs {
            contexts.extend(load_invocations(input)?);
        }
        Ok(contexts)
    }
}

#[derive(Parser, Debug, Default, Clone)]
#[command(
    name = "twin-precheck",
    about = "Validate utility-class macro invocations before transformation",
    version
)]
pub struct CliArgs {
    #[arg(
        long,
        value_name = "FILE",
        help = "Path to a configuration file (YAML or JSON)"
    )]
    pub config: Option<PathBuf>,

    #[arg(
        value_name = "INPUT",
        help = "JSON or YAML files holding arrays of invocation contexts"
    )]
    pub inputs: Vec<PathBuf>,

    #[arg(
        long,
        value_name = "CLASS",
        help = "Check a single invocation with this raw class string"
    )]
    pub class_name: Option<String>,

    #[arg(
        long,
        value_enum,
        value_name = "KIND",
        help = "Invocation kind of the inline invocation"
    )]
    pub kind: Option<InvocationKind>,

    #[arg(long, value_name = "FILE", help = "Source file of the inline invocation")]
    pub file: Option<String>,

    #[arg(long, value_name = "N", help = "Source line of the inline invocation")]
    pub line: Option<u32>,

    #[arg(long, value_name = "N", help = "Source column of the inline invocation")]
    pub column: Option<u32>,

    #[arg(
        long,
        env = "TWIN_PRECHECK_ENABLED",
        value_name = "NAME",
        value_delimiter = ',',
        help = "Restrict checking to the provided precheck names"
    )]
    pub prechecks: Option<Vec<String>>,

    #[arg(
        long,
        env = "TWIN_PRECHECK_REPORT",
        value_enum,
        value_name = "FORMAT",
        help = "Report format (text or json)"
    )]
    pub report: Option<ReportFormat>,

    #[arg(long, help = "List the available prechecks and exit")]
    pub list: bool,
}

#[derive(Debug, Default, Deserialize)]
struct PartialConfig {
    inputs: Option<Vec<PathBuf>>,
    prechecks: Option<Vec<String>>,
    report: Option<ReportFormat>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FileFormat {
    Yaml,
    Json,
}

fn file_format(path: &Path) -> Result<FileFormat> {
    let ext = path
        .extension()
        .and_then(|os| os.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();
    match ext.as_str() {
        "yaml" | "yml" => Ok(FileFormat::Yaml),
        "json" => Ok(FileFormat::Json),
        other => anyhow::bail!("unsupported file extension: {other}"),
    }
}

fn load_config_file(path: &Path) -> Result<PartialConfig> {
    if !path.exists() {
        anyhow::bail!("config file {:?} does not exist", path);
    }
    let contents = fs::read_to_string(path)
        .with_context(|| format!("failed to read config file {:?}", path))?;

    let parsed = match file_format(path)? {
        FileFormat::Yaml => serde_yaml::from_str(&contents)
            .with_context(|| format!("failed to parse YAML config {:?}", path))?,
        FileFormat::Json => serde_json::from_str(&contents)
            .with_context(|| format!("failed to parse JSON config {:?}", path))?,
    };
    Ok(parsed)
}

/// Read an array of invocation contexts from a JSON or YAML file.
pub fn load_invocations(path: &Path) -> Result<Vec<Context>> {
    let contents = fs::read_to_string(path)
        .with_context(|| format!("failed to read invocations {:?}", path))?;

    let contexts = match file_format(path)? {
        FileFormat::Yaml => serde_yaml::from_str(&contents)
            .with_context(|| format!("failed to parse YAML invocations {:?}", path))?,
        FileFormat::Json => serde_json::from_str(&contents)
            .with_context(|| format!("failed to parse JSON invocations {:?}", path))?,
    };
    Ok(contexts)
}
