use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use inquire::{Select, Text};
use serde::Serialize;
use std::{fs, io::Read, path::PathBuf};
use tracing::{debug, warn};
use weather_icons_core::{
    Config, IconId, OutputFormat, Payload, TableEntry, config::DEFAULT_LOG_FILTER, resolve_icon,
    table,
};

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "weather-icons", version, about = "Weather code to icon lookup")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Resolve a weather code such as "01d" to its icon.
    Resolve {
        /// Provider icon code; absent means no icon.
        code: Option<String>,

        #[arg(long, value_enum)]
        format: Option<FormatArg>,
    },

    /// Print the whole code to icon table.
    List {
        #[arg(long, value_enum)]
        format: Option<FormatArg>,
    },

    /// Resolve the icon of an OpenWeather current-weather JSON document.
    Payload {
        /// File to read; stdin when absent.
        path: Option<PathBuf>,

        #[arg(long, value_enum)]
        format: Option<FormatArg>,
    },

    /// Set the default output format and log filter.
    Configure,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum FormatArg {
    Plain,
    Json,
}

impl From<FormatArg> for OutputFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Plain => OutputFormat::Plain,
            FormatArg::Json => OutputFormat::Json,
        }
    }
}

impl Cli {
    pub fn run(self, loaded: Result<Config>) -> Result<()> {
        let config = config_or_default(loaded);

        match self.command {
            Command::Resolve { code, format } => {
                let icon = resolve_icon(code.as_deref());
                emit(&render_resolution(
                    code.as_deref(),
                    icon,
                    output_format(format, &config),
                )?);
            }
            Command::List { format } => {
                emit(&render_table(output_format(format, &config))?);
            }
            Command::Payload { path, format } => {
                emit(&resolve_payload(path.as_ref(), output_format(format, &config))?);
            }
            Command::Configure => configure(config)?,
        }

        Ok(())
    }
}

/// A broken config file must not block lookups, nor `configure`, which rewrites it.
fn config_or_default(loaded: Result<Config>) -> Config {
    loaded.unwrap_or_else(|err| {
        warn!("{err:#}; using default settings");
        Config::default()
    })
}

/// `--format` wins over the configured default.
fn output_format(arg: Option<FormatArg>, config: &Config) -> OutputFormat {
    arg.map_or_else(|| config.output_format(), Into::into)
}

fn emit(output: &str) {
    if !output.is_empty() {
        println!("{output}");
    }
}

fn resolve_payload(path: Option<&PathBuf>, format: OutputFormat) -> Result<String> {
    let body = read_input(path)?;
    let payload = Payload::from_json(&body)?;
    debug!(
        location = ?payload.name,
        condition = ?payload.condition(),
        description = ?payload.description(),
        code = ?payload.icon_code(),
        "Read payload"
    );
    let icon = payload.resolve_icon();
    render_resolution(payload.icon_code(), icon, format)
}

fn read_input(path: Option<&PathBuf>) -> Result<String> {
    match path {
        Some(path) => fs::read_to_string(path)
            .with_context(|| format!("Failed to read payload file: {}", path.display())),
        None => {
            let mut body = String::new();
            std::io::stdin()
                .read_to_string(&mut body)
                .context("Failed to read payload from stdin")?;
            Ok(body)
        }
    }
}

fn configure(mut config: Config) -> Result<()> {
    let format = Select::new("Default output format:", OutputFormat::all().to_vec())
        .with_starting_cursor(format_cursor(config.output_format()))
        .prompt()
        .context("Output format prompt was cancelled")?;

    let log_filter = Text::new("Log filter:")
        .with_default(config.log_filter())
        .with_help_message("tracing filter directive, e.g. \"warn\" or \"weather_icons_core=debug\"")
        .prompt()
        .context("Log filter prompt was cancelled")?;

    config.format = Some(format);
    config.log_filter = if log_filter.trim().is_empty() || log_filter == DEFAULT_LOG_FILTER {
        None
    } else {
        Some(log_filter)
    };

    let path = config.save()?;
    println!("Saved configuration to {}", path.display());
    Ok(())
}

fn format_cursor(current: OutputFormat) -> usize {
    OutputFormat::all()
        .iter()
        .position(|f| *f == current)
        .unwrap_or(0)
}

#[derive(Debug, Serialize)]
struct Resolution<'a> {
    code: Option<&'a str>,
    icon: Option<IconId>,
}

#[derive(Debug, Serialize)]
struct Row {
    code: &'static str,
    icon: IconId,
    condition: &'static str,
    period: &'static str,
}

impl From<TableEntry> for Row {
    fn from(entry: TableEntry) -> Self {
        Self {
            code: entry.code.as_str(),
            icon: entry.icon,
            condition: entry.code.condition().description(),
            period: entry.code.period().as_str(),
        }
    }
}

/// Plain output is the bare icon id, or nothing when there is none.
fn render_resolution(
    code: Option<&str>,
    icon: Option<IconId>,
    format: OutputFormat,
) -> Result<String> {
    match format {
        OutputFormat::Plain => Ok(icon.map(|i| i.to_string()).unwrap_or_default()),
        OutputFormat::Json => serde_json::to_string(&Resolution { code, icon })
            .context("Failed to serialize resolution"),
    }
}

fn render_table(format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Plain => Ok(table::entries()
            .map(|e| {
                format!(
                    "{}  {:<34} {} ({})",
                    e.code,
                    e.icon,
                    e.code.condition(),
                    e.code.period()
                )
            })
            .collect::<Vec<_>>()
            .join("\n")),
        OutputFormat::Json => {
            let rows: Vec<Row> = table::entries().map(Row::from).collect();
            serde_json::to_string_pretty(&rows).context("Failed to serialize icon table")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use weather_icons_core::WeatherCode;

    fn scratch_dir(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("weather-icons-cli-test-{}-{name}", std::process::id()))
    }

    fn icon(code: &str) -> IconId {
        WeatherCode::try_from(code).unwrap().icon()
    }

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_resolve_with_format() {
        let cli = Cli::try_parse_from(["weather-icons", "resolve", "01d", "--format", "json"])
            .expect("valid args");
        match cli.command {
            Command::Resolve { code, format } => {
                assert_eq!(code.as_deref(), Some("01d"));
                assert!(matches!(format, Some(FormatArg::Json)));
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn resolve_code_is_optional() {
        let cli = Cli::try_parse_from(["weather-icons", "resolve"]).expect("valid args");
        assert!(matches!(cli.command, Command::Resolve { code: None, format: None }));
    }

    #[test]
    fn plain_resolution_is_bare_icon() {
        let out = render_resolution(Some("01d"), Some(icon("01d")), OutputFormat::Plain).unwrap();
        assert_eq!(out, "hugeicons:sun-03");

        let out = render_resolution(Some("xx"), None, OutputFormat::Plain).unwrap();
        assert!(out.is_empty());
    }

    #[test]
    fn json_resolution_uses_nulls_for_absence() {
        let out = render_resolution(Some("10n"), Some(icon("10n")), OutputFormat::Json).unwrap();
        assert_eq!(out, r#"{"code":"10n","icon":"hugeicons:moon-cloud-angled-rain"}"#);

        let out = render_resolution(None, None, OutputFormat::Json).unwrap();
        assert_eq!(out, r#"{"code":null,"icon":null}"#);
    }

    #[test]
    fn plain_table_has_one_line_per_code() {
        let out = render_table(OutputFormat::Plain).unwrap();
        let lines: Vec<&str> = out.lines().collect();

        assert_eq!(lines.len(), 18);
        assert!(lines[0].starts_with("01d  hugeicons:sun-03"));
        assert!(lines[0].ends_with("clear sky (day)"));
        assert!(lines[17].starts_with("50n  hugeicons:moon-slow-wind"));
        assert!(lines[17].ends_with("mist (night)"));
    }

    #[test]
    fn json_table_lists_all_rows() {
        let out = render_table(OutputFormat::Json).unwrap();
        let rows: Vec<serde_json::Value> = serde_json::from_str(&out).unwrap();

        assert_eq!(rows.len(), 18);
        assert_eq!(rows[12]["code"], "04n");
        assert_eq!(rows[12]["icon"], "hugeicons:moon-cloud");
        assert_eq!(rows[12]["condition"], "broken clouds");
        assert_eq!(rows[12]["period"], "night");
    }

    #[test]
    fn broken_config_falls_back_to_defaults() {
        let dir = scratch_dir("broken-config");
        let path = dir.join("config.toml");
        Config {
            format: Some(OutputFormat::Json),
            log_filter: None,
        }
        .save_to(&path)
        .expect("config saved");
        fs::write(&path, "format = \"yaml\"\n").expect("config overwritten");

        let loaded = Config::load_from(&path);
        assert!(loaded.is_err());
        assert_eq!(config_or_default(loaded), Config::default());

        let _ = fs::remove_dir_all(dir);
    }

    #[test]
    fn good_config_is_kept() {
        let cfg = Config {
            format: Some(OutputFormat::Json),
            log_filter: Some("debug".into()),
        };
        assert_eq!(config_or_default(Ok(cfg.clone())), cfg);
    }

    #[test]
    fn format_flag_overrides_configured_default() {
        let cfg = Config {
            format: Some(OutputFormat::Json),
            log_filter: None,
        };

        assert_eq!(output_format(Some(FormatArg::Plain), &cfg), OutputFormat::Plain);
        assert_eq!(output_format(None, &cfg), OutputFormat::Json);
        assert_eq!(output_format(None, &Config::default()), OutputFormat::Plain);
        assert_eq!(output_format(Some(FormatArg::Json), &Config::default()), OutputFormat::Json);
    }

    #[test]
    fn payload_file_resolves_to_icon() {
        let dir = scratch_dir("payload");
        fs::create_dir_all(&dir).expect("scratch dir");
        let path = dir.join("current.json");
        fs::write(
            &path,
            r#"{ "name": "Oslo", "weather": [ { "id": 600, "main": "Snow", "description": "light snow", "icon": "13n" } ] }"#,
        )
        .expect("payload written");

        let plain = resolve_payload(Some(&path), OutputFormat::Plain).unwrap();
        assert_eq!(plain, "hugeicons:moon-cloud-mid-snow");

        let json = resolve_payload(Some(&path), OutputFormat::Json).unwrap();
        assert_eq!(json, r#"{"code":"13n","icon":"hugeicons:moon-cloud-mid-snow"}"#);

        let _ = fs::remove_dir_all(dir);
    }

    #[test]
    fn missing_payload_file_names_path() {
        let path = scratch_dir("no-such-payload").join("missing.json");

        let err = read_input(Some(&path)).unwrap_err();
        assert!(err.to_string().contains("Failed to read payload file"));
        assert!(err.to_string().contains(&path.display().to_string()));

        assert!(resolve_payload(Some(&path), OutputFormat::Plain).is_err());
    }

    #[test]
    fn parses_payload_command() {
        let cli = Cli::try_parse_from(["weather-icons", "payload", "now.json", "--format", "plain"])
            .expect("valid args");
        match cli.command {
            Command::Payload { path, format } => {
                assert_eq!(path, Some(PathBuf::from("now.json")));
                assert!(matches!(format, Some(FormatArg::Plain)));
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn format_prompt_starts_on_current_format() {
        for (idx, format) in OutputFormat::all().iter().enumerate() {
            assert_eq!(format_cursor(*format), idx);
        }
        assert_eq!(
            OutputFormat::all()[format_cursor(OutputFormat::Json)],
            OutputFormat::Json
        );
    }
}
