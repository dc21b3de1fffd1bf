//! odoo-addons - core Odoo addon lookups from the command line

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use odoo_core_addons::{AddonsError, CoreLicense, OdooEdition, OdooSeries, RegistryConfig};
use serde::Serialize;
use std::path::PathBuf;
use tracing::{debug, Level};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[derive(Parser)]
#[command(name = "odoo-addons")]
#[command(version)]
#[command(about = "Core Odoo addon membership and license lookups", long_about = None)]
struct Cli {
    /// Directory with addons-<series>-<edition>.txt files (defaults to packaged data)
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    /// YAML config file
    #[arg(long, global = true, env = "ODOO_ADDONS_CONFIG")]
    config: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, global = true, env = "ODOO_ADDONS_LOG", default_value = "warn")]
    log_level: String,

    /// Output logs as JSON
    #[arg(long, global = true)]
    log_json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List core addons of a series
    List {
        /// Odoo series (e.g. 16.0)
        #[arg(long, short = 's')]
        series: OdooSeries,
        /// Restrict to one edition (ce, ee)
        #[arg(long, short = 'e')]
        edition: Option<OdooEdition>,
        /// Output format (table, json, yaml)
        #[arg(long, default_value = "table")]
        format: String,
    },
    /// Check whether an addon is core, exits 1 if it is not
    Check {
        /// Addon technical name
        addon: String,
        #[arg(long, short = 's')]
        series: OdooSeries,
        #[arg(long, default_value = "table")]
        format: String,
    },
    /// Print the license of a core addon
    License {
        addon: String,
        #[arg(long, short = 's')]
        series: OdooSeries,
        #[arg(long, default_value = "table")]
        format: String,
    },
    /// List supported series
    Series,
    /// Detect the series from an addon version (e.g. 16.0.1.0.0)
    Detect {
        version: String,
    },
}

#[derive(Serialize)]
struct CheckReport<'a> {
    addon: &'a str,
    series: OdooSeries,
    core: bool,
    community: bool,
    enterprise: bool,
}

#[derive(Serialize)]
struct LicenseReport<'a> {
    addon: &'a str,
    series: OdooSeries,
    edition: OdooEdition,
    license: CoreLicense,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(&cli.log_level, cli.log_json);

    let config = load_config(&cli)?;
    debug!("Registry config: {:?}", config);
    let registry = config.build_registry();

    match cli.command {
        Commands::List { series, edition, format } => {
            let set = match edition {
                Some(edition) => registry.addon_set(series, edition),
                None => registry.core_addons(series),
            }
            .with_context(|| format!("loading core addons for Odoo {}", series))?;
            let names = set.sorted();

            match format.as_str() {
                "json" => println!("{}", serde_json::to_string_pretty(&names)?),
                "yaml" => print!("{}", serde_yaml::to_string(&names)?),
                "table" => {
                    for name in &names {
                        println!("{}", name);
                    }
                    eprintln!("\nTotal: {} addon(s)", names.len());
                }
                other => unknown_format(other),
            }
        }

        Commands::Check { addon, series, format } => {
            let report = CheckReport {
                addon: &addon,
                series,
                core: registry.is_core_addon(&addon, series)?,
                community: registry.is_core_ce_addon(&addon, series)?,
                enterprise: registry.is_core_ee_addon(&addon, series)?,
            };

            match format.as_str() {
                "json" => println!("{}", serde_json::to_string_pretty(&report)?),
                "yaml" => print!("{}", serde_yaml::to_string(&report)?),
                "table" => print_check(&report),
                other => unknown_format(other),
            }

            if !report.core {
                std::process::exit(1);
            }
        }

        Commands::License { addon, series, format } => {
            let license = match registry.core_addon_license(&addon, series) {
                Ok(license) => license,
                Err(e @ AddonsError::NotCoreAddon { .. }) => {
                    eprintln!("{} {}", "✗".red(), e);
                    std::process::exit(1);
                }
                Err(e) => return Err(e.into()),
            };
            let edition = registry
                .core_addon_edition(&addon, series)?
                .context("licensed addon without an edition")?;

            let report = LicenseReport {
                addon: &addon,
                series,
                edition,
                license,
            };
            match format.as_str() {
                "json" => println!("{}", serde_json::to_string_pretty(&report)?),
                "yaml" => print!("{}", serde_yaml::to_string(&report)?),
                "table" => println!("{}", report.license),
                other => unknown_format(other),
            }
        }

        Commands::Series => {
            for series in OdooSeries::ALL {
                println!("{}", series);
            }
        }

        Commands::Detect { version } => match OdooSeries::from_addon_version(&version) {
            Some(series) => println!("{}", series),
            None => {
                eprintln!(
                    "{} cannot detect Odoo series from version '{}'",
                    "✗".red(),
                    version
                );
                std::process::exit(1);
            }
        },
    }

    Ok(())
}

/// Config file, then environment, then command line flags
fn load_config(cli: &Cli) -> Result<RegistryConfig> {
    let file_config = match &cli.config {
        Some(path) => RegistryConfig::from_yaml_file(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => RegistryConfig::default(),
    };

    Ok(file_config
        .merge(RegistryConfig::from_env())
        .merge(RegistryConfig {
            data_dir: cli.data_dir.clone(),
        }))
}

fn print_check(report: &CheckReport<'_>) {
    let mark = |b: bool| if b { "✓".green() } else { "✗".red() };

    println!("{} (Odoo {})", report.addon.bold(), report.series);
    println!("  {} core", mark(report.core));
    println!("  {} community", mark(report.community));
    println!("  {} enterprise", mark(report.enterprise));
}

fn unknown_format(format: &str) -> ! {
    eprintln!("Error: Unknown format '{}'. Use: table, json, or yaml", format);
    std::process::exit(1);
}

fn init_logging(log_level: &str, json: bool) {
    let level = match log_level.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "error" => Level::ERROR,
        _ => Level::WARN,
    };

    let filter = EnvFilter::from_default_env().add_directive(level.into());

    // Logs go to stderr so stdout stays parseable.
    if json {
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().with_target(true).with_writer(std::io::stderr))
            .init();
    }
}
