// SPDX-License-Identifier: PMPL-1.0-or-later

//! country-mapper: look up country reference data from the command line
//!
//! Each subcommand maps onto one lookup of the library client. The catalog
//! comes from the bundled table unless `--url` or `--file` names another.

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use colored::*;
use country_mapper::{CountryInfo, CountryInfoClient};
use std::fs::File;
use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "country-mapper")]
#[command(version)]
#[command(about = "Country reference data lookups by name, ISO code, currency, calling code and region")]
#[command(long_about = None)]
struct Cli {
    #[command(flatten)]
    source: SourceArgs,

    /// Print results as JSON
    #[arg(long, global = true)]
    json: bool,

    /// Verbose logging on stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Args)]
#[group(multiple = false)]
struct SourceArgs {
    /// Load the table from a remote URL instead of the bundled copy
    #[arg(long, value_name = "URL")]
    url: Option<String>,

    /// Load the table from a local file instead of the bundled copy
    #[arg(long, value_name = "PATH")]
    file: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Find a country by name or alternate name
    Name {
        #[arg(value_name = "NAME")]
        query: String,
    },

    /// Find a country by ISO 3166 alpha-2 code
    Alpha2 {
        #[arg(value_name = "CODE")]
        query: String,
    },

    /// Find a country by ISO 3166 alpha-3 code
    Alpha3 {
        #[arg(value_name = "CODE")]
        query: String,
    },

    /// List countries using a currency
    Currency {
        #[arg(value_name = "CURRENCY")]
        query: String,
    },

    /// List countries sharing an international calling code
    CallingCode {
        #[arg(value_name = "CODE")]
        query: String,
    },

    /// List countries in a region
    Region {
        #[arg(value_name = "REGION")]
        query: String,
    },

    /// List countries in a subregion
    Subregion {
        #[arg(value_name = "SUBREGION")]
        query: String,
    },

    /// List every country name in catalog order
    List,
}

/// Whether a lookup produced anything to print.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Outcome {
    Found,
    NotFound,
}

impl Outcome {
    fn from_found(found: bool) -> Self {
        if found {
            Outcome::Found
        } else {
            Outcome::NotFound
        }
    }

    fn status(self) -> u8 {
        match self {
            Outcome::Found => 0,
            Outcome::NotFound => 1,
        }
    }
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(default_level))
        .with_writer(io::stderr)
        .init();

    let client = load_client(&cli.source)?;

    let outcome = run_command(&client, &cli.command, cli.json, &mut io::stdout().lock())?;
    let status = report_outcome(outcome, &mut io::stderr().lock())?;
    Ok(ExitCode::from(status))
}

fn load_client(source: &SourceArgs) -> Result<CountryInfoClient> {
    if let Some(url) = &source.url {
        return country_mapper::load_from_url(url)
            .with_context(|| format!("loading country data from {}", url));
    }
    if let Some(path) = &source.file {
        let file =
            File::open(path).with_context(|| format!("opening {}", path.display()))?;
        return country_mapper::load_from_reader(file)
            .with_context(|| format!("parsing {}", path.display()));
    }
    country_mapper::load_default().context("parsing bundled country data")
}

fn run_command<W: Write>(
    client: &CountryInfoClient,
    command: &Commands,
    json: bool,
    out: &mut W,
) -> Result<Outcome> {
    match command {
        Commands::Name { query } => write_one(out, client.by_name(query), json),
        Commands::Alpha2 { query } => write_one(out, client.by_alpha2(query), json),
        Commands::Alpha3 { query } => write_one(out, client.by_alpha3(query), json),
        Commands::Currency { query } => write_many(out, &client.by_currency(query), json),
        Commands::CallingCode { query } => write_many(out, &client.by_calling_code(query), json),
        Commands::Region { query } => write_many(out, &client.by_region(query), json),
        Commands::Subregion { query } => write_many(out, &client.by_subregion(query), json),
        Commands::List => {
            let names: Vec<&str> = client.iter().map(|c| c.name.as_str()).collect();
            if json {
                writeln!(out, "{}", serde_json::to_string_pretty(&names)?)?;
            } else {
                for name in &names {
                    writeln!(out, "{}", name)?;
                }
            }
            Ok(Outcome::from_found(!names.is_empty()))
        }
    }
}

/// Print the miss message if needed and return the process exit status.
fn report_outcome<W: Write>(outcome: Outcome, err: &mut W) -> Result<u8> {
    if outcome == Outcome::NotFound {
        writeln!(err, "{}", "no matching country".yellow())?;
    }
    Ok(outcome.status())
}

fn write_one<W: Write>(out: &mut W, country: Option<&CountryInfo>, json: bool) -> Result<Outcome> {
    let Some(country) = country else {
        return Ok(Outcome::NotFound);
    };
    if json {
        writeln!(out, "{}", serde_json::to_string_pretty(country)?)?;
    } else {
        write_country(out, country)?;
    }
    Ok(Outcome::Found)
}

fn write_many<W: Write>(out: &mut W, countries: &[&CountryInfo], json: bool) -> Result<Outcome> {
    if countries.is_empty() {
        return Ok(Outcome::NotFound);
    }
    if json {
        writeln!(out, "{}", serde_json::to_string_pretty(countries)?)?;
    } else {
        for (i, country) in countries.iter().enumerate() {
            if i > 0 {
                writeln!(out)?;
            }
            write_country(out, country)?;
        }
    }
    Ok(Outcome::Found)
}

fn write_country<W: Write>(out: &mut W, country: &CountryInfo) -> io::Result<()> {
    writeln!(
        out,
        "{} ({} / {})",
        country.name.bold().cyan(),
        country.alpha2.yellow(),
        country.alpha3.yellow()
    )?;
    writeln!(out, "  Capital: {}", country.capital)?;
    writeln!(out, "  Currencies: {}", country.currencies.join(", "))?;
    writeln!(out, "  Calling codes: {}", country.calling_codes.join(", "))?;
    writeln!(out, "  Region: {} / {}", country.region, country.subregion)?;
    let alternates: Vec<&str> = country
        .alternate_names
        .iter()
        .map(String::as_str)
        .filter(|name| !name.is_empty())
        .collect();
    if !alternates.is_empty() {
        writeln!(out, "  Also known as: {}", alternates.join(", ").dimmed())?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const TABLE: &str = "\
name;topLevelDomain;alpha2;numericCode;alpha3;currencies;callingCodes;capital;altSpellings;relevance;region;subregion
Atlantis;.at;AT;999;ATL;ORI;999;Poseidonia;Lost City;0;Myth;Sunken Isles
Lemuria;.le;LE;998;LEM;ORI;998;Kumari;Mu;0;Myth;Sunken Isles
";

    fn client() -> CountryInfoClient {
        country_mapper::load_from_reader(TABLE.as_bytes()).expect("fixture table parses")
    }

    fn run(args: &[&str]) -> (Outcome, String) {
        let cli = Cli::try_parse_from(args).expect("arguments parse");
        let mut out = Vec::new();
        let outcome = run_command(&client(), &cli.command, cli.json, &mut out).expect("command runs");
        (outcome, String::from_utf8(out).expect("utf-8 output"))
    }

    #[test]
    fn single_lookup_json_is_an_object() {
        let (outcome, out) = run(&["country-mapper", "--json", "alpha3", "atl"]);
        assert_eq!(outcome, Outcome::Found);
        let value: serde_json::Value = serde_json::from_str(&out).expect("valid JSON");
        assert!(value.is_object());
        assert_eq!(value["name"], "Atlantis");
        assert_eq!(value["callingCodes"][0], "999");
    }

    #[test]
    fn list_lookup_json_is_an_array() {
        let (outcome, out) = run(&["country-mapper", "currency", "ORI", "--json"]);
        assert_eq!(outcome, Outcome::Found);
        let value: serde_json::Value = serde_json::from_str(&out).expect("valid JSON");
        let names: Vec<&str> = value
            .as_array()
            .expect("array output")
            .iter()
            .filter_map(|c| c["name"].as_str())
            .collect();
        assert_eq!(names, vec!["Atlantis", "Lemuria"]);
    }

    #[test]
    fn every_lookup_has_a_subcommand() {
        for args in [
            ["country-mapper", "name", "poseidonia"],
            ["country-mapper", "alpha2", "le"],
            ["country-mapper", "alpha3", "LEM"],
            ["country-mapper", "currency", "ori"],
            ["country-mapper", "calling-code", "998"],
            ["country-mapper", "region", "myth"],
            ["country-mapper", "subregion", "sunken isles"],
        ] {
            let (outcome, out) = run(&args);
            assert_eq!(outcome, Outcome::Found, "{args:?}");
            assert!(!out.is_empty(), "{args:?}");
        }
    }

    #[test]
    fn list_prints_names_in_order() {
        let (outcome, out) = run(&["country-mapper", "list"]);
        assert_eq!(outcome, Outcome::Found);
        assert_eq!(out.lines().collect::<Vec<_>>(), vec!["Atlantis", "Lemuria"]);
    }

    #[test]
    fn miss_prints_nothing_and_exits_with_one() {
        let (outcome, out) = run(&["country-mapper", "name", "Hyperborea"]);
        assert_eq!(outcome, Outcome::NotFound);
        assert!(out.is_empty());

        let mut err = Vec::new();
        let status = report_outcome(outcome, &mut err).expect("stderr write");
        assert_eq!(status, 1);
        assert!(String::from_utf8_lossy(&err).contains("no matching country"));
    }

    #[test]
    fn hit_exits_with_zero_silently() {
        let mut err = Vec::new();
        assert_eq!(report_outcome(Outcome::Found, &mut err).expect("no write"), 0);
        assert!(err.is_empty());
    }

    #[test]
    fn url_and_file_are_mutually_exclusive() {
        let err = Cli::try_parse_from([
            "country-mapper",
            "--url",
            "https://example.com/c.csv",
            "--file",
            "c.csv",
            "list",
        ])
        .err()
        .expect("conflicting sources are rejected");
        assert_eq!(err.kind(), clap::error::ErrorKind::ArgumentConflict);
    }

    #[test]
    fn single_source_flag_is_accepted() {
        let cli = Cli::try_parse_from(["country-mapper", "--file", "c.csv", "list"])
            .expect("one source is fine");
        assert_eq!(cli.source.file, Some(PathBuf::from("c.csv")));
        assert!(cli.source.url.is_none());
    }
}
