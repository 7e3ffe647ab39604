//! CLI entry point for privacheck.
//!
//! Argument parsing, I/O, logging setup and exit codes only.
//! All evaluation logic lives behind `privacheck-app`.

use anyhow::Context;
use camino::{Utf8Path, Utf8PathBuf};
use clap::{Parser, Subcommand, ValueEnum};
use privacheck_app::{
    CheckInput, ExplainOutput, parse_report_json, render_markdown, rescore, run_check,
    run_explain, runtime_error_report, verdict_exit_code, write_report, write_text,
};
use privacheck_settings::Overrides;
use privacheck_types::PrivacheckReport;
use schemars::schema_for;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser, Debug)]
#[command(
    name = "privacheck",
    version,
    about = "Privacy policy compliance checker (GDPR disclosure requirements)"
)]
struct Cli {
    /// Path to privacheck config TOML. A missing file means defaults.
    #[arg(long, default_value = "privacheck.toml")]
    config: Utf8PathBuf,

    /// Override profile (strict|standard|advisory).
    #[arg(long)]
    profile: Option<String>,

    /// Override score weighting (priority|risk).
    #[arg(long)]
    weighting: Option<String>,

    /// Override the score below which the verdict fails (0-100).
    #[arg(long)]
    fail_under: Option<u8>,

    /// Increase log verbosity (-v info, -vv debug). RUST_LOG takes precedence.
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    cmd: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Evaluate a privacy policy and write the JSON report.
    Check {
        /// Policy text file, or `-` for stdin.
        #[arg(long)]
        input: Utf8PathBuf,

        /// Where to write the JSON report.
        #[arg(long, default_value = "artifacts/privacheck/report.json")]
        report_out: Utf8PathBuf,

        /// Write a Markdown report alongside the JSON.
        #[arg(long)]
        write_markdown: bool,

        /// Where to write the Markdown report (if enabled).
        #[arg(long, default_value = "artifacts/privacheck/report.md")]
        markdown_out: Utf8PathBuf,
    },

    /// Render Markdown from an existing JSON report.
    Md {
        /// Path to the JSON report file.
        #[arg(long, default_value = "artifacts/privacheck/report.json")]
        report: Utf8PathBuf,

        /// Where to write the Markdown output (if not specified, prints to stdout).
        #[arg(long, short)]
        output: Option<Utf8PathBuf>,
    },

    /// Recompute the score of an existing report under another weighting policy.
    Score {
        /// Path to the JSON report file.
        #[arg(long, default_value = "artifacts/privacheck/report.json")]
        report: Utf8PathBuf,

        /// Weighting policy to apply (priority|risk).
        #[arg(long = "weighting", id = "score_weighting")]
        weighting: String,

        /// Write the rescored report here.
        #[arg(long, short)]
        output: Option<Utf8PathBuf>,
    },

    /// Explain a check id with its citation and remediation guidance.
    Explain {
        /// The check id (e.g. "policy-legal-basis") or rule id (e.g. "legal-basis").
        identifier: String,
    },

    /// Print a JSON schema.
    Schema {
        #[arg(value_enum)]
        kind: SchemaKind,
    },
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum SchemaKind {
    Report,
    Config,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.cmd {
        Commands::Check {
            ref input,
            ref report_out,
            write_markdown,
            ref markdown_out,
        } => cmd_check(&cli, input, report_out, write_markdown, markdown_out),
        Commands::Md { report, output } => cmd_md(report, output),
        Commands::Score {
            report,
            weighting,
            output,
        } => cmd_score(report, &weighting, output),
        Commands::Explain { identifier } => cmd_explain(&identifier),
        Commands::Schema { kind } => cmd_schema(kind),
    }
}

fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn cmd_check(
    cli: &Cli,
    input: &Utf8Path,
    report_out: &Utf8Path,
    write_markdown: bool,
    markdown_out: &Utf8Path,
) -> anyhow::Result<()> {
    let result = (|| -> anyhow::Result<i32> {
        let text = read_input(input)?;
        // Missing config file is allowed (defaults apply).
        let cfg_text = std::fs::read_to_string(&cli.config).unwrap_or_default();
        if cfg_text.is_empty() {
            tracing::debug!(path = %cli.config, "no config file, using defaults");
        }

        let overrides = Overrides {
            profile: cli.profile.clone(),
            weighting: cli.weighting.clone(),
            fail_under: cli.fail_under,
        };

        let output = run_check(CheckInput {
            text: &text,
            config_text: &cfg_text,
            overrides,
        })?;
        let report = output.report;

        write_report(report_out, &report).context("write report json")?;
        if write_markdown {
            write_text(markdown_out, &render_markdown(&report)).context("write markdown")?;
        }

        print_summary(&report);
        Ok(verdict_exit_code(report.verdict))
    })();

    match result {
        Ok(code) => {
            if code != 0 {
                std::process::exit(code);
            }
            Ok(())
        }
        Err(err) => {
            let report = runtime_error_report(&format!("{err:#}"));
            if let Err(write_err) = write_report(report_out, &report) {
                tracing::warn!(error = %write_err, "could not write error report");
            }
            eprintln!("privacheck error: {err:#}");
            std::process::exit(1);
        }
    }
}

fn read_input(input: &Utf8Path) -> anyhow::Result<String> {
    if input.as_str() == "-" {
        std::io::read_to_string(std::io::stdin()).context("read policy from stdin")
    } else {
        std::fs::read_to_string(input).with_context(|| format!("read policy: {input}"))
    }
}

fn read_report(path: &Utf8Path) -> anyhow::Result<PrivacheckReport> {
    let text = std::fs::read_to_string(path).with_context(|| format!("read report: {path}"))?;
    parse_report_json(&text)
}

fn print_summary(report: &PrivacheckReport) {
    println!(
        "privacheck: score {}/100 ({}, {} weighting), verdict {}",
        report.score,
        report.grade.as_str(),
        report.weighting.as_str(),
        report.verdict.as_str()
    );
    if let Some(risk) = report.financial_risk.as_ref().filter(|r| r.has_exposure()) {
        println!(
            "privacheck: estimated fine exposure EUR {}M - {}M across {} violation(s)",
            risk.min_exposure,
            risk.max_exposure,
            risk.violations.len()
        );
    }
}

fn cmd_md(report_path: Utf8PathBuf, output: Option<Utf8PathBuf>) -> anyhow::Result<()> {
    let report = read_report(&report_path)?;
    let md = render_markdown(&report);

    if let Some(out_path) = output {
        write_text(&out_path, &md).context("write markdown output")?;
    } else {
        print!("{}", md);
    }

    Ok(())
}

fn cmd_score(
    report_path: Utf8PathBuf,
    weighting: &str,
    output: Option<Utf8PathBuf>,
) -> anyhow::Result<()> {
    let weighting = privacheck_domain::parse_weighting(weighting)?;
    let report = rescore(read_report(&report_path)?, weighting);

    if let Some(out_path) = output {
        write_report(&out_path, &report).context("write rescored report")?;
    }
    print_summary(&report);

    let code = verdict_exit_code(report.verdict);
    if code != 0 {
        std::process::exit(code);
    }
    Ok(())
}

fn cmd_explain(identifier: &str) -> anyhow::Result<()> {
    match run_explain(identifier) {
        ExplainOutput::Found(exp) => {
            print!("{}", privacheck_app::format_explanation(&exp));
            Ok(())
        }
        ExplainOutput::NotFound {
            identifier,
            available_check_ids,
        } => {
            eprint!(
                "{}",
                privacheck_app::format_not_found(&identifier, &available_check_ids)
            );
            std::process::exit(1);
        }
    }
}

fn cmd_schema(kind: SchemaKind) -> anyhow::Result<()> {
    let schema = match kind {
        SchemaKind::Report => schema_for!(PrivacheckReport),
        SchemaKind::Config => schema_for!(privacheck_settings::PrivacheckConfigV1),
    };
    let json = serde_json::to_string_pretty(&schema).context("serialize schema")?;
    println!("{json}");
    Ok(())
}
