//! CLI entry point for trustgate.
//!
//! This module is intentionally thin: it handles argument parsing, I/O, and exit codes.
//! All business logic lives in the `trustgate-app` crate.

mod logging;

use anyhow::Context;
use camino::{Utf8Path, Utf8PathBuf};
use clap::{Parser, Subcommand};
use trustgate_app::{
    failed_stage_result, format_explanation, format_not_found, format_policy_list, list_policies,
    parse_stage_json, render_annotations, render_markdown, resolve_settings, run_explain,
    run_guardrail, serialize_stage, stage_exit_code, to_renderable, ExplainOutput,
};
use trustgate_settings::{EngineSettings, Overrides};
use trustgate_types::StageResult;

#[derive(Parser, Debug)]
#[command(
    name = "trustgate",
    version,
    about = "Compliance governance guardrail for generated cloud architectures"
)]
struct Cli {
    /// Path to trustgate config TOML (missing file means defaults).
    #[arg(long, default_value = "trustgate.toml")]
    config: Utf8PathBuf,

    /// Override the engine identity reported as `model_used`.
    #[arg(long)]
    model_used: Option<String>,

    /// Override usage units charged per active policy.
    #[arg(long)]
    usage_per_policy: Option<u32>,

    #[command(subcommand)]
    cmd: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Audit and auto-correct an architecture, then write the stage result.
    Audit {
        /// Architecture stage output (JSON with a `manifest` object).
        #[arg(long)]
        architect: Utf8PathBuf,

        /// Intent classification output (JSON with sensitivity and frameworks).
        #[arg(long)]
        intent: Utf8PathBuf,

        /// Where to write the JSON stage result.
        #[arg(long, default_value = "artifacts/trustgate/stage.json")]
        out: Utf8PathBuf,

        /// Write a Markdown summary alongside the JSON.
        #[arg(long)]
        write_markdown: bool,

        /// Where to write the Markdown summary (if enabled).
        #[arg(long, default_value = "artifacts/trustgate/comment.md")]
        markdown_out: Utf8PathBuf,
    },

    /// Render markdown from an existing stage result.
    Md {
        /// Path to the JSON stage result.
        #[arg(long, default_value = "artifacts/trustgate/stage.json")]
        stage: Utf8PathBuf,

        /// Where to write the Markdown output (if not specified, prints to stdout).
        #[arg(long, short)]
        output: Option<Utf8PathBuf>,
    },

    /// Render GitHub Actions annotations from an existing stage result.
    Annotations {
        /// Path to the JSON stage result.
        #[arg(long, default_value = "artifacts/trustgate/stage.json")]
        stage: Utf8PathBuf,

        /// Maximum number of annotations to emit.
        #[arg(long, default_value = "10")]
        max: usize,
    },

    /// Explain a policy: framework, severity, and automated correction.
    Explain {
        /// The policy id (e.g., "privacy.eu_residency").
        policy_id: String,
    },

    /// List the policies activated for a set of frameworks (baseline is always included).
    Policies {
        /// Framework identifier; repeatable (e.g., "health-data", "EU-privacy", "HIPAA").
        #[arg(long = "framework")]
        frameworks: Vec<String>,
    },
}

fn main() -> anyhow::Result<()> {
    logging::init_tracing();
    let cli = Cli::parse();

    match cli.cmd {
        Commands::Audit {
            ref architect,
            ref intent,
            ref out,
            write_markdown,
            ref markdown_out,
        } => cmd_audit(&cli, architect, intent, out, write_markdown, markdown_out),
        Commands::Md { stage, output } => cmd_md(stage, output),
        Commands::Annotations { stage, max } => cmd_annotations(stage, max),
        Commands::Explain { policy_id } => cmd_explain(&policy_id),
        Commands::Policies { frameworks } => cmd_policies(&frameworks),
    }
}

fn cmd_audit(
    cli: &Cli,
    architect: &Utf8Path,
    intent: &Utf8Path,
    out: &Utf8Path,
    write_markdown: bool,
    markdown_out: &Utf8Path,
) -> anyhow::Result<()> {
    let result = (|| -> anyhow::Result<i32> {
        let settings = load_settings(cli)?;

        let architect_text = std::fs::read_to_string(architect)
            .with_context(|| format!("read architect payload: {}", architect))?;
        let intent_text = std::fs::read_to_string(intent)
            .with_context(|| format!("read intent payload: {}", intent))?;

        let stage = run_guardrail(&architect_text, &intent_text, &settings);

        write_stage_file(out, &stage).context("write stage json")?;

        if write_markdown {
            let md = render_markdown(&to_renderable(&stage));
            write_text_file(markdown_out, &md).context("write markdown")?;
        }

        Ok(stage_exit_code(stage.status))
    })();

    match result {
        Ok(code) => {
            if code != 0 {
                std::process::exit(code);
            }
            Ok(())
        }
        Err(err) => {
            let stage = failed_stage_result(0, format!("{err:#}"));
            let _ = write_stage_file(out, &stage);
            eprintln!("trustgate error: {err:#}");
            std::process::exit(1);
        }
    }
}

fn load_settings(cli: &Cli) -> anyhow::Result<EngineSettings> {
    // Missing file is allowed (defaults apply).
    let cfg_text = std::fs::read_to_string(&cli.config).unwrap_or_default();
    tracing::debug!(config = %cli.config, found = !cfg_text.is_empty(), "loading settings");
    let overrides = Overrides {
        model_used: cli.model_used.clone(),
        usage_per_policy: cli.usage_per_policy,
    };
    resolve_settings(&cfg_text, overrides).with_context(|| format!("load config: {}", cli.config))
}

fn write_stage_file(path: &Utf8Path, stage: &StageResult) -> anyhow::Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).with_context(|| format!("create directory: {}", parent))?;
    }
    tracing::debug!(path = %path, status = stage.status.as_str(), "writing stage result");
    let data = serialize_stage(stage).context("serialize stage")?;
    std::fs::write(path, data).with_context(|| format!("write stage: {}", path))?;
    Ok(())
}

fn write_text_file(path: &Utf8Path, text: &str) -> anyhow::Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).with_context(|| format!("create directory: {}", parent))?;
    }
    std::fs::write(path, text).with_context(|| format!("write text: {}", path))?;
    Ok(())
}

fn read_stage(path: &Utf8Path) -> anyhow::Result<StageResult> {
    let text =
        std::fs::read_to_string(path).with_context(|| format!("read stage result: {}", path))?;
    parse_stage_json(&text)
}

fn cmd_md(stage_path: Utf8PathBuf, output: Option<Utf8PathBuf>) -> anyhow::Result<()> {
    let stage = read_stage(&stage_path)?;
    let md = render_markdown(&to_renderable(&stage));

    if let Some(out_path) = output {
        write_text_file(&out_path, &md).context("write markdown output")?;
    } else {
        print!("{}", md);
    }

    Ok(())
}

fn cmd_annotations(stage_path: Utf8PathBuf, max: usize) -> anyhow::Result<()> {
    let stage = read_stage(&stage_path)?;
    let annotations = render_annotations(&to_renderable(&stage), max);

    for annotation in annotations {
        println!("{}", annotation);
    }

    Ok(())
}

fn cmd_explain(policy_id: &str) -> anyhow::Result<()> {
    match run_explain(policy_id) {
        ExplainOutput::Found(policy) => {
            print!("{}", format_explanation(policy));
            Ok(())
        }
        ExplainOutput::NotFound {
            identifier,
            available_policy_ids,
        } => {
            eprint!("{}", format_not_found(&identifier, &available_policy_ids));
            std::process::exit(1);
        }
    }
}

fn cmd_policies(frameworks: &[String]) -> anyhow::Result<()> {
    print!("{}", format_policy_list(&list_policies(frameworks)));
    Ok(())
}
