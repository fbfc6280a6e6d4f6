use std::fs;
use std::path::{Path, PathBuf};

use analytics::config::Config;
use analytics::{AnalysisPipeline, Catalog, StructuredProfile};
use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde::Serialize;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Parser, Debug)]
#[command(name = "analytics")]
#[command(about = "Résumé and job description text analytics", long_about = None)]
#[command(version)]
struct Cli {
    /// Vocabulary cap for the TF-IDF vectorizer (overrides ANALYTICS_MAX_FEATURES)
    #[arg(long, global = true)]
    max_features: Option<usize>,

    /// Largest n-gram size (overrides ANALYTICS_NGRAM_MAX)
    #[arg(long, global = true)]
    ngram_max: Option<usize>,

    /// JD keywords treated as required skills (overrides ANALYTICS_JD_KEYWORD_LIMIT)
    #[arg(long, global = true)]
    jd_keyword_limit: Option<usize>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Full analysis of a JSON profile against a job description
    Full {
        /// Path to the structured profile (JSON)
        #[arg(long)]
        profile: PathBuf,
        /// Path to the job description (plain text)
        #[arg(long)]
        job: PathBuf,
    },
    /// TF-IDF similarity and domain classification of two plain-text documents
    Match {
        #[arg(long)]
        resume: PathBuf,
        #[arg(long)]
        job: PathBuf,
    },
    /// Skill gap between comma-separated skill lists
    Gap {
        /// Skills the candidate has
        #[arg(long, value_delimiter = ',')]
        have: Vec<String>,
        /// Skills the role requires
        #[arg(long, value_delimiter = ',')]
        need: Vec<String>,
    },
    /// Score résumé bullets, one per line
    Bullets {
        #[arg(long)]
        file: PathBuf,
    },
    /// ATS compatibility of a plain-text résumé against a job description
    Ats {
        #[arg(long)]
        resume: PathBuf,
        #[arg(long)]
        job: PathBuf,
    },
    /// Suggest skills to learn for the profile's target role
    Suggest {
        /// Path to the structured profile (JSON)
        #[arg(long)]
        profile: PathBuf,
        /// Overrides the profile's target_role
        #[arg(long)]
        role: Option<String>,
    },
    /// Rewrite weak bullets, one per line, for a target role
    Rewrite {
        #[arg(long)]
        file: PathBuf,
        #[arg(long, default_value = "")]
        role: String,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let mut config = Config::from_env()?;
    if let Some(max_features) = cli.max_features {
        config.max_features = max_features;
    }
    if let Some(ngram_max) = cli.ngram_max {
        config.ngram_max = ngram_max;
    }
    if let Some(limit) = cli.jd_keyword_limit {
        config.jd_keyword_limit = limit;
    }

    // Reports go to stdout, logs to stderr
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    info!(
        "analytics v{} (max_features={}, ngram_max={}, jd_keyword_limit={})",
        env!("CARGO_PKG_VERSION"),
        config.max_features,
        config.ngram_max,
        config.jd_keyword_limit
    );

    let pipeline = AnalysisPipeline::new(config.pipeline_config(), Catalog::shared())
        .context("invalid analytics configuration")?;

    match cli.command {
        Command::Full { profile, job } => {
            let profile = read_profile(&profile)?;
            let job = read_text(&job)?;
            print_json(&pipeline.full_analysis(&profile, &job)?)
        }
        Command::Match { resume, job } => {
            let report = pipeline.match_resume_to_job(&read_text(&resume)?, &read_text(&job)?)?;
            print_json(&report)
        }
        Command::Gap { have, need } => {
            let have = clean_list(have);
            let need = clean_list(need);
            print_json(&pipeline.analyze_skill_gap(&have, &need))
        }
        Command::Bullets { file } => {
            let bullets = read_lines(&file)?;
            print_json(&pipeline.score_bullets(&bullets))
        }
        Command::Ats { resume, job } => {
            let report = pipeline.ats_score(&read_text(&resume)?, &read_text(&job)?);
            print_json(&report)
        }
        Command::Suggest { profile, role } => {
            let mut profile = read_profile(&profile)?;
            if role.is_some() {
                profile.target_role = role;
            }
            print_json(&pipeline.suggest_skills(&profile))
        }
        Command::Rewrite { file, role } => {
            let bullets = read_lines(&file)?;
            print_json(&pipeline.rewrite_bullets(&bullets, &role))
        }
    }
}

fn read_text(path: &Path) -> Result<String> {
    fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))
}

/// Parses and validates a structured profile before it reaches the pipeline.
fn read_profile(path: &Path) -> Result<StructuredProfile> {
    let raw = read_text(path)?;
    let profile: StructuredProfile = serde_json::from_str(&raw)
        .with_context(|| format!("failed to parse profile {}", path.display()))?;
    profile.validate()?;
    Ok(profile)
}

/// Non-empty trimmed lines of a file.
fn read_lines(path: &Path) -> Result<Vec<String>> {
    Ok(read_text(path)?
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect())
}

fn clean_list(items: Vec<String>) -> Vec<String> {
    items
        .into_iter()
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
