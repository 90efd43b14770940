use std::fs;
use std::time::Instant;

use anyhow::{Context, Result};
use tracing::{debug, info, info_span};

use eda_cli::config::ProfileConfig;
use eda_cli::summary::{
    cross_tab_table, print_report, schema_table, statistics_table, value_count_table,
};
use eda_ingest::{LoadOptions, Source, load, write_csv};
use eda_model::Dataset;
use eda_profile::{cross_tab, profile, project, summary_statistics, value_counts};

use crate::cli::{
    CountsArgs, CrosstabArgs, LoadArgs, OutputFormatArg, ProfileArgs, ProjectArgs, SchemaArgs,
    StatsArgs,
};

pub fn run_profile(args: &ProfileArgs) -> Result<()> {
    let (config, source) = resolve(&args.load, args.source.as_deref())?;
    let spec = config.spec();
    let dataset = load_dataset(&source, &config.load_options_for(&spec))?;

    let span = info_span!("report", source = %source);
    let _guard = span.enter();
    let start = Instant::now();
    let report = profile(&dataset, &spec).with_context(|| format!("profile {source}"))?;
    let fingerprint = report.fingerprint().context("serialize report")?;
    info!(
        rows = report.row_count,
        duplicates = report.duplicate_rows,
        redundant_pairs = report.redundant_pairs.len(),
        fingerprint = %fingerprint,
        duration_ms = start.elapsed().as_millis(),
        "report ready"
    );

    if let Some(path) = &args.output {
        let json = serde_json::to_string_pretty(&report).context("serialize report")?;
        fs::write(path, json).with_context(|| format!("write {}", path.display()))?;
        debug!(path = %path.display(), "report written");
    }
    match args.format {
        OutputFormatArg::Json if args.output.is_none() => {
            let json = serde_json::to_string_pretty(&report).context("serialize report")?;
            println!("{json}");
        }
        OutputFormatArg::Json => {}
        OutputFormatArg::Table => {
            println!("Source: {source}");
            print_report(&report);
            println!();
            println!("Fingerprint: {fingerprint}");
        }
    }
    Ok(())
}

pub fn run_counts(args: &CountsArgs) -> Result<()> {
    let (config, source) = resolve(&args.load, Some(args.source.as_str()))?;
    let dataset = load_dataset(&source, &config.inferred_load_options())?;
    let counts = value_counts(&dataset, &args.column)?;
    println!("{} ({} distinct, {} values)", counts.column(), counts.len(), counts.total());
    println!("{}", value_count_table(&counts));
    Ok(())
}

pub fn run_crosstab(args: &CrosstabArgs) -> Result<()> {
    let (config, source) = resolve(&args.load, Some(args.source.as_str()))?;
    let dataset = load_dataset(&source, &config.inferred_load_options())?;
    let table = cross_tab(&dataset, &args.column_a, &args.column_b)?;
    println!("{}", cross_tab_table(&table));
    let verdict = if table.is_redundant() {
        "redundant (one-to-one)"
    } else {
        "not redundant"
    };
    println!("{} / {}: {verdict}", table.column_a(), table.column_b());
    Ok(())
}

pub fn run_stats(args: &StatsArgs) -> Result<()> {
    let (config, source) = resolve(&args.load, Some(args.source.as_str()))?;
    let dataset = load_dataset(&source, &config.inferred_load_options())?;
    let stats = summary_statistics(&dataset, &args.column)?;
    println!("{}", statistics_table(std::slice::from_ref(&stats)));
    Ok(())
}

pub fn run_project(args: &ProjectArgs) -> Result<()> {
    let (config, source) = resolve(&args.load, Some(args.source.as_str()))?;
    let dataset = load_dataset(&source, &config.inferred_load_options())?;
    let projected = project(&dataset, &args.columns)?;
    write_csv(&projected, &args.output)
        .with_context(|| format!("write {}", args.output.display()))?;
    println!(
        "Wrote {} rows x {} columns to {}",
        projected.row_count(),
        projected.column_count(),
        args.output.display()
    );
    Ok(())
}

pub fn run_schema(args: &SchemaArgs) -> Result<()> {
    let config = ProfileConfig::load(args.config.as_deref())?;
    println!("{}", schema_table(&config.spec()));
    Ok(())
}

/// Merge the config file with command-line overrides.
fn resolve(args: &LoadArgs, cli_source: Option<&str>) -> Result<(ProfileConfig, Source)> {
    let mut config = ProfileConfig::load(args.config.as_deref())?;
    if !args.missing_values.is_empty() {
        config.missing_values = args.missing_values.clone();
    }
    if args.timeout_secs.is_some() {
        config.timeout_secs = args.timeout_secs;
    }
    let source = config.source(cli_source);
    Ok((config, source))
}

fn load_dataset(source: &Source, options: &LoadOptions) -> Result<Dataset> {
    load(source, options).with_context(|| format!("load {source}"))
}
