use anyhow::{Context as _, Result};
use clap::{Args, Parser, Subcommand};
use quickinsight::analyser::logic::{
    AnalysisReport, CleaningOptions, clean_df, load_df, restore_integer_columns,
    run_full_analysis, save_df,
};
use quickinsight::config::AnalysisRequest;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(
    name = "quickinsight",
    version,
    about = "Automatic insights, warnings and chart suggestions for CSV files"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// Cleaning switches shared by every subcommand.
#[derive(Args, Clone, Copy, Debug)]
pub struct CleanArgs {
    /// Drop rows identical to an earlier row
    #[arg(long)]
    pub remove_duplicates: bool,

    /// Fill missing cells ("Unknown" for text, the column mean for numbers)
    #[arg(long)]
    pub fill_missing: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Analyse a CSV file and print insights, warnings and a chart suggestion
    Analyse {
        /// Path to the CSV file
        file: PathBuf,

        #[command(flatten)]
        clean: CleanArgs,

        /// Numeric column to chart
        #[arg(long)]
        metric: Option<String>,

        /// Column to group or plot the metric against
        #[arg(long)]
        dimension: Option<String>,

        /// Chart type override (bar, line, area, histogram, pie, box, scatter)
        #[arg(long)]
        chart_type: Option<String>,

        /// Number of rows to include in the preview
        #[arg(long)]
        preview_rows: Option<usize>,

        /// Path to a JSON analysis request; flags given on the command line win
        #[arg(long, env = "QUICKINSIGHT_CONFIG")]
        config: Option<PathBuf>,

        /// Print the report as JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Clean a CSV file and save the result
    Clean {
        /// Path to the CSV file
        file: PathBuf,

        /// Output CSV path
        #[arg(short, long)]
        output: PathBuf,

        #[command(flatten)]
        clean: CleanArgs,
    },
}

pub fn run_command(command: Commands) -> Result<()> {
    match command {
        Commands::Analyse {
            file,
            clean,
            metric,
            dimension,
            chart_type,
            preview_rows,
            config,
            json,
        } => {
            let mut request = match config {
                Some(path) => AnalysisRequest::from_json_file(&path)?,
                None => AnalysisRequest::default(),
            };
            request.remove_duplicates |= clean.remove_duplicates;
            request.fill_missing |= clean.fill_missing;
            request.metric = metric.or(request.metric);
            request.dimension = dimension.or(request.dimension);
            request.chart_type = chart_type.or(request.chart_type);
            if let Some(n) = preview_rows {
                request.preview_rows = n;
            }
            handle_analyse(&file, &request, json)
        }
        Commands::Clean {
            file,
            output,
            clean,
        } => handle_clean(&file, &output, clean),
    }
}

fn handle_analyse(file: &Path, request: &AnalysisRequest, json: bool) -> Result<()> {
    let df = load_df(file).context("Failed to load input file")?;
    let report = run_full_analysis(&df, request).context("Analysis failed")?;

    if json {
        let out = serde_json::to_string_pretty(&report).context("Failed to serialise report")?;
        println!("{out}");
    } else {
        print_report(&report);
    }
    Ok(())
}

fn print_report(report: &AnalysisReport) {
    println!(
        "Rows: {}  Columns: {}  Missing: {}",
        report.total_rows, report.total_cols, report.missing_values
    );
    if report.duplicates_removed > 0 {
        println!("Removed {} duplicate rows.", report.duplicates_removed);
    }
    for name in &report.unfilled_columns {
        println!("Column '{name}' has no values and was left unfilled.");
    }
    println!("Numeric: {}", report.numeric_columns.join(", "));
    println!("Categorical: {}", report.categorical_columns.join(", "));

    println!("\nInsights:");
    for insight in &report.insights {
        println!("  - {insight}");
    }

    if !report.warnings.is_empty() {
        println!("\nWarnings:");
        for warning in &report.warnings {
            println!("  ! {warning}");
        }
    }

    match &report.chart {
        Some(chart) => println!("\nChart: {} ({})", chart.title, chart.chart_type),
        None => println!("\nChart: none"),
    }

    if !report.preview.is_empty() {
        let header: Vec<String> = report
            .table
            .get_column_names()
            .iter()
            .map(|n| n.to_string())
            .collect();
        println!("\nPreview:");
        println!("  {}", header.join(" | "));
        for row in &report.preview {
            println!("  {}", row.join(" | "));
        }
    }
}

fn handle_clean(file: &Path, output: &Path, clean: CleanArgs) -> Result<()> {
    let options = CleaningOptions {
        remove_duplicates: clean.remove_duplicates,
        fill_missing: clean.fill_missing,
    };
    if options.is_noop() {
        tracing::warn!("No cleaning step selected; the output will match the input");
    }

    println!("Cleaning {} and saving to {}...", file.display(), output.display());

    let df = load_df(file).context("Failed to load input file")?;
    let report = clean_df(&df, &options).context("Failed to clean data")?;
    let mut table = restore_integer_columns(&report.table)?;
    save_df(&mut table, output).context("Failed to save cleaned file")?;

    println!(
        "Successfully cleaned: {} duplicate rows removed, {} cells filled.",
        report.duplicates_removed, report.filled_cells
    );
    for name in &report.unfilled_columns {
        println!("Column '{name}' has no values and was left unfilled.");
    }
    Ok(())
}
