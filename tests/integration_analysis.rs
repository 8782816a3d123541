//! Integration tests for the full analysis workflow
//!
//! These tests load the fixture files in `testdata/`, run the complete
//! analysis and verify the end-to-end results.

use quickinsight::analyser::AnalysisContext;
use quickinsight::analyser::logic::{
    ChartType, CleaningOptions, clean_df, load_df, restore_integer_columns, run_full_analysis,
    save_df,
};
use quickinsight::config::AnalysisRequest;
use std::path::{Path, PathBuf};

fn fixture(name: &str) -> PathBuf {
    Path::new("testdata").join(name)
}

#[test]
fn test_analyse_sales_with_cleaning() -> anyhow::Result<()> {
    let df = load_df(&fixture("sales.csv"))?;
    assert_eq!(df.height(), 7);

    let request = AnalysisRequest {
        remove_duplicates: true,
        fill_missing: true,
        metric: Some("sales".to_owned()),
        dimension: Some("region".to_owned()),
        ..AnalysisRequest::default()
    };
    let report = run_full_analysis(&df, &request)?;

    assert_eq!(report.total_rows, 6);
    assert_eq!(report.total_cols, 4);
    assert_eq!(report.duplicates_removed, 1);
    assert_eq!(report.missing_values, 0);
    assert_eq!(report.numeric_columns, vec!["order_id", "sales", "units"]);
    assert_eq!(report.categorical_columns, vec!["region"]);
    assert_eq!(
        report.insights,
        vec![
            "The dataset contains 6 rows and 4 columns.",
            "There are no missing values after cleaning.",
            "'order_id' has an average of 3.50, with values ranging from 1 to 6.",
            "'sales' has an average of 200.00, with values ranging from 100 to 300.",
            "'units' has an average of 4.00, with values ranging from 2 to 6.",
            "The most frequent value in 'region' is 'north'.",
        ]
    );
    assert!(report.warnings.is_empty(), "unexpected warnings: {:?}", report.warnings);

    let chart = report.chart.as_ref().expect("chart recommended");
    assert_eq!(chart.chart_type, ChartType::Pie);
    assert_eq!(chart.title, "sales by region");

    assert_eq!(report.preview.len(), 5);
    assert_eq!(report.preview.get(2), Some(&vec!["3".to_owned(), "east".to_owned(), "200".to_owned(), "6".to_owned()]));
    Ok(())
}

#[test]
fn test_analyse_sales_without_cleaning() -> anyhow::Result<()> {
    let df = load_df(&fixture("sales.csv"))?;
    let report = run_full_analysis(&df, &AnalysisRequest::default())?;

    assert_eq!(report.total_rows, 7);
    assert_eq!(report.missing_values, 3);
    assert_eq!(
        report.insights.get(1).map(String::as_str),
        Some("There are 3 missing values remaining.")
    );
    assert!(report.chart.is_none());
    Ok(())
}

#[test]
fn test_outliers_and_cardinality_warnings() -> anyhow::Result<()> {
    let df = load_df(&fixture("outliers.csv"))?;
    let request = AnalysisRequest {
        metric: Some("amount".to_owned()),
        ..AnalysisRequest::default()
    };
    let report = run_full_analysis(&df, &request)?;

    assert_eq!(
        report.warnings,
        vec![
            "Column 'amount' contains 1 potential outliers.",
            "Column 'customer' has high cardinality (20 unique values).",
        ]
    );
    let chart = report.chart.expect("histogram for a lone metric");
    assert_eq!(chart.chart_type, ChartType::Histogram);
    Ok(())
}

#[test]
fn test_request_file_drives_analysis() -> anyhow::Result<()> {
    let request = AnalysisRequest::from_json_file(&fixture("request.json"))?;
    assert_eq!(request.preview_rows, 3);

    let df = load_df(&fixture("sales.csv"))?;
    let report = run_full_analysis(&df, &request)?;
    assert_eq!(report.preview.len(), 3);
    assert_eq!(report.duplicates_removed, 1);
    Ok(())
}

#[test]
fn test_clean_and_save_round_trip() -> anyhow::Result<()> {
    let df = load_df(&fixture("sales.csv"))?;
    let report = clean_df(
        &df,
        &CleaningOptions {
            remove_duplicates: true,
            fill_missing: true,
        },
    )?;
    let mut table = restore_integer_columns(&report.table)?;

    let out = std::env::temp_dir().join(format!("quickinsight_clean_{}.csv", std::process::id()));
    save_df(&mut table, &out)?;
    let reloaded = load_df(&out)?;
    std::fs::remove_file(&out)?;

    assert_eq!(reloaded.height(), 6);
    assert_eq!(reloaded.width(), 4);
    let nulls: usize = reloaded.get_columns().iter().map(|c| c.null_count()).sum();
    assert_eq!(nulls, 0);
    Ok(())
}

#[test]
fn test_context_keeps_original() -> anyhow::Result<()> {
    let df = load_df(&fixture("sales.csv"))?;
    let mut ctx = AnalysisContext::new(df);
    ctx.apply_cleaning(&CleaningOptions {
        remove_duplicates: true,
        fill_missing: false,
    })?;

    assert_eq!(ctx.original().height(), 7);
    assert_eq!(ctx.current().height(), 6);
    Ok(())
}

#[test]
fn test_non_csv_input_is_rejected() {
    assert!(load_df(&fixture("request.json")).is_err());
}
