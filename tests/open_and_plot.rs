use std::io::Write;

use breast_visualizer::analysis::{self, OpenOutcome};
use breast_visualizer::charts::{ChartData, BAR_COLORS};
use breast_visualizer::config::ColumnConfig;
use tempfile::NamedTempFile;

fn write_csv(contents: &str) -> NamedTempFile {
    let mut tmp = tempfile::Builder::new().suffix(".csv").tempfile().unwrap();
    write!(tmp, "{}", contents).unwrap();
    tmp.flush().unwrap();
    tmp
}

fn open(contents: &str) -> OpenOutcome {
    let tmp = write_csv(contents);
    analysis::run(Some(tmp.path()), &ColumnConfig::default())
}

fn expect_chart(outcome: OpenOutcome) -> ChartData {
    match outcome {
        OpenOutcome::Chart(chart) => chart,
        other => panic!("expected a chart, got {:?}", other),
    }
}

fn expect_failure(outcome: OpenOutcome) -> String {
    match outcome {
        OpenOutcome::Failed(message) => message,
        other => panic!("expected a failure, got {:?}", other),
    }
}

#[test]
fn test_valid_dataset_charts_two_classes() {
    let csv = "Class,TumorSizeNum,deg-malig,age\n\
               no-recurrence-events,10,1,40\n\
               recurrence-events,30,3,50\n\
               no-recurrence-events,20,2,60\n";

    let chart = expect_chart(open(csv));

    assert_eq!(chart.title, "Breast Cancer: Mean Tumorsizenum by Class");
    assert_eq!(chart.x_label, "Class");
    assert_eq!(chart.y_label, "Mean Tumorsizenum");
    assert_eq!(
        chart.labels(),
        vec!["recurrence-events", "no-recurrence-events"]
    );
    assert!((chart.bars[0].value - 30.0).abs() < 1e-9);
    assert!((chart.bars[1].value - 15.0).abs() < 1e-9);
    assert_eq!(chart.bars[0].color, BAR_COLORS[0]);
    assert_eq!(chart.bars[1].color, BAR_COLORS[1]);
}

#[test]
fn test_headers_normalized_regardless_of_case_and_spacing() {
    let csv = " CLASS , tumorSizeNum ,menopause,node-caps\n\
               a,4,pre,no\n\
               b,8,ge40,yes\n";

    let chart = expect_chart(open(csv));

    assert_eq!(chart.labels(), vec!["b", "a"]);
}

#[test]
fn test_three_column_dataset_renamed_by_position() {
    let csv = "first,second,third\n\
               yes,2,14\n\
               no,3,30\n\
               no,1,20\n";

    let chart = expect_chart(open(csv));

    assert_eq!(chart.labels(), vec!["no", "yes"]);
    assert!((chart.bars[0].value - 25.0).abs() < 1e-9);
    assert!((chart.bars[1].value - 14.0).abs() < 1e-9);
}

#[test]
fn test_unknown_values_excluded_from_mean() {
    let csv = "class,tumorsizenum,age,irradiat\n\
               a,10,40,no\n\
               a,?,50,no\n\
               a,20,60,yes\n\
               b,1,30,no\n";

    let chart = expect_chart(open(csv));

    assert_eq!(chart.labels(), vec!["a", "b"]);
    assert!((chart.bars[0].value - 15.0).abs() < 1e-9);
    assert_eq!(chart.bars[0].count, 2);
}

#[test]
fn test_missing_columns_reported() {
    let csv = "age,menopause,inv-nodes,breast\n\
               40,pre,0-2,left\n";

    let message = expect_failure(open(csv));

    assert!(message.starts_with("Error loading or plotting file:\n"));
    assert!(message.contains("CSV must contain"), "got {}", message);
    assert!(message.contains("'Class'"));
    assert!(message.contains("'TumorSizeNum'"));
}

#[test]
fn test_no_numeric_values_reported() {
    let csv = "class,tumorsizenum,age,breast\n\
               a,unknown,40,left\n\
               b,n/a,50,right\n";

    let message = expect_failure(open(csv));

    assert!(message.contains("no numeric data to plot"), "got {}", message);
}

#[test]
fn test_cancelled_dialog_does_nothing() {
    let outcome = analysis::run(None, &ColumnConfig::default());
    assert!(matches!(outcome, OpenOutcome::Cancelled));
}
