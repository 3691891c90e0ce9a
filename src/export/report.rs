//! Static HTML dashboard: stacked bar chart per language plus a record table.
//!
//! Rendering sits behind [`ReportRenderer`] so that aggregation never depends
//! on a charting backend.

use std::collections::BTreeMap;

use anyhow::{Context as _, Result};
use serde::Serialize;
use tera::{Context, Tera};

use crate::core::{CountBucket, StatRecord, data::percentage};

const REPORT_TEMPLATE: &str = include_str!("../../templates/report.html");
const TEMPLATE_NAME: &str = "report.html";

/// Fixed segment colors of the stacked bars.
pub const TRANSLATED_COLOR: &str = "green";
pub const FUZZY_COLOR: &str = "orange";
pub const UNTRANSLATED_COLOR: &str = "red";

/// Link to one of the exported data files.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Download {
    pub label: String,
    pub href: String,
}

impl Download {
    pub fn new(label: impl Into<String>, href: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            href: href.into(),
        }
    }
}

/// Everything a report page shows.
#[derive(Debug, Clone)]
pub struct ReportPage<'a> {
    pub title: &'a str,
    pub generated_at: Option<&'a str>,
    pub records: &'a [StatRecord],
    pub downloads: Vec<Download>,
}

pub trait ReportRenderer {
    fn render(&self, page: &ReportPage<'_>) -> Result<Vec<u8>>;
}

/// One stacked segment series in Plotly's trace format.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartTrace {
    pub x: Vec<String>,
    pub y: Vec<usize>,
    pub name: &'static str,
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub marker: Marker,
    pub hovertemplate: String,
    pub customdata: Vec<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Marker {
    pub color: &'static str,
}

#[derive(Debug, Serialize)]
struct TableRow<'a> {
    source: &'a str,
    file: &'a str,
    language: &'a str,
    translated: usize,
    fuzzy: usize,
    untranslated: usize,
    total: usize,
    pct_translated: String,
    pct_fuzzy: String,
    pct_untranslated: String,
}

impl<'a> From<&'a StatRecord> for TableRow<'a> {
    fn from(record: &'a StatRecord) -> Self {
        Self {
            source: record.source.as_deref().unwrap_or(""),
            file: &record.file,
            language: &record.language,
            translated: record.translated,
            fuzzy: record.fuzzy,
            untranslated: record.untranslated,
            total: record.total,
            pct_translated: format!("{:.1}", record.pct_translated),
            pct_fuzzy: format!("{:.1}", record.pct_fuzzy),
            pct_untranslated: format!("{:.1}", record.pct_untranslated),
        }
    }
}

/// Sums records per language, sorted by language code.
pub fn language_totals(records: &[StatRecord]) -> BTreeMap<&str, CountBucket> {
    let mut totals: BTreeMap<&str, CountBucket> = BTreeMap::new();
    for record in records {
        totals
            .entry(record.language.as_str())
            .or_default()
            .merge(&record.counts());
    }
    totals
}

/// Builds the three stacked series, one bar per language.
///
/// Every series lists every language, so a language with no entries of one
/// status gets a zero-height segment rather than a gap.
pub fn chart_traces(records: &[StatRecord]) -> Vec<ChartTrace> {
    let totals = language_totals(records);

    vec![
        series(&totals, "Translated", TRANSLATED_COLOR, |b| b.translated),
        series(&totals, "Fuzzy", FUZZY_COLOR, |b| b.fuzzy),
        series(&totals, "Untranslated", UNTRANSLATED_COLOR, |b| b.untranslated),
    ]
}

fn series(
    totals: &BTreeMap<&str, CountBucket>,
    name: &'static str,
    color: &'static str,
    count: fn(&CountBucket) -> usize,
) -> ChartTrace {
    ChartTrace {
        x: totals.keys().map(|l| l.to_string()).collect(),
        y: totals.values().map(count).collect(),
        name,
        kind: "bar",
        marker: Marker { color },
        hovertemplate: format!("%{{y}} {} (%{{customdata}}%)", name.to_lowercase()),
        customdata: totals
            .values()
            .map(|bucket| percentage(count(bucket), bucket.total()))
            .collect(),
    }
}

/// Serializes the chart traces for embedding in a `<script>` block.
fn chart_data_json(records: &[StatRecord]) -> Result<String> {
    let json = serde_json::to_string(&chart_traces(records))?;
    // A label containing `</script>` must not close the script element.
    Ok(json.replace("</", "<\\/"))
}

/// Renders the dashboard with the bundled Tera template.
pub struct HtmlReport {
    tera: Tera,
}

impl HtmlReport {
    pub fn new() -> Result<Self> {
        let mut tera = Tera::default();
        tera.add_raw_template(TEMPLATE_NAME, REPORT_TEMPLATE)
            .context("Failed to load report template")?;
        Ok(Self { tera })
    }
}

impl ReportRenderer for HtmlReport {
    fn render(&self, page: &ReportPage<'_>) -> Result<Vec<u8>> {
        let rows: Vec<TableRow> = page.records.iter().map(TableRow::from).collect();
        let show_source = page.records.iter().any(|r| r.source.is_some());

        let mut context = Context::new();
        context.insert("title", page.title);
        context.insert("generated_at", &page.generated_at);
        context.insert("downloads", &page.downloads);
        context.insert("rows", &rows);
        context.insert("show_source", &show_source);
        context.insert("chart_data", &chart_data_json(page.records)?);

        let html = self
            .tera
            .render(TEMPLATE_NAME, &context)
            .context("Failed to render report")?;
        Ok(html.into_bytes())
    }
}
