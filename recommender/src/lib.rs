use anyhow::{bail, Context, Result};
use engine::format::display_lines;
use engine::{recommend, Category, ChartRow, EngineConfig, MatchContext, MatchError, PosTagger, Recommendation, VectorSpace};
use serde::Serialize;
use std::fmt::Write as _;
use std::fs;
use std::path::Path;
use walkdir::WalkDir;

#[derive(Debug, Serialize)]
pub struct MatchView {
    pub rank: usize,
    pub id: String,
    pub distance: f32,
    /// Capitalized insights followed by the search link.
    pub lines: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct Report {
    pub matches: Vec<MatchView>,
    pub charts: Vec<ChartRow>,
}

impl Report {
    pub fn from_recommendation(rec: &Recommendation<'_>) -> Self {
        let matches = rec
            .ranked
            .iter()
            .zip(&rec.records)
            .enumerate()
            .map(|(i, (m, record))| MatchView { rank: i + 1, id: m.entry.id().to_string(), distance: m.distance, lines: display_lines(record) })
            .collect();
        let charts = Category::ALL.iter().flat_map(|c| rec.terms.chart_rows(*c)).collect();
        Self { matches, charts }
    }

    pub fn render_text(&self) -> String {
        let mut out = String::from("## Your Best Matches\n");
        for m in &self.matches {
            let _ = writeln!(out, "\n[{}] distance {:.3}", m.rank, m.distance);
            for line in &m.lines {
                let _ = writeln!(out, "    {line}");
            }
        }
        out.push_str("\n## Language Recommendations for Applications\n");
        for category in Category::ALL {
            let name = category.display_name();
            let _ = writeln!(out, "\nRelevant {name}");
            for row in self.charts.iter().filter(|r| r.category == name) {
                let _ = writeln!(out, "    {:<20} {}", row.token, row.frequency);
            }
        }
        out
    }
}

/// Read profile text from a file, or from every `.md` / `.txt` file under a directory
/// in path order.
pub fn read_profile(path: &Path) -> Result<Vec<String>> {
    let mut files = Vec::new();
    if path.is_dir() {
        for entry in WalkDir::new(path).sort_by_file_name().into_iter().filter_map(|e| e.ok()) {
            let p = entry.path();
            if p.is_file() {
                if let Some(ext) = p.extension().and_then(|s| s.to_str()) {
                    if matches!(ext.to_ascii_lowercase().as_str(), "md" | "markdown" | "txt") {
                        files.push(p.to_path_buf());
                    }
                }
            }
        }
    } else if path.is_file() {
        files.push(path.to_path_buf());
    } else {
        bail!("profile path {} does not exist", path.display());
    }
    let mut texts = Vec::with_capacity(files.len());
    for file in files {
        let text = fs::read_to_string(&file).with_context(|| format!("read {}", file.display()))?;
        texts.push(text);
    }
    tracing::debug!(files = texts.len(), "collected profile text");
    Ok(texts)
}

/// Run one request against an already-loaded context.
pub fn run<V, T>(ctx: &MatchContext<V>, config: &EngineConfig, tagger: &T, profile: &[String]) -> Result<Report, MatchError>
where
    V: VectorSpace,
    T: PosTagger + ?Sized,
{
    let rec = recommend(ctx, config, tagger, profile)?;
    Ok(Report::from_recommendation(&rec))
}
