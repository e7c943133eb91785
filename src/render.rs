//! Plain-text rendering of a dashboard, for the terminal.

use crate::dashboard::Dashboard;
use crate::models::{CaptureProjection, CompetitorProfile, MarketFigures, RoadmapQuarter, RoadmapStatus};
use crate::roadmap::{self, ExpandedQuarters};

const COMPLETED: char = '●';
const IN_PROGRESS: char = '◐';
const PLANNED: char = '○';

fn status_symbol(status: RoadmapStatus) -> char {
    match status {
        RoadmapStatus::Completed => COMPLETED,
        RoadmapStatus::InProgress => IN_PROGRESS,
        RoadmapStatus::Planned => PLANNED,
    }
}

/// Render the whole dashboard as sections of ASCII trees.
///
/// Example output (abridged):
/// ```text
/// Market Sizing
/// ├── TAM $2400M Total Addressable
/// ├── SAM $1200M Serviceable Addressable
/// └── SOM $360M Serviceable Obtainable
///
/// Roadmap: 10% complete (1 completed • 1 in progress • 8 planned)
/// ├── Q1 2025 [Active] 55%
/// │   ├── ● Real-time Diagnostics (Engineering)
/// │   └── ○ Integration API (Engineering)
/// └── Q4 2025 [Planned] 0%
/// ```
pub fn render_report(dashboard: &Dashboard, expanded: &ExpandedQuarters) -> String {
    let snapshot = dashboard.snapshot();
    let mut output = String::new();

    // Overview
    let overview = &snapshot.overview;
    output.push_str(&format!(
        "TAM ${}M • Adoption {}% • {} features prioritized • {} differentiators\n\n",
        overview.tam, overview.projected_adoption, overview.features_prioritized, overview.differentiators
    ));

    // Market
    output.push_str("Market Sizing\n");
    let segments: Vec<String> = snapshot
        .market_segments
        .iter()
        .map(|s| format!("{} ${}M {}", s.name, s.value, s.label))
        .collect();
    render_lines(&mut output, &segments, "");
    output.push_str(&format!(
        "Year 1 Target: ${}M • Year 3 Target: ${}M\n\n",
        snapshot.capture.year1, snapshot.capture.year3
    ));

    // Prioritization
    output.push_str("Feature Prioritization (RICE)\n");
    let features: Vec<String> = snapshot
        .features
        .iter()
        .map(|r| {
            format!(
                "#{} {} [{}] {}w",
                r.rank,
                r.feature.name(),
                r.feature.score(),
                r.feature.effort()
            )
        })
        .collect();
    render_lines(&mut output, &features, "");
    match &snapshot.insights.top_priority {
        Some(top) => output.push_str(&format!(
            "{} features analyzed • Top priority: {}\n\n",
            snapshot.insights.features_analyzed, top
        )),
        None => output.push_str("No features analyzed\n\n"),
    }

    // Competition
    if !snapshot.advantages.is_empty() {
        output.push_str("Competitive Advantages\n");
        let labels: Vec<String> = snapshot.advantages.iter().map(|d| d.label.clone()).collect();
        render_lines(&mut output, &labels, "");
        output.push('\n');
    }

    let shares = market_share_lines(&snapshot.competitors);
    if !shares.is_empty() {
        output.push_str("Market Share\n");
        render_lines(&mut output, &shares, "");
        output.push('\n');
    }

    // Roadmap
    let summary = &snapshot.roadmap;
    output.push_str(&format!(
        "Roadmap: {}% complete ({} completed • {} in progress • {} planned)\n",
        summary.completion_percentage, summary.completed, summary.in_progress, summary.planned
    ));
    for (i, quarter) in dashboard.roadmap.iter().enumerate() {
        let is_last = i == dashboard.roadmap.len() - 1;
        render_quarter(&mut output, quarter, expanded.is_expanded(&quarter.name), is_last);
    }

    output
}

/// One line per competitor with a known share; ours is marked "(Us)".
fn market_share_lines(competitors: &[CompetitorProfile]) -> Vec<String> {
    competitors
        .iter()
        .filter_map(|c| {
            let share = c.market_share?;
            let marker = if c.is_us { " (Us)" } else { "" };
            Some(format!("{}{} {}% [{}]", c.name, marker, share, c.pricing))
        })
        .collect()
}

/// Market figures and capture targets, one per line.
pub fn render_market(figures: &MarketFigures, capture: &CaptureProjection) -> String {
    format!(
        "TAM: ${}M\nSAM: ${}M\nSOM: ${}M\nYear 1 Target: ${}M\nYear 3 Target: ${}M\n",
        figures.tam, figures.sam, figures.som, capture.year1, capture.year3
    )
}

fn render_quarter(output: &mut String, quarter: &RoadmapQuarter, is_expanded: bool, is_last: bool) {
    let branch = if is_last { "└── " } else { "├── " };
    output.push_str(branch);
    // `{:.0}` would round halves to even
    let progress = roadmap::quarter_progress(quarter).round() as i64;
    output.push_str(&format!(
        "{} [{}] {}%\n",
        quarter.name,
        quarter.status.badge(),
        progress
    ));

    if !is_expanded {
        return;
    }

    let child_prefix = if is_last { "    " } else { "│   " };
    let lines: Vec<String> = quarter
        .features
        .iter()
        .map(|f| {
            let mut line = format!("{} {} ({})", status_symbol(f.status), f.name, f.team);
            if f.status == RoadmapStatus::InProgress {
                line.push_str(&format!(" {}%", f.progress.unwrap_or(0)));
            }
            line
        })
        .collect();
    render_lines(output, &lines, child_prefix);
}

/// Render leaf lines with branch characters under `prefix`.
fn render_lines(output: &mut String, lines: &[String], prefix: &str) {
    for (i, line) in lines.iter().enumerate() {
        let branch = if i == lines.len() - 1 { "└── " } else { "├── " };
        output.push_str(prefix);
        output.push_str(branch);
        output.push_str(line);
        output.push('\n');
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::RoadmapFeature;

    #[test]
    fn renders_market_branches() {
        let output = render_report(&Dashboard::seed(), &ExpandedQuarters::default());
        assert!(output.contains("├── TAM $2400M Total Addressable\n"));
        assert!(output.contains("└── SOM $360M Serviceable Obtainable\n"));
        assert!(output.contains("Year 1 Target: $108M • Year 3 Target: $360M"));
    }

    #[test]
    fn ranks_features_by_score() {
        let output = render_report(&Dashboard::seed(), &ExpandedQuarters::default());
        assert!(output.contains("├── #1 Real-time Diagnostics [2700] 5w\n"));
        assert!(output.contains("└── #5 Integration API [1000] 4w\n"));
        assert!(output.contains("5 features analyzed • Top priority: Real-time Diagnostics"));
    }

    #[test]
    fn collapsed_quarters_hide_their_features() {
        let output = render_report(&Dashboard::seed(), &ExpandedQuarters::default());
        assert!(output.contains("├── Q1 2025 [Active] 55%\n"));
        assert!(!output.contains("Patient Dashboard (Product)"));
    }

    #[test]
    fn expanded_quarters_list_features_with_symbols() {
        let seed = Dashboard::seed();
        let output = render_report(&seed, &seed.expanded_quarters());
        assert!(output.contains("│   ├── ● Real-time Diagnostics (Engineering)\n"));
        assert!(output.contains("│   ├── ◐ Patient Dashboard (Product) 65%\n"));
        assert!(output.contains("│   └── ○ Integration API (Engineering)\n"));
        assert!(output.contains("└── Q4 2025 [Planned] 0%\n"));
        assert!(!output.contains("Enterprise SSO"));
    }

    #[test]
    fn quarter_progress_rounds_halves_up() {
        let quarter = RoadmapQuarter {
            name: "Q1".to_string(),
            status: RoadmapStatus::Planned,
            features: [5, 0]
                .into_iter()
                .enumerate()
                .map(|(i, progress)| RoadmapFeature {
                    id: i.to_string(),
                    name: format!("Feature {i}"),
                    status: RoadmapStatus::Planned,
                    team: "Product".to_string(),
                    progress: Some(progress),
                })
                .collect(),
        };
        let dashboard = Dashboard {
            roadmap: vec![quarter],
            ..Dashboard::default()
        };

        let output = render_report(&dashboard, &ExpandedQuarters::default());
        assert!(output.contains("└── Q1 [Planned] 3%\n"));
    }

    #[test]
    fn lists_market_share_with_our_product_marked() {
        let output = render_report(&Dashboard::seed(), &ExpandedQuarters::default());
        assert!(output.contains("Market Share\n├── Our Product (Us) 15% [$$]\n"));
        assert!(output.contains("├── Competitor A 35% [$$$]\n"));
        assert!(output.contains("└── Competitor C 20% [$$$$]\n"));
    }

    #[test]
    fn competitors_without_share_are_skipped() {
        let mut dashboard = Dashboard::seed();
        dashboard.competitors[1].market_share = None;

        let output = render_report(&dashboard, &ExpandedQuarters::default());
        assert!(!output.contains("Competitor A 35%"));
        assert!(output.contains("├── Competitor B 25% [$$]\n"));
    }

    #[test]
    fn market_lines_for_the_calculator() {
        let figures = MarketFigures { tam: 2400, sam: 1200, som: 360 };
        let capture = CaptureProjection { year1: 108, year3: 360 };
        assert_eq!(
            render_market(&figures, &capture),
            "TAM: $2400M\nSAM: $1200M\nSOM: $360M\nYear 1 Target: $108M\nYear 3 Target: $360M\n"
        );
    }

    #[test]
    fn empty_dashboard_renders_without_panicking() {
        let output = render_report(&Dashboard::default(), &ExpandedQuarters::default());
        assert!(output.contains("No features analyzed"));
        assert!(output.contains("Roadmap: 0% complete"));
        assert!(!output.contains("Market Share"));
    }
}
