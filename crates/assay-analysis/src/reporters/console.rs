//! Console reporter: human-readable output with color codes.

use std::fmt::Write;

use super::{percent, Reporter};
use crate::pipeline::AssessmentResult;
use crate::quality::QualityBand;
use crate::rollup::RollupNode;

const BAR_WIDTH: usize = 20;

pub struct ConsoleReporter {
    pub use_color: bool,
}

impl ConsoleReporter {
    pub fn new(use_color: bool) -> Self {
        Self { use_color }
    }

    fn band_color(&self, band: QualityBand) -> &'static str {
        if !self.use_color {
            return "";
        }
        match band {
            QualityBand::Excellent | QualityBand::Good => "\x1b[32m", // green
            QualityBand::Fair => "\x1b[33m",                          // yellow
            QualityBand::Poor | QualityBand::Critical => "\x1b[31m",  // red
        }
    }

    fn color_end(&self) -> &'static str {
        if self.use_color {
            "\x1b[0m"
        } else {
            ""
        }
    }

    fn write_tree(out: &mut String, nodes: &[RollupNode], depth: usize) {
        for node in nodes {
            let _ = writeln!(
                out,
                "{}{} {} ({} assets, completeness {}, quality {:.1})",
                "  ".repeat(depth + 1),
                if node.children.is_empty() { "•" } else { "▸" },
                node.dimension_value,
                node.asset_count,
                percent(node.completeness_score),
                node.quality.overall
            );
            Self::write_tree(out, &node.children, depth + 1);
        }
    }
}

impl Default for ConsoleReporter {
    fn default() -> Self {
        Self::new(true)
    }
}

fn bar(ratio: f64) -> String {
    let filled = ((ratio.clamp(0.0, 1.0) * BAR_WIDTH as f64).round() as usize).min(BAR_WIDTH);
    format!("{}{}", "█".repeat(filled), "░".repeat(BAR_WIDTH - filled))
}

impl Reporter for ConsoleReporter {
    fn name(&self) -> &'static str {
        "console"
    }

    fn generate(&self, result: &AssessmentResult) -> Result<String, String> {
        let mut out = String::new();
        let meta = &result.metadata;
        let summary = &result.summary;

        out.push_str("╔══════════════════════════════════════════╗\n");
        out.push_str("║      Assay Metadata Health Report        ║\n");
        out.push_str("╚══════════════════════════════════════════╝\n\n");

        let _ = writeln!(
            out,
            "Tenant {} · {} · {} assets ({} succeeded, {} failed) in {}ms",
            meta.tenant_id,
            meta.methodology.label(),
            meta.assets_processed,
            meta.assets_succeeded,
            meta.assets_failed,
            meta.duration_ms
        );
        let _ = writeln!(
            out,
            "Score {}{:.1} ({}, {}){} · adoption phase {}\n",
            self.band_color(summary.quality_band),
            summary.overall_score,
            summary.grade,
            summary.quality_band,
            self.color_end(),
            summary.adoption_phase
        );

        out.push_str("Signal coverage\n");
        for (signal, coverage) in &summary.signal_coverage {
            let _ = writeln!(out, "  {:<12} {} {:>6}", signal.as_str(), bar(*coverage), percent(*coverage));
        }

        let quality = &summary.asset_quality;
        let _ = writeln!(
            out,
            "\nAsset quality {}{:.1} ({}){}",
            self.band_color(summary.asset_quality_band),
            quality.overall,
            summary.asset_quality_band,
            self.color_end()
        );
        for (name, score) in [
            ("completeness", quality.completeness),
            ("accuracy", quality.accuracy),
            ("timeliness", quality.timeliness),
            ("consistency", quality.consistency),
            ("usability", quality.usability),
        ] {
            let _ = writeln!(out, "  {:<12} {} {:>6.1}", name, bar(score / 100.0), score);
        }
        let lineage = &summary.lineage;
        let _ = writeln!(
            out,
            "Lineage: {:.1}% upstream · {:.1}% downstream · {:.1}% full · {:.1}% orphaned",
            lineage.pct_has_upstream,
            lineage.pct_has_downstream,
            lineage.pct_full_lineage,
            lineage.pct_orphaned
        );

        if !summary.use_case_readiness.is_empty() {
            out.push_str("\nUse-case readiness\n");
            for (id, readiness) in &summary.use_case_readiness {
                let _ = writeln!(out, "  {:<24} {:>6}", id, percent(*readiness));
            }
        }

        if !summary.top_gaps.is_empty() {
            out.push_str("\nTop gaps\n");
            for gap in &summary.top_gaps {
                let _ = writeln!(out, "  ✗ {:<12} {}", gap.signal.as_str(), gap.count);
            }
        }

        for (dimension, nodes) in &result.rollups {
            let _ = writeln!(out, "\nBy {dimension}");
            Self::write_tree(&mut out, nodes, 0);
        }
        if !result.hierarchy.is_empty() {
            out.push_str("\nHierarchy\n");
            Self::write_tree(&mut out, &result.hierarchy, 0);
        }

        if let Some(recommendations) = &result.recommendations {
            out.push_str("\nRemediation plan\n");
            for phase in &recommendations.plan.phases {
                let _ = writeln!(out, "  {}", phase.phase.label());
                for action in phase.actions() {
                    let _ = writeln!(
                        out,
                        "    [{:?}] {} ({} gaps, {} assets)",
                        action.effort, action.title, action.gap_count, action.asset_count
                    );
                }
            }
            if !recommendations.plan.deferred.is_empty() {
                let _ = writeln!(out, "  Deferred: {} actions", recommendations.plan.deferred.len());
            }
        }

        for failure in &meta.failures {
            let _ = writeln!(out, "⚠ {} [{}] {}", failure.guid, failure.code, failure.message);
        }

        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bar_width() {
        assert_eq!(bar(0.0).chars().count(), BAR_WIDTH);
        assert_eq!(bar(1.0), "█".repeat(BAR_WIDTH));
        assert_eq!(bar(2.0), "█".repeat(BAR_WIDTH));
        assert_eq!(bar(0.5).chars().filter(|c| *c == '█').count(), BAR_WIDTH / 2);
    }
}
