//! Markdown reporter for docs and pull-request comments.

use std::fmt::Write;

use super::{percent, Reporter};
use crate::pipeline::AssessmentResult;

pub struct MarkdownReporter;

impl Reporter for MarkdownReporter {
    fn name(&self) -> &'static str {
        "markdown"
    }

    fn generate(&self, result: &AssessmentResult) -> Result<String, String> {
        let mut out = String::new();
        let meta = &result.metadata;
        let summary = &result.summary;

        let _ = writeln!(out, "# Metadata health: {}\n", meta.tenant_id);
        let _ = writeln!(
            out,
            "**Score:** {:.1} ({}) · **Band:** {} · **Adoption phase:** {} · **Methodology:** {}\n",
            summary.overall_score,
            summary.grade,
            summary.quality_band,
            summary.adoption_phase,
            meta.methodology.label()
        );
        let _ = writeln!(
            out,
            "{} assets processed, {} succeeded, {} failed.\n",
            meta.assets_processed, meta.assets_succeeded, meta.assets_failed
        );
        if !summary.methodology.interpretation.is_empty() {
            let _ = writeln!(out, "> {}\n", summary.methodology.interpretation);
        }

        out.push_str("## Signals\n\n| Signal | Coverage | Mean score |\n|---|---:|---:|\n");
        for (signal, coverage) in &summary.signal_coverage {
            let score = summary.signal_scores.get(signal).copied().unwrap_or(0.0);
            let _ = writeln!(out, "| {} | {} | {:.2} |", signal.label(), percent(*coverage), score);
        }

        let quality = &summary.asset_quality;
        let _ = writeln!(
            out,
            "\n## Asset quality\n\n**Overall:** {:.1} ({})\n\n| Completeness | Accuracy | Timeliness | Consistency | Usability |\n|---:|---:|---:|---:|---:|\n| {:.1} | {:.1} | {:.1} | {:.1} | {:.1} |",
            quality.overall,
            summary.asset_quality_band,
            quality.completeness,
            quality.accuracy,
            quality.timeliness,
            quality.consistency,
            quality.usability
        );
        let lineage = &summary.lineage;
        let _ = writeln!(
            out,
            "\n## Lineage\n\n| Upstream | Downstream | Any | Full | Orphaned |\n|---:|---:|---:|---:|---:|\n| {:.1}% | {:.1}% | {:.1}% | {:.1}% | {:.1}% |",
            lineage.pct_has_upstream,
            lineage.pct_has_downstream,
            lineage.pct_with_lineage,
            lineage.pct_full_lineage,
            lineage.pct_orphaned
        );

        if !summary.use_case_readiness.is_empty() {
            out.push_str("\n## Use cases\n\n| Use case | Readiness |\n|---|---:|\n");
            for (id, readiness) in &summary.use_case_readiness {
                let _ = writeln!(out, "| `{id}` | {} |", percent(*readiness));
            }
        }

        if !summary.top_gaps.is_empty() {
            out.push_str("\n## Top gaps\n\n");
            for gap in &summary.top_gaps {
                let _ = writeln!(out, "- {}: {}", gap.signal.label(), gap.count);
            }
        }

        for (dimension, nodes) in &result.rollups {
            let _ = writeln!(out, "\n## By {dimension}\n\n| Value | Assets | Completeness | Quality | Orphaned |\n|---|---:|---:|---:|---:|");
            for node in nodes {
                let _ = writeln!(
                    out,
                    "| {} | {} | {} | {:.1} | {:.1}% |",
                    node.dimension_value,
                    node.asset_count,
                    percent(node.completeness_score),
                    node.quality.overall,
                    node.lineage.pct_orphaned
                );
            }
        }

        if let Some(recommendations) = &result.recommendations {
            out.push_str("\n## Remediation plan\n");
            for phase in &recommendations.plan.phases {
                let _ = writeln!(out, "\n### {}\n", phase.phase.label());
                let mut empty = true;
                for action in phase.actions() {
                    empty = false;
                    let _ = writeln!(
                        out,
                        "- **{}** ({}): {} gaps on {} assets, effort {:?}",
                        action.title,
                        action.workstream.label(),
                        action.gap_count,
                        action.asset_count,
                        action.effort
                    );
                }
                if empty {
                    out.push_str("_Nothing to do._\n");
                }
            }
            if !recommendations.plan.deferred.is_empty() {
                out.push_str("\n### Deferred\n\n");
                for action in &recommendations.plan.deferred {
                    let _ = writeln!(out, "- {} ({} assets)", action.title, action.asset_count);
                }
            }
        }

        Ok(out)
    }
}
