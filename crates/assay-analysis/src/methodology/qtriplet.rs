//! Q-Triplet: geometric mean of coverage, breadth and depth over field
//! coverage.

use statrs::statistics::Statistics;

use super::types::{BreakdownItem, Grade, Methodology, MethodologyInput, MethodologyScore};
use crate::catalog::{Catalog, UseCaseProfile};

/// A field counts toward depth at this coverage.
const DEPTH_THRESHOLD: f64 = 0.8;

pub fn qtriplet(
    catalog: &Catalog,
    input: &MethodologyInput,
    profile: Option<&UseCaseProfile>,
) -> MethodologyScore {
    let values: Vec<f64> = match profile {
        Some(p) => catalog
            .fields_for_use_case(p)
            .map(|f| input.coverage(&f.id))
            .collect(),
        None => input
            .field_coverage
            .values()
            .map(|v| v.clamp(0.0, 1.0))
            .collect(),
    };

    let (coverage, breadth, depth) = if values.is_empty() {
        (0.0, 0.0, 0.0)
    } else {
        let n = values.len() as f64;
        (
            values.iter().mean(),
            values.iter().filter(|v| **v > 0.0).count() as f64 / n,
            values.iter().filter(|v| **v >= DEPTH_THRESHOLD).count() as f64 / n,
        )
    };

    let overall_score = (coverage * breadth * depth).cbrt() * 100.0;

    let measures = [
        ("coverage", "Coverage", coverage),
        ("breadth", "Breadth", breadth),
        ("depth", "Depth", depth),
    ];
    let breakdown: Vec<BreakdownItem> = measures
        .iter()
        .map(|&(key, label, value)| BreakdownItem {
            key: key.to_string(),
            label: label.to_string(),
            value,
            weight: 1.0 / 3.0,
            contribution: value * 100.0 / 3.0,
            passed: None,
        })
        .collect();

    let interpretation = match measures
        .iter()
        .min_by(|a, b| a.2.total_cmp(&b.2))
    {
        Some((_, label, value)) if !values.is_empty() => format!(
            "{label} is the weakest measure at {:.0}% over {} fields.",
            value * 100.0,
            values.len()
        ),
        _ => "No field coverage to score.".to_string(),
    };

    MethodologyScore {
        methodology: Methodology::QTriplet,
        use_case_id: None,
        overall_score,
        grade: Grade::from_score(overall_score),
        breakdown,
        interpretation,
        stage: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_geometric_mean_of_three_measures() {
        let input = MethodologyInput::default().with_field_coverage(&[
            ("a", 1.0),
            ("b", 0.8),
            ("c", 0.6),
            ("d", 0.0),
        ]);
        let r = qtriplet(&Catalog::standard(), &input, None);
        // coverage 0.6, breadth 0.75, depth 0.5
        let expected = (0.6_f64 * 0.75 * 0.5).cbrt() * 100.0;
        assert!((r.overall_score - expected).abs() < 1e-9);
        assert!(r.interpretation.starts_with("Depth"));
    }

    #[test]
    fn test_zero_depth_zeroes_score() {
        let input = MethodologyInput::default().with_field_coverage(&[("a", 0.5), ("b", 0.5)]);
        let r = qtriplet(&Catalog::standard(), &input, None);
        assert_eq!(r.overall_score, 0.0);
        assert_eq!(r.grade, Grade::F);
    }

    #[test]
    fn test_profile_uses_relevant_catalog_fields() {
        let catalog = Catalog::standard();
        let cost = catalog.use_case("cost_optimization").unwrap();
        let coverage: Vec<(String, f64)> = catalog
            .fields_for_use_case(cost)
            .map(|f| (f.id.clone(), 1.0))
            .collect();
        let pairs: Vec<(&str, f64)> = coverage.iter().map(|(k, v)| (k.as_str(), *v)).collect();
        let input = MethodologyInput::default().with_field_coverage(&pairs);
        let r = qtriplet(&catalog, &input, Some(cost));
        assert!((r.overall_score - 100.0).abs() < 1e-9);
        assert_eq!(r.grade, Grade::A);
    }
}
