//! Canned risk assessment attached to each generated clause.

use std::fmt;

use rand::distributions::{Distribution, WeightedIndex};
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::templates::ClauseType;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            RiskLevel::Low => "Low",
            RiskLevel::Medium => "Medium",
            RiskLevel::High => "High",
        };
        f.write_str(s)
    }
}

const RISK_LEVELS: [RiskLevel; 3] = [RiskLevel::Low, RiskLevel::Medium, RiskLevel::High];
const RISK_WEIGHTS: [f64; 3] = [0.4, 0.4, 0.2];

const RETENTION_RECOMMENDATION: &str = "Specify a retention period and purpose limitation.";

/// Derives the `Risk: <level> - Recommendations: <text>` completion.
///
/// Risk is drawn Low/Medium/High with weights 0.4/0.4/0.2, then one category
/// rule applies: a data-protection clause mentioning indefinite retention is
/// always High with the retention recommendation, regardless of the draw.
pub fn make_completion(clause: &str, clause_type: ClauseType, rng: &mut impl Rng) -> String {
    let weighted = WeightedIndex::new(RISK_WEIGHTS).expect("valid risk weights");
    let mut risk = RISK_LEVELS[weighted.sample(rng)];

    let recommendation = match clause_type {
        ClauseType::DataProtection => {
            if clause.contains("indefinite") {
                risk = RiskLevel::High;
                RETENTION_RECOMMENDATION
            } else {
                "Ensure encryption and access controls are in place."
            }
        }
        ClauseType::Liability => {
            "Consider excluding gross negligence and adding insurance requirements."
        }
        ClauseType::Termination => {
            "Clarify post-termination obligations such as data return and refunds."
        }
        ClauseType::Payment => "Define invoice dispute resolution and late payment remedies.",
        ClauseType::Confidentiality => {
            "Narrow the definition of Confidential Information and specify return/destruction procedures."
        }
        ClauseType::Indemnity => {
            "Limit indemnity to direct damages and require notice and control of defense."
        }
        ClauseType::Warranties => {
            "Consider adding disclaimers for third-party components and a specific warranty period."
        }
        ClauseType::Delivery => {
            "Add specific milestones, acceptance criteria, and remedies for delays."
        }
    };

    format!("Risk: {risk} - Recommendations: {recommendation}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_indefinite_retention_always_high_risk() {
        let clause = "The Provider will retain customer personal data indefinitely for analytics and backup purposes.";
        for seed in 0..50 {
            let mut rng = StdRng::seed_from_u64(seed);
            let completion = make_completion(clause, ClauseType::DataProtection, &mut rng);
            assert!(completion.starts_with("Risk: High"), "seed {seed}: {completion}");
            assert!(completion.contains(RETENTION_RECOMMENDATION));
        }
    }

    #[test]
    fn test_bounded_retention_keeps_drawn_risk() {
        let clause = "The Provider will retain customer personal data 2 years for analytics and backup purposes.";
        let mut rng = StdRng::seed_from_u64(1);
        let completion = make_completion(clause, ClauseType::DataProtection, &mut rng);
        assert!(completion.contains("Ensure encryption and access controls are in place."));
    }

    #[test]
    fn test_completion_shape() {
        let re = regex::Regex::new(r"^Risk: (Low|Medium|High) - Recommendations: .+$").unwrap();
        let mut rng = StdRng::seed_from_u64(42);
        for clause_type in ClauseType::ALL {
            let completion = make_completion("a clause", clause_type, &mut rng);
            assert!(re.is_match(&completion), "bad shape: {completion}");
        }
    }

    #[test]
    fn test_indefinite_override_only_applies_to_data_protection() {
        // Another category mentioning the word keeps its drawn risk text.
        let mut rng = StdRng::seed_from_u64(3);
        let completion = make_completion(
            "liability continues indefinitely",
            ClauseType::Liability,
            &mut rng,
        );
        assert!(!completion.contains(RETENTION_RECOMMENDATION));
    }
}
