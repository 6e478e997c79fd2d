//! Clause categories, templates, and the fixed value pools that fill them.

use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClauseType {
    DataProtection,
    Liability,
    Termination,
    Payment,
    Confidentiality,
    Indemnity,
    Warranties,
    Delivery,
}

impl ClauseType {
    pub const ALL: [ClauseType; 8] = [
        ClauseType::DataProtection,
        ClauseType::Liability,
        ClauseType::Termination,
        ClauseType::Payment,
        ClauseType::Confidentiality,
        ClauseType::Indemnity,
        ClauseType::Warranties,
        ClauseType::Delivery,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ClauseType::DataProtection => "data_protection",
            ClauseType::Liability => "liability",
            ClauseType::Termination => "termination",
            ClauseType::Payment => "payment",
            ClauseType::Confidentiality => "confidentiality",
            ClauseType::Indemnity => "indemnity",
            ClauseType::Warranties => "warranties",
            ClauseType::Delivery => "delivery",
        }
    }

    fn templates(self) -> &'static [&'static str] {
        match self {
            ClauseType::DataProtection => DATA_PROTECTION_TEMPLATES,
            ClauseType::Liability => LIABILITY_TEMPLATES,
            ClauseType::Termination => TERMINATION_TEMPLATES,
            ClauseType::Payment => PAYMENT_TEMPLATES,
            ClauseType::Confidentiality => CONFIDENTIALITY_TEMPLATES,
            ClauseType::Indemnity => INDEMNITY_TEMPLATES,
            ClauseType::Warranties => WARRANTIES_TEMPLATES,
            ClauseType::Delivery => DELIVERY_TEMPLATES,
        }
    }
}

const DATA_PROTECTION_TEMPLATES: &[&str] = &[
    "The Provider will retain customer personal data {retention} for analytics and backup purposes.",
    "Customer data collected by the Provider may be shared with affiliates for {purpose}.",
    "The Provider shall ensure appropriate technical and organizational measures to protect personal data, including {measures}.",
];

const LIABILITY_TEMPLATES: &[&str] = &[
    "The Provider's total liability for any claim shall not exceed the fees paid by the Client in the preceding {months} months.",
    "In no event will either party be liable for indirect, incidental, or consequential damages, including {examples}.",
];

const TERMINATION_TEMPLATES: &[&str] = &[
    "Either party may terminate this Agreement on {notice} days' written notice to the other party.",
    "This Agreement may be terminated immediately upon material breach which is not cured within {cure_days} days.",
];

const PAYMENT_TEMPLATES: &[&str] = &[
    "The Client shall pay the Provider {amount} within {days} days of invoice receipt.",
    "Late payments shall accrue interest at {rate}% per annum until paid in full.",
];

const CONFIDENTIALITY_TEMPLATES: &[&str] = &[
    "Each party shall keep confidential all Confidential Information disclosed by the other party and shall not disclose it to third parties except as required by law.",
    "Confidential Information does not include information that is {exceptions}.",
];

const INDEMNITY_TEMPLATES: &[&str] = &[
    "The Provider shall indemnify and hold harmless the Client from claims arising out of the Provider's gross negligence or willful misconduct.",
];

const WARRANTIES_TEMPLATES: &[&str] = &[
    "The Provider warrants that the Services will be performed in a professional and workmanlike manner in accordance with industry standards.",
];

const DELIVERY_TEMPLATES: &[&str] = &[
    "Provider will deliver the Services in accordance with the schedule set out in Appendix A. Delays due to {causes} are excused.",
];

const RETENTION_OPTIONS: &[&str] = &[
    "indefinitely",
    "2 years",
    "5 years",
    "until purpose is fulfilled",
];
const PURPOSES: &[&str] = &["analytics", "marketing", "service improvement"];
const MEASURES: &[&str] = &["encryption at rest", "access controls", "regular audits"];
const EXAMPLES: &[&str] = &["loss of profit", "loss of data", "business interruption"];
const MONTHS: &[&str] = &["3", "6", "12"];
const NOTICE_OPTIONS: &[&str] = &["30", "60", "90"];
const CURE_DAYS: &[&str] = &["7", "14", "30"];
const AMOUNTS: &[&str] = &["$5,000", "$10,000", "$50,000"];
const DAYS: &[&str] = &["14", "30", "45"];
const INTEREST_RATES: &[&str] = &["5", "8", "12"];
const EXCEPTIONS: &[&str] = &[
    "publicly known",
    "already in possession of the receiving party",
    "independently developed",
];
const CAUSES: &[&str] = &[
    "force majeure events",
    "third party delays",
    "regulatory approvals",
];

/// Every placeholder with its value pool. Each occurrence is filled by an
/// independent draw from the pool.
const PLACEHOLDER_POOLS: &[(&str, &[&str])] = &[
    ("{retention}", RETENTION_OPTIONS),
    ("{purpose}", PURPOSES),
    ("{measures}", MEASURES),
    ("{examples}", EXAMPLES),
    ("{months}", MONTHS),
    ("{notice}", NOTICE_OPTIONS),
    ("{cure_days}", CURE_DAYS),
    ("{amount}", AMOUNTS),
    ("{days}", DAYS),
    ("{rate}", INTEREST_RATES),
    ("{exceptions}", EXCEPTIONS),
    ("{causes}", CAUSES),
];

const PROVIDER_NAMES: &[&str] = &[
    "Northwind Analytics Ltd",
    "Vertex Data Services GmbH",
    "Halcyon Cloud Systems, Inc.",
];
const CLIENT_NAMES: &[&str] = &[
    "Meridian Retail Group",
    "Atlas Logistics plc",
    "Crestview Financial Partners LLP",
];

pub fn random_clause_type(rng: &mut impl Rng) -> ClauseType {
    *ClauseType::ALL.choose(rng).expect("non-empty category list")
}

/// Short contract heading naming the parties. Prepended to data-protection
/// clauses so those samples read like an excerpt rather than a bare sentence.
pub fn contract_header(rng: &mut impl Rng) -> String {
    let provider = PROVIDER_NAMES.choose(rng).expect("non-empty pool");
    let client = CLIENT_NAMES.choose(rng).expect("non-empty pool");
    format!(
        "DATA PROCESSING AGREEMENT\n\nThis Agreement is made between {provider} (the \"Provider\") and {client} (the \"Client\").\n\n"
    )
}

/// Picks a template for the category and fills each placeholder from its pool.
pub fn render_clause(clause_type: ClauseType, rng: &mut impl Rng) -> String {
    let template = clause_type
        .templates()
        .choose(rng)
        .expect("non-empty template list");

    let mut clause = (*template).to_string();
    for (placeholder, pool) in PLACEHOLDER_POOLS {
        while clause.contains(placeholder) {
            let value = pool.choose(rng).expect("non-empty value pool");
            clause = clause.replacen(placeholder, value, 1);
        }
    }

    if clause_type == ClauseType::DataProtection {
        format!("{}{clause}", contract_header(rng))
    } else {
        clause
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_render_fills_every_placeholder() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..100 {
            let clause_type = random_clause_type(&mut rng);
            let clause = render_clause(clause_type, &mut rng);
            assert!(!clause.contains('{'), "unfilled placeholder in: {clause}");
            assert!(!clause.is_empty());
        }
    }

    #[test]
    fn test_data_protection_clause_carries_header() {
        let mut rng = StdRng::seed_from_u64(7);
        let clause = render_clause(ClauseType::DataProtection, &mut rng);
        assert!(clause.starts_with("DATA PROCESSING AGREEMENT"));
        assert!(clause.contains("(the \"Provider\")"));
    }

    #[test]
    fn test_other_categories_have_no_header() {
        let mut rng = StdRng::seed_from_u64(7);
        let clause = render_clause(ClauseType::Payment, &mut rng);
        assert!(!clause.contains("DATA PROCESSING AGREEMENT"));
    }

    #[test]
    fn test_category_names_match_metadata_convention() {
        assert_eq!(ClauseType::DataProtection.as_str(), "data_protection");
        assert_eq!(ClauseType::Warranties.as_str(), "warranties");
    }
}
