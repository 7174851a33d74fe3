//! Career Genome: a five-axis summary of the onboarding answers.
//!
//! Each axis is a fixed weighted sum of skill ratings and psychometric ratings,
//! divided by `AXIS_DIVISOR` and capped at `AXIS_MAX`. There is no floor: the
//! inputs are non-negative ratings, so a negative axis only comes from
//! malformed answers and is passed through as-is.

use serde::{Deserialize, Serialize};

use crate::profile::models::Profile;

pub const AXIS_DIVISOR: f64 = 3.0;
pub const AXIS_MAX: f64 = 5.0;

// Positions within the rating groups.
const INVESTIGATIVE: usize = 1;
const ARTISTIC: usize = 2;
const SOCIAL: usize = 3;
const ENTERPRISING: usize = 4;
const CONSCIENTIOUSNESS: usize = 1;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum GenomeAxis {
    Technical,
    Analytical,
    Creative,
    Managerial,
    Social,
}

/// Axis scores in `[0, 5]` for well-formed answers.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "PascalCase")]
pub struct CareerGenome {
    pub technical: f64,
    pub analytical: f64,
    pub creative: f64,
    pub managerial: f64,
    pub social: f64,
}

impl CareerGenome {
    /// Axes in display order.
    pub fn axes(&self) -> [(GenomeAxis, f64); 5] {
        [
            (GenomeAxis::Technical, self.technical),
            (GenomeAxis::Analytical, self.analytical),
            (GenomeAxis::Creative, self.creative),
            (GenomeAxis::Managerial, self.managerial),
            (GenomeAxis::Social, self.social),
        ]
    }
}

fn scale(raw: f64) -> f64 {
    (raw / AXIS_DIVISOR).min(AXIS_MAX)
}

/// Derives the genome from a profile. Pure; unanswered questions read as their defaults.
pub fn compute_genome(profile: &Profile) -> CareerGenome {
    let python = profile.skill_rating("python");
    let data_analysis = profile.skill_rating("dataAnalysis");
    let problem_solving = profile.skill_rating("problemSolving");

    let technical =
        python * 1.5 + data_analysis * 1.2 + profile.trait_rating("interests", INVESTIGATIVE) * 1.3;
    let analytical =
        problem_solving * 1.5 + profile.trait_rating("personality", CONSCIENTIOUSNESS) * 1.2;
    let creative = profile.trait_rating("interests", ARTISTIC) * 1.5;
    let managerial = profile.trait_rating("interests", ENTERPRISING) * 1.4;
    let social = profile.trait_rating("interests", SOCIAL) * 1.3;

    CareerGenome {
        technical: scale(technical),
        analytical: scale(analytical),
        creative: scale(creative),
        managerial: scale(managerial),
        social: scale(social),
    }
}
