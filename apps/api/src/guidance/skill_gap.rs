use std::collections::BTreeMap;

use serde::Serialize;

use crate::catalog::role_skills;

/// One required skill compared against the user's self-rating.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct SkillGap {
    pub skill: String,
    pub required: u8,
    pub current: u8,
    pub gap: u8, // 0 when the user meets or exceeds the requirement
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct SkillGapReport {
    pub career: String,
    pub skills: Vec<SkillGap>,
    pub total_gap: u32,
}

/// Compares a career's required skill levels with the user's ratings.
/// Skills the user has never rated count as 0. Unknown careers produce no rows.
pub fn skill_gap_for(career: &str, user_skills: &BTreeMap<String, u8>) -> SkillGapReport {
    let skills: Vec<SkillGap> = role_skills(career)
        .iter()
        .map(|req| {
            let current = user_skills.get(req.skill).copied().unwrap_or(0);
            SkillGap {
                skill: req.skill.to_string(),
                required: req.required,
                current,
                gap: req.required.saturating_sub(current),
            }
        })
        .collect();

    let total_gap = skills.iter().map(|s| s.gap as u32).sum();

    SkillGapReport {
        career: career.to_string(),
        skills,
        total_gap,
    }
}
