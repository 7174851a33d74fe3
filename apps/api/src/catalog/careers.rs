use std::collections::BTreeMap;

use serde::Serialize;

/// A mock career match shown on the dashboard.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct CareerMatch {
    pub title: &'static str,
    pub score: u32, // percent
}

#[derive(Debug, Clone, Copy, Serialize, PartialEq)]
pub struct RequiredSkill {
    pub skill: &'static str,
    pub required: u8,
}

const CAREER_MATCHES: &[CareerMatch] = &[
    CareerMatch {
        title: "Data Scientist",
        score: 92,
    },
    CareerMatch {
        title: "Product Manager",
        score: 85,
    },
    CareerMatch {
        title: "UX Designer",
        score: 78,
    },
];

const DATA_SCIENTIST_SKILLS: &[RequiredSkill] = &[
    RequiredSkill { skill: "Python", required: 4 },
    RequiredSkill { skill: "Machine Learning", required: 4 },
    RequiredSkill { skill: "Statistics", required: 3 },
    RequiredSkill { skill: "Data Visualization", required: 3 },
    RequiredSkill { skill: "Cloud Infrastructure", required: 3 },
];

const PRODUCT_MANAGER_SKILLS: &[RequiredSkill] = &[
    RequiredSkill { skill: "Communication", required: 5 },
    RequiredSkill { skill: "Project Management", required: 4 },
    RequiredSkill { skill: "Market Research", required: 3 },
    RequiredSkill { skill: "Agile Methodologies", required: 4 },
];

const UX_DESIGNER_SKILLS: &[RequiredSkill] = &[
    RequiredSkill { skill: "Creativity", required: 5 },
    RequiredSkill { skill: "User Research", required: 4 },
    RequiredSkill { skill: "Prototyping", required: 4 },
    RequiredSkill { skill: "Visual Design", required: 4 },
];

/// Seeded self-ratings used by the skill-gap view until the user edits them.
const DEFAULT_USER_SKILLS: &[(&str, u8)] = &[
    ("Python", 3),
    ("Communication", 3),
    ("Data Analysis", 3),
    ("Problem Solving", 3),
    ("Machine Learning", 1),
    ("Cloud Infrastructure", 1),
    ("Statistics", 2),
    ("Creativity", 3),
    ("User Research", 2),
    ("Prototyping", 2),
    ("Visual Design", 2),
    ("Project Management", 2),
    ("Market Research", 2),
    ("Agile Methodologies", 2),
];

/// Top career matches, highest score first.
pub fn career_matches() -> &'static [CareerMatch] {
    CAREER_MATCHES
}

/// Required skill levels for a career. Exact, case-sensitive title match.
pub fn role_skills(career: &str) -> &'static [RequiredSkill] {
    match career {
        "Data Scientist" => DATA_SCIENTIST_SKILLS,
        "Product Manager" => PRODUCT_MANAGER_SKILLS,
        "UX Designer" => UX_DESIGNER_SKILLS,
        _ => &[],
    }
}

pub fn default_user_skills() -> BTreeMap<String, u8> {
    DEFAULT_USER_SKILLS
        .iter()
        .map(|(name, rating)| (name.to_string(), *rating))
        .collect()
}
