// Career guidance lookups: learning pathway, portfolio projects, skill gaps.
// All content is canned and keyed by exact career title.

pub mod pathway;
pub mod skill_gap;

pub use pathway::{selectors_for, LearningPathway, PathwayMonth, PathwayTask, PortfolioProject};
pub use skill_gap::{skill_gap_for, SkillGap, SkillGapReport};
