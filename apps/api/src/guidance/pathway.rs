//! Learning pathway and portfolio suggestions per career.
//!
//! Lookup is an exact title match. Unknown careers get a single generic
//! "Getting Started" month and no portfolio projects.

use serde::Serialize;

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct PathwayTask {
    pub week: String,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct PathwayMonth {
    pub month: u32,
    pub title: String,
    pub tasks: Vec<PathwayTask>,
}

pub type LearningPathway = Vec<PathwayMonth>;

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct PortfolioProject {
    pub title: String,
    pub objective: String,
    pub skills: Vec<String>,
    pub guide: String,
    pub github_link: String,
}

fn task(week: &str, description: &str, link: Option<&str>) -> PathwayTask {
    PathwayTask {
        week: week.to_string(),
        description: description.to_string(),
        link: link.map(str::to_string),
    }
}

fn data_scientist_pathway() -> LearningPathway {
    vec![
        PathwayMonth {
            month: 1,
            title: "Foundations of Data".to_string(),
            tasks: vec![
                task(
                    "1-2",
                    "Complete \"SQL Basics\" course on Coursera",
                    Some("https://www.coursera.org/learn/sql-basics"),
                ),
                task(
                    "3",
                    "Complete \"Statistics Fundamentals\" on Khan Academy",
                    Some("https://www.khanacademy.org/math/statistics-probability"),
                ),
                task(
                    "4",
                    "Milestone Project: Analyze a dataset and write a report",
                    None,
                ),
            ],
        },
        PathwayMonth {
            month: 2,
            title: "Machine Learning & Visualization".to_string(),
            tasks: vec![
                task(
                    "1-2",
                    "Complete \"Intro to Machine Learning\" on Coursera",
                    Some("https://www.coursera.org/learn/machine-learning"),
                ),
                task(
                    "3-4",
                    "Learn \"Data Visualization\" with Tableau tutorials",
                    Some("https://www.tableau.com/learn/training"),
                ),
            ],
        },
    ]
}

fn generic_pathway() -> LearningPathway {
    vec![PathwayMonth {
        month: 1,
        title: "Getting Started".to_string(),
        tasks: vec![task(
            "1-2",
            "Explore foundational courses relevant to your career.",
            None,
        )],
    }]
}

fn data_scientist_projects() -> Vec<PortfolioProject> {
    vec![
        PortfolioProject {
            title: "COVID Data Tracker Web App".to_string(),
            objective: "Build a web app to track COVID-19 data trends.".to_string(),
            skills: vec!["Python".into(), "Data Visualization".into(), "APIs".into()],
            guide: "Use Python Flask for backend, Chart.js for visualization, and public COVID APIs for data.".to_string(),
            github_link: String::new(),
        },
        PortfolioProject {
            title: "Market Analysis Report".to_string(),
            objective: "Conduct a market analysis for a fictional product.".to_string(),
            skills: vec!["Data Analysis".into(), "Report Writing".into(), "Excel".into()],
            guide: "Collect data from surveys, analyze trends, and prepare a presentation.".to_string(),
            github_link: String::new(),
        },
    ]
}

/// Returns the learning pathway and portfolio projects for a career title.
pub fn selectors_for(career: &str) -> (LearningPathway, Vec<PortfolioProject>) {
    match career {
        "Data Scientist" => (data_scientist_pathway(), data_scientist_projects()),
        _ => (generic_pathway(), Vec::new()),
    }
}
