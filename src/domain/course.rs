use serde::{Deserialize, Serialize};

use crate::errors::AppError;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Part {
    pub id: u32,
    pub name: String,
    pub exercises: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Course {
    #[serde(default)]
    pub id: u32,
    pub name: String,
    #[serde(default)]
    pub parts: Vec<Part>,
}

impl Course {
    /// Sum of `exercises` over every part; 0 for a course with no parts.
    pub fn total_exercises(&self) -> u32 {
        self.parts.iter().map(|p| p.exercises).sum()
    }
}

const SAMPLE_COURSES: &str = r#"[
    {
        "id": 1,
        "name": "Half Stack application development",
        "parts": [
            {"id": 1, "name": "Fundamentals of React", "exercises": 10},
            {"id": 2, "name": "Using props to pass data", "exercises": 7},
            {"id": 3, "name": "State of a component", "exercises": 14},
            {"id": 4, "name": "Redux", "exercises": 11}
        ]
    },
    {
        "id": 2,
        "name": "Node.js",
        "parts": [
            {"id": 1, "name": "Routing", "exercises": 3},
            {"id": 2, "name": "Middlewares", "exercises": 7}
        ]
    }
]"#;

/// Parses a JSON array of courses.
pub fn parse_courses(json: &str) -> Result<Vec<Course>, AppError> {
    Ok(serde_json::from_str(json)?)
}

/// Courses shown when no file is given.
pub fn sample_courses() -> Result<Vec<Course>, AppError> {
    parse_courses(SAMPLE_COURSES)
}
