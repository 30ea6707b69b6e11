#![allow(dead_code)]

use vitae::CvDocument;
use vitae_model::{Experience, Project};

/// A 1x1 PNG.
pub const PNG_DATA_URL: &str = "data:image/png;base64,iVBORw0KGgoAAAANSUhEUgAAAAEAAAABCAYAAAAfFcSJAAAADUlEQVR42mP8z8BQDwAEhQGAhKmMIQAAAABJRU5ErkJggg==";

pub fn sample_cv() -> CvDocument {
    CvDocument::sample().expect("bundled sample parses")
}

/// `count` experiences, each with `achievements` short bullet points.
/// Roles are `Role NN` and each entry's last bullet is `Closing note NN`.
pub fn cv_with_experiences(count: usize, achievements: usize) -> CvDocument {
    let mut cv = sample_cv();
    cv.experiences = (1..=count)
        .map(|i| {
            let mut bullets: Vec<String> = (1..achievements)
                .map(|j| format!("Delivered milestone {} of engagement {}.", j, i))
                .collect();
            bullets.push(format!("Closing note {:02}", i));
            Experience {
                id: format!("exp-{}", i),
                role: format!("Role {:02}", i),
                company: format!("Company {:02}", i),
                start_date: "2015-01".into(),
                end_date: "2016-12".into(),
                current: false,
                achievements: bullets,
            }
        })
        .collect();
    cv
}

/// One experience whose single achievement is far longer than a page.
/// Each sentence starts with a `StepNNN` marker.
pub fn cv_with_long_achievement(sentences: usize) -> CvDocument {
    let mut cv = sample_cv();
    let text = (1..=sentences)
        .map(|i| format!("Step{:03} describes the work in some detail.", i))
        .collect::<Vec<_>>()
        .join(" ");
    cv.experiences.truncate(1);
    cv.experiences[0].achievements = vec![text];
    cv
}

pub fn project(name: &str, url: Option<&str>) -> Project {
    Project {
        id: format!("proj-{}", name.to_lowercase()),
        name: name.into(),
        description: format!("{} description.", name),
        technologies: vec!["Rust".into(), "SQL".into()],
        url: url.map(String::from),
        github: None,
    }
}
