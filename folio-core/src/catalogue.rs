//! The content store: curated publication and project records.
//!
//! Records keep insertion order, which is the order they are displayed in.
//! A catalogue is validated once when it is built and never mutated after.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{FolioError, Result};
use crate::model::{Project, Publication};
use crate::page::Page;

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Catalogue {
    #[serde(default)]
    publications: Vec<Publication>,
    #[serde(default)]
    projects: Vec<Project>,
}

impl Catalogue {
    pub fn new(publications: Vec<Publication>, projects: Vec<Project>) -> Result<Self> {
        let catalogue = Self {
            publications,
            projects,
        };
        catalogue.validate()?;
        Ok(catalogue)
    }

    /// The site's own curated content.
    pub fn builtin() -> Self {
        Self {
            publications: builtin_publications(),
            projects: builtin_projects(),
        }
    }

    /// Parse a content file of `[[publications]]` and `[[projects]]` tables.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let catalogue: Self =
            toml::from_str(content).map_err(|e| FolioError::toml("content file", e))?;
        catalogue.validate()?;
        Ok(catalogue)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| FolioError::io(path, e))?;
        let catalogue: Self = toml::from_str(&content)
            .map_err(|e| FolioError::toml(path.display().to_string(), e))?;
        catalogue.validate()?;

        tracing::debug!(
            path = %path.display(),
            publications = catalogue.publications.len(),
            projects = catalogue.projects.len(),
            "loaded content file"
        );
        Ok(catalogue)
    }

    pub fn publications(&self) -> &[Publication] {
        &self.publications
    }

    pub fn projects(&self) -> &[Project] {
        &self.projects
    }

    /// Number of entries shown on `page`.
    pub fn len_of(&self, page: Page) -> usize {
        match page {
            Page::Publications => self.publications.len(),
            Page::Projects => self.projects.len(),
        }
    }

    fn validate(&self) -> Result<()> {
        for (idx, publication) in self.publications.iter().enumerate() {
            publication.validate(&format!("publications[{idx}]"))?;
        }
        for (idx, project) in self.projects.iter().enumerate() {
            project.validate(&format!("projects[{idx}]"))?;
        }
        Ok(())
    }
}

fn builtin_publications() -> Vec<Publication> {
    vec![
        Publication::new(
            "Boosting Diary Study Outcomes with a Fine-Tuned Large Language Model",
            "Oh, S., Zhao, J., Russo, C., & Bolmer Jr., M.",
            "CHI EA '25: Extended Abstracts of the 2025 CHI Conference on Human Factors in Computing Systems",
            2025,
        )
        .with_link("https://doi.org/10.1145/3706599.3719287"),
        Publication::new(
            "Optimizing Diary Studies Learning Outcomes with Fine-Tuned Large Language Models on the DiaryQuest Platform",
            "Oh, S., Zhao, J., Russo, C., Bolmer Jr., M., Jeong, J., Fan, J., Cao, Y., Wang, W., & McCrickard, S.",
            "IEEE Frontiers in Education Conference (Under Review)",
            2025,
        ),
        Publication::new(
            "Explore Public's Perspectives on Generative AI in Computer Science (CS) Education: A Social Media Data Analysis",
            "Oh, S., Cao, Y., Katz, A., & Zhao, J.",
            "IEEE Frontiers in Education Conference",
            2024,
        )
        .with_link("https://doi.org/10.1109/FIE61694.2024.10893102"),
    ]
}

fn builtin_projects() -> Vec<Project> {
    vec![
        Project::new(
            "Fintellection",
            "I created the Fintellection, an AI-powered search engine that fetches and displays \
             real-time financial data from the internet. Utilizing advanced techniques such as \
             Retrieval-Augmented Generation (RAG), embeddings, and similarity searching, it \
             delivers accurate and insightful financial information promptly.",
        )
        .with_image("/static/images/Fintellection.png")
        .with_href("https://www.fintellection.com/"),
        Project::new(
            "Google Datacenter Workload Characterization",
            "I worked on the Google Datacenter Workload Characterization project, which involved \
             analyzing and visualizing data from Google's production systems using Matlab. The \
             project focused on understanding task and job patterns, resource usage, and \
             identifying correlations between CPU and memory consumption within the dataset.",
        )
        .with_image("/static/images/DatacenterCharacterization.png")
        .with_href("https://drive.google.com/file/d/1xJLmw61dM8wPxNKOyRv0A5IdkXQ62hr_/view"),
        Project::new(
            "Solar Powered Autonomous Drone",
            "I created a project to develop solar-powered autonomous drones, addressing \
             sustainability concerns associated with current battery-operated drones. By \
             integrating solar panels, these drones reduced reliance on non-renewable energy \
             sources, promoting a more environmentally friendly and efficient solution for drone \
             technology.",
        )
        .with_image("/static/images/Drone.png")
        .with_href("https://drive.google.com/file/d/1rs3BygTYegXe2XD3JpCKoBTyJsH6-idZ/view"),
        Project::new(
            "Smart Workout Tracking Solution for Outdoor Fitness",
            "I developed a user-centered smart workout tracking system for outdoor fitness. It \
             leverages mobile and smartwatch technologies to provide real-time data and \
             personalized exercise plans, enhancing the outdoor workout experience.",
        )
        .with_image("/static/images/SmartWorkoutTracking.png")
        .with_href("https://drive.google.com/file/d/1iuaM5lV05atPckfj78h5cdewAQM3ny7X/view"),
    ]
}
