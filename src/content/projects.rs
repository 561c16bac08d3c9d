use serde::Serialize;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Project {
    pub slug: &'static str,
    pub title: &'static str,
    pub tagline: &'static str,
    pub year: &'static str,
    pub role: &'static str,
    pub description: &'static str,
}

impl Project {
    pub fn path(&self) -> String {
        format!("/projects/{}", self.slug)
    }

    /// `2024 · Frontend`
    pub fn byline(&self) -> String {
        format!("{} · {}", self.year, self.role)
    }
}

const PROJECTS: &[Project] = &[
    Project {
        slug: "portfolio-site",
        title: "Personal Portfolio Site",
        tagline: "Clean one-page portfolio with video background.",
        year: "2025",
        role: "Design & Development",
        description: "A minimal portfolio built with Rust, Yew and a scroll-friendly video background.",
    },
    Project {
        slug: "crypto-dashboard",
        title: "Crypto Dashboard",
        tagline: "Lightweight dashboard for tracking tokens.",
        year: "2024",
        role: "Frontend",
        description: "Dashboard UI for monitoring token prices and basic on-chain metrics with a clean, card-based layout.",
    },
    Project {
        slug: "bpm-tool",
        title: "BPM Tool UI",
        tagline: "Interface for managing business processes.",
        year: "2024",
        role: "UX & Frontend",
        description: "Simple, task-focused interface for visualising and editing BPMN diagrams and process steps.",
    },
];

/// All projects in declaration order.
pub fn list() -> &'static [Project] {
    PROJECTS
}

pub fn get(slug: &str) -> Option<&'static Project> {
    PROJECTS.iter().find(|p| p.slug == slug)
}

/// schema.org description of a project, embedded as JSON-LD on its page.
#[derive(Serialize)]
struct CreativeWork<'a> {
    #[serde(rename = "@context")]
    context: &'static str,
    #[serde(rename = "@type")]
    kind: &'static str,
    name: &'a str,
    #[serde(rename = "alternativeHeadline")]
    tagline: &'a str,
    #[serde(rename = "dateCreated")]
    year: &'a str,
    description: &'a str,
    url: String,
}

pub fn structured_data(project: &Project) -> serde_json::Result<String> {
    serde_json::to_string(&CreativeWork {
        context: "https://schema.org",
        kind: "CreativeWork",
        name: project.title,
        tagline: project.tagline,
        year: project.year,
        description: project.description,
        url: project.path(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn slugs() -> impl Iterator<Item = &'static str> {
        list().iter().map(|p| p.slug)
    }

    #[test]
    fn every_listed_slug_resolves_to_itself() {
        for project in list() {
            let found = get(project.slug).expect("listed project resolves");
            assert_eq!(found.slug, project.slug);
            assert_eq!(found, project);
        }
    }

    #[test]
    fn unknown_slug_is_absent() {
        assert!(get("nonexistent").is_none());
        assert!(get("").is_none());
        assert!(get("Portfolio-Site").is_none());
    }

    #[test]
    fn list_keeps_declaration_order() {
        let order: Vec<_> = slugs().collect();
        assert_eq!(order, ["portfolio-site", "crypto-dashboard", "bpm-tool"]);
    }

    #[test]
    fn slugs_are_unique() {
        let unique: HashSet<_> = slugs().collect();
        assert_eq!(unique.len(), list().len());
    }

    #[test]
    fn byline_joins_year_and_role() {
        let project = get("crypto-dashboard").unwrap();
        assert_eq!(project.byline(), "2024 · Frontend");
        assert_eq!(project.path(), "/projects/crypto-dashboard");
    }

    #[test]
    fn structured_data_describes_the_project() {
        let project = get("bpm-tool").unwrap();
        let json: serde_json::Value =
            serde_json::from_str(&structured_data(project).unwrap()).unwrap();
        assert_eq!(json["@context"], "https://schema.org");
        assert_eq!(json["@type"], "CreativeWork");
        assert_eq!(json["name"], "BPM Tool UI");
        assert_eq!(json["dateCreated"], "2024");
        assert_eq!(json["url"], "/projects/bpm-tool");
    }
}
