use chrono::DateTime;
use serde::Serialize;

use crate::glyph::Glyph;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Identity {
    pub name: &'static str,
    pub role: &'static str,
    pub brand: &'static str,
    pub copyright_year: u16,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Skill {
    pub name: &'static str,
    pub icon: Glyph,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Project {
    pub title: &'static str,
    pub description: &'static str,
    pub image: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SocialLink {
    pub icon: Glyph,
    pub label: &'static str,
}

/// Top navigation entry and the id of the section it scrolls to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavItem {
    pub label: &'static str,
    pub anchor: &'static str,
}

impl NavItem {
    pub fn href(&self) -> String {
        format!("#{}", self.anchor)
    }
}

pub const IDENTITY: Identity = Identity {
    name: "Nakamizu Yuki",
    role: "Full Stack Developer",
    brand: "NY",
    copyright_year: 2023,
};

pub const NAV_ITEMS: [NavItem; 4] = [
    NavItem {
        label: "About",
        anchor: "about",
    },
    NavItem {
        label: "Skills",
        anchor: "skills",
    },
    NavItem {
        label: "Projects",
        anchor: "projects",
    },
    NavItem {
        label: "Contact",
        anchor: "contact",
    },
];

pub const SKILLS: [Skill; 9] = [
    Skill {
        name: "HTML5",
        icon: Glyph::Html5,
    },
    Skill {
        name: "CSS3",
        icon: Glyph::Css3,
    },
    Skill {
        name: "JavaScript",
        icon: Glyph::JavaScript,
    },
    Skill {
        name: "TypeScript",
        icon: Glyph::TypeScript,
    },
    Skill {
        name: "React",
        icon: Glyph::React,
    },
    Skill {
        name: "Vue.js",
        icon: Glyph::VueJs,
    },
    Skill {
        name: "PHP",
        icon: Glyph::Php,
    },
    Skill {
        name: "Laravel",
        icon: Glyph::Laravel,
    },
    Skill {
        name: "MySQL",
        icon: Glyph::MySql,
    },
];

const PLACEHOLDER_IMAGE: &str = "/placeholder.svg?height=300&width=400";

pub const PROJECTS: [Project; 3] = [
    Project {
        title: "Project 1",
        description: "A brief description of project 1",
        image: PLACEHOLDER_IMAGE,
    },
    Project {
        title: "Project 2",
        description: "A brief description of project 2",
        image: PLACEHOLDER_IMAGE,
    },
    Project {
        title: "Project 3",
        description: "A brief description of project 3",
        image: PLACEHOLDER_IMAGE,
    },
];

pub const SOCIAL_LINKS: [SocialLink; 3] = [
    SocialLink {
        icon: Glyph::GitHub,
        label: "GitHub",
    },
    SocialLink {
        icon: Glyph::LinkedIn,
        label: "LinkedIn",
    },
    SocialLink {
        icon: Glyph::Email,
        label: "Email",
    },
];

pub fn copyright_line() -> String {
    format!(
        "© {} {}. All rights reserved.",
        IDENTITY.copyright_year, IDENTITY.name
    )
}

/// Date the site was built, formatted for the footer.
pub fn deployed_on() -> Option<String> {
    deployed_on_from(env!("BUILD_TIME"))
}

fn deployed_on_from(build_time: &str) -> Option<String> {
    DateTime::parse_from_rfc3339(build_time)
        .ok()
        .map(|dt| dt.format("%B %-d, %Y").to_string())
}

/// schema.org description of the page owner, embedded as JSON-LD.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct PersonLd {
    #[serde(rename = "@context")]
    context: &'static str,
    #[serde(rename = "@type")]
    kind: &'static str,
    name: &'static str,
    job_title: &'static str,
    knows_about: Vec<&'static str>,
    #[serde(rename = "subjectOf")]
    projects: Vec<CreativeWorkLd>,
}

#[derive(Debug, Serialize)]
struct CreativeWorkLd {
    #[serde(rename = "@type")]
    kind: &'static str,
    name: &'static str,
    description: &'static str,
}

pub fn person_json_ld() -> String {
    let person = PersonLd {
        context: "https://schema.org",
        kind: "Person",
        name: IDENTITY.name,
        job_title: IDENTITY.role,
        knows_about: SKILLS.iter().map(|s| s.name).collect(),
        projects: PROJECTS
            .iter()
            .map(|p| CreativeWorkLd {
                kind: "CreativeWork",
                name: p.title,
                description: p.description,
            })
            .collect(),
    };
    // only &str and Vec fields, serialization cannot fail
    serde_json::to_string(&person).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_skills_in_display_order() {
        let names: Vec<&str> = SKILLS.iter().map(|s| s.name).collect();
        assert_eq!(
            names,
            vec![
                "HTML5",
                "CSS3",
                "JavaScript",
                "TypeScript",
                "React",
                "Vue.js",
                "PHP",
                "Laravel",
                "MySQL"
            ]
        );
        assert_eq!(SKILLS[5].icon, Glyph::VueJs);
    }

    #[test]
    fn test_projects_share_placeholder_image() {
        let titles: Vec<&str> = PROJECTS.iter().map(|p| p.title).collect();
        assert_eq!(titles, vec!["Project 1", "Project 2", "Project 3"]);
        for (i, project) in PROJECTS.iter().enumerate() {
            assert_eq!(
                project.description,
                format!("A brief description of project {}", i + 1)
            );
            assert_eq!(project.image, "/placeholder.svg?height=300&width=400");
        }
    }

    #[test]
    fn test_nav_and_social_links() {
        let labels: Vec<&str> = NAV_ITEMS.iter().map(|n| n.label).collect();
        assert_eq!(labels, vec!["About", "Skills", "Projects", "Contact"]);
        assert_eq!(NAV_ITEMS[2].href(), "#projects");

        let social: Vec<&str> = SOCIAL_LINKS.iter().map(|l| l.label).collect();
        assert_eq!(social, vec!["GitHub", "LinkedIn", "Email"]);
    }

    #[test]
    fn test_copyright_line() {
        assert_eq!(
            copyright_line(),
            "© 2023 Nakamizu Yuki. All rights reserved."
        );
    }

    #[test]
    fn test_deployed_on() {
        assert_eq!(
            deployed_on_from("2024-03-07T18:30:00+00:00").as_deref(),
            Some("March 7, 2024")
        );
        assert_eq!(deployed_on_from("not a date"), None);
        // build.rs always stamps a valid timestamp
        assert!(deployed_on().is_some());
    }

    #[test]
    fn test_person_json_ld() {
        let ld: serde_json::Value =
            serde_json::from_str(&person_json_ld()).expect("JSON-LD should parse");
        assert_eq!(ld["@context"], "https://schema.org");
        assert_eq!(ld["@type"], "Person");
        assert_eq!(ld["name"], "Nakamizu Yuki");
        assert_eq!(ld["jobTitle"], "Full Stack Developer");
        assert_eq!(ld["knowsAbout"].as_array().map(|a| a.len()), Some(9));
        assert_eq!(ld["subjectOf"][1]["name"], "Project 2");
    }
}
