use serde::Serialize;

pub const BRAND: &str = "techabdu";
pub const OWNER: &str = "Abdurrahman Ishaq Muhammad";
pub const SITE_DESCRIPTION: &str =
    "Crafting web experiences that work beautifully. AI-enhanced development, minimalist design, intentional execution.";

/// Source string for the hero typewriter.
pub const PHILOSOPHY: &str = "Crafting web experiences that work beautifully.";

pub const INTRO: &str = "Crafting web experiences that work beautifully. AI-enhanced development, minimalist design, intentional execution.";
pub const ABOUT: &str = "I build functional web applications with clean code and thoughtful design. Every project is an opportunity to create something that not only works flawlessly but feels right to use.";
pub const CTA_TITLE: &str = "Let's Work Together";
pub const CTA_BODY: &str =
    "Open to full-stack development opportunities. Let's build something great.";
pub const CONTACT_URL: &str = "https://wa.me/1234567890";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Project {
    pub id: u32,
    pub name: &'static str,
    pub description: &'static str,
    pub tech: &'static [&'static str],
    pub url: &'static str,
}

pub const PROJECTS: &[Project] = &[
    Project {
        id: 1,
        name: "Collage Library",
        description: "A digital catalog system for managing and discovering college resources. Built with a focus on clean UI and intuitive navigation, making academic materials easily accessible.",
        tech: &["PHP", "JavaScript", "CSS", "Bootstrap"],
        url: "#",
    },
    Project {
        id: 2,
        name: "iStore",
        description: "A modern e-commerce platform featuring inventory management, secure checkout, and a streamlined shopping experience. Built on Laravel's robust framework for scalability and performance.",
        tech: &["PHP (Laravel)", "JavaScript", "CSS"],
        url: "#",
    },
];

pub const TECH_STACK: &[&str] = &["PHP", "Bootstrap", "CSS", "JavaScript", "Python"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Icon {
    Github,
    Instagram,
    MessageCircle,
    Moon,
    Sun,
    ArrowUp,
    ExternalLink,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SocialLink {
    pub name: &'static str,
    pub icon: Icon,
    pub url: &'static str,
}

pub const SOCIAL_LINKS: &[SocialLink] = &[
    SocialLink {
        name: "GitHub",
        icon: Icon::Github,
        url: "https://github.com/techabdu",
    },
    SocialLink {
        name: "Instagram",
        icon: Icon::Instagram,
        url: "https://instagram.com/techabdu",
    },
    SocialLink {
        name: "TikTok",
        icon: Icon::MessageCircle,
        url: "https://tiktok.com/@techabdu",
    },
    SocialLink {
        name: "WhatsApp",
        icon: Icon::MessageCircle,
        url: CONTACT_URL,
    },
];

pub fn copyright() -> String {
    format!("© {} {BRAND}. All rights reserved.", env!("BUILD_YEAR"))
}

/// schema.org `Person` record describing the page owner.
#[derive(Debug, Serialize)]
struct PersonSchema<'a> {
    #[serde(rename = "@context")]
    context: &'a str,
    #[serde(rename = "@type")]
    kind: &'a str,
    name: &'a str,
    #[serde(rename = "alternateName")]
    alternate_name: &'a str,
    description: &'a str,
    #[serde(rename = "sameAs")]
    same_as: Vec<&'a str>,
    #[serde(rename = "knowsAbout")]
    knows_about: Vec<&'a str>,
}

/// JSON-LD for the document head, built from the static lists above.
pub fn person_json_ld() -> String {
    let schema = PersonSchema {
        context: "https://schema.org",
        kind: "Person",
        name: OWNER,
        alternate_name: BRAND,
        description: SITE_DESCRIPTION,
        same_as: SOCIAL_LINKS.iter().map(|l| l.url).collect(),
        knows_about: TECH_STACK.to_vec(),
    };
    // serializing a struct of strings and string lists cannot fail
    serde_json::to_string(&schema).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_projects_keep_declared_order() {
        let ids = PROJECTS.iter().map(|p| p.id).collect::<Vec<_>>();
        assert_eq!(ids, vec![1, 2]);
        assert_eq!(PROJECTS[0].name, "Collage Library");
        assert_eq!(
            PROJECTS[1].tech,
            &["PHP (Laravel)", "JavaScript", "CSS"][..]
        );
    }

    #[test]
    fn test_identities_are_unique() {
        let ids = PROJECTS.iter().map(|p| p.id).collect::<HashSet<_>>();
        assert_eq!(ids.len(), PROJECTS.len());
        let names = SOCIAL_LINKS.iter().map(|l| l.name).collect::<HashSet<_>>();
        assert_eq!(names.len(), SOCIAL_LINKS.len());
        let tech = TECH_STACK.iter().collect::<HashSet<_>>();
        assert_eq!(tech.len(), TECH_STACK.len());
    }

    #[test]
    fn test_social_links_are_absolute() {
        for link in SOCIAL_LINKS {
            assert!(link.url.starts_with("https://"), "{} is relative", link.name);
        }
    }

    #[test]
    fn test_typewriter_source_opens_intro() {
        assert!(INTRO.starts_with(PHILOSOPHY));
    }

    #[test]
    fn test_person_json_ld() {
        let json = person_json_ld();
        let value: serde_json::Value =
            serde_json::from_str(&json).expect("json-ld should parse back");
        assert_eq!(value["@type"], "Person");
        assert_eq!(value["name"], OWNER);
        assert_eq!(value["alternateName"], BRAND);
        let same_as = value["sameAs"].as_array().expect("sameAs is a list");
        assert_eq!(same_as.len(), SOCIAL_LINKS.len());
        assert_eq!(same_as[0], "https://github.com/techabdu");
        let knows = value["knowsAbout"].as_array().expect("knowsAbout is a list");
        assert_eq!(knows.len(), TECH_STACK.len());
    }

    #[test]
    fn test_copyright_names_brand() {
        let line = copyright();
        assert!(line.starts_with("© 20"));
        assert!(line.ends_with("techabdu. All rights reserved."));
    }
}
