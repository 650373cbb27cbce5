//! Hardcoded portfolio records and the list helpers pages run over them.

use std::collections::HashSet;

use serde::Serialize;

use crate::types::{
    Certificate, GithubLinks, Project, RecordId, RecordKey, Skill, Technologies, Timestamps,
};

pub const ALL_FILTER: &str = "All";
pub const OTHER_CATEGORY: &str = "Other";

/// Filter labels shown above the portfolio grid.
pub const PORTFOLIO_FILTERS: [&str; 6] = [ALL_FILTER, "MERN", "Responsive", "AI", "Other", "Frontend"];

#[allow(clippy::too_many_arguments)]
fn project(
    id: u64,
    title: &str,
    description: &str,
    link: &str,
    image: &str,
    tech: &[&str],
    category: &str,
    github: Option<(&str, Option<&str>)>,
) -> Project {
    Project {
        key: RecordKey::new(id),
        title: title.to_string(),
        description: Some(description.to_string()),
        thumbnail: Some(image.to_string()),
        category: Some(category.to_string()),
        technologies: Some(Technologies::List(
            tech.iter().map(|t| t.to_string()).collect(),
        )),
        project_url: Some(link.to_string()),
        github: github.map(|(frontend, backend)| GithubLinks {
            frontend: Some(frontend.to_string()),
            backend: backend.map(str::to_string),
        }),
        completion_date: None,
        timestamps: Timestamps::default(),
    }
}

pub fn projects() -> Vec<Project> {
    vec![
        project(
            1,
            "Jobby App",
            "A dynamic job listing platform with JWT authentication, protected routes, API integration, and responsive UI.",
            "https://jobbyapp-liart.vercel.app/",
            "https://res.cloudinary.com/dodfv5sbg/image/upload/v1762233008/Screenshot_2025-11-03_102043_cttqul.png",
            &["React", "Node.js", "JWT", "CSS"],
            "mern",
            Some((
                "https://github.com/Vaibhava2424/Jobby-App",
                Some("https://github.com/Vaibhava2424/Jobby-App-Apis"),
            )),
        ),
        project(
            2,
            "Law Guide",
            "A no-code hackathon project providing structured legal information on government schemes, IPC sections, and public legal resources.",
            "https://p-188620.lovable.app/",
            "https://res.cloudinary.com/dodfv5sbg/image/upload/v1762233302/Screenshot_2025-09-18_103807_y98rfm.png",
            &["Figma", "Relume", "Builder.io", "Lovable"],
            "AI",
            None,
        ),
        project(
            3,
            "SubTrack",
            "A subscription-tracking design that simplifies OTT management with reminders, suggestions, and coupons.",
            "https://www.figma.com/design/dzo7eVJZGCpfFZ3D04AD8q/Vaibhava_project",
            "https://res.cloudinary.com/dodfv5sbg/image/upload/v1762233258/Screenshot_2025-11-04_104400_h9szgl.png",
            &["Figma", "UI/UX"],
            "other",
            None,
        ),
        project(
            89,
            "Nextjs Project",
            "A simple e-commerce front-end built with Next.js featuring multi-page navigation, product listings, and a responsive UI.",
            "https://next-js-project-eight-mu.vercel.app",
            "https://res.cloudinary.com/dodfv5sbg/image/upload/v1763011639/Screenshot_2025-11-13_105705_jjxlvm.png",
            &["Nextjs", "React", "Tailwind CSS"],
            "frontend",
            Some(("https://github.com/Vaibhava2424/NextJs-Project", None)),
        ),
        project(
            4,
            "AI Chatbot",
            "A functional chatbot that answers queries in real time, built with BotPress tools and NLP features.",
            "https://cdn.botpress.cloud/webchat/v2.2/shareable.html?configUrl=https://files.bpcontent.cloud/2024/12/28/13/20241228132934-Q9SXG0M8.json",
            "https://res.cloudinary.com/dodfv5sbg/image/upload/v1762233084/Screenshot_2025-11-04_104057_ffa9di.png",
            &["BotPress WorkSpace", "BotPress Studio", "BotPress Web Chat Preview"],
            "AI",
            None,
        ),
        project(
            5,
            "Food Munch",
            "A food-centric website showcasing recipes, food blogs, and trending dishes in a visually appealing layout.",
            "https://foodmunch246.niat.tech/",
            "https://res.cloudinary.com/dodfv5sbg/image/upload/v1762232680/Screenshot_2025-11-04_103353_jw6iys.png",
            &["HTML", "CSS", "Bootstrap"],
            "responsive",
            None,
        ),
        project(
            6,
            "Tasty Kitchens",
            "A food ordering platform with a React + Vite frontend and a Node.js + MongoDB backend.",
            "https://tasty-kitchens-nu.vercel.app/",
            "https://res.cloudinary.com/dodfv5sbg/image/upload/v1762232980/Screenshot_2025-09-18_102156_p5c6pw.png",
            &["React", "Node.js", "Express", "MongoDB"],
            "mern",
            Some((
                "https://github.com/Vaibhava2424/Tasty-Kitchens",
                Some("https://github.com/Vaibhava2424/Tasty-Kitchen-apis"),
            )),
        ),
        project(
            7,
            "BookFlow",
            "A book management application with secure JWT authentication and CRUD operations over MongoDB.",
            "https://bookflow-eosin.vercel.app/",
            "https://res.cloudinary.com/dodfv5sbg/image/upload/v1762232946/Screenshot_2025-11-04_103823_iggpak.png",
            &["React", "TypeScript", "Node.js", "MongoDB"],
            "mern",
            Some((
                "https://github.com/Vaibhava2424/bookFlow",
                Some("https://github.com/Vaibhava2424/BookFlow-apis"),
            )),
        ),
        project(
            8,
            "Multi-Consultancy Webpage",
            "A consultancy landing page with a responsive layout, service highlights and structured content sections, built with Bootstrap.",
            "https://jefnncefjv.niat.tech/",
            "https://res.cloudinary.com/dodfv5sbg/image/upload/v1762233543/Screenshot_2025-11-04_104817_da4aag.png",
            &["HTML", "CSS", "Bootstrap"],
            "responsive",
            None,
        ),
        project(
            9,
            "Nature Tourism Page",
            "A nature-themed tourism landing page built on Bootstrap grids with a mobile-first layout.",
            "https://jwncwndcj.niat.tech/",
            "https://res.cloudinary.com/dodfv5sbg/image/upload/v1762233653/Screenshot_2025-11-04_104946_cu1bgt.png",
            &["HTML", "CSS", "Bootstrap"],
            "responsive",
            None,
        ),
        project(
            10,
            "Wikipedia Search Engine",
            "A real-time Wikipedia search application using the Fetch API and dynamic DOM rendering.",
            "https://wikipedia64.niat.tech/",
            "https://res.cloudinary.com/dodfv5sbg/image/upload/v1762233760/Screenshot_2025-11-04_105222_aknvdo.png",
            &["HTML", "CSS", "JavaScript"],
            "other",
            None,
        ),
        project(
            11,
            "Number Guess Game",
            "An interactive guessing game built on core JavaScript logic and DOM updates, with feedback on each attempt.",
            "https://guessingame24.niat.tech/",
            "https://res.cloudinary.com/dodfv5sbg/image/upload/v1762233794/Screenshot_2025-11-04_105300_ytsjhi.png",
            &["HTML", "CSS", "JavaScript"],
            "other",
            None,
        ),
        project(
            12,
            "Wedding Celebration Page",
            "A festive wedding theme built with Bootstrap and custom UI blocks for event layouts.",
            "https://marriagefestive.niat.tech/",
            "https://res.cloudinary.com/dodfv5sbg/image/upload/v1762233973/Screenshot_2025-11-04_105600_paccxc.png",
            &["HTML", "CSS", "Bootstrap"],
            "responsive",
            None,
        ),
        project(
            13,
            "Tech Trends Showcase",
            "A technology-trends website built with Bootstrap and AI-assisted design tools, with a futuristic look.",
            "https://futurthink11.niat.tech/",
            "https://res.cloudinary.com/dodfv5sbg/image/upload/v1762234092/Screenshot_2025-11-04_105722_sntunq.png",
            &["HTML", "CSS", "Bootstrap"],
            "AI",
            None,
        ),
        project(
            14,
            "FitPro Fitness Page",
            "A responsive fitness landing page showcasing workout services, trainers, and a brand hero section.",
            "https://fitprocom.niat.tech/",
            "https://res.cloudinary.com/dodfv5sbg/image/upload/v1762234177/Screenshot_2025-11-04_105921_rx2krh.png",
            &["HTML", "CSS", "Bootstrap"],
            "responsive",
            None,
        ),
    ]
}

fn skill(id: &str, name: &str, category: &str, level: &str, years: u32) -> Skill {
    Skill {
        key: RecordKey::new(id),
        skill_name: name.to_string(),
        category: Some(category.to_string()),
        description: None,
        proficiency_level: Some(level.to_string()),
        years_of_experience: Some(years),
        skill_image: None,
        timestamps: Timestamps::default(),
    }
}

pub fn skills() -> Vec<Skill> {
    vec![
        skill("react", "React", "Frontend", "Advanced", 2),
        skill("typescript", "TypeScript", "Frontend", "Intermediate", 1),
        skill("tailwind", "Tailwind CSS", "Frontend", "Advanced", 2),
        skill("node", "Node.js", "Backend", "Intermediate", 2),
        skill("express", "Express", "Backend", "Intermediate", 2),
        skill("mongodb", "MongoDB", "Database", "Intermediate", 1),
        skill("figma", "Figma", "Design", "Advanced", 2),
        skill("botpress", "BotPress", "AI Tools", "Intermediate", 1),
    ]
}

fn certificate(id: u64, title: &str, description: &str, live_url: &str) -> Certificate {
    Certificate {
        key: RecordKey {
            id: RecordId::Text(id.to_string()),
            legacy_id: Some(RecordId::Number(id)),
        },
        title: title.to_string(),
        issuing_organization: None,
        issue_date: None,
        credential_id: None,
        credential_url: None,
        certificate_image: None,
        description: Some(description.to_string()),
        live_url: Some(live_url.to_string()),
        fallback_text: Some(crate::types::CERTIFICATE_FALLBACK_TEXT.to_string()),
        timestamps: Timestamps::default(),
    }
}

pub fn certificates() -> Vec<Certificate> {
    vec![
        certificate(
            1,
            "Ethical Hacking 101 Workshop",
            "Workshop covering ethical hacking principles, penetration testing methodologies, and security best practices.",
            "https://cdn1.ccbp.in/misc/niat_ethical_101_part/M0RWF5X8PJ.png",
        ),
        certificate(
            2,
            "UI/UX Participation Certificate",
            "Participation certificate for completing the UI/UX project/workshop.",
            "https://cdn1.ccbp.in/misc/UI_UX_participation/U9XIAM43IO.png",
        ),
        certificate(
            3,
            "UI/UX Accomplishment Certificate",
            "Accomplishment certificate for completing the UI/UX project/workshop successfully.",
            "https://cdn1.ccbp.in/misc/UI_UX_Accomplishment/OHPF52ZIC2.png",
        ),
        certificate(
            4,
            "The MCP Magic Workshop",
            "An introductory session exploring how MCP-style automation streamlines workflows.",
            "",
        ),
        certificate(
            5,
            "Robotic Arm 101 Workshop",
            "A foundational workshop introducing robotic arm mechanisms, motion control, and real-world automation.",
            "",
        ),
    ]
}

/// Projects whose category equals `filter`, ignoring ASCII case. "All"
/// keeps everything. Order is preserved.
pub fn filter_by_category<'a>(projects: &'a [Project], filter: &str) -> Vec<&'a Project> {
    if filter.eq_ignore_ascii_case(ALL_FILTER) {
        return projects.iter().collect();
    }
    projects
        .iter()
        .filter(|p| {
            p.category
                .as_deref()
                .map_or(false, |c| c.eq_ignore_ascii_case(filter))
        })
        .collect()
}

/// Projects listing `tag` among their technologies, ignoring ASCII case.
pub fn filter_by_tag<'a>(
    projects: impl IntoIterator<Item = &'a Project>,
    tag: &str,
) -> Vec<&'a Project> {
    projects
        .into_iter()
        .filter(|p| p.tags().iter().any(|t| t.eq_ignore_ascii_case(tag)))
        .collect()
}

/// Distinct values in first-seen order.
fn distinct<I: IntoIterator<Item = String>>(values: I) -> Vec<String> {
    let mut seen = HashSet::new();
    values
        .into_iter()
        .filter(|value| seen.insert(value.clone()))
        .collect()
}

pub fn categories(projects: &[Project]) -> Vec<String> {
    distinct(projects.iter().filter_map(|p| p.category.clone()))
}

pub fn tags(projects: &[Project]) -> Vec<String> {
    distinct(projects.iter().flat_map(Project::tags))
}

pub fn skill_category(skill: &Skill) -> &str {
    skill
        .category
        .as_deref()
        .map(str::trim)
        .filter(|c| !c.is_empty())
        .unwrap_or(OTHER_CATEGORY)
}

#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct SkillGroup {
    pub category: String,
    pub skills: Vec<Skill>,
}

/// Partitions skills by category, groups in first-seen order.
pub fn group_by_category(skills: &[Skill]) -> Vec<SkillGroup> {
    let mut groups: Vec<SkillGroup> = Vec::new();
    for skill in skills {
        let category = skill_category(skill);
        match groups.iter_mut().find(|g| g.category == category) {
            Some(group) => group.skills.push(skill.clone()),
            None => groups.push(SkillGroup {
                category: category.to_string(),
                skills: vec![skill.clone()],
            }),
        }
    }
    groups
}

#[derive(Serialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SkillStats {
    pub skill_count: usize,
    pub category_count: usize,
    pub max_years: u32,
}

impl SkillStats {
    pub fn of(skills: &[Skill]) -> Self {
        SkillStats {
            skill_count: skills.len(),
            category_count: group_by_category(skills).len(),
            max_years: skills
                .iter()
                .filter_map(|s| s.years_of_experience)
                .max()
                .unwrap_or(0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_filter_keeps_exact_subset_in_order() {
        let all = projects();
        let mern = filter_by_category(&all, "mern");
        let expected: Vec<&Project> = all
            .iter()
            .filter(|p| p.category.as_deref() == Some("mern"))
            .collect();
        assert_eq!(mern, expected);
        let titles: Vec<&str> = mern.iter().map(|p| p.title.as_str()).collect();
        assert_eq!(titles, vec!["Jobby App", "Tasty Kitchens", "BookFlow"]);
    }

    #[test]
    fn catalog_carries_every_project_once() {
        let all = projects();
        assert_eq!(all.len(), 15);
        let ids = distinct(all.iter().map(|p| p.key.id.to_string()));
        assert_eq!(ids.len(), all.len());
        let ai: Vec<&str> = filter_by_category(&all, "AI")
            .iter()
            .map(|p| p.title.as_str())
            .collect();
        assert_eq!(ai, vec!["Law Guide", "AI Chatbot", "Tech Trends Showcase"]);
    }

    #[test]
    fn category_filter_ignores_case_and_all_keeps_everything() {
        let all = projects();
        assert_eq!(filter_by_category(&all, "MERN").len(), 3);
        assert_eq!(filter_by_category(&all, "all").len(), all.len());
        assert!(filter_by_category(&all, "Games").is_empty());
    }

    #[test]
    fn category_filter_on_two_categories_partitions() {
        let all: Vec<Project> = projects()
            .into_iter()
            .filter(|p| matches!(p.category.as_deref(), Some("AI") | Some("other")))
            .collect();
        let ai = filter_by_category(&all, "AI");
        let other = filter_by_category(&all, "other");
        assert_eq!(ai.len() + other.len(), all.len());
        assert!(ai.iter().all(|p| p.category.as_deref() == Some("AI")));
    }

    #[test]
    fn uncategorized_projects_only_match_all() {
        let mut all = projects();
        all[0].category = None;
        assert_eq!(filter_by_category(&all, "mern").len(), 2);
        assert_eq!(filter_by_category(&all, ALL_FILTER).len(), all.len());
    }

    #[test]
    fn facets_are_distinct_in_first_seen_order() {
        let all = projects();
        assert_eq!(
            categories(&all),
            vec!["mern", "AI", "other", "frontend", "responsive"]
        );
        let tags = tags(&all);
        assert_eq!(tags.iter().filter(|t| *t == "React").count(), 1);
        assert_eq!(tags[0], "React");
    }

    #[test]
    fn tag_filter_matches_technologies() {
        let all = projects();
        let mongo = filter_by_tag(&all, "mongodb");
        let titles: Vec<&str> = mongo.iter().map(|p| p.title.as_str()).collect();
        assert_eq!(titles, vec!["Tasty Kitchens", "BookFlow"]);
    }

    #[test]
    fn grouping_partitions_every_skill() {
        let mut all = skills();
        all[1].category = None;
        all[2].category = Some("  ".to_string());
        let groups = group_by_category(&all);

        let total: usize = groups.iter().map(|g| g.skills.len()).sum();
        assert_eq!(total, all.len());

        let names: Vec<&str> = groups.iter().map(|g| g.category.as_str()).collect();
        assert_eq!(names, vec!["Frontend", "Other", "Backend", "Database", "Design", "AI Tools"]);
        let other = groups.iter().find(|g| g.category == OTHER_CATEGORY).unwrap();
        assert_eq!(other.skills.len(), 2);

        for skill in &all {
            let homes = groups
                .iter()
                .filter(|g| g.skills.iter().any(|s| s.key == skill.key))
                .count();
            assert_eq!(homes, 1);
        }
    }

    #[test]
    fn grouping_empty_input_yields_no_groups() {
        assert!(group_by_category(&[]).is_empty());
        assert_eq!(
            SkillStats::of(&[]),
            SkillStats {
                skill_count: 0,
                category_count: 0,
                max_years: 0
            }
        );
    }

    #[test]
    fn skill_stats_summarize_catalog() {
        let stats = SkillStats::of(&skills());
        assert_eq!(stats.skill_count, 8);
        assert_eq!(stats.category_count, 5);
        assert_eq!(stats.max_years, 2);
    }

    #[test]
    fn catalog_certificates_without_links_use_fallback() {
        let certs = certificates();
        assert_eq!(certs.len(), 5);
        assert!(certs[0].link().is_some());
        assert!(certs[3].link().is_none());
        assert_eq!(certs[3].fallback(), "links yet to be added");
    }
}
