//! View models for the five site pages.
//!
//! Pages never fail: a backend error is logged and the page renders the
//! same empty state as a collection with no records.

use serde::{de::DeserializeOwned, Serialize};
use tracing::warn;

use crate::{
    core::{
        catalog::{self, SkillGroup, SkillStats, ALL_FILTER, PORTFOLIO_FILTERS},
        content::{fetch_all, fetch_by_id, ContentService, CERTIFICATES, PROJECTS, SKILLS},
    },
    types::{Certificate, Project, Skill},
};

#[derive(Serialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum PageState {
    Ready,
    Empty,
    NotFound,
}

impl PageState {
    fn from_len(len: usize) -> Self {
        if len == 0 {
            PageState::Empty
        } else {
            PageState::Ready
        }
    }
}

#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct NavLink {
    pub label: &'static str,
    pub path: String,
}

pub fn navigation(prefix: &str) -> Vec<NavLink> {
    [
        ("Home", "/"),
        ("Skills", "/skills"),
        ("Portfolio", "/portfolio"),
        ("Certificates", "/certificates"),
    ]
    .into_iter()
    .map(|(label, path)| NavLink {
        label,
        path: page_path(prefix, path),
    })
    .collect()
}

pub fn page_path(prefix: &str, path: &str) -> String {
    match (prefix.is_empty(), path) {
        (true, _) => path.to_string(),
        (false, "/") => format!("{}/", prefix),
        (false, _) => format!("{}{}", prefix, path),
    }
}

async fn load_records<T: DeserializeOwned>(service: &dyn ContentService, collection: &str) -> Vec<T> {
    match fetch_all::<T>(service, collection).await {
        Ok(result) => result.items,
        Err(error) => {
            warn!(collection, %error, mode = service.mode(), "could not load records, rendering empty");
            Vec::new()
        }
    }
}

#[derive(Serialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ProjectCard {
    pub id: String,
    pub title: String,
    pub description: Option<String>,
    pub image: Option<String>,
    pub category: Option<String>,
    pub tags: Vec<String>,
    pub live_url: Option<String>,
    pub github_url: Option<String>,
    pub path: String,
}

impl ProjectCard {
    fn new(project: &Project, prefix: &str) -> Self {
        let id = project.key.id.to_string();
        ProjectCard {
            path: page_path(prefix, &format!("/portfolio/{}", id)),
            id,
            title: project.title.clone(),
            description: project.description.clone(),
            image: project.thumbnail.clone(),
            category: project.category.clone(),
            tags: project.tags(),
            live_url: project.project_url.clone(),
            github_url: project.github.as_ref().and_then(|g| g.frontend.clone()),
        }
    }
}

#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct Stat {
    pub label: &'static str,
    pub value: &'static str,
}

#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct Expertise {
    pub title: &'static str,
    pub description: &'static str,
    pub tags: [&'static str; 3],
}

const HOME_STATS: [Stat; 4] = [
    Stat { label: "Years Experience", value: "5+" },
    Stat { label: "Projects Completed", value: "50+" },
    Stat { label: "Technologies Mastered", value: "15+" },
    Stat { label: "Client Satisfaction", value: "100%" },
];

const EXPERTISE: [Expertise; 3] = [
    Expertise {
        title: "Frontend Development",
        description: "Crafting responsive, accessible interfaces with React, TypeScript, and modern CSS frameworks.",
        tags: ["React", "TypeScript", "Tailwind"],
    },
    Expertise {
        title: "Full-Stack Solutions",
        description: "Building complete applications with MERN stack, database design, and API development.",
        tags: ["Node.js", "MongoDB", "Express"],
    },
    Expertise {
        title: "AI Integration",
        description: "Implementing intelligent features and machine learning capabilities into web applications.",
        tags: ["OpenAI", "TensorFlow", "Python"],
    },
];

const FEATURED_COUNT: usize = 3;

#[derive(Serialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct HomePage {
    pub state: PageState,
    pub nav: Vec<NavLink>,
    pub stats: Vec<Stat>,
    pub expertise: Vec<Expertise>,
    pub featured_projects: Vec<ProjectCard>,
}

pub async fn home_page(service: &dyn ContentService, prefix: &str) -> HomePage {
    let projects: Vec<Project> = load_records(service, PROJECTS).await;
    HomePage {
        state: PageState::Ready,
        nav: navigation(prefix),
        stats: HOME_STATS.to_vec(),
        expertise: EXPERTISE.to_vec(),
        featured_projects: projects
            .iter()
            .take(FEATURED_COUNT)
            .map(|p| ProjectCard::new(p, prefix))
            .collect(),
    }
}

#[derive(Serialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioPage {
    pub state: PageState,
    pub nav: Vec<NavLink>,
    pub filters: Vec<&'static str>,
    pub categories: Vec<String>,
    pub tags: Vec<String>,
    pub active_filter: String,
    pub active_tag: Option<String>,
    pub projects: Vec<ProjectCard>,
}

pub async fn portfolio_page(
    service: &dyn ContentService,
    prefix: &str,
    category: Option<&str>,
    tag: Option<&str>,
) -> PortfolioPage {
    let projects: Vec<Project> = load_records(service, PROJECTS).await;
    let active_filter = category
        .map(str::trim)
        .filter(|c| !c.is_empty())
        .unwrap_or(ALL_FILTER);
    let active_tag = tag.map(str::trim).filter(|t| !t.is_empty());

    let mut visible = catalog::filter_by_category(&projects, active_filter);
    if let Some(tag) = active_tag {
        visible = catalog::filter_by_tag(visible, tag);
    }

    PortfolioPage {
        state: PageState::from_len(visible.len()),
        nav: navigation(prefix),
        filters: PORTFOLIO_FILTERS.to_vec(),
        categories: catalog::categories(&projects),
        tags: catalog::tags(&projects),
        active_filter: active_filter.to_string(),
        active_tag: active_tag.map(str::to_string),
        projects: visible.into_iter().map(|p| ProjectCard::new(p, prefix)).collect(),
    }
}

#[derive(Serialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ProjectDetailPage {
    pub state: PageState,
    pub nav: Vec<NavLink>,
    pub back_path: String,
    pub project: Option<Project>,
    pub tags: Vec<String>,
}

pub async fn project_detail_page(
    service: &dyn ContentService,
    prefix: &str,
    id: &str,
) -> ProjectDetailPage {
    let project = match fetch_by_id::<Project>(service, PROJECTS, id).await {
        Ok(project) => project,
        Err(error) => {
            warn!(id, %error, "could not load project, rendering not found");
            None
        }
    };
    ProjectDetailPage {
        state: if project.is_some() {
            PageState::Ready
        } else {
            PageState::NotFound
        },
        nav: navigation(prefix),
        back_path: page_path(prefix, "/portfolio"),
        tags: project.as_ref().map(Project::tags).unwrap_or_default(),
        project,
    }
}

#[derive(Serialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SkillsPage {
    pub state: PageState,
    pub nav: Vec<NavLink>,
    pub groups: Vec<SkillGroup>,
    pub stats: Option<SkillStats>,
}

pub async fn skills_page(service: &dyn ContentService, prefix: &str) -> SkillsPage {
    let skills: Vec<Skill> = load_records(service, SKILLS).await;
    SkillsPage {
        state: PageState::from_len(skills.len()),
        nav: navigation(prefix),
        groups: catalog::group_by_category(&skills),
        stats: (!skills.is_empty()).then(|| SkillStats::of(&skills)),
    }
}

#[derive(Serialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CertificateCard {
    pub id: String,
    pub title: String,
    pub issuing_organization: Option<String>,
    pub issue_date: Option<String>,
    pub description: Option<String>,
    pub image: Option<String>,
    pub link: Option<String>,
    pub fallback_text: Option<String>,
}

impl From<&Certificate> for CertificateCard {
    fn from(certificate: &Certificate) -> Self {
        let link = certificate.link().map(str::to_string);
        CertificateCard {
            id: certificate.key.id.to_string(),
            title: certificate.title.clone(),
            issuing_organization: certificate.issuing_organization.clone(),
            issue_date: certificate.issue_date.clone(),
            description: certificate.description.clone(),
            image: certificate.certificate_image.clone(),
            fallback_text: link
                .is_none()
                .then(|| certificate.fallback().to_string()),
            link,
        }
    }
}

#[derive(Serialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CertificatesPage {
    pub state: PageState,
    pub nav: Vec<NavLink>,
    pub total: usize,
    pub certificates: Vec<CertificateCard>,
}

pub async fn certificates_page(service: &dyn ContentService, prefix: &str) -> CertificatesPage {
    let certificates: Vec<Certificate> = load_records(service, CERTIFICATES).await;
    CertificatesPage {
        state: PageState::from_len(certificates.len()),
        nav: navigation(prefix),
        total: certificates.len(),
        certificates: certificates.iter().map(CertificateCard::from).collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{
        content::StaticContentService,
        data::CatalogContentService,
    };
    use serde_json::json;

    fn catalog() -> CatalogContentService {
        CatalogContentService::builtin().unwrap()
    }

    #[actix_web::test]
    async fn static_mode_pages_render_empty() {
        let service = StaticContentService;
        assert_eq!(portfolio_page(&service, "", None, None).await.state, PageState::Empty);
        let skills = skills_page(&service, "").await;
        assert_eq!(skills.state, PageState::Empty);
        assert!(skills.stats.is_none());
        assert_eq!(certificates_page(&service, "").await.state, PageState::Empty);
        let home = home_page(&service, "").await;
        assert_eq!(home.state, PageState::Ready);
        assert!(home.featured_projects.is_empty());
    }

    #[actix_web::test]
    async fn portfolio_filters_by_category_and_tag() {
        let service = catalog();
        let page = portfolio_page(&service, "", Some("Responsive"), None).await;
        assert_eq!(page.state, PageState::Ready);
        assert_eq!(page.active_filter, "Responsive");
        assert_eq!(page.projects.len(), 5);
        assert!(page
            .projects
            .iter()
            .all(|p| p.category.as_deref() == Some("responsive")));

        let page = portfolio_page(&service, "", Some("mern"), Some("TypeScript")).await;
        let titles: Vec<&str> = page.projects.iter().map(|p| p.title.as_str()).collect();
        assert_eq!(titles, vec!["BookFlow"]);

        let page = portfolio_page(&service, "", Some("Games"), None).await;
        assert_eq!(page.state, PageState::Empty);
        assert!(!page.categories.is_empty());
    }

    #[actix_web::test]
    async fn portfolio_blank_filter_means_all() {
        let service = catalog();
        let page = portfolio_page(&service, "", Some("  "), None).await;
        assert_eq!(page.active_filter, ALL_FILTER);
        assert_eq!(page.projects.len(), catalog::projects().len());
        assert_eq!(page.projects[0].path, "/portfolio/1");
    }

    #[actix_web::test]
    async fn detail_page_finds_or_reports_not_found() {
        let service = catalog();
        let page = project_detail_page(&service, "", "6").await;
        assert_eq!(page.state, PageState::Ready);
        assert_eq!(page.project.unwrap().title, "Tasty Kitchens");
        assert_eq!(page.tags, vec!["React", "Node.js", "Express", "MongoDB"]);

        let missing = project_detail_page(&service, "", "no-such-project").await;
        assert_eq!(missing.state, PageState::NotFound);
        assert!(missing.project.is_none());

        let stub = project_detail_page(&StaticContentService, "", "1").await;
        assert_eq!(stub.state, PageState::NotFound);
    }

    #[actix_web::test]
    async fn undecodable_records_degrade_to_empty() {
        let service = CatalogContentService::new()
            .with_collection(PROJECTS, vec![json!({ "_id": 1 })]);
        let page = portfolio_page(&service, "", None, None).await;
        assert_eq!(page.state, PageState::Empty);
        let detail = project_detail_page(&service, "", "1").await;
        assert_eq!(detail.state, PageState::NotFound);
    }

    #[actix_web::test]
    async fn records_with_both_ids_still_render() {
        let service = CatalogContentService::new().with_collection(
            PROJECTS,
            vec![
                json!({ "_id": "abc", "id": 1, "title": "Folio", "category": "rust" }),
                json!({ "id": 2, "title": "Site", "category": "rust" }),
            ],
        );
        let page = portfolio_page(&service, "", None, None).await;
        assert_eq!(page.state, PageState::Ready);
        assert_eq!(page.projects[0].path, "/portfolio/abc");
        assert_eq!(page.projects[1].id, "2");

        let detail = project_detail_page(&service, "", "abc").await;
        assert_eq!(detail.project.unwrap().title, "Folio");
    }

    #[actix_web::test]
    async fn skills_page_groups_and_summarizes() {
        let page = skills_page(&catalog(), "").await;
        assert_eq!(page.state, PageState::Ready);
        let total: usize = page.groups.iter().map(|g| g.skills.len()).sum();
        assert_eq!(total, catalog::skills().len());
        assert_eq!(page.stats.unwrap().category_count, page.groups.len());
    }

    #[actix_web::test]
    async fn certificates_page_uses_fallback_for_missing_links() {
        let page = certificates_page(&catalog(), "").await;
        assert_eq!(page.total, 5);
        assert!(page.certificates[0].link.is_some());
        assert!(page.certificates[0].fallback_text.is_none());
        assert_eq!(
            page.certificates[4].fallback_text.as_deref(),
            Some("links yet to be added")
        );
    }

    #[test]
    fn navigation_respects_prefix() {
        let nav = navigation("/folio");
        assert_eq!(nav[0].path, "/folio/");
        assert_eq!(nav[2].path, "/folio/portfolio");
        assert_eq!(navigation("")[1].path, "/skills");
    }
}
