use std::{io::Result, sync::Arc};

use actix_cors::Cors;
use actix_web::{
    http::header,
    middleware::Logger,
    web::{self, resource, scope, Data, Json, Path, Query, ServiceConfig},
    App, HttpResponse, HttpServer, Scope,
};
use actix_web_httpauth::extractors::bearer::BearerAuth;
use chrono::{DateTime, Local};
use serde::Deserialize;
use serde_json::{json, Map, Value};
use tracing::info;

use crate::{
    auth::{check_auth, current_member},
    core::content::{CollectionId, ContentService},
    error::ContentError,
    pages::{self, page_path, PageState},
};

/// Per-process settings the handlers need.
#[derive(Clone, Debug)]
pub struct SiteConfig {
    pub prefix: String,
    pub api_key: Option<String>,
    pub started_at: DateTime<Local>,
}

impl SiteConfig {
    pub fn new(prefix: impl Into<String>, api_key: Option<String>) -> Self {
        SiteConfig {
            prefix: prefix.into(),
            api_key,
            started_at: Local::now(),
        }
    }
}

pub async fn start_server(
    addr: std::net::SocketAddr,
    service: Arc<dyn ContentService>,
    site: SiteConfig,
) -> Result<()> {
    let mode = service.mode();
    let service = Data::from(service);
    let site = Data::new(site);
    let server = HttpServer::new(move || {
        App::new()
            .app_data(service.clone())
            .app_data(site.clone())
            .configure(routes(site.prefix.clone()))
            .wrap(
                Cors::default()
                    .allow_any_origin()
                    .allow_any_header()
                    .allow_any_method(),
            )
            .wrap(Logger::default())
    })
    .bind(addr)?;
    info!(%addr, mode, "server started");
    server.run().await
}

/// API scope plus the page routes mounted under `prefix`; anything else
/// redirects to the home page.
pub fn routes(prefix: String) -> impl Fn(&mut ServiceConfig) + Clone {
    move |cfg: &mut ServiceConfig| {
        cfg.service(api_scope())
            .service(page_scope(&prefix))
            .default_service(web::to(redirect_home));
    }
}

pub fn api_scope() -> Scope {
    scope("/v1")
        .service(
            resource("/collections/{collection}")
                .route(web::get().to(get_all_handler))
                .route(web::post().to(create_handler)),
        )
        .service(
            resource("/collections/{collection}/{id}")
                .route(web::get().to(get_by_id_handler))
                .route(web::put().to(update_handler))
                .route(web::delete().to(delete_handler)),
        )
        .service(resource("/members/current").route(web::get().to(current_member_handler)))
        .service(resource("/folio").route(web::get().to(status_handler)))
        .default_service(web::to(api_not_found))
}

fn page_scope(prefix: &str) -> Scope {
    scope(prefix)
        .service(resource(["", "/"]).route(web::get().to(home_handler)))
        .service(resource("/portfolio").route(web::get().to(portfolio_handler)))
        .service(resource("/portfolio/{id}").route(web::get().to(project_detail_handler)))
        .service(resource("/skills").route(web::get().to(skills_handler)))
        .service(resource("/certificates").route(web::get().to(certificates_handler)))
}

#[derive(Deserialize, Debug, Default)]
pub struct IncludeQuery {
    include: Option<String>,
}

impl IncludeQuery {
    fn references(&self) -> Vec<String> {
        self.include
            .as_deref()
            .unwrap_or_default()
            .split(',')
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .map(str::to_string)
            .collect()
    }
}

#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct CreateRequest {
    item: Value,
    #[serde(default)]
    multi_references: Option<Map<String, Value>>,
}

fn authorize(site: &SiteConfig, bearer: Option<&BearerAuth>) -> std::result::Result<(), ContentError> {
    check_auth(site.api_key.as_deref(), bearer.map(BearerAuth::token))
}

async fn get_all_handler(
    service: Data<dyn ContentService>,
    collection: Path<String>,
    query: Query<IncludeQuery>,
) -> std::result::Result<HttpResponse, ContentError> {
    let collection = CollectionId::new(collection.into_inner());
    let result = service.get_all(&collection, &query.references()).await?;
    Ok(HttpResponse::Ok().json(result))
}

async fn get_by_id_handler(
    service: Data<dyn ContentService>,
    path: Path<(String, String)>,
    query: Query<IncludeQuery>,
) -> std::result::Result<HttpResponse, ContentError> {
    let (collection, id) = path.into_inner();
    let found = service
        .get_by_id(&CollectionId::new(collection), &id, &query.references())
        .await?;
    Ok(HttpResponse::Ok().json(found))
}

async fn create_handler(
    service: Data<dyn ContentService>,
    site: Data<SiteConfig>,
    collection: Path<String>,
    request: Json<CreateRequest>,
    bearer: Option<BearerAuth>,
) -> std::result::Result<HttpResponse, ContentError> {
    authorize(&site, bearer.as_ref())?;
    let collection = CollectionId::new(collection.into_inner());
    let CreateRequest {
        item,
        multi_references,
    } = request.into_inner();
    let created = service.create(&collection, item, multi_references).await?;
    info!(%collection, "record created");
    Ok(HttpResponse::Ok().json(created))
}

async fn update_handler(
    service: Data<dyn ContentService>,
    site: Data<SiteConfig>,
    path: Path<(String, String)>,
    item: Json<Value>,
    bearer: Option<BearerAuth>,
) -> std::result::Result<HttpResponse, ContentError> {
    authorize(&site, bearer.as_ref())?;
    let (collection, id) = path.into_inner();
    let collection = CollectionId::new(collection);
    let mut item = item.into_inner();
    if let Value::Object(fields) = &mut item {
        fields.insert("_id".to_string(), Value::String(id.clone()));
    }
    let updated = service.update(&collection, item).await?;
    info!(%collection, %id, "record updated");
    Ok(HttpResponse::Ok().json(updated))
}

async fn delete_handler(
    service: Data<dyn ContentService>,
    site: Data<SiteConfig>,
    path: Path<(String, String)>,
    bearer: Option<BearerAuth>,
) -> std::result::Result<HttpResponse, ContentError> {
    authorize(&site, bearer.as_ref())?;
    let (collection, id) = path.into_inner();
    let collection = CollectionId::new(collection);
    let deleted = service.delete(&collection, &id).await?;
    info!(%collection, %id, "record deleted");
    Ok(HttpResponse::Ok().json(deleted))
}

async fn current_member_handler() -> HttpResponse {
    HttpResponse::Ok().json(current_member().await)
}

async fn status_handler(service: Data<dyn ContentService>, site: Data<SiteConfig>) -> HttpResponse {
    HttpResponse::Ok().json(json!({
        "status": "folio is running",
        "mode": service.mode(),
        "startedAt": site.started_at.format("%Y-%m-%d %H:%M:%S").to_string(),
    }))
}

async fn api_not_found() -> HttpResponse {
    HttpResponse::NotFound().json(json!({ "error": "no such endpoint" }))
}

async fn redirect_home(site: Data<SiteConfig>) -> HttpResponse {
    HttpResponse::Found()
        .insert_header((header::LOCATION, page_path(&site.prefix, "/")))
        .finish()
}

async fn home_handler(service: Data<dyn ContentService>, site: Data<SiteConfig>) -> HttpResponse {
    HttpResponse::Ok().json(pages::home_page(service.get_ref(), &site.prefix).await)
}

#[derive(Deserialize, Debug, Default)]
pub struct PortfolioQuery {
    category: Option<String>,
    tag: Option<String>,
}

async fn portfolio_handler(
    service: Data<dyn ContentService>,
    site: Data<SiteConfig>,
    query: Query<PortfolioQuery>,
) -> HttpResponse {
    let page = pages::portfolio_page(
        service.get_ref(),
        &site.prefix,
        query.category.as_deref(),
        query.tag.as_deref(),
    )
    .await;
    HttpResponse::Ok().json(page)
}

async fn project_detail_handler(
    service: Data<dyn ContentService>,
    site: Data<SiteConfig>,
    id: Path<String>,
) -> HttpResponse {
    let page = pages::project_detail_page(service.get_ref(), &site.prefix, &id).await;
    if page.state == PageState::NotFound {
        HttpResponse::NotFound().json(page)
    } else {
        HttpResponse::Ok().json(page)
    }
}

async fn skills_handler(service: Data<dyn ContentService>, site: Data<SiteConfig>) -> HttpResponse {
    HttpResponse::Ok().json(pages::skills_page(service.get_ref(), &site.prefix).await)
}

async fn certificates_handler(
    service: Data<dyn ContentService>,
    site: Data<SiteConfig>,
) -> HttpResponse {
    HttpResponse::Ok().json(pages::certificates_page(service.get_ref(), &site.prefix).await)
}
