use std::fmt;

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};
use tracing::debug;

use crate::{error::ContentError, types::QueryResult};

pub const PROJECTS: &str = "projects";
pub const SKILLS: &str = "skills";
pub const CERTIFICATES: &str = "certificates";
pub const MEMBERS: &str = "members";

/// Name of a logical record grouping. Any string is accepted; the four
/// constants above are the ones pages ask for.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct CollectionId(String);

impl CollectionId {
    pub fn new(name: impl Into<String>) -> Self {
        CollectionId(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CollectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for CollectionId {
    fn from(value: &str) -> Self {
        CollectionId::new(value)
    }
}

/// Uniform CRUD facade over a content backend.
///
/// Futures are not `Send`: the remote backend drives an actix HTTP client,
/// which is bound to the current arbiter.
#[async_trait(?Send)]
pub trait ContentService: Send + Sync {
    fn mode(&self) -> &'static str;

    async fn create(
        &self,
        collection: &CollectionId,
        item: Value,
        multi_references: Option<Map<String, Value>>,
    ) -> Result<Value, ContentError>;

    async fn get_all(
        &self,
        collection: &CollectionId,
        include_references: &[String],
    ) -> Result<QueryResult<Value>, ContentError>;

    async fn get_by_id(
        &self,
        collection: &CollectionId,
        id: &str,
        include_references: &[String],
    ) -> Result<Option<Value>, ContentError>;

    /// `item` must carry `_id`.
    async fn update(&self, collection: &CollectionId, item: Value) -> Result<Value, ContentError>;

    async fn delete(&self, collection: &CollectionId, id: &str) -> Result<Value, ContentError>;
}

/// Backend with no store: reads come back empty, writes are refused.
#[derive(Clone, Copy, Debug, Default)]
pub struct StaticContentService;

#[async_trait(?Send)]
impl ContentService for StaticContentService {
    fn mode(&self) -> &'static str {
        "static"
    }

    async fn create(
        &self,
        collection: &CollectionId,
        _item: Value,
        _multi_references: Option<Map<String, Value>>,
    ) -> Result<Value, ContentError> {
        debug!(%collection, "create refused in static mode");
        Err(ContentError::NotSupported)
    }

    async fn get_all(
        &self,
        _collection: &CollectionId,
        _include_references: &[String],
    ) -> Result<QueryResult<Value>, ContentError> {
        Ok(QueryResult::empty())
    }

    async fn get_by_id(
        &self,
        _collection: &CollectionId,
        _id: &str,
        _include_references: &[String],
    ) -> Result<Option<Value>, ContentError> {
        Ok(None)
    }

    async fn update(&self, collection: &CollectionId, _item: Value) -> Result<Value, ContentError> {
        debug!(%collection, "update refused in static mode");
        Err(ContentError::NotSupported)
    }

    async fn delete(&self, collection: &CollectionId, _id: &str) -> Result<Value, ContentError> {
        debug!(%collection, "delete refused in static mode");
        Err(ContentError::NotSupported)
    }
}

/// `get_all` decoded into a record type.
pub async fn fetch_all<T: DeserializeOwned>(
    service: &dyn ContentService,
    collection: &str,
) -> Result<QueryResult<T>, ContentError> {
    let result = service.get_all(&CollectionId::new(collection), &[]).await?;
    let items = result
        .items
        .into_iter()
        .map(serde_json::from_value)
        .collect::<Result<Vec<T>, _>>()?;
    Ok(QueryResult {
        items,
        total_count: result.total_count,
        has_next: result.has_next,
        has_prev: result.has_prev,
        page_size: result.page_size,
        current_page: result.current_page,
        total_pages: result.total_pages,
    })
}

/// `get_by_id` decoded into a record type.
pub async fn fetch_by_id<T: DeserializeOwned>(
    service: &dyn ContentService,
    collection: &str,
    id: &str,
) -> Result<Option<T>, ContentError> {
    match service
        .get_by_id(&CollectionId::new(collection), id, &[])
        .await?
    {
        Some(value) => Ok(Some(serde_json::from_value(value)?)),
        None => Ok(None),
    }
}
