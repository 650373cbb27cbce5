use std::{
    collections::HashMap,
    fs::File,
    io::{BufReader, ErrorKind, Read},
    path::Path,
};

use async_trait::async_trait;
use serde::Serialize;
use serde_json::{Map, Value};
use tracing::{debug, info, warn};

use crate::{
    core::{
        catalog,
        content::{CollectionId, ContentService, CERTIFICATES, MEMBERS, PROJECTS, SKILLS},
    },
    error::ContentError,
    types::{QueryResult, RecordId},
};

/// Read-only backend over in-memory record arrays.
#[derive(Clone, Debug, Default)]
pub struct CatalogContentService {
    collections: HashMap<String, Vec<Value>>,
}

fn to_values<T: Serialize>(records: Vec<T>) -> Result<Vec<Value>, ContentError> {
    records
        .into_iter()
        .map(|record| serde_json::to_value(record).map_err(ContentError::from))
        .collect()
}

impl CatalogContentService {
    pub fn new() -> Self {
        CatalogContentService::default()
    }

    /// The hardcoded project, skill and certificate arrays.
    pub fn builtin() -> Result<Self, ContentError> {
        Ok(CatalogContentService::new()
            .with_collection(PROJECTS, to_values(catalog::projects())?)
            .with_collection(SKILLS, to_values(catalog::skills())?)
            .with_collection(CERTIFICATES, to_values(catalog::certificates())?))
    }

    /// Built-in arrays, each replaced by `<data_path>/<collection>.json`
    /// when that file exists.
    pub fn from_dir(data_path: impl AsRef<Path>) -> Result<Self, ContentError> {
        let data_path = data_path.as_ref();
        let mut service = CatalogContentService::builtin()?;
        for name in [PROJECTS, SKILLS, CERTIFICATES, MEMBERS] {
            let path = data_path.join(format!("{}.json", name));
            if let Some(items) = load_from_storage(&path)? {
                info!(collection = name, count = items.len(), "catalog file loaded");
                service = service.with_collection(name, items);
            }
        }
        Ok(service)
    }

    pub fn with_collection(mut self, name: &str, items: Vec<Value>) -> Self {
        self.collections.insert(name.to_string(), items);
        self
    }

    fn items(&self, collection: &CollectionId) -> &[Value] {
        self.collections
            .get(collection.as_str())
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }
}

/// Textual id of a stored record, looking at `_id` then `id`.
fn record_matches(item: &Value, id: &str) -> bool {
    ["_id", "id"]
        .iter()
        .filter_map(|key| item.get(*key))
        .filter_map(|raw| serde_json::from_value::<RecordId>(raw.clone()).ok())
        .any(|record_id| record_id.matches(id))
}

/// Reads a JSON array of records. A missing file is `Ok(None)`.
pub fn load_from_storage(path: &Path) -> Result<Option<Vec<Value>>, ContentError> {
    let file = match File::open(path) {
        Ok(file) => file,
        Err(error) if error.kind() == ErrorKind::NotFound => {
            debug!(path = %path.display(), "no catalog file");
            return Ok(None);
        }
        Err(error) => {
            warn!(path = %path.display(), %error, "error opening catalog file");
            return Err(error.into());
        }
    };
    let mut buffer: Vec<u8> = Vec::new();
    let size = BufReader::new(file).read_to_end(&mut buffer)?;
    debug!(path = %path.display(), size, "catalog file read");
    match serde_json::from_slice::<Vec<Value>>(&buffer) {
        Ok(items) => Ok(Some(items)),
        Err(error) => {
            warn!(path = %path.display(), %error, "catalog file structure is incorrect");
            Err(error.into())
        }
    }
}

#[async_trait(?Send)]
impl ContentService for CatalogContentService {
    fn mode(&self) -> &'static str {
        "catalog"
    }

    async fn create(
        &self,
        _collection: &CollectionId,
        _item: Value,
        _multi_references: Option<Map<String, Value>>,
    ) -> Result<Value, ContentError> {
        Err(ContentError::NotSupported)
    }

    async fn get_all(
        &self,
        collection: &CollectionId,
        _include_references: &[String],
    ) -> Result<QueryResult<Value>, ContentError> {
        Ok(QueryResult::single_page(self.items(collection).to_vec()))
    }

    async fn get_by_id(
        &self,
        collection: &CollectionId,
        id: &str,
        _include_references: &[String],
    ) -> Result<Option<Value>, ContentError> {
        Ok(self
            .items(collection)
            .iter()
            .find(|item| record_matches(item, id))
            .cloned())
    }

    async fn update(&self, _collection: &CollectionId, _item: Value) -> Result<Value, ContentError> {
        Err(ContentError::NotSupported)
    }

    async fn delete(&self, _collection: &CollectionId, _id: &str) -> Result<Value, ContentError> {
        Err(ContentError::NotSupported)
    }
}
