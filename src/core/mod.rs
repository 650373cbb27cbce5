pub mod catalog;
pub mod content;
pub mod data;
pub mod remote;
pub mod settings;

use std::{sync::Arc, time::Duration};

use tracing::info;

use crate::{auth::load_api_key, error::ContentError};
use content::{ContentService, StaticContentService};
use data::CatalogContentService;
use remote::RemoteContentService;
use settings::{ContentMode, Settings};

/// Builds the content backend selected by `content_mode`.
pub fn content_service(settings: &Settings) -> Result<Arc<dyn ContentService>, ContentError> {
    let service: Arc<dyn ContentService> = match settings.content_mode.value {
        ContentMode::Static => Arc::new(StaticContentService),
        ContentMode::Catalog => Arc::new(CatalogContentService::from_dir(&settings.data_path.value)?),
        ContentMode::Remote => Arc::new(RemoteContentService::new(
            settings.remote_url.value.clone(),
            load_api_key(&settings.key_path.value)?,
            Duration::from_secs(settings.remote_timeout_secs.value.into()),
        )),
    };
    info!(mode = service.mode(), "content service ready");
    Ok(service)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_backend_for_each_mode() {
        let dir = tempfile::tempdir().unwrap();
        let mut settings = Settings::new();
        settings.data_path.value = dir.path().display().to_string();
        settings.key_path.value = dir.path().join("pass.key").display().to_string();

        for (mode, expected) in [
            (ContentMode::Static, "static"),
            (ContentMode::Catalog, "catalog"),
            (ContentMode::Remote, "remote"),
        ] {
            settings.content_mode.value = mode;
            assert_eq!(content_service(&settings).unwrap().mode(), expected);
        }
    }
}
