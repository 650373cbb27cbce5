use std::{
    fs::File,
    io::{BufReader, ErrorKind, Read},
    path::Path,
};

use tracing::{debug, info, warn};

use crate::{error::ContentError, types::Member};

/// Reads the shared write key. A missing file means writes are unguarded.
pub fn load_api_key(path: impl AsRef<Path>) -> Result<Option<String>, ContentError> {
    let path = path.as_ref();
    match File::open(path) {
        Ok(file) => {
            let mut buffer = String::new();
            BufReader::new(file).read_to_string(&mut buffer)?;
            let key = buffer.trim().to_string();
            if key.is_empty() {
                warn!(path = %path.display(), "key file is empty, ignoring it");
                Ok(None)
            } else {
                info!(path = %path.display(), "write key loaded");
                Ok(Some(key))
            }
        }
        Err(error) if error.kind() == ErrorKind::NotFound => {
            debug!(path = %path.display(), "no key file");
            Ok(None)
        }
        Err(error) => {
            warn!(path = %path.display(), %error, "could not open key file");
            Err(error.into())
        }
    }
}

/// Compares a presented bearer token with the configured key.
pub fn check_auth(local_key: Option<&str>, remote_key: Option<&str>) -> Result<(), ContentError> {
    match local_key {
        None => Ok(()),
        Some(local) if remote_key == Some(local) => Ok(()),
        Some(_) => {
            warn!("failed to authorize write request");
            Err(ContentError::Unauthorized)
        }
    }
}

/// The site has no sign-in, so there is never a current member.
pub async fn current_member() -> Option<Member> {
    None
}
