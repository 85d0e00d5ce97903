//! Backend creation and store opening.

use std::sync::Arc;

use radar::{
    CredentialStore,
    backend::{FileBackend, InMemory},
};

use crate::cli::{Backend, BackendConfig};

/// Human-readable description of the configured backend
pub fn backend_label(config: &BackendConfig) -> String {
    match config.backend {
        Backend::File => format!("file ({})", config.data_dir.display()),
        Backend::Memory => "memory".to_string(),
    }
}

/// Create the appropriate backend based on configuration
pub fn create_backend(
    config: &BackendConfig,
) -> Result<Arc<dyn radar::backend::Backend>, Box<dyn std::error::Error>> {
    match config.backend {
        Backend::File => {
            tracing::debug!("Using file backend at {}", config.data_dir.display());
            Ok(Arc::new(FileBackend::open(&config.data_dir)?))
        }
        Backend::Memory => {
            tracing::warn!("Using in-memory backend; nothing will be kept after this command");
            Ok(Arc::new(InMemory::new()))
        }
    }
}

/// Open and initialize the credential store
pub async fn open_store(
    config: &BackendConfig,
) -> Result<CredentialStore, Box<dyn std::error::Error>> {
    let store = CredentialStore::new(create_backend(config)?);
    if let Err(e) = store.initialize().await {
        if e.is_corruption() {
            return Err(format!(
                "Stored data in {} is unreadable ({e}); refusing to overwrite it",
                backend_label(config)
            )
            .into());
        }
        return Err(e.into());
    }
    Ok(store)
}
