use bytes::Bytes;
use object_store::{ObjectStore, local::LocalFileSystem, memory::InMemory, path::Path};
use std::sync::Arc;

use crate::errors::CatalogError;

/// Prefix under which every cover object is stored.
pub const COVER_PREFIX: &str = "covers";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CoverFormat {
    Jpeg,
    Png,
}

impl CoverFormat {
    pub fn extension(self) -> &'static str {
        match self {
            CoverFormat::Jpeg => "jpg",
            CoverFormat::Png => "png",
        }
    }
}

/// Binary storage for cover images, addressed by generated filenames.
#[derive(Clone, Debug)]
pub struct CoverStorage {
    store: Arc<dyn ObjectStore>,
}

impl CoverStorage {
    /// Stores covers on the local filesystem below `media_root`.
    pub fn new_local(media_root: &str) -> Result<Self, CatalogError> {
        std::fs::create_dir_all(media_root)?;
        tracing::debug!("Cover storage rooted at {media_root}");
        let store = LocalFileSystem::new_with_prefix(media_root)?;
        Ok(Self {
            store: Arc::new(store),
        })
    }

    pub fn new_in_memory() -> Self {
        Self {
            store: Arc::new(InMemory::new()),
        }
    }

    /// Writes a cover and returns its storage path, e.g. `covers/<filename>`.
    /// An existing object with the same name is overwritten.
    pub async fn store_cover(&self, filename: &str, content: Bytes) -> Result<String, CatalogError> {
        if filename.is_empty() || filename.contains('/') {
            return Err(CatalogError::InvalidInput(format!(
                "Invalid cover filename: {filename:?}"
            )));
        }

        let path = Path::from(format!("{COVER_PREFIX}/{filename}"));
        self.store.put(&path, content.into()).await?;

        Ok(path.to_string())
    }

    pub async fn get_cover(&self, cover_path: &str) -> Result<Bytes, CatalogError> {
        let path = Path::from(cover_path);
        let result = self.store.get(&path).await?;
        let bytes = result.bytes().await?;
        Ok(bytes)
    }

    pub async fn exists(&self, cover_path: &str) -> Result<bool, CatalogError> {
        match self.store.head(&Path::from(cover_path)).await {
            Ok(_) => Ok(true),
            Err(object_store::Error::NotFound { .. }) => Ok(false),
            Err(e) => Err(e.into()),
        }
    }

    /// Removes a stored cover. A missing object surfaces as
    /// [`CatalogError::NotFound`] on backends that report it.
    pub async fn delete_cover(&self, cover_path: &str) -> Result<(), CatalogError> {
        self.store.delete(&Path::from(cover_path)).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_store_and_delete_in_memory() {
        let storage = CoverStorage::new_in_memory();
        let path = storage
            .store_cover("9789750719387_cover.jpg", Bytes::from_static(b"jpeg"))
            .await
            .unwrap();

        assert_eq!(path, "covers/9789750719387_cover.jpg");
        assert_eq!(storage.get_cover(&path).await.unwrap(), Bytes::from_static(b"jpeg"));

        storage.delete_cover(&path).await.unwrap();
        assert!(!storage.exists(&path).await.unwrap());
    }

    #[tokio::test]
    async fn test_store_overwrites_same_name() {
        let storage = CoverStorage::new_in_memory();
        storage
            .store_cover("a.jpg", Bytes::from_static(b"one"))
            .await
            .unwrap();
        let path = storage
            .store_cover("a.jpg", Bytes::from_static(b"two"))
            .await
            .unwrap();
        assert_eq!(storage.get_cover(&path).await.unwrap(), Bytes::from_static(b"two"));
    }

    #[tokio::test]
    async fn test_rejects_nested_filename() {
        let storage = CoverStorage::new_in_memory();
        let result = storage
            .store_cover("../escape.jpg", Bytes::from_static(b"x"))
            .await;
        assert!(matches!(result, Err(CatalogError::InvalidInput(_))));
    }

    #[tokio::test]
    async fn test_local_filesystem_layout() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path().join("media");
        let storage = CoverStorage::new_local(root.to_str().unwrap()).unwrap();

        let path = storage
            .store_cover("cover.png", Bytes::from_static(b"png"))
            .await
            .unwrap();

        let on_disk = root.join("covers").join("cover.png");
        assert_eq!(std::fs::read(&on_disk).unwrap(), b"png");

        storage.delete_cover(&path).await.unwrap();
        assert!(!on_disk.exists());
        assert!(matches!(
            storage.delete_cover(&path).await,
            Err(CatalogError::NotFound)
        ));
    }
}
