use crate::error::CatalogError;
use anyhow::Result;
use std::path::Path;

/// 路徑必須存在且為資料夾
pub fn validate_directory_exists(path: &Path) -> Result<(), CatalogError> {
    if !path.is_dir() {
        return Err(CatalogError::DirectoryNotFound(path.to_path_buf()));
    }
    Ok(())
}

pub fn ensure_directory_exists(path: &Path) -> Result<()> {
    if !path.exists() {
        std::fs::create_dir_all(path)?;
    }
    Ok(())
}
