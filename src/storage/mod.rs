use crate::AppSettings;

#[cfg(not(target_arch = "wasm32"))]
mod file_storage;

#[cfg(not(target_arch = "wasm32"))]
pub use file_storage::FileStorage;

#[cfg(not(target_arch = "wasm32"))]
pub async fn get_storage() -> anyhow::Result<FileStorage> {
    use std::path::PathBuf;
    use directories_next::ProjectDirs;

    let base = if let Some(proj_dirs) = ProjectDirs::from("com", "Jetpack", "chipgroups") {
        proj_dirs.config_dir().to_path_buf()
    } else {
        PathBuf::from(".")
    };
    Ok(FileStorage::new(base))
}

/// Settings from the platform config dir, or the defaults when none exist.
#[cfg(not(target_arch = "wasm32"))]
pub async fn load_settings() -> anyhow::Result<AppSettings> {
    let storage = get_storage().await?;
    Ok(storage.load_settings().await?.unwrap_or_default())
}

#[cfg(target_arch = "wasm32")]
pub async fn load_settings() -> anyhow::Result<AppSettings> {
    Ok(AppSettings::default())
}
