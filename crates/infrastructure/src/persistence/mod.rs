//! File system persistence: the collection store and user settings.

mod collection_store;
mod file_system;
mod settings_repository;

pub use collection_store::FileSystemCollectionStore;
pub use file_system::StdFileSystem;
pub use settings_repository::{SettingsError, SettingsRepository};
