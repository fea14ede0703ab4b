// Persistence layer: current-resume slot, template collection, debounced auto-save,
// and JSON export/import. Storage backends sit behind `KeyValueStore`.

pub mod autosave;
pub mod file_store;
pub mod handlers;
pub mod redis_store;
pub mod repository;
pub mod store;
pub mod transfer;

pub use autosave::AutoSaver;
pub use repository::ResumeRepository;
pub use store::KeyValueStore;
