mod scripts;
mod selector;
mod settings;
mod store;

pub use scripts::ScriptTemplates;
pub use selector::{WorkerVariant, select_worker_variant};
pub use settings::PwaSettings;
pub use store::PwaStore;
