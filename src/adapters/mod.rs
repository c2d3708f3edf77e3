// Adapters layer: concrete implementations for external systems (http, terminal, randomness, files).

pub mod http;
pub mod picker;
pub mod prompt;
pub mod storage;

pub use http::ReqwestTransport;
pub use picker::RandomPicker;
pub use prompt::StdinPrompter;
pub use storage::RecipeFilePersister;
