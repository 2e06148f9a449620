pub mod aggregate;
pub mod app;
pub mod errors;
pub mod handlers;
pub mod models;
pub mod source;
pub mod state;
pub mod ui;

pub use app::router;
pub use source::DataSource;
pub use state::AppState;
