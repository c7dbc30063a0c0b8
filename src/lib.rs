pub mod app;
pub mod config;
pub mod dates;
pub mod errors;
pub mod grid;
pub mod handlers;
pub mod models;
pub mod state;
pub mod stats;
pub mod table;
pub mod ui;

pub use app::router;
pub use config::AppConfig;
pub use state::AppState;
pub use table::WeekTable;
