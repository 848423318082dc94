pub mod config;
pub mod error;
pub mod metrics;
pub mod months;
pub mod plan;
pub mod sources;
pub mod summary;
pub mod tables;
pub mod templates;
pub mod types;

pub use config::AppConfig;
pub use error::{PlannerError, PlannerResult};
pub use metrics::MetricsEngine;
pub use months::Language;
pub use summary::summarize_plan;
pub use tables::LookupTables;
