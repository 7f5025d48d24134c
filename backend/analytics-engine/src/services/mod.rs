pub mod analytics_service;
pub mod assemblers;
pub mod breakdown;
pub mod fallback;
pub mod http_source;
pub mod source;

pub use analytics_service::AnalyticsService;
pub use http_source::HttpAnalyticsSource;
pub use source::AnalyticsSource;
