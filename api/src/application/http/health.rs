pub mod handlers;
pub mod router;

pub use router::{HealthApiDoc, health_routes};
