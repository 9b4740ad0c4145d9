pub mod engine;
pub mod report;
pub mod router;
pub mod taxonomy;

pub use engine::{Recommendation, RecommendationEngine, SellerProfile};
pub use report::RecommendationView;
pub use router::recommendation_router;
pub use taxonomy::{Condition, Involvement, ServiceTier, TaxonomyError, Timeline};
