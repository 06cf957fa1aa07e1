pub mod agency;
pub mod gtfs;
pub mod pipeline;
pub mod shared;

pub mod prelude {
    pub use crate::agency::{AgencyPolicy, FeedViolation, RouteType, ets_lrt::EtsLrt};
    pub use crate::gtfs::GtfsReader;
    pub use crate::pipeline::Pipeline;
}
