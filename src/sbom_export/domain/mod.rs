pub mod api_endpoints;
pub mod region;
pub mod runtime_results;
pub mod sbom_entry;
pub mod sbom_id_set;

pub use api_endpoints::ApiEndpoints;
pub use region::Region;
pub use runtime_results::{RuntimeResultEntry, RuntimeResultsPage};
pub use sbom_entry::SbomEntry;
pub use sbom_id_set::SbomIdSet;
