/// Domain layer for the SBOM export: regions, endpoints, listing pages,
/// identifier bookkeeping and the pagination policy.
pub mod domain;
pub mod services;
