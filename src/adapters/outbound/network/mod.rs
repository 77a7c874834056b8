/// Network adapters for external API calls
mod sysdig_client;

pub use sysdig_client::SysdigClient;
