pub mod clients;
mod provider;

pub use clients::OmdbClient;
pub use provider::MetadataProvider;
#[cfg(test)]
pub use provider::MockMetadataProvider;
