pub mod clients;
mod provider;
mod service;

pub use clients::StreamingAvailabilityClient;
pub use provider::OfferProvider;
#[cfg(test)]
pub use provider::MockOfferProvider;
pub use service::StreamingService;
