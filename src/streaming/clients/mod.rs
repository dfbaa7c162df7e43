pub mod streaming_availability;

pub use streaming_availability::StreamingAvailabilityClient;
