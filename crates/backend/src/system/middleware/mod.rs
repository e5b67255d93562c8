pub mod api_journal;
pub mod latency;
pub mod request_logger;

pub use api_journal::record_api_call;
pub use latency::simulate_latency;
pub use request_logger::request_logger;
