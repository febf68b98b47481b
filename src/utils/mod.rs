pub mod http;

pub use http::{create_client, HttpClient, PageFetcher};
