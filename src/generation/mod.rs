pub mod http;
pub mod service;
pub mod types;

pub use http::HttpGenerationService;
pub use service::{GenerationService, ServiceError};
pub use types::{FAILURE_MESSAGE, GenerationPayload, GenerationRequest, GenerationResult};
