pub mod chat;

pub use chat::{GenerateRequest, GenerateResponse, QueryRequest, QueryResponse};
