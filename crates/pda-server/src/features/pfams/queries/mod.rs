pub mod get;

pub use get::{GetPfamError, GetPfamQuery, GetPfamResponse};
