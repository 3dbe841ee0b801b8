pub mod queries;
pub mod routes;

pub use queries::{GetPfamError, GetPfamQuery, GetPfamResponse};

pub use routes::pfams_routes;
