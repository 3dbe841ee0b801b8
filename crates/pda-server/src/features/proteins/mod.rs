pub mod queries;
pub mod routes;

pub use queries::{
    DomainAnnotation, GetProteinError, GetProteinQuery, GetProteinResponse, PfamInfo, TaxonomyInfo,
};

pub use routes::proteins_routes;
