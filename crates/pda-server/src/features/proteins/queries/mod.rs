pub mod get;

pub use get::{
    DomainAnnotation, GetProteinError, GetProteinQuery, GetProteinResponse, PfamInfo, TaxonomyInfo,
};
