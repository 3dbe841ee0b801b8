pub mod queries;
pub mod routes;

pub use queries::{
    ListOrganismPfamsError, ListOrganismPfamsQuery, ListOrganismPfamsResponse,
    ListOrganismProteinsError, ListOrganismProteinsQuery, ListOrganismProteinsResponse,
    PaginationMetadata, PfamListItem, ProteinListItem,
};

pub use routes::organisms_routes;
