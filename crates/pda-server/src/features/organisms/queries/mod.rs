pub mod list_pfams;
pub mod list_proteins;

pub use list_pfams::{
    ListOrganismPfamsError, ListOrganismPfamsQuery, ListOrganismPfamsResponse, PfamListItem,
};
pub use list_proteins::{
    ListOrganismProteinsError, ListOrganismProteinsQuery, ListOrganismProteinsResponse,
    ProteinListItem,
};
// Re-export from shared module to avoid privacy issues
pub use crate::features::shared::pagination::PaginationMetadata;
