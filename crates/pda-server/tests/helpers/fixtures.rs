//! Test fixtures and data builders for PDA server tests
//!
//! This module provides reusable test data builders for creating organisms,
//! proteins, Pfam domains and annotations with minimal boilerplate.

use sqlx::PgPool;
use uuid::Uuid;

// ============================================================================
// Organism Fixtures
// ============================================================================

/// Builder for creating test organisms with fluent API
#[derive(Debug, Clone)]
pub struct OrganismFixture {
    taxa_id: i32,
    clade: Option<String>,
    genus: Option<String>,
    species: Option<String>,
}

impl OrganismFixture {
    /// Create a new organism fixture with required fields
    pub fn new(taxa_id: i32) -> Self {
        Self {
            taxa_id,
            clade: None,
            genus: None,
            species: None,
        }
    }

    /// Set the clade letter
    pub fn with_clade(mut self, clade: impl Into<String>) -> Self {
        self.clade = Some(clade.into());
        self
    }

    /// Set the genus
    pub fn with_genus(mut self, genus: impl Into<String>) -> Self {
        self.genus = Some(genus.into());
        self
    }

    /// Set the species epithet
    pub fn with_species(mut self, species: impl Into<String>) -> Self {
        self.species = Some(species.into());
        self
    }

    /// Create the organism in the database and return its ID
    pub async fn create(self, pool: &PgPool) -> sqlx::Result<Uuid> {
        sqlx::query_scalar::<_, Uuid>(
            r#"
            INSERT INTO organisms (taxa_id, clade, genus, species)
            VALUES ($1, $2, $3, $4)
            RETURNING id
            "#,
        )
        .bind(self.taxa_id)
        .bind(self.clade)
        .bind(self.genus)
        .bind(self.species)
        .fetch_one(pool)
        .await
    }
}

// ============================================================================
// Pfam Fixtures
// ============================================================================

/// Builder for creating test Pfam domain records
#[derive(Debug, Clone)]
pub struct PfamFixture {
    domain_id: String,
    domain_description: String,
}

impl PfamFixture {
    /// Create a new Pfam fixture with required fields
    pub fn new(domain_id: impl Into<String>, domain_description: impl Into<String>) -> Self {
        Self {
            domain_id: domain_id.into(),
            domain_description: domain_description.into(),
        }
    }

    /// The Kunitz domain used throughout the reference data set
    pub fn kunitz() -> Self {
        Self::new("PF00014", "Kunitz/Bovinepancreatictrypsininhibitordomain")
    }

    /// Create the Pfam record in the database and return its ID
    pub async fn create(self, pool: &PgPool) -> sqlx::Result<Uuid> {
        sqlx::query_scalar::<_, Uuid>(
            r#"
            INSERT INTO pfams (domain_id, domain_description)
            VALUES ($1, $2)
            RETURNING id
            "#,
        )
        .bind(self.domain_id)
        .bind(self.domain_description)
        .fetch_one(pool)
        .await
    }
}

// ============================================================================
// Protein Fixtures
// ============================================================================

/// Builder for creating test proteins
#[derive(Debug, Clone)]
pub struct ProteinFixture {
    protein_id: String,
    sequence: String,
    organism_id: Uuid,
    sequence_checksum: Option<String>,
}

impl ProteinFixture {
    /// Create a new protein fixture with required fields
    pub fn new(protein_id: impl Into<String>, sequence: impl Into<String>, organism_id: Uuid) -> Self {
        Self {
            protein_id: protein_id.into(),
            sequence: sequence.into(),
            organism_id,
            sequence_checksum: None,
        }
    }

    /// Set the sequence checksum
    pub fn with_checksum(mut self, checksum: impl Into<String>) -> Self {
        self.sequence_checksum = Some(checksum.into());
        self
    }

    /// Create the protein in the database and return its ID
    ///
    /// `length` is a generated column and must not be supplied.
    pub async fn create(self, pool: &PgPool) -> sqlx::Result<Uuid> {
        sqlx::query_scalar::<_, Uuid>(
            r#"
            INSERT INTO proteins (protein_id, sequence, organism_id, sequence_checksum)
            VALUES ($1, $2, $3, $4)
            RETURNING id
            "#,
        )
        .bind(self.protein_id)
        .bind(self.sequence)
        .bind(self.organism_id)
        .bind(self.sequence_checksum)
        .fetch_one(pool)
        .await
    }
}

// ============================================================================
// Protein Domain Fixtures
// ============================================================================

/// Builder for creating test domain annotations
#[derive(Debug, Clone)]
pub struct ProteinDomainFixture {
    protein_id: Uuid,
    pfam_id: Uuid,
    description: String,
    start: i32,
    stop: i32,
}

impl ProteinDomainFixture {
    /// Create a new annotation fixture with required fields
    pub fn new(protein_id: Uuid, pfam_id: Uuid, start: i32, stop: i32) -> Self {
        Self {
            protein_id,
            pfam_id,
            description: "domain annotation".to_string(),
            start,
            stop,
        }
    }

    /// Set the annotation description
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Create the annotation in the database and return its ID
    pub async fn create(self, pool: &PgPool) -> sqlx::Result<Uuid> {
        sqlx::query_scalar::<_, Uuid>(
            r#"
            INSERT INTO protein_domains (protein_id, pfam_id, description, start, stop)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id
            "#,
        )
        .bind(self.protein_id)
        .bind(self.pfam_id)
        .bind(self.description)
        .bind(self.start)
        .bind(self.stop)
        .fetch_one(pool)
        .await
    }
}
