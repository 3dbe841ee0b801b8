//! API integration tests for the PDA server
//!
//! These tests verify the REST endpoints, response shapes, error envelopes
//! and method handling. Requests are run through the full router so the
//! middleware stack is exercised as well.
//!
//! Coverage includes:
//! - Pfam and protein detail lookups
//! - Organism-scoped listings with pagination
//! - Error cases (400, 404, 405)
//! - Health endpoint

use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use serde_json::{json, Value};
use sqlx::PgPool;
use tower::ServiceExt;

mod helpers;

use helpers::{OrganismFixture, PfamFixture, ProteinDomainFixture, ProteinFixture, TestApp};

// ============================================================================
// Helper Functions
// ============================================================================

/// Send a GET request and return the status with the parsed JSON body
async fn get_json(app: &Router, uri: &str) -> (StatusCode, Value) {
    let response = app
        .clone()
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();

    let status = response.status();
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let value = serde_json::from_slice(&body).unwrap_or(Value::Null);

    (status, value)
}

/// Send a bodyless request with the given method and return the status
async fn request_status(app: &Router, method: &str, uri: &str) -> StatusCode {
    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method(method)
                .uri(uri)
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    response.status()
}

// ============================================================================
// Pfam Endpoint Tests
// ============================================================================

#[sqlx::test(migrations = "../../migrations")]
async fn test_get_pfam_returns_exact_record(pool: PgPool) -> sqlx::Result<()> {
    PfamFixture::new("CoiledCoil", "coil prediction")
        .create(&pool)
        .await?;
    PfamFixture::kunitz().create(&pool).await?;

    let app = TestApp::new(pool);
    let (status, body) = get_json(&app.router, "/api/v1/pfams/PF00014").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({
            "domain_id": "PF00014",
            "domain_description": "Kunitz/Bovinepancreatictrypsininhibitordomain"
        })
    );
    Ok(())
}

#[sqlx::test(migrations = "../../migrations")]
async fn test_get_pfam_unknown_returns_404(pool: PgPool) -> sqlx::Result<()> {
    PfamFixture::kunitz().create(&pool).await?;

    let app = TestApp::new(pool);
    let (status, body) = get_json(&app.router, "/api/v1/pfams/XXXXXX").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["success"], false);
    assert_eq!(body["error"]["code"], "NOT_FOUND");
    Ok(())
}

#[sqlx::test(migrations = "../../migrations")]
async fn test_pfam_detail_rejects_write_methods(pool: PgPool) -> sqlx::Result<()> {
    PfamFixture::kunitz().create(&pool).await?;

    let app = TestApp::new(pool);
    for method in ["POST", "PUT", "PATCH", "DELETE"] {
        let status = request_status(&app.router, method, "/api/v1/pfams/PF00014").await;
        assert_eq!(
            status,
            StatusCode::METHOD_NOT_ALLOWED,
            "{} should not be allowed",
            method
        );
    }
    Ok(())
}

#[sqlx::test(migrations = "../../migrations")]
async fn test_pfam_detail_is_json(pool: PgPool) -> sqlx::Result<()> {
    PfamFixture::kunitz().create(&pool).await?;

    let app = TestApp::new(pool);
    let response = app
        .router
        .clone()
        .oneshot(
            Request::builder()
                .uri("/api/v1/pfams/PF00014")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    let content_type = response
        .headers()
        .get("content-type")
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_string();
    assert!(content_type.starts_with("application/json"));
    Ok(())
}

// ============================================================================
// Protein Endpoint Tests
// ============================================================================

#[sqlx::test(migrations = "../../migrations")]
async fn test_get_protein_returns_nested_document(pool: PgPool) -> sqlx::Result<()> {
    let organism_id = OrganismFixture::new(53326)
        .with_clade("E")
        .with_genus("Ancylostoma")
        .with_species("ceylanicum")
        .create(&pool)
        .await?;
    let sequence = "MVIGVGFLLVLFSSSVLGILNAGVQLRIEELF";
    let protein_pk = ProteinFixture::new("A0A016S8J7", sequence, organism_id)
        .create(&pool)
        .await?;
    let kunitz = PfamFixture::kunitz().create(&pool).await?;
    let coil = PfamFixture::new("CoiledCoil", "coil prediction")
        .create(&pool)
        .await?;
    ProteinDomainFixture::new(protein_pk, coil, 120, 180)
        .with_description("coiled region")
        .create(&pool)
        .await?;
    ProteinDomainFixture::new(protein_pk, kunitz, 40, 94)
        .with_description("Kunitz domain")
        .create(&pool)
        .await?;

    let app = TestApp::new(pool);
    let (status, body) = get_json(&app.router, "/api/v1/proteins/A0A016S8J7").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["protein_id"], "A0A016S8J7");
    assert_eq!(body["sequence"], sequence);
    assert_eq!(body["length"], sequence.chars().count() as i64);
    assert_eq!(body["taxonomy"]["taxa_id"], 53326);
    assert_eq!(body["taxonomy"]["genus"], "Ancylostoma");

    let mut keys: Vec<&str> = body.as_object().unwrap().keys().map(String::as_str).collect();
    keys.sort_unstable();
    assert_eq!(keys, ["domains", "length", "protein_id", "sequence", "taxonomy"]);

    let domains = body["domains"].as_array().unwrap();
    assert_eq!(domains.len(), 2);
    // Ordered by (start, stop)
    assert_eq!(domains[0]["start"], 40);
    assert_eq!(domains[0]["pfam_id"]["domain_id"], "PF00014");
    assert_eq!(
        domains[0]["pfam_id"]["domain_description"],
        "Kunitz/Bovinepancreatictrypsininhibitordomain"
    );
    assert_eq!(domains[0]["description"], "Kunitz domain");
    assert_eq!(domains[1]["start"], 120);
    assert_eq!(domains[1]["pfam_id"]["domain_id"], "CoiledCoil");

    let mut domain_keys: Vec<&str> = domains[0]
        .as_object()
        .unwrap()
        .keys()
        .map(String::as_str)
        .collect();
    domain_keys.sort_unstable();
    assert_eq!(domain_keys, ["description", "pfam_id", "start", "stop"]);
    Ok(())
}

#[sqlx::test(migrations = "../../migrations")]
async fn test_get_protein_without_annotations(pool: PgPool) -> sqlx::Result<()> {
    let organism_id = OrganismFixture::new(55661).create(&pool).await?;
    ProteinFixture::new("A0A091FOE3", "MKTAY", organism_id)
        .create(&pool)
        .await?;

    let app = TestApp::new(pool);
    let (status, body) = get_json(&app.router, "/api/v1/proteins/A0A091FOE3").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["length"], 5);
    assert_eq!(body["domains"], json!([]));
    Ok(())
}

#[sqlx::test(migrations = "../../migrations")]
async fn test_get_protein_unknown_returns_404(pool: PgPool) -> sqlx::Result<()> {
    let app = TestApp::new(pool);
    let (status, body) = get_json(&app.router, "/api/v1/proteins/Q9Y2X7").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["success"], false);
    assert_eq!(body["error"]["code"], "NOT_FOUND");
    Ok(())
}

#[sqlx::test(migrations = "../../migrations")]
async fn test_protein_detail_rejects_write_methods(pool: PgPool) -> sqlx::Result<()> {
    let organism_id = OrganismFixture::new(53326).create(&pool).await?;
    ProteinFixture::new("A0A016S8J7", "MKT", organism_id)
        .create(&pool)
        .await?;

    let app = TestApp::new(pool);
    for method in ["POST", "PUT", "PATCH", "DELETE"] {
        let status = request_status(&app.router, method, "/api/v1/proteins/A0A016S8J7").await;
        assert_eq!(
            status,
            StatusCode::METHOD_NOT_ALLOWED,
            "{} should not be allowed",
            method
        );
    }
    Ok(())
}

// ============================================================================
// Organism Listing Tests
// ============================================================================

#[sqlx::test(migrations = "../../migrations")]
async fn test_list_organism_proteins(pool: PgPool) -> sqlx::Result<()> {
    let organism_id = OrganismFixture::new(53326).create(&pool).await?;
    let other_id = OrganismFixture::new(55661).create(&pool).await?;
    ProteinFixture::new("A0A016S8J7", "MVIGV", organism_id)
        .create(&pool)
        .await?;
    ProteinFixture::new("A0A091FOE3", "MKT", organism_id)
        .create(&pool)
        .await?;
    ProteinFixture::new("Q9Y2X7", "MAAA", other_id).create(&pool).await?;

    let app = TestApp::new(pool);
    let (status, body) = get_json(&app.router, "/api/v1/organisms/53326/proteins").await;

    assert_eq!(status, StatusCode::OK);
    let items = body["items"].as_array().unwrap();
    assert_eq!(items.len(), 2);
    assert_eq!(items[0]["protein_id"], "A0A016S8J7");
    assert_eq!(items[0]["length"], 5);
    assert_eq!(body["pagination"]["total"], 2);
    assert_eq!(body["pagination"]["page"], 1);
    Ok(())
}

#[sqlx::test(migrations = "../../migrations")]
async fn test_list_organism_proteins_paginates(pool: PgPool) -> sqlx::Result<()> {
    let organism_id = OrganismFixture::new(53326).create(&pool).await?;
    for i in 1..=5 {
        ProteinFixture::new(format!("P{:05}", i), "MKT", organism_id)
            .create(&pool)
            .await?;
    }

    let app = TestApp::new(pool);
    let (status, body) =
        get_json(&app.router, "/api/v1/organisms/53326/proteins?page=2&per_page=2").await;

    assert_eq!(status, StatusCode::OK);
    let items = body["items"].as_array().unwrap();
    assert_eq!(items.len(), 2);
    assert_eq!(items[0]["protein_id"], "P00003");
    assert_eq!(body["pagination"]["pages"], 3);
    assert_eq!(body["pagination"]["has_next"], true);
    assert_eq!(body["pagination"]["has_prev"], true);
    Ok(())
}

#[sqlx::test(migrations = "../../migrations")]
async fn test_list_organism_pfams_is_distinct(pool: PgPool) -> sqlx::Result<()> {
    let organism_id = OrganismFixture::new(53326).create(&pool).await?;
    let protein_a = ProteinFixture::new("A0A016S8J7", "MVIGV", organism_id)
        .create(&pool)
        .await?;
    let protein_b = ProteinFixture::new("A0A091FOE3", "MKT", organism_id)
        .create(&pool)
        .await?;
    let kunitz = PfamFixture::kunitz().create(&pool).await?;
    ProteinDomainFixture::new(protein_a, kunitz, 40, 94)
        .create(&pool)
        .await?;
    ProteinDomainFixture::new(protein_b, kunitz, 1, 3).create(&pool).await?;

    let app = TestApp::new(pool);
    let (status, body) = get_json(&app.router, "/api/v1/organisms/53326/pfams").await;

    assert_eq!(status, StatusCode::OK);
    let items = body["items"].as_array().unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0]["domain_id"], "PF00014");
    assert_eq!(
        items[0]["domain_description"],
        "Kunitz/Bovinepancreatictrypsininhibitordomain"
    );
    assert_eq!(body["pagination"]["total"], 1);
    Ok(())
}

#[sqlx::test(migrations = "../../migrations")]
async fn test_unknown_organism_returns_404(pool: PgPool) -> sqlx::Result<()> {
    let app = TestApp::new(pool);

    let (status, body) = get_json(&app.router, "/api/v1/organisms/99999/proteins").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"]["code"], "NOT_FOUND");

    let (status, body) = get_json(&app.router, "/api/v1/organisms/99999/pfams").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"]["code"], "NOT_FOUND");
    Ok(())
}

#[sqlx::test(migrations = "../../migrations")]
async fn test_organism_listing_rejects_write_methods(pool: PgPool) -> sqlx::Result<()> {
    OrganismFixture::new(53326).create(&pool).await?;

    let app = TestApp::new(pool);
    for method in ["POST", "PUT", "PATCH", "DELETE"] {
        let status = request_status(&app.router, method, "/api/v1/organisms/53326/proteins").await;
        assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
    }
    Ok(())
}

#[sqlx::test(migrations = "../../migrations")]
async fn test_invalid_pagination_returns_400(pool: PgPool) -> sqlx::Result<()> {
    OrganismFixture::new(53326).create(&pool).await?;

    let app = TestApp::new(pool);
    let (status, body) =
        get_json(&app.router, "/api/v1/organisms/53326/proteins?per_page=500").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["success"], false);
    assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
    Ok(())
}

#[sqlx::test(migrations = "../../migrations")]
async fn test_non_numeric_taxa_id_is_rejected(pool: PgPool) -> sqlx::Result<()> {
    let app = TestApp::new(pool);
    let status = request_status(&app.router, "GET", "/api/v1/organisms/rotaria/proteins").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    Ok(())
}

// ============================================================================
// Health Endpoint Tests
// ============================================================================

#[sqlx::test(migrations = "../../migrations")]
async fn test_health_endpoint(pool: PgPool) -> sqlx::Result<()> {
    let app = TestApp::new(pool);
    let (status, body) = get_json(&app.router, "/health").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({
            "status": "healthy",
            "database": "connected"
        })
    );
    Ok(())
}

#[sqlx::test(migrations = "../../migrations")]
async fn test_unknown_route_returns_404(pool: PgPool) -> sqlx::Result<()> {
    let app = TestApp::new(pool);
    let status = request_status(&app.router, "GET", "/api/v1/nonexistent").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    Ok(())
}
