pub use mediator::DefaultAsyncMediator;
use sqlx::PgPool;

pub type AppMediator = DefaultAsyncMediator;

pub fn build_mediator(pool: PgPool) -> AppMediator {
    DefaultAsyncMediator::builder()
        // Pfams
        .add_handler({
            let pool = pool.clone();
            move |query| {
                let pool = pool.clone();
                async move { crate::features::pfams::queries::get::handle(pool, query).await }
            }
        })
        // Proteins
        .add_handler({
            let pool = pool.clone();
            move |query| {
                let pool = pool.clone();
                async move { crate::features::proteins::queries::get::handle(pool, query).await }
            }
        })
        // Organisms
        .add_handler({
            let pool = pool.clone();
            move |query| {
                let pool = pool.clone();
                async move {
                    crate::features::organisms::queries::list_proteins::handle(pool, query).await
                }
            }
        })
        .add_handler({
            let pool = pool.clone();
            move |query| {
                let pool = pool.clone();
                async move {
                    crate::features::organisms::queries::list_pfams::handle(pool, query).await
                }
            }
        })
        .build()
}
