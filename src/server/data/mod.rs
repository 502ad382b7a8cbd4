//! Database repository layer for all domain entities.
//!
//! Repositories own every query, insert, update, and delete. They work with
//! SeaORM entity models; conversion to domain models happens in the service
//! layer. Listing queries share one pagination helper so the count-then-page
//! behavior is identical for bans and appeals.

pub mod appeal;
pub mod ban;
pub mod user;


use sea_orm::{DatabaseConnection, DbErr, EntityTrait, FromQueryResult, PaginatorTrait, Select};

/// Applies pagination to a filtered, sorted query.
///
/// Counts the total matching records before fetching the requested page.
/// Pages are 1-indexed; page 0 is treated as page 1, and a page past the end
/// returns an empty item list with the real total.
///
/// # Arguments
/// - `query` - Query with filters and sort already applied
/// - `page` - 1-indexed page number
/// - `limit` - Page size
///
/// # Returns
/// - `Ok((items, total))` - Items for the page and the total match count
/// - `Err(DbErr)` - Database error
pub(crate) async fn paginate<E>(
    query: Select<E>,
    db: &DatabaseConnection,
    page: u64,
    limit: u64,
) -> Result<(Vec<E::Model>, u64), DbErr>
where
    E: EntityTrait,
    E::Model: FromQueryResult + Send + Sync,
{
    let paginator = query.paginate(db, limit);
    let total = paginator.num_items().await?;
    let items = paginator.fetch_page(page.saturating_sub(1)).await?;

    Ok((items, total))
}
