use chrono::Utc;
use sea_orm::DatabaseConnection;
use tokio_cron_scheduler::{Job, JobScheduler};

use crate::server::{data::ban::BanRepository, error::AppError};

/// Starts the ban expiry scheduler.
///
/// Runs every minute and flips `active` temporary bans whose expiration has
/// passed to `expired`. This is a reconciliation sweep for listings and
/// reporting; the active-ban lookup checks timestamps directly and never
/// depends on the sweep having run.
///
/// # Arguments
/// - `db`: Database connection
pub async fn start_scheduler(db: DatabaseConnection) -> Result<(), AppError> {
    let scheduler = JobScheduler::new().await?;

    let job_db = db.clone();

    // Run every minute
    let job = Job::new_async("0 * * * * *", move |_uuid, _lock| {
        let db = job_db.clone();

        Box::pin(async move {
            if let Err(e) = expire_overdue_bans(&db).await {
                tracing::error!("Error expiring overdue bans: {}", e);
            }
        })
    })?;

    scheduler.add(job).await?;
    scheduler.start().await?;

    tracing::info!("Ban expiry scheduler started");

    Ok(())
}

async fn expire_overdue_bans(db: &DatabaseConnection) -> Result<(), AppError> {
    let ban_repo = BanRepository::new(db);
    let expired = ban_repo.expire_overdue(Utc::now()).await?;

    if expired > 0 {
        tracing::info!("Marked {} overdue ban(s) as expired", expired);
    }

    Ok(())
}
