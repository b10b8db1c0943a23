use crate::payment::PaymentGateway;
use crate::payment::error::PaymentError;
use chrono::{DateTime, Duration, FixedOffset};
use kokoro_db::{journal::journal_entry, user};
use kokoro_entity::user::Model as UserModel;
use sea_orm::{ConnectionTrait, DbErr};
use thiserror::Error;
use uuid::Uuid;

/// Entries a user without active premium may hold.
pub const FREE_TIER_ENTRY_LIMIT: u64 = 5;
pub const PREMIUM_PERIOD_DAYS: i64 = 30;

#[derive(Error, Debug)]
pub enum PremiumError {
    #[error("Free tier limit reached. Upgrade to premium.")]
    FreeTierLimitReached,
    #[error("User not found")]
    UserNotFound,
    #[error(transparent)]
    Payment(#[from] PaymentError),
    #[error(transparent)]
    Db(#[from] DbErr),
}

/// Demotes a user whose premium has run out, so the stored flag agrees with
/// [`UserModel::is_premium_active`]. Returns the (possibly updated) user.
pub async fn expire_premium<C: ConnectionTrait>(
    conn: &C,
    user: UserModel,
    now: DateTime<FixedOffset>,
) -> Result<UserModel, DbErr> {
    if user.is_premium && !user.is_premium_active(now) {
        tracing::info!(user = %user.id, expiry = ?user.premium_expiry, "premium expired");
        return user::Mutation::clear_premium(conn, user.id).await;
    }
    Ok(user)
}

/// Fails with [`PremiumError::FreeTierLimitReached`] once a free user holds
/// [`FREE_TIER_ENTRY_LIMIT`] entries.
pub async fn check_free_tier<C: ConnectionTrait>(
    conn: &C,
    user: &UserModel,
    now: DateTime<FixedOffset>,
) -> Result<(), PremiumError> {
    if user.is_premium_active(now) {
        return Ok(());
    }
    let count = journal_entry::Query::count_user_journal_entries(conn, user.id).await?;
    if count >= FREE_TIER_ENTRY_LIMIT {
        tracing::debug!(user = %user.id, count, "free tier limit reached");
        return Err(PremiumError::FreeTierLimitReached);
    }
    Ok(())
}

/// Grants premium for [`PREMIUM_PERIOD_DAYS`] counted from `now`.
pub async fn activate_premium<C: ConnectionTrait>(
    conn: &C,
    user_id: Uuid,
    now: DateTime<FixedOffset>,
) -> Result<UserModel, PremiumError> {
    if user::Query::find_user_by_id(conn, user_id).await?.is_none() {
        return Err(PremiumError::UserNotFound);
    }
    let expiry = now + Duration::days(PREMIUM_PERIOD_DAYS);
    let user = user::Mutation::set_premium(conn, user_id, expiry).await?;
    tracing::info!(user = %user_id, %expiry, "premium activated");
    Ok(user)
}

/// Verifies a checkout with the gateway and upgrades the user named in its metadata.
pub async fn verify_payment<C: ConnectionTrait>(
    conn: &C,
    gateway: &dyn PaymentGateway,
    reference: &str,
    now: DateTime<FixedOffset>,
) -> Result<UserModel, PremiumError> {
    let metadata = gateway.verify(reference).await?;
    activate_premium(conn, metadata.user_id, now).await
}
