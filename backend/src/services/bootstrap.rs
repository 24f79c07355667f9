//! Startup data initializer
//!
//! Ensures the admin account and the default task statuses and labels exist.
//! Safe to run on every start.

use sqlx::PgPool;

use crate::config::BootstrapConfig;
use crate::error::AppResult;
use crate::models::{default_labels, default_task_statuses};
use crate::services::auth::hash_password;
use shared::normalize_email;

/// Counts of rows inserted by one bootstrap run
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct BootstrapReport {
    pub users: u64,
    pub task_statuses: u64,
    pub labels: u64,
}

pub struct BootstrapService {
    db: PgPool,
}

impl BootstrapService {
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }

    /// Insert whatever part of the seed data is missing
    pub async fn run(&self, config: &BootstrapConfig) -> AppResult<BootstrapReport> {
        let mut report = BootstrapReport::default();
        let mut tx = self.db.begin().await?;

        let email = normalize_email(&config.admin_email);
        let admin_exists = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM users WHERE email = $1")
            .bind(&email)
            .fetch_one(&mut *tx)
            .await?
            > 0;

        if !admin_exists {
            let password_hash = hash_password(&config.admin_password)?;
            report.users = sqlx::query(
                r#"
                INSERT INTO users (email, first_name, last_name, password_hash)
                VALUES ($1, $2, $3, $4)
                ON CONFLICT (email) DO NOTHING
                "#,
            )
            .bind(&email)
            .bind(&config.admin_first_name)
            .bind(&config.admin_last_name)
            .bind(&password_hash)
            .execute(&mut *tx)
            .await?
            .rows_affected();
        }

        for (slug, name) in default_task_statuses() {
            report.task_statuses += sqlx::query(
                "INSERT INTO task_statuses (name, slug) VALUES ($1, $2) ON CONFLICT DO NOTHING",
            )
            .bind(name)
            .bind(slug)
            .execute(&mut *tx)
            .await?
            .rows_affected();
        }

        for name in default_labels() {
            report.labels += sqlx::query("INSERT INTO labels (name) VALUES ($1) ON CONFLICT DO NOTHING")
                .bind(name)
                .execute(&mut *tx)
                .await?
                .rows_affected();
        }

        tx.commit().await?;

        tracing::info!(
            users = report.users,
            task_statuses = report.task_statuses,
            labels = report.labels,
            "Bootstrap data ensured"
        );

        Ok(report)
    }
}
