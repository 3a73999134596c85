use async_trait::async_trait;
use sqlx::postgres::{PgPool, PgPoolOptions};
use tracing::debug;

/// Values persisted for one completed exchange. `id` and `created_at` are
/// assigned by the store at insertion time.
#[derive(Debug, Clone)]
pub struct NewTranslation {
    pub message: String,
    pub language: Option<String>,
    pub model: Option<String>,
    pub corrected_text: String,
    pub translated_text: String,
}

/// Durable store for translation records
#[async_trait]
pub trait TranslationStore: Send + Sync {
    /// Create the translations table if it does not exist yet.
    /// Safe to call on every process start.
    async fn ensure_schema(&self) -> Result<(), anyhow::Error>;

    /// Insert one record, returning its assigned id.
    async fn insert(&self, record: NewTranslation) -> Result<i64, anyhow::Error>;
}

pub struct PgTranslationStore {
    pool: PgPool,
}

impl PgTranslationStore {
    /// The pool connects lazily, so an unreachable database does not block
    /// startup; later queries fail individually instead.
    pub fn connect(database_url: &str) -> Result<Self, anyhow::Error> {
        let pool = PgPoolOptions::new()
            .max_connections(5)
            .connect_lazy(database_url)?;
        Ok(Self { pool })
    }
}

#[async_trait]
impl TranslationStore for PgTranslationStore {
    async fn ensure_schema(&self) -> Result<(), anyhow::Error> {
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS translations (
                id SERIAL PRIMARY KEY,
                message TEXT,
                language VARCHAR(50),
                model VARCHAR(50),
                corrected_text TEXT,
                translated_text TEXT,
                created_at TIMESTAMP DEFAULT CURRENT_TIMESTAMP
            )
            "#,
        )
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    async fn insert(&self, record: NewTranslation) -> Result<i64, anyhow::Error> {
        let id: i32 = sqlx::query_scalar(
            r#"
            INSERT INTO translations (message, language, model, corrected_text, translated_text)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id
            "#,
        )
        .bind(&record.message)
        .bind(&record.language)
        .bind(&record.model)
        .bind(&record.corrected_text)
        .bind(&record.translated_text)
        .fetch_one(&self.pool)
        .await?;

        debug!("Stored translation record id={}", id);
        Ok(i64::from(id))
    }
}
