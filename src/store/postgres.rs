use async_trait::async_trait;
use sqlx::{FromRow, PgPool};

use super::Store;
use crate::error::AppError;
use crate::models::{
    Booking, Employee, Media, NewsItem, PageBlock, PageKey, Quest, Review, Table, User,
};

/// Embedded schema migrations from `migrations/`.
pub static MIGRATOR: sqlx::migrate::Migrator = sqlx::migrate!();

/// [`Store`] backed by a PostgreSQL pool.
#[derive(Clone)]
pub struct PostgresStore {
    pool: PgPool,
}

#[derive(FromRow)]
struct MediaRow {
    block_id: i32,
    id: i32,
    url: String,
    alt: String,
}

impl PostgresStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn migrate(&self) -> Result<(), sqlx::migrate::MigrateError> {
        MIGRATOR.run(&self.pool).await
    }
}

#[async_trait]
impl Store for PostgresStore {
    async fn ping(&self) -> Result<(), AppError> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }

    async fn find_employee_by_email(&self, email: &str) -> Result<Option<Employee>, AppError> {
        let employee = sqlx::query_as::<_, Employee>(
            "SELECT id, email, full_name, password_hash, role, is_active, created_at, updated_at
             FROM employees WHERE email = $1",
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await?;

        Ok(employee)
    }

    async fn find_bookings(&self) -> Result<Vec<Booking>, AppError> {
        let bookings = sqlx::query_as::<_, Booking>(
            "SELECT id, user_id, quest_id, booking_type, date, time, guests_count, status,
                    total_price, comment, created_at
             FROM bookings ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(bookings)
    }

    async fn find_quests(&self) -> Result<Vec<Quest>, AppError> {
        let quests = sqlx::query_as::<_, Quest>(
            "SELECT id, title, description, duration, min_players, max_players, difficulty,
                    price, is_active
             FROM quests ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(quests)
    }

    async fn find_quest(&self, id: i32) -> Result<Option<Quest>, AppError> {
        let quest = sqlx::query_as::<_, Quest>(
            "SELECT id, title, description, duration, min_players, max_players, difficulty,
                    price, is_active
             FROM quests WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(quest)
    }

    async fn find_users(&self) -> Result<Vec<User>, AppError> {
        let users = sqlx::query_as::<_, User>(
            "SELECT id, email, name, role, created_at, updated_at FROM users ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(users)
    }

    async fn find_tables(&self) -> Result<Vec<Table>, AppError> {
        let tables = sqlx::query_as::<_, Table>(
            "SELECT id, number, capacity, location, is_active FROM cafe_tables ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(tables)
    }

    async fn find_news(&self) -> Result<Vec<NewsItem>, AppError> {
        let news = sqlx::query_as::<_, NewsItem>(
            "SELECT id, title, content, image_url, published_at, is_published
             FROM news ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(news)
    }

    async fn find_reviews(&self) -> Result<Vec<Review>, AppError> {
        let reviews = sqlx::query_as::<_, Review>(
            "SELECT id, user_name, rating, text, quest_id, is_approved, created_at
             FROM reviews ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(reviews)
    }

    async fn find_page_blocks(&self, page: PageKey) -> Result<Vec<PageBlock>, AppError> {
        let mut blocks = sqlx::query_as::<_, PageBlock>(
            "SELECT id, title, content FROM page_blocks
             WHERE page_key = $1 ORDER BY position, id",
        )
        .bind(page.as_str())
        .fetch_all(&self.pool)
        .await?;

        if blocks.is_empty() {
            return Ok(blocks);
        }

        let block_ids: Vec<i32> = blocks.iter().map(|block| block.id).collect();
        let media = sqlx::query_as::<_, MediaRow>(
            "SELECT block_id, id, url, alt FROM page_block_media
             WHERE block_id = ANY($1) ORDER BY position, id",
        )
        .bind(&block_ids)
        .fetch_all(&self.pool)
        .await?;

        for row in media {
            if let Some(block) = blocks.iter_mut().find(|block| block.id == row.block_id) {
                block.media.push(Media {
                    id: row.id,
                    url: row.url,
                    alt: row.alt,
                });
            }
        }

        Ok(blocks)
    }
}
