// src/common/migrations.rs
//! Database migration and schema management

use sqlx::SqlitePool;
use std::env;
use tracing::{info, warn};

/// Run all database migrations
///
/// Tables are created if missing; the full drop-and-recreate path only runs
/// when RESET_DB=true so server restarts never lose data.
pub async fn run_migrations(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    let should_reset_db = env::var("RESET_DB").unwrap_or_else(|_| "false".to_string()) == "true";

    if should_reset_db {
        warn!("RESET_DB=true - Dropping all tables and recreating schema...");
        drop_all_tables(pool).await?;
        info!("Dropped old tables");
    }

    create_user_tables(pool).await?;
    create_catalog_tables(pool).await?;
    create_indexes(pool).await?;

    info!("Database migration completed successfully");

    Ok(())
}

async fn drop_all_tables(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    let tables = vec![
        "testimonials",
        "brands",
        "countries",
        "coupons",
        "languages",
        "attributes",
        "categories",
        "users",
    ];

    for table in tables {
        let _ = sqlx::query(&format!("DROP TABLE IF EXISTS {}", table))
            .execute(pool)
            .await;
    }

    Ok(())
}

async fn create_user_tables(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    // Users table. Email is nullable (phone-only and social accounts exist)
    // but unique whenever present; the partial UNIQUE index below is the
    // single enforcement point for the one-account-per-email invariant.
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS users (
            id TEXT PRIMARY KEY,
            username TEXT,
            email TEXT,
            phone TEXT,
            password TEXT,
            social TEXT,
            status TEXT DEFAULT 'show',
            created_at TEXT,
            updated_at TEXT
        )
        "#,
    )
    .execute(pool)
    .await?;

    Ok(())
}

async fn create_catalog_tables(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS categories (
            id TEXT PRIMARY KEY,
            name TEXT NOT NULL,
            description TEXT,
            icon TEXT,
            status TEXT DEFAULT 'show',
            created_at TEXT,
            updated_at TEXT
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS attributes (
            id TEXT PRIMARY KEY,
            title TEXT NOT NULL,
            name TEXT,
            option TEXT,
            lang TEXT,
            status TEXT DEFAULT 'show',
            created_at TEXT,
            updated_at TEXT
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS languages (
            id TEXT PRIMARY KEY,
            name TEXT NOT NULL,
            language_code TEXT,
            iso_code TEXT,
            flag TEXT,
            title TEXT,
            status TEXT DEFAULT 'show',
            created_at TEXT,
            updated_at TEXT
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS coupons (
            id TEXT PRIMARY KEY,
            title TEXT NOT NULL,
            coupon_code TEXT NOT NULL,
            end_time TEXT NOT NULL,
            discount_percentage REAL NOT NULL,
            minimum_amount REAL NOT NULL,
            product_type TEXT,
            logo TEXT,
            status TEXT DEFAULT 'show',
            created_at TEXT,
            updated_at TEXT
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS countries (
            id TEXT PRIMARY KEY,
            name TEXT NOT NULL,
            country_code TEXT,
            flag TEXT,
            status TEXT DEFAULT 'show',
            created_at TEXT,
            updated_at TEXT
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS brands (
            id TEXT PRIMARY KEY,
            name TEXT NOT NULL,
            logo TEXT,
            website TEXT,
            status TEXT DEFAULT 'show',
            created_at TEXT,
            updated_at TEXT
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS testimonials (
            id TEXT PRIMARY KEY,
            name TEXT NOT NULL,
            title TEXT,
            message TEXT,
            rating INTEGER,
            avatar TEXT,
            status TEXT DEFAULT 'show',
            created_at TEXT,
            updated_at TEXT
        )
        "#,
    )
    .execute(pool)
    .await?;

    Ok(())
}

async fn create_indexes(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    // Uniqueness lives here, not in application-level pre-checks: concurrent
    // creates with the same key race to the index and exactly one wins.
    let indexes = vec![
        "CREATE UNIQUE INDEX IF NOT EXISTS idx_users_email ON users(email) WHERE email IS NOT NULL",
        "CREATE UNIQUE INDEX IF NOT EXISTS idx_categories_name ON categories(name)",
        "CREATE UNIQUE INDEX IF NOT EXISTS idx_attributes_title ON attributes(title)",
        "CREATE UNIQUE INDEX IF NOT EXISTS idx_languages_name ON languages(name)",
        "CREATE UNIQUE INDEX IF NOT EXISTS idx_countries_name ON countries(name)",
        "CREATE UNIQUE INDEX IF NOT EXISTS idx_brands_name ON brands(name)",
        "CREATE INDEX IF NOT EXISTS idx_coupons_status ON coupons(status)",
    ];

    for index in indexes {
        sqlx::query(index).execute(pool).await?;
    }

    Ok(())
}
