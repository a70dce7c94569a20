use eyre::Result;
use sqlx::{Pool, Postgres};
use tracing::info;

pub async fn initialize_database(pool: &Pool<Postgres>) -> Result<()> {
    info!("Initializing database schema...");

    // Create users table
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS users (
            id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
            name VARCHAR(255) NOT NULL,
            email VARCHAR(255) NOT NULL UNIQUE,
            image_url TEXT NULL,
            created_at TIMESTAMP WITH TIME ZONE NOT NULL DEFAULT NOW()
        );
        "#,
    )
    .execute(pool)
    .await?;

    // Create barbershops table
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS barbershops (
            id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
            name VARCHAR(255) NOT NULL,
            address TEXT NOT NULL,
            description TEXT NOT NULL,
            image_url TEXT NOT NULL,
            phones TEXT[] NOT NULL DEFAULT '{}',
            created_at TIMESTAMP WITH TIME ZONE NOT NULL DEFAULT NOW()
        );
        "#,
    )
    .execute(pool)
    .await?;

    // Create barbershop_services table
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS barbershop_services (
            id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
            barbershop_id UUID NOT NULL REFERENCES barbershops(id),
            name VARCHAR(255) NOT NULL,
            description TEXT NOT NULL,
            image_url TEXT NOT NULL,
            price_cents BIGINT NOT NULL,
            CONSTRAINT non_negative_price CHECK (price_cents >= 0)
        );
        "#,
    )
    .execute(pool)
    .await?;

    // Create bookings table; one booking per service and instant
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS bookings (
            id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
            service_id UUID NOT NULL REFERENCES barbershop_services(id),
            user_id UUID NOT NULL REFERENCES users(id),
            date TIMESTAMP WITH TIME ZONE NOT NULL,
            created_at TIMESTAMP WITH TIME ZONE NOT NULL DEFAULT NOW(),
            CONSTRAINT unique_service_slot UNIQUE (service_id, date)
        );
        "#,
    )
    .execute(pool)
    .await?;

    // Create indexes
    for statement in [
        "CREATE INDEX IF NOT EXISTS idx_barbershop_services_barbershop_id ON barbershop_services(barbershop_id)",
        "CREATE INDEX IF NOT EXISTS idx_bookings_user_id_date ON bookings(user_id, date)",
        "CREATE INDEX IF NOT EXISTS idx_barbershops_name ON barbershops(name)",
    ] {
        sqlx::query(statement).execute(pool).await?;
    }

    info!("Database schema initialized successfully.");
    Ok(())
}
