use crate::models::DbBarbershop;
use eyre::Result;
use sqlx::{Pool, Postgres};
use uuid::Uuid;

pub async fn list_barbershops(pool: &Pool<Postgres>) -> Result<Vec<DbBarbershop>> {
    let barbershops = sqlx::query_as::<_, DbBarbershop>(
        r#"
        SELECT id, name, address, description, image_url, phones, created_at
        FROM barbershops
        ORDER BY created_at ASC
        "#,
    )
    .fetch_all(pool)
    .await?;

    Ok(barbershops)
}

pub async fn list_popular_barbershops(pool: &Pool<Postgres>) -> Result<Vec<DbBarbershop>> {
    let barbershops = sqlx::query_as::<_, DbBarbershop>(
        r#"
        SELECT id, name, address, description, image_url, phones, created_at
        FROM barbershops
        ORDER BY id ASC
        "#,
    )
    .fetch_all(pool)
    .await?;

    Ok(barbershops)
}

/// Turns user input into an `ILIKE` substring pattern
///
/// `%`, `_` and the escape character itself match literally.
pub fn contains_pattern(input: &str) -> String {
    let mut pattern = String::with_capacity(input.len() + 2);
    pattern.push('%');
    for c in input.chars() {
        if matches!(c, '%' | '_' | '\\') {
            pattern.push('\\');
        }
        pattern.push(c);
    }
    pattern.push('%');
    pattern
}

/// Case-insensitive search by barbershop name and/or offered service name
///
/// A `None` filter matches everything.
pub async fn search_barbershops(
    pool: &Pool<Postgres>,
    name_contains: Option<&str>,
    service_name: Option<&str>,
) -> Result<Vec<DbBarbershop>> {
    tracing::debug!(
        "Searching barbershops: name={:?}, service={:?}",
        name_contains, service_name
    );

    let barbershops = sqlx::query_as::<_, DbBarbershop>(
        r#"
        SELECT b.id, b.name, b.address, b.description, b.image_url, b.phones, b.created_at
        FROM barbershops b
        WHERE ($1::TEXT IS NULL OR b.name ILIKE $1 ESCAPE '\')
          AND ($2::TEXT IS NULL OR EXISTS (
                SELECT 1
                FROM barbershop_services s
                WHERE s.barbershop_id = b.id AND s.name ILIKE $2 ESCAPE '\'
          ))
        ORDER BY b.name ASC
        "#,
    )
    .bind(name_contains.map(contains_pattern))
    .bind(service_name.map(contains_pattern))
    .fetch_all(pool)
    .await?;

    Ok(barbershops)
}

pub async fn get_barbershop_by_id(pool: &Pool<Postgres>, id: Uuid) -> Result<Option<DbBarbershop>> {
    let barbershop = sqlx::query_as::<_, DbBarbershop>(
        r#"
        SELECT id, name, address, description, image_url, phones, created_at
        FROM barbershops
        WHERE id = $1
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;

    if barbershop.is_none() {
        tracing::debug!("Barbershop not found: id={}", id);
    }

    Ok(barbershop)
}
