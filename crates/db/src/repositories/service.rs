use crate::models::DbBarbershopService;
use eyre::Result;
use sqlx::{Pool, Postgres};
use uuid::Uuid;

pub async fn get_services_by_barbershop_id(
    pool: &Pool<Postgres>,
    barbershop_id: Uuid,
) -> Result<Vec<DbBarbershopService>> {
    let services = sqlx::query_as::<_, DbBarbershopService>(
        r#"
        SELECT id, barbershop_id, name, description, image_url, price_cents
        FROM barbershop_services
        WHERE barbershop_id = $1
        ORDER BY name ASC
        "#,
    )
    .bind(barbershop_id)
    .fetch_all(pool)
    .await?;

    Ok(services)
}

pub async fn get_service_by_id(
    pool: &Pool<Postgres>,
    id: Uuid,
) -> Result<Option<DbBarbershopService>> {
    let service = sqlx::query_as::<_, DbBarbershopService>(
        r#"
        SELECT id, barbershop_id, name, description, image_url, price_cents
        FROM barbershop_services
        WHERE id = $1
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;

    Ok(service)
}
