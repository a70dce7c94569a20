use barberbook_api::handlers::barbershop::{barbershop_response, SearchQuery};
use barberbook_db::models::{DbBarbershop, DbBarbershopService};
use chrono::Utc;
use mockall::predicate;
use pretty_assertions::assert_eq;
use uuid::Uuid;

use crate::test_utils::TestContext;

fn barbershop(id: Uuid, name: &str) -> DbBarbershop {
    DbBarbershop {
        id,
        name: name.to_string(),
        address: "Rua das Flores, 123".to_string(),
        description: "Cortes clássicos e modernos".to_string(),
        image_url: "https://example.com/shop.png".to_string(),
        phones: vec!["(11) 98204-5108".to_string()],
        created_at: Utc::now(),
    }
}

fn service(barbershop_id: Uuid, name: &str, price_cents: i64) -> DbBarbershopService {
    DbBarbershopService {
        id: Uuid::new_v4(),
        barbershop_id,
        name: name.to_string(),
        description: format!("{} completo", name),
        image_url: "https://example.com/service.png".to_string(),
        price_cents,
    }
}

#[test]
fn test_search_query_normalizes_blanks() {
    let query = SearchQuery {
        search: Some("  ".to_string()),
        service: Some(" Barba ".to_string()),
    }
    .normalized();

    assert_eq!(query.search, None);
    assert_eq!(query.service.as_deref(), Some("Barba"));
}

#[tokio::test]
async fn test_barbershop_detail_from_repositories() {
    let mut ctx = TestContext::new();
    let id = Uuid::new_v4();

    ctx.barbershop_repo
        .expect_get_barbershop_by_id()
        .with(predicate::eq(id))
        .times(1)
        .returning(|id| Ok(Some(barbershop(id, "Vintage Barber"))));
    ctx.service_repo
        .expect_get_services_by_barbershop_id()
        .with(predicate::eq(id))
        .times(1)
        .returning(|id| Ok(vec![service(id, "Corte de Cabelo", 6000), service(id, "Barba", 4500)]));

    let shop = ctx.barbershop_repo.get_barbershop_by_id(id).await.unwrap().unwrap();
    let services = ctx.service_repo.get_services_by_barbershop_id(id).await.unwrap();
    let response = barbershop_response(shop, services);

    assert_eq!(response.id, id);
    assert_eq!(response.name, "Vintage Barber");
    assert_eq!(response.phones, vec!["(11) 98204-5108".to_string()]);
    let prices: Vec<_> = response.services.iter().map(|s| s.price.as_str()).collect();
    assert_eq!(prices, vec!["R$ 60,00", "R$ 45,00"]);
}

#[tokio::test]
async fn test_search_passes_filters_through() {
    let mut ctx = TestContext::new();
    let id = Uuid::new_v4();

    ctx.barbershop_repo
        .expect_search_barbershops()
        .with(predicate::eq(Some("vintage")), predicate::eq(None::<&'static str>))
        .times(1)
        .returning(move |_, _| Ok(vec![barbershop(id, "Vintage Barber")]));

    let results = ctx.barbershop_repo.search_barbershops(Some("vintage"), None).await.unwrap();

    assert_eq!(results.len(), 1);
    assert_eq!(results[0].id, id);
}

#[tokio::test]
async fn test_barbershop_rejects_invalid_id() {
    let ctx = TestContext::new();
    let server = ctx.server();

    let response = server.get("/api/barbershops/not-a-uuid").await;

    response.assert_status(axum::http::StatusCode::BAD_REQUEST);
}
