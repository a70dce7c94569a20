use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Barbershop {
    pub id: Uuid,
    pub name: String,
    pub address: String,
    pub description: String,
    pub image_url: String,
    pub phones: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BarbershopService {
    pub id: Uuid,
    pub barbershop_id: Uuid,
    pub name: String,
    pub description: String,
    pub image_url: String,
    /// Price in centavos
    pub price_cents: i64,
}

impl BarbershopService {
    pub fn formatted_price(&self) -> String {
        format_brl(self.price_cents)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceResponse {
    pub id: Uuid,
    pub name: String,
    pub description: String,
    pub image_url: String,
    pub price_cents: i64,
    pub price: String,
}

impl From<BarbershopService> for ServiceResponse {
    fn from(service: BarbershopService) -> Self {
        let price = service.formatted_price();
        Self {
            id: service.id,
            name: service.name,
            description: service.description,
            image_url: service.image_url,
            price_cents: service.price_cents,
            price,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GetBarbershopResponse {
    pub id: Uuid,
    pub name: String,
    pub address: String,
    pub description: String,
    pub image_url: String,
    pub phones: Vec<String>,
    pub services: Vec<ServiceResponse>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchBarbershopsResponse {
    pub search: Option<String>,
    pub service: Option<String>,
    pub barbershops: Vec<Barbershop>,
}

/// Formats an amount of centavos as Brazilian reais, e.g. `R$ 1.234,50`
pub fn format_brl(cents: i64) -> String {
    let sign = if cents < 0 { "-" } else { "" };
    let cents = cents.unsigned_abs();
    let reais = (cents / 100).to_string();

    let mut grouped = String::with_capacity(reais.len() + reais.len() / 3);
    for (i, digit) in reais.chars().enumerate() {
        if i > 0 && (reais.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(digit);
    }

    format!("{}R$ {},{:02}", sign, grouped, cents % 100)
}
