use serde::Serialize;

use crate::models::{barbershop::Barbershop, booking::BookingDetail};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QuickSearchOption {
    pub title: &'static str,
    pub image_url: &'static str,
}

pub static QUICK_SEARCH_OPTIONS: [QuickSearchOption; 6] = [
    QuickSearchOption { title: "Cabelo", image_url: "/cabelo.svg" },
    QuickSearchOption { title: "Barba", image_url: "/barba.svg" },
    QuickSearchOption { title: "Acabamento", image_url: "/acabamento.svg" },
    QuickSearchOption { title: "Sobrancelha", image_url: "/sobrancelha.svg" },
    QuickSearchOption { title: "Massagem", image_url: "/massagem.svg" },
    QuickSearchOption { title: "Hidratação", image_url: "/hidratacao.svg" },
];

#[derive(Debug, Clone, Serialize)]
pub struct HomeResponse {
    pub greeting: String,
    pub barbershops: Vec<Barbershop>,
    pub popular_barbershops: Vec<Barbershop>,
    pub bookings: Vec<BookingDetail>,
    pub quick_search_options: &'static [QuickSearchOption],
}
