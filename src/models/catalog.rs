// src/models/catalog.rs

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

// --- LOJA ---

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "UPPERCASE")]
pub enum ProductType {
    Ebook,
    Video,
    Material,
    Seguro,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    #[schema(example = "prod1")]
    pub id: String,
    pub title: String,
    pub description: String,
    #[schema(example = 97.0)]
    pub price: Decimal,
    #[serde(rename = "type")]
    pub kind: ProductType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

// --- SERVIÇOS ---

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ServiceItem {
    #[schema(example = "s1")]
    pub id: String,
    pub name: String,
    pub description: String,
}

// --- MY HOLDING ---

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Investment {
    #[serde(rename = "type")]
    pub kind: String,
    pub value: Decimal,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct HoldingData {
    pub assets_value_brl: Decimal,
    pub investments: Vec<Investment>,
    pub dre_url: String,
}

// --- COTAÇÃO DO DÓLAR ---

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "UPPERCASE")]
pub enum QuoteSource {
    Live,
    Fallback,
}

// Quantos reais vale um dólar
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UsdQuote {
    #[schema(example = 5.2)]
    pub rate: Decimal,
    pub source: QuoteSource,
}
