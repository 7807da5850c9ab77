// src/models/finance.rs

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

// --- ENUMS ---

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "UPPERCASE")]
pub enum RecordKind {
    Income,
    Expense,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "UPPERCASE")]
pub enum RecordStatus {
    Paid,
    Pending,
    Overdue,
    // Pagamento de audiencista retido até o envio do retorno
    Blocked,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "UPPERCASE")]
pub enum FeeType {
    Contratual,
    Sucumbencial,
    Inicial,
    Outros,
}

// --- LANÇAMENTOS DO ESCRITÓRIO ---

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct FinancialRecord {
    #[schema(example = "f1")]
    pub id: String,
    #[serde(rename = "type")]
    pub kind: RecordKind,
    #[schema(example = "Honorários")]
    pub category: String,
    // Sempre não negativo
    #[schema(example = 15000.0)]
    pub amount: Decimal,
    pub date: NaiveDate,
    pub description: String,
    pub status: RecordStatus,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub bank: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_method: Option<String>,
    #[serde(default)]
    pub is_recurring: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recurring_end_date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub installments: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fee_type: Option<FeeType>,
    // Vínculo com a audiência que gerou a despesa
    #[serde(skip_serializing_if = "Option::is_none")]
    pub related_hearing_id: Option<String>,
}

impl FinancialRecord {
    pub fn new(
        id: &str,
        kind: RecordKind,
        category: &str,
        amount: Decimal,
        date: NaiveDate,
        description: &str,
        status: RecordStatus,
    ) -> Self {
        Self {
            id: id.to_string(),
            kind,
            category: category.to_string(),
            amount,
            date,
            description: description.to_string(),
            status,
            bank: None,
            payment_method: None,
            is_recurring: false,
            recurring_end_date: None,
            installments: None,
            fee_type: None,
            related_hearing_id: None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct FinanceSummary {
    pub income: Decimal,
    pub expense: Decimal,
    pub balance: Decimal,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct NewFinancialRecordPayload {
    #[serde(rename = "type")]
    pub kind: RecordKind,

    #[validate(length(min = 1, message = "Informe a categoria."))]
    #[schema(example = "Honorários")]
    pub category: String,

    #[validate(custom(function = "validate_non_negative"))]
    #[schema(example = 1500.0)]
    pub amount: Decimal,

    pub date: NaiveDate,

    #[serde(default)]
    pub description: String,

    // Padrão: PENDING
    pub status: Option<RecordStatus>,

    pub bank: Option<String>,
    pub payment_method: Option<String>,
    #[serde(default)]
    pub is_recurring: bool,
    pub recurring_end_date: Option<NaiveDate>,
    #[validate(range(min = 1, message = "O número de parcelas deve ser positivo."))]
    pub installments: Option<u32>,
    pub fee_type: Option<FeeType>,
}

fn validate_non_negative(amount: &Decimal) -> Result<(), validator::ValidationError> {
    if *amount < Decimal::ZERO {
        let mut err = validator::ValidationError::new("non_negative");
        err.message = Some("O valor não pode ser negativo.".into());
        return Err(err);
    }
    Ok(())
}

// --- FATURAS DO CLIENTE ---

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "UPPERCASE")]
pub enum InvoiceStatus {
    Pending,
    Paid,
    Overdue,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ClientInvoice {
    #[schema(example = "inv1")]
    pub id: String,
    pub client_id: String,
    pub description: String,
    #[schema(example = 2500.0)]
    pub amount: Decimal,
    pub due_date: NaiveDate,
    pub status: InvoiceStatus,
    // Link de pagamento (Asaas)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_url: Option<String>,
}
