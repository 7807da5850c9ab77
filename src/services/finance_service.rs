// src/services/finance_service.rs

use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::{
    common::ids::generate_id,
    models::finance::{
        FinanceSummary, FinancialRecord, NewFinancialRecordPayload, RecordKind, RecordStatus,
    },
};

/// Receitas, despesas e saldo. Recalculado a cada leitura, nunca guardado.
pub fn summary(records: &[FinancialRecord]) -> FinanceSummary {
    let total = |kind: RecordKind| -> Decimal {
        records
            .iter()
            .filter(|r| r.kind == kind)
            .map(|r| r.amount)
            .sum()
    };

    let income = total(RecordKind::Income);
    let expense = total(RecordKind::Expense);

    FinanceSummary {
        income,
        expense,
        balance: income - expense,
    }
}

/// Monta o lançamento a partir do formulário (já validado).
pub fn build_record(payload: NewFinancialRecordPayload) -> FinancialRecord {
    FinancialRecord {
        id: generate_id("fin"),
        kind: payload.kind,
        category: payload.category.trim().to_string(),
        amount: payload.amount,
        date: payload.date,
        description: payload.description,
        status: payload.status.unwrap_or(RecordStatus::Pending),
        bank: payload.bank,
        payment_method: payload.payment_method,
        is_recurring: payload.is_recurring,
        recurring_end_date: payload.recurring_end_date,
        installments: payload.installments,
        fee_type: payload.fee_type,
        related_hearing_id: None,
    }
}

/// Despesa gerada quando um audiencista aceita a audiência.
/// Fica BLOCKED até o retorno ser enviado.
pub fn hearing_expense(hearing_id: &str, process_cnj: &str, value: Decimal, date: NaiveDate) -> FinancialRecord {
    let mut record = FinancialRecord::new(
        &generate_id("fin"),
        RecordKind::Expense,
        "Audiencista",
        value,
        date,
        &format!("Audiência - Proc. {}", process_cnj),
        RecordStatus::Blocked,
    );
    record.related_hearing_id = Some(hearing_id.to_string());
    record
}
