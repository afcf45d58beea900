//! 规范化行项目

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// 规范化后的供应商行项目
///
/// 线上字段名沿用上游的语义命名。日期统一为 `YYYY-MM-DD`
/// 字符串（缺失为空串），金额为数值，`IsCleared` 为派生布尔值。
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LineItem {
    /// 合成标识：缺失时由 单据_会计年度_行号 组合生成，绝不为空
    #[serde(rename = "GeneratedID", default)]
    pub generated_id: String,

    #[serde(rename = "CompanyCode", default)]
    pub company_code: String,
    #[serde(rename = "Supplier", default)]
    pub supplier: String,
    #[serde(rename = "SupplierName", default)]
    pub supplier_name: String,

    #[serde(rename = "FiscalYear", default)]
    pub fiscal_year: String,
    #[serde(rename = "AccountingDocument", default)]
    pub accounting_document: String,
    #[serde(rename = "AccountingDocumentItem", default)]
    pub accounting_document_item: String,
    #[serde(rename = "AccountingDocumentType", default)]
    pub accounting_document_type: String,

    #[serde(rename = "DocumentDate", default)]
    pub document_date: String,
    #[serde(rename = "PostingDate", default)]
    pub posting_date: String,
    #[serde(rename = "NetDueDate", default)]
    pub net_due_date: String,

    #[serde(rename = "AmountInCompanyCodeCurrency", default)]
    pub amount_in_company_code_currency: f64,
    #[serde(rename = "CompanyCodeCurrency", default)]
    pub company_code_currency: String,
    #[serde(rename = "AmountInTransactionCurrency", default)]
    pub amount_in_transaction_currency: f64,
    #[serde(rename = "TransactionCurrency", default)]
    pub transaction_currency: String,

    #[serde(rename = "PurchasingDocument", default)]
    pub purchasing_document: String,
    #[serde(rename = "DocumentReferenceID", default)]
    pub document_reference_id: String,

    #[serde(rename = "ClearingAccountingDocument", default)]
    pub clearing_accounting_document: String,
    #[serde(rename = "ClearingDate", default)]
    pub clearing_date: String,
    #[serde(rename = "IsCleared", default)]
    pub is_cleared: bool,

    #[serde(rename = "PostingKey", default)]
    pub posting_key: String,
    #[serde(rename = "NetPaymentDays", default)]
    pub net_payment_days: i64,
    #[serde(rename = "DueCalculationBaseDate", default)]
    pub due_calculation_base_date: String,
    #[serde(rename = "PaymentBlockingReason", default)]
    pub payment_blocking_reason: String,
    #[serde(rename = "InvoiceReference", default)]
    pub invoice_reference: String,
    #[serde(rename = "DebitCreditCode", default)]
    pub debit_credit_code: String,
    #[serde(rename = "FinancialAccountType", default)]
    pub financial_account_type: String,
    #[serde(rename = "SpecialGeneralLedgerCode", default)]
    pub special_general_ledger_code: String,
    #[serde(rename = "DocumentItemText", default)]
    pub document_item_text: String,

    #[serde(rename = "ArrearsInDays", default)]
    pub arrears_in_days: i64,
}

/// 行项目状态
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemStatus {
    Open,
    Overdue,
    Cleared,
}

impl LineItem {
    /// 到期日，无法解析时为 None
    pub fn due_date(&self) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(&self.net_due_date, "%Y-%m-%d").ok()
    }

    /// 状态分类：到期日等于今天算未到期（open），不算逾期
    pub fn status(&self, today: NaiveDate) -> ItemStatus {
        if self.is_cleared {
            return ItemStatus::Cleared;
        }
        match self.due_date() {
            Some(due) if due < today => ItemStatus::Overdue,
            _ => ItemStatus::Open,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(net_due_date: &str, is_cleared: bool) -> LineItem {
        LineItem {
            net_due_date: net_due_date.to_string(),
            is_cleared,
            ..Default::default()
        }
    }

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 6, 15).unwrap()
    }

    #[test]
    fn test_due_today_is_open_not_overdue() {
        assert_eq!(item("2025-06-15", false).status(today()), ItemStatus::Open);
    }

    #[test]
    fn test_due_yesterday_is_overdue() {
        assert_eq!(item("2025-06-14", false).status(today()), ItemStatus::Overdue);
    }

    #[test]
    fn test_no_due_date_is_open() {
        assert_eq!(item("", false).status(today()), ItemStatus::Open);
    }

    #[test]
    fn test_cleared_wins_over_overdue() {
        assert_eq!(item("2020-01-01", true).status(today()), ItemStatus::Cleared);
    }

    #[test]
    fn test_wire_names_round_trip() {
        let item = LineItem {
            generated_id: "5100000123_2025_001".to_string(),
            supplier: "2007".to_string(),
            amount_in_company_code_currency: 1250.75,
            is_cleared: true,
            ..Default::default()
        };
        let json = serde_json::to_value(&item).unwrap();
        assert_eq!(json["GeneratedID"], "5100000123_2025_001");
        assert_eq!(json["Supplier"], "2007");
        assert_eq!(json["AmountInCompanyCodeCurrency"], 1250.75);
        assert_eq!(json["IsCleared"], true);

        let back: LineItem = serde_json::from_value(json).unwrap();
        assert_eq!(back, item);
    }
}
