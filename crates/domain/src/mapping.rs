//! 字段别名映射表
//!
//! 每个规范化字段对应一组有序的可接受源键：语义命名在前，遗留
//! SAP 字段码在后，第一个存在且非 null 的键胜出。

use serde_json::Value;

use crate::raw::RawRecord;

/// 规范化字段 → 有序源键列表
#[derive(Debug, Clone, Copy)]
pub struct FieldAliases {
    pub canonical: &'static str,
    pub sources: &'static [&'static str],
}

impl FieldAliases {
    /// 第一个存在且非 null 的源键的值
    pub fn resolve<'a>(&self, record: &'a RawRecord) -> Option<&'a Value> {
        self.sources.iter().find_map(|key| record.get(key))
    }

    /// 字符串值，缺失时为空串
    pub fn string(&self, record: &RawRecord) -> String {
        self.resolve(record).map(value_to_string).unwrap_or_default()
    }

    /// 金额，解析失败或缺失时为 0
    pub fn amount(&self, record: &RawRecord) -> f64 {
        match self.resolve(record) {
            Some(Value::Number(n)) => n.as_f64().unwrap_or(0.0),
            Some(Value::String(s)) => s.trim().parse::<f64>().unwrap_or(0.0),
            _ => 0.0,
        }
    }

    /// 天数，解析失败或缺失时为 0
    pub fn days(&self, record: &RawRecord) -> i64 {
        match self.resolve(record) {
            Some(Value::Number(n)) => n.as_i64().unwrap_or_else(|| {
                n.as_f64().map(|f| f.trunc() as i64).unwrap_or(0)
            }),
            Some(Value::String(s)) => {
                let s = s.trim();
                s.parse::<i64>()
                    .or_else(|_| s.parse::<f64>().map(|f| f.trunc() as i64))
                    .unwrap_or(0)
            }
            _ => 0,
        }
    }

    /// 标记位：非空字符串、true 或非零数字视为真
    pub fn flag(&self, record: &RawRecord) -> bool {
        match self.resolve(record) {
            Some(Value::Bool(b)) => *b,
            Some(Value::String(s)) => !s.is_empty(),
            Some(Value::Number(n)) => n.as_f64().map(|f| f != 0.0).unwrap_or(false),
            _ => false,
        }
    }
}

fn value_to_string(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        _ => String::new(),
    }
}

macro_rules! aliases {
    ($name:ident, $canonical:literal, [$($source:literal),+ $(,)?]) => {
        pub const $name: FieldAliases = FieldAliases {
            canonical: $canonical,
            sources: &[$($source),+],
        };
    };
}

aliases!(GENERATED_ID, "GeneratedID", ["GeneratedID"]);
aliases!(COMPANY_CODE, "CompanyCode", ["CompanyCode", "BUKRS"]);
aliases!(SUPPLIER, "Supplier", ["Supplier", "Vendor", "LIFNR"]);
aliases!(SUPPLIER_NAME, "SupplierName", ["SupplierName", "Name1", "NAME1"]);
aliases!(FISCAL_YEAR, "FiscalYear", ["FiscalYear", "GJAHR"]);
aliases!(ACCOUNTING_DOCUMENT, "AccountingDocument", ["AccountingDocument", "BELNR"]);
aliases!(
    ACCOUNTING_DOCUMENT_ITEM,
    "AccountingDocumentItem",
    ["AccountingDocumentItem", "BUZEI"]
);
aliases!(
    ACCOUNTING_DOCUMENT_TYPE,
    "AccountingDocumentType",
    ["AccountingDocumentType", "BLART"]
);
aliases!(DOCUMENT_DATE, "DocumentDate", ["DocumentDate", "BLDAT"]);
aliases!(POSTING_DATE, "PostingDate", ["PostingDate", "BUDAT"]);
aliases!(NET_DUE_DATE, "NetDueDate", ["NetDueDate", "NETDT"]);
aliases!(
    AMOUNT_IN_COMPANY_CODE_CURRENCY,
    "AmountInCompanyCodeCurrency",
    ["AmountInCompanyCodeCurrency", "Amount", "DMBTR"]
);
aliases!(
    COMPANY_CODE_CURRENCY,
    "CompanyCodeCurrency",
    ["CompanyCodeCurrency", "Currency", "WAERS", "HWAER"]
);
aliases!(
    AMOUNT_IN_TRANSACTION_CURRENCY,
    "AmountInTransactionCurrency",
    ["AmountInTransactionCurrency", "WRBTR"]
);
aliases!(
    TRANSACTION_CURRENCY,
    "TransactionCurrency",
    ["TransactionCurrency", "WAERS"]
);
aliases!(PURCHASING_DOCUMENT, "PurchasingDocument", ["PurchasingDocument", "EBELN"]);
aliases!(
    DOCUMENT_REFERENCE_ID,
    "DocumentReferenceID",
    ["DocumentReferenceID", "XBLNR"]
);
aliases!(
    CLEARING_ACCOUNTING_DOCUMENT,
    "ClearingAccountingDocument",
    ["ClearingAccountingDocument", "AUGBL"]
);
aliases!(CLEARING_DATE, "ClearingDate", ["ClearingDate", "AUGDT"]);
aliases!(IS_CLEARED, "IsCleared", ["IsCleared", "AUGBL"]);
aliases!(POSTING_KEY, "PostingKey", ["PostingKey", "BSCHL"]);
aliases!(NET_PAYMENT_DAYS, "NetPaymentDays", ["NetPaymentDays", "ZBD1T"]);
aliases!(
    DUE_CALCULATION_BASE_DATE,
    "DueCalculationBaseDate",
    ["DueCalculationBaseDate", "ZFBDT"]
);
aliases!(
    PAYMENT_BLOCKING_REASON,
    "PaymentBlockingReason",
    ["PaymentBlockingReason", "ZLSPR"]
);
aliases!(INVOICE_REFERENCE, "InvoiceReference", ["InvoiceReference", "REBZG"]);
aliases!(DEBIT_CREDIT_CODE, "DebitCreditCode", ["DebitCreditCode", "SHKZG"]);
aliases!(
    FINANCIAL_ACCOUNT_TYPE,
    "FinancialAccountType",
    ["FinancialAccountType", "KOART"]
);
aliases!(
    SPECIAL_GENERAL_LEDGER_CODE,
    "SpecialGeneralLedgerCode",
    ["SpecialGeneralLedgerCode", "UMSKZ"]
);
aliases!(DOCUMENT_ITEM_TEXT, "DocumentItemText", ["DocumentItemText", "SGTXT"]);
aliases!(ARREARS_IN_DAYS, "ArrearsInDays", ["ArrearsInDays"]);

/// 汇总专用：货币只看语义键（与原上游处理保持一致）
aliases!(SUMMARY_CURRENCY, "Currency", ["CompanyCodeCurrency", "Currency"]);

/// 全部字符串字段的映射，按规范化字段名索引（用于穷举测试）
pub const ALL_ALIASES: &[FieldAliases] = &[
    GENERATED_ID,
    COMPANY_CODE,
    SUPPLIER,
    SUPPLIER_NAME,
    FISCAL_YEAR,
    ACCOUNTING_DOCUMENT,
    ACCOUNTING_DOCUMENT_ITEM,
    ACCOUNTING_DOCUMENT_TYPE,
    DOCUMENT_DATE,
    POSTING_DATE,
    NET_DUE_DATE,
    AMOUNT_IN_COMPANY_CODE_CURRENCY,
    COMPANY_CODE_CURRENCY,
    AMOUNT_IN_TRANSACTION_CURRENCY,
    TRANSACTION_CURRENCY,
    PURCHASING_DOCUMENT,
    DOCUMENT_REFERENCE_ID,
    CLEARING_ACCOUNTING_DOCUMENT,
    CLEARING_DATE,
    IS_CLEARED,
    POSTING_KEY,
    NET_PAYMENT_DAYS,
    DUE_CALCULATION_BASE_DATE,
    PAYMENT_BLOCKING_REASON,
    INVOICE_REFERENCE,
    DEBIT_CREDIT_CODE,
    FINANCIAL_ACCOUNT_TYPE,
    SPECIAL_GENERAL_LEDGER_CODE,
    DOCUMENT_ITEM_TEXT,
    ARREARS_IN_DAYS,
];
