//! 记录规范化
//!
//! 纯函数、无副作用：同一原始记录总是产出同一规范化结果。

use crate::dates::normalize_date;
use crate::line_item::LineItem;
use crate::mapping;
use crate::raw::RawRecord;

/// 原始记录 → 规范化行项目
pub fn normalize(record: &RawRecord) -> LineItem {
    let accounting_document = mapping::ACCOUNTING_DOCUMENT.string(record);
    let fiscal_year = mapping::FISCAL_YEAR.string(record);
    let accounting_document_item = mapping::ACCOUNTING_DOCUMENT_ITEM.string(record);

    // 上游缺失 GeneratedID 时合成，保证标识非空
    let generated_id = {
        let id = mapping::GENERATED_ID.string(record);
        if id.is_empty() {
            format!(
                "{}_{}_{}",
                accounting_document, fiscal_year, accounting_document_item
            )
        } else {
            id
        }
    };

    let company_code_currency = {
        let currency = mapping::COMPANY_CODE_CURRENCY.string(record);
        if currency.is_empty() {
            "TRY".to_string()
        } else {
            currency
        }
    };

    LineItem {
        generated_id,

        company_code: mapping::COMPANY_CODE.string(record),
        supplier: mapping::SUPPLIER.string(record),
        supplier_name: mapping::SUPPLIER_NAME.string(record),

        fiscal_year,
        accounting_document,
        accounting_document_item,
        accounting_document_type: mapping::ACCOUNTING_DOCUMENT_TYPE.string(record),

        document_date: normalize_date(&mapping::DOCUMENT_DATE.string(record)),
        posting_date: normalize_date(&mapping::POSTING_DATE.string(record)),
        net_due_date: normalize_date(&mapping::NET_DUE_DATE.string(record)),

        amount_in_company_code_currency: mapping::AMOUNT_IN_COMPANY_CODE_CURRENCY.amount(record),
        company_code_currency,
        amount_in_transaction_currency: mapping::AMOUNT_IN_TRANSACTION_CURRENCY.amount(record),
        transaction_currency: mapping::TRANSACTION_CURRENCY.string(record),

        purchasing_document: mapping::PURCHASING_DOCUMENT.string(record),
        document_reference_id: mapping::DOCUMENT_REFERENCE_ID.string(record),

        clearing_accounting_document: mapping::CLEARING_ACCOUNTING_DOCUMENT.string(record),
        clearing_date: normalize_date(&mapping::CLEARING_DATE.string(record)),
        // 派生而非拷贝：清算凭证引用非空即视为已清算
        is_cleared: mapping::IS_CLEARED.flag(record),

        posting_key: mapping::POSTING_KEY.string(record),
        net_payment_days: mapping::NET_PAYMENT_DAYS.days(record),
        due_calculation_base_date: normalize_date(
            &mapping::DUE_CALCULATION_BASE_DATE.string(record),
        ),
        payment_blocking_reason: mapping::PAYMENT_BLOCKING_REASON.string(record),
        invoice_reference: mapping::INVOICE_REFERENCE.string(record),
        debit_credit_code: mapping::DEBIT_CREDIT_CODE.string(record),
        financial_account_type: mapping::FINANCIAL_ACCOUNT_TYPE.string(record),
        special_general_ledger_code: mapping::SPECIAL_GENERAL_LEDGER_CODE.string(record),
        document_item_text: mapping::DOCUMENT_ITEM_TEXT.string(record),

        arrears_in_days: mapping::ARREARS_IN_DAYS.days(record),
    }
}
