//! 供应商汇总聚合

use std::collections::HashMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::dates::normalize_date;
use crate::mapping;
use crate::raw::RawRecord;

/// 每个供应商一条的汇总行
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VendorSummary {
    #[serde(rename = "Supplier")]
    pub supplier: String,
    #[serde(rename = "SupplierName")]
    pub supplier_name: String,
    #[serde(rename = "TotalAmount")]
    pub total_amount: f64,
    #[serde(rename = "Currency")]
    pub currency: String,
    #[serde(rename = "ItemCount")]
    pub item_count: u64,
    #[serde(rename = "OverdueCount")]
    pub overdue_count: u64,
}

/// 按供应商分组聚合原始记录
///
/// 分组键取 Supplier/Vendor/LIFNR 中第一个存在的值，全部缺失时
/// 归入 "UNKNOWN"。名称与货币在首次出现时定格（货币立即回退
/// "TRY"）。`today` 在整个遍历开始前取一次，遍历途中不再取时间。
/// 到期日不晚于聚合时点即计入逾期：上游以带时刻的当前时间比较，
/// 当天到期在日粒度下等价于已逾期。逾期判断不排除已清算项
/// （沿用观测到的上游行为）。输出顺序为首次出现顺序。
pub fn aggregate(records: &[RawRecord], today: NaiveDate) -> Vec<VendorSummary> {
    let mut summaries: Vec<VendorSummary> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();

    for record in records {
        let key = {
            let supplier = mapping::SUPPLIER.string(record);
            if supplier.is_empty() {
                "UNKNOWN".to_string()
            } else {
                supplier
            }
        };

        let position = *index.entry(key.clone()).or_insert_with(|| {
            let currency = {
                let currency = mapping::SUMMARY_CURRENCY.string(record);
                if currency.is_empty() {
                    "TRY".to_string()
                } else {
                    currency
                }
            };
            summaries.push(VendorSummary {
                supplier: key.clone(),
                supplier_name: mapping::SUPPLIER_NAME.string(record),
                total_amount: 0.0,
                currency,
                item_count: 0,
                overdue_count: 0,
            });
            summaries.len() - 1
        });

        let summary = &mut summaries[position];
        summary.total_amount += mapping::AMOUNT_IN_COMPANY_CODE_CURRENCY.amount(record);
        summary.item_count += 1;

        // 汇总只看语义键 NetDueDate，与上游处理一致
        let due_raw = record.get("NetDueDate").and_then(|v| v.as_str()).unwrap_or("");
        let due = normalize_date(due_raw);
        if let Ok(due) = NaiveDate::parse_from_str(&due, "%Y-%m-%d") {
            if due <= today {
                summary.overdue_count += 1;
            }
        }
    }

    summaries
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 6, 15).unwrap()
    }

    #[test]
    fn test_two_supplier_scenario() {
        // 供应商 2007 两条（一条已清算、一条逾期 5 天），
        // 供应商 3010 一条（未到期）
        let records = vec![
            RawRecord::new(json!({
                "Supplier": "2007",
                "SupplierName": "Anadolu Tedarik A.S.",
                "AmountInCompanyCodeCurrency": "100.0",
                "CompanyCodeCurrency": "TRY",
                "NetDueDate": "2025-07-01",
                "AUGBL": "5200000001"
            })),
            RawRecord::new(json!({
                "Supplier": "2007",
                "AmountInCompanyCodeCurrency": "50.0",
                "NetDueDate": "2025-06-10"
            })),
            RawRecord::new(json!({
                "Supplier": "3010",
                "SupplierName": "Marmara Lojistik",
                "AmountInCompanyCodeCurrency": "75.0",
                "NetDueDate": "2025-08-01"
            })),
        ];

        let summaries = aggregate(&records, today());
        assert_eq!(summaries.len(), 2);

        let first = &summaries[0];
        assert_eq!(first.supplier, "2007");
        assert_eq!(first.item_count, 2);
        assert_eq!(first.total_amount, 150.0);
        assert_eq!(first.overdue_count, 1);

        let second = &summaries[1];
        assert_eq!(second.supplier, "3010");
        assert_eq!(second.item_count, 1);
        assert_eq!(second.overdue_count, 0);
    }

    #[test]
    fn test_cleared_but_overdue_still_counts() {
        // 已清算但到期日在过去的项仍计入逾期数：
        // 沿用观测到的上游行为，是否应排除已清算项悬而未决
        let records = vec![RawRecord::new(json!({
            "Supplier": "2007",
            "NetDueDate": "2025-06-10",
            "AUGBL": "5200000001"
        }))];
        let summaries = aggregate(&records, today());
        assert_eq!(summaries[0].overdue_count, 1);
    }

    #[test]
    fn test_unknown_supplier_bucket() {
        let records = vec![RawRecord::new(json!({"DMBTR": "10.0"}))];
        let summaries = aggregate(&records, today());
        assert_eq!(summaries[0].supplier, "UNKNOWN");
        assert_eq!(summaries[0].total_amount, 10.0);
    }

    #[test]
    fn test_currency_seeded_from_first_occurrence() {
        let records = vec![
            RawRecord::new(json!({"Supplier": "2007"})),
            RawRecord::new(json!({"Supplier": "2007", "CompanyCodeCurrency": "EUR"})),
        ];
        // 首条缺货币 → 立即回退 TRY，后续成员不再改写
        let summaries = aggregate(&records, today());
        assert_eq!(summaries[0].currency, "TRY");
    }

    #[test]
    fn test_insertion_order_preserved() {
        let records = vec![
            RawRecord::new(json!({"Supplier": "3010"})),
            RawRecord::new(json!({"Supplier": "2007"})),
            RawRecord::new(json!({"Supplier": "3010"})),
        ];
        let summaries = aggregate(&records, today());
        assert_eq!(summaries[0].supplier, "3010");
        assert_eq!(summaries[1].supplier, "2007");
    }

    #[test]
    fn test_legacy_vendor_key_fallback() {
        let records = vec![
            RawRecord::new(json!({"Vendor": "2007", "DMBTR": "5.0"})),
            RawRecord::new(json!({"LIFNR": "2007", "DMBTR": "5.0"})),
        ];
        let summaries = aggregate(&records, today());
        assert_eq!(summaries.len(), 1);
        assert_eq!(summaries[0].item_count, 2);
        assert_eq!(summaries[0].total_amount, 10.0);
    }

    #[test]
    fn test_due_today_counts_as_overdue_in_summary() {
        // 与行项目过滤不同：汇总沿用上游带时刻的比较，
        // 当天到期在日粒度下已经逾期
        let records = vec![
            RawRecord::new(json!({
                "Supplier": "2007",
                "NetDueDate": "2025-06-15"
            })),
            RawRecord::new(json!({
                "Supplier": "2007",
                "NetDueDate": "2025-06-16"
            })),
        ];
        let summaries = aggregate(&records, today());
        assert_eq!(summaries[0].overdue_count, 1);
    }
}
