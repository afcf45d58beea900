//! KPI 计算

use std::collections::HashSet;

use chrono::NaiveDate;
use voi_domain::{ItemStatus, LineItem};

/// 仪表盘顶部指标
///
/// 始终基于完整数据集单趟计算，与当前过滤/搜索状态无关。
#[derive(Debug, Clone, PartialEq)]
pub struct Kpis {
    pub total_items: u64,
    pub total_amount: f64,
    pub currency: String,
    pub supplier_count: u64,
    pub open_count: u64,
    pub overdue_count: u64,
    pub cleared_count: u64,
}

pub fn kpis(items: &[LineItem], today: NaiveDate) -> Kpis {
    let mut total_amount = 0.0;
    let mut currency = "TRY".to_string();
    let mut suppliers: HashSet<&str> = HashSet::new();
    let mut open_count = 0;
    let mut overdue_count = 0;
    let mut cleared_count = 0;

    for item in items {
        total_amount += item.amount_in_company_code_currency;
        if !item.company_code_currency.is_empty() {
            currency = item.company_code_currency.clone();
        }
        if !item.supplier.is_empty() {
            suppliers.insert(item.supplier.as_str());
        }
        match item.status(today) {
            ItemStatus::Open => open_count += 1,
            ItemStatus::Overdue => overdue_count += 1,
            ItemStatus::Cleared => cleared_count += 1,
        }
    }

    Kpis {
        total_items: items.len() as u64,
        total_amount,
        currency,
        supplier_count: suppliers.len() as u64,
        open_count,
        overdue_count,
        cleared_count,
    }
}
