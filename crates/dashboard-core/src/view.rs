//! 过滤/搜索/排序视图重算

use std::cmp::Ordering;

use chrono::NaiveDate;
use voi_domain::{ItemStatus, LineItem};

use crate::state::{DashboardState, SortField, StatusFilter};

/// 从完整数据集派生当前视图
///
/// 幂等且全函数：相同输入总是产出相同的有序列表。排序使用
/// 稳定排序，比较相等的行保持原有相对顺序；倒序标志翻转比较
/// 结果而不是反转列表。
pub fn view(state: &DashboardState, today: NaiveDate) -> Vec<LineItem> {
    let query = state.search.to_lowercase();

    let mut rows: Vec<LineItem> = state
        .items
        .iter()
        .filter(|item| matches_filter(item, state.filter, today))
        .filter(|item| matches_search(item, &query))
        .cloned()
        .collect();

    rows.sort_by(|a, b| {
        let ordering = compare(a, b, state.sort_field);
        if state.sort_desc {
            ordering.reverse()
        } else {
            ordering
        }
    });

    rows
}

fn matches_filter(item: &LineItem, filter: StatusFilter, today: NaiveDate) -> bool {
    match filter {
        StatusFilter::All => true,
        StatusFilter::Open => item.status(today) == ItemStatus::Open,
        StatusFilter::Overdue => item.status(today) == ItemStatus::Overdue,
        StatusFilter::Cleared => item.status(today) == ItemStatus::Cleared,
    }
}

/// 大小写不敏感的子串匹配，四个字段取逻辑或
fn matches_search(item: &LineItem, query: &str) -> bool {
    if query.is_empty() {
        return true;
    }
    item.supplier.to_lowercase().contains(query)
        || item.supplier_name.to_lowercase().contains(query)
        || item.accounting_document.to_lowercase().contains(query)
        || item.document_reference_id.to_lowercase().contains(query)
}

fn compare(a: &LineItem, b: &LineItem, field: SortField) -> Ordering {
    match field {
        SortField::Amount => numeric(
            a.amount_in_company_code_currency,
            b.amount_in_company_code_currency,
        ),
        SortField::ArrearsInDays => numeric(a.arrears_in_days as f64, b.arrears_in_days as f64),
        SortField::Supplier => a.supplier.cmp(&b.supplier),
        SortField::SupplierName => a.supplier_name.cmp(&b.supplier_name),
        SortField::CompanyCode => a.company_code.cmp(&b.company_code),
        SortField::AccountingDocument => a.accounting_document.cmp(&b.accounting_document),
        SortField::PostingDate => a.posting_date.cmp(&b.posting_date),
        SortField::NetDueDate => a.net_due_date.cmp(&b.net_due_date),
    }
}

fn numeric(a: f64, b: f64) -> Ordering {
    a.partial_cmp(&b).unwrap_or(Ordering::Equal)
}
