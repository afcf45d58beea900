//! 不可变仪表盘状态容器

use voi_domain::LineItem;

/// 状态过滤标签
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatusFilter {
    #[default]
    All,
    Open,
    Overdue,
    Cleared,
}

/// 排序字段：金额与逾期天数按数值比较，其余按字符串比较
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortField {
    Supplier,
    SupplierName,
    CompanyCode,
    AccountingDocument,
    PostingDate,
    NetDueDate,
    Amount,
    ArrearsInDays,
}

/// 仪表盘状态
///
/// 每次变更产生一个新状态，旧状态不被修改。
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardState {
    pub items: Vec<LineItem>,
    pub filter: StatusFilter,
    pub search: String,
    pub sort_field: SortField,
    pub sort_desc: bool,
}

impl Default for DashboardState {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            filter: StatusFilter::All,
            search: String::new(),
            // 原前端默认按过账日期倒序
            sort_field: SortField::PostingDate,
            sort_desc: true,
        }
    }
}

/// 状态变更动作
#[derive(Debug, Clone)]
pub enum Action {
    /// 整批替换数据集（每次拉取后整体丢弃重建）
    SetItems(Vec<LineItem>),
    SetFilter(StatusFilter),
    SetSearch(String),
    SetSort(SortField, bool),
}

/// 单一更新函数：应用动作，返回新状态
pub fn apply(state: &DashboardState, action: Action) -> DashboardState {
    let mut next = state.clone();
    match action {
        Action::SetItems(items) => next.items = items,
        Action::SetFilter(filter) => next.filter = filter,
        Action::SetSearch(search) => next.search = search.trim().to_string(),
        Action::SetSort(field, desc) => {
            next.sort_field = field;
            next.sort_desc = desc;
        }
    }
    next
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_apply_does_not_mutate_previous_state() {
        let initial = DashboardState::default();
        let next = apply(&initial, Action::SetFilter(StatusFilter::Overdue));
        assert_eq!(initial.filter, StatusFilter::All);
        assert_eq!(next.filter, StatusFilter::Overdue);
    }

    #[test]
    fn test_set_search_trims() {
        let state = apply(&DashboardState::default(), Action::SetSearch("  2007  ".into()));
        assert_eq!(state.search, "2007");
    }

    #[test]
    fn test_set_items_replaces_wholesale() {
        let state = apply(
            &DashboardState::default(),
            Action::SetItems(vec![LineItem::default()]),
        );
        assert_eq!(state.items.len(), 1);
        let state = apply(&state, Action::SetItems(Vec::new()));
        assert!(state.items.is_empty());
    }

    #[test]
    fn test_set_sort() {
        let state = apply(
            &DashboardState::default(),
            Action::SetSort(SortField::Amount, false),
        );
        assert_eq!(state.sort_field, SortField::Amount);
        assert!(!state.sort_desc);
    }

    #[test]
    fn test_default_sort_is_posting_date_desc() {
        let state = DashboardState::default();
        assert_eq!(state.sort_field, SortField::PostingDate);
        assert!(state.sort_desc);
    }
}
