//! To-do status filter and progress.

use crate::model::todo::TodoItem;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum StatusFilter {
    #[default]
    All,
    Active,
    Completed,
}

impl StatusFilter {
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim() {
            "all" => Some(Self::All),
            "active" => Some(Self::Active),
            "completed" => Some(Self::Completed),
            _ => None,
        }
    }

    fn accepts(self, item: &TodoItem) -> bool {
        match self {
            Self::All => true,
            Self::Active => !item.completed,
            Self::Completed => item.completed,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TodoSummary {
    pub total: usize,
    pub completed: usize,
    pub active: usize,
    pub progress_percent: f64,
}

pub fn filter_todos(items: &[TodoItem], filter: StatusFilter) -> Vec<&TodoItem> {
    items.iter().filter(|item| filter.accepts(item)).collect()
}

/// `completed / total * 100`, defined as 0 for an empty list.
pub fn progress_percent(completed: usize, total: usize) -> f64 {
    if total == 0 {
        return 0.0;
    }
    completed as f64 * 100.0 / total as f64
}

pub fn summarize(items: &[TodoItem]) -> TodoSummary {
    let completed = items.iter().filter(|item| item.completed).count();
    TodoSummary {
        total: items.len(),
        completed,
        active: items.len() - completed,
        progress_percent: progress_percent(completed, items.len()),
    }
}

#[cfg(test)]
mod tests {
    use super::{filter_todos, progress_percent, summarize, StatusFilter};
    use crate::model::id::new_record_id;
    use crate::model::todo::{Priority, TodoItem};

    fn item(text: &str, completed: bool) -> TodoItem {
        TodoItem {
            id: new_record_id(),
            text: text.to_string(),
            completed,
            priority: Priority::Medium,
            due_date: None,
        }
    }

    #[test]
    fn progress_handles_empty_and_partial() {
        assert_eq!(progress_percent(0, 0), 0.0);
        assert_eq!(progress_percent(3, 5), 60.0);
        assert_eq!(progress_percent(5, 5), 100.0);
    }

    #[test]
    fn status_filter_partitions_items() {
        let items = vec![item("a", true), item("b", false), item("c", true)];
        assert_eq!(filter_todos(&items, StatusFilter::All).len(), 3);
        assert_eq!(filter_todos(&items, StatusFilter::Active).len(), 1);
        assert_eq!(filter_todos(&items, StatusFilter::Completed).len(), 2);

        let summary = summarize(&items);
        assert_eq!(summary.completed, 2);
        assert_eq!(summary.active, 1);
    }
}
