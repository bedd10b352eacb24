//! Filter View
//!
//! Tab-based selection over the local task list.

use crate::models::{Category, Task};

/// Tasks visible under `category`, in list order
pub fn visible_tasks(tasks: &[Task], category: Category) -> Vec<Task> {
    tasks.iter().filter(|task| category.matches(task)).cloned().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::TaskId;

    fn make_task(id: u32, completed: bool, important: bool, archived: bool) -> Task {
        Task {
            id: TaskId::new(id.to_string()),
            text: format!("Task {}", id),
            completed,
            important,
            archived,
            created_at: None,
        }
    }

    fn sample() -> Vec<Task> {
        vec![
            make_task(1, false, true, false),
            make_task(2, true, false, false),
            make_task(3, true, true, true),
            make_task(4, false, false, true),
            make_task(5, false, false, false),
        ]
    }

    fn ids(tasks: &[Task]) -> Vec<&str> {
        tasks.iter().map(|t| t.id.as_str()).collect()
    }

    #[test]
    fn test_all_is_identity() {
        let tasks = sample();
        assert_eq!(visible_tasks(&tasks, Category::All), tasks);
    }

    #[test]
    fn test_flag_categories_keep_order() {
        let tasks = sample();
        assert_eq!(ids(&visible_tasks(&tasks, Category::Important)), vec!["1", "3"]);
        assert_eq!(ids(&visible_tasks(&tasks, Category::Complete)), vec!["2", "3"]);
        assert_eq!(ids(&visible_tasks(&tasks, Category::Archived)), vec!["3", "4"]);
    }

    #[test]
    fn test_filter_partitions_list() {
        let tasks = sample();
        for category in Category::ALL {
            let kept = visible_tasks(&tasks, category);
            assert!(kept.iter().all(|t| category.matches(t)));

            let dropped: Vec<&Task> = tasks.iter().filter(|t| !kept.contains(t)).collect();
            assert!(dropped.iter().all(|t| !category.matches(t)));
            assert_eq!(kept.len() + dropped.len(), tasks.len());
        }
    }

    #[test]
    fn test_empty_list() {
        for category in Category::ALL {
            assert!(visible_tasks(&[], category).is_empty());
        }
    }
}
