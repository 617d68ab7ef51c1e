use std::cmp::Ordering;

use chrono::NaiveDate;

use crate::model::project::ALL_PROJECT_ID;
use crate::model::task::Task;

/// Status facet of the task filter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatusFilter {
    #[default]
    All,
    Pending,
    Completed,
    /// Tasks whose due date is exactly the filter's `today`
    Today,
}

impl StatusFilter {
    /// Parse a filter name. Unrecognized names pass everything, matching the
    /// permissive behavior of the original filter radio group.
    pub fn parse(s: &str) -> StatusFilter {
        match s {
            "pending" => StatusFilter::Pending,
            "completed" => StatusFilter::Completed,
            "today" => StatusFilter::Today,
            _ => StatusFilter::All,
        }
    }
}

/// The active view filter. `today` is passed in by the caller so that
/// `visible_tasks` stays deterministic for a given input.
#[derive(Debug, Clone)]
pub struct Filter {
    /// Project ID to show, or `all` for every project
    pub project: String,
    pub status: StatusFilter,
    /// Free-text search term; ignored when empty after trimming
    pub search: String,
    /// The caller's current local date, used by the `today` status filter
    pub today: NaiveDate,
}

impl Filter {
    pub fn new(today: NaiveDate) -> Self {
        Filter {
            project: ALL_PROJECT_ID.to_string(),
            status: StatusFilter::All,
            search: String::new(),
            today,
        }
    }
}

/// Compute the filtered, sorted view of the task list.
///
/// All active predicates are combined with logical AND: project equality
/// (unless the filter is `all`), the status facet, and a case-insensitive
/// substring match of the search term against title or description.
///
/// Sort order, stable: incomplete before completed, then earlier due date
/// when both sides have one, then priority (high, medium, low).
pub fn visible_tasks<'a>(tasks: &'a [Task], filter: &Filter) -> Vec<&'a Task> {
    let term = filter.search.trim().to_lowercase();

    let mut visible: Vec<&Task> = tasks
        .iter()
        .filter(|t| passes_project(t, &filter.project))
        .filter(|t| passes_status(t, filter.status, filter.today))
        .filter(|t| term.is_empty() || matches_search(t, &term))
        .collect();

    // The comparator is not a total order (a dated and an undated task
    // compare by priority alone), so std's sort is off the table: it may
    // reject inconsistent comparators. Insertion sort is stable and makes
    // no total-order assumptions; the visible list is small.
    insertion_sort_by(&mut visible, compare_tasks);
    visible
}

fn passes_project(task: &Task, project: &str) -> bool {
    project == ALL_PROJECT_ID || task.project == project
}

fn passes_status(task: &Task, status: StatusFilter, today: NaiveDate) -> bool {
    match status {
        StatusFilter::All => true,
        StatusFilter::Pending => !task.completed,
        StatusFilter::Completed => task.completed,
        StatusFilter::Today => task.due_date == Some(today),
    }
}

fn matches_search(task: &Task, term_lower: &str) -> bool {
    task.title.to_lowercase().contains(term_lower)
        || task.description.to_lowercase().contains(term_lower)
}

/// Pairwise ordering: completion, then due date (only when both present),
/// then priority.
fn compare_tasks(a: &Task, b: &Task) -> Ordering {
    if a.completed != b.completed {
        // false < true: incomplete tasks first
        return a.completed.cmp(&b.completed);
    }
    if let (Some(da), Some(db)) = (a.due_date, b.due_date) {
        if da != db {
            return da.cmp(&db);
        }
    }
    a.priority.rank().cmp(&b.priority.rank())
}

fn insertion_sort_by<T: Copy>(items: &mut [T], cmp: impl Fn(T, T) -> Ordering) {
    for i in 1..items.len() {
        let mut j = i;
        while j > 0 && cmp(items[j - 1], items[j]) == Ordering::Greater {
            items.swap(j - 1, j);
            j -= 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::task::Priority;

    fn task(id: &str, title: &str, project: &str) -> Task {
        let mut t = Task::new(id.to_string(), title.to_string(), project.to_string());
        t.created_at = "2024-01-01T00:00:00+00:00".to_string();
        t
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn base_filter() -> Filter {
        Filter::new(date(2024, 1, 10))
    }

    #[test]
    fn project_filter_returns_only_matching_tasks() {
        let tasks = vec![
            task("1", "a", "work"),
            task("2", "b", "personal"),
            task("3", "c", "work"),
        ];
        let mut filter = base_filter();
        filter.project = "work".to_string();

        let visible = visible_tasks(&tasks, &filter);
        assert!(visible.iter().all(|t| t.project == "work"));
        assert_eq!(visible.len(), 2);
    }

    #[test]
    fn all_project_filter_passes_everything() {
        let tasks = vec![task("1", "a", "work"), task("2", "b", "personal")];
        let visible = visible_tasks(&tasks, &base_filter());
        assert_eq!(visible.len(), 2);
    }

    #[test]
    fn pending_and_completed_filters_partition_tasks() {
        let mut done = task("1", "done", "work");
        done.completed = true;
        let tasks = vec![done, task("2", "open", "work")];

        let mut filter = base_filter();
        filter.status = StatusFilter::Pending;
        let pending = visible_tasks(&tasks, &filter);
        assert_eq!(pending.len(), 1);
        assert_eq!(pending[0].id, "2");

        filter.status = StatusFilter::Completed;
        let completed = visible_tasks(&tasks, &filter);
        assert_eq!(completed.len(), 1);
        assert_eq!(completed[0].id, "1");
    }

    #[test]
    fn today_filter_requires_exact_due_date() {
        let mut due_today = task("1", "now", "work");
        due_today.due_date = Some(date(2024, 1, 10));
        let mut due_later = task("2", "later", "work");
        due_later.due_date = Some(date(2024, 1, 11));
        let undated = task("3", "whenever", "work");

        let mut filter = base_filter();
        filter.status = StatusFilter::Today;
        let tasks = [due_today, due_later, undated];
        let visible = visible_tasks(&tasks, &filter);
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].id, "1");
    }

    #[test]
    fn search_matches_title_or_description_case_insensitively() {
        let mut by_desc = task("1", "Errands", "personal");
        by_desc.description = "Pick up the DRY cleaning".to_string();
        let by_title = task("2", "Dry the herbs", "personal");
        let neither = task("3", "Taxes", "personal");

        let mut filter = base_filter();
        filter.search = "  dry  ".to_string();
        let tasks = [by_desc, by_title, neither];
        let visible = visible_tasks(&tasks, &filter);
        let ids: Vec<_> = visible.iter().map(|t| t.id.as_str()).collect();
        assert_eq!(ids, ["1", "2"]);
    }

    #[test]
    fn search_and_status_are_combined_with_and() {
        let mut done_match = task("1", "buy milk", "shopping");
        done_match.completed = true;
        let open_match = task("2", "buy eggs", "shopping");

        let mut filter = base_filter();
        filter.status = StatusFilter::Pending;
        filter.search = "buy".to_string();
        let tasks = [done_match, open_match];
        let visible = visible_tasks(&tasks, &filter);
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].id, "2");
    }

    #[test]
    fn earlier_due_date_sorts_first_then_priority() {
        let mut a = task("a", "low late", "work");
        a.due_date = Some(date(2024, 1, 2));
        a.priority = Priority::Low;
        let mut b = task("b", "high early", "work");
        b.due_date = Some(date(2024, 1, 1));
        b.priority = Priority::High;

        let tasks = vec![a, b];
        let visible = visible_tasks(&tasks, &base_filter());
        assert_eq!(visible[0].id, "b");
        assert_eq!(visible[1].id, "a");
    }

    #[test]
    fn incomplete_sorts_before_completed_regardless_of_other_fields() {
        let a = task("a", "open", "work");
        let mut b = task("b", "done", "work");
        b.completed = true;
        b.due_date = Some(date(2023, 1, 1));
        b.priority = Priority::High;

        let tasks = vec![b, a];
        let visible = visible_tasks(&tasks, &base_filter());
        assert_eq!(visible[0].id, "a");
        assert_eq!(visible[1].id, "b");
    }

    #[test]
    fn missing_due_date_falls_through_to_priority() {
        let mut dated_low = task("a", "dated", "work");
        dated_low.due_date = Some(date(2024, 1, 1));
        dated_low.priority = Priority::Low;
        let mut undated_high = task("b", "undated", "work");
        undated_high.priority = Priority::High;

        let tasks = vec![dated_low, undated_high];
        let visible = visible_tasks(&tasks, &base_filter());
        assert_eq!(visible[0].id, "b");
    }

    #[test]
    fn sort_is_stable_for_equal_tasks() {
        let a = task("a", "first", "work");
        let b = task("b", "second", "work");
        let tasks = vec![a, b];
        let visible = visible_tasks(&tasks, &base_filter());
        assert_eq!(visible[0].id, "a");
        assert_eq!(visible[1].id, "b");
    }

    #[test]
    fn identical_inputs_produce_identical_results() {
        let mut tasks = Vec::new();
        for i in 0..20 {
            let mut t = task(&format!("t{}", i), &format!("task {}", i), "work");
            if i % 3 == 0 {
                t.completed = true;
            }
            if i % 4 != 0 {
                t.due_date = Some(date(2024, 1, 1 + (i % 7) as u32));
            }
            t.priority = match i % 3 {
                0 => Priority::High,
                1 => Priority::Medium,
                _ => Priority::Low,
            };
            tasks.push(t);
        }
        let filter = base_filter();
        let first: Vec<&str> = visible_tasks(&tasks, &filter)
            .iter()
            .map(|t| t.id.as_str())
            .collect();
        let second: Vec<&str> = visible_tasks(&tasks, &filter)
            .iter()
            .map(|t| t.id.as_str())
            .collect();
        assert_eq!(first, second);
    }

    #[test]
    fn status_filter_parse_is_permissive() {
        assert_eq!(StatusFilter::parse("pending"), StatusFilter::Pending);
        assert_eq!(StatusFilter::parse("completed"), StatusFilter::Completed);
        assert_eq!(StatusFilter::parse("today"), StatusFilter::Today);
        assert_eq!(StatusFilter::parse("all"), StatusFilter::All);
        assert_eq!(StatusFilter::parse("bogus"), StatusFilter::All);
    }
}
