use tasklist_core::TodoItem;

use crate::state::PaginationControls;

/// Output side of the client.
///
/// The controller never formats anything itself; every visible change goes
/// through one of these calls.
pub trait View {
    /// Replace the whole list. An empty slice means "no tasks".
    fn render_items(&mut self, items: &[TodoItem]);

    /// Replace the list with a single inline error row.
    fn render_error(&mut self, message: &str);

    fn render_pagination(&mut self, controls: &PaginationControls);

    /// Patch one row's completion state in place.
    fn mark_completed(&mut self, id: i64, is_completed: bool);

    /// Clear the new-task input after a successful add.
    fn clear_input(&mut self);

    /// Blocking, user-visible failure notice.
    fn alert(&mut self, message: &str);

    /// Ask the user a yes/no question.
    fn confirm(&mut self, message: &str) -> bool;
}
