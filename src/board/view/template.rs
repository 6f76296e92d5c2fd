//! Plain-text board rendering.

use super::BoardView;
use crate::board::services::{BoardError, BoardResult};
use minijinja::Environment;

/// Text template for a [`BoardView`].
pub const BOARD_TEMPLATE: &str = r"{% if project -%}
# {{ project.name }} [{{ project.status }}] {{ project.incomplete_count }} open
{% else -%}
# No project selected
{% endif -%}
{% for column in columns %}
## {{ column.title }} ({{ column.cards | length }})
{% for card in column.cards -%}
{{ '>' if card.selected else '-' }} {{ card.title }} | {{ card.assignee }} | {{ card.priority }} | due {{ card.due_date }}
{% endfor -%}
{% endfor -%}
{% if selected_task %}
Selected: {{ selected_task.title }} ({{ selected_task.status }})
{{ selected_task.description }}
{% endif -%}
{% if create_form %}
New task form open{% if create_form.missing %}; missing: {{ create_form.missing | join(', ') }}{% endif %}{% if create_form.error %}; {{ create_form.error }}{% endif %}
{% endif -%}
";

/// Renders `view` through [`BOARD_TEMPLATE`].
///
/// # Errors
///
/// Returns [`BoardError::Render`] when template evaluation fails.
pub fn render_board(view: &BoardView) -> BoardResult<String> {
    let mut environment = Environment::new();
    environment.set_trim_blocks(true);
    environment
        .render_str(BOARD_TEMPLATE, view)
        .map_err(|error| BoardError::Render(error.to_string()))
}
