//! Wires pointer input and forms to the board service.

use super::{BoardLayout, BoardView, CreateFormView, render_board};
use crate::board::gesture::{DragInterpreter, GestureOutcome, Point, Rect};
use crate::board::services::{BoardError, BoardResult, BoardService};
use crate::config::BoardConfig;
use crate::project::ports::ProjectApi;
use crate::task::domain::{Task, TaskDomainError, TaskDraft, TaskId};
use crate::task::ports::TaskApi;
use mockable::Clock;

/// Drives one board: builds views, interprets gestures and owns modal
/// state.
pub struct BoardCoordinator<T, P, C>
where
    T: TaskApi,
    P: ProjectApi,
    C: Clock + Send + Sync,
{
    service: BoardService<T, P, C>,
    layout: BoardLayout,
    gesture: DragInterpreter,
    create_form: Option<CreateFormView>,
}

impl<T, P, C> BoardCoordinator<T, P, C>
where
    T: TaskApi,
    P: ProjectApi,
    C: Clock + Send + Sync,
{
    /// Creates a coordinator.
    #[must_use]
    pub const fn new(
        service: BoardService<T, P, C>,
        layout: BoardLayout,
        activation_distance: u32,
    ) -> Self {
        Self {
            service,
            layout,
            gesture: DragInterpreter::new(activation_distance),
            create_form: None,
        }
    }

    /// Creates a coordinator with the default layout and the configured
    /// activation distance.
    #[must_use]
    pub fn from_config(service: BoardService<T, P, C>, config: &BoardConfig) -> Self {
        Self::new(service, BoardLayout::default(), config.drag_activation_distance)
    }

    /// Returns the underlying service.
    #[must_use]
    pub const fn service(&self) -> &BoardService<T, P, C> {
        &self.service
    }

    /// Returns the layout.
    #[must_use]
    pub const fn layout(&self) -> &BoardLayout {
        &self.layout
    }

    /// Projects the current state.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::StateUnavailable`] when
    /// the workspace lock is poisoned.
    pub fn view(&self) -> BoardResult<BoardView> {
        let dragging = self
            .gesture
            .is_dragging()
            .then(|| self.gesture.active_task())
            .flatten();
        self.service.read(|workspace| {
            BoardView::from_workspace(workspace, self.create_form.clone(), dragging)
        })
    }

    /// Renders the current state as text.
    ///
    /// # Errors
    ///
    /// Returns a state or rendering error.
    pub fn render(&self) -> BoardResult<String> {
        render_board(&self.view()?)
    }

    /// Starts a gesture if `point` is over a card. Returns whether it was.
    ///
    /// # Errors
    ///
    /// See [`BoardCoordinator::view`].
    pub fn pointer_down(&mut self, point: Point) -> BoardResult<bool> {
        let view = self.view()?;
        let Some((task_id, card)) = self.layout.card_at(&view, point) else {
            return Ok(false);
        };
        self.gesture.press(task_id, point, card);
        Ok(true)
    }

    /// Follows the pointer.
    pub fn pointer_move(&mut self, point: Point) {
        self.gesture.move_to(point);
    }

    /// Ends the gesture: a click opens the task, a drag is applied as a
    /// move.
    ///
    /// # Errors
    ///
    /// Returns the service error of the resulting command.
    pub async fn pointer_up(&mut self, point: Point) -> BoardResult<GestureOutcome> {
        let view = self.view()?;
        let zones = self.layout.drop_zones(&view);
        let outcome = self.gesture.release(point, &zones);
        match outcome {
            GestureOutcome::Nothing => {}
            GestureOutcome::Click(task_id) => self.service.select_task(Some(task_id))?,
            GestureOutcome::Move(command) => {
                self.service.move_task(command.active, command.target).await?;
            }
        }
        Ok(outcome)
    }

    /// Abandons the current gesture.
    pub const fn cancel_drag(&mut self) {
        self.gesture.cancel();
    }

    /// Returns where the dragged card is drawn.
    #[must_use]
    pub fn dragged_rect(&self) -> Option<Rect> {
        self.gesture.dragged_rect()
    }

    /// Opens a task's detail view.
    ///
    /// # Errors
    ///
    /// See [`BoardCoordinator::view`].
    pub fn open_detail(&self, task_id: TaskId) -> BoardResult<()> {
        self.service.select_task(Some(task_id))
    }

    /// Closes the detail view.
    ///
    /// # Errors
    ///
    /// See [`BoardCoordinator::view`].
    pub fn close_detail(&self) -> BoardResult<()> {
        self.service.select_task(None)
    }

    /// Opens an empty add-task form.
    pub fn open_create_form(&mut self) {
        self.create_form = Some(CreateFormView::default());
    }

    /// Closes the add-task form.
    pub fn close_create_form(&mut self) {
        self.create_form = None;
    }

    /// Returns whether the add-task form is open.
    #[must_use]
    pub const fn is_create_form_open(&self) -> bool {
        self.create_form.is_some()
    }

    /// Submits the add-task form.
    ///
    /// Invalid input keeps the form open with its errors and yields
    /// `Ok(None)`. Success closes the form.
    ///
    /// # Errors
    ///
    /// Returns service errors other than input validation; the form stays
    /// open.
    pub async fn submit_create_form(&mut self, draft: TaskDraft) -> BoardResult<Option<Task>> {
        match self.service.add_task(draft).await {
            Ok(task) => {
                self.create_form = None;
                Ok(Some(task))
            }
            Err(BoardError::Task(TaskDomainError::Validation { missing })) => {
                self.create_form = Some(CreateFormView {
                    missing: missing.fields().to_vec(),
                    error: None,
                });
                Ok(None)
            }
            Err(BoardError::Task(err @ TaskDomainError::InvalidPriority(_))) => {
                self.show_form_error(&err);
                Ok(None)
            }
            Err(err) => {
                self.show_form_error(&err);
                Err(err)
            }
        }
    }

    fn show_form_error(&mut self, err: &impl std::fmt::Display) {
        self.create_form = Some(CreateFormView {
            missing: Vec::new(),
            error: Some(err.to_string()),
        });
    }
}
