//! View state, key-to-intent mapping, and rendering
//!
//! Everything here is UI-local: the input buffer, the insert/normal mode,
//! and the selection never enter the store. The view computes new task ids
//! and validates input before it builds an action; the core trusts both.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::{Constraint, Layout, Position},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
    Frame,
};
use tudu_core::{AppState, TodoAction, Visibility};

/// What a key press asks the main loop to do.
#[derive(Debug)]
pub enum KeyOutcome {
    /// Send an intent to the store.
    Dispatch(TodoAction),
    /// View-only change, redraw without touching state.
    Redraw,
    Quit,
    Ignored,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
enum Mode {
    #[default]
    Normal,
    Insert,
}

/// UI-local state: input buffer, mode, and list selection.
#[derive(Default)]
pub struct UiState {
    mode: Mode,
    input: String,
    selected: usize,
}

impl UiState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Map a key press to an outcome, given the current app state.
    pub fn handle_key(&mut self, key: KeyEvent, state: &AppState) -> KeyOutcome {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return KeyOutcome::Quit;
        }

        match self.mode {
            Mode::Normal => self.handle_normal_key(key, state),
            Mode::Insert => self.handle_insert_key(key, state),
        }
    }

    fn handle_normal_key(&mut self, key: KeyEvent, state: &AppState) -> KeyOutcome {
        let visible = state.visible_tasks().count();
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => KeyOutcome::Quit,
            KeyCode::Char('a') | KeyCode::Char('i') => {
                self.mode = Mode::Insert;
                KeyOutcome::Redraw
            }
            KeyCode::Char('j') | KeyCode::Down => {
                self.selected = (self.selected + 1).min(visible.saturating_sub(1));
                KeyOutcome::Redraw
            }
            KeyCode::Char('k') | KeyCode::Up => {
                self.selected = self.selected.saturating_sub(1);
                KeyOutcome::Redraw
            }
            KeyCode::Char(' ') | KeyCode::Char('x') => match self.selected_task_id(state) {
                Some(id) => KeyOutcome::Dispatch(TodoAction::TaskToggle(id)),
                None => KeyOutcome::Ignored,
            },
            KeyCode::Char('d') => match self.selected_task_id(state) {
                Some(id) => KeyOutcome::Dispatch(TodoAction::TaskDelete(id)),
                None => KeyOutcome::Ignored,
            },
            KeyCode::Char('f') | KeyCode::Tab => {
                KeyOutcome::Dispatch(TodoAction::VisibilitySet(state.visibility.cycle()))
            }
            KeyCode::Char('1') => KeyOutcome::Dispatch(TodoAction::VisibilitySet(Visibility::All)),
            KeyCode::Char('2') => {
                KeyOutcome::Dispatch(TodoAction::VisibilitySet(Visibility::Active))
            }
            KeyCode::Char('3') => {
                KeyOutcome::Dispatch(TodoAction::VisibilitySet(Visibility::Completed))
            }
            _ => KeyOutcome::Ignored,
        }
    }

    fn handle_insert_key(&mut self, key: KeyEvent, state: &AppState) -> KeyOutcome {
        match key.code {
            KeyCode::Esc => {
                self.input.clear();
                self.mode = Mode::Normal;
                KeyOutcome::Redraw
            }
            KeyCode::Enter => {
                // The view owns validation and id assignment, not the core.
                let text = self.input.trim().to_string();
                self.input.clear();
                if text.is_empty() {
                    KeyOutcome::Redraw
                } else {
                    KeyOutcome::Dispatch(TodoAction::TaskAdd {
                        id: state.next_id(),
                        text,
                        completed: false,
                    })
                }
            }
            KeyCode::Backspace => {
                self.input.pop();
                KeyOutcome::Redraw
            }
            KeyCode::Char(c) => {
                self.input.push(c);
                KeyOutcome::Redraw
            }
            _ => KeyOutcome::Ignored,
        }
    }

    /// Id of the selected task in the filtered view, if any.
    fn selected_task_id(&self, state: &AppState) -> Option<u64> {
        let visible = state.visible_tasks().count();
        state
            .visible_tasks()
            .nth(clamp_selection(self.selected, visible))
            .map(|t| t.id)
    }
}

/// Keep the selection inside the visible list after deletes and filtering.
fn clamp_selection(selected: usize, visible: usize) -> usize {
    selected.min(visible.saturating_sub(1))
}

fn filter_label(visibility: Visibility) -> &'static str {
    match visibility {
        Visibility::All => "All",
        Visibility::Active => "Active",
        Visibility::Completed => "Completed",
    }
}

/// Render the whole screen from the current state.
pub fn draw(frame: &mut Frame, state: &AppState, ui: &UiState) {
    let [input_area, list_area, status_area] = Layout::vertical([
        Constraint::Length(3),
        Constraint::Min(1),
        Constraint::Length(1),
    ])
    .areas(frame.area());

    // Input bar
    let inserting = ui.mode == Mode::Insert;
    let input_text = if ui.input.is_empty() && !inserting {
        "press a to add a task"
    } else {
        ui.input.as_str()
    };
    let input_style = if ui.input.is_empty() && !inserting {
        Style::default().fg(Color::DarkGray)
    } else {
        Style::default()
    };
    let input_block = Block::default()
        .title(" tudu ")
        .borders(Borders::ALL)
        .border_style(if inserting {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default()
        });
    frame.render_widget(
        Paragraph::new(input_text).style(input_style).block(input_block),
        input_area,
    );
    if inserting {
        let cursor_x = input_area.x + 1 + ui.input.chars().count() as u16;
        frame.set_cursor_position(Position::new(
            cursor_x.min(input_area.right().saturating_sub(2)),
            input_area.y + 1,
        ));
    }

    // Task list, filtered by the current visibility
    let items: Vec<ListItem> = state
        .visible_tasks()
        .map(|task| {
            let marker = if task.completed { "[x]" } else { "[ ]" };
            let style = if task.completed {
                Style::default()
                    .fg(Color::DarkGray)
                    .add_modifier(Modifier::CROSSED_OUT)
            } else {
                Style::default()
            };
            ListItem::new(format!("{marker} {}", task.text)).style(style)
        })
        .collect();
    let visible = items.len();

    let list = List::new(items)
        .highlight_style(Style::default().add_modifier(Modifier::REVERSED))
        .highlight_symbol("> ");
    let mut list_state = ListState::default();
    if visible > 0 {
        list_state.select(Some(clamp_selection(ui.selected, visible)));
    }
    frame.render_stateful_widget(list, list_area, &mut list_state);

    // Status line: visible count, active filter, key hints
    let status = format!(
        "{visible} items | filter: {}  a:add  space:toggle  d:delete  f:filter  q:quit",
        filter_label(state.visibility)
    );
    frame.render_widget(
        Paragraph::new(status).style(Style::default().fg(Color::DarkGray)),
        status_area,
    );
}
