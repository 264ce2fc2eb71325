//! Shared terminal primitives for deskcmd
//!
//! Conventions:
//! - Prompts: lowercase with colon and space: `search: `
//! - Feedback: single word when possible: `Saved.`

use anyhow::Result;
use crossterm::{
    cursor,
    event::{self, Event, KeyCode, KeyEvent},
    terminal::{disable_raw_mode, enable_raw_mode, Clear, ClearType},
    ExecutableCommand,
};
use inquire::{ui::RenderConfig, Confirm, InquireError, Select, Text};
use std::io::{self, Write};
use uuid::Uuid;

use crate::models::{Contact, Task};
use crate::store::{ContactBook, TaskList};

// ============================================================================
// Terminal Control
// ============================================================================

/// RAII guard that ensures raw mode is disabled on drop
pub struct RawModeGuard;

impl RawModeGuard {
    pub fn new() -> Result<Self> {
        enable_raw_mode()?;
        Ok(Self)
    }
}

impl Drop for RawModeGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
    }
}

/// Clear the terminal screen and move cursor to top-left
pub fn clear_screen() -> Result<()> {
    let mut stdout = io::stdout();
    stdout.execute(Clear(ClearType::All))?;
    stdout.execute(cursor::MoveTo(0, 0))?;
    stdout.flush()?;
    Ok(())
}

/// Get terminal dimensions, defaulting to 80x24 if unavailable
pub fn term_size() -> (usize, usize) {
    crossterm::terminal::size()
        .map(|(w, h)| (w as usize, h as usize))
        .unwrap_or((80, 24))
}

/// Visible content lines for scrollable lists, leaving room for header and
/// status bar.
pub fn visible_lines() -> usize {
    let (_, height) = term_size();
    height.saturating_sub(4).max(5)
}

/// Wait for any key press, accepting Enter, q, or Esc
pub fn wait_for_key() -> Result<()> {
    let _guard = RawModeGuard::new()?;
    loop {
        if let Event::Key(KeyEvent { code, .. }) = event::read()? {
            if matches!(code, KeyCode::Enter | KeyCode::Char('q') | KeyCode::Esc) {
                break;
            }
        }
    }
    Ok(())
}

// ============================================================================
// Prompts
// ============================================================================

/// Get a minimal render config for inquire prompts
pub fn minimal_render_config() -> RenderConfig<'static> {
    RenderConfig::default_colored()
        .with_prompt_prefix(inquire::ui::Styled::new(""))
        .with_answered_prompt_prefix(inquire::ui::Styled::new(""))
}

/// Prompt for text input with optional default value. `None` on cancel.
pub fn text_input(prompt: &str, default: Option<&str>) -> Result<Option<String>> {
    let mut builder = Text::new(prompt).with_render_config(minimal_render_config());

    if let Some(d) = default {
        if !d.is_empty() {
            builder = builder.with_default(d);
        }
    }

    let result = builder.prompt_skippable()?;
    Ok(result)
}

/// Prompt for yes/no confirmation (default: no)
pub fn confirm(prompt: &str) -> Result<bool> {
    let result = Confirm::new(prompt)
        .with_render_config(minimal_render_config())
        .with_default(false)
        .prompt()
        .unwrap_or(false);
    Ok(result)
}

/// Result type for form inputs that can be cancelled
pub enum FormResult<T> {
    Value(T),
    Cancelled,
}

/// Prompt for a field with optional current value.
/// Format: `field [current] (- clears): ` or `field: ` with no current.
/// Empty input keeps the current value; `-` clears it.
pub fn prompt_field(field: &str, current: Option<&str>) -> Result<FormResult<String>> {
    let has_value = current.map(|v| !v.is_empty()).unwrap_or(false);
    let prompt = match current {
        Some(val) if !val.is_empty() => {
            format!("{} [{}] (- clears): ", field, truncate(val, 30))
        }
        _ => format!("{}: ", field),
    };

    let result = Text::new(&prompt)
        .with_render_config(minimal_render_config())
        .prompt();

    match result {
        Ok(input) => {
            let input = input.trim();
            if input == "-" && has_value {
                Ok(FormResult::Value(String::new()))
            } else if input.is_empty() {
                Ok(FormResult::Value(current.unwrap_or("").to_string()))
            } else {
                Ok(FormResult::Value(input.to_string()))
            }
        }
        Err(InquireError::OperationCanceled) | Err(InquireError::OperationInterrupted) => {
            Ok(FormResult::Cancelled)
        }
        Err(e) => Err(e.into()),
    }
}

/// Prompt for an optional field (returns empty string if skipped)
pub fn prompt_field_optional(field: &str) -> Result<FormResult<String>> {
    prompt_field(field, None)
}

// ============================================================================
// Messages
// ============================================================================

/// Print a status message to stdout
#[inline]
pub fn status(msg: &str) {
    println!("{}", msg);
}

/// Print an error message to stderr
#[inline]
pub fn error(msg: &str) {
    eprintln!("Error: {}", msg);
}

/// Print a warning message to stderr
#[inline]
pub fn warning(msg: &str) {
    eprintln!("Warning: {}", msg);
}

/// Truncate a string to max_chars, adding an ellipsis if needed
pub fn truncate(s: &str, max_chars: usize) -> String {
    if s.chars().count() <= max_chars {
        s.to_string()
    } else {
        let cut: String = s.chars().take(max_chars.saturating_sub(1)).collect();
        format!("{}…", cut)
    }
}

// ============================================================================
// Record Lookup
// ============================================================================

/// Display a contact selection menu. Returns the chosen contact's id, or
/// `None` if cancelled.
pub fn select_contact(contacts: &[&Contact]) -> Result<Option<Uuid>> {
    if contacts.is_empty() {
        return Ok(None);
    }
    if contacts.len() == 1 {
        return Ok(Some(contacts[0].id));
    }

    let options: Vec<String> = contacts
        .iter()
        .map(|c| format!("{} - {}", c.name, c.phone))
        .collect();

    let result = Select::new("Select:", options.clone())
        .with_render_config(minimal_render_config())
        .with_page_size(visible_lines())
        .with_vim_mode(true)
        .prompt_skippable()?;

    match result {
        Some(selected) => {
            let idx = options.iter().position(|o| *o == selected).unwrap_or(0);
            Ok(Some(contacts[idx].id))
        }
        None => Ok(None),
    }
}

/// Resolve an identifier to a contact id.
/// - A valid UUID looks up directly.
/// - Anything else searches name/phone, prompting for selection on
///   multiple matches.
/// Returns `None` when nothing matches or selection is cancelled.
pub fn find_contact_id(book: &ContactBook, identifier: &str) -> Result<Option<Uuid>> {
    let identifier = identifier.trim();
    if identifier.is_empty() {
        return Ok(None);
    }

    if let Ok(uuid) = Uuid::parse_str(identifier) {
        return Ok(book.get(uuid).map(|c| c.id));
    }

    let matches = book.search(identifier);
    match matches.len() {
        0 => Ok(None),
        1 => Ok(Some(matches[0].id)),
        _ => select_contact(&matches),
    }
}

/// Display a task selection menu. Returns the chosen task's id, or `None`
/// if cancelled.
pub fn select_task(tasks: &[&Task]) -> Result<Option<Uuid>> {
    if tasks.is_empty() {
        return Ok(None);
    }
    if tasks.len() == 1 {
        return Ok(Some(tasks[0].id));
    }

    let options: Vec<String> = tasks
        .iter()
        .map(|t| super::display::task_row(t))
        .collect();

    let result = Select::new("Select:", options.clone())
        .with_render_config(minimal_render_config())
        .with_page_size(visible_lines())
        .with_vim_mode(true)
        .prompt_skippable()?;

    match result {
        Some(selected) => {
            let idx = options.iter().position(|o| *o == selected).unwrap_or(0);
            Ok(Some(tasks[idx].id))
        }
        None => Ok(None),
    }
}

/// Resolve an identifier to a task id, UUID first, then description
/// search.
pub fn find_task_id(list: &TaskList, identifier: &str) -> Result<Option<Uuid>> {
    let identifier = identifier.trim();
    if identifier.is_empty() {
        return Ok(None);
    }

    if let Ok(uuid) = Uuid::parse_str(identifier) {
        return Ok(list.get(uuid).map(|t| t.id));
    }

    let matches = list.search(identifier);
    match matches.len() {
        0 => Ok(None),
        1 => Ok(Some(matches[0].id)),
        _ => select_task(&matches),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_short_string() {
        assert_eq!(truncate("hello", 10), "hello");
    }

    #[test]
    fn test_truncate_exact_length() {
        assert_eq!(truncate("hello", 5), "hello");
    }

    #[test]
    fn test_truncate_long_string() {
        assert_eq!(truncate("hello world", 8), "hello w…");
    }

    #[test]
    fn test_truncate_unicode() {
        assert_eq!(truncate("日本語テスト", 4), "日本語…");
    }

    #[test]
    fn test_find_contact_id_by_uuid_and_name() {
        let mut book = ContactBook::empty("unused.json");
        let id = book.add("Ada Lovelace", "555-0100", None, None).unwrap();
        book.add("Grace Hopper", "555-0200", None, None).unwrap();

        assert_eq!(
            find_contact_id(&book, &id.to_string()).unwrap(),
            Some(id)
        );
        assert_eq!(find_contact_id(&book, "lovelace").unwrap(), Some(id));
        assert_eq!(find_contact_id(&book, "nobody").unwrap(), None);
        assert_eq!(find_contact_id(&book, "  ").unwrap(), None);
        // Unknown UUID resolves to nothing rather than falling back to search.
        assert_eq!(
            find_contact_id(&book, &Uuid::new_v4().to_string()).unwrap(),
            None
        );
    }

    #[test]
    fn test_find_task_id_by_uuid_and_description() {
        let mut list = TaskList::empty("unused.json");
        let id = list.add("Water the plants").unwrap();
        list.add("Call the bank").unwrap();

        assert_eq!(find_task_id(&list, &id.to_string()).unwrap(), Some(id));
        assert_eq!(find_task_id(&list, "plants").unwrap(), Some(id));
        assert_eq!(find_task_id(&list, "garage").unwrap(), None);
    }
}
