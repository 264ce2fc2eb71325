//! Task commands and the interactive task screen.

use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyModifiers};
use std::io::{self, Write};

use crate::cli::display::{print_task_rows, task_row};
use crate::cli::ui::{self, clear_screen, confirm, find_task_id, text_input, RawModeGuard};
use crate::store::{StoreError, TaskList, TASKS_FILE};

/// Open the task list, degrading to an empty one when the backing file
/// will not decode.
pub fn open_list() -> Result<TaskList> {
    match TaskList::open() {
        Ok(list) => Ok(list),
        Err(e @ StoreError::Corrupt(_)) => {
            ui::warning(&format!("{}. Starting with an empty task list.", e));
            Ok(TaskList::empty(TASKS_FILE))
        }
        Err(e) => Err(e.into()),
    }
}

/// Execute the task add command
pub fn run_add(description: &str) -> Result<()> {
    let mut list = open_list()?;
    list.add(description)?;
    list.save()?;
    ui::status(&format!("Added \"{}\".", description.trim()));
    Ok(())
}

/// Execute the task list command
pub fn run_list(pending_only: bool) -> Result<()> {
    let list = open_list()?;
    if list.is_empty() {
        ui::status("No tasks.");
        return Ok(());
    }

    print_task_rows(
        list.tasks()
            .iter()
            .filter(|t| !pending_only || !t.is_completed()),
    );
    ui::status(&format!(
        "\n{} pending, {} done.",
        list.pending_count(),
        list.completed_count()
    ));
    Ok(())
}

/// Execute the task done command
pub fn run_done(identifier: &str) -> Result<()> {
    let mut list = open_list()?;
    let Some(id) = find_task_id(&list, identifier)? else {
        ui::status("No matches.");
        return Ok(());
    };

    match list.mark_complete(id) {
        Ok(()) => {
            list.save()?;
            if let Some(task) = list.get(id) {
                ui::status(&format!("Done: {}", task.description));
            }
            Ok(())
        }
        // Already complete: warn, change nothing.
        Err(e @ StoreError::AlreadyCompleted) => {
            ui::warning(&e.to_string());
            Ok(())
        }
        Err(e) => Err(e.into()),
    }
}

/// Execute the task edit command
pub fn run_edit(identifier: &str, description: Option<String>) -> Result<()> {
    let mut list = open_list()?;
    let Some(id) = find_task_id(&list, identifier)? else {
        ui::status("No matches.");
        return Ok(());
    };

    let description = match description {
        Some(d) => d,
        None => {
            let current = list.get(id).map(|t| t.description.clone());
            match text_input("description: ", current.as_deref())? {
                Some(d) => d,
                None => {
                    ui::status("Cancelled.");
                    return Ok(());
                }
            }
        }
    };

    if list.rename(id, &description)? {
        list.save()?;
        ui::status("Updated.");
    } else {
        ui::status("No change.");
    }
    Ok(())
}

/// Execute the task delete command
pub fn run_delete(identifier: &str, force: bool) -> Result<()> {
    let mut list = open_list()?;
    let Some(id) = find_task_id(&list, identifier)? else {
        ui::status("No matches.");
        return Ok(());
    };

    let Some(task) = list.get(id).cloned() else {
        ui::status("No matches.");
        return Ok(());
    };

    if !force && !confirm(&format!("Delete \"{}\"?", task.description))? {
        ui::status("Cancelled.");
        return Ok(());
    }

    let removed = list.delete(id)?;
    list.save()?;
    ui::status(&format!("Deleted \"{}\".", removed.description));
    Ok(())
}

/// Interactive task screen with keyboard navigation.
/// Returns true if the user wants to quit the whole app.
pub fn run_task_screen() -> Result<bool> {
    let mut list = open_list()?;
    let mut selected_idx: usize = 0;

    loop {
        // Clamp selection to valid range
        if list.is_empty() {
            selected_idx = 0;
        } else if selected_idx >= list.len() {
            selected_idx = list.len().saturating_sub(1);
        }

        clear_screen()?;
        let mut stdout = io::stdout();

        println!(
            "TASKS ({} pending, {} done)\n",
            list.pending_count(),
            list.completed_count()
        );

        if list.is_empty() {
            println!("  No tasks. Press [n] to add one.");
        } else {
            for (i, task) in list.tasks().iter().enumerate() {
                let prefix = if i == selected_idx { "> " } else { "  " };
                println!("{}{}", prefix, task_row(task));
            }
        }

        println!();
        println!("[n]ew [c]omplete [e]dit [d]el [j/k] [q] [Q]uit");
        stdout.flush()?;

        // One key per loop pass, raw mode only while reading
        let code = {
            let _guard = RawModeGuard::new()?;
            match event::read()? {
                Event::Key(KeyEvent { code, modifiers, .. }) => {
                    if code == KeyCode::Char('c') && modifiers.contains(KeyModifiers::CONTROL) {
                        return Ok(false);
                    }
                    code
                }
                _ => continue,
            }
        };

        match code {
            KeyCode::Char('q') | KeyCode::Esc => {
                return Ok(false); // Back to menu
            }
            KeyCode::Char('Q') => {
                return Ok(true); // Quit app
            }
            KeyCode::Up | KeyCode::Char('k') => {
                selected_idx = selected_idx.saturating_sub(1);
            }
            KeyCode::Down | KeyCode::Char('j') => {
                if !list.is_empty() && selected_idx < list.len() - 1 {
                    selected_idx += 1;
                }
            }
            KeyCode::Char('n') => {
                println!();
                if let Some(description) = text_input("task: ", None)? {
                    match list.add(&description) {
                        Ok(_) => list.save()?,
                        Err(e) => notice(&e.to_string())?,
                    }
                }
            }
            KeyCode::Char('c') | KeyCode::Enter => {
                if !list.is_empty() {
                    let id = list.tasks()[selected_idx].id;
                    match list.mark_complete(id) {
                        Ok(()) => list.save()?,
                        Err(e @ StoreError::AlreadyCompleted) => notice(&e.to_string())?,
                        Err(e) => return Err(e.into()),
                    }
                }
            }
            KeyCode::Char('e') => {
                if !list.is_empty() {
                    let task = &list.tasks()[selected_idx];
                    let id = task.id;
                    let current = task.description.clone();
                    println!();
                    if let Some(description) = text_input("description: ", Some(&current))? {
                        match list.rename(id, &description) {
                            Ok(true) => list.save()?,
                            Ok(false) => {}
                            Err(e) => notice(&e.to_string())?,
                        }
                    }
                }
            }
            KeyCode::Char('d') => {
                if !list.is_empty() {
                    let task = list.tasks()[selected_idx].clone();
                    let _ = clear_screen();
                    if confirm(&format!("Delete \"{}\"?", task.description))? {
                        list.delete(task.id)?;
                        list.save()?;
                    }
                }
            }
            _ => {}
        }
    }
}

/// Show a one-line warning and wait for a key before the next redraw.
fn notice(msg: &str) -> Result<()> {
    ui::warning(msg);
    ui::wait_for_key()
}
