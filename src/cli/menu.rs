//! Main menu for deskcmd
//!
//! Uses inquire for clean, reliable terminal interaction.

use anyhow::{anyhow, Result};
use inquire::Select;
use std::io::{self, IsTerminal};

use crate::cli::ui::{clear_screen, minimal_render_config, text_input, wait_for_key};
use crate::cli::{calc, contact, task};

/// Menu options with type-safe variants
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MenuOption {
    ListContacts,
    AddContact,
    SearchContacts,
    UpdateContact,
    DeleteContact,
    Tasks,
    Calculator,
    Quit,
}

impl MenuOption {
    const ALL: &'static [MenuOption] = &[
        MenuOption::ListContacts,
        MenuOption::AddContact,
        MenuOption::SearchContacts,
        MenuOption::UpdateContact,
        MenuOption::DeleteContact,
        MenuOption::Tasks,
        MenuOption::Calculator,
        MenuOption::Quit,
    ];

    fn label(self) -> &'static str {
        match self {
            MenuOption::ListContacts => "List Contacts",
            MenuOption::AddContact => "Add Contact",
            MenuOption::SearchContacts => "Search Contacts",
            MenuOption::UpdateContact => "Update Contact",
            MenuOption::DeleteContact => "Delete Contact",
            MenuOption::Tasks => "Tasks",
            MenuOption::Calculator => "Calculator",
            MenuOption::Quit => "Quit",
        }
    }

    fn from_label(s: &str) -> Option<MenuOption> {
        MenuOption::ALL.iter().find(|opt| opt.label() == s).copied()
    }

    /// Screens pace themselves; one-shot commands need a pause before the
    /// menu clears their output.
    fn pauses_after(self) -> bool {
        !matches!(self, MenuOption::Tasks | MenuOption::Calculator)
    }
}

/// Run the interactive main menu
pub fn run_menu() -> Result<()> {
    // TTY check: interactive menu requires a terminal
    if !io::stdin().is_terminal() {
        return Err(anyhow!(
            "Interactive menu requires a terminal. Use subcommands for non-interactive use:\n  \
            deskcmd contact list\n  \
            deskcmd task list\n  \
            deskcmd calc 6 / 3\n  \
            Run 'deskcmd --help' for all options."
        ));
    }

    let menu_labels: Vec<&str> = MenuOption::ALL.iter().map(|opt| opt.label()).collect();

    loop {
        // Clear screen - if this fails, continue anyway
        let _ = clear_screen();

        let selection = Select::new("deskcmd", menu_labels.clone())
            .with_render_config(minimal_render_config())
            .with_page_size(menu_labels.len())
            .with_vim_mode(true)
            .prompt_skippable();

        // Prompt errors (Ctrl+C, terminal issues) exit gracefully
        let selection = match selection {
            Ok(sel) => sel,
            Err(_) => return Ok(()),
        };

        let Some(choice_label) = selection else {
            // User pressed Escape
            return Ok(());
        };

        let Some(choice) = MenuOption::from_label(choice_label) else {
            continue;
        };

        if choice == MenuOption::Quit {
            return Ok(());
        }

        let _ = clear_screen();

        // Execute the choice - errors are displayed, never fatal.
        // Returns true if the user asked to quit the app.
        match execute_command(choice) {
            Ok(true) => return Ok(()),
            Ok(false) => {
                if choice.pauses_after() {
                    wait_for_continue();
                }
            }
            Err(e) => {
                eprintln!("\nError: {}", e);
                wait_for_continue();
            }
        }
    }
}

fn execute_command(choice: MenuOption) -> Result<bool> {
    match choice {
        MenuOption::ListContacts => contact::run_list()?,
        MenuOption::AddContact => contact::run_add(None, None, None, None)?,
        MenuOption::SearchContacts => {
            if let Some(term) = text_input("search: ", None)? {
                contact::run_search(&term)?;
            }
        }
        MenuOption::UpdateContact => {
            if let Some(identifier) = text_input("contact: ", None)? {
                contact::run_update(&identifier, None, None, None, None)?;
            }
        }
        MenuOption::DeleteContact => {
            if let Some(identifier) = text_input("contact: ", None)? {
                contact::run_delete(&identifier, false)?;
            }
        }
        MenuOption::Tasks => return task::run_task_screen(),
        MenuOption::Calculator => calc::run_calc_screen()?,
        MenuOption::Quit => return Ok(true),
    }
    Ok(false)
}

fn wait_for_continue() {
    println!("\nPress Enter to continue...");
    let _ = wait_for_key();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_menu_labels_round_trip() {
        for opt in MenuOption::ALL {
            assert_eq!(MenuOption::from_label(opt.label()), Some(*opt));
        }
        assert_eq!(MenuOption::from_label("Nope"), None);
    }

    #[test]
    fn test_screens_pace_themselves() {
        assert!(!MenuOption::Tasks.pauses_after());
        assert!(!MenuOption::Calculator.pauses_after());
        assert!(MenuOption::ListContacts.pauses_after());
        assert!(MenuOption::AddContact.pauses_after());
    }
}
