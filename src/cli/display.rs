//! List and detail rendering for contacts and tasks.

use crate::models::{Contact, Task};

/// One contact as a list row: `name - phone`
pub fn contact_row(contact: &Contact) -> String {
    format!("{} - {}", contact.name, contact.phone)
}

/// Print contact rows in collection order
pub fn print_contact_rows(contacts: &[&Contact]) {
    for contact in contacts {
        println!("{}", contact_row(contact));
    }
}

/// Print one contact in full
pub fn print_contact(contact: &Contact) {
    println!("{}", contact.name);
    println!("  phone: {}", contact.phone);
    if let Some(ref email) = contact.email {
        println!("  email: {}", email);
    }
    if let Some(ref address) = contact.address {
        println!("  address: {}", address);
    }
    println!("  id: {}", contact.id);
}

/// One task as a list row: `[X] description (Added: …) (Completed: …)`
pub fn task_row(task: &Task) -> String {
    let marker = if task.is_completed() { "[X]" } else { "[ ]" };
    let mut row = format!("{} {} (Added: {})", marker, task.description, task.added_on);
    if task.is_completed() {
        let completed = task.completed_on.as_deref().unwrap_or("N/A");
        row.push_str(&format!(" (Completed: {})", completed));
    }
    row
}

/// Print task rows in collection order
pub fn print_task_rows<'a>(tasks: impl IntoIterator<Item = &'a Task>) {
    for task in tasks {
        println!("{}", task_row(task));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::TaskStatus;

    #[test]
    fn test_contact_row() {
        let c = Contact::new("Ada".to_string(), "555-0100".to_string());
        assert_eq!(contact_row(&c), "Ada - 555-0100");
    }

    #[test]
    fn test_task_row_pending() {
        let mut t = Task::new("Water the plants".to_string());
        t.added_on = "2024-03-01 09:30".to_string();
        assert_eq!(
            task_row(&t),
            "[ ] Water the plants (Added: 2024-03-01 09:30)"
        );
    }

    #[test]
    fn test_task_row_completed() {
        let mut t = Task::new("Water the plants".to_string());
        t.added_on = "2024-03-01 09:30".to_string();
        t.complete();
        t.completed_on = Some("2024-03-02 18:00".to_string());
        assert_eq!(t.status, TaskStatus::Completed);
        assert_eq!(
            task_row(&t),
            "[X] Water the plants (Added: 2024-03-01 09:30) (Completed: 2024-03-02 18:00)"
        );
    }
}
