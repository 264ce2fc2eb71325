use clap::{Args, Parser, Subcommand};

pub mod calc;
pub mod contact;
pub mod display;
pub mod menu;
pub mod task;
pub mod ui;

pub use calc::run_calc;
pub use menu::run_menu;

#[derive(Parser)]
#[command(name = "deskcmd")]
#[command(about = "Contacts, tasks, and a calculator for the command line")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Manage the contact book
    #[command(subcommand)]
    Contact(ContactCommands),
    /// Manage the to-do list
    #[command(subcommand)]
    Task(TaskCommands),
    /// Evaluate a single arithmetic operation
    Calc(CalcArgs),
}

#[derive(Subcommand)]
pub enum ContactCommands {
    /// Add a new contact
    Add(ContactAddArgs),
    /// List all contacts
    List,
    /// Search contacts by name or phone
    Search(SearchArgs),
    /// Update an existing contact
    Update(ContactUpdateArgs),
    /// Delete a contact
    Delete(ContactDeleteArgs),
}

#[derive(Args)]
pub struct ContactAddArgs {
    #[arg(short, long)]
    pub name: Option<String>,
    #[arg(short, long)]
    pub phone: Option<String>,
    #[arg(short, long)]
    pub email: Option<String>,
    #[arg(short, long)]
    pub address: Option<String>,
}

#[derive(Args)]
pub struct SearchArgs {
    /// Name or phone fragment
    pub term: String,
}

#[derive(Args)]
pub struct ContactUpdateArgs {
    /// Contact name or UUID
    pub identifier: String,
    #[arg(short, long)]
    pub name: Option<String>,
    #[arg(short, long)]
    pub phone: Option<String>,
    #[arg(short, long)]
    pub email: Option<String>,
    #[arg(short, long)]
    pub address: Option<String>,
}

#[derive(Args)]
pub struct ContactDeleteArgs {
    /// Contact name or UUID
    pub identifier: String,
    /// Skip the confirmation prompt
    #[arg(short, long)]
    pub force: bool,
}

#[derive(Subcommand)]
pub enum TaskCommands {
    /// Add a new task
    Add(TaskAddArgs),
    /// List tasks
    List(TaskListArgs),
    /// Mark a task as complete
    Done(TaskRefArgs),
    /// Edit a task's description
    Edit(TaskEditArgs),
    /// Delete a task
    Delete(TaskDeleteArgs),
}

#[derive(Args)]
pub struct TaskAddArgs {
    /// Task description
    #[arg(required = true)]
    pub description: Vec<String>,
}

#[derive(Args)]
pub struct TaskListArgs {
    /// Show only pending tasks
    #[arg(short, long)]
    pub pending: bool,
}

#[derive(Args)]
pub struct TaskRefArgs {
    /// Task description fragment or UUID
    pub identifier: String,
}

#[derive(Args)]
pub struct TaskEditArgs {
    /// Task description fragment or UUID
    pub identifier: String,
    /// New description (prompts when omitted)
    #[arg(short, long)]
    pub description: Option<String>,
}

#[derive(Args)]
pub struct TaskDeleteArgs {
    /// Task description fragment or UUID
    pub identifier: String,
    /// Skip the confirmation prompt
    #[arg(short, long)]
    pub force: bool,
}

#[derive(Args)]
pub struct CalcArgs {
    /// First operand
    #[arg(allow_hyphen_values = true)]
    pub a: String,
    /// Operator: + - * /
    #[arg(allow_hyphen_values = true)]
    pub op: String,
    /// Second operand
    #[arg(allow_hyphen_values = true)]
    pub b: String,
}
