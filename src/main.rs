use clap::Parser;
use deskcmd::cli::{calc, contact, run_menu, task, Cli, Commands, ContactCommands, TaskCommands};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        None => {
            // No subcommand provided - show interactive menu
            run_menu()?;
        }
        Some(Commands::Contact(command)) => match command {
            ContactCommands::Add(args) => {
                contact::run_add(args.name, args.phone, args.email, args.address)?;
            }
            ContactCommands::List => {
                contact::run_list()?;
            }
            ContactCommands::Search(args) => {
                contact::run_search(&args.term)?;
            }
            ContactCommands::Update(args) => {
                contact::run_update(&args.identifier, args.name, args.phone, args.email, args.address)?;
            }
            ContactCommands::Delete(args) => {
                contact::run_delete(&args.identifier, args.force)?;
            }
        },
        Some(Commands::Task(command)) => match command {
            TaskCommands::Add(args) => {
                task::run_add(&args.description.join(" "))?;
            }
            TaskCommands::List(args) => {
                task::run_list(args.pending)?;
            }
            TaskCommands::Done(args) => {
                task::run_done(&args.identifier)?;
            }
            TaskCommands::Edit(args) => {
                task::run_edit(&args.identifier, args.description)?;
            }
            TaskCommands::Delete(args) => {
                task::run_delete(&args.identifier, args.force)?;
            }
        },
        Some(Commands::Calc(args)) => {
            calc::run_calc(&args.a, &args.op, &args.b);
        }
    }

    Ok(())
}
