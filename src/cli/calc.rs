use anyhow::Result;
use inquire::Select;

use crate::calc::{self, Op};
use crate::cli::ui::{minimal_render_config, text_input};

/// Execute the calc command. The display line carries both results and
/// input errors, as the original form did.
pub fn run_calc(a: &str, op: &str, b: &str) {
    println!("{}", calc::evaluate(a, op, b));
}

/// Interactive calculator loop. Esc at any prompt returns to the menu.
pub fn run_calc_screen() -> Result<()> {
    loop {
        let Some(a) = text_input("first number: ", None)? else {
            return Ok(());
        };

        let ops: Vec<&str> = Op::ALL.iter().map(|op| op.as_str()).collect();
        let op = Select::new("operation:", ops)
            .with_render_config(minimal_render_config())
            .with_vim_mode(true)
            .prompt_skippable()?;
        let Some(op) = op else {
            return Ok(());
        };

        let Some(b) = text_input("second number: ", None)? else {
            return Ok(());
        };

        println!("{}\n", calc::evaluate(&a, op, &b));
    }
}
