//! List-fields command implementation.
//!
//! Prints the columns a filter clause or sort can name.

use super::{CommandContext, Result};
use crate::output::{format_fields_json, format_fields_table};

/// Executes the list-fields command.
pub fn execute(ctx: &CommandContext) -> Result<()> {
    if ctx.json_output {
        println!("{}", format_fields_json()?);
    } else if !ctx.quiet {
        print!("{}", format_fields_table(ctx.use_colors));
    }
    Ok(())
}
