//! `pkc groups` command.

use anyhow::Result;
use pkc_attributes::catalog::{FunctionGroupCode, field_name_label};

pub fn cmd_groups() -> Result<()> {
    for code in FunctionGroupCode::ALL {
        println!("{code}\t{}", field_name_label(code.as_str()));
    }
    Ok(())
}
