//! Types command implementation

use anyhow::Result;
use sf_sql::BUILTIN_TYPE_MAP;

/// Execute the types command
pub(crate) fn execute() -> Result<()> {
    let width = BUILTIN_TYPE_MAP
        .iter()
        .map(|(keyword, _)| keyword.len())
        .max()
        .unwrap_or(0);

    for (keyword, domain_type) in BUILTIN_TYPE_MAP {
        println!("{:<width$}  {}", keyword, domain_type, width = width);
    }
    println!("{:<width$}  String", "(other)", width = width);
    Ok(())
}
