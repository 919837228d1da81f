use std::io::Write;

use packlist_core::error::PacklistError;
use packlist_core::model::Conversion;

use crate::output::table::write_warnings;

/// JSON preview on stdout, warnings on stderr.
pub fn print_conversion(conversion: &Conversion) -> Result<(), PacklistError> {
    write_conversion(
        &mut std::io::stdout().lock(),
        &mut std::io::stderr().lock(),
        conversion,
    )
}

pub fn write_conversion(
    out: &mut impl Write,
    err: &mut impl Write,
    conversion: &Conversion,
) -> Result<(), PacklistError> {
    writeln!(out, "{}", conversion.file.to_json_pretty()?)?;
    write_warnings(err, &conversion.warnings)?;
    Ok(())
}
