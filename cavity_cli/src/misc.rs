use std::{fs::File, io::BufReader, path::Path};

use cavity_sat::{
    builder::dimacs::ParserInfo,
    context::Context,
    types::err::{ErrorKind, ParseError},
};

/// Reads a DIMACS file into the context, folding a missing file into the parse errors.
pub fn load_dimacs(context: &mut Context, path: &Path) -> Result<ParserInfo, ErrorKind> {
    let file = match File::open(path) {
        Ok(file) => file,
        Err(_) => return Err(ErrorKind::from(ParseError::NoFile)),
    };

    context.read_dimacs(BufReader::new(&file))
}
