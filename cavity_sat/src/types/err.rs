/*!
Error types used in the library.

These cover input which could not be turned into a factor graph.
Failures *of a solve* --- a contradiction from propagation, surveys which never converge, exhausted local search --- are not errors: they are ordinary outcomes, recorded in the state of the context.
*/

/// A union of varied error kinds.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ErrorKind {
    /// An error related to parsing.
    Parse(ParseError),

    /// An error related to building a graph.
    Build(BuildError),
}

/// Errors during parsing.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ParseError {
    /// Some issue with the problem specification of a DIMACS input.
    ProblemSpecification,

    /// Some unspecific problem at a specific line.
    Line(usize),

    /// A token at the noted line could not be read as a literal.
    InvalidLiteral(usize),

    /// A literal at the noted line mentions a variable past the declared count.
    VariableOutOfRange(usize),

    /// A clause was not terminated by a required delimiter.
    MissingDelimiter,

    /// No file was found.
    NoFile,
}

impl From<ParseError> for ErrorKind {
    fn from(e: ParseError) -> Self {
        ErrorKind::Parse(e)
    }
}

/// Errors when building a graph.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum BuildError {
    /// Some attempt was made to add an empty clause.
    EmptyClause,

    /// A zero appeared as a literal, where zero is reserved as the clause delimiter.
    ZeroLiteral,
}

impl From<BuildError> for ErrorKind {
    fn from(e: BuildError) -> Self {
        ErrorKind::Build(e)
    }
}
