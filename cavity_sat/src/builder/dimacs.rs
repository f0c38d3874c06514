use crate::{
    context::GenericContext,
    types::err::{self, ParseError},
};

use std::io::BufRead;

/// What a parse added to the context, and what the input declared.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct ParserInfo {
    pub expected_variables: Option<usize>,
    pub expected_clauses: Option<usize>,
    pub added_variables: usize,
    pub added_clauses: usize,
}

impl<R: rand::Rng + std::default::Default> GenericContext<R> {
    /// Reads a DIMACS CNF file into the context.
    ///
    /// Comment lines begin with `c`, an optional header `p cnf <N> <M>` declares the size of the formula, and each clause is a sequence of non-zero signed integers terminated by `0`.
    /// A line starting with `%` ends the formula.
    ///
    /// ```rust
    /// # use cavity_sat::config::Config;
    /// # use cavity_sat::context::Context;
    /// # use std::io::Write;
    /// let mut the_context = Context::from_config(Config::default());
    ///
    /// let mut dimacs = vec![];
    /// let _ = dimacs.write(b"
    /// c a pair of clauses
    /// p cnf 3 2
    ///  1 -2  3 0
    /// -1  2 -3 0
    /// ");
    ///
    /// let info = the_context.read_dimacs(dimacs.as_slice()).unwrap();
    /// assert_eq!(info.added_clauses, 2);
    /// ```
    pub fn read_dimacs(&mut self, mut reader: impl BufRead) -> Result<ParserInfo, err::ErrorKind> {
        let mut buffer = String::default();
        let mut clause_buffer: Vec<i32> = Vec::default();
        let mut info = ParserInfo::default();

        let mut lines = 0;

        // First phase, read until the formula begins.
        'preamble_loop: loop {
            match reader.read_line(&mut buffer) {
                Ok(0) => break 'preamble_loop,
                Ok(1) if buffer.starts_with('\n') => {
                    buffer.clear();
                    continue 'preamble_loop;
                }
                Ok(_) => lines += 1,
                Err(_) => return Err(err::ErrorKind::from(ParseError::Line(lines))),
            }

            match buffer.chars().next() {
                Some('c') => {
                    buffer.clear();
                    continue 'preamble_loop;
                }

                Some('p') => {
                    let mut problem_details = buffer.split_whitespace();
                    let variables: usize = match problem_details.nth(2) {
                        None => return Err(err::ErrorKind::from(ParseError::ProblemSpecification)),
                        Some(string) => match string.parse() {
                            Err(_) => {
                                return Err(err::ErrorKind::from(ParseError::ProblemSpecification))
                            }
                            Ok(count) => count,
                        },
                    };

                    let clauses: usize = match problem_details.next() {
                        None => return Err(err::ErrorKind::from(ParseError::ProblemSpecification)),
                        Some(string) => match string.parse() {
                            Err(_) => {
                                return Err(err::ErrorKind::from(ParseError::ProblemSpecification))
                            }
                            Ok(count) => count,
                        },
                    };

                    buffer.clear();

                    self.ensure_variables(variables);

                    info.expected_variables = Some(variables);
                    info.expected_clauses = Some(clauses);
                }

                _ => break 'preamble_loop,
            }
        }

        // Second phase, read until the formula ends.
        // The line is advanced at the end of the loop, as the preamble has already filled the buffer.
        'formula_loop: loop {
            match buffer.chars().next() {
                None => break 'formula_loop,
                Some('%') => break 'formula_loop,
                Some('c') => {}
                _ => {
                    for item in buffer.split_whitespace() {
                        match item {
                            "0" => {
                                let clause = std::mem::take(&mut clause_buffer);
                                self.add_clause(&clause)?;
                                info.added_clauses += 1;
                            }
                            _ => {
                                let literal = match item.parse::<i32>() {
                                    Ok(int) if int != 0 => int,
                                    _ => {
                                        return Err(err::ErrorKind::from(
                                            ParseError::InvalidLiteral(lines),
                                        ))
                                    }
                                };

                                // A header bounds the variables a clause may mention.
                                if let Some(expected) = info.expected_variables {
                                    if literal.unsigned_abs() as usize > expected {
                                        return Err(err::ErrorKind::from(
                                            ParseError::VariableOutOfRange(lines),
                                        ));
                                    }
                                }

                                clause_buffer.push(literal);
                            }
                        }
                    }
                }
            }

            buffer.clear();

            match reader.read_line(&mut buffer) {
                Ok(0) => break 'formula_loop,
                Ok(_) => lines += 1,
                Err(_) => return Err(err::ErrorKind::from(ParseError::Line(lines))),
            }
        }

        if !clause_buffer.is_empty() {
            return Err(err::ErrorKind::from(ParseError::MissingDelimiter));
        }

        info.added_variables = self.graph.variable_count();

        Ok(info)
    }
}

#[cfg(test)]
mod dimacs_parser_tests {
    use crate::{config::Config, context::Context, types::err::ErrorKind};

    use super::*;

    #[test]
    fn a_clause_cut_short_is_rejected() {
        let mut the_context = Context::from_config(Config::default());

        // A three-literal clause whose terminator was lost.
        let dimacs = "p cnf 3 1\n1 -2 3\n";

        assert_eq!(
            the_context.read_dimacs(dimacs.as_bytes()),
            Err(ErrorKind::Parse(ParseError::MissingDelimiter))
        );
    }

    #[test]
    fn a_header_needs_both_counts() {
        let mut the_context = Context::from_config(Config::default());

        let dimacs = "c truncated while copying instances around\np cnf 100\n";

        assert_eq!(
            the_context.read_dimacs(dimacs.as_bytes()),
            Err(ErrorKind::Parse(ParseError::ProblemSpecification))
        );
    }

    #[test]
    fn a_header_needs_numeric_counts() {
        let mut the_context = Context::from_config(Config::default());

        let dimacs = "p cnf hundred 420\n";

        assert_eq!(
            the_context.read_dimacs(dimacs.as_bytes()),
            Err(ErrorKind::Parse(ParseError::ProblemSpecification))
        );
    }

    #[test]
    fn comments_and_blanks_alone_build_nothing() {
        let mut the_context = Context::from_config(Config::default());

        let dimacs = "c a run over zero instances\n\nc has nothing to parse\n";

        let info = the_context.read_dimacs(dimacs.as_bytes()).unwrap();
        assert_eq!(info.added_clauses, 0);
        assert_eq!(the_context.graph.clause_count(), 0);
    }

    #[test]
    fn a_literal_must_be_an_integer() {
        let mut the_context = Context::from_config(Config::default());

        let dimacs = "p cnf 3 1\n1 x3 2 0\n";

        assert_eq!(
            the_context.read_dimacs(dimacs.as_bytes()),
            Err(ErrorKind::Parse(ParseError::InvalidLiteral(2)))
        );
    }

    #[test]
    fn a_literal_stays_within_the_declared_count() {
        let mut the_context = Context::from_config(Config::default());

        let dimacs = "p cnf 2 1\n1 -2 4 0\n";

        assert_eq!(
            the_context.read_dimacs(dimacs.as_bytes()),
            Err(ErrorKind::Parse(ParseError::VariableOutOfRange(2)))
        );
    }

    #[test]
    fn headerless_input_grows_on_demand() {
        let mut the_context = Context::from_config(Config::default());

        // Without a header there is no declared count to hold clauses to.
        let dimacs = "1 -2 4 0\n";

        let info = the_context.read_dimacs(dimacs.as_bytes()).unwrap();
        assert_eq!(info.expected_variables, None);
        assert_eq!(info.added_variables, 4);
        assert_eq!(info.added_clauses, 1);
    }

    #[test]
    fn variables_ensured_by_header() {
        let mut the_context = Context::from_config(Config::default());

        let dimacs = "p cnf 10 0\n";

        let info = the_context.read_dimacs(dimacs.as_bytes()).unwrap();
        assert_eq!(the_context.graph.variable_count(), 10);
        assert_eq!(info.expected_variables, Some(10));
        assert_eq!(info.added_clauses, 0);
    }

    #[test]
    fn comments_and_terminator_skipped() {
        let mut the_context = Context::from_config(Config::default());

        let dimacs = "c a small instance
p cnf 3 2
1 -2 3 0
c interleaved comment
-1 2 -3 0
%
0
";

        let info = the_context.read_dimacs(dimacs.as_bytes()).unwrap();
        assert_eq!(info.added_clauses, 2);
        assert_eq!(the_context.graph.clause_count(), 2);
        assert_eq!(the_context.graph.edge_count(), 6);
    }
}
