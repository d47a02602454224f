//! Line-oriented text format for sparse matrices
//!
//! ```text
//! rows=3
//! cols=4
//! (0,1,2.5)
//! (2,3,-7)
//! ```
//!
//! The first two lines declare the extent; every following non-empty
//! line is a parenthesized `(row,col,value)` triple. Fields tolerate
//! surrounding whitespace, blank lines are skipped, and the line
//! numbers reported in errors are 1-indexed physical lines.

use std::fmt;
use std::fs;
use std::iter::Enumerate;
use std::path::Path;
use std::str::Lines;

use smat_core::{MatrixElement, MatrixError, SparseMatrix};

/// Reason a line failed to parse
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseErrorKind {
    /// Input ended before both dimension headers were seen
    MissingHeader,
    /// Dimension header is not of the form `rows=<n>` / `cols=<n>`
    InvalidHeader,
    /// Entry line is not wrapped in parentheses
    NotATriple,
    /// Parenthesized entry does not contain exactly three fields
    WrongFieldCount,
    /// A field is not a number of the expected kind
    InvalidNumber,
    /// Triple is well-formed but rejected by the matrix
    Matrix(MatrixError),
}

impl fmt::Display for ParseErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseErrorKind::MissingHeader => {
                write!(f, "expected 'rows=<n>' and 'cols=<n>' header lines")
            }
            ParseErrorKind::InvalidHeader => write!(f, "malformed dimension header"),
            ParseErrorKind::NotATriple => {
                write!(f, "entry is not a parenthesized (row,col,value) triple")
            }
            ParseErrorKind::WrongFieldCount => {
                write!(f, "expected exactly three comma-separated fields")
            }
            ParseErrorKind::InvalidNumber => write!(f, "field is not a valid number"),
            ParseErrorKind::Matrix(err) => write!(f, "{err}"),
        }
    }
}

/// Parse failure, carrying the 1-indexed physical line it occurred on
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParseError {
    pub line: usize,
    pub kind: ParseErrorKind,
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid format at line {}: {}", self.line, self.kind)
    }
}

impl std::error::Error for ParseError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match &self.kind {
            ParseErrorKind::Matrix(err) => Some(err),
            _ => None,
        }
    }
}

/// Error from the file-path entry points
#[derive(Debug)]
pub enum ReadError {
    /// The file could not be read
    Io(std::io::Error),
    /// The file contents failed to parse
    Parse(ParseError),
}

impl fmt::Display for ReadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReadError::Io(err) => write!(f, "failed to read matrix file: {err}"),
            ReadError::Parse(err) => write!(f, "{err}"),
        }
    }
}

impl std::error::Error for ReadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ReadError::Io(err) => Some(err),
            ReadError::Parse(err) => Some(err),
        }
    }
}

impl From<std::io::Error> for ReadError {
    fn from(err: std::io::Error) -> Self {
        ReadError::Io(err)
    }
}

impl From<ParseError> for ReadError {
    fn from(err: ParseError) -> Self {
        ReadError::Parse(err)
    }
}

/// Parse a matrix from its text representation
///
/// Triples are applied in file order, so a coordinate repeated across
/// lines keeps the later value. The element type is built through
/// [`MatrixElement::from_f64`]; values are parsed as f64 first.
pub fn parse_matrix<T: MatrixElement>(input: &str) -> Result<SparseMatrix<T>, ParseError> {
    let total_lines = input.lines().count();
    let mut lines = input.lines().enumerate();

    let nrows = parse_header(&mut lines, "rows", total_lines)?;
    let ncols = parse_header(&mut lines, "cols", total_lines)?;

    let mut matrix = SparseMatrix::new(nrows, ncols);
    for (idx, raw) in lines {
        let line = raw.trim();
        if line.is_empty() {
            continue;
        }
        let (row, col, value) = parse_triple::<T>(line).map_err(|kind| ParseError {
            line: idx + 1,
            kind,
        })?;
        matrix.set(row, col, value).map_err(|err| ParseError {
            line: idx + 1,
            kind: ParseErrorKind::Matrix(err),
        })?;
    }
    Ok(matrix)
}

/// Read a matrix from a file in the text format
pub fn read_matrix_file<T, P>(path: P) -> Result<SparseMatrix<T>, ReadError>
where
    T: MatrixElement,
    P: AsRef<Path>,
{
    let content = fs::read_to_string(path)?;
    Ok(parse_matrix(&content)?)
}

/// Render a matrix to its text representation
///
/// Triples are emitted in row-major order, so the same matrix always
/// produces the same output. The result parses back to an equal matrix.
pub fn format_matrix<T>(matrix: &SparseMatrix<T>) -> String
where
    T: MatrixElement + fmt::Display,
{
    let mut triples: Vec<(usize, usize, T)> = matrix.triples().collect();
    triples.sort_unstable_by_key(|&(row, col, _)| (row, col));

    let mut out = String::new();
    out.push_str(&format!("rows={}\n", matrix.nrows()));
    out.push_str(&format!("cols={}\n", matrix.ncols()));
    for (row, col, value) in triples {
        out.push_str(&format!("({row},{col},{value})\n"));
    }
    out
}

/// Write a matrix to a file in the text format
pub fn write_matrix_file<T, P>(path: P, matrix: &SparseMatrix<T>) -> std::io::Result<()>
where
    T: MatrixElement + fmt::Display,
    P: AsRef<Path>,
{
    fs::write(path, format_matrix(matrix))
}

fn parse_header(
    lines: &mut Enumerate<Lines<'_>>,
    key: &str,
    total_lines: usize,
) -> Result<usize, ParseError> {
    for (idx, raw) in lines.by_ref() {
        let line = raw.trim();
        if line.is_empty() {
            continue;
        }
        let invalid = ParseError {
            line: idx + 1,
            kind: ParseErrorKind::InvalidHeader,
        };
        let (name, value) = line.split_once('=').ok_or(invalid)?;
        if name.trim() != key {
            return Err(invalid);
        }
        return value.trim().parse::<usize>().map_err(|_| invalid);
    }
    Err(ParseError {
        line: total_lines + 1,
        kind: ParseErrorKind::MissingHeader,
    })
}

fn parse_triple<T: MatrixElement>(line: &str) -> Result<(usize, usize, T), ParseErrorKind> {
    let inner = line
        .strip_prefix('(')
        .and_then(|rest| rest.strip_suffix(')'))
        .ok_or(ParseErrorKind::NotATriple)?;

    let mut fields = inner.split(',');
    let (Some(row), Some(col), Some(value), None) =
        (fields.next(), fields.next(), fields.next(), fields.next())
    else {
        return Err(ParseErrorKind::WrongFieldCount);
    };

    let row = row
        .trim()
        .parse::<usize>()
        .map_err(|_| ParseErrorKind::InvalidNumber)?;
    let col = col
        .trim()
        .parse::<usize>()
        .map_err(|_| ParseErrorKind::InvalidNumber)?;
    let value = value
        .trim()
        .parse::<f64>()
        .map_err(|_| ParseErrorKind::InvalidNumber)?;

    Ok((row, col, T::from_f64(value)))
}
