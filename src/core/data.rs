//! Series model + memory-efficient column loader with zero-allocation float parsing.

use std::io::{BufRead, BufReader, Read};

use thiserror::Error;

// --- Series ---

/// One plotted sequence. `None` marks a missing sample (a gap in the line).
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Series {
    samples: Vec<Option<f64>>,
}

/// Non-finite input never reaches the renderer as a number.
#[inline]
fn sample(v: f64) -> Option<f64> {
    v.is_finite().then_some(v)
}

impl Series {
    #[must_use]
    pub fn new(samples: Vec<Option<f64>>) -> Self {
        Self {
            samples: samples.into_iter().map(|s| s.and_then(sample)).collect(),
        }
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    #[inline]
    #[must_use]
    pub fn samples(&self) -> &[Option<f64>] {
        &self.samples
    }

    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = Option<f64>> + '_ {
        self.samples.iter().copied()
    }

    /// Every present sample, in order.
    #[inline]
    pub fn present(&self) -> impl Iterator<Item = f64> + '_ {
        self.samples.iter().filter_map(|s| *s)
    }

    #[must_use]
    pub fn is_all_missing(&self) -> bool {
        self.samples.iter().all(Option::is_none)
    }

    /// Insert `spacing` evenly spaced points between each pair of neighbours.
    ///
    /// `[a, b]` with spacing 1 becomes `[a, (a+b)/2, b]`. Points inserted next
    /// to a missing sample are missing too, so gaps keep their extent.
    #[must_use]
    pub fn pad(&self, spacing: usize) -> Self {
        if spacing == 0 || self.samples.len() < 2 {
            return self.clone();
        }
        let steps = (spacing + 1) as f64;
        let mut out = Vec::with_capacity((self.samples.len() - 1) * (spacing + 1) + 1);
        for pair in self.samples.windows(2) {
            out.push(pair[0]);
            for i in 1..=spacing {
                out.push(match (pair[0], pair[1]) {
                    (Some(start), Some(end)) => Some(start + i as f64 * (end - start) / steps),
                    _ => None,
                });
            }
        }
        out.extend(self.samples.last().copied());
        Self { samples: out }
    }
}

impl From<Vec<Option<f64>>> for Series {
    fn from(v: Vec<Option<f64>>) -> Self {
        Self::new(v)
    }
}

impl From<Vec<f64>> for Series {
    fn from(v: Vec<f64>) -> Self {
        v.into_iter().collect()
    }
}

impl From<&[f64]> for Series {
    fn from(v: &[f64]) -> Self {
        v.iter().copied().collect()
    }
}

impl<const N: usize> From<[f64; N]> for Series {
    fn from(v: [f64; N]) -> Self {
        v.into_iter().collect()
    }
}

impl FromIterator<f64> for Series {
    fn from_iter<I: IntoIterator<Item = f64>>(iter: I) -> Self {
        Self {
            samples: iter.into_iter().map(sample).collect(),
        }
    }
}

impl FromIterator<Option<f64>> for Series {
    fn from_iter<I: IntoIterator<Item = Option<f64>>>(iter: I) -> Self {
        Self {
            samples: iter.into_iter().map(|s| s.and_then(sample)).collect(),
        }
    }
}

// --- Error Handling ---
#[derive(Debug, Error)]
#[error("line {line}: {kind}")]
pub struct ParseError {
    pub line: usize,
    pub kind: ParseErrorKind,
}

#[derive(Debug, Error)]
pub enum ParseErrorKind {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("expected at most {expected} columns, got {found}")]
    BadColumnCount { expected: usize, found: usize },
    #[error("invalid value '{text}' in column {column}")]
    BadFloat { column: usize, text: String },
    #[error("no numeric rows found")]
    Empty,
}

// --- Helpers ---
#[inline]
fn trim(mut b: &[u8]) -> &[u8] {
    while !b.is_empty() && b[0].is_ascii_whitespace() {
        b = &b[1..];
    }
    while !b.is_empty() && b[b.len() - 1].is_ascii_whitespace() {
        b = &b[..b.len() - 1];
    }
    b
}

#[inline]
pub fn normalize_unicode_minus(buf: &mut Vec<u8>) {
    let (mut r, mut w) = (0, 0);
    while r < buf.len() {
        if r + 2 < buf.len() && buf[r] == 0xE2 && buf[r + 1] == 0x88 && buf[r + 2] == 0x92 {
            buf[w] = b'-';
            r += 3;
            w += 1;
        } else {
            if r != w {
                buf[w] = buf[r];
            }
            r += 1;
            w += 1;
        }
    }
    buf.truncate(w);
}

/// Empty fields and the usual spellings of "no value" are gaps.
#[inline]
fn is_missing_token(b: &[u8]) -> bool {
    b.is_empty()
        || b == b"-"
        || b.eq_ignore_ascii_case(b"nan")
        || b.eq_ignore_ascii_case(b"na")
        || b.eq_ignore_ascii_case(b"null")
}

#[inline]
fn parse_sample(bytes: &[u8], line: usize, column: usize) -> Result<Option<f64>, ParseError> {
    if is_missing_token(bytes) {
        return Ok(None);
    }
    lexical_core::parse::<f64>(bytes)
        .map(sample)
        .map_err(|_| ParseError {
            line,
            kind: ParseErrorKind::BadFloat {
                column,
                text: String::from_utf8_lossy(bytes).into_owned(),
            },
        })
}

/// Split on commas when present, otherwise on runs of whitespace.
fn split_fields(buf: &[u8]) -> Vec<&[u8]> {
    if buf.contains(&b',') {
        buf.split(|&b| b == b',').map(trim).collect()
    } else {
        buf.split(u8::is_ascii_whitespace)
            .filter(|f| !f.is_empty())
            .collect()
    }
}

// --- Column ingest ---
const BUF_CAP: usize = 1 << 20; // 1 MiB

/// Read one series per column. Rows shorter than the first data row are
/// padded with missing samples; longer rows are an error.
pub fn read_series<R: Read>(src: R) -> Result<Vec<Series>, ParseError> {
    let mut rdr = BufReader::with_capacity(BUF_CAP, src);
    let mut buf = Vec::<u8>::with_capacity(256);
    let mut columns: Vec<Vec<Option<f64>>> = Vec::new();
    let mut saw_first = false;
    let mut line_no = 0usize;

    loop {
        buf.clear();
        let n = rdr.read_until(b'\n', &mut buf).map_err(|e| ParseError {
            line: line_no,
            kind: ParseErrorKind::Io(e),
        })?;
        if n == 0 {
            break;
        }
        line_no += 1;

        if buf.ends_with(b"\n") {
            buf.pop();
        }
        if buf.ends_with(b"\r") {
            buf.pop();
        }

        normalize_unicode_minus(&mut buf);
        let line = trim(&buf);
        if line.is_empty() || line[0] == b'#' {
            continue;
        }
        let fields = split_fields(line);

        // simple header detection (non-numeric first field)
        if !saw_first {
            saw_first = true;
            let first = fields.first().copied().unwrap_or_default();
            if !is_missing_token(first) && lexical_core::parse::<f64>(first).is_err() {
                continue;
            }
        }
        if columns.is_empty() {
            columns = vec![Vec::new(); fields.len()];
        }

        if fields.len() > columns.len() {
            return Err(ParseError {
                line: line_no,
                kind: ParseErrorKind::BadColumnCount {
                    expected: columns.len(),
                    found: fields.len(),
                },
            });
        }
        for (column, samples) in columns.iter_mut().enumerate() {
            let value = match fields.get(column) {
                Some(f) => parse_sample(f, line_no, column + 1)?,
                None => None,
            };
            samples.push(value);
        }
    }
    if columns.first().is_none_or(Vec::is_empty) {
        return Err(ParseError {
            line: line_no,
            kind: ParseErrorKind::Empty,
        });
    }
    Ok(columns.into_iter().map(|c| Series { samples: c }).collect())
}

pub fn read_series_from_path(path: &str) -> Result<Vec<Series>, ParseError> {
    if path == "-" {
        read_series(std::io::stdin())
    } else {
        use std::fs::File;
        read_series(File::open(path).map_err(|e| ParseError {
            line: 0,
            kind: ParseErrorKind::Io(e),
        })?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn non_finite_becomes_missing() {
        let s = Series::from(vec![1.0, f64::NAN, f64::INFINITY, 2.0]);
        assert_eq!(s.samples(), &[Some(1.0), None, None, Some(2.0)]);
        assert_eq!(s.present().collect::<Vec<_>>(), vec![1.0, 2.0]);
    }

    #[test]
    fn pad_inserts_linear_points() {
        let s = Series::from([0.0, 3.0, 0.0]).pad(2);
        assert_eq!(
            s.samples(),
            &[Some(0.0), Some(1.0), Some(2.0), Some(3.0), Some(2.0), Some(1.0), Some(0.0)]
        );
        assert_eq!(s.len(), 2 * 3 + 1);
    }

    #[test]
    fn pad_keeps_gaps_missing() {
        let s = Series::new(vec![Some(1.0), None, Some(3.0)]).pad(1);
        assert_eq!(s.samples(), &[Some(1.0), None, None, None, Some(3.0)]);
    }

    #[test]
    fn pad_zero_or_short_is_identity() {
        let s = Series::from([4.0]);
        assert_eq!(s.pad(3), s);
        let t = Series::from([1.0, 2.0]);
        assert_eq!(t.pad(0), t);
    }

    #[test]
    fn reads_columns_with_header_and_gaps() {
        let input = "# comment\nlow,high\n1,2\n\u{2212}3,nan\n5\n";
        let cols = read_series(input.as_bytes()).expect("parse");
        assert_eq!(cols.len(), 2);
        assert_eq!(cols[0].samples(), &[Some(1.0), Some(-3.0), Some(5.0)]);
        assert_eq!(cols[1].samples(), &[Some(2.0), None, None]);
    }

    #[test]
    fn reads_whitespace_separated() {
        let cols = read_series("1 2\n3\t4\n".as_bytes()).expect("parse");
        assert_eq!(cols[1].samples(), &[Some(2.0), Some(4.0)]);
    }

    #[test]
    fn rejects_garbage_and_extra_columns() {
        let err = read_series("1\n2,3\n".as_bytes()).unwrap_err();
        assert_eq!(err.line, 2);
        assert!(matches!(
            err.kind,
            ParseErrorKind::BadColumnCount { expected: 1, found: 2 }
        ));

        let err = read_series("1\nabc\n".as_bytes()).unwrap_err();
        assert!(matches!(err.kind, ParseErrorKind::BadFloat { column: 1, .. }));

        let err = read_series("# nothing\n".as_bytes()).unwrap_err();
        assert!(matches!(err.kind, ParseErrorKind::Empty));
    }
}
