//! Tolerant decoding of the comma-separated files exported by Canute.
//!
//! Files are read line by line: the first line is a header and is dropped whatever it holds,
//! blank lines, comments (`//...`) and lines without a member id are skipped.
//! Every other line becomes a [DataRow], whose fields are positional.
//! Columns beyond the ones a caller asks for are ignored.
//!
//! Fields are read as UTF-8, falling back to LATIN-1 for older exports.

use std::io::{BufRead, BufReader, Read, Split};
use std::num::ParseIntError;

use csv::ByteRecord;
use encoding::all::ISO_8859_1;
use encoding::{DecoderTrap, Encoding};
use thiserror::Error;

use crate::member::MemberId;

const COMMENT_PREFIX: &[u8] = b"//";

#[derive(Debug, Error)]
pub enum RowError {
    #[error("The file can't be read as comma-separated text.")]
    Unreadable(#[from] csv::Error),
    #[error("Line {line}: member id `{value}` is not a number.")]
    InvalidMemberId { line: u64, value: String, #[source] source: ParseIntError },
    #[error("Line {line}: expected at least {expected} fields, found {found}.")]
    MissingFields { line: u64, expected: usize, found: usize },
}

/// The outcome of decoding a single line.
#[derive(Debug, PartialEq)]
pub enum DecodedRow {
    Data(DataRow),
    Comment { line: u64 },
    MissingMemberId { line: u64 },
}

/// A line holding data, with its position in the file (1-based).
#[derive(Debug, PartialEq)]
pub struct DataRow {
    line: u64,
    fields: Vec<String>,
}

impl DataRow {
    pub fn line(&self) -> u64 {
        self.line
    }

    /// Parse the first field as a member id. Surrounding whitespace is ignored.
    pub fn member_id(&self) -> Result<MemberId, RowError> {
        let value = self.fields.first().map(String::as_str).unwrap_or_default();
        value.trim().parse::<MemberId>().map_err(|source| RowError::InvalidMemberId {
            line: self.line,
            value: value.to_owned(),
            source,
        })
    }

    /// The first `N` fields of the row.
    pub fn leading_fields<const N: usize>(&self) -> Result<[&str; N], RowError> {
        if self.fields.len() < N {
            return Err(RowError::MissingFields { line: self.line, expected: N, found: self.fields.len() });
        }

        Ok(std::array::from_fn(|index| self.fields[index].as_str()))
    }
}

pub struct RowDecoder<R> {
    lines: Split<BufReader<R>>,
    line: u64,
}

impl<R: Read> Iterator for RowDecoder<R> {
    type Item = Result<DecodedRow, RowError>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let content = match self.lines.next()? {
                Ok(content) => content,
                Err(e) => return Some(Err(RowError::Unreadable(e.into()))),
            };
            self.line += 1;

            let content = content.strip_suffix(b"\r").unwrap_or(&content[..]);
            if self.line == 1 || content.is_empty() {
                continue;
            }

            return Some(decode_line(self.line, content));
        }
    }
}

/// Decode every line after the header of a comma-separated source.
pub fn decode_rows<R: Read>(reader: R) -> RowDecoder<R> {
    RowDecoder { lines: BufReader::new(reader).split(b'\n'), line: 0 }
}

fn decode_line(line: u64, content: &[u8]) -> Result<DecodedRow, RowError> {
    if content.starts_with(COMMENT_PREFIX) {
        return Ok(DecodedRow::Comment { line });
    }

    let fields = split_fields(content)?.iter().map(|field| decode_field(line, field)).collect::<Vec<_>>();
    if fields.first().is_none_or(|member_id| member_id.is_empty()) {
        return Ok(DecodedRow::MissingMemberId { line });
    }

    Ok(DecodedRow::Data(DataRow { line, fields }))
}

fn split_fields(content: &[u8]) -> csv::Result<ByteRecord> {
    let mut record = ByteRecord::new();
    csv::ReaderBuilder::new()
        .delimiter(b',')
        .has_headers(false)
        .flexible(true)
        .quoting(false)
        .from_reader(content)
        .read_byte_record(&mut record)?;

    Ok(record)
}

fn decode_field(line: u64, field: &[u8]) -> String {
    match std::str::from_utf8(field) {
        Ok(field) => field.to_owned(),
        Err(_) => {
            debug!("Line {line}: field is not valid UTF-8, reading it as LATIN-1.");
            ISO_8859_1
                .decode(field, DecoderTrap::Replace)
                .unwrap_or_else(|_| String::from_utf8_lossy(field).into_owned())
        }
    }
}
