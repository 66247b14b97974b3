// Word-graph resource header: parsing, validation, writing.

use crate::DawgError;

/// Leading magic token of every word-graph resource.
pub const MAGIC: &[u8; 4] = b"DAWG";

/// Field delimiter in the ASCII header.
const DELIMITER: u8 = b':';

/// Parsed word-graph header.
///
/// The resource layout is `DAWG:<start>:<byte_len>:<edge bytes>`, where both
/// numbers are ASCII decimal and `edge bytes` holds `byte_len / 4` big-endian
/// 32-bit edges.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DawgHeader {
    /// Index of the first edge of the root's sibling row.
    pub start: usize,
    /// Length of the edge block in bytes.
    pub byte_len: usize,
}

impl DawgHeader {
    /// Number of complete edges in the edge block.
    pub fn edge_count(&self) -> usize {
        self.byte_len / 4
    }
}

/// Parse and validate the ASCII header.
///
/// Returns the header and the offset of the first edge byte. Each decimal
/// field runs up to its `:` delimiter, so zero-padded fixed-width fields are
/// accepted as well.
pub fn parse_header(data: &[u8]) -> Result<(DawgHeader, usize), DawgError> {
    if data.len() < MAGIC.len() || &data[..MAGIC.len()] != MAGIC {
        return Err(DawgError::InvalidMagic);
    }
    let mut pos = MAGIC.len();
    if data.get(pos) != Some(&DELIMITER) {
        return Err(DawgError::MissingDelimiter { field: "magic" });
    }
    pos += 1;

    let (start, next) = parse_field(data, pos, "start")?;
    let (byte_len, next) = parse_field(data, next, "byte length")?;

    Ok((DawgHeader { start, byte_len }, next))
}

/// Parse one decimal field beginning at `pos`, consuming its trailing delimiter.
fn parse_field(data: &[u8], pos: usize, field: &'static str) -> Result<(usize, usize), DawgError> {
    let rest = data.get(pos..).unwrap_or_default();
    let Some(len) = rest.iter().position(|&b| b == DELIMITER) else {
        return Err(DawgError::MissingDelimiter { field });
    };

    let text = std::str::from_utf8(&rest[..len]).map_err(|_| DawgError::InvalidNumber {
        field,
        value: String::from_utf8_lossy(&rest[..len]).into_owned(),
    })?;
    let value: i64 = text.parse().map_err(|_| DawgError::InvalidNumber {
        field,
        value: text.to_string(),
    })?;
    if value < 0 {
        return Err(DawgError::Negative { field, value });
    }
    let value = usize::try_from(value).map_err(|_| DawgError::InvalidNumber {
        field,
        value: text.to_string(),
    })?;

    Ok((value, pos + len + 1))
}

/// Append a header for the given root row and edge block length to `out`.
pub fn write_header(start: usize, byte_len: usize, out: &mut Vec<u8>) {
    out.extend_from_slice(MAGIC);
    out.push(DELIMITER);
    out.extend_from_slice(start.to_string().as_bytes());
    out.push(DELIMITER);
    out.extend_from_slice(byte_len.to_string().as_bytes());
    out.push(DELIMITER);
}
