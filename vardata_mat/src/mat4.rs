//! Level 4 MAT container codec.
//!
//! Each variable is a header of five little-endian i32 fields (type, mrows,
//! ncols, imagf, namlen), the NUL-terminated variable name, and the element
//! payload, real part first, column-wise. The type field encodes byte order
//! (thousands digit), element precision (tens digit) and numeric-vs-text
//! (ones digit).

use std::{
    io::{self, Read, Seek, SeekFrom, Write},
    sync::Arc,
};

use indexmap::IndexMap;

use crate::MatFileErrorKind::{self, *};

/// Type code for a little-endian, double-precision, numeric matrix.
pub(crate) const TYPE_DOUBLE: i32 = 0;

const HEADER_LEN: usize = 20;
const MAX_NAME_LEN: usize = 1024;

/// Precision digit of a type code.
pub(crate) fn precision(type_code: i32) -> i32 {
    type_code / 10 % 10
}

/// True if the ones digit marks a text matrix.
pub(crate) fn is_text(type_code: i32) -> bool {
    type_code % 10 == 1
}

fn element_size(type_code: i32) -> Option<usize> {
    match precision(type_code) {
        0 => Some(8), // f64
        1 => Some(4), // f32
        2 => Some(4), // i32
        3 => Some(2), // i16
        4 => Some(2), // u16
        5 => Some(1), // u8
        _ => None,
    }
}

#[derive(Debug, Clone)]
pub(crate) struct VarHeader {
    pub(crate) type_code: i32,
    pub(crate) rows: usize,
    pub(crate) cols: usize,
    pub(crate) imaginary: bool,
    name_len: usize,
}

impl VarHeader {
    /// Payload length in bytes, imaginary part included.
    fn data_len(&self, offset: u64) -> Result<usize, MatFileErrorKind> {
        let elem = element_size(self.type_code).ok_or(CorruptHeader { offset })?;
        self.rows
            .checked_mul(self.cols)
            .and_then(|n| n.checked_mul(elem))
            .and_then(|n| n.checked_mul(if self.imaginary { 2 } else { 1 }))
            .ok_or(CorruptHeader { offset })
    }
}

/// A variable with its payload kept verbatim, so rewriting a file preserves
/// variables this crate does not otherwise understand.
#[derive(Debug, Clone)]
pub(crate) struct RawVariable {
    pub(crate) name: String,
    pub(crate) type_code: i32,
    pub(crate) rows: usize,
    pub(crate) cols: usize,
    pub(crate) imaginary: bool,
    pub(crate) data: Vec<u8>,
}

fn read_i32(buf: &[u8]) -> i32 {
    i32::from_le_bytes([buf[0], buf[1], buf[2], buf[3]])
}

fn io_error(error: io::Error) -> MatFileErrorKind {
    ReadError(Arc::new(error))
}

/// Read the next variable header, or `None` at a clean end of file.
fn read_header(r: &mut impl Read, offset: u64) -> Result<Option<VarHeader>, MatFileErrorKind> {
    let mut buf = [0u8; HEADER_LEN];
    let mut filled = 0;
    while filled < buf.len() {
        match r.read(&mut buf[filled..]) {
            Ok(0) => break,
            Ok(n) => filled += n,
            Err(error) if error.kind() == io::ErrorKind::Interrupted => {}
            Err(error) => return Err(io_error(error)),
        }
    }
    if filled == 0 {
        return Ok(None);
    }
    if filled < HEADER_LEN {
        return Err(CorruptHeader { offset });
    }

    let type_code = read_i32(&buf[0..4]);
    let rows = read_i32(&buf[4..8]);
    let cols = read_i32(&buf[8..12]);
    let imagf = read_i32(&buf[12..16]);
    let name_len = read_i32(&buf[16..20]);

    if type_code / 1000 == 1 {
        return Err(UnsupportedByteOrder { type_code });
    }
    let valid = type_code >= 0
        && type_code / 1000 == 0
        && type_code / 100 % 10 == 0
        && precision(type_code) <= 5
        && type_code % 10 <= 2
        && rows >= 0
        && cols >= 0
        && (0..=1).contains(&imagf)
        && (1..=MAX_NAME_LEN as i32).contains(&name_len);
    if !valid {
        return Err(CorruptHeader { offset });
    }

    Ok(Some(VarHeader {
        type_code,
        rows: rows as usize,
        cols: cols as usize,
        imaginary: imagf == 1,
        name_len: name_len as usize,
    }))
}

fn read_name(r: &mut impl Read, len: usize, offset: u64) -> Result<String, MatFileErrorKind> {
    let mut buf = vec![0u8; len];
    r.read_exact(&mut buf).map_err(io_error)?;
    let nul = buf
        .iter()
        .position(|&b| b == 0)
        .ok_or(CorruptHeader { offset })?;
    buf.truncate(nul);
    String::from_utf8(buf).map_err(|_| CorruptHeader { offset })
}

/// Seek past a payload. A length that doesn't fit a forward seek can only
/// come from a nonsensical header.
fn skip_payload<R: Read + Seek>(
    r: &mut R,
    data_len: usize,
    offset: u64,
) -> Result<(), MatFileErrorKind> {
    let distance = i64::try_from(data_len).map_err(|_| CorruptHeader { offset })?;
    r.seek(SeekFrom::Current(distance)).map_err(io_error)?;
    Ok(())
}

/// Scan for a variable and return its header without reading the payload.
pub(crate) fn find_info<R: Read + Seek>(
    r: &mut R,
    name: &str,
) -> Result<Option<VarHeader>, MatFileErrorKind> {
    let mut offset = 0u64;
    while let Some(header) = read_header(r, offset)? {
        let var_name = read_name(r, header.name_len, offset)?;
        let data_len = header.data_len(offset)?;
        if var_name == name {
            return Ok(Some(header));
        }
        skip_payload(r, data_len, offset)?;
        offset += (HEADER_LEN + header.name_len + data_len) as u64;
    }
    Ok(None)
}

/// Scan for a variable and read its payload.
pub(crate) fn find_variable<R: Read + Seek>(
    r: &mut R,
    name: &str,
) -> Result<Option<RawVariable>, MatFileErrorKind> {
    let mut offset = 0u64;
    while let Some(header) = read_header(r, offset)? {
        let var_name = read_name(r, header.name_len, offset)?;
        let data_len = header.data_len(offset)?;
        if var_name == name {
            let mut data = vec![0u8; data_len];
            r.read_exact(&mut data).map_err(io_error)?;
            return Ok(Some(RawVariable {
                name: var_name,
                type_code: header.type_code,
                rows: header.rows,
                cols: header.cols,
                imaginary: header.imaginary,
                data,
            }));
        }
        skip_payload(r, data_len, offset)?;
        offset += (HEADER_LEN + header.name_len + data_len) as u64;
    }
    Ok(None)
}

/// Read every variable in file order.
pub(crate) fn load_all<R: Read + Seek>(
    r: &mut R,
) -> Result<IndexMap<String, RawVariable>, MatFileErrorKind> {
    let mut vars = IndexMap::new();
    let mut offset = 0u64;
    while let Some(header) = read_header(r, offset)? {
        let name = read_name(r, header.name_len, offset)?;
        let data_len = header.data_len(offset)?;
        let mut data = vec![0u8; data_len];
        r.read_exact(&mut data).map_err(io_error)?;
        offset += (HEADER_LEN + header.name_len + data_len) as u64;
        vars.insert(
            name.clone(),
            RawVariable {
                name,
                type_code: header.type_code,
                rows: header.rows,
                cols: header.cols,
                imaginary: header.imaginary,
                data,
            },
        );
    }
    Ok(vars)
}

/// Reject names the format can't represent; writing one would produce a file
/// our own reader rejects as corrupt.
pub(crate) fn validate_name(name: &str) -> Result<(), MatFileErrorKind> {
    if name.is_empty() || name.contains('\0') || name.len() + 1 > MAX_NAME_LEN {
        return Err(InvalidVariableName {
            name: name.to_string(),
        });
    }
    Ok(())
}

pub(crate) fn write_variable(
    w: &mut impl Write,
    var: &RawVariable,
) -> Result<(), MatFileErrorKind> {
    validate_name(&var.name)?;
    let write_error = |error| WriteError(Arc::new(error));
    let header = [
        var.type_code,
        var.rows as i32,
        var.cols as i32,
        var.imaginary as i32,
        var.name.len() as i32 + 1,
    ];
    for field in header {
        w.write_all(&field.to_le_bytes()).map_err(write_error)?;
    }
    w.write_all(var.name.as_bytes()).map_err(write_error)?;
    w.write_all(&[0]).map_err(write_error)?;
    w.write_all(&var.data).map_err(write_error)?;
    Ok(())
}
