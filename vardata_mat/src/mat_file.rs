use std::{
    fs::File,
    io::{BufReader, BufWriter},
    sync::Arc,
};

use vardata_matrix::{to_column_major, to_row_major};

use crate::{
    mat4::{self, RawVariable, TYPE_DOUBLE},
    MatFileError,
    MatFileErrorKind::{self, *},
};

/// Accessor for named 2-D numeric variables in a MAT file.
///
/// The handle binds a file name; every operation opens the file, runs to
/// completion, and closes it again, so a missing file surfaces on first
/// access rather than on construction.
#[derive(Debug, Clone)]
pub struct MatFile {
    file_name: String,
}

impl MatFile {
    /// Bind a MAT file name.
    ///
    /// If `verbose` is set, an informational event is emitted.
    pub fn new(file_name: &str, verbose: bool) -> Self {
        if verbose {
            tracing::info!("accessing \"{}\"", file_name);
        }
        Self {
            file_name: file_name.to_string(),
        }
    }

    /// The name of the underlying file.
    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    /// The dimensions of a named variable, without reading its data.
    pub fn matrix_dims(&self, name: &str) -> Result<(usize, usize), MatFileError> {
        let mut reader = BufReader::new(self.open()?);
        let header = self
            .lift(mat4::find_info(&mut reader, name))?
            .ok_or_else(|| self.error(undefined(name)))?;
        Ok((header.rows, header.cols))
    }

    /// The names of all variables, in file order.
    pub fn variable_names(&self) -> Result<Vec<String>, MatFileError> {
        let mut reader = BufReader::new(self.open()?);
        let vars = self.lift(mat4::load_all(&mut reader))?;
        Ok(vars.into_keys().collect())
    }

    /// Read a named variable as a row-major buffer.
    ///
    /// The variable must be real, double-precision, and exactly
    /// `rows x cols`; any mismatch is an error and nothing is returned.
    pub fn read_matrix(
        &self,
        name: &str,
        rows: usize,
        cols: usize,
    ) -> Result<Vec<f64>, MatFileError> {
        let mut reader = BufReader::new(self.open()?);
        let var = self
            .lift(mat4::find_variable(&mut reader, name))?
            .ok_or_else(|| self.error(undefined(name)))?;

        if mat4::is_text(var.type_code) {
            return Err(self.error(TextMatrix {
                name: name.to_string(),
            }));
        }
        // Sparse storage (ones digit 2) is not a dense double array either.
        if mat4::precision(var.type_code) != 0 || var.type_code % 10 != 0 {
            return Err(self.error(NotDoublePrecision {
                name: name.to_string(),
            }));
        }
        if var.imaginary {
            return Err(self.error(ComplexMatrix {
                name: name.to_string(),
            }));
        }
        if var.rows != rows {
            return Err(self.error(RowMismatch {
                name: name.to_string(),
                requested: rows,
                rows: var.rows,
                cols: var.cols,
            }));
        }
        if var.cols != cols {
            return Err(self.error(ColumnMismatch {
                name: name.to_string(),
                requested: cols,
                rows: var.rows,
                cols: var.cols,
            }));
        }

        // Stored column-wise; the caller expects row-major.
        let mut values: Vec<f64> = bytemuck::pod_collect_to_vec(&var.data);
        to_row_major(&mut values, rows, cols);
        Ok(values)
    }

    /// Write a row-major buffer as a named variable.
    ///
    /// With `append` unset the file is created from scratch with this single
    /// variable. With `append` set the existing file is rewritten with any
    /// prior variable of the same name replaced; other variables survive
    /// unchanged.
    pub fn write_matrix(
        &self,
        name: &str,
        data: &[f64],
        rows: usize,
        cols: usize,
        append: bool,
    ) -> Result<(), MatFileError> {
        self.lift(mat4::validate_name(name))?;
        if data.len() != rows * cols {
            return Err(self.error(DataLengthMismatch {
                name: name.to_string(),
                expected: rows * cols,
                actual: data.len(),
            }));
        }
        let mut values = data.to_vec();
        to_column_major(&mut values, rows, cols);
        let var = RawVariable {
            name: name.to_string(),
            type_code: TYPE_DOUBLE,
            rows,
            cols,
            imaginary: false,
            data: bytemuck::cast_slice(&values).to_vec(),
        };

        let mut vars = if append {
            let mut reader = BufReader::new(self.open()?);
            self.lift(mat4::load_all(&mut reader))?
        } else {
            Default::default()
        };
        vars.shift_remove(name);
        vars.insert(name.to_string(), var);

        let file = File::create(&self.file_name)
            .map_err(|error| self.error(WriteError(Arc::new(error))))?;
        let mut writer = BufWriter::new(file);
        for var in vars.values() {
            self.lift(mat4::write_variable(&mut writer, var))?;
        }
        self.lift(
            std::io::Write::flush(&mut writer).map_err(|error| WriteError(Arc::new(error))),
        )?;
        Ok(())
    }

    fn open(&self) -> Result<File, MatFileError> {
        File::open(&self.file_name).map_err(|error| self.error(OpenError(Arc::new(error))))
    }

    fn lift<T>(&self, result: Result<T, MatFileErrorKind>) -> Result<T, MatFileError> {
        result.map_err(|kind| self.error(kind))
    }

    fn error(&self, kind: MatFileErrorKind) -> MatFileError {
        MatFileError {
            file_name: self.file_name.clone(),
            kind,
        }
    }
}

fn undefined(name: &str) -> MatFileErrorKind {
    UndefinedVariable {
        name: name.to_string(),
    }
}
