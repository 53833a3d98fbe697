use crate::Error;

/// A MAT data file holding named 2-D numeric variables.
///
/// The handle binds a file name; the file itself is opened per operation, so
/// a missing file surfaces on the first read or write rather than on open.
#[derive(Debug, Clone)]
pub struct MatFile {
    inner: vardata_mat::MatFile,
}

impl MatFile {
    /// Bind a MAT file name.
    ///
    /// If `verbose` is set, an informational event is emitted.
    pub fn open(file_name: &str, verbose: bool) -> Self {
        Self {
            inner: vardata_mat::MatFile::new(file_name, verbose),
        }
    }

    /// The name of the underlying file.
    pub fn file_name(&self) -> &str {
        self.inner.file_name()
    }

    /// The `(rows, cols)` of a named variable, without reading its data.
    ///
    /// # Panics
    ///
    /// Panics if the file cannot be opened or the variable doesn't exist.
    #[track_caller]
    pub fn matrix_dims(&self, name: &str) -> (usize, usize) {
        match self.try_matrix_dims(name) {
            Ok(dims) => dims,
            Err(error) => panic!("Error:\n  failed to read '{}':\n  {}\n", name, error),
        }
    }

    /// The `(rows, cols)` of a named variable, without reading its data.
    pub fn try_matrix_dims(&self, name: &str) -> Result<(usize, usize), Error> {
        Ok(self.inner.matrix_dims(name)?)
    }

    /// The names of all variables in the file, in file order.
    ///
    /// # Panics
    ///
    /// Panics if the file cannot be opened or is corrupt.
    #[track_caller]
    pub fn variable_names(&self) -> Vec<String> {
        match self.try_variable_names() {
            Ok(names) => names,
            Err(error) => panic!("Error:\n  failed to list variables:\n  {}\n", error),
        }
    }

    /// The names of all variables in the file, in file order.
    pub fn try_variable_names(&self) -> Result<Vec<String>, Error> {
        Ok(self.inner.variable_names()?)
    }

    /// Read a named `rows x cols` variable as a row-major buffer.
    ///
    /// # Panics
    ///
    /// Panics if the variable doesn't exist, is not a real double-precision
    /// matrix, or its dimensions don't match.
    #[track_caller]
    pub fn read_matrix(&self, name: &str, rows: usize, cols: usize) -> Vec<f64> {
        match self.try_read_matrix(name, rows, cols) {
            Ok(data) => data,
            Err(error) => panic!("Error:\n  failed to read '{}':\n  {}\n", name, error),
        }
    }

    /// Read a named `rows x cols` variable as a row-major buffer.
    ///
    /// Returns an error if the variable doesn't exist, is not a real
    /// double-precision matrix, or its dimensions don't match.
    pub fn try_read_matrix(
        &self,
        name: &str,
        rows: usize,
        cols: usize,
    ) -> Result<Vec<f64>, Error> {
        Ok(self.inner.read_matrix(name, rows, cols)?)
    }

    /// Write a row-major buffer as a named `rows x cols` variable.
    ///
    /// With `append` unset the file is created from scratch with this single
    /// variable; with `append` set the existing file is updated, replacing
    /// any prior variable of the same name.
    ///
    /// # Panics
    ///
    /// Panics if the buffer length doesn't match the dimensions or the file
    /// cannot be written.
    #[track_caller]
    pub fn write_matrix(&self, name: &str, data: &[f64], rows: usize, cols: usize, append: bool) {
        match self.try_write_matrix(name, data, rows, cols, append) {
            Ok(()) => {}
            Err(error) => panic!("Error:\n  failed to write '{}':\n  {}\n", name, error),
        }
    }

    /// Write a row-major buffer as a named `rows x cols` variable.
    ///
    /// See [MatFile::write_matrix] for the `append` semantics.
    pub fn try_write_matrix(
        &self,
        name: &str,
        data: &[f64],
        rows: usize,
        cols: usize,
        append: bool,
    ) -> Result<(), Error> {
        Ok(self.inner.write_matrix(name, data, rows, cols, append)?)
    }
}
