use vardata_json::JsonDocument;
use vardata_value::{NumberLocale, Value};

use crate::Error;

/// A JSON data file serving dotted-path scalar reads.
///
/// The file is parsed once on open and the handle serves any number of
/// sequential reads from the parsed tree.
#[derive(Debug, Clone)]
pub struct JsonFile {
    document: JsonDocument,
}

impl JsonFile {
    /// Open and parse a JSON file.
    ///
    /// If `verbose` is set, an informational loading event is emitted.
    ///
    /// # Panics
    ///
    /// Panics if the file cannot be read or parsed.
    #[track_caller]
    pub fn open(file_name: &str, verbose: bool) -> Self {
        match Self::try_open(file_name, verbose) {
            Ok(file) => file,
            Err(error) => panic!("Error:\n  failed to open {}:\n  {}\n", file_name, error),
        }
    }

    /// Open and parse a JSON file.
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn try_open(file_name: &str, verbose: bool) -> Result<Self, Error> {
        let document = JsonDocument::parse_file(file_name, verbose)?;
        Ok(Self { document })
    }

    /// The name of the underlying file.
    pub fn file_name(&self) -> &str {
        self.document.file_name()
    }

    /// Set the locale used when string tokens are converted to numbers.
    pub fn set_locale(&mut self, locale: NumberLocale) {
        self.document.set_locale(locale);
    }

    /// Read a float at the given dotted path, `None` if the path is absent.
    ///
    /// # Panics
    ///
    /// Panics if the value exists but is not a number.
    #[track_caller]
    pub fn read_f64(&self, path: &str) -> Option<f64> {
        unwrap_read(path, self.try_read_f64(path))
    }

    /// Read a float at the given dotted path, `None` if the path is absent.
    pub fn try_read_f64(&self, path: &str) -> Result<Option<f64>, Error> {
        Ok(self.document.read_f64(path)?)
    }

    /// Read an integer at the given dotted path, `None` if the path is
    /// absent.
    ///
    /// # Panics
    ///
    /// Panics if the value exists but is not an integer.
    #[track_caller]
    pub fn read_i64(&self, path: &str) -> Option<i64> {
        unwrap_read(path, self.try_read_i64(path))
    }

    /// Read an integer at the given dotted path, `None` if the path is
    /// absent.
    pub fn try_read_i64(&self, path: &str) -> Result<Option<i64>, Error> {
        Ok(self.document.read_i64(path)?)
    }

    /// Read a string at the given dotted path, `None` if the path is absent.
    ///
    /// # Panics
    ///
    /// Panics if the value exists but is a container.
    #[track_caller]
    pub fn read_string(&self, path: &str) -> Option<String> {
        unwrap_read(path, self.try_read_string(path))
    }

    /// Read a string at the given dotted path, `None` if the path is absent.
    pub fn try_read_string(&self, path: &str) -> Result<Option<String>, Error> {
        Ok(self.document.read_string(path)?)
    }

    /// Read a scalar of whatever type is stored at the given dotted path.
    ///
    /// # Panics
    ///
    /// Panics if the value exists but is a container.
    #[track_caller]
    pub fn read_value(&self, path: &str) -> Option<Value> {
        unwrap_read(path, self.try_read_value(path))
    }

    /// Read a scalar of whatever type is stored at the given dotted path.
    pub fn try_read_value(&self, path: &str) -> Result<Option<Value>, Error> {
        Ok(self.document.read_value(path)?)
    }
}

#[track_caller]
fn unwrap_read<T>(path: &str, result: Result<T, Error>) -> T {
    match result {
        Ok(value) => value,
        Err(error) => panic!("Error:\n  failed to read '{}':\n  {}\n", path, error),
    }
}
