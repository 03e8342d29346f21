use std::fs;
use std::io::Write;
use std::path::Path;

use log::info;

use super::MatrixError;

/// Temp file builder whose files get the same mode as `File::create` (0666 minus umask).
#[cfg(unix)]
fn temp_builder() -> tempfile::Builder<'static, 'static> {
    use std::os::unix::fs::PermissionsExt;

    let mut builder = tempfile::Builder::new();
    builder.permissions(fs::Permissions::from_mode(0o666));
    builder
}

#[cfg(not(unix))]
fn temp_builder() -> tempfile::Builder<'static, 'static> {
    tempfile::Builder::new()
}

/// Role marker for the first annotation column
pub const ROLE_ID: &str = "-1";

/// Role marker for the remaining annotation columns
pub const ROLE_ANNOTATION: &str = "0";

/// Role marker for sample columns when no design matrix is given
pub const ROLE_SAMPLE: &str = "1";

/// Assembled matrix: role row, label row, then one row per consensus feature.
///
/// Every cell is already rendered as text, so writing never has to coerce values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputMatrix {
    rows: Vec<Vec<String>>,
}

impl OutputMatrix {
    pub(crate) fn from_parts(role_row: Vec<String>, label_row: Vec<String>, data: Vec<Vec<String>>) -> Self {
        let mut rows = Vec::with_capacity(data.len() + 2);
        rows.push(role_row);
        rows.push(label_row);
        rows.extend(data);
        Self { rows }
    }

    /// `(rows, columns)`, header rows included
    pub fn shape(&self) -> (usize, usize) {
        (self.rows.len(), self.rows[0].len())
    }

    /// Header row 1: column roles
    pub fn role_row(&self) -> &[String] {
        &self.rows[0]
    }

    /// Header row 2: column labels
    pub fn label_row(&self) -> &[String] {
        &self.rows[1]
    }

    /// Value rows, one per consensus feature
    pub fn data_rows(&self) -> &[Vec<String>] {
        &self.rows[2..]
    }

    /// All rows, headers first
    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    /// Write all rows as delimited text. No extra header line or index column is emitted.
    pub fn write_to<W: Write>(&self, writer: W, delimiter: u8) -> Result<(), MatrixError> {
        let mut csv_writer = csv::WriterBuilder::new()
            .delimiter(delimiter)
            .has_headers(false)
            .from_writer(writer);
        for row in &self.rows {
            csv_writer.write_record(row)?;
        }
        csv_writer.flush()?;
        Ok(())
    }

    /// Write the matrix to `path`.
    ///
    /// Rows go to a temporary file next to the destination, which is renamed into
    /// place once complete; a failed write leaves no file at `path`.
    pub fn write_path<P: AsRef<Path>>(&self, path: P, delimiter: u8) -> Result<(), MatrixError> {
        let path = path.as_ref();
        let dir = match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        let mut temp = temp_builder().tempfile_in(dir)?;
        self.write_to(temp.as_file_mut(), delimiter)?;

        // Replacing an existing output keeps its mode
        if let Ok(existing) = fs::metadata(path) {
            temp.as_file().set_permissions(existing.permissions())?;
        }
        temp.as_file().sync_all()?;
        temp.persist(path).map_err(|e| e.error)?;

        let (rows, columns) = self.shape();
        info!("Wrote {} x {} matrix to {}", rows, columns, path.display());
        Ok(())
    }
}
