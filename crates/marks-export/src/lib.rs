//! Consumers of decoded gradebook classes.
//!
//! Everything here works on a [`ClassData`]: the parsed schema plus the
//! non-blank student records of one class.
//!
//! - [`class`] - finding `.rec`/`.txt` pairs and loading them.
//! - [`csv`] - marks, attendance, transposed and summary tables.
//! - [`convert`] - writing a class or a whole directory to CSV files.
//! - [`report`] - the plain-text class report.
//! - [`hex`] - raw byte walkthrough of a `.rec` file.

pub mod class;
pub mod convert;
pub mod csv;
mod error;
pub mod hex;
mod options;
pub mod report;

pub use class::{discover_classes, load_class, ClassData, ClassFiles};
pub use convert::{convert_class, convert_directory, ClassSummary, SUMMARY_FILE};
pub use error::ExportError;
pub use options::ExportOptions;
