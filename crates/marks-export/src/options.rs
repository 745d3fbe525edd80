/// Export tunables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportOptions {
    /// Shown in the text report where a slot holds no mark.
    pub no_mark_placeholder: String,
    /// Also write the students-as-columns marks table.
    pub transposed: bool,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            no_mark_placeholder: "__".to_owned(),
            transposed: true,
        }
    }
}
