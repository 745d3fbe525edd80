use serde::Serialize;

/// A weighted marking category.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Category {
    pub name: String,
    /// Weight in percent.
    pub weight: f64,
}

/// One assignment column of the gradebook.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Assignment {
    pub name: String,
    pub date: String,
    pub description: String,
    /// Points the assignment is out of.
    pub total: f64,
    /// 1-based index into [`ClassSchema::categories`]; 0 is unassigned.
    pub category: usize,
    /// Class average as last computed by the marks program.
    pub average: f64,
}

impl Assignment {
    /// Resolves the assignment's category, if it has one.
    pub fn category_in<'s>(&self, schema: &'s ClassSchema) -> Option<&'s Category> {
        schema.category(self.category)
    }
}

/// Parsed `.txt` companion of a `.rec` file.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClassSchema {
    /// Format version; informational only.
    pub version: f64,
    pub class_code: String,
    pub class_description: String,
    pub num_terms: usize,
    pub num_categories: usize,
    pub num_assignments: usize,
    pub categories: Vec<Category>,
    pub assignments: Vec<Assignment>,
}

impl ClassSchema {
    /// Looks up a category by its 1-based index.
    pub fn category(&self, index: usize) -> Option<&Category> {
        index.checked_sub(1).and_then(|i| self.categories.get(i))
    }
}
