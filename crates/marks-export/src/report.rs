//! Plain-text class report.

use std::fmt::Write;

use marks_codec::{format_mark_or, is_recorded};

use crate::csv::decimal;
use crate::{ClassData, ExportOptions};

const RULE_WIDTH: usize = 80;

/// Renders the schema and every student of a class as text.
///
/// Slots without a mark show `options.no_mark_placeholder`. Term marks are
/// listed only when recorded.
pub fn render_report(class: &ClassData, options: &ExportOptions) -> String {
    let mut out = String::new();
    // Writing to a String cannot fail.
    let _ = write_report(&mut out, class, &options.no_mark_placeholder);
    out
}

fn write_report(out: &mut String, class: &ClassData, placeholder: &str) -> std::fmt::Result {
    let schema = &class.schema;
    let heavy = "=".repeat(RULE_WIDTH);
    let light = "-".repeat(RULE_WIDTH);
    let mark = |m| format_mark_or(m, placeholder);

    writeln!(out, "{}", heavy)?;
    writeln!(
        out,
        "Class: {} - {}",
        schema.class_code, schema.class_description
    )?;
    writeln!(out, "Version: {}", decimal(schema.version))?;
    writeln!(out, "{}", heavy)?;
    writeln!(out)?;

    writeln!(out, "CATEGORIES:")?;
    for (i, c) in schema.categories.iter().enumerate() {
        writeln!(out, "  {}. {:<12} - Weight: {:.1}%", i + 1, c.name, c.weight)?;
    }
    writeln!(out)?;

    writeln!(out, "ASSIGNMENTS:")?;
    for (i, a) in schema.assignments.iter().enumerate() {
        let category = a.category_in(schema).map_or("N/A", |c| c.name.as_str());
        writeln!(
            out,
            "  {:>2}. {:<4} - {:<10} - {:<30} - {:>5.1} pts - Cat: {}",
            i + 1,
            a.name,
            a.date,
            a.description,
            a.total,
            category
        )?;
    }
    writeln!(out)?;

    writeln!(out, "STUDENT RECORDS:")?;
    writeln!(out, "{}", heavy)?;
    writeln!(out)?;

    for (n, student) in class.students.iter().enumerate() {
        writeln!(out, "Student #{}: {}", n + 1, student.name)?;
        writeln!(out, "  Student No: {}", student.student_number)?;
        writeln!(out, "  Homeform:   {}", student.homeform)?;
        writeln!(out, "  Phone:      {}", student.phone)?;
        writeln!(out, "  Absences:   {}", student.absences)?;
        writeln!(out, "  Lates:      {}", student.lates)?;
        writeln!(out)?;

        writeln!(out, "  Assignment Marks:")?;
        for (a, &m) in schema.assignments.iter().zip(student.marks_for(schema)) {
            writeln!(
                out,
                "    {:<4} ({:<10}): {:>5} / {:.1}",
                a.name,
                a.date,
                mark(m),
                a.total
            )?;
        }
        writeln!(out)?;

        writeln!(out, "  Category Marks:")?;
        for (c, &m) in schema
            .categories
            .iter()
            .zip(student.category_marks_for(schema))
        {
            writeln!(out, "    {:<12}: {:>5}%", c.name, mark(m))?;
        }
        writeln!(out)?;

        if schema.num_terms > 0 {
            writeln!(out, "  Term Marks:")?;
            for (t, &m) in student.term_marks_for(schema).iter().enumerate() {
                if is_recorded(m) && m != Some(0.0) {
                    writeln!(out, "    Term {}: {:>5}%", t + 1, mark(m))?;
                }
            }
            writeln!(out)?;
        }

        writeln!(out, "  FINAL MARK: {}%", mark(student.final_mark))?;
        writeln!(out)?;
        writeln!(out, "{}", light)?;
        writeln!(out)?;
    }

    writeln!(out, "Total students: {}", class.students.len())?;
    Ok(())
}
