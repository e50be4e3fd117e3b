//! Table-to-plan reader and preview warnings.

use std::collections::HashMap;

use super::table::{CellValue, SheetTable};
use super::{WorkbookError, COLUMNS};
use crate::domain::{Course, CourseKind, CoursePlan, HourBreakdown, SemesterTerm};

/// Where each required column sits in a particular sheet.
struct ColumnMap {
    code: usize,
    name: usize,
    kind: usize,
    credits: usize,
    semester: usize,
    lecture: usize,
    lab: usize,
    practice: usize,
    seminar: usize,
    individual: usize,
    prerequisites: usize,
}

impl ColumnMap {
    fn resolve(table: &SheetTable) -> Result<Self, WorkbookError> {
        let mut idx = [0usize; COLUMNS.len()];
        let mut missing = Vec::new();
        for (slot, header) in idx.iter_mut().zip(COLUMNS) {
            match table.column_index(header) {
                Some(i) => *slot = i,
                None => missing.push(header),
            }
        }
        if !missing.is_empty() {
            return Err(WorkbookError::MissingColumns(missing.join(", ")));
        }
        Ok(Self {
            code: idx[0],
            name: idx[1],
            kind: idx[2],
            credits: idx[3],
            semester: idx[4],
            lecture: idx[5],
            lab: idx[6],
            practice: idx[7],
            seminar: idx[8],
            individual: idx[9],
            prerequisites: idx[10],
        })
    }
}

/// Read a cell as free text. Numeric cells render without a trailing `.0`
/// so codes typed as numbers survive.
fn text_cell(cell: &CellValue) -> String {
    match cell {
        CellValue::Text(s) => s.trim().to_string(),
        #[allow(clippy::cast_possible_truncation)]
        CellValue::Number(n) if n.fract() == 0.0 => format!("{}", *n as i64),
        CellValue::Number(n) => format!("{n}"),
        CellValue::Bool(b) => b.to_string(),
        CellValue::Empty => String::new(),
    }
}

/// Read a cell as a non-negative whole number. Blank reads as 0; numeric
/// text is accepted.
fn int_cell(cell: &CellValue, row: usize, column: &str) -> Result<u32, WorkbookError> {
    let out_of_range = || WorkbookError::Row {
        row,
        message: format!("{column} must be a non-negative whole number"),
    };
    match cell {
        CellValue::Empty => Ok(0),
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        CellValue::Number(n) => {
            if n.fract() == 0.0 && *n >= 0.0 && *n <= f64::from(u32::MAX) {
                Ok(*n as u32)
            } else {
                Err(out_of_range())
            }
        }
        CellValue::Text(s) => {
            let trimmed = s.trim();
            if trimmed.is_empty() {
                Ok(0)
            } else {
                trimmed.parse().map_err(|_| out_of_range())
            }
        }
        CellValue::Bool(_) => Err(out_of_range()),
    }
}

fn term_from_row(table: &SheetTable, columns: &ColumnMap, idx: usize) -> Result<SemesterTerm, WorkbookError> {
    let row = idx + 2;
    let semester_raw = int_cell(table.cell(idx, columns.semester), row, "semester")?;
    let semester = u8::try_from(semester_raw).map_err(|_| WorkbookError::Row {
        row,
        message: format!("semester {semester_raw} is out of range"),
    })?;
    Ok(SemesterTerm {
        semester,
        credits: int_cell(table.cell(idx, columns.credits), row, "credits")?,
        hours: HourBreakdown {
            lecture: int_cell(table.cell(idx, columns.lecture), row, "lecture")?,
            lab: int_cell(table.cell(idx, columns.lab), row, "lab")?,
            practice: int_cell(table.cell(idx, columns.practice), row, "practice")?,
            seminar: int_cell(table.cell(idx, columns.seminar), row, "seminar")?,
            individual: int_cell(table.cell(idx, columns.individual), row, "individual")?,
        },
    })
}

/// Interpret a decoded sheet as a course plan and validate it.
///
/// Rows are grouped into courses by the `course_code` column: a coded row
/// starts a course (or adds a term to it when the code repeats), a
/// blank-code row adds a term to the most recent course. Fully blank rows
/// are skipped.
pub fn plan_from_table(table: &SheetTable) -> Result<CoursePlan, WorkbookError> {
    let columns = ColumnMap::resolve(table)?;

    let mut courses: Vec<Course> = Vec::new();
    let mut by_code: HashMap<String, usize> = HashMap::new();
    let mut last: Option<usize> = None;

    for (idx, cells) in table.rows.iter().enumerate() {
        if cells.iter().all(CellValue::is_blank) {
            continue;
        }
        let row = idx + 2;
        let code = text_cell(table.cell(idx, columns.code));
        let term = term_from_row(table, &columns, idx)?;

        if code.is_empty() {
            let Some(current) = last else {
                return Err(WorkbookError::Row {
                    row,
                    message: "course term given before any course code".to_string(),
                });
            };
            courses[current].semesters.push(term);
            continue;
        }

        if let Some(&existing) = by_code.get(&code) {
            courses[existing].semesters.push(term);
            last = Some(existing);
            continue;
        }

        let kind_text = text_cell(table.cell(idx, columns.kind));
        let kind = CourseKind::parse(&kind_text).ok_or_else(|| WorkbookError::Row {
            row,
            message: format!("unknown course type `{kind_text}`"),
        })?;
        let prerequisites: Vec<String> = text_cell(table.cell(idx, columns.prerequisites))
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .collect();

        courses.push(Course {
            code: code.clone(),
            name: text_cell(table.cell(idx, columns.name)),
            kind,
            semesters: vec![term],
            prerequisites,
        });
        by_code.insert(code, courses.len() - 1);
        last = Some(courses.len() - 1);
    }

    let plan = CoursePlan::from_courses(courses);
    plan.validate()?;
    Ok(plan)
}

/// A decoded plan together with its advisory warnings.
#[derive(Debug, Clone)]
pub struct ImportPreview {
    pub plan: CoursePlan,
    pub warnings: Vec<String>,
}

impl ImportPreview {
    /// Whether the plan imported without any advisories.
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.warnings.is_empty()
    }
}

/// Read a sheet and flag courses worth a second look before committing.
pub fn preview(table: &SheetTable) -> Result<ImportPreview, WorkbookError> {
    let plan = plan_from_table(table)?;
    let warnings = preview_warnings(&plan);
    Ok(ImportPreview { plan, warnings })
}

/// Advisory warnings over a valid plan: unusually heavy courses, long
/// prerequisite lists, and courses stretched over many terms. These never
/// block an import on their own.
#[must_use]
pub fn preview_warnings(plan: &CoursePlan) -> Vec<String> {
    let mut warnings = Vec::new();
    for course in plan.courses() {
        let total = course.total_credits();
        if total > 8 {
            warnings.push(format!(
                "Warning: Course {} has unusually high credits ({total})",
                course.code
            ));
        }
        if course.prerequisites.len() > 3 {
            warnings.push(format!(
                "Warning: Course {} has many prerequisites ({})",
                course.code,
                course.prerequisites.len()
            ));
        }
        if course.semesters.len() > 2 {
            warnings.push(format!(
                "Warning: Course {} spans {} semesters",
                course.code,
                course.semesters.len()
            ));
        }
    }
    warnings
}

#[cfg(test)]
mod tests {
    use super::*;

    fn headers() -> Vec<String> {
        COLUMNS.iter().map(|c| (*c).to_string()).collect()
    }

    fn row(
        code: &str,
        name: &str,
        kind: &str,
        credits: u32,
        semester: u32,
        hours: [u32; 5],
        prereqs: &str,
    ) -> Vec<CellValue> {
        vec![
            CellValue::from(code),
            CellValue::from(name),
            CellValue::from(kind),
            CellValue::from(credits),
            CellValue::from(semester),
            CellValue::from(hours[0]),
            CellValue::from(hours[1]),
            CellValue::from(hours[2]),
            CellValue::from(hours[3]),
            CellValue::from(hours[4]),
            CellValue::from(prereqs),
        ]
    }

    fn sample_table() -> SheetTable {
        let mut table = SheetTable::new("Curriculum");
        table.headers = headers();
        table.push_row(row("CS101", "Intro", "mandatory", 3, 1, [30, 15, 15, 0, 30], ""));
        table.push_row(row("CS201", "Data Structures", "mandatory", 3, 2, [30, 30, 0, 0, 30], "CS101"));
        // Continuation: second term of CS201
        table.push_row(row("", "", "", 2, 3, [15, 15, 0, 0, 30], ""));
        table
    }

    #[test]
    fn reads_courses_and_continuation_rows() {
        let plan = plan_from_table(&sample_table()).unwrap();
        assert_eq!(plan.len(), 2);
        let cs201 = plan.get("CS201").unwrap();
        assert_eq!(cs201.semesters.len(), 2);
        assert_eq!(cs201.semesters[1].semester, 3);
        assert_eq!(cs201.prerequisites, vec!["CS101".to_string()]);
    }

    #[test]
    fn repeated_code_extends_the_course() {
        let mut table = SheetTable::new("Curriculum");
        table.headers = headers();
        table.push_row(row("CS101", "Intro", "mandatory", 3, 1, [30, 15, 15, 0, 30], ""));
        table.push_row(row("CS101", "", "", 2, 2, [15, 15, 0, 0, 30], ""));
        let plan = plan_from_table(&table).unwrap();
        assert_eq!(plan.len(), 1);
        assert_eq!(plan.get("CS101").unwrap().semesters.len(), 2);
    }

    #[test]
    fn header_case_and_order_are_flexible() {
        let mut table = sample_table();
        table.headers = table
            .headers
            .iter()
            .map(|h| h.to_uppercase())
            .collect();
        assert!(plan_from_table(&table).is_ok());
    }

    #[test]
    fn missing_columns_are_named() {
        let mut table = sample_table();
        table.headers.truncate(9);
        let err = plan_from_table(&table).unwrap_err();
        match err {
            WorkbookError::MissingColumns(names) => {
                assert_eq!(names, "individual, prerequisites");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn leading_continuation_row_is_rejected() {
        let mut table = SheetTable::new("Curriculum");
        table.headers = headers();
        table.push_row(row("", "", "", 2, 1, [15, 15, 0, 0, 30], ""));
        let err = plan_from_table(&table).unwrap_err();
        assert!(matches!(err, WorkbookError::Row { row: 2, .. }));
    }

    #[test]
    fn blank_rows_are_skipped() {
        let mut table = sample_table();
        table.rows.insert(1, vec![CellValue::Empty; 11]);
        table.push_row(Vec::new());
        let plan = plan_from_table(&table).unwrap();
        assert_eq!(plan.len(), 2);
    }

    #[test]
    fn numeric_text_and_float_cells_are_accepted() {
        let mut table = SheetTable::new("Curriculum");
        table.headers = headers();
        let mut cells = row("CS101", "Intro", "mandatory", 0, 0, [0; 5], "");
        cells[3] = CellValue::Text("3".to_string());
        cells[4] = CellValue::Number(1.0);
        cells[5] = CellValue::Number(60.0);
        cells[9] = CellValue::Text("30".to_string());
        table.push_row(cells);
        let plan = plan_from_table(&table).unwrap();
        let term = plan.get("CS101").unwrap().semesters[0];
        assert_eq!(term.credits, 3);
        assert_eq!(term.hours.lecture, 60);
        assert_eq!(term.hours.individual, 30);
    }

    #[test]
    fn fractional_credits_are_rejected_with_row_number() {
        let mut table = SheetTable::new("Curriculum");
        table.headers = headers();
        let mut cells = row("CS101", "Intro", "mandatory", 3, 1, [30, 15, 15, 0, 30], "");
        cells[3] = CellValue::Number(2.5);
        table.push_row(cells);
        let err = plan_from_table(&table).unwrap_err();
        match err {
            WorkbookError::Row { row, message } => {
                assert_eq!(row, 2);
                assert!(message.contains("credits"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn unknown_course_type_is_rejected() {
        let mut table = SheetTable::new("Curriculum");
        table.headers = headers();
        table.push_row(row("CS101", "Intro", "core", 3, 1, [30, 15, 15, 0, 30], ""));
        let err = plan_from_table(&table).unwrap_err();
        assert!(err.to_string().contains("unknown course type"));
    }

    #[test]
    fn invalid_plans_fail_with_domain_error() {
        let mut table = SheetTable::new("Curriculum");
        table.headers = headers();
        // 31 + 30 hours for 2 credits: off by one
        table.push_row(row("CS101", "Intro", "mandatory", 2, 1, [31, 0, 0, 0, 30], ""));
        let err = plan_from_table(&table).unwrap_err();
        assert!(matches!(err, WorkbookError::Plan(_)));
    }

    #[test]
    fn warnings_flag_heavy_and_sprawling_courses() {
        let mut table = SheetTable::new("Curriculum");
        table.headers = headers();
        table.push_row(row("CS400", "Capstone", "mandatory", 5, 1, [60, 30, 0, 0, 60], ""));
        table.push_row(row("", "", "", 5, 2, [60, 30, 0, 0, 60], ""));
        table.push_row(row("", "", "", 2, 3, [15, 15, 0, 0, 30], ""));
        let preview = preview(&table).unwrap();
        assert_eq!(
            preview.warnings,
            vec![
                "Warning: Course CS400 has unusually high credits (12)".to_string(),
                "Warning: Course CS400 spans 3 semesters".to_string(),
            ]
        );
        assert!(!preview.is_clean());
    }

    #[test]
    fn warning_texts_for_prerequisite_overload() {
        let mut table = SheetTable::new("Curriculum");
        table.headers = headers();
        for code in ["A1", "A2", "A3", "A4"] {
            table.push_row(row(code, "Base", "mandatory", 2, 1, [15, 15, 0, 0, 30], ""));
        }
        table.push_row(row("CS500", "Summit", "selective", 2, 2, [15, 15, 0, 0, 30], "A1, A2, A3, A4"));
        let preview = preview(&table).unwrap();
        assert_eq!(
            preview.warnings,
            vec!["Warning: Course CS500 has many prerequisites (4)".to_string()]
        );
    }
}
