//! Plan-to-table writer and the starter template.

use super::table::{CellValue, SheetTable};
use super::COLUMNS;
use crate::domain::CoursePlan;

/// Sheet name used for exported curricula.
pub const CURRICULUM_SHEET: &str = "Curriculum";

/// Sheet name used for the starter template.
pub const TEMPLATE_SHEET: &str = "Curriculum Template";

fn header_row() -> Vec<String> {
    COLUMNS.iter().map(|c| (*c).to_string()).collect()
}

/// Lay a plan out as one row per course-term, in course-code order.
///
/// Course-level cells (code, name, type, prerequisites) are filled only on
/// the first row of each course; later terms leave them blank, which is the
/// same continuation convention the reader accepts back.
#[must_use]
pub fn plan_to_table(plan: &CoursePlan) -> SheetTable {
    let mut table = SheetTable::new(CURRICULUM_SHEET);
    table.headers = header_row();

    for course in plan.courses() {
        for (i, term) in course.semesters.iter().enumerate() {
            let (code, name, kind, prereqs) = if i == 0 {
                (
                    CellValue::from(course.code.as_str()),
                    CellValue::from(course.name.as_str()),
                    CellValue::from(course.kind.as_str()),
                    if course.prerequisites.is_empty() {
                        CellValue::Empty
                    } else {
                        CellValue::from(course.prerequisites.join(", "))
                    },
                )
            } else {
                (
                    CellValue::Empty,
                    CellValue::Empty,
                    CellValue::Empty,
                    CellValue::Empty,
                )
            };
            table.push_row(vec![
                code,
                name,
                kind,
                CellValue::from(term.credits),
                CellValue::from(u32::from(term.semester)),
                CellValue::from(term.hours.lecture),
                CellValue::from(term.hours.lab),
                CellValue::from(term.hours.practice),
                CellValue::from(term.hours.seminar),
                CellValue::from(term.hours.individual),
                prereqs,
            ]);
        }
    }

    table
}

/// Starter template: the header row plus three example rows showing a
/// plain course, a course with a prerequisite, and a continuation row for
/// a second term. The examples form a valid plan, so the template imports
/// cleanly as-is.
#[must_use]
pub fn template_table() -> SheetTable {
    let mut table = SheetTable::new(TEMPLATE_SHEET);
    table.headers = header_row();
    table.push_row(example_row(
        "CS101",
        "Introduction to Programming",
        "mandatory",
        3,
        1,
        [30, 15, 15, 0, 30],
        "",
    ));
    table.push_row(example_row(
        "CS201",
        "Data Structures",
        "mandatory",
        3,
        2,
        [30, 30, 0, 0, 30],
        "CS101",
    ));
    table.push_row(example_row("", "", "", 2, 3, [15, 15, 0, 0, 30], ""));
    table
}

fn example_row(
    code: &str,
    name: &str,
    kind: &str,
    credits: u32,
    semester: u32,
    hours: [u32; 5],
    prereqs: &str,
) -> Vec<CellValue> {
    let text = |s: &str| {
        if s.is_empty() {
            CellValue::Empty
        } else {
            CellValue::from(s)
        }
    };
    vec![
        text(code),
        text(name),
        text(kind),
        CellValue::from(credits),
        CellValue::from(semester),
        CellValue::from(hours[0]),
        CellValue::from(hours[1]),
        CellValue::from(hours[2]),
        CellValue::from(hours[3]),
        CellValue::from(hours[4]),
        text(prereqs),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Course, CourseKind, HourBreakdown, SemesterTerm};
    use crate::workbook::{plan_from_table, preview};

    fn term(semester: u8, credits: u32, individual: u32) -> SemesterTerm {
        SemesterTerm {
            semester,
            credits,
            hours: HourBreakdown {
                lecture: credits * 30 - individual,
                lab: 0,
                practice: 0,
                seminar: 0,
                individual,
            },
        }
    }

    fn two_course_plan() -> CoursePlan {
        CoursePlan::from_courses([
            Course {
                code: "CS101".to_string(),
                name: "Intro".to_string(),
                kind: CourseKind::Mandatory,
                semesters: vec![term(1, 3, 30)],
                prerequisites: vec![],
            },
            Course {
                code: "CS201".to_string(),
                name: "Data Structures".to_string(),
                kind: CourseKind::Mandatory,
                semesters: vec![term(2, 3, 30), term(3, 2, 30)],
                prerequisites: vec!["CS101".to_string()],
            },
        ])
    }

    #[test]
    fn one_row_per_term_with_first_row_course_cells() {
        let table = plan_to_table(&two_course_plan());
        assert_eq!(table.name, CURRICULUM_SHEET);
        assert_eq!(table.rows.len(), 3);
        // CS201's first row carries the course cells, its second does not
        assert_eq!(table.cell(1, 0), &CellValue::Text("CS201".to_string()));
        assert_eq!(table.cell(1, 10), &CellValue::Text("CS101".to_string()));
        assert_eq!(table.cell(2, 0), &CellValue::Empty);
        assert_eq!(table.cell(2, 1), &CellValue::Empty);
        assert_eq!(table.cell(2, 4), &CellValue::Number(3.0));
    }

    #[test]
    fn export_reimports_to_the_same_plan() {
        let plan = two_course_plan();
        let back = plan_from_table(&plan_to_table(&plan)).unwrap();
        assert_eq!(back.len(), plan.len());
        assert_eq!(back.get("CS201"), plan.get("CS201"));
    }

    #[test]
    fn template_imports_cleanly() {
        let preview = preview(&template_table()).unwrap();
        assert!(preview.is_clean());
        assert_eq!(preview.plan.len(), 2);
        let cs201 = preview.plan.get("CS201").unwrap();
        assert_eq!(cs201.semesters.len(), 2);
        assert_eq!(cs201.prerequisites, vec!["CS101".to_string()]);
    }
}
