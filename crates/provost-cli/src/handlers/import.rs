//! Import command handler.
//!
//! Imports curriculum course plans from .xlsx workbooks. Each file is
//! previewed first; warnings block the commit unless `--force` is given.
//! A failing file never aborts the batch, it is reported and skipped.

use anyhow::Result;
use indicatif::{ProgressBar, ProgressStyle};
use std::path::Path;

use crate::bootstrap::CliContext;
use crate::error::CliError;
use provost_core::utils::validation;
use provost_core::workbook::ImportPreview;
use provost_core::{CoreError, CoursePlan, DegreeKind, NewCurriculum, RepositoryError};

/// Arguments for the import command.
#[derive(Debug)]
pub struct ImportArgs {
    /// Workbook files to import.
    pub files: Vec<String>,
    /// Show parsed courses and warnings without writing anything.
    pub preview: bool,
    /// Commit even when the preview carries warnings.
    pub force: bool,
    /// Department code used when the target curriculum must be created.
    pub department: Option<String>,
    /// Explicit target curriculum code, instead of the filename stem.
    pub curriculum: Option<String>,
}

/// Execute the import command.
///
/// # Errors
///
/// Returns an error if the argument combination is invalid or if any
/// file failed to import.
pub async fn execute(ctx: &CliContext, args: ImportArgs) -> Result<()> {
    if args.curriculum.is_some() && args.files.len() > 1 {
        return Err(
            CliError::Arguments("--curriculum targets one curriculum; pass one file".to_string())
                .into(),
        );
    }

    let bar = progress_bar(args.files.len());
    let mut failed = 0usize;

    for file in &args.files {
        if !process_file(ctx, &args, file, bar.as_ref()).await {
            failed += 1;
        }
        if let Some(bar) = &bar {
            bar.inc(1);
        }
    }

    if let Some(bar) = &bar {
        bar.finish_and_clear();
    }

    if failed > 0 {
        return Err(CliError::Core(format!(
            "{failed} of {} file(s) failed to import",
            args.files.len()
        ))
        .into());
    }
    Ok(())
}

/// Process a single workbook file. Returns whether the file succeeded.
async fn process_file(
    ctx: &CliContext,
    args: &ImportArgs,
    file: &str,
    bar: Option<&ProgressBar>,
) -> bool {
    if !Path::new(file).exists() {
        complain(bar, &format!("File not found: {file}"));
        return false;
    }

    say(bar, &format!("Processing {file}..."));

    let preview = match validation::validate_and_preview(ctx.codec().as_ref(), file) {
        Ok(preview) => preview,
        Err(err) => {
            complain(bar, &format!("Error processing {file}: {err}"));
            return false;
        }
    };

    if args.preview {
        print_preview(bar, &preview);
        return true;
    }

    if !preview.warnings.is_empty() && !args.force {
        say(bar, "");
        say(bar, "Warnings found:");
        for warning in &preview.warnings {
            say(bar, &format!("  - {warning}"));
        }
        say(bar, "");
        say(bar, "Use --force to import anyway, or --preview to see details");
        return false;
    }

    let code = match &args.curriculum {
        Some(code) => code.clone(),
        None => stem_of(file),
    };

    match ctx
        .app()
        .curricula()
        .import_commit(ctx.operator(), &code, preview.plan.clone())
        .await
    {
        Ok(_) => {
            say(bar, &format!("Updated curriculum {code} successfully"));
            true
        }
        Err(CoreError::Repository(RepositoryError::NotFound(_))) => {
            create_missing(ctx, args, file, &code, preview.plan, bar).await
        }
        Err(err) => {
            print_commit_error(bar, file, &err);
            false
        }
    }
}

/// Create the target curriculum when the commit found nothing to update.
async fn create_missing(
    ctx: &CliContext,
    args: &ImportArgs,
    file: &str,
    code: &str,
    plan: CoursePlan,
    bar: Option<&ProgressBar>,
) -> bool {
    let Some(department_code) = args.department.as_deref() else {
        complain(
            bar,
            &format!("Curriculum {code} does not exist. Pass --department CODE to create it."),
        );
        return false;
    };

    let department = match ctx.app().directory().get_department(department_code).await {
        Ok(department) => department,
        Err(err) => {
            complain(bar, &format!("Error processing {file}: {err}"));
            return false;
        }
    };

    let new_curriculum = NewCurriculum {
        curriculum_code: code.to_string(),
        major_code: code.to_string(),
        classification: String::new(),
        degree: DegreeKind::Bachelors,
        total_credits: DegreeKind::Bachelors.min_credits(),
        department_id: department.id,
        plan,
    };

    match ctx
        .app()
        .curricula()
        .create(ctx.operator(), new_curriculum)
        .await
    {
        Ok(_) => {
            say(bar, &format!("Created curriculum {code} successfully"));
            true
        }
        Err(err) => {
            print_commit_error(bar, file, &err);
            false
        }
    }
}

fn print_preview(bar: Option<&ProgressBar>, preview: &ImportPreview) {
    if !preview.warnings.is_empty() {
        say(bar, "");
        say(bar, "Warnings:");
        for warning in &preview.warnings {
            say(bar, &format!("  - {warning}"));
        }
    }

    say(bar, "");
    say(bar, "Preview of parsed data:");
    for course in preview.plan.courses() {
        say(bar, "");
        say(bar, &format!("{}:", course.code));
        say(bar, &format!("  Name: {}", course.name));
        say(bar, &format!("  Type: {}", course.kind));
        say(bar, &format!("  Semesters: {}", course.semesters.len()));
    }
}

fn print_commit_error(bar: Option<&ProgressBar>, file: &str, err: &CoreError) {
    match err {
        CoreError::Validation(msg) => {
            complain(bar, &format!("Validation error in {file}: {msg}"));
        }
        CoreError::Plan(_) | CoreError::Curriculum(_) => {
            complain(bar, &format!("Validation error in {file}: {err}"));
        }
        _ => complain(bar, &format!("Error processing {file}: {err}")),
    }
}

/// Default target curriculum code: the filename without its extension.
fn stem_of(file: &str) -> String {
    Path::new(file)
        .file_stem()
        .map_or_else(|| file.to_string(), |s| s.to_string_lossy().into_owned())
}

fn progress_bar(total: usize) -> Option<ProgressBar> {
    if total <= 1 {
        return None;
    }
    let bar = ProgressBar::new(total as u64);
    bar.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} files")
            .unwrap()
            .progress_chars("█▓░"),
    );
    Some(bar)
}

fn say(bar: Option<&ProgressBar>, msg: &str) {
    match bar {
        Some(bar) => bar.println(msg),
        None => println!("{msg}"),
    }
}

fn complain(bar: Option<&ProgressBar>, msg: &str) {
    match bar {
        Some(bar) => bar.println(msg),
        None => eprintln!("{msg}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bootstrap::bootstrap_with;
    use provost_core::{NewDepartment, NoopWorkbookCodec};
    use provost_db::TestDb;
    use std::fs::File;
    use std::sync::Arc;
    use tempfile::tempdir;

    fn import_args(files: Vec<String>) -> ImportArgs {
        ImportArgs {
            files,
            preview: false,
            force: false,
            department: None,
            curriculum: None,
        }
    }

    #[test]
    fn stem_of_strips_the_extension() {
        assert_eq!(stem_of("plans/60610800.xlsx"), "60610800");
        assert_eq!(stem_of("60610800.xlsx"), "60610800");
    }

    #[test]
    fn single_file_runs_without_a_bar() {
        assert!(progress_bar(1).is_none());
        assert!(progress_bar(3).is_some());
    }

    #[tokio::test]
    async fn missing_file_fails_the_batch() {
        let db = TestDb::new().await.unwrap();
        let ctx = bootstrap_with(db.repos(), Arc::new(NoopWorkbookCodec));

        let args = import_args(vec!["/nonexistent/60610800.xlsx".to_string()]);
        assert!(execute(&ctx, args).await.is_err());
    }

    #[tokio::test]
    async fn commit_without_a_target_requires_department() {
        let db = TestDb::new().await.unwrap();
        let ctx = bootstrap_with(db.repos(), Arc::new(NoopWorkbookCodec));

        let dir = tempdir().unwrap();
        let file = dir.path().join("60610800.xlsx");
        File::create(&file).unwrap();

        let args = import_args(vec![file.to_string_lossy().into_owned()]);
        assert!(execute(&ctx, args).await.is_err());
    }

    #[tokio::test]
    async fn commit_creates_the_curriculum_when_department_is_given() {
        let db = TestDb::new().await.unwrap();
        let ctx = bootstrap_with(db.repos(), Arc::new(NoopWorkbookCodec));
        ctx.app()
            .directory()
            .create_department(
                ctx.operator(),
                NewDepartment {
                    code: "CS".to_string(),
                    title: "Computer Science".to_string(),
                    description: String::new(),
                },
            )
            .await
            .unwrap();

        let dir = tempdir().unwrap();
        let file = dir.path().join("60610800.xlsx");
        File::create(&file).unwrap();

        let mut args = import_args(vec![file.to_string_lossy().into_owned()]);
        args.department = Some("CS".to_string());
        execute(&ctx, args).await.unwrap();

        let created = ctx.app().curricula().get("60610800").await.unwrap();
        assert_eq!(created.curriculum_code, "60610800");
        assert!(created.plan.is_empty());
    }

    #[tokio::test]
    async fn curriculum_override_rejects_multiple_files() {
        let db = TestDb::new().await.unwrap();
        let ctx = bootstrap_with(db.repos(), Arc::new(NoopWorkbookCodec));

        let mut args = import_args(vec!["a.xlsx".to_string(), "b.xlsx".to_string()]);
        args.curriculum = Some("60610800".to_string());
        assert!(execute(&ctx, args).await.is_err());
    }
}
