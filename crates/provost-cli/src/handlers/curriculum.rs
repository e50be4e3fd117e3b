//! Curriculum command handlers.
//!
//! Covers the `curriculum` subcommands: list, show, create, delete.

use anyhow::Result;

use crate::bootstrap::CliContext;
use crate::curriculum_commands::CurriculumCommand;
use crate::error::CliError;
use crate::presentation::{
    CurriculumSummaryOpts, display_curriculum_summary, print_separator, truncate_string,
};
use crate::utils::input;
use provost_core::{CoreError, CoursePlan, DegreeKind, NewCurriculum, RepositoryError};

/// Execute a curriculum subcommand.
///
/// # Errors
///
/// Returns an error if the underlying service call fails.
pub async fn execute(ctx: &CliContext, command: CurriculumCommand) -> Result<()> {
    match command {
        CurriculumCommand::List => list(ctx).await,
        CurriculumCommand::Show { code } => show(ctx, &code).await,
        CurriculumCommand::Create {
            code,
            major,
            classification,
            degree,
            credits,
            department,
        } => create(ctx, code, major, classification, &degree, credits, &department).await,
        CurriculumCommand::Delete { code, force } => delete(ctx, &code, force).await,
    }
}

async fn list(ctx: &CliContext) -> Result<()> {
    let curricula = ctx.app().curricula().list().await?;

    if curricula.is_empty() {
        println!("No curricula found in the database.");
        println!("Use 'provost import <file.xlsx> --department <CODE>' to add one.");
        return Ok(());
    }

    println!("Found {} curriculum(s) in the database:\n", curricula.len());

    println!(
        "{:<4} {:<10} {:<10} {:<10} {:<8} {:<8} Classification",
        "ID", "Code", "Major", "Degree", "Credits", "Courses"
    );
    print_separator(80);

    for curriculum in curricula {
        println!(
            "{:<4} {:<10} {:<10} {:<10} {:<8} {:<8} {}",
            curriculum.id,
            truncate_string(&curriculum.curriculum_code, 9),
            truncate_string(&curriculum.major_code, 9),
            curriculum.degree,
            curriculum.total_credits,
            curriculum.plan.len(),
            truncate_string(&curriculum.classification, 30),
        );
    }

    Ok(())
}

async fn show(ctx: &CliContext, code: &str) -> Result<()> {
    let curriculum = ctx.app().curricula().get(code).await?;

    display_curriculum_summary(
        &curriculum,
        CurriculumSummaryOpts {
            title: None,
            show_id: true,
            show_courses: true,
            show_timestamps: true,
        },
    );

    if curriculum.plan.is_empty() {
        return Ok(());
    }

    println!();
    println!(
        "{:<10} {:<32} {:<10} {:<8} Semesters",
        "Code", "Name", "Type", "Credits"
    );
    print_separator(76);

    for course in curriculum.plan.courses() {
        let semesters = course
            .semesters
            .iter()
            .map(|term| term.semester.to_string())
            .collect::<Vec<_>>()
            .join(", ");
        println!(
            "{:<10} {:<32} {:<10} {:<8} {}",
            course.code,
            truncate_string(&course.name, 31),
            course.kind,
            course.total_credits(),
            semesters,
        );
    }

    Ok(())
}

async fn create(
    ctx: &CliContext,
    code: String,
    major: String,
    classification: String,
    degree: &str,
    credits: u32,
    department: &str,
) -> Result<()> {
    let Some(degree) = DegreeKind::parse(degree) else {
        return Err(CliError::Arguments(format!("Unknown degree type: {degree}")).into());
    };

    let department = ctx.app().directory().get_department(department).await?;

    let curriculum = ctx
        .app()
        .curricula()
        .create(
            ctx.operator(),
            NewCurriculum {
                curriculum_code: code,
                major_code: major,
                classification,
                degree,
                total_credits: credits,
                department_id: department.id,
                plan: CoursePlan::new(),
            },
        )
        .await?;

    display_curriculum_summary(
        &curriculum,
        CurriculumSummaryOpts::with_title("Curriculum created:"),
    );
    Ok(())
}

async fn delete(ctx: &CliContext, code: &str, force: bool) -> Result<()> {
    let curriculum = match ctx.app().curricula().get(code).await {
        Ok(curriculum) => curriculum,
        Err(CoreError::Repository(RepositoryError::NotFound(_))) => {
            println!("No curriculum found matching: '{code}'");
            println!("Use 'provost curriculum list' to see available curricula.");
            return Ok(());
        }
        Err(err) => return Err(err.into()),
    };

    if !force {
        display_curriculum_summary(&curriculum, CurriculumSummaryOpts::for_removal());
        println!();

        let confirm = input::prompt_confirmation(
            "Are you sure you want to delete this curriculum and its course plan?",
        )?;
        if !confirm {
            println!("Delete operation cancelled.");
            return Ok(());
        }
    }

    ctx.app().curricula().delete(ctx.operator(), code).await?;

    println!(
        "✅ Curriculum '{}' (ID {}) successfully deleted.",
        curriculum.curriculum_code, curriculum.id
    );

    Ok(())
}
