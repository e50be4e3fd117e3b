//! Seed command handler.
//!
//! Populates an empty database with demo departments, department heads,
//! and professors. Existing departments are skipped, never overwritten,
//! so the command is safe to re-run.

use anyhow::Result;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use crate::bootstrap::CliContext;
use crate::error::CliError;
use provost_core::NewDepartment;
use provost_core::services::{NewDepartmentHead, NewProfessorAccount};

/// Every seeded account gets this password.
const DEFAULT_PASSWORD: &str = "103203303A";

/// One head plus up to this many professors per department must fit in
/// the name pool.
const MAX_PROFESSORS_PER_DEPARTMENT: u32 = 11;

const DEPARTMENTS: [(&str, &str, &str); 4] = [
    (
        "CS",
        "Computer Science",
        "Department of Computer Science and Software Engineering",
    ),
    (
        "MATH",
        "Mathematics",
        "Department of Mathematics and Statistics",
    ),
    ("PHYS", "Physics", "Department of Physics and Astronomy"),
    ("ENG", "Engineering", "Department of Engineering Sciences"),
];

const HERO_NAMES: [&str; 50] = [
    "Tony Stark",
    "Steve Rogers",
    "Bruce Banner",
    "Thor Odinson",
    "Natasha Romanoff",
    "Clint Barton",
    "Peter Parker",
    "Stephen Strange",
    "T'Challa",
    "Carol Danvers",
    "Scott Lang",
    "Wanda Maximoff",
    "Vision",
    "Sam Wilson",
    "James Rhodes",
    "Bucky Barnes",
    "Peter Quill",
    "Matt Murdock",
    "Reed Richards",
    "Susan Storm",
    "Johnny Storm",
    "Ben Grimm",
    "Charles Xavier",
    "Jean Grey",
    "Scott Summers",
    "Ororo Munroe",
    "Logan Howlett",
    "Hank McCoy",
    "Warren Worthington",
    "Bobby Drake",
    "Bruce Wayne",
    "Clark Kent",
    "Diana Prince",
    "Barry Allen",
    "Hal Jordan",
    "Arthur Curry",
    "Oliver Queen",
    "Dick Grayson",
    "Victor Stone",
    "John Stewart",
    "Dinah Lance",
    "Kara Danvers",
    "John Constantine",
    "Zatanna Zatara",
    "Ray Palmer",
    "Carter Hall",
    "Shiera Hall",
    "Billy Batson",
    "Kent Nelson",
    "Michael Carter",
];

/// Execute the seed command.
///
/// # Arguments
///
/// * `ctx` - The CLI context providing access to `AppCore`
/// * `professors_per_department` - Fixed professor count instead of the
///   random 7 to 10
/// * `seed` - RNG seed for a reproducible dataset
///
/// # Errors
///
/// Returns an error if the requested count exceeds the name pool or a
/// create call fails.
pub async fn execute(
    ctx: &CliContext,
    professors_per_department: Option<u32>,
    seed: Option<u64>,
) -> Result<()> {
    if let Some(count) = professors_per_department {
        if count > MAX_PROFESSORS_PER_DEPARTMENT {
            return Err(CliError::Arguments(format!(
                "--professors-per-department must be at most {MAX_PROFESSORS_PER_DEPARTMENT}"
            ))
            .into());
        }
    }

    let mut rng = StdRng::seed_from_u64(seed.unwrap_or_else(rand::random));

    let mut names = HERO_NAMES.to_vec();
    names.shuffle(&mut rng);
    let mut names = names.into_iter();

    let mut departments_created = 0u32;
    let mut heads_created = 0u32;
    let mut professors_created = 0u32;

    println!("Creating departments and department heads...");

    for (code, title, description) in DEPARTMENTS {
        if ctx.app().directory().get_department(code).await.is_ok() {
            println!("Department {code} already exists, skipping...");
            continue;
        }

        ctx.app()
            .directory()
            .create_department(
                ctx.operator(),
                NewDepartment {
                    code: code.to_string(),
                    title: title.to_string(),
                    description: description.to_string(),
                },
            )
            .await?;
        departments_created += 1;

        let head_name = next_name(&mut names)?;
        create_head(ctx, head_name, code).await?;
        heads_created += 1;

        let professor_count =
            professors_per_department.unwrap_or_else(|| rng.random_range(7..=10));
        println!("Creating {professor_count} professors for {code}...");

        for _ in 0..professor_count {
            let name = next_name(&mut names)?;
            create_professor(ctx, &mut rng, name, code).await?;
            professors_created += 1;
        }
    }

    println!("Successfully created dummy data:");
    println!("- Departments: {departments_created}");
    println!("- Department Heads: {heads_created}");
    println!("- Professors: {professors_created}");
    println!("All seeded accounts use password: {DEFAULT_PASSWORD}");

    Ok(())
}

fn next_name<'a>(names: &mut impl Iterator<Item = &'a str>) -> Result<&'a str> {
    names.next().ok_or_else(|| {
        CliError::Core("Ran out of unique names! Add more hero names to the list.".to_string())
            .into()
    })
}

async fn create_head(ctx: &CliContext, full_name: &str, department_code: &str) -> Result<()> {
    let username = username_for(full_name);
    let (first_name, last_name) = split_name(full_name);

    ctx.app()
        .directory()
        .create_department_head(
            ctx.operator(),
            NewDepartmentHead {
                email: email_for(&username),
                username,
                password: DEFAULT_PASSWORD.to_string(),
                first_name,
                last_name,
                department_code: department_code.to_string(),
            },
        )
        .await?;
    Ok(())
}

async fn create_professor(
    ctx: &CliContext,
    rng: &mut StdRng,
    full_name: &str,
    department_code: &str,
) -> Result<()> {
    let username = username_for(full_name);
    let (first_name, last_name) = split_name(full_name);

    ctx.app()
        .directory()
        .create_professor(
            ctx.operator(),
            NewProfessorAccount {
                email: email_for(&username),
                username,
                password: DEFAULT_PASSWORD.to_string(),
                first_name,
                last_name,
                department_code: department_code.to_string(),
                phone_number: format!("+1-555-{}", rng.random_range(1_000_000..=9_999_999)),
                years_of_experience: rng.random_range(0..=10),
                has_phd: rng.random_bool(0.5),
            },
        )
        .await?;
    Ok(())
}

/// Lowercase the full name, join the words with dots, and drop anything
/// that is not alphanumeric or a dot ("T'Challa" becomes "tchalla").
fn username_for(full_name: &str) -> String {
    full_name
        .to_lowercase()
        .replace(' ', ".")
        .chars()
        .filter(|c| c.is_alphanumeric() || *c == '.')
        .collect()
}

fn email_for(username: &str) -> String {
    format!("{username}@namdtu.edu")
}

/// First word is the first name, the rest is the last name.
fn split_name(full_name: &str) -> (String, String) {
    match full_name.split_once(' ') {
        Some((first, rest)) => (first.to_string(), rest.to_string()),
        None => (full_name.to_string(), String::new()),
    }
}
