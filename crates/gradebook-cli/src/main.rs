use clap::{Parser, Subcommand};
use dialoguer::{Input, Password};
use dotenvy::dotenv;
use gradebook_cli::seeder::{self, DEFAULT_SEED_PASSWORD, SeedConfig};
use gradebook_cli::teachers::create_teacher;

#[derive(Parser)]
#[command(name = "gradebook-cli")]
#[command(about = "Gradebook CLI - Administrative tools for the Gradebook API", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create a teacher account
    CreateTeacher {
        /// Full name of the teacher
        #[arg(short = 'n', long)]
        name: Option<String>,

        /// Department the teacher belongs to
        #[arg(short = 'd', long)]
        department: Option<String>,

        /// Email address
        #[arg(short = 'e', long)]
        email: Option<String>,

        /// Password (will be prompted securely if not provided)
        #[arg(short = 'p', long)]
        password: Option<String>,
    },
    /// Seed the database with fake teachers, courses, and students
    Seed {
        /// Number of teachers to create
        #[arg(short = 't', long, default_value = "5")]
        teachers: usize,

        /// Number of courses per teacher
        #[arg(short = 'c', long, default_value = "3")]
        courses: usize,

        /// Number of students per teacher
        #[arg(short = 's', long, default_value = "12")]
        students: usize,

        /// Password shared by every seeded teacher
        #[arg(long, default_value = DEFAULT_SEED_PASSWORD)]
        password: String,
    },
    /// Clear all seeded data (teachers with @example.com addresses)
    ClearSeed,
}

#[tokio::main]
async fn main() {
    dotenv().ok();

    let database_url = std::env::var("DATABASE_URL").expect("DATABASE_URL must be set");

    let pool = sqlx::postgres::PgPoolOptions::new()
        .max_connections(5)
        .connect(&database_url)
        .await
        .expect("Failed to connect to database");

    let cli = Cli::parse();

    match cli.command {
        Commands::CreateTeacher {
            name,
            department,
            email,
            password,
        } => handle_create_teacher(&pool, name, department, email, password).await,
        Commands::Seed {
            teachers,
            courses,
            students,
            password,
        } => handle_seed(&pool, teachers, courses, students, password).await,
        Commands::ClearSeed => handle_clear_seed(&pool).await,
    }
}

async fn handle_create_teacher(
    pool: &sqlx::postgres::PgPool,
    name: Option<String>,
    department: Option<String>,
    email: Option<String>,
    password: Option<String>,
) {
    let name = name.unwrap_or_else(|| {
        Input::new()
            .with_prompt("Name")
            .interact_text()
            .expect("Failed to read name")
    });

    let department = department.unwrap_or_else(|| {
        Input::new()
            .with_prompt("Department")
            .interact_text()
            .expect("Failed to read department")
    });

    let email = email.unwrap_or_else(|| {
        Input::new()
            .with_prompt("Email address")
            .validate_with(|input: &String| -> Result<(), &str> {
                if input.contains('@') {
                    Ok(())
                } else {
                    Err("email is invalid")
                }
            })
            .interact_text()
            .expect("Failed to read email")
    });

    let password = password.unwrap_or_else(|| {
        Password::new()
            .with_prompt("Password")
            .with_confirmation("Confirm password", "Passwords don't match")
            .interact()
            .expect("Failed to read password")
    });

    match create_teacher(pool, &name, &department, &email, &password).await {
        Ok(id) => {
            println!("\n✅ Teacher created successfully!");
            println!("   Id: {}", id);
            println!("   Name: {}", name);
            println!("   Department: {}", department);
            println!("   Email: {}", email);
        }
        Err(e) => {
            eprintln!("\n❌ Error creating teacher: {}", e);
            std::process::exit(1);
        }
    }
}

async fn handle_seed(
    pool: &sqlx::postgres::PgPool,
    teachers: usize,
    courses: usize,
    students: usize,
    password: String,
) {
    let config = SeedConfig::new(teachers)
        .with_courses(courses)
        .with_students(students)
        .with_password(password);

    if let Err(e) = seeder::seed_all(pool, config).await {
        eprintln!("\n❌ Error seeding database: {}", e);
        std::process::exit(1);
    }
}

async fn handle_clear_seed(pool: &sqlx::postgres::PgPool) {
    if let Err(e) = seeder::clear_all(pool).await {
        eprintln!("\n❌ Error clearing seeded data: {}", e);
        std::process::exit(1);
    }
}
