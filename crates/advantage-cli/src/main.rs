//! Ad-Vantage CLI - HR records from the terminal
//!
//! Front end over the advantage client core: lists and mutates the
//! employee/project collections, manages the login session, and runs
//! stress batches against the gateway.

mod config;

use std::collections::BTreeSet;
use std::time::Duration;

use anyhow::{bail, Context, Result};
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use colored::Colorize;
use dialoguer::{Input, Password};

use advantage::{
    AuthService, Employee, EmployeeStatus, EmployeeStore, FileSessionStore, Gateway, LoadOutcome,
    MemorySessionStore, MirroredSessionStore, Mutation, NewEmployee, NewProject, Project,
    ProjectStatus, ProjectStore, StressConfig, StressRunner, UserPatch,
};

use config::Config;

#[derive(Parser)]
#[command(name = "advantage")]
#[command(about = "Ad-Vantage HRMS CLI - employees, projects, sessions", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Log in against the gateway and persist the session
    Login {
        /// Account email (will prompt if not provided)
        #[arg(short, long)]
        email: Option<String>,
    },

    /// End the session (gateway call is fire-and-forget)
    Logout,

    /// Show the current session
    Whoami,

    /// Update the current user's profile
    Profile {
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        department: Option<String>,
        #[arg(long)]
        avatar_url: Option<String>,
    },

    /// Employee operations
    Employee {
        #[command(subcommand)]
        action: EmployeeAction,
    },

    /// Project operations
    Project {
        #[command(subcommand)]
        action: ProjectAction,
    },

    /// Show the attendance sheet (seed dataset; no gateway endpoint yet)
    Attendance,

    /// Run a bounded-concurrency stress batch against the gateway
    Stress {
        /// Total requests in the batch
        #[arg(short, long, default_value = "50")]
        requests: usize,
        /// Max requests in flight (defaults from config)
        #[arg(short, long)]
        concurrency: Option<usize>,
        /// Seconds of work each heavy task performs
        #[arg(short, long, default_value = "2")]
        seconds: u64,
        /// Per-request timeout in seconds
        #[arg(short, long, default_value = "10")]
        timeout: u64,
    },

    /// Show or change the CLI configuration
    Config {
        /// Set the gateway base URL
        #[arg(long)]
        base_url: Option<String>,
    },
}

#[derive(Subcommand)]
enum EmployeeAction {
    /// List the employee collection
    List,
    /// Add an employee
    Add {
        #[arg(long)]
        name: String,
        #[arg(long)]
        email: String,
        #[arg(long)]
        role: String,
        #[arg(long)]
        department: String,
        /// Start date, YYYY-MM-DD
        #[arg(long)]
        start_date: NaiveDate,
        /// Active, on-leave, or terminated
        #[arg(long, default_value = "active")]
        status: EmployeeStatus,
    },
    /// Update an employee (unset fields keep their values)
    Update {
        id: String,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        email: Option<String>,
        #[arg(long)]
        role: Option<String>,
        #[arg(long)]
        department: Option<String>,
        #[arg(long)]
        start_date: Option<NaiveDate>,
        #[arg(long)]
        status: Option<EmployeeStatus>,
    },
    /// Remove an employee
    Remove { id: String },
    /// Replace the local collection with the seed dataset
    Reset,
}

#[derive(Subcommand)]
enum ProjectAction {
    /// List the project collection
    List,
    /// Add a project
    Add {
        #[arg(long)]
        name: String,
        #[arg(long)]
        client: String,
        /// Deadline, YYYY-MM-DD
        #[arg(long)]
        deadline: NaiveDate,
        /// not-started, in-progress, or completed
        #[arg(long, default_value = "not-started")]
        status: ProjectStatus,
    },
    /// Update a project (unset fields keep their values)
    Update {
        id: String,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        client: Option<String>,
        #[arg(long)]
        deadline: Option<NaiveDate>,
        #[arg(long)]
        status: Option<ProjectStatus>,
        /// Completion percentage, 0-100
        #[arg(long)]
        progress: Option<u8>,
    },
    /// Reassign a project's team
    Team {
        id: String,
        /// Employee ids, comma-separated (empty clears the team)
        #[arg(long, value_delimiter = ',')]
        members: Vec<String>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    let cli = Cli::parse();
    let config = Config::load()?;

    match cli.command {
        Commands::Login { email } => cmd_login(&config, email).await,
        Commands::Logout => cmd_logout(&config).await,
        Commands::Whoami => cmd_whoami(&config),
        Commands::Profile {
            name,
            department,
            avatar_url,
        } => cmd_profile(&config, name, department, avatar_url),
        Commands::Employee { action } => cmd_employee(&config, action).await,
        Commands::Project { action } => cmd_project(&config, action).await,
        Commands::Attendance => cmd_attendance(),
        Commands::Stress {
            requests,
            concurrency,
            seconds,
            timeout,
        } => cmd_stress(&config, requests, concurrency, seconds, timeout).await,
        Commands::Config { base_url } => cmd_config(config, base_url),
    }
}

// ============================================
// Wiring
// ============================================

fn gateway(config: &Config) -> Gateway {
    Gateway::new(&config.base_url)
}

/// Session service with the durable-file + in-memory mirror
fn session_service(config: &Config) -> Result<AuthService<Gateway>> {
    let durable = FileSessionStore::new().context("Could not place the session file")?;
    let store = MirroredSessionStore::new(Box::new(durable), Box::new(MemorySessionStore::new()));
    let service = AuthService::new(gateway(config), Box::new(store));
    service.init();
    Ok(service)
}

fn report_load(outcome: &LoadOutcome) {
    if let LoadOutcome::SeedFallback(err) = outcome {
        println!(
            "{} gateway unreachable ({}), showing seed data",
            "!".yellow(),
            err
        );
    }
}

fn report_mutation<T>(what: &str, outcome: &Mutation<T>) {
    match outcome {
        Mutation::Synced(_) => println!("{} {} synced", "✓".green(), what),
        Mutation::LocalOnly(_) => println!(
            "{} {} saved locally only - the gateway rejected the call",
            "!".yellow(),
            what
        ),
        Mutation::RolledBack(err) => {
            println!("{} {} failed, changes rolled back: {}", "✗".red(), what, err)
        }
        Mutation::Skipped => println!("{} no {} with that id", "!".yellow(), what),
    }
}

// ============================================
// Command Implementations
// ============================================

async fn cmd_login(config: &Config, email: Option<String>) -> Result<()> {
    let email = match email {
        Some(e) => e,
        None => Input::new()
            .with_prompt("Email")
            .interact_text()
            .context("Failed to read email")?,
    };
    let pass = Password::new()
        .with_prompt("Password")
        .interact()
        .context("Failed to read password")?;

    let service = session_service(config)?;
    match service.login(&email, &pass).await {
        Ok(user) => {
            println!("{} Logged in as {} ({})", "✓".green(), user.name.cyan(), user.role);
            Ok(())
        }
        Err(err) => bail!("Login failed: {}", err),
    }
}

async fn cmd_logout(config: &Config) -> Result<()> {
    let service = session_service(config)?;
    service.logout().await;
    println!("{} Session cleared", "✓".green());
    Ok(())
}

fn cmd_whoami(config: &Config) -> Result<()> {
    let service = session_service(config)?;
    match service.current() {
        Some(user) => {
            println!("{}", user.name.bold());
            println!("  {} {}", "email:".dimmed(), user.email);
            println!("  {} {}", "role:".dimmed(), user.role);
            println!("  {} {}", "department:".dimmed(), user.department);
        }
        None => println!("Not logged in. Run 'advantage login' first."),
    }
    Ok(())
}

fn cmd_profile(
    config: &Config,
    name: Option<String>,
    department: Option<String>,
    avatar_url: Option<String>,
) -> Result<()> {
    let service = session_service(config)?;
    let patch = UserPatch {
        name,
        department,
        avatar_url,
        ..UserPatch::default()
    };
    match service.update(patch) {
        Some(user) => {
            println!("{} Profile updated for {}", "✓".green(), user.name.cyan());
            Ok(())
        }
        None => bail!("Not logged in. Run 'advantage login' first."),
    }
}

async fn cmd_employee(config: &Config, action: EmployeeAction) -> Result<()> {
    let store = EmployeeStore::new(gateway(config));
    report_load(&store.load().await);

    match action {
        EmployeeAction::List => {
            let snapshot = store.snapshot();
            println!("{}", format!("Employees ({}):", snapshot.len()).bold());
            for employee in snapshot.iter() {
                print_employee(employee);
            }
        }

        EmployeeAction::Add {
            name,
            email,
            role,
            department,
            start_date,
            status,
        } => {
            let outcome = store
                .add(NewEmployee {
                    name,
                    email,
                    role,
                    department,
                    start_date,
                    status,
                })
                .await;
            report_mutation("employee", &outcome);
            if let Some(record) = outcome.record() {
                print_employee(record);
            }
        }

        EmployeeAction::Update {
            id,
            name,
            email,
            role,
            department,
            start_date,
            status,
        } => {
            let snapshot = store.snapshot();
            let Some(mut edited) = snapshot.iter().find(|e| e.id == id).cloned() else {
                bail!("No employee with id '{}'", id);
            };
            if let Some(name) = name {
                edited.name = name;
            }
            if let Some(email) = email {
                edited.email = email;
            }
            if let Some(role) = role {
                edited.role = role;
            }
            if let Some(department) = department {
                edited.department = department;
            }
            if let Some(start_date) = start_date {
                edited.start_date = start_date;
            }
            if let Some(status) = status {
                edited.status = status;
            }
            report_mutation("employee", &store.update(edited).await);
        }

        EmployeeAction::Remove { id } => {
            report_mutation("employee", &store.remove(&id).await);
        }

        EmployeeAction::Reset => {
            store.reset();
            println!("{} Collection reset to the seed dataset", "✓".green());
        }
    }

    Ok(())
}

async fn cmd_project(config: &Config, action: ProjectAction) -> Result<()> {
    let store = ProjectStore::new(gateway(config));
    report_load(&store.load().await);

    match action {
        ProjectAction::List => {
            let snapshot = store.snapshot();
            println!("{}", format!("Projects ({}):", snapshot.len()).bold());
            for project in snapshot.iter() {
                print_project(project);
            }
        }

        ProjectAction::Add {
            name,
            client,
            deadline,
            status,
        } => {
            let outcome = store
                .add(NewProject {
                    name,
                    client,
                    deadline,
                    status,
                })
                .await;
            report_mutation("project", &outcome);
            if let Some(record) = outcome.record() {
                print_project(record);
            }
        }

        ProjectAction::Update {
            id,
            name,
            client,
            deadline,
            status,
            progress,
        } => {
            let snapshot = store.snapshot();
            let Some(mut edited) = snapshot.iter().find(|p| p.id == id).cloned() else {
                bail!("No project with id '{}'", id);
            };
            if let Some(name) = name {
                edited.name = name;
            }
            if let Some(client) = client {
                edited.client = client;
            }
            if let Some(deadline) = deadline {
                edited.deadline = deadline;
            }
            if let Some(status) = status {
                edited.status = status;
            }
            if let Some(progress) = progress {
                if progress > 100 {
                    bail!("Progress must be between 0 and 100");
                }
                edited.progress = progress;
            }
            report_mutation("project", &store.update(edited).await);
        }

        ProjectAction::Team { id, members } => {
            let team: BTreeSet<String> =
                members.into_iter().filter(|m| !m.is_empty()).collect();
            report_mutation("team", &store.set_team(&id, team).await);
        }
    }

    Ok(())
}

fn cmd_attendance() -> Result<()> {
    let records = advantage::seed::attendance_records();
    println!("{}", format!("Attendance ({}):", records.len()).bold());
    for record in records {
        println!(
            "  {} {} {} {} - {} ({})",
            record.date,
            record.employee_name.cyan(),
            record.status,
            record.check_in.dimmed(),
            record.check_out.dimmed(),
            record.id.dimmed(),
        );
    }
    Ok(())
}

async fn cmd_stress(
    config: &Config,
    requests: usize,
    concurrency: Option<usize>,
    seconds: u64,
    timeout: u64,
) -> Result<()> {
    let stress_config = StressConfig {
        requests,
        concurrency: concurrency.unwrap_or(config.stress_concurrency),
        task_seconds: seconds,
        timeout: Duration::from_secs(timeout),
    };

    println!(
        "Firing {} requests ({} in flight) at {}/stress/heavy_task ...",
        stress_config.requests, stress_config.concurrency, config.base_url
    );

    let runner = StressRunner::new(&gateway(config));
    let report = runner.run(&stress_config).await;

    println!(
        "{} {} succeeded, {} failed, {} timed out in {:.2?}",
        if report.failed + report.timed_out == 0 {
            "✓".green()
        } else {
            "!".yellow()
        },
        report.succeeded,
        report.failed,
        report.timed_out,
        report.elapsed,
    );
    Ok(())
}

fn cmd_config(mut config: Config, base_url: Option<String>) -> Result<()> {
    if let Some(base_url) = base_url {
        config.base_url = base_url.trim_end_matches('/').to_string();
        config.save()?;
        println!("{} Config saved to {:?}", "✓".green(), Config::config_path()?);
    }

    println!("{}", "Configuration:".bold());
    println!("  {} {}", "base_url:".dimmed(), config.base_url);
    println!("  {} {}", "stress_concurrency:".dimmed(), config.stress_concurrency);
    Ok(())
}

// ============================================
// Rendering
// ============================================

fn print_employee(employee: &Employee) {
    println!(
        "  {} {} - {}, {} [{}] (since {})",
        employee.id.cyan(),
        employee.name.bold(),
        employee.role,
        employee.department,
        employee.status,
        employee.start_date,
    );
}

fn print_project(project: &Project) {
    let team: Vec<&str> = project
        .assigned_team_ids
        .iter()
        .map(String::as_str)
        .collect();
    println!(
        "  {} {} for {} [{}] {}% due {} team: {}",
        project.id.cyan(),
        project.name.bold(),
        project.client,
        project.status,
        project.progress,
        project.deadline,
        if team.is_empty() {
            "-".to_string()
        } else {
            team.join(", ")
        },
    );
}
