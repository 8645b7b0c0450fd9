//! Hum Studios CLI
//!
//! Command-line client for a running Hum Studios server:
//! - List employees
//! - Show one employee
//! - Check status
//! - Generate a config file

use anyhow::{bail, Context};
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use humstudios::api::dto::{EmployeeListResponse, HealthResponse};
use humstudios::api::error::ErrorResponse;
use humstudios::employee::Employee;

#[derive(Parser)]
#[command(name = "humstudios-cli")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Query the Hum Studios employee directory")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Server URL
    #[arg(long, default_value = "http://localhost:3000", global = true)]
    pub api_url: String,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = Format::Table, global = true)]
    pub format: Format,
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Format {
    Table,
    Json,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List all employees
    Employees,

    /// Show one employee
    Employee {
        /// Employee document id
        id: String,
    },

    /// Show server status
    Status,

    /// Generate default config file
    Config {
        /// Output path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let client = reqwest::Client::new();

    match cli.command {
        Commands::Employees => {
            let response = client
                .get(endpoint(&cli.api_url, "/api/v1/employees"))
                .send()
                .await
                .with_context(|| connect_hint(&cli.api_url))?;

            if !response.status().is_success() {
                return Err(api_error(response).await);
            }

            let list: EmployeeListResponse = response.json().await?;

            if cli.format == Format::Json {
                println!("{}", serde_json::to_string_pretty(&list)?);
            } else if list.employees.is_empty() {
                println!("No employees found");
            } else {
                println!(
                    "{:<22} {:<24} {:<30} {:<16} {}",
                    "ID", "Name", "Email", "Department", "Position"
                );
                println!("{}", "-".repeat(108));

                for employee in &list.employees {
                    println!(
                        "{:<22} {:<24} {:<30} {:<16} {}",
                        employee.id,
                        text(&employee.name),
                        text(&employee.email),
                        text(&employee.department),
                        text(&employee.position)
                    );
                }

                println!();
                println!("{} employee(s)", list.total);
            }
        }

        Commands::Employee { id } => {
            let response = client
                .get(endpoint(
                    &cli.api_url,
                    &format!("/api/v1/employees/{}", urlencoding::encode(&id)),
                ))
                .send()
                .await
                .with_context(|| connect_hint(&cli.api_url))?;

            if !response.status().is_success() {
                return Err(api_error(response).await);
            }

            let employee: Employee = response.json().await?;

            if cli.format == Format::Json {
                println!("{}", serde_json::to_string_pretty(&employee)?);
            } else {
                print_employee(&employee);
            }
        }

        Commands::Status => {
            let response = client
                .get(endpoint(&cli.api_url, "/health"))
                .send()
                .await
                .with_context(|| connect_hint(&cli.api_url))?;

            if !response.status().is_success() {
                bail!("Server returned error: {}", response.status());
            }

            let health: HealthResponse = response.json().await?;

            if cli.format == Format::Json {
                println!("{}", serde_json::to_string_pretty(&health)?);
            } else {
                println!("Hum Studios v{}", health.version);
                println!();
                println!("Status: {}", health.status);
                println!("Store:  {} ({})", health.store, health.backend);
                println!();
                println!("Uptime: {}", format_duration(health.uptime_seconds));
            }
        }

        Commands::Config { output } => {
            let config = humstudios::config::generate_default_config();

            match output {
                Some(path) => {
                    // Create parent directory if needed
                    if let Some(parent) = path.parent() {
                        std::fs::create_dir_all(parent)?;
                    }
                    std::fs::write(&path, &config)
                        .with_context(|| format!("Failed to write {:?}", path))?;
                    println!("Config written to {:?}", path);
                }
                None => {
                    print!("{}", config);
                }
            }
        }
    }

    Ok(())
}

/// Join the server URL and an absolute path
fn endpoint(api_url: &str, path: &str) -> String {
    format!("{}{}", api_url.trim_end_matches('/'), path)
}

fn connect_hint(api_url: &str) -> String {
    format!(
        "Cannot connect to Hum Studios at {}. Start the server with: cargo run --bin humstudios",
        api_url
    )
}

/// Turn a non-success response into an error, using the JSON error body when present
async fn api_error(response: reqwest::Response) -> anyhow::Error {
    let status = response.status();
    let text = response.text().await.unwrap_or_default();

    match serde_json::from_str::<ErrorResponse>(&text) {
        Ok(body) => anyhow::anyhow!(
            "{} ({}): {} [request {}]",
            body.error.code,
            status,
            body.error.message,
            body.request_id
        ),
        Err(_) => anyhow::anyhow!("Request failed ({}): {}", status, text),
    }
}

fn text(value: &Option<String>) -> &str {
    value.as_deref().unwrap_or("-")
}

fn print_employee(employee: &Employee) {
    let rows = [
        ("Name", &employee.name),
        ("Email", &employee.email),
        ("Phone", &employee.phone),
        ("Department", &employee.department),
        ("Position", &employee.position),
        ("Reporter", &employee.reporter),
        ("Address", &employee.address),
        ("Blood Group", &employee.blood),
        ("Image", &employee.image),
    ];

    println!("Employee {}", employee.id);
    println!("{}", "-".repeat(40));
    for (label, value) in rows {
        println!("{:<12} {}", label, text(value));
    }
}

fn format_duration(seconds: u64) -> String {
    if seconds < 60 {
        format!("{}s", seconds)
    } else if seconds < 3600 {
        format!("{}m {}s", seconds / 60, seconds % 60)
    } else if seconds < 86400 {
        format!("{}h {}m", seconds / 3600, (seconds % 3600) / 60)
    } else {
        format!("{}d {}h", seconds / 86400, (seconds % 86400) / 3600)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint() {
        assert_eq!(
            endpoint("http://localhost:3000/", "/api/v1/employees"),
            "http://localhost:3000/api/v1/employees"
        );
        assert_eq!(endpoint("http://hs", "/health"), "http://hs/health");
    }

    #[test]
    fn test_employee_subcommand_reads_through_server() {
        let cli = Cli::parse_from(["humstudios-cli", "--api-url", "http://hs:8080", "employee", "a b"]);

        assert_eq!(cli.api_url, "http://hs:8080");
        match cli.command {
            Commands::Employee { id } => assert_eq!(id, "a b"),
            _ => panic!("expected employee command"),
        }
    }

    #[test]
    fn test_format_duration() {
        assert_eq!(format_duration(42), "42s");
        assert_eq!(format_duration(3_700), "1h 1m");
        assert_eq!(format_duration(90_000), "1d 1h");
    }
}
