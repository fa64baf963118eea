//! Command-line front end for the clinic data layer.
//!
//! Lets an operator look up and edit owners, pets, visits and vets without
//! writing SQL.
//!
//! # Usage
//!
//! ```bash
//! # Owners whose last name starts with "Davis"
//! cargo run -- owners find Davis
//!
//! # One owner with pets and visits
//! cargo run -- owners show 1
//!
//! # Register a pet (interactive prompts fill in anything omitted)
//! cargo run -- pets add --owner 6 --name bowser --type dog --birth-date 2020-05-01
//!
//! # Record a visit dated today
//! cargo run -- visits add --pet 7 --description "annual checkup"
//!
//! # Try things out without a database
//! cargo run -- --memory vets list
//! ```
//!
//! # Environment Variables
//!
//! - `DATABASE_URL` (required unless `--memory`): PostgreSQL connection string
//! - `LOG_FORMAT`, `RUST_LOG`: see [`petclinic::config`]

use petclinic::bootstrap;
use petclinic::config::{self, Config};
use petclinic::domain::entities::{Owner, Pet, Vet, Visit};
use petclinic::infrastructure::memory::InMemoryClinicStore;
use petclinic::ClinicService;

use anyhow::{Context, Result};
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::{Confirm, Input};
use serde::Serialize;
use std::sync::Arc;

/// CLI tool for the clinic database.
#[derive(Parser)]
#[command(name = "petclinic")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Run against a seeded in-memory store instead of PostgreSQL
    #[arg(long, global = true)]
    memory: bool,

    /// Print results as JSON
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Top-level command groups.
#[derive(Subcommand)]
enum Commands {
    /// Look up and edit owners
    Owners {
        #[command(subcommand)]
        action: OwnerAction,
    },

    /// Look up and edit pets
    Pets {
        #[command(subcommand)]
        action: PetAction,
    },

    /// List and record visits
    Visits {
        #[command(subcommand)]
        action: VisitAction,
    },

    /// Show the vet roster
    Vets {
        #[command(subcommand)]
        action: VetAction,
    },

    /// Database operations
    Db {
        #[command(subcommand)]
        action: DbAction,
    },
}

#[derive(Subcommand)]
enum OwnerAction {
    /// Find owners by last name prefix (empty prefix lists everyone)
    Find {
        #[arg(default_value = "")]
        last_name: String,
    },

    /// Show one owner with pets and visits
    Show { id: i64 },

    /// Register a new owner
    Add {
        #[arg(long)]
        first_name: Option<String>,
        #[arg(long)]
        last_name: Option<String>,
        #[arg(long)]
        address: Option<String>,
        #[arg(long)]
        city: Option<String>,
        #[arg(long)]
        telephone: Option<String>,

        /// Skip confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },

    /// Change an owner's details
    Update {
        id: i64,
        #[arg(long)]
        first_name: Option<String>,
        #[arg(long)]
        last_name: Option<String>,
        #[arg(long)]
        address: Option<String>,
        #[arg(long)]
        city: Option<String>,
        #[arg(long)]
        telephone: Option<String>,
    },
}

#[derive(Subcommand)]
enum PetAction {
    /// Show one pet with its visits
    Show { id: i64 },

    /// List pet types
    Types,

    /// Add a pet to an owner
    Add {
        #[arg(long)]
        owner: i64,
        #[arg(long)]
        name: Option<String>,
        /// Pet type name, e.g. "cat"
        #[arg(long = "type")]
        pet_type: Option<String>,
        /// Birth date as YYYY-MM-DD
        #[arg(long)]
        birth_date: Option<NaiveDate>,
    },

    /// Rename a pet
    Rename { id: i64, name: String },
}

#[derive(Subcommand)]
enum VisitAction {
    /// List visits of a pet
    List { pet_id: i64 },

    /// Record a visit for a pet
    Add {
        #[arg(long)]
        pet: i64,
        #[arg(long)]
        description: Option<String>,
        /// Visit date as YYYY-MM-DD (default: today)
        #[arg(long)]
        date: Option<NaiveDate>,
    },
}

#[derive(Subcommand)]
enum VetAction {
    /// List all vets with specialties
    List,
}

/// Database operation subcommands.
#[derive(Subcommand)]
enum DbAction {
    /// Check database connection
    Check,

    /// Apply pending migrations
    Migrate,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let config = if cli.memory {
        let config = Config::ambient();
        config.validate()?;
        config
    } else {
        config::load_from_env()?
    };
    bootstrap::init_tracing(&config);
    config.print_summary();

    if let Commands::Db { action } = &cli.command {
        anyhow::ensure!(!cli.memory, "db commands need PostgreSQL; drop --memory");
        return handle_db_action(action, &config).await;
    }

    let service = if cli.memory {
        bootstrap::memory_service(Arc::new(InMemoryClinicStore::with_seed_data()))
    } else {
        bootstrap::postgres_service(bootstrap::connect(&config).await?)
    };

    let out = Output { json: cli.json };

    match cli.command {
        Commands::Owners { action } => handle_owner_action(action, &service, &out).await?,
        Commands::Pets { action } => handle_pet_action(action, &service, &out).await?,
        Commands::Visits { action } => handle_visit_action(action, &service, &out).await?,
        Commands::Vets { action: VetAction::List } => {
            let vets = service.find_vets().await.context("Failed to list vets")?;
            out.vets(&vets)?;
        }
        Commands::Db { .. } => unreachable!("db commands return before the service is built"),
    }

    Ok(())
}

/// Dispatches owner commands.
async fn handle_owner_action(
    action: OwnerAction,
    service: &ClinicService,
    out: &Output,
) -> Result<()> {
    match action {
        OwnerAction::Find { last_name } => {
            let owners = service
                .find_owners_by_last_name(&last_name)
                .await
                .context("Failed to search owners")?;
            out.owners(&owners)?;
        }
        OwnerAction::Show { id } => {
            let owner = service.find_owner(id).await.context("Failed to load owner")?;
            out.owner(&owner)?;
        }
        OwnerAction::Add {
            first_name,
            last_name,
            address,
            city,
            telephone,
            yes,
        } => {
            let owner = Owner::new(
                prompt_if_missing(first_name, "First name")?,
                prompt_if_missing(last_name, "Last name")?,
                prompt_if_missing(address, "Address")?,
                prompt_if_missing(city, "City")?,
                prompt_if_missing(telephone, "Telephone")?,
            );

            if !yes && !out.json {
                println!();
                println!(
                    "  {} {} - {}, {} ({})",
                    owner.first_name.cyan(),
                    owner.last_name.cyan().bold(),
                    owner.address,
                    owner.city,
                    owner.telephone.bright_black()
                );
                let confirmed = Confirm::new()
                    .with_prompt("Create this owner?")
                    .default(true)
                    .interact()?;
                if !confirmed {
                    println!("{}", "Cancelled".red());
                    return Ok(());
                }
            }

            let saved = service.save_owner(owner).await.context("Failed to save owner")?;
            out.created("Owner", saved.id, &saved)?;
        }
        OwnerAction::Update {
            id,
            first_name,
            last_name,
            address,
            city,
            telephone,
        } => {
            let mut owner = service.find_owner(id).await.context("Failed to load owner")?;
            if let Some(v) = first_name {
                owner.first_name = v;
            }
            if let Some(v) = last_name {
                owner.last_name = v;
            }
            if let Some(v) = address {
                owner.address = v;
            }
            if let Some(v) = city {
                owner.city = v;
            }
            if let Some(v) = telephone {
                owner.telephone = v;
            }

            let saved = service.save_owner(owner).await.context("Failed to save owner")?;
            out.owner(&saved)?;
        }
    }

    Ok(())
}

/// Dispatches pet commands.
async fn handle_pet_action(action: PetAction, service: &ClinicService, out: &Output) -> Result<()> {
    match action {
        PetAction::Show { id } => {
            let pet = service.find_pet(id).await.context("Failed to load pet")?;
            out.pet(&pet)?;
        }
        PetAction::Types => {
            let types = service
                .find_pet_types()
                .await
                .context("Failed to list pet types")?;
            if out.json {
                print_json(&types)?;
            } else {
                println!("{}", "Pet types".bright_blue().bold());
                for t in &types {
                    println!("  {:<3} {}", t.id.to_string().bright_black(), t.name.cyan());
                }
            }
        }
        PetAction::Add {
            owner,
            name,
            pet_type,
            birth_date,
        } => {
            let mut owner = service.find_owner(owner).await.context("Failed to load owner")?;
            let name = prompt_if_missing(name, "Pet name")?;
            let pet_type = service
                .find_pet_type(&prompt_if_missing(pet_type, "Pet type")?)
                .await
                .context("Unknown pet type")?;
            let birth_date = match birth_date {
                Some(d) => d,
                None => Input::<String>::new()
                    .with_prompt("Birth date (YYYY-MM-DD)")
                    .interact_text()?
                    .parse()
                    .context("Birth date must be YYYY-MM-DD")?,
            };

            let saved = service
                .add_pet_to_owner(&mut owner, Pet::new(name, birth_date, pet_type))
                .await
                .context("Failed to add pet")?;
            out.created("Pet", saved.id, &saved)?;
        }
        PetAction::Rename { id, name } => {
            let mut pet = service.find_pet(id).await.context("Failed to load pet")?;
            pet.name = name;
            let saved = service.save_pet(pet).await.context("Failed to rename pet")?;
            out.pet(&saved)?;
        }
    }

    Ok(())
}

/// Dispatches visit commands.
async fn handle_visit_action(
    action: VisitAction,
    service: &ClinicService,
    out: &Output,
) -> Result<()> {
    match action {
        VisitAction::List { pet_id } => {
            let visits = service
                .find_visits_by_pet(pet_id)
                .await
                .context("Failed to list visits")?;
            if out.json {
                print_json(&visits)?;
            } else {
                println!("{}", format!("Visits of pet {pet_id}").bright_blue().bold());
                print_visits(&visits);
            }
        }
        VisitAction::Add {
            pet,
            description,
            date,
        } => {
            let mut pet = service.find_pet(pet).await.context("Failed to load pet")?;
            let description = prompt_if_missing(description, "Description")?;
            let visit = match date {
                Some(date) => Visit::on(date, description),
                None => Visit::new(description),
            };

            let saved = service
                .add_visit_to_pet(&mut pet, visit)
                .await
                .context("Failed to record visit")?;
            out.created("Visit", saved.id, &saved)?;
        }
    }

    Ok(())
}

/// Handles database diagnostic commands.
async fn handle_db_action(action: &DbAction, config: &Config) -> Result<()> {
    let config = Config {
        run_migrations: false,
        ..config.clone()
    };
    let pool = bootstrap::connect(&config).await?;

    match action {
        DbAction::Check => {
            println!("{}", "Checking database connection...".bright_blue());

            let version: String = sqlx::query_scalar("SELECT version()")
                .fetch_one(&pool)
                .await?;
            let owners: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM owners")
                .fetch_one(&pool)
                .await
                .unwrap_or(0);

            println!("{}", "Database connection OK".green().bold());
            println!("  PostgreSQL: {}", version.bright_white());
            println!("  Owners:     {}", owners.to_string().bright_green().bold());
        }
        DbAction::Migrate => {
            bootstrap::migrate(&pool).await?;
            println!("{}", "Migrations applied".green().bold());
        }
    }

    Ok(())
}

fn prompt_if_missing(value: Option<String>, prompt: &str) -> Result<String> {
    match value {
        Some(v) => Ok(v),
        None => Ok(Input::<String>::new().with_prompt(prompt).interact_text()?),
    }
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn print_visits(visits: &[Visit]) {
    if visits.is_empty() {
        println!("    {}", "no visits".bright_black());
    }
    for visit in visits {
        println!(
            "    {} {}",
            visit.date.format("%Y-%m-%d").to_string().bright_black(),
            visit.description
        );
    }
}

/// Renders results either as colored text or as JSON.
struct Output {
    json: bool,
}

impl Output {
    fn owners(&self, owners: &[Owner]) -> Result<()> {
        if self.json {
            return print_json(owners);
        }

        if owners.is_empty() {
            println!("{}", "  No owners found".yellow());
            return Ok(());
        }

        println!(
            "  {:<4} {:<24} {:<24} {:<14} {:<12} {}",
            "ID".bright_white().bold(),
            "Name".bright_white().bold(),
            "Address".bright_white().bold(),
            "City".bright_white().bold(),
            "Telephone".bright_white().bold(),
            "Pets".bright_white().bold()
        );
        println!("  {}", "─".repeat(90).bright_black());

        for owner in owners {
            let pets: Vec<&str> = owner.pets.iter().map(|p| p.name.as_str()).collect();
            println!(
                "  {:<4} {:<24} {:<24} {:<14} {:<12} {}",
                owner.id.unwrap_or_default().to_string().bright_black(),
                format!("{} {}", owner.first_name, owner.last_name).cyan(),
                owner.address,
                owner.city,
                owner.telephone,
                pets.join(", ")
            );
        }

        println!();
        println!("  Total: {}", owners.len().to_string().bright_white().bold());
        Ok(())
    }

    fn owner(&self, owner: &Owner) -> Result<()> {
        if self.json {
            return print_json(owner);
        }

        println!(
            "{} {}",
            format!("{} {}", owner.first_name, owner.last_name)
                .bright_blue()
                .bold(),
            format!("#{}", owner.id.unwrap_or_default()).bright_black()
        );
        println!("  Address:   {}", owner.address);
        println!("  City:      {}", owner.city);
        println!("  Telephone: {}", owner.telephone);
        println!();

        if owner.pets.is_empty() {
            println!("  {}", "No pets".yellow());
        }
        for pet in &owner.pets {
            print_pet_line(pet);
            print_visits(&pet.visits);
        }
        Ok(())
    }

    fn pet(&self, pet: &Pet) -> Result<()> {
        if self.json {
            return print_json(pet);
        }

        print_pet_line(pet);
        if let Some(owner_id) = pet.owner_id {
            println!("    owner #{}", owner_id.to_string().bright_black());
        }
        print_visits(&pet.visits);
        Ok(())
    }

    fn vets(&self, vets: &[Vet]) -> Result<()> {
        if self.json {
            return print_json(vets);
        }

        println!("{}", "Veterinarians".bright_blue().bold());
        for vet in vets {
            let specialties: Vec<&str> =
                vet.specialties().iter().map(|s| s.name.as_str()).collect();
            let specialties = if specialties.is_empty() {
                "none".bright_black().to_string()
            } else {
                specialties.join(", ")
            };
            println!(
                "  {:<3} {:<20} {}",
                vet.id.to_string().bright_black(),
                format!("{} {}", vet.first_name, vet.last_name).cyan(),
                specialties
            );
        }
        Ok(())
    }

    fn created<T: Serialize>(&self, kind: &str, id: Option<i64>, value: &T) -> Result<()> {
        if self.json {
            return print_json(value);
        }
        println!(
            "{} {}",
            format!("{kind} saved").green().bold(),
            format!("#{}", id.unwrap_or_default()).bright_black()
        );
        Ok(())
    }
}

fn print_pet_line(pet: &Pet) {
    println!(
        "  {} {} ({}, born {})",
        format!("#{}", pet.id.unwrap_or_default()).bright_black(),
        pet.name.cyan().bold(),
        pet.pet_type.name,
        pet.birth_date.format("%Y-%m-%d")
    );
}
