//! CLI interface for LuminaLib

pub mod commands;
mod output;

pub use output::*;

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use crate::auth::Role;
use crate::catalog::Availability;

#[derive(Parser)]
#[command(name = "luminalib")]
#[command(version)]
#[command(about = "Browse and manage the library catalog", long_about = None)]
pub struct Cli {
    /// Path to luminalib.toml (searched upward from the current directory by default)
    #[arg(long, global = true, env = "LUMINALIB_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Write a default luminalib.toml in the current directory
    Init,

    /// Sign in against the authentication endpoint
    Login {
        /// Username (prompted when omitted)
        #[arg(short, long)]
        username: Option<String>,

        /// Password (prompted when omitted)
        #[arg(short, long)]
        password: Option<String>,
    },

    /// Sign in with a demo session, no backend required
    Demo {
        #[arg(value_enum)]
        role: DemoRole,
    },

    /// Sign out and forget the stored session
    Logout,

    /// Show who is signed in
    Whoami,

    /// Show the navigation links available to the current user
    Menu {
        #[arg(short, long, default_value = "table")]
        format: OutputFormat,
    },

    /// Open a route through the access guard
    Open {
        /// Route path, e.g. /admin/users
        path: String,

        #[arg(short, long, default_value = "table")]
        format: OutputFormat,
    },

    /// Browse and manage books
    Books {
        #[command(subcommand)]
        action: BooksAction,
    },

    /// List registered users (administrators only)
    Users {
        #[arg(short, long, default_value = "table")]
        format: OutputFormat,
    },
}

#[derive(Subcommand)]
pub enum BooksAction {
    /// List books, optionally filtered
    List {
        /// Match against title, author or genre
        #[arg(short, long, default_value = "")]
        search: String,

        #[arg(long, value_enum, default_value = "all")]
        filter: Availability,

        #[arg(short, long, default_value = "table")]
        format: OutputFormat,
    },

    /// Borrow a book
    Borrow {
        id: u64,
    },

    /// Add a book to the catalog (administrators only)
    Add {
        #[command(flatten)]
        fields: BookFields,
    },

    /// Edit a catalog entry (administrators only)
    Edit {
        id: u64,

        #[command(flatten)]
        fields: BookFields,
    },

    /// Delete a catalog entry (administrators only)
    Delete {
        id: u64,

        /// Skip confirmation prompt
        #[arg(short, long)]
        force: bool,
    },
}

/// Book form fields shared by add and edit
#[derive(Debug, Clone, clap::Args)]
pub struct BookFields {
    #[arg(long)]
    pub title: Option<String>,

    #[arg(long)]
    pub author: Option<String>,

    #[arg(long)]
    pub isbn: Option<String>,

    #[arg(long)]
    pub genre: Option<String>,

    #[arg(long)]
    pub quantity: Option<u32>,

    #[arg(long)]
    pub year: Option<i32>,

    #[arg(long)]
    pub description: Option<String>,

    /// Whether the book can be borrowed (true/false)
    #[arg(long)]
    pub available: Option<bool>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum DemoRole {
    Admin,
    Member,
}

impl From<DemoRole> for Role {
    fn from(role: DemoRole) -> Self {
        match role {
            DemoRole::Admin => Role::Admin,
            DemoRole::Member => Role::Member,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum OutputFormat {
    Table,
    Json,
    Yaml,
}
