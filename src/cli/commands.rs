//! CLI command implementations

use anyhow::Result;
use serde::Serialize;
use std::fs;
use std::path::Path;
use std::time::Duration;

use crate::app::{App, Outcome};
use crate::auth::Role;
use crate::catalog::{self, Availability, BookDraft, Catalog};
use crate::cli::{
    confirm, error, info, print_book_table, print_menu, print_outcome, print_profile,
    print_stats, print_user_table, success, warn, BookFields, OutputFormat,
};
use crate::config::{self, loader::CONFIG_FILENAME, Config};
use crate::routing::{menu_for, routes, Navigator};

/// Initialize a new luminalib.toml configuration file
pub async fn init() -> Result<()> {
    let config_path = Path::new(CONFIG_FILENAME);

    if config_path.exists() {
        warn(&format!("{} already exists", CONFIG_FILENAME));
        return Ok(());
    }

    fs::write(config_path, config::loader::default_config_content())?;

    success(&format!("Created {}", CONFIG_FILENAME));
    info("Run 'luminalib login' to sign in, or 'luminalib demo member' to try it without a backend");

    Ok(())
}

/// Sign in with username and password
pub async fn login(
    config_path: Option<&Path>,
    username: Option<String>,
    password: Option<String>,
) -> Result<()> {
    let app = open_app(config_path)?;

    let username = match username {
        Some(u) => u,
        None => dialoguer::Input::<String>::new()
            .with_prompt("Username")
            .interact_text()?,
    };
    let password = match password {
        Some(p) => p,
        None => dialoguer::Password::new()
            .with_prompt("Password")
            .interact()?,
    };

    let spinner = indicatif::ProgressBar::new_spinner();
    spinner.set_message("Signing in...");
    spinner.enable_steady_tick(Duration::from_millis(100));

    let result = app.login(&username, &password).await;
    spinner.finish_and_clear();

    match result {
        Ok(session) => {
            success(&format!("Signed in as {} ({})", session.username, session.role.label()));
            info(&format!("Continue at {}", app.navigator().current()));
            Ok(())
        }
        Err(e) => {
            error(&format!("{}. Try demo mode: 'luminalib demo member'", e));
            Err(e.into())
        }
    }
}

/// Start a demo session
pub async fn demo(config_path: Option<&Path>, role: Role) -> Result<()> {
    let app = open_app(config_path)?;
    let session = app.auth().demo_login(role)?;

    let target = if session.is_admin() {
        app.config().routes.admin_landing.clone()
    } else {
        app.config().routes.landing.clone()
    };
    app.open(&target);

    success(&format!("Demo session for {} ({})", session.username, session.role.label()));
    info(&format!("Continue at {}", app.navigator().current()));
    Ok(())
}

/// Sign out
pub async fn logout(config_path: Option<&Path>) -> Result<()> {
    let app = open_app(config_path)?;
    let was_signed_in = app.state().is_authenticated();
    app.logout();

    if was_signed_in {
        success("Signed out");
    } else {
        info("Not signed in");
    }
    Ok(())
}

/// Show the current user
pub async fn whoami(config_path: Option<&Path>) -> Result<()> {
    let app = open_app(config_path)?;
    print_profile(&app.state());
    Ok(())
}

/// Show the navigation menu for the current role
pub async fn menu(config_path: Option<&Path>, format: OutputFormat) -> Result<()> {
    let app = open_app(config_path)?;
    let Some(role) = app.state().role() else {
        info("Not signed in. Run 'luminalib login' first");
        return Ok(());
    };

    let links = menu_for(role);
    match format {
        OutputFormat::Table => print_menu(&links),
        _ => emit(&links, format)?,
    }
    Ok(())
}

/// Open a route through the guard
pub async fn open(config_path: Option<&Path>, path: &str, format: OutputFormat) -> Result<()> {
    let app = open_app(config_path)?;
    let outcome = app.open(path);
    match format {
        OutputFormat::Table => print_outcome(&outcome),
        _ => emit(&outcome, format)?,
    }
    Ok(())
}

/// List books on the dashboard
pub async fn books_list(
    config_path: Option<&Path>,
    search: &str,
    filter: Availability,
    format: OutputFormat,
) -> Result<()> {
    let app = open_app(config_path)?;
    enter(&app, routes::DASHBOARD)?;

    let catalog = load_catalog(app.config())?;
    let books = catalog.browse(search, filter);

    match format {
        OutputFormat::Table => {
            if let Some(name) = app.state().username() {
                println!("Welcome back, {}", name);
            }
            print_stats(&catalog.stats());
            print_book_table(&books);
        }
        _ => emit(&books, format)?,
    }
    Ok(())
}

/// Borrow a book
pub async fn books_borrow(config_path: Option<&Path>, id: u64) -> Result<()> {
    let app = open_app(config_path)?;
    enter(&app, routes::DASHBOARD)?;

    let mut catalog = load_catalog(app.config())?;
    match catalog.borrow(id) {
        Ok(book) => {
            success(&format!("Borrowed '{}'", book.title));
            catalog.save(&app.config().storage.catalog_path)?;
            Ok(())
        }
        Err(e) => {
            error(&format!("Failed to borrow: {}", e));
            Err(e.into())
        }
    }
}

/// Add a book
pub async fn books_add(config_path: Option<&Path>, fields: BookFields) -> Result<()> {
    let app = open_app(config_path)?;
    enter(&app, routes::ADMIN_BOOKS)?;

    let mut catalog = load_catalog(app.config())?;
    let draft = apply_fields(BookDraft::default(), fields);
    match catalog.add(draft) {
        Ok(book) => {
            success(&format!("Added '{}' as book {}", book.title, book.id));
            catalog.save(&app.config().storage.catalog_path)?;
            Ok(())
        }
        Err(e) => {
            error(&format!("Failed to add book: {}", e));
            Err(e.into())
        }
    }
}

/// Edit a book; fields not given keep their current values
pub async fn books_edit(config_path: Option<&Path>, id: u64, fields: BookFields) -> Result<()> {
    let app = open_app(config_path)?;
    enter(&app, routes::ADMIN_BOOKS)?;

    let mut catalog = load_catalog(app.config())?;
    let Some(existing) = catalog.get(id) else {
        error(&format!("Book {} not found", id));
        return Err(crate::Error::BookNotFound(id).into());
    };

    let draft = apply_fields(BookDraft::from(existing), fields);
    match catalog.update(id, draft) {
        Ok(book) => {
            success(&format!("Updated '{}'", book.title));
            catalog.save(&app.config().storage.catalog_path)?;
            Ok(())
        }
        Err(e) => {
            error(&format!("Failed to update book: {}", e));
            Err(e.into())
        }
    }
}

/// Delete a book
pub async fn books_delete(config_path: Option<&Path>, id: u64, force: bool) -> Result<()> {
    let app = open_app(config_path)?;
    enter(&app, routes::ADMIN_BOOKS)?;

    let mut catalog = load_catalog(app.config())?;
    let Some(book) = catalog.get(id) else {
        error(&format!("Book {} not found", id));
        return Err(crate::Error::BookNotFound(id).into());
    };

    if !force {
        let message = format!(
            "Delete '{}'? This cannot be undone.",
            book.title
        );
        if !confirm(&message) {
            info("Cancelled");
            return Ok(());
        }
    }

    let removed = catalog.delete(id)?;
    catalog.save(&app.config().storage.catalog_path)?;
    success(&format!("Deleted '{}'", removed.title));
    Ok(())
}

/// List registered users
pub async fn users(config_path: Option<&Path>, format: OutputFormat) -> Result<()> {
    let app = open_app(config_path)?;
    enter(&app, routes::ADMIN_USERS)?;

    let users = catalog::mock_users();
    match format {
        OutputFormat::Table => {
            println!(
                "Users: {}   Admins: {}",
                users.len(),
                catalog::admin_count(&users)
            );
            print_user_table(&users);
        }
        _ => emit(&users, format)?,
    }
    Ok(())
}

// Helper functions

fn load_config(config_path: Option<&Path>) -> Result<Config> {
    match config_path {
        Some(path) => config::load_config_from_path(path),
        None => config::load_config_or_default(),
    }
    .map_err(|e| anyhow::anyhow!("{}", e))
}

fn open_app(config_path: Option<&Path>) -> Result<App> {
    let config = load_config(config_path)?;
    App::from_config(config).map_err(|e| anyhow::anyhow!("{}", e))
}

fn load_catalog(config: &Config) -> Result<Catalog> {
    Catalog::load_or_seed(&config.storage.catalog_path).map_err(|e| anyhow::anyhow!("{}", e))
}

/// Open a page; prints the redirect and fails when the guard refuses
fn enter(app: &App, path: &str) -> Result<()> {
    match app.open(path) {
        Outcome::Rendered { .. } => Ok(()),
        outcome => {
            print_outcome(&outcome);
            anyhow::bail!("Access to {} denied", path)
        }
    }
}

fn apply_fields(mut draft: BookDraft, fields: BookFields) -> BookDraft {
    if let Some(title) = fields.title {
        draft.title = title;
    }
    if let Some(author) = fields.author {
        draft.author = author;
    }
    if fields.isbn.is_some() {
        draft.isbn = fields.isbn;
    }
    if fields.genre.is_some() {
        draft.genre = fields.genre;
    }
    if fields.quantity.is_some() {
        draft.quantity = fields.quantity;
    }
    if fields.year.is_some() {
        draft.published_year = fields.year;
    }
    if fields.description.is_some() {
        draft.description = fields.description;
    }
    if let Some(available) = fields.available {
        draft.available = available;
    }
    draft
}

fn emit<T: Serialize + ?Sized>(value: &T, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(value)?),
        OutputFormat::Yaml => println!("{}", serde_yaml::to_string(value)?),
        OutputFormat::Table => {}
    }
    Ok(())
}
