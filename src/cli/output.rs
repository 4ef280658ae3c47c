//! CLI output formatting utilities

use colored::Colorize;
use comfy_table::{presets::UTF8_FULL, Cell, Color, ContentArrangement, Table};

use crate::app::Outcome;
use crate::auth::{AuthState, Role};
use crate::catalog::{Book, CatalogStats, LibraryUser, UserStatus};
use crate::routing::{NavLink, ProfileSummary};

/// Print a success message
pub fn success(message: &str) {
    println!("{} {}", "✓".green(), message);
}

/// Print an error message
pub fn error(message: &str) {
    eprintln!("{} {}", "✗".red(), message);
}

/// Print a warning message
pub fn warn(message: &str) {
    println!("{} {}", "⚠".yellow(), message);
}

/// Print an info message
pub fn info(message: &str) {
    println!("{} {}", "ℹ".blue(), message);
}

fn header(labels: &[&str]) -> Vec<Cell> {
    labels.iter().map(|l| Cell::new(l).fg(Color::Cyan)).collect()
}

fn new_table(labels: &[&str]) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(header(labels));
    table
}

/// Print the signed-in user block
pub fn print_profile(state: &AuthState) {
    if !state.is_authenticated() {
        info("Not signed in. Run 'luminalib login' or 'luminalib demo member'");
        return;
    }

    let profile = ProfileSummary::from_state(state);
    let role = if state.is_admin() {
        profile.role_label.magenta()
    } else {
        profile.role_label.normal()
    };
    println!(
        "{} {}  {}",
        format!("[{}]", profile.initial).bold(),
        profile.display_name.bold(),
        role
    );
}

/// Print navigation links, admin links marked
pub fn print_menu(links: &[NavLink]) {
    let mut table = new_table(&["Menu", "Route"]);
    for link in links {
        let section = crate::routing::ADMIN_LINKS.contains(link);
        let label = if section {
            Cell::new(format!("{} (admin)", link.label)).fg(Color::Magenta)
        } else {
            Cell::new(link.label)
        };
        table.add_row(vec![label, Cell::new(link.route)]);
    }
    println!("{table}");
}

/// Print what happened when a route was opened
pub fn print_outcome(outcome: &Outcome) {
    match outcome {
        Outcome::Waiting => info("Loading..."),
        Outcome::Rendered { path } => success(&format!("Showing {}", path)),
        Outcome::Redirected { from, to } => {
            warn(&format!("{} is not available here, redirected to {}", from, to))
        }
    }
}

fn availability_cell(book: &Book) -> Cell {
    if book.available {
        Cell::new("Available").fg(Color::Green)
    } else {
        Cell::new("Borrowed").fg(Color::Red)
    }
}

/// Print the dashboard stat line
pub fn print_stats(stats: &CatalogStats) {
    println!(
        "{} {}   {} {}   {} {}",
        "Total:".bold(),
        stats.total,
        "Available:".bold(),
        stats.available.to_string().green(),
        "Borrowed:".bold(),
        stats.borrowed.to_string().red()
    );
}

/// Print a table of books
pub fn print_book_table(books: &[&Book]) {
    if books.is_empty() {
        info("No books match your search.");
        return;
    }

    let mut table = new_table(&["ID", "Title", "Author", "Genre", "Year", "Qty", "Status"]);
    for book in books {
        table.add_row(vec![
            Cell::new(book.id),
            Cell::new(&book.title),
            Cell::new(&book.author),
            Cell::new(book.genre.as_deref().unwrap_or("-")),
            Cell::new(
                book.published_year
                    .map(|y| y.to_string())
                    .unwrap_or_else(|| "-".to_string()),
            ),
            Cell::new(
                book.quantity
                    .map(|q| q.to_string())
                    .unwrap_or_else(|| "-".to_string()),
            ),
            availability_cell(book),
        ]);
    }
    println!("{table}");
}

/// Print a table of registered users
pub fn print_user_table(users: &[LibraryUser]) {
    let mut table = new_table(&["ID", "Username", "Email", "Role", "Status"]);
    for user in users {
        let role = match user.role {
            Role::Admin => Cell::new("Admin").fg(Color::Magenta),
            Role::Member => Cell::new("User"),
        };
        let status = match user.status {
            UserStatus::Active => Cell::new("Active").fg(Color::Green),
            UserStatus::Inactive => Cell::new("Inactive").fg(Color::Yellow),
        };
        table.add_row(vec![
            Cell::new(user.id),
            Cell::new(&user.username),
            Cell::new(&user.email),
            role,
            status,
        ]);
    }
    println!("{table}");
}

/// Confirm an action with the user
pub fn confirm(message: &str) -> bool {
    dialoguer::Confirm::new()
        .with_prompt(message)
        .default(false)
        .interact()
        .unwrap_or(false)
}
