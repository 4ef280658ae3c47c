//! Seed data used until a catalog backend exists

use super::models::{Book, LibraryUser, UserStatus};
use crate::auth::Role;

#[allow(clippy::too_many_arguments)]
fn book(
    id: u64,
    title: &str,
    author: &str,
    isbn: &str,
    genre: &str,
    available: bool,
    quantity: u32,
    published_year: i32,
    description: &str,
) -> Book {
    Book {
        id,
        title: title.to_string(),
        author: author.to_string(),
        isbn: Some(isbn.to_string()),
        genre: Some(genre.to_string()),
        available,
        quantity: Some(quantity),
        published_year: Some(published_year),
        description: Some(description.to_string()),
    }
}

pub fn mock_books() -> Vec<Book> {
    vec![
        book(
            1,
            "The Great Gatsby",
            "F. Scott Fitzgerald",
            "978-0743273565",
            "Fiction",
            true,
            5,
            1925,
            "A portrait of the Jazz Age and the American dream.",
        ),
        book(
            2,
            "To Kill a Mockingbird",
            "Harper Lee",
            "978-0061120084",
            "Fiction",
            true,
            3,
            1960,
            "A childhood in a Southern town and a trial that divides it.",
        ),
        book(
            3,
            "1984",
            "George Orwell",
            "978-0451524935",
            "Dystopian",
            false,
            0,
            1949,
            "Surveillance, doublethink and the Party.",
        ),
        book(
            4,
            "A Brief History of Time",
            "Stephen Hawking",
            "978-0553380163",
            "Science",
            true,
            2,
            1988,
            "From the Big Bang to black holes.",
        ),
        book(
            5,
            "The Pragmatic Programmer",
            "Andrew Hunt",
            "978-0201616224",
            "Technology",
            true,
            4,
            1999,
            "Practical advice for working software developers.",
        ),
        book(
            6,
            "Pride and Prejudice",
            "Jane Austen",
            "978-0141439518",
            "Romance",
            false,
            0,
            1813,
            "Manners, marriage and first impressions.",
        ),
        book(
            7,
            "Sapiens",
            "Yuval Noah Harari",
            "978-0062316097",
            "History",
            true,
            6,
            2011,
            "A brief history of humankind.",
        ),
        book(
            8,
            "Dune",
            "Frank Herbert",
            "978-0441172719",
            "Science Fiction",
            true,
            2,
            1965,
            "Politics and prophecy on the desert planet Arrakis.",
        ),
    ]
}

pub fn mock_users() -> Vec<LibraryUser> {
    let user = |id: u64, username: &str, email: &str, role: Role, status: UserStatus| LibraryUser {
        id,
        username: username.to_string(),
        email: email.to_string(),
        role,
        status,
    };

    vec![
        user(1, "admin", "admin@library.edu", Role::Admin, UserStatus::Active),
        user(2, "john_doe", "john@university.edu", Role::Member, UserStatus::Active),
        user(3, "jane_smith", "jane@university.edu", Role::Member, UserStatus::Active),
        user(4, "bob_wilson", "bob@university.edu", Role::Member, UserStatus::Inactive),
    ]
}
