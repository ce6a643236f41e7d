//! Demo catalogue and borrowers for a fresh database

use sea_orm::DatabaseConnection;

use crate::domain::{
    BookRepository, DomainError, Email, Isbn, NewBook, NewStudent, NewTeacher, StudentRepository,
    TeacherRepository,
};
use crate::infrastructure::{
    SeaOrmBookRepository, SeaOrmStudentRepository, SeaOrmTeacherRepository,
};

pub async fn seed_demo_data(db: &DatabaseConnection) -> Result<(), DomainError> {
    let books = SeaOrmBookRepository::new(db.clone());

    if !books.find_all().await?.is_empty() {
        tracing::info!("Catalogue already populated, skipping demo seed");
        return Ok(());
    }

    let catalogue = [
        ("Dom Casmurro", "Machado de Assis", "978-8594318602"),
        ("Foundation", "Isaac Asimov", "978-0553293357"),
        ("Dune", "Frank Herbert", "978-0441172719"),
    ];

    for (title, author, isbn) in catalogue {
        books
            .create(NewBook {
                title: title.to_owned(),
                author: author.to_owned(),
                isbn: Isbn::parse(isbn)?,
            })
            .await?;
    }

    let students = SeaOrmStudentRepository::new(db.clone());
    students
        .create(NewStudent {
            name: "Ana Souza".to_owned(),
            email: Email::parse("ana.souza@school.edu")?,
            grade_level: "9".to_owned(),
            course: "Science".to_owned(),
        })
        .await?;
    students
        .create(NewStudent {
            name: "Lucas Lima".to_owned(),
            email: Email::parse("lucas.lima@school.edu")?,
            grade_level: "11".to_owned(),
            course: "Literature".to_owned(),
        })
        .await?;

    SeaOrmTeacherRepository::new(db.clone())
        .create(NewTeacher {
            name: "Marta Reis".to_owned(),
            email: Email::parse("marta.reis@school.edu")?,
            department: "History".to_owned(),
        })
        .await?;

    Ok(())
}
