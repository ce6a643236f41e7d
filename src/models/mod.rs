pub mod book;
pub mod book_loan;
pub mod student;
pub mod teacher;
pub mod user;
