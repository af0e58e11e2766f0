pub mod discipline;
pub mod group;
pub mod question;
pub mod session;
pub mod student_grade;
pub mod survey;
pub mod user;
