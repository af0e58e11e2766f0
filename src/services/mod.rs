pub mod api_client;
pub mod auth_service;
pub mod discipline_service;
pub mod grading_service;
pub mod group_service;
pub mod role_service;
pub mod session_service;
pub mod student_grade_service;
pub mod survey_service;
pub mod user_service;
