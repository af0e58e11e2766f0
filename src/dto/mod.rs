pub mod admin_dto;
pub mod auth_dto;
pub mod dashboard_dto;
pub mod notice_dto;
pub mod survey_dto;
