pub mod announcement;
pub mod announcement_dto;
pub mod announcement_response;
pub mod set_announcement_request;
