pub mod profile;
pub mod profile_dto;
pub mod profile_response;
