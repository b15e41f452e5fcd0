pub mod api_response;
pub mod job;
pub mod payload;
pub mod send_error;
