pub mod current_api_key_response;
pub mod models;
pub mod update_api_key_request;
