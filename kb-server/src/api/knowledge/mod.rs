pub mod create_knowledge_request;
pub mod create_knowledge_response;
pub mod knowledge;
pub mod knowledge_dto;
pub mod knowledge_list_response;
pub mod knowledge_response;
pub mod stats_response;
pub mod update_knowledge_request;
