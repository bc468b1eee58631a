use crate::KnowledgeDto;
use serde::Serialize;

/// Full corpus listing response
#[derive(Debug, Serialize)]
pub struct KnowledgeListResponse {
    pub success: bool,
    pub knowledge: Vec<KnowledgeDto>,
    pub count: usize,
}
