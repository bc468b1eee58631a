use crate::KnowledgeDto;
use serde::Serialize;

/// Single entry response
#[derive(Debug, Serialize)]
pub struct KnowledgeResponse {
    pub success: bool,
    pub knowledge: KnowledgeDto,
}
