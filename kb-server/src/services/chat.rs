//! Chat service - retrieval plus completion orchestration.
//!
//! One exchange per call, nothing persisted: retrieve context from the
//! knowledge corpus, assemble a prompt, send it upstream, hand back the
//! generated text verbatim. Failures are classified, never thrown raw past
//! this boundary.

use crate::services::api_key::ApiKeyHandle;
use crate::services::knowledge::KnowledgeService;

use kb_core::KnowledgeEntry;
use kb_gemini::{CompletionClient, GeminiError};

use std::fmt::Write;

use log::{debug, warn};
use thiserror::Error;

const SYSTEM_INSTRUCTIONS: &str = "You are a helpful assistant for a knowledge base. \
Answer the user's message using the knowledge entries below when they are relevant. \
When the entries do not cover the question, answer from general knowledge and say so. \
Reply in the language the user writes in.";

#[derive(Error, Debug)]
pub enum ChatError {
    #[error("Message cannot be empty")]
    EmptyMessage,

    #[error("No API key configured")]
    MissingApiKey,

    #[error(transparent)]
    Completion(#[from] GeminiError),
}

#[derive(Clone)]
pub struct ChatService {
    knowledge: KnowledgeService,
    completion: CompletionClient,
    api_key: ApiKeyHandle,
    context_limit: usize,
}

impl ChatService {
    pub fn new(
        knowledge: KnowledgeService,
        completion: CompletionClient,
        api_key: ApiKeyHandle,
        context_limit: usize,
    ) -> Self {
        Self {
            knowledge,
            completion,
            api_key,
            context_limit,
        }
    }

    /// Answer one user message.
    ///
    /// Input checks run before any store or network call: a blank message
    /// and a missing key are both rejected without upstream traffic. A
    /// failed context read degrades to an answer without context rather
    /// than failing the exchange.
    pub async fn answer(&self, user_message: &str) -> Result<String, ChatError> {
        let message = user_message.trim();
        if message.is_empty() {
            return Err(ChatError::EmptyMessage);
        }

        let api_key = self.api_key.current();
        if api_key.is_empty() {
            return Err(ChatError::MissingApiKey);
        }

        let context = match self.knowledge.list_all().await {
            Ok(entries) => select_context(entries, message, self.context_limit),
            Err(e) => {
                warn!("Knowledge retrieval failed, answering without context: {e}");
                Vec::new()
            }
        };

        debug!(
            "answering chat message: context_entries={} message_len={}",
            context.len(),
            message.len()
        );

        let prompt = build_prompt(&context, message);
        let answer = self.completion.generate(&api_key, &prompt).await?;

        Ok(answer)
    }
}

/// Pick the entries to include in the prompt.
///
/// A corpus within the limit goes in whole. Beyond the limit, keep entries
/// whose category, title or content contains any message word of three or
/// more characters (case-insensitive), truncated to the limit. No ranking.
pub(crate) fn select_context(
    entries: Vec<KnowledgeEntry>,
    message: &str,
    limit: usize,
) -> Vec<KnowledgeEntry> {
    if entries.len() <= limit {
        return entries;
    }

    let keywords: Vec<String> = message
        .split_whitespace()
        .filter(|word| word.chars().count() >= 3)
        .map(|word| word.to_lowercase())
        .collect();

    let mut selected = entries;
    selected.retain(|entry| {
        let haystack =
            format!("{} {} {}", entry.category, entry.title, entry.content).to_lowercase();
        keywords.iter().any(|keyword| haystack.contains(keyword))
    });
    selected.truncate(limit);

    selected
}

/// Assemble the single-turn prompt: instructions, numbered excerpts, then
/// the user message. An empty context omits the excerpt section entirely.
pub(crate) fn build_prompt(context: &[KnowledgeEntry], message: &str) -> String {
    let mut prompt = String::from(SYSTEM_INSTRUCTIONS);

    if !context.is_empty() {
        prompt.push_str("\n\nKnowledge entries:\n");
        for (index, entry) in context.iter().enumerate() {
            let title = entry.title.trim();
            if title.is_empty() {
                let _ = writeln!(prompt, "[{}] ({})", index + 1, entry.category);
            } else {
                let _ = writeln!(prompt, "[{}] ({}) {}", index + 1, entry.category, title);
            }
            let _ = writeln!(prompt, "{}", entry.content.trim());
        }
    }

    let _ = write!(prompt, "\nUser message:\n{}", message);

    prompt
}
