//! Mention resolution boundary.
//!
//! The tokenizer only extracts raw identifiers. Turning them into display
//! identities is an async, batched lookup owned by the embedding service.

use std::collections::{HashMap, HashSet};

use anyhow::Result;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::token::{MentionType, Token};

/// A mention as it appears in a message.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MentionRef {
    pub mention_type: MentionType,
    pub user_id: String,
}

impl MentionRef {
    pub fn new(mention_type: MentionType, user_id: impl Into<String>) -> Self {
        Self {
            mention_type,
            user_id: user_id.into(),
        }
    }
}

/// Display identity for a resolved mention.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedMention {
    pub display_id: String,
    pub display_name: String,
}

#[async_trait]
pub trait MentionResolver: Send + Sync {
    /// Resolve a batch of mentions. The result is index-aligned with the
    /// input; `None` means the mention stays unresolved.
    async fn resolve(&self, mentions: &[MentionRef]) -> Result<Vec<Option<ResolvedMention>>>;
}

/// Distinct mentions in `tokens`, in first-seen order.
pub fn collect_mentions(tokens: &[Token]) -> Vec<MentionRef> {
    let mut seen = HashSet::new();
    tokens
        .iter()
        .filter_map(|token| match token {
            Token::UserMention {
                mention_type,
                user_id,
                ..
            } => Some(MentionRef::new(*mention_type, user_id.clone())),
            _ => None,
        })
        .filter(|mention| seen.insert(mention.clone()))
        .collect()
}

/// Resolve every mention in `tokens` with a single batched call.
///
/// Unresolved mentions are simply absent from the returned map.
pub async fn resolve_mentions(
    resolver: &dyn MentionResolver,
    tokens: &[Token],
) -> Result<HashMap<MentionRef, ResolvedMention>> {
    let mentions = collect_mentions(tokens);
    if mentions.is_empty() {
        return Ok(HashMap::new());
    }

    let results = resolver.resolve(&mentions).await?;
    if results.len() != mentions.len() {
        warn!(
            requested = mentions.len(),
            returned = results.len(),
            "Mention resolver returned a mismatched batch"
        );
    }

    let resolved: HashMap<_, _> = mentions
        .into_iter()
        .zip(results)
        .filter_map(|(mention, result)| result.map(|found| (mention, found)))
        .collect();
    debug!(resolved = resolved.len(), "Resolved mentions");
    Ok(resolved)
}

/// In-memory resolver backed by a fixed table.
#[derive(Debug, Default, Clone)]
pub struct StaticMentionResolver {
    entries: HashMap<MentionRef, ResolvedMention>,
}

impl StaticMentionResolver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, mention: MentionRef, resolved: ResolvedMention) {
        self.entries.insert(mention, resolved);
    }

    pub fn with(mut self, mention: MentionRef, resolved: ResolvedMention) -> Self {
        self.insert(mention, resolved);
        self
    }
}

#[async_trait]
impl MentionResolver for StaticMentionResolver {
    async fn resolve(&self, mentions: &[MentionRef]) -> Result<Vec<Option<ResolvedMention>>> {
        Ok(mentions
            .iter()
            .map(|mention| self.entries.get(mention).cloned())
            .collect())
    }
}
