//! Token cache keyed on the raw message text.
//!
//! Tokenizing is pure, so caching never changes output; it only saves work
//! when the same message re-renders.

use std::sync::Arc;

use moka::sync::Cache;

use crate::token::Token;
use crate::tokenizer::tokenize;

pub struct TokenCache {
    /// `None` when caching is disabled (capacity 0).
    cache: Option<Cache<String, Arc<[Token]>>>,
}

impl TokenCache {
    pub fn new(capacity: u64) -> Self {
        let cache = (capacity > 0).then(|| Cache::builder().max_capacity(capacity).build());
        Self { cache }
    }

    pub fn is_enabled(&self) -> bool {
        self.cache.is_some()
    }

    /// Tokens for `input`, served from the cache when present.
    pub fn tokenize(&self, input: &str) -> Arc<[Token]> {
        let Some(cache) = &self.cache else {
            return tokenize(input).into();
        };

        if let Some(hit) = cache.get(input) {
            return hit;
        }
        let tokens: Arc<[Token]> = tokenize(input).into();
        cache.insert(input.to_string(), Arc::clone(&tokens));
        tokens
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cached_result_matches_direct_tokenize() {
        let cache = TokenCache::new(16);
        let input = "**hi** <@1> https://a.io/x.mp4";
        let first = cache.tokenize(input);
        let second = cache.tokenize(input);
        assert_eq!(&*first, tokenize(input).as_slice());
        assert!(Arc::ptr_eq(&first, &second));
    }

    #[test]
    fn zero_capacity_disables_cache() {
        let cache = TokenCache::new(0);
        assert!(!cache.is_enabled());
        let first = cache.tokenize("a");
        let second = cache.tokenize("a");
        assert_eq!(first, second);
        assert!(!Arc::ptr_eq(&first, &second));
    }
}
