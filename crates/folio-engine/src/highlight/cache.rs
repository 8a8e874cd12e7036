use async_trait::async_trait;
use std::{
    collections::HashMap,
    sync::{Mutex, MutexGuard, PoisonError},
};

use super::{HighlightError, HighlightOptions, Highlighter};

type CacheKey = (String, HighlightOptions);

/// Number of highlighted blocks kept by [`CachedHighlighter::new`].
pub const DEFAULT_CAPACITY: usize = 256;

/// Memoizes successful highlights of an inner [`Highlighter`] by code,
/// language and theme.
///
/// Errors are not cached, so a failing block is retried on the next render.
/// Once `capacity` entries are held the least recently used one is evicted.
pub struct CachedHighlighter<H> {
    inner: H,
    entries: Mutex<Entries>,
}

struct Entries {
    capacity: usize,
    map: HashMap<CacheKey, String>,
    // Least recently used first.
    order: Vec<CacheKey>,
}

impl Entries {
    fn get(&mut self, key: &CacheKey) -> Option<String> {
        let html = self.map.get(key).cloned()?;
        self.touch(key);
        Some(html)
    }

    fn insert(&mut self, key: CacheKey, html: String) {
        if self.capacity == 0 {
            return;
        }
        if self.map.contains_key(&key) {
            self.touch(&key);
        } else {
            if self.map.len() >= self.capacity && !self.order.is_empty() {
                let oldest = self.order.remove(0);
                self.map.remove(&oldest);
            }
            self.order.push(key.clone());
        }
        self.map.insert(key, html);
    }

    fn touch(&mut self, key: &CacheKey) {
        if let Some(pos) = self.order.iter().position(|k| k == key) {
            let key = self.order.remove(pos);
            self.order.push(key);
        }
    }
}

impl<H: Highlighter> CachedHighlighter<H> {
    pub fn new(inner: H) -> Self {
        Self::with_capacity(inner, DEFAULT_CAPACITY)
    }

    pub fn with_capacity(inner: H, capacity: usize) -> Self {
        Self {
            inner,
            entries: Mutex::new(Entries {
                capacity,
                map: HashMap::new(),
                order: Vec::new(),
            }),
        }
    }

    pub fn len(&self) -> usize {
        self.entries().map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries().map.is_empty()
    }

    pub fn clear(&self) {
        let mut entries = self.entries();
        entries.map.clear();
        entries.order.clear();
    }

    fn entries(&self) -> MutexGuard<'_, Entries> {
        self.entries.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[async_trait]
impl<H: Highlighter> Highlighter for CachedHighlighter<H> {
    async fn highlight(
        &self,
        code: &str,
        options: &HighlightOptions,
    ) -> Result<String, HighlightError> {
        let key = (code.to_string(), options.clone());
        let cached = self.entries().get(&key);
        if let Some(html) = cached {
            log::trace!("Highlight cache hit for `{}` block", options.lang);
            return Ok(html);
        }

        let html = self.inner.highlight(code, options).await?;
        self.entries().insert(key, html.clone());
        Ok(html)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::highlight::test_support::{MarkerHighlighter, UnavailableHighlighter};
    use futures::executor::block_on;
    use std::sync::atomic::Ordering;

    #[test]
    fn repeated_requests_hit_the_cache() {
        let cached = CachedHighlighter::new(MarkerHighlighter::default());
        let options = HighlightOptions::new("js", "t");

        let first = block_on(cached.highlight("let a;", &options)).unwrap();
        let second = block_on(cached.highlight("let a;", &options)).unwrap();

        assert_eq!(first, second);
        assert_eq!(cached.inner.calls.load(Ordering::SeqCst), 1);
        assert_eq!(cached.len(), 1);
    }

    #[test]
    fn language_and_theme_are_part_of_the_key() {
        let cached = CachedHighlighter::new(MarkerHighlighter::default());

        block_on(cached.highlight("x", &HighlightOptions::new("js", "a"))).unwrap();
        block_on(cached.highlight("x", &HighlightOptions::new("py", "a"))).unwrap();
        block_on(cached.highlight("x", &HighlightOptions::new("js", "b"))).unwrap();

        assert_eq!(cached.inner.calls.load(Ordering::SeqCst), 3);
        assert_eq!(cached.len(), 3);
    }

    #[test]
    fn errors_are_not_cached() {
        let cached = CachedHighlighter::new(UnavailableHighlighter);
        let result = block_on(cached.highlight("x", &HighlightOptions::new("js", "t")));

        assert!(result.is_err());
        assert!(cached.is_empty());
    }

    #[test]
    fn clear_empties_the_cache() {
        let cached = CachedHighlighter::new(MarkerHighlighter::default());
        block_on(cached.highlight("x", &HighlightOptions::new("js", "t"))).unwrap();
        cached.clear();
        assert!(cached.is_empty());
    }

    #[test]
    fn least_recently_used_entry_is_evicted() {
        let cached = CachedHighlighter::with_capacity(MarkerHighlighter::default(), 2);
        let options = HighlightOptions::new("js", "t");

        block_on(cached.highlight("a", &options)).unwrap();
        block_on(cached.highlight("b", &options)).unwrap();
        block_on(cached.highlight("a", &options)).unwrap();
        block_on(cached.highlight("c", &options)).unwrap();
        assert_eq!(cached.len(), 2);
        assert_eq!(cached.inner.calls.load(Ordering::SeqCst), 3);

        // `a` was refreshed before `c` arrived, so `b` went.
        block_on(cached.highlight("a", &options)).unwrap();
        assert_eq!(cached.inner.calls.load(Ordering::SeqCst), 3);
        block_on(cached.highlight("b", &options)).unwrap();
        assert_eq!(cached.inner.calls.load(Ordering::SeqCst), 4);
        assert_eq!(cached.len(), 2);
    }

    #[test]
    fn zero_capacity_caches_nothing() {
        let cached = CachedHighlighter::with_capacity(MarkerHighlighter::default(), 0);
        let options = HighlightOptions::new("js", "t");

        block_on(cached.highlight("a", &options)).unwrap();
        block_on(cached.highlight("a", &options)).unwrap();

        assert!(cached.is_empty());
        assert_eq!(cached.inner.calls.load(Ordering::SeqCst), 2);
    }
}
