//! Page-index surface cache bookkeeping.
//!
//! Generic over the surface type so the identity/invalidation rules are
//! unit-testable without a live window; the registry instantiates it with
//! real webview handles.

use std::collections::HashMap;

/// Maps page index to that page's ordered content surfaces.
///
/// Invariants: at most one live sequence per index; `get_or_create`
/// returns the cached sequence untouched (scroll/session state survives
/// page switches); `invalidate_all` drains every sequence in one step so
/// a following `get_or_create` always builds fresh.
pub struct PageCache<S> {
    pages: HashMap<usize, Vec<S>>,
    attached: Option<usize>,
}

impl<S> PageCache<S> {
    pub fn new() -> Self {
        Self {
            pages: HashMap::new(),
            attached: None,
        }
    }

    pub fn contains(&self, page: usize) -> bool {
        self.pages.contains_key(&page)
    }

    /// The cached sequence for `page`, building it with `build` on a miss.
    pub fn get_or_create<F>(&mut self, page: usize, build: F) -> &mut Vec<S>
    where
        F: FnOnce() -> Vec<S>,
    {
        self.pages.entry(page).or_insert_with(build)
    }

    pub fn get(&self, page: usize) -> Option<&[S]> {
        self.pages.get(&page).map(|v| v.as_slice())
    }

    pub fn get_mut(&mut self, page: usize) -> Option<&mut Vec<S>> {
        self.pages.get_mut(&page)
    }

    /// Drain every cached surface for destruction and clear the map.
    /// Destroy-and-clear is one logical step; the attached slot resets too.
    pub fn invalidate_all(&mut self) -> Vec<S> {
        self.attached = None;
        self.pages.drain().flat_map(|(_, surfaces)| surfaces).collect()
    }

    /// Page currently attached to the host window, if any.
    pub fn attached(&self) -> Option<usize> {
        self.attached
    }

    /// Mark `page` attached, returning the previously attached index.
    pub fn attach(&mut self, page: usize) -> Option<usize> {
        self.attached.replace(page)
    }

    pub fn detach(&mut self) -> Option<usize> {
        self.attached.take()
    }

    pub fn cached_pages(&self) -> usize {
        self.pages.len()
    }

    /// Iterate over every cached surface, regardless of page.
    pub fn surfaces_mut(&mut self) -> impl Iterator<Item = &mut S> {
        self.pages.values_mut().flatten()
    }
}

impl<S> Default for PageCache<S> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Stand-in surface with observable identity.
    #[derive(Debug, PartialEq, Eq, Clone, Copy)]
    struct Mock(u32);

    #[test]
    fn get_or_create_builds_once_and_returns_same_identities() {
        let mut cache: PageCache<Mock> = PageCache::new();
        let mut builds = 0;

        let first: Vec<Mock> = cache
            .get_or_create(0, || {
                builds += 1;
                vec![Mock(1), Mock(2)]
            })
            .clone();

        let second: Vec<Mock> = cache
            .get_or_create(0, || {
                builds += 1;
                vec![Mock(99)]
            })
            .clone();

        assert_eq!(builds, 1, "second call must reuse the cached sequence");
        assert_eq!(first, second);
    }

    #[test]
    fn distinct_pages_have_distinct_sequences() {
        let mut cache: PageCache<Mock> = PageCache::new();
        cache.get_or_create(0, || vec![Mock(1)]);
        cache.get_or_create(1, || vec![Mock(2)]);
        assert_eq!(cache.get(0).unwrap(), &[Mock(1)]);
        assert_eq!(cache.get(1).unwrap(), &[Mock(2)]);
        assert_eq!(cache.cached_pages(), 2);
    }

    #[test]
    fn invalidate_then_get_or_create_builds_fresh() {
        let mut cache: PageCache<Mock> = PageCache::new();
        cache.get_or_create(0, || vec![Mock(1), Mock(2)]);

        let drained = cache.invalidate_all();
        assert_eq!(drained.len(), 2);
        assert_eq!(cache.cached_pages(), 0);

        let fresh = cache.get_or_create(0, || vec![Mock(7)]);
        assert_eq!(fresh.as_slice(), &[Mock(7)], "post-invalidate build is fresh");
    }

    #[test]
    fn invalidate_resets_attached_slot() {
        let mut cache: PageCache<Mock> = PageCache::new();
        cache.get_or_create(0, || vec![Mock(1)]);
        cache.attach(0);
        cache.invalidate_all();
        assert_eq!(cache.attached(), None);
    }

    #[test]
    fn attach_replaces_and_reports_previous() {
        let mut cache: PageCache<Mock> = PageCache::new();
        assert_eq!(cache.attach(0), None);
        assert_eq!(cache.attach(1), Some(0));
        assert_eq!(cache.attached(), Some(1));
        assert_eq!(cache.detach(), Some(1));
        assert_eq!(cache.detach(), None);
    }

    #[test]
    fn empty_sequences_are_cached_too() {
        // A page whose items all lacked URLs still occupies its slot, so
        // switching back does not retry creation every time.
        let mut cache: PageCache<Mock> = PageCache::new();
        cache.get_or_create(3, Vec::new);
        assert!(cache.contains(3));
        assert_eq!(cache.get(3).unwrap().len(), 0);
    }
}
