// src/crawl/frontier.rs
// =============================================================================
// The crawl frontier: the breadth-first work queue plus the visited set.
//
// A URL moves through three places, never two at once:
//   pending  --pop()-->  in flight  --mark_visited()-->  visited
//
// add() refuses a URL that is in any of the three, so every URL is
// dequeued at most once per run. The queue is strict FIFO, which is what
// makes the traversal breadth-first.
//
// Rust concepts:
// - VecDeque: push_back() to enqueue, pop_front() to dequeue
// - HashSet: O(1) membership checks next to the ordered queue
// =============================================================================

use std::collections::{HashSet, VecDeque};
use tracing::debug;

// One unit of work: a URL and how many hops it is from a seed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrontierEntry {
    pub url: String,
    pub depth: usize,
}

#[derive(Debug, Default)]
pub struct Frontier {
    queue: VecDeque<FrontierEntry>,
    // Mirrors the URLs in `queue`
    pending: HashSet<String>,
    in_flight: HashSet<String>,
    visited: HashSet<String>,
}

impl Frontier {
    pub fn new() -> Self {
        Self::default()
    }

    // Puts the seed URLs on the queue at depth 0, in the order given
    //
    // Seeds skip the scheme check so a bad seed shows up as a failed page
    // instead of disappearing. Repeated seeds are only queued once.
    pub fn seed<I, S>(&mut self, urls: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for url in urls {
            let url = url.into();
            if self.pending.contains(&url) {
                debug!("Skipping repeated seed {}", url);
                continue;
            }
            self.push(url, 0);
        }
    }

    /// Queues `url` at `depth` if it is an http(s) URL the frontier has not seen yet.
    ///
    /// Returns true when the entry was accepted.
    pub fn add(&mut self, url: &str, depth: usize) -> bool {
        if !is_crawlable(url) {
            return false;
        }
        if self.visited.contains(url) || self.in_flight.contains(url) || self.pending.contains(url) {
            return false;
        }
        self.push(url.to_string(), depth);
        true
    }

    /// Removes the oldest entry. The URL stays "in flight" until `mark_visited`.
    pub fn pop(&mut self) -> Option<FrontierEntry> {
        let entry = self.queue.pop_front()?;
        self.pending.remove(&entry.url);
        self.in_flight.insert(entry.url.clone());
        Some(entry)
    }

    pub fn mark_visited(&mut self, url: &str) {
        self.in_flight.remove(url);
        self.visited.insert(url.to_string());
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    pub fn len(&self) -> usize {
        self.queue.len()
    }

    pub fn is_visited(&self, url: &str) -> bool {
        self.visited.contains(url)
    }

    pub fn is_pending(&self, url: &str) -> bool {
        self.pending.contains(url)
    }

    pub fn visited_count(&self) -> usize {
        self.visited.len()
    }

    /// Pending entries, head of the queue first.
    pub fn pending(&self) -> impl Iterator<Item = &FrontierEntry> {
        self.queue.iter()
    }

    fn push(&mut self, url: String, depth: usize) {
        self.pending.insert(url.clone());
        self.queue.push_back(FrontierEntry { url, depth });
    }
}

// Only non-empty http:// and https:// URLs are eligible
fn is_crawlable(url: &str) -> bool {
    !url.is_empty() && (url.starts_with("http://") || url.starts_with("https://"))
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. Why a HashSet next to the VecDeque?
//    - The VecDeque keeps the order (first in, first out)
//    - Asking a VecDeque "do you contain X?" means walking every entry
//    - The HashSet answers the same question in constant time
//    - push() and pop() keep the two in sync
//
// 2. What does `let entry = self.queue.pop_front()?;` do?
//    - pop_front() returns Option<FrontierEntry>
//    - The ? operator returns None from pop() early if the queue is empty
//    - Works on Option the same way it works on Result
//
// 3. Why `impl Iterator<Item = &FrontierEntry>`?
//    - Callers can walk the pending entries without us copying them
//    - The borrow checker stops anyone mutating the frontier meanwhile
// -----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn urls(frontier: &Frontier) -> Vec<String> {
        frontier.pending().map(|e| e.url.clone()).collect()
    }

    #[test]
    fn test_seed_keeps_order_at_depth_zero() {
        let mut frontier = Frontier::new();
        frontier.seed(["https://b.test/", "https://a.test/"]);

        assert_eq!(urls(&frontier), vec!["https://b.test/", "https://a.test/"]);
        assert!(frontier.pending().all(|e| e.depth == 0));
    }

    #[test]
    fn test_seed_skips_repeats() {
        let mut frontier = Frontier::new();
        frontier.seed(vec!["https://a.test/".to_string(), "https://a.test/".to_string()]);
        assert_eq!(frontier.len(), 1);
    }

    #[test]
    fn test_empty_seed_list() {
        let mut frontier = Frontier::new();
        frontier.seed(Vec::<String>::new());
        assert!(frontier.is_empty());
        assert_eq!(frontier.pop(), None);
    }

    #[test]
    fn test_add_rejects_other_schemes() {
        let mut frontier = Frontier::new();
        assert!(!frontier.add("", 1));
        assert!(!frontier.add("mailto:someone@x.test", 1));
        assert!(!frontier.add("javascript:void(0)", 1));
        assert!(!frontier.add("ftp://x.test/file", 1));
        assert!(!frontier.add("/relative/path", 1));
        assert!(frontier.is_empty());

        assert!(frontier.add("http://x.test/", 1));
        assert!(frontier.add("https://x.test/", 1));
        assert_eq!(frontier.len(), 2);
    }

    #[test]
    fn test_add_dedupes_pending() {
        let mut frontier = Frontier::new();
        assert!(frontier.add("https://x.test/c", 1));
        assert!(!frontier.add("https://x.test/c", 2));
        assert_eq!(frontier.len(), 1);
        assert_eq!(frontier.pop().unwrap().depth, 1);
    }

    #[test]
    fn test_add_rejects_visited_and_in_flight() {
        let mut frontier = Frontier::new();
        frontier.seed(["https://x.test/"]);

        let entry = frontier.pop().unwrap();
        // popped but not yet marked: still known
        assert!(!frontier.add(&entry.url, 1));
        assert!(!frontier.is_visited(&entry.url));

        frontier.mark_visited(&entry.url);
        assert!(frontier.is_visited(&entry.url));
        assert!(!frontier.add(&entry.url, 1));
        assert!(frontier.is_empty());
    }

    #[test]
    fn test_pop_is_fifo() {
        let mut frontier = Frontier::new();
        frontier.add("https://x.test/1", 1);
        frontier.add("https://x.test/2", 1);
        frontier.add("https://x.test/3", 2);

        let order: Vec<String> = std::iter::from_fn(|| frontier.pop()).map(|e| e.url).collect();
        assert_eq!(order, vec!["https://x.test/1", "https://x.test/2", "https://x.test/3"]);
    }

    #[test]
    fn test_mark_visited_is_idempotent() {
        let mut frontier = Frontier::new();
        frontier.mark_visited("https://x.test/");
        frontier.mark_visited("https://x.test/");
        assert_eq!(frontier.visited_count(), 1);
    }
}
