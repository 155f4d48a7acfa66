//! Fuzzy matching against the committed filter query
//!
//! Wraps nucleo-matcher's pattern scoring in a small, synchronous API: one
//! `FuzzyMatcher` per committed query, one `score` call per candidate cell.
//! Matching is case-insensitive and tolerant of partial and non-contiguous
//! input; the returned rank is comparable, higher meaning a closer match.

use nucleo_matcher::pattern::{AtomKind, CaseMatching, Normalization, Pattern};
use nucleo_matcher::{Config, Matcher, Utf32Str};
use std::fmt;

/// Verdict for one candidate string
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatchOutcome {
    /// Whether the candidate matches the query at all
    pub passed: bool,
    /// Match quality, comparable across candidates scored against the same
    /// query; 0 when the candidate did not pass
    pub rank: u32,
}

impl MatchOutcome {
    /// Outcome for a candidate the matcher rejected
    #[must_use]
    pub const fn failed() -> Self {
        Self {
            passed: false,
            rank: 0,
        }
    }

    /// Outcome for an unconditional top-rank pass (empty query)
    #[must_use]
    pub const fn top() -> Self {
        Self {
            passed: true,
            rank: u32::MAX,
        }
    }
}

/// Scores candidate strings against one committed query
///
/// The pattern is parsed once per query; `score` reuses the matcher's
/// internal buffers across candidates, so scoring a whole dataset allocates
/// very little.
pub struct FuzzyMatcher {
    matcher: Matcher,
    pattern: Option<Pattern>,
    query: String,
    buf: Vec<char>,
}

impl FuzzyMatcher {
    /// Compile a matcher for the given query
    ///
    /// An empty query matches everything with top rank.
    #[must_use]
    pub fn new(query: &str) -> Self {
        let pattern = if query.is_empty() {
            None
        } else {
            Some(Pattern::new(
                query,
                CaseMatching::Ignore,
                Normalization::Smart,
                AtomKind::Fuzzy,
            ))
        };

        Self {
            matcher: Matcher::new(Config::DEFAULT),
            pattern,
            query: query.to_string(),
            buf: Vec::new(),
        }
    }

    /// Score one candidate against the query
    #[must_use]
    pub fn score(&mut self, candidate: &str) -> MatchOutcome {
        let Some(pattern) = &self.pattern else {
            return MatchOutcome::top();
        };

        let haystack = Utf32Str::new(candidate, &mut self.buf);
        pattern
            .score(haystack, &mut self.matcher)
            .map_or_else(MatchOutcome::failed, |rank| MatchOutcome {
                passed: true,
                rank,
            })
    }

    /// The query this matcher was compiled for
    #[must_use]
    pub fn query(&self) -> &str {
        &self.query
    }

    /// Whether the matcher passes every candidate (empty query)
    #[must_use]
    pub const fn matches_all(&self) -> bool {
        self.pattern.is_none()
    }
}

impl fmt::Debug for FuzzyMatcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FuzzyMatcher")
            .field("query", &self.query)
            .field("matches_all", &self.matches_all())
            .finish_non_exhaustive()
    }
}
