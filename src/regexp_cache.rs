use std::sync::Arc;

use dashmap::DashMap;
use regex_automata::{
    MatchKind,
    dfa::{StartKind, dense},
    util::syntax,
};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum InvalidRegexError {
    #[error("An error occurred while trying to create regex: {0}")]
    Regex(#[from] regex::Error),
    #[error("An error occurred while trying to build prefix automaton: {0}")]
    Automaton(#[from] dense::BuildError),
}

pub type PrefixAutomaton = dense::DFA<Vec<u32>>;

pub struct RegexCache {
    cache: DashMap<String, Arc<regex::Regex>>
}

impl RegexCache {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            cache: DashMap::with_capacity(capacity),
        }
    }

    pub fn get_regex(&self, pattern: &str) -> Result<Arc<regex::Regex>, InvalidRegexError> {
        // the shard guard must be released before `entry` takes the write lock
        if let Some(regex) = self.cache.get(pattern).map(|r| r.value().clone()) {
            return Ok(regex);
        }
        let entry = self.cache.entry(pattern.to_string()).or_try_insert_with(|| {
            regex::Regex::new(pattern).map(Arc::new)
        })?;
        Ok(entry.value().clone())
    }

    /// Same as `get_regex` but the pattern has to match the whole input.
    pub fn get_full_match_regex(&self, pattern: &str) -> Result<Arc<regex::Regex>, InvalidRegexError> {
        self.get_regex(&fast_cat::concat_str!("^(?:", pattern, ")$"))
    }
}

/// Cache of anchored DFAs used to decide whether a digit prefix may still
/// grow into a full match.
pub struct PrefixAutomatonCache {
    cache: DashMap<String, Arc<PrefixAutomaton>>
}

impl PrefixAutomatonCache {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            cache: DashMap::with_capacity(capacity),
        }
    }

    pub fn get_automaton(&self, pattern: &str) -> Result<Arc<PrefixAutomaton>, InvalidRegexError> {
        if let Some(dfa) = self.cache.get(pattern).map(|r| r.value().clone()) {
            return Ok(dfa);
        }
        let entry = self.cache.entry(pattern.to_string()).or_try_insert_with(|| {
            build_prefix_automaton(pattern).map(Arc::new)
        })?;
        Ok(entry.value().clone())
    }
}

fn build_prefix_automaton(pattern: &str) -> Result<PrefixAutomaton, InvalidRegexError> {
    // MatchKind::All keeps every alternative alive, leftmost-first would kill
    // `12|123` after the first branch matched.
    let dfa = dense::Builder::new()
        .configure(
            dense::Config::new()
                .match_kind(MatchKind::All)
                .start_kind(StartKind::Anchored),
        )
        .syntax(syntax::Config::new().unicode(false).utf8(false))
        .build(pattern)?;
    Ok(dfa)
}
