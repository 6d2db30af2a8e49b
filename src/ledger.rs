//! Request Ledger
//!
//! Records every lookup of a key made with a default value, so that a key
//! asked for with different defaults in different parts of a program can be
//! found after the fact. The ledger is purely advisory: nothing here fails,
//! and conflicts are only reported when asked for.

use crate::request::Request;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::collections::{BTreeMap, BTreeSet};
use std::io::{self, Write};

/// Per-key sets of recorded requests, ordered by key.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RequestLedger {
    requests: BTreeMap<String, BTreeSet<Request>>,
}

impl RequestLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a request. Identical requests collapse into one entry.
    pub fn record(&mut self, request: Request) {
        self.requests
            .entry(request.key().to_string())
            .or_default()
            .insert(request);
    }

    /// Union of both ledgers, per key.
    pub fn merge(&mut self, other: &RequestLedger) {
        for (key, requests) in &other.requests {
            self.requests
                .entry(key.clone())
                .or_default()
                .extend(requests.iter().cloned());
        }
    }

    /// All requests recorded for `key`.
    pub fn requests(&self, key: &str) -> Option<&BTreeSet<Request>> {
        self.requests.get(key)
    }

    /// Recorded keys, ascending.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.requests.keys().map(String::as_str)
    }

    /// Number of distinct recorded requests over all keys.
    pub fn len(&self) -> usize {
        self.requests.values().map(BTreeSet::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.requests.is_empty()
    }

    /// Requests for `key` if they disagree on the default value.
    ///
    /// Requests are compared on `(key, default)` only. If at most one default
    /// was ever used the result is empty; otherwise every recorded request
    /// for the key is returned, so each call site shows up in reports.
    pub fn mismatched_defaults(&self, key: &str) -> BTreeSet<Request> {
        match self.requests.get(key) {
            Some(requests) if has_conflict(requests) => requests.clone(),
            _ => BTreeSet::new(),
        }
    }

    /// [`RequestLedger::mismatched_defaults`] for every key, omitting keys
    /// without conflicts.
    pub fn mismatched_defaults_map(&self) -> BTreeMap<String, BTreeSet<Request>> {
        self.requests
            .iter()
            .filter(|(_, requests)| has_conflict(requests))
            .map(|(key, requests)| (key.clone(), requests.clone()))
            .collect()
    }

    /// Dump every recorded request, grouped by key.
    pub fn print_requests<W: Write + ?Sized>(&self, out: &mut W) -> io::Result<()> {
        print_grouped(out, &self.requests)
    }

    /// Dump the keys requested with differing defaults and their requests.
    pub fn print_mismatched_defaults<W: Write + ?Sized>(&self, out: &mut W) -> io::Result<()> {
        print_grouped(out, &self.mismatched_defaults_map())
    }
}

/// More than one request left after deduplicating on `(key, default)`.
fn has_conflict(requests: &BTreeSet<Request>) -> bool {
    let mut iter = requests.iter();
    match iter.next() {
        Some(first) => iter.any(|request| request.strict_cmp(first) != Ordering::Equal),
        None => false,
    }
}

fn print_grouped<W: Write + ?Sized>(
    out: &mut W,
    groups: &BTreeMap<String, BTreeSet<Request>>,
) -> io::Result<()> {
    for (key, requests) in groups {
        writeln!(out, "{}", key)?;
        for request in requests {
            writeln!(out, "  {}", request)?;
        }
    }
    Ok(())
}
