use rustc_hash::FxHashSet;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum WhitelistLoadError {
    #[error(transparent)]
    Io(#[from] io::Error),
}

/// The set of view names to retain, loaded once from a whitelist file and
/// read-only afterwards.
///
/// The file is UTF-8 text with one record per line: the first
/// whitespace-delimited token of every non-blank line is a retained name,
/// any trailing tokens on the line are ignored.
#[derive(Debug, Default, Clone)]
pub struct FilterSet {
    names: FxHashSet<String>,
}

impl FilterSet {
    /// Reads a whitelist file. An unreadable file is an error, never an
    /// empty set; a readable file with no records parses to an empty set.
    pub fn load(path: impl AsRef<Path>) -> Result<FilterSet, WhitelistLoadError> {
        let file = File::open(path)?;
        Self::from_reader(BufReader::new(file))
    }

    pub fn from_reader(reader: impl BufRead) -> Result<FilterSet, WhitelistLoadError> {
        let mut names = FxHashSet::default();
        for line in reader.lines() {
            let line = line?;
            if let Some(name) = line.split_whitespace().next() {
                names.insert(name.to_string());
            }
        }
        Ok(FilterSet { names })
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names.contains(name)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

impl<S: Into<String>> FromIterator<S> for FilterSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> FilterSet {
        FilterSet {
            names: iter.into_iter().map(Into::into).collect(),
        }
    }
}
