use crate::error::TfamError;
use crate::filter::FilterSet;
use crate::record::RecordSet;
use crate::stats::{EntryLength, Report, N50};

use itertools::Itertools;
use std::str::FromStr;

pub const DEFAULT_NAME_PREFIX: &str = "seq";

/// The transformations which can be applied to a FASTA file.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Action {
    /// all sequence uppercase
    Uppercase,
    /// all sequence lowercase
    Lowercase,
    /// drop records listed in the filter set
    Remove,
    /// keep only records listed in the filter set
    Keep,
    /// rename every record to `<prefix><n>`, counting from 1
    Renumerate,
    /// report the N50 instead of writing records
    N50,
    /// report the length of every record instead of writing records
    Len,
}

/// Every identifier accepted on the command line, with the action it selects.
const REGISTRY: &[(&str, Action)] = &[
    ("upper", Action::Uppercase),
    ("lower", Action::Lowercase),
    ("remove", Action::Remove),
    ("keep", Action::Keep),
    ("renumerate", Action::Renumerate),
    ("rename", Action::Renumerate),
    ("N50", Action::N50),
    ("n50", Action::N50),
    ("len", Action::Len),
];

/// The accepted identifiers, in registry order.
pub fn identifiers() -> impl Iterator<Item = &'static str> {
    REGISTRY.iter().map(|(name, _)| *name)
}

impl FromStr for Action {
    type Err = TfamError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        REGISTRY
            .iter()
            .find(|(name, _)| *name == s)
            .map(|(_, action)| *action)
            .ok_or_else(|| TfamError::UnknownAction {
                action: s.to_string(),
                available: identifiers().join(", "),
            })
    }
}

/// Settings shared by all actions.
///
/// # Fields
///
/// * `filter_set` - Headers used by `Remove` and `Keep`. `None` behaves as an empty set.
/// * `name_prefix` - Prefix used by `Renumerate`.
#[derive(Clone, Debug)]
pub struct Options {
    pub filter_set: Option<FilterSet>,
    pub name_prefix: String,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            filter_set: None,
            name_prefix: DEFAULT_NAME_PREFIX.to_string(),
        }
    }
}

/// The result of applying an action.
#[derive(Debug, PartialEq, Eq)]
pub enum Outcome {
    /// The records were changed and should now be written out.
    Transformed(RecordSet),
    /// The action produced a report; the records are not written.
    Report(Report),
}

impl Action {
    /// Whether this action produces a report rather than records.
    pub fn is_report(&self) -> bool {
        matches!(self, Action::N50 | Action::Len)
    }

    /// Applies the action to `records`, which are consumed.
    pub fn apply(&self, mut records: RecordSet, opts: &Options) -> Outcome {
        match self {
            Action::Uppercase => {
                records
                    .iter_mut()
                    .for_each(|r| r.sequence = r.sequence.to_uppercase());
            }
            Action::Lowercase => {
                records
                    .iter_mut()
                    .for_each(|r| r.sequence = r.sequence.to_lowercase());
            }
            Action::Remove => {
                // an absent or empty set removes nothing
                if let Some(filter) = &opts.filter_set {
                    records.retain(|r| !filter.contains(&r.header));
                }
            }
            Action::Keep => match &opts.filter_set {
                Some(filter) => records.retain(|r| filter.contains(&r.header)),
                None => records.clear(),
            },
            Action::Renumerate => {
                for (i, r) in records.iter_mut().enumerate() {
                    r.header = format!("{}{}", opts.name_prefix, i + 1);
                }
            }
            Action::N50 => {
                return Outcome::Report(N50::from_records(&records).into_iter().collect());
            }
            Action::Len => {
                return Outcome::Report(EntryLength::table(&records).into_iter().collect());
            }
        }

        Outcome::Transformed(records)
    }
}
