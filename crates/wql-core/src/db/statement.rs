use std::fmt;
use thiserror::Error as ThisError;

///
/// StatementError
///

#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
pub enum StatementError {
    #[error("wql: no query specified")]
    Empty,

    #[error("wql: expected select, found {found:?}")]
    ExpectedSelect { found: String },

    #[error("wql: no columns specified")]
    NoColumns,

    #[error("wql: expected from")]
    MissingFrom,

    #[error("wql: expected a class name after from")]
    MissingClass,
}

///
/// Columns
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Columns {
    /// `*`
    All,
    Named(Vec<String>),
}

///
/// SelectStatement
///
/// `SELECT <columns> FROM <class> [<predicate>]`, split at the word level.
/// The predicate is kept verbatim (whitespace-normalized) and never
/// interpreted.
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SelectStatement {
    pub columns: Columns,
    pub class: String,
    pub predicate: Option<String>,
}

impl SelectStatement {
    pub fn parse(text: &str) -> Result<Self, StatementError> {
        Self::from_words(text.split_whitespace())
    }

    /// Parse pre-split words, as handed over by a command line.
    pub fn from_words<'a>(words: impl IntoIterator<Item = &'a str>) -> Result<Self, StatementError> {
        let mut words = words.into_iter();

        let first = words.next().ok_or(StatementError::Empty)?;
        if !first.eq_ignore_ascii_case("select") {
            return Err(StatementError::ExpectedSelect {
                found: first.to_string(),
            });
        }

        let mut names = Vec::new();
        let mut wildcard = false;
        let mut found_from = false;
        for word in words.by_ref() {
            if word.eq_ignore_ascii_case("from") {
                found_from = true;
                break;
            }
            for part in word.split(',').filter(|part| !part.is_empty()) {
                if part == "*" {
                    wildcard = true;
                } else {
                    names.push(part.to_string());
                }
            }
        }

        if names.is_empty() && !wildcard {
            return Err(StatementError::NoColumns);
        }
        if !found_from {
            return Err(StatementError::MissingFrom);
        }

        let class = words.next().ok_or(StatementError::MissingClass)?.to_string();
        let predicate = words.collect::<Vec<_>>().join(" ");

        Ok(Self {
            columns: if wildcard {
                Columns::All
            } else {
                Columns::Named(names)
            },
            class,
            predicate: (!predicate.is_empty()).then_some(predicate),
        })
    }
}

impl fmt::Display for SelectStatement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("SELECT ")?;
        match &self.columns {
            Columns::All => f.write_str("*")?,
            Columns::Named(names) => f.write_str(&names.join(", "))?,
        }
        write!(f, " FROM {}", self.class)?;
        if let Some(predicate) = &self.predicate {
            write!(f, " {predicate}")?;
        }

        Ok(())
    }
}
