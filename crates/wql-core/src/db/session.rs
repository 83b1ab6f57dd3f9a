//! Session-layer boundary.
//!
//! The engine consumes these traits and never a concrete transport. Every
//! handle is released by `Drop`, so release runs on every exit path.

use crate::{bind::PropertySource, error::SessionError};
use std::fmt;

/// Namespace used when none is given.
pub const DEFAULT_NAMESPACE: &str = r"root\cimv2";

/// Server name for the local machine.
pub const LOCAL_SERVER: &str = ".";

///
/// Connector
///
/// Establishes sessions against a named target.
///

pub trait Connector {
    type Session: Session;

    fn connect(&self, args: &ConnectArgs) -> Result<Self::Session, SessionError>;
}

///
/// Session
///
/// An established connection scoped to one namespace on one machine.
///

pub trait Session {
    type Results: ResultSet;

    fn execute(&self, query: &str) -> Result<Self::Results, SessionError>;
}

///
/// ResultSet
///
/// Positional access to the records returned by one query.
///

pub trait ResultSet {
    type Item: PropertySource;

    fn count(&self) -> Result<usize, SessionError>;

    /// Fetch the record at `position`. The returned handle is released as
    /// soon as it is dropped.
    fn item(&self, position: usize) -> Result<Self::Item, SessionError>;
}

impl<C: Connector + ?Sized> Connector for &C {
    type Session = C::Session;

    fn connect(&self, args: &ConnectArgs) -> Result<Self::Session, SessionError> {
        (**self).connect(args)
    }
}

///
/// ConnectArgs
///
/// Optional overrides for the session target. Unset values fall back to
/// the local machine and [`DEFAULT_NAMESPACE`].
///

#[derive(Clone, Default, Eq, PartialEq)]
pub struct ConnectArgs {
    pub server: Option<String>,
    pub namespace: Option<String>,
    pub user: Option<String>,
    pub password: Option<String>,
    pub locale: Option<String>,
    pub authority: Option<String>,
}

impl ConnectArgs {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            server: None,
            namespace: None,
            user: None,
            password: None,
            locale: None,
            authority: None,
        }
    }

    #[must_use]
    pub fn server(mut self, server: impl Into<String>) -> Self {
        self.server = Some(server.into());
        self
    }

    #[must_use]
    pub fn namespace(mut self, namespace: impl Into<String>) -> Self {
        self.namespace = Some(namespace.into());
        self
    }

    #[must_use]
    pub fn credentials(mut self, user: impl Into<String>, password: impl Into<String>) -> Self {
        self.user = Some(user.into());
        self.password = Some(password.into());
        self
    }

    #[must_use]
    pub fn locale(mut self, locale: impl Into<String>) -> Self {
        self.locale = Some(locale.into());
        self
    }

    #[must_use]
    pub fn authority(mut self, authority: impl Into<String>) -> Self {
        self.authority = Some(authority.into());
        self
    }

    #[must_use]
    pub fn server_or_default(&self) -> &str {
        self.server.as_deref().unwrap_or(LOCAL_SERVER)
    }

    #[must_use]
    pub fn namespace_or_default(&self) -> &str {
        self.namespace.as_deref().unwrap_or(DEFAULT_NAMESPACE)
    }
}

impl fmt::Debug for ConnectArgs {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConnectArgs")
            .field("server", &self.server)
            .field("namespace", &self.namespace)
            .field("user", &self.user)
            .field("password", &self.password.as_ref().map(|_| "<redacted>"))
            .field("locale", &self.locale)
            .field("authority", &self.authority)
            .finish()
    }
}
