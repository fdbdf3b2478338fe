//! Request-scoped identity used to enrich log entries.
//!
//! # Responsibilities
//! - Carry tenant (`orgID`) and user (`userID`) identifiers for a request
//! - Read them from inbound header pairs
//! - Turn them into log fields
//!
//! Identifiers absent from the context are simply left out of the fields.

use crate::log::{Fields, Value};

/// Header carrying the tenant identifier.
pub const ORG_ID_HEADER: &str = "X-Scope-OrgID";
/// Header carrying the user identifier.
pub const USER_ID_HEADER: &str = "X-Scope-UserID";

/// Field key for the tenant identifier.
pub const ORG_ID_FIELD: &str = "orgID";
/// Field key for the user identifier.
pub const USER_ID_FIELD: &str = "userID";

/// Anything that can contribute fields to a log entry.
pub trait FieldSource {
    fn log_fields(&self) -> Fields;
}

impl FieldSource for Fields {
    fn log_fields(&self) -> Fields {
        self.clone()
    }
}

/// Identity of the request being served.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RequestContext {
    pub org_id: Option<String>,
    pub user_id: Option<String>,
    extra: Fields,
}

impl RequestContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_org_id(mut self, org_id: impl Into<String>) -> Self {
        self.org_id = Some(org_id.into());
        self
    }

    pub fn with_user_id(mut self, user_id: impl Into<String>) -> Self {
        self.user_id = Some(user_id.into());
        self
    }

    /// Attach an additional field that every entry for this request carries.
    pub fn with_field(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.extra.insert(key, value);
        self
    }

    /// Build a context from request header name/value pairs.
    /// Header names match case-insensitively; empty values are ignored.
    pub fn from_headers<'a, I>(headers: I) -> Self
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let mut ctx = Self::new();
        for (name, value) in headers {
            let value = value.trim();
            if value.is_empty() {
                continue;
            }
            if name.eq_ignore_ascii_case(ORG_ID_HEADER) {
                ctx.org_id = Some(value.to_string());
            } else if name.eq_ignore_ascii_case(USER_ID_HEADER) {
                ctx.user_id = Some(value.to_string());
            }
        }
        ctx
    }
}

impl FieldSource for RequestContext {
    fn log_fields(&self) -> Fields {
        let mut fields = self.extra.clone();
        if let Some(user_id) = &self.user_id {
            fields.insert(USER_ID_FIELD, user_id.as_str());
        }
        if let Some(org_id) = &self.org_id {
            fields.insert(ORG_ID_FIELD, org_id.as_str());
        }
        fields
    }
}
