//! 账户相关类型定义

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// Opaque account attributes. Everything except `id` lives here untouched.
pub type AccountFields = serde_json::Map<String, serde_json::Value>;

/// Account identifier, assigned by the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AccountId(i64);

impl AccountId {
    #[must_use]
    pub const fn new(id: i64) -> Self {
        Self(id)
    }

    #[must_use]
    pub const fn get(self) -> i64 {
        self.0
    }
}

impl From<i64> for AccountId {
    fn from(id: i64) -> Self {
        Self(id)
    }
}

impl fmt::Display for AccountId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl FromStr for AccountId {
    type Err = CoreError;

    /// Parse a path segment. Anything that is not a base-10 `i64` is rejected.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse::<i64>()
            .map(Self)
            .map_err(|_| CoreError::InvalidAccountId(s.to_string()))
    }
}

/// 账户信息
///
/// Returned by the store, so the id is always present.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Account {
    /// 账户 ID
    pub id: AccountId,
    /// 其余字段（透传，不做解释）
    #[serde(flatten)]
    pub fields: AccountFields,
}

impl Account {
    #[must_use]
    pub fn new(id: AccountId, fields: AccountFields) -> Self {
        Self { id, fields }
    }

    /// Turn a stored account back into a payload addressed at the same id.
    #[must_use]
    pub fn into_payload(self) -> AccountPayload {
        AccountPayload {
            id: Some(self.id),
            fields: self.fields,
        }
    }
}

/// Account as submitted by a client.
///
/// `id` may be absent or `null`; the store assigns one on save.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AccountPayload {
    #[serde(default)]
    pub id: Option<AccountId>,
    #[serde(flatten)]
    pub fields: AccountFields,
}

impl AccountPayload {
    #[must_use]
    pub fn new(fields: AccountFields) -> Self {
        Self { id: None, fields }
    }

    /// Replace whatever id the payload carried.
    #[must_use]
    pub fn with_id(mut self, id: AccountId) -> Self {
        self.id = Some(id);
        self
    }
}
