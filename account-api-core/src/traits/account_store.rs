//! Account persistence abstract Trait

use std::collections::BTreeMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::error::{CoreError, CoreResult};
use crate::types::{Account, AccountId, AccountPayload};

/// Account store Trait
///
/// Implementations:
/// - `InMemoryAccountStore` (this module)
/// - `SqliteStore` (`account-api-storage`, `SeaORM`)
///
/// Every implementation must:
/// - list accounts in ascending id order
/// - assign fresh ids above every id the store has ever held
/// - treat `save` with an explicit id as insert-or-overwrite of the whole field set
/// - treat `delete` of a missing record as a no-op
#[async_trait]
pub trait AccountStore: Send + Sync {
    /// Get all accounts
    async fn find_all(&self) -> CoreResult<Vec<Account>>;

    /// Get account based on ID
    ///
    /// # Arguments
    /// * `id` - Account ID
    async fn find_by_id(&self, id: AccountId) -> CoreResult<Option<Account>>;

    /// Save account (new or update)
    ///
    /// Returns the persisted account with its id populated.
    ///
    /// # Arguments
    /// * `payload` - Account data, id optional
    async fn save(&self, payload: AccountPayload) -> CoreResult<Account>;

    /// Delete account
    ///
    /// # Arguments
    /// * `account` - The record to remove
    async fn delete(&self, account: &Account) -> CoreResult<()>;
}

#[derive(Default)]
struct Inner {
    accounts: BTreeMap<AccountId, Account>,
    /// Highest id ever handed out or saved explicitly.
    last_id: i64,
}

/// In-memory account store
///
/// Default implementation. Contents live as long as the process.
#[derive(Clone, Default)]
pub struct InMemoryAccountStore {
    inner: Arc<RwLock<Inner>>,
}

impl InMemoryAccountStore {
    /// Create an empty store
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl AccountStore for InMemoryAccountStore {
    async fn find_all(&self) -> CoreResult<Vec<Account>> {
        Ok(self.inner.read().await.accounts.values().cloned().collect())
    }

    async fn find_by_id(&self, id: AccountId) -> CoreResult<Option<Account>> {
        Ok(self.inner.read().await.accounts.get(&id).cloned())
    }

    async fn save(&self, payload: AccountPayload) -> CoreResult<Account> {
        let mut inner = self.inner.write().await;

        let id = match payload.id {
            Some(id) => {
                inner.last_id = inner.last_id.max(id.get());
                id
            }
            None => {
                inner.last_id = inner.last_id.checked_add(1).ok_or_else(|| {
                    CoreError::StorageError("account id space exhausted".to_string())
                })?;
                AccountId::new(inner.last_id)
            }
        };

        let account = Account::new(id, payload.fields);
        if inner.accounts.insert(id, account.clone()).is_some() {
            log::debug!("Overwrote account {id}");
        } else {
            log::debug!("Inserted account {id}");
        }
        Ok(account)
    }

    async fn delete(&self, account: &Account) -> CoreResult<()> {
        if self.inner.write().await.accounts.remove(&account.id).is_none() {
            log::debug!("Account {} already absent on delete", account.id);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::AccountFields;
    use serde_json::json;

    fn named(name: &str) -> AccountPayload {
        let mut fields = AccountFields::new();
        fields.insert("name".to_string(), json!(name));
        AccountPayload::new(fields)
    }

    #[tokio::test]
    async fn find_all_empty() {
        let store = InMemoryAccountStore::new();
        assert!(store.find_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn save_assigns_increasing_ids() {
        let store = InMemoryAccountStore::new();
        let a = store.save(named("Alice")).await.unwrap();
        let b = store.save(named("Bob")).await.unwrap();

        assert_eq!(a.id, AccountId::new(1));
        assert_eq!(b.id, AccountId::new(2));
        assert_eq!(b.fields["name"], "Bob");
    }

    #[tokio::test]
    async fn save_with_id_overwrites_all_fields() {
        let store = InMemoryAccountStore::new();
        let mut payload = named("Alice");
        payload.fields.insert("email".to_string(), json!("a@example.com"));
        let saved = store.save(payload).await.unwrap();

        let updated = store
            .save(named("Bob").with_id(saved.id))
            .await
            .unwrap();
        assert_eq!(updated.id, saved.id);

        let found = store.find_by_id(saved.id).await.unwrap().unwrap();
        assert_eq!(found.fields["name"], "Bob");
        assert!(!found.fields.contains_key("email"));
        assert_eq!(store.find_all().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn explicit_id_moves_counter_forward() {
        let store = InMemoryAccountStore::new();
        store
            .save(named("Pinned").with_id(AccountId::new(10)))
            .await
            .unwrap();
        let next = store.save(named("Fresh")).await.unwrap();
        assert_eq!(next.id, AccountId::new(11));
    }

    #[tokio::test]
    async fn exhausted_id_space_is_a_storage_error() {
        let store = InMemoryAccountStore::new();
        store
            .save(named("Last").with_id(AccountId::new(i64::MAX)))
            .await
            .unwrap();
        assert!(matches!(
            store.save(named("Overflow")).await,
            Err(CoreError::StorageError(_))
        ));
    }

    #[tokio::test]
    async fn ids_are_not_reused_after_delete() {
        let store = InMemoryAccountStore::new();
        let first = store.save(named("Alice")).await.unwrap();
        store.delete(&first).await.unwrap();

        let second = store.save(named("Bob")).await.unwrap();
        assert_ne!(first.id, second.id);
    }

    #[tokio::test]
    async fn find_all_is_ordered_by_id() {
        let store = InMemoryAccountStore::new();
        store
            .save(named("c").with_id(AccountId::new(30)))
            .await
            .unwrap();
        store
            .save(named("a").with_id(AccountId::new(10)))
            .await
            .unwrap();
        store
            .save(named("b").with_id(AccountId::new(20)))
            .await
            .unwrap();

        let ids: Vec<i64> = store
            .find_all()
            .await
            .unwrap()
            .into_iter()
            .map(|a| a.id.get())
            .collect();
        assert_eq!(ids, vec![10, 20, 30]);
    }

    #[tokio::test]
    async fn delete_removes_record_and_is_idempotent() {
        let store = InMemoryAccountStore::new();
        let saved = store.save(named("Alice")).await.unwrap();

        store.delete(&saved).await.unwrap();
        assert!(store.find_by_id(saved.id).await.unwrap().is_none());

        store.delete(&saved).await.unwrap();
    }

    #[tokio::test]
    async fn into_payload_round_trips_through_save() {
        let store = InMemoryAccountStore::new();
        let saved = store.save(named("Alice")).await.unwrap();

        let resaved = store.save(saved.clone().into_payload()).await.unwrap();
        assert_eq!(resaved, saved);
        assert_eq!(store.find_all().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn clones_share_contents() {
        let store = InMemoryAccountStore::new();
        let handle = store.clone();
        let saved = store.save(named("Alice")).await.unwrap();
        assert!(handle.find_by_id(saved.id).await.unwrap().is_some());
    }
}
