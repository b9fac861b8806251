//! `AccountStore` implementation for `SqliteStore`.

use async_trait::async_trait;
use sea_orm::sea_query::OnConflict;
use sea_orm::{
    ActiveModelTrait,
    ActiveValue::{NotSet, Set},
    EntityTrait, QueryOrder,
};

use account_api_core::error::{CoreError, CoreResult};
use account_api_core::traits::AccountStore;
use account_api_core::types::{Account, AccountFields, AccountId, AccountPayload};

use super::SqliteStore;
use super::entity::account;

impl account::Model {
    /// Convert a `SeaORM` row model into a domain `Account`.
    ///
    /// The `fields` column must hold a JSON object.
    fn into_account(self) -> CoreResult<Account> {
        let fields: AccountFields = serde_json::from_str(&self.fields).map_err(|e| {
            CoreError::SerializationError(format!("Invalid fields for account {}: {e}", self.id))
        })?;
        Ok(Account::new(AccountId::new(self.id), fields))
    }
}

fn encode_fields(fields: &AccountFields) -> CoreResult<String> {
    serde_json::to_string(fields).map_err(|e| CoreError::SerializationError(e.to_string()))
}

#[async_trait]
impl AccountStore for SqliteStore {
    async fn find_all(&self) -> CoreResult<Vec<Account>> {
        let rows = account::Entity::find()
            .order_by_asc(account::Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| CoreError::StorageError(format!("Failed to query accounts: {e}")))?;

        rows.into_iter().map(account::Model::into_account).collect()
    }

    async fn find_by_id(&self, id: AccountId) -> CoreResult<Option<Account>> {
        let row = account::Entity::find_by_id(id.get())
            .one(&self.db)
            .await
            .map_err(|e| CoreError::StorageError(format!("Failed to query account: {e}")))?;

        row.map(account::Model::into_account).transpose()
    }

    async fn save(&self, payload: AccountPayload) -> CoreResult<Account> {
        let encoded = encode_fields(&payload.fields)?;

        let Some(id) = payload.id else {
            let model = account::ActiveModel {
                id: NotSet,
                fields: Set(encoded),
            }
            .insert(&self.db)
            .await
            .map_err(|e| CoreError::StorageError(format!("Failed to insert account: {e}")))?;

            log::debug!("Inserted account {}", model.id);
            return model.into_account();
        };

        let active_model = account::ActiveModel {
            id: Set(id.get()),
            fields: Set(encoded),
        };
        account::Entity::insert(active_model)
            .on_conflict(
                OnConflict::column(account::Column::Id)
                    .update_column(account::Column::Fields)
                    .to_owned(),
            )
            .exec(&self.db)
            .await
            .map_err(|e| CoreError::StorageError(format!("Failed to save account: {e}")))?;

        log::debug!("Upserted account {id}");
        Ok(Account::new(id, payload.fields))
    }

    async fn delete(&self, account: &Account) -> CoreResult<()> {
        let result = account::Entity::delete_by_id(account.id.get())
            .exec(&self.db)
            .await
            .map_err(|e| CoreError::StorageError(format!("Failed to delete account: {e}")))?;

        if result.rows_affected == 0 {
            log::debug!("Account {} already absent on delete", account.id);
        }
        Ok(())
    }
}
