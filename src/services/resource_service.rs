// src/services/resource_service.rs
// DOCUMENTATION: Business logic shared by every resource
// PURPOSE: One store call per operation, outcome mapped onto HTTP-level results

use crate::db::{DataStore, Order, StoreError};
use crate::errors::GatewayError;
use crate::models::{DeletedResponse, Resource};
use serde_json::Value;

/// Rows are returned exactly as the store sent them; only request payloads are typed
pub struct ResourceService;

impl ResourceService {
    /// List all rows, newest first
    pub async fn list<R: Resource>(store: &dyn DataStore) -> Result<Vec<Value>, GatewayError> {
        Ok(store.select(R::TABLE, Order::NEWEST_FIRST).await?)
    }

    /// Insert one row and return it with its store-assigned id and timestamp
    pub async fn create<R: Resource>(
        store: &dyn DataStore,
        payload: R::Payload,
    ) -> Result<Value, GatewayError> {
        let row = encode(&payload)?;
        let created = store.insert(R::TABLE, vec![row]).await?;

        created.into_iter().next().ok_or_else(|| {
            StoreError::new(format!("Insert into {} returned no rows", R::TABLE)).into()
        })
    }

    /// Overwrite the payload columns of row `id`
    /// DOCUMENTATION: A successful call that matched nothing becomes NotFound
    pub async fn update<R: Resource>(
        store: &dyn DataStore,
        id: &str,
        payload: R::Payload,
    ) -> Result<Value, GatewayError> {
        let fields = encode(&payload)?;

        match store.update(R::TABLE, id, fields).await? {
            Some(row) => Ok(row),
            None => {
                log::info!("Update on {} matched no row for id {}", R::TABLE, id);
                Err(GatewayError::NotFound(R::LABEL))
            }
        }
    }

    /// Delete row `id`; confirms even when nothing was deleted
    pub async fn delete<R: Resource>(
        store: &dyn DataStore,
        id: &str,
    ) -> Result<DeletedResponse, GatewayError> {
        store.delete(R::TABLE, id).await?;
        Ok(DeletedResponse::for_resource(R::LABEL))
    }
}

fn encode<P: serde::Serialize>(payload: &P) -> Result<Value, GatewayError> {
    serde_json::to_value(payload).map_err(|e| {
        log::error!("Failed to encode payload: {}", e);
        GatewayError::InternalError
    })
}
