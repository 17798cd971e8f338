//! Process-local implementation of the user repository.

use async_trait::async_trait;
use std::collections::BTreeMap;
use tokio::sync::RwLock;

use crate::domain::entities::{NewUser, User};
use crate::domain::repositories::{UserFilter, UserRepository};
use crate::error::AppError;

#[derive(Debug)]
struct Table {
    next_id: i64,
    rows: BTreeMap<i64, User>,
}

/// In-memory user table.
///
/// Rows live in a `BTreeMap` keyed by id, so iteration order is ascending id.
/// Ids start at 1 and are never reused, even after a delete.
/// All access goes through a single `RwLock`; the guard is never held across
/// an await point.
#[derive(Debug)]
pub struct InMemoryUserRepository {
    table: RwLock<Table>,
}

impl InMemoryUserRepository {
    /// Creates an empty repository.
    pub fn new() -> Self {
        Self {
            table: RwLock::new(Table {
                next_id: 1,
                rows: BTreeMap::new(),
            }),
        }
    }
}

impl Default for InMemoryUserRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn list(
        &self,
        filter: UserFilter,
        offset: u64,
        limit: u64,
    ) -> Result<(Vec<User>, u64), AppError> {
        let table = self.table.read().await;

        let matching: Vec<&User> = match filter.search.as_deref() {
            Some(needle) => table.rows.values().filter(|u| u.matches(needle)).collect(),
            None => table.rows.values().collect(),
        };

        let total = matching.len() as u64;
        let items = matching
            .into_iter()
            .skip(usize::try_from(offset).unwrap_or(usize::MAX))
            .take(usize::try_from(limit).unwrap_or(usize::MAX))
            .cloned()
            .collect();

        Ok((items, total))
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<User>, AppError> {
        Ok(self.table.read().await.rows.get(&id).cloned())
    }

    async fn insert(&self, new_user: NewUser) -> Result<User, AppError> {
        let mut table = self.table.write().await;

        let id = table.next_id;
        table.next_id = id
            .checked_add(1)
            .ok_or_else(|| AppError::internal("user id space exhausted"))?;

        let user = new_user.into_user(id);
        table.rows.insert(id, user.clone());

        Ok(user)
    }

    async fn update(&self, user: User) -> Result<(), AppError> {
        let mut table = self.table.write().await;

        match table.rows.get_mut(&user.id) {
            Some(row) => {
                *row = user;
                Ok(())
            }
            None => Err(AppError::not_found(format!("User {} not found.", user.id))),
        }
    }

    async fn delete(&self, id: i64) -> Result<bool, AppError> {
        let removed = self.table.write().await.rows.remove(&id).is_some();
        if removed {
            tracing::debug!(id, "user row removed");
        }
        Ok(removed)
    }

    async fn count(&self) -> Result<u64, AppError> {
        Ok(self.table.read().await.rows.len() as u64)
    }
}
