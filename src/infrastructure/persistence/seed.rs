//! Demo data loaded into an empty store at startup.

use crate::domain::entities::NewUser;
use crate::domain::repositories::UserRepository;
use crate::error::AppError;

/// Inserts the demo users if the repository is empty.
///
/// Returns the number of rows inserted (0 when the store already had data).
///
/// # Errors
///
/// Propagates repository errors.
pub async fn seed_if_empty<R: UserRepository + ?Sized>(repository: &R) -> Result<usize, AppError> {
    if repository.count().await? > 0 {
        return Ok(0);
    }

    let demo = [
        ("Alan", "Z", "alan@example.com"),
        ("David", "S", "david@example.com"),
    ];

    for (first_name, last_name, email) in demo {
        repository
            .insert(NewUser {
                first_name: first_name.to_string(),
                last_name: last_name.to_string(),
                email: email.to_string(),
                date_of_birth: None,
                is_active: true,
            })
            .await?;
    }

    tracing::info!(count = demo.len(), "Seeded demo users");
    Ok(demo.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::persistence::InMemoryUserRepository;

    #[tokio::test]
    async fn test_seeds_empty_store() {
        let repo = InMemoryUserRepository::new();

        assert_eq!(seed_if_empty(&repo).await.unwrap(), 2);
        assert_eq!(repo.count().await.unwrap(), 2);

        let alan = repo.find_by_id(1).await.unwrap().unwrap();
        assert_eq!(alan.email, "alan@example.com");
        assert!(alan.is_active);
    }

    #[tokio::test]
    async fn test_seed_is_idempotent() {
        let repo = InMemoryUserRepository::new();

        seed_if_empty(&repo).await.unwrap();
        assert_eq!(seed_if_empty(&repo).await.unwrap(), 0);
        assert_eq!(repo.count().await.unwrap(), 2);
    }
}
