//! `SQLite` implementation of [`EmployeeRepository`].

use std::str::FromStr;

use sqlx::sqlite::SqliteRow;
use sqlx::{FromRow, Row, SqlitePool};

use staffhub_app::ports::EmployeeRepository;
use staffhub_domain::employee::Employee;
use staffhub_domain::error::StaffHubError;
use staffhub_domain::id::{EmployeeId, LocationId};

use crate::error::StorageError;

/// Wrapper for converting database rows into domain types without polluting
/// domain structs with database concerns.
struct Wrapper(Employee);

impl Wrapper {
    fn maybe(value: Option<Self>) -> Option<Employee> {
        value.map(|w| w.0)
    }
}

impl<'r> FromRow<'r, SqliteRow> for Wrapper {
    fn from_row(row: &'r SqliteRow) -> Result<Self, sqlx::Error> {
        let id: String = row.try_get("id")?;
        let name: String = row.try_get("name")?;
        let email: String = row.try_get("email")?;
        let location_id: i64 = row.try_get("location_id")?;

        let id = EmployeeId::from_str(&id).map_err(|err| sqlx::Error::Decode(Box::new(err)))?;

        Ok(Self(Employee {
            id,
            name,
            email,
            location_id: LocationId::new(location_id),
        }))
    }
}

const INSERT: &str = "INSERT INTO employees (id, name, email, location_id) VALUES (?, ?, ?, ?)";
const SELECT_BY_ID: &str = "SELECT * FROM employees WHERE id = ?";
const SELECT_ALL: &str = "SELECT * FROM employees ORDER BY rowid";
const SELECT_BY_LOCATION: &str = "SELECT * FROM employees WHERE location_id = ? ORDER BY rowid";
const UPDATE: &str = "UPDATE employees SET name = ?, email = ?, location_id = ? WHERE id = ?";
const DELETE_BY_ID: &str = "DELETE FROM employees WHERE id = ?";

/// `SQLite`-backed employee repository.
pub struct SqliteEmployeeRepository {
    pool: SqlitePool,
}

impl SqliteEmployeeRepository {
    /// Create a new repository using the given connection pool.
    #[must_use]
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

impl EmployeeRepository for SqliteEmployeeRepository {
    async fn create(&self, employee: Employee) -> Result<Employee, StaffHubError> {
        sqlx::query(INSERT)
            .bind(employee.id.to_string())
            .bind(&employee.name)
            .bind(&employee.email)
            .bind(employee.location_id.get())
            .execute(&self.pool)
            .await
            .map_err(StorageError::from)?;

        Ok(employee)
    }

    async fn get_by_id(&self, id: EmployeeId) -> Result<Option<Employee>, StaffHubError> {
        let row: Option<Wrapper> = sqlx::query_as(SELECT_BY_ID)
            .bind(id.to_string())
            .fetch_optional(&self.pool)
            .await
            .map_err(StorageError::from)?;

        Ok(Wrapper::maybe(row))
    }

    async fn get_all(&self) -> Result<Vec<Employee>, StaffHubError> {
        let rows: Vec<Wrapper> = sqlx::query_as(SELECT_ALL)
            .fetch_all(&self.pool)
            .await
            .map_err(StorageError::from)?;

        Ok(rows.into_iter().map(|w| w.0).collect())
    }

    async fn find_by_location(
        &self,
        location_id: LocationId,
    ) -> Result<Vec<Employee>, StaffHubError> {
        let rows: Vec<Wrapper> = sqlx::query_as(SELECT_BY_LOCATION)
            .bind(location_id.get())
            .fetch_all(&self.pool)
            .await
            .map_err(StorageError::from)?;

        Ok(rows.into_iter().map(|w| w.0).collect())
    }

    async fn update(&self, employee: Employee) -> Result<Employee, StaffHubError> {
        sqlx::query(UPDATE)
            .bind(&employee.name)
            .bind(&employee.email)
            .bind(employee.location_id.get())
            .bind(employee.id.to_string())
            .execute(&self.pool)
            .await
            .map_err(StorageError::from)?;

        Ok(employee)
    }

    async fn delete(&self, id: EmployeeId) -> Result<bool, StaffHubError> {
        let result = sqlx::query(DELETE_BY_ID)
            .bind(id.to_string())
            .execute(&self.pool)
            .await
            .map_err(StorageError::from)?;

        Ok(result.rows_affected() > 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::location_repo::SqliteLocationRepository;
    use crate::pool::Config;
    use staffhub_app::ports::LocationRepository;
    use staffhub_domain::location::{LatLng, NewLocation};

    async fn setup() -> SqliteEmployeeRepository {
        let db = Config {
            database_url: "sqlite::memory:".to_string(),
        }
        .build()
        .await
        .unwrap();
        let locations = SqliteLocationRepository::new(db.pool().clone());
        for (id, name) in [(13, "OCSO Entrada"), (14, "Almacén")] {
            locations
                .create(
                    NewLocation::new(name, LatLng::new(12.0, -140.0), "Querétaro, México")
                        .with_id(LocationId::new(id)),
                )
                .await
                .unwrap();
        }
        SqliteEmployeeRepository::new(db.pool().clone())
    }

    fn employee(name: &str, location: i64) -> Employee {
        Employee::builder()
            .name(name)
            .email(format!("{}@email.com", name.to_lowercase()))
            .location_id(LocationId::new(location))
            .build()
            .unwrap()
    }

    #[tokio::test]
    async fn should_create_and_retrieve_employee_when_valid() {
        let repo = setup().await;
        let karlo = employee("Karlo", 13);

        repo.create(karlo.clone()).await.unwrap();

        let fetched = repo.get_by_id(karlo.id).await.unwrap().unwrap();
        assert_eq!(fetched, karlo);
    }

    #[tokio::test]
    async fn should_return_none_when_employee_not_found() {
        let repo = setup().await;
        let result = repo.get_by_id(EmployeeId::new()).await.unwrap();
        assert!(result.is_none());
    }

    #[tokio::test]
    async fn should_list_all_employees() {
        let repo = setup().await;
        repo.create(employee("Karlo", 13)).await.unwrap();
        repo.create(employee("Ana", 14)).await.unwrap();

        let all = repo.get_all().await.unwrap();
        assert_eq!(all.len(), 2);
    }

    #[tokio::test]
    async fn should_filter_employees_by_location() {
        let repo = setup().await;
        let karlo = employee("Karlo", 13);
        repo.create(karlo.clone()).await.unwrap();
        repo.create(employee("Ana", 14)).await.unwrap();

        let found = repo.find_by_location(LocationId::new(13)).await.unwrap();
        assert_eq!(found, vec![karlo]);
    }

    #[tokio::test]
    async fn should_reject_reference_to_missing_location() {
        let repo = setup().await;
        let result = repo.create(employee("Karlo", 99)).await;
        assert!(matches!(result, Err(StaffHubError::Storage(_))));
    }

    #[tokio::test]
    async fn should_update_employee_when_exists() {
        let repo = setup().await;
        let mut karlo = employee("Karlo", 13);
        repo.create(karlo.clone()).await.unwrap();

        karlo.email = "karlo@work.mx".to_string();
        karlo.location_id = LocationId::new(14);
        repo.update(karlo.clone()).await.unwrap();

        let fetched = repo.get_by_id(karlo.id).await.unwrap().unwrap();
        assert_eq!(fetched, karlo);
    }

    #[tokio::test]
    async fn should_delete_employee_when_exists() {
        let repo = setup().await;
        let karlo = employee("Karlo", 13);
        repo.create(karlo.clone()).await.unwrap();

        assert!(repo.delete(karlo.id).await.unwrap());
        assert!(repo.get_by_id(karlo.id).await.unwrap().is_none());
        assert!(!repo.delete(karlo.id).await.unwrap());
    }
}
