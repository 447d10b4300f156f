//! `SQLite` implementation of [`LocationRepository`].

use sqlx::sqlite::SqliteRow;
use sqlx::{FromRow, Row, SqlitePool};

use staffhub_app::ports::LocationRepository;
use staffhub_domain::error::{ConflictError, StaffHubError};
use staffhub_domain::id::LocationId;
use staffhub_domain::location::{LatLng, Location, NewLocation};

use crate::error::StorageError;

/// Wrapper for converting database rows into domain [`Location`].
struct Wrapper(Location);

impl Wrapper {
    fn maybe(value: Option<Self>) -> Option<Location> {
        value.map(|w| w.0)
    }
}

impl<'r> FromRow<'r, SqliteRow> for Wrapper {
    fn from_row(row: &'r SqliteRow) -> Result<Self, sqlx::Error> {
        let id: i64 = row.try_get("id")?;
        let name: String = row.try_get("name")?;
        let lat: f64 = row.try_get("lat")?;
        let lng: f64 = row.try_get("lng")?;
        let address: String = row.try_get("address")?;

        Ok(Self(Location {
            id: LocationId::new(id),
            name,
            lat_lng: LatLng::new(lat, lng),
            address,
        }))
    }
}

// A NULL id lets SQLite assign the next rowid.
const INSERT: &str =
    "INSERT INTO locations (id, name, lat, lng, address) VALUES (?, ?, ?, ?, ?) RETURNING id";
const SELECT_BY_ID: &str = "SELECT * FROM locations WHERE id = ?";
const SELECT_ALL: &str = "SELECT * FROM locations ORDER BY id";
const UPDATE: &str = "UPDATE locations SET name = ?, lat = ?, lng = ?, address = ? WHERE id = ?";
const DELETE_BY_ID: &str = "DELETE FROM locations WHERE id = ?";
const COUNT_EMPLOYEES: &str = "SELECT COUNT(*) FROM employees WHERE location_id = ?";

fn is_unique_violation(err: &sqlx::Error) -> bool {
    err.as_database_error()
        .is_some_and(|db| db.is_unique_violation())
}

fn is_foreign_key_violation(err: &sqlx::Error) -> bool {
    err.as_database_error()
        .is_some_and(|db| db.is_foreign_key_violation())
}

/// `SQLite`-backed location repository.
pub struct SqliteLocationRepository {
    pool: SqlitePool,
}

impl SqliteLocationRepository {
    /// Create a new repository using the given connection pool.
    #[must_use]
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

impl LocationRepository for SqliteLocationRepository {
    async fn create(&self, location: NewLocation) -> Result<Location, StaffHubError> {
        let id: i64 = sqlx::query_scalar(INSERT)
            .bind(location.id.map(LocationId::get))
            .bind(&location.name)
            .bind(location.lat_lng.lat)
            .bind(location.lat_lng.lng)
            .bind(&location.address)
            .fetch_one(&self.pool)
            .await
            .map_err(|err| match location.id {
                Some(id) if is_unique_violation(&err) => {
                    StaffHubError::from(ConflictError::LocationExists { id })
                }
                _ => StaffHubError::from(StorageError::from(err)),
            })?;

        Ok(location.into_location(LocationId::new(id)))
    }

    async fn get_by_id(&self, id: LocationId) -> Result<Option<Location>, StaffHubError> {
        let row: Option<Wrapper> = sqlx::query_as(SELECT_BY_ID)
            .bind(id.get())
            .fetch_optional(&self.pool)
            .await
            .map_err(StorageError::from)?;

        Ok(Wrapper::maybe(row))
    }

    async fn get_all(&self) -> Result<Vec<Location>, StaffHubError> {
        let rows: Vec<Wrapper> = sqlx::query_as(SELECT_ALL)
            .fetch_all(&self.pool)
            .await
            .map_err(StorageError::from)?;

        Ok(rows.into_iter().map(|w| w.0).collect())
    }

    async fn update(&self, location: Location) -> Result<Location, StaffHubError> {
        sqlx::query(UPDATE)
            .bind(&location.name)
            .bind(location.lat_lng.lat)
            .bind(location.lat_lng.lng)
            .bind(&location.address)
            .bind(location.id.get())
            .execute(&self.pool)
            .await
            .map_err(StorageError::from)?;

        Ok(location)
    }

    async fn delete(&self, id: LocationId) -> Result<bool, StaffHubError> {
        let result = match sqlx::query(DELETE_BY_ID)
            .bind(id.get())
            .execute(&self.pool)
            .await
        {
            Ok(result) => result,
            Err(err) if is_foreign_key_violation(&err) => {
                let employees: i64 = sqlx::query_scalar(COUNT_EMPLOYEES)
                    .bind(id.get())
                    .fetch_one(&self.pool)
                    .await
                    .map_err(StorageError::from)?;
                return Err(ConflictError::LocationInUse {
                    id,
                    employees: usize::try_from(employees).unwrap_or_default(),
                }
                .into());
            }
            Err(err) => return Err(StorageError::from(err).into()),
        };

        Ok(result.rows_affected() > 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pool::Config;

    async fn setup() -> SqliteLocationRepository {
        let db = Config {
            database_url: "sqlite::memory:".to_string(),
        }
        .build()
        .await
        .unwrap();
        SqliteLocationRepository::new(db.pool().clone())
    }

    fn entrada() -> NewLocation {
        NewLocation::new(
            "OCSO Entrada",
            LatLng::new(12.0, -140.0),
            "Entrada Av. 5, Querétaro, México",
        )
    }

    #[tokio::test]
    async fn should_assign_sequential_ids_when_none_requested() {
        let repo = setup().await;
        let first = repo.create(entrada()).await.unwrap();
        let second = repo.create(entrada()).await.unwrap();

        assert!(second.id > first.id);
    }

    #[tokio::test]
    async fn should_create_and_retrieve_location_with_requested_id() {
        let repo = setup().await;
        let created = repo
            .create(entrada().with_id(LocationId::new(13)))
            .await
            .unwrap();
        assert_eq!(created.id, LocationId::new(13));

        let fetched = repo.get_by_id(LocationId::new(13)).await.unwrap().unwrap();
        assert_eq!(fetched, created);
    }

    #[tokio::test]
    async fn should_return_none_when_location_not_found() {
        let repo = setup().await;
        let result = repo.get_by_id(LocationId::new(404)).await.unwrap();
        assert!(result.is_none());
    }

    #[tokio::test]
    async fn should_list_all_locations_in_id_order() {
        let repo = setup().await;
        repo.create(entrada().with_id(LocationId::new(20)))
            .await
            .unwrap();
        repo.create(entrada().with_id(LocationId::new(3)))
            .await
            .unwrap();

        let ids: Vec<LocationId> = repo
            .get_all()
            .await
            .unwrap()
            .into_iter()
            .map(|l| l.id)
            .collect();
        assert_eq!(ids, vec![LocationId::new(3), LocationId::new(20)]);
    }

    #[tokio::test]
    async fn should_update_location_when_exists() {
        let repo = setup().await;
        let mut location = repo.create(entrada()).await.unwrap();

        location.name = "OCSO Salida".to_string();
        location.lat_lng = LatLng::new(20.59, -100.39);
        repo.update(location.clone()).await.unwrap();

        let fetched = repo.get_by_id(location.id).await.unwrap().unwrap();
        assert_eq!(fetched, location);
    }

    #[tokio::test]
    async fn should_report_whether_delete_removed_a_row() {
        let repo = setup().await;
        let location = repo.create(entrada()).await.unwrap();

        assert!(repo.delete(location.id).await.unwrap());
        assert!(!repo.delete(location.id).await.unwrap());
        assert!(repo.get_by_id(location.id).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn should_return_conflict_when_requested_id_already_stored() {
        let repo = setup().await;
        repo.create(entrada().with_id(LocationId::new(13)))
            .await
            .unwrap();

        let result = repo.create(entrada().with_id(LocationId::new(13))).await;
        assert!(matches!(
            result,
            Err(StaffHubError::Conflict(ConflictError::LocationExists { id }))
                if id == LocationId::new(13)
        ));
    }

    #[tokio::test]
    async fn should_return_conflict_when_deleting_referenced_location() {
        let repo = setup().await;
        let location = repo.create(entrada()).await.unwrap();
        let insert = "INSERT INTO employees (id, name, email, location_id) VALUES (?, ?, ?, ?)";
        for (id, name) in [("a", "Karlo"), ("b", "Ana")] {
            sqlx::query(insert)
                .bind(id)
                .bind(name)
                .bind("staff@email.com")
                .bind(location.id.get())
                .execute(&repo.pool)
                .await
                .unwrap();
        }

        let result = repo.delete(location.id).await;
        assert!(matches!(
            result,
            Err(StaffHubError::Conflict(ConflictError::LocationInUse { employees: 2, .. }))
        ));
        assert!(repo.get_by_id(location.id).await.unwrap().is_some());
    }
}
