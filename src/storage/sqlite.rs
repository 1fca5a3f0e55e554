/// SQLite implementation of the habit storage interface
///
/// This module provides the concrete SQLite implementation for storing
/// and retrieving users, habits and completions. It handles all SQL
/// queries and data conversion.

use std::path::Path;

use chrono::{DateTime, NaiveDate, Utc};
use rusqlite::{params, Connection};

use crate::domain::{Completion, Habit, HabitId, Periodicity, User, UserId};
use crate::storage::{migrations, HabitStore, StorageError};

/// SQLite-based storage implementation
///
/// This struct holds a connection to the SQLite database and implements
/// all the storage operations defined in the HabitStore trait.
pub struct SqliteStore {
    conn: Connection,
}

impl SqliteStore {
    /// Create a new SQLite storage instance
    ///
    /// This opens the database file and runs any necessary migrations
    /// to ensure the schema is up to date.
    pub fn new<P: AsRef<Path>>(db_path: P) -> Result<Self, StorageError> {
        let conn = Connection::open(&db_path)
            .map_err(|e| StorageError::Connection(format!("Failed to open database: {}", e)))?;

        // Cascading deletes require foreign keys to be on
        conn.execute("PRAGMA foreign_keys = ON", [])
            .map_err(|e| StorageError::Connection(format!("Failed to enable foreign keys: {}", e)))?;

        migrations::initialize_database(&conn)?;

        tracing::info!("SQLite storage initialized at: {:?}", db_path.as_ref());

        Ok(Self { conn })
    }

    /// Open an in-memory database, mainly for tests
    pub fn open_in_memory() -> Result<Self, StorageError> {
        let conn = Connection::open_in_memory()
            .map_err(|e| StorageError::Connection(format!("Failed to open database: {}", e)))?;
        conn.execute("PRAGMA foreign_keys = ON", [])
            .map_err(|e| StorageError::Connection(format!("Failed to enable foreign keys: {}", e)))?;
        migrations::initialize_database(&conn)?;
        Ok(Self { conn })
    }

    fn is_constraint_violation(err: &rusqlite::Error) -> bool {
        matches!(
            err,
            rusqlite::Error::SqliteFailure(e, _)
                if e.code == rusqlite::ErrorCode::ConstraintViolation
        )
    }

    /// Map a habits row to the domain type
    fn habit_from_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<Habit> {
        let periodicity_str: String = row.get(3)?;
        let periodicity: Periodicity = periodicity_str.parse().map_err(|e| {
            rusqlite::Error::FromSqlConversionFailure(
                3,
                rusqlite::types::Type::Text,
                Box::new(e),
            )
        })?;

        Ok(Habit::from_existing(
            HabitId(row.get(0)?),
            UserId(row.get(1)?),
            row.get(2)?,
            periodicity,
            row.get::<_, DateTime<Utc>>(4)?,
        ))
    }
}

impl HabitStore for SqliteStore {
    fn create_user(&self, name: &str) -> Result<User, StorageError> {
        self.conn
            .execute("INSERT INTO users (name) VALUES (?1)", params![name])
            .map_err(|e| {
                if Self::is_constraint_violation(&e) {
                    StorageError::DuplicateUser {
                        name: name.to_string(),
                    }
                } else {
                    StorageError::Query(e)
                }
            })?;

        let id = UserId(self.conn.last_insert_rowid());
        tracing::debug!("Created user: {} ({})", name, id);
        Ok(User::from_existing(id, name.to_string()))
    }

    fn find_user(&self, name: &str) -> Result<User, StorageError> {
        let result = self.conn.query_row(
            "SELECT id, name FROM users WHERE name = ?1",
            params![name],
            |row| Ok(User::from_existing(UserId(row.get(0)?), row.get(1)?)),
        );

        match result {
            Ok(user) => Ok(user),
            Err(rusqlite::Error::QueryReturnedNoRows) => Err(StorageError::UserNotFound {
                name: name.to_string(),
            }),
            Err(e) => Err(StorageError::Query(e)),
        }
    }

    fn list_users(&self) -> Result<Vec<User>, StorageError> {
        let mut stmt = self
            .conn
            .prepare("SELECT id, name FROM users ORDER BY name")?;
        let user_iter = stmt.query_map([], |row| {
            Ok(User::from_existing(UserId(row.get(0)?), row.get(1)?))
        })?;

        let mut users = Vec::new();
        for user in user_iter {
            users.push(user?);
        }
        Ok(users)
    }

    fn create_habit(
        &self,
        user_id: UserId,
        name: &str,
        periodicity: Periodicity,
        created_at: DateTime<Utc>,
    ) -> Result<Habit, StorageError> {
        self.conn
            .execute(
                "INSERT INTO habits (user_id, name, periodicity, created_at)
                 VALUES (?1, ?2, ?3, ?4)",
                params![user_id.0, name, periodicity.as_str(), created_at],
            )
            .map_err(|e| {
                if Self::is_constraint_violation(&e) {
                    StorageError::DuplicateHabit {
                        name: name.to_string(),
                    }
                } else {
                    StorageError::Query(e)
                }
            })?;

        let id = HabitId(self.conn.last_insert_rowid());
        tracing::debug!("Created habit: {} ({})", name, id);
        Ok(Habit::from_existing(
            id,
            user_id,
            name.to_string(),
            periodicity,
            created_at,
        ))
    }

    fn find_habit(&self, user_id: UserId, name: &str) -> Result<Habit, StorageError> {
        let result = self.conn.query_row(
            "SELECT id, user_id, name, periodicity, created_at
             FROM habits WHERE user_id = ?1 AND name = ?2",
            params![user_id.0, name],
            Self::habit_from_row,
        );

        match result {
            Ok(habit) => Ok(habit),
            Err(rusqlite::Error::QueryReturnedNoRows) => Err(StorageError::HabitNotFound {
                name: name.to_string(),
            }),
            Err(e) => Err(StorageError::Query(e)),
        }
    }

    fn habits_for_user(&self, user_id: UserId) -> Result<Vec<Habit>, StorageError> {
        let mut stmt = self.conn.prepare(
            "SELECT id, user_id, name, periodicity, created_at
             FROM habits WHERE user_id = ?1 ORDER BY created_at, id",
        )?;
        let habit_iter = stmt.query_map(params![user_id.0], Self::habit_from_row)?;

        let mut habits = Vec::new();
        for habit in habit_iter {
            habits.push(habit?);
        }
        Ok(habits)
    }

    fn rename_habit(&self, habit_id: HabitId, new_name: &str) -> Result<(), StorageError> {
        let rows_affected = self
            .conn
            .execute(
                "UPDATE habits SET name = ?2 WHERE id = ?1",
                params![habit_id.0, new_name],
            )
            .map_err(|e| {
                if Self::is_constraint_violation(&e) {
                    StorageError::DuplicateHabit {
                        name: new_name.to_string(),
                    }
                } else {
                    StorageError::Query(e)
                }
            })?;

        if rows_affected == 0 {
            return Err(StorageError::HabitNotFound {
                name: habit_id.to_string(),
            });
        }

        tracing::debug!("Renamed habit {} to {}", habit_id, new_name);
        Ok(())
    }

    fn change_periodicity(
        &self,
        habit_id: HabitId,
        periodicity: Periodicity,
    ) -> Result<(), StorageError> {
        let rows_affected = self.conn.execute(
            "UPDATE habits SET periodicity = ?2 WHERE id = ?1",
            params![habit_id.0, periodicity.as_str()],
        )?;

        if rows_affected == 0 {
            return Err(StorageError::HabitNotFound {
                name: habit_id.to_string(),
            });
        }

        tracing::debug!("Changed periodicity of habit {} to {}", habit_id, periodicity);
        Ok(())
    }

    fn delete_habit(&self, habit_id: HabitId) -> Result<(), StorageError> {
        let rows_affected = self
            .conn
            .execute("DELETE FROM habits WHERE id = ?1", params![habit_id.0])?;

        if rows_affected == 0 {
            return Err(StorageError::HabitNotFound {
                name: habit_id.to_string(),
            });
        }

        tracing::debug!("Deleted habit {}", habit_id);
        Ok(())
    }

    fn add_completion(&self, completion: &Completion) -> Result<(), StorageError> {
        self.conn.execute(
            "INSERT INTO completions (habit_id, completed_at, logged_at)
             VALUES (?1, ?2, ?3)",
            params![
                completion.habit_id.0,
                completion.completed_at,
                completion.logged_at
            ],
        )?;

        tracing::debug!(
            "Recorded completion of habit {} on {}",
            completion.habit_id,
            completion.completed_at
        );
        Ok(())
    }

    fn completion_dates(&self, habit_id: HabitId) -> Result<Vec<NaiveDate>, StorageError> {
        let mut stmt = self
            .conn
            .prepare("SELECT completed_at FROM completions WHERE habit_id = ?1")?;
        let date_iter = stmt.query_map(params![habit_id.0], |row| row.get::<_, NaiveDate>(0))?;

        let mut dates = Vec::new();
        for date in date_iter {
            dates.push(date?);
        }
        Ok(dates)
    }

    fn last_completion(&self, habit_id: HabitId) -> Result<Option<DateTime<Utc>>, StorageError> {
        let result = self.conn.query_row(
            "SELECT logged_at FROM completions WHERE habit_id = ?1
             ORDER BY completed_at DESC, logged_at DESC LIMIT 1",
            params![habit_id.0],
            |row| row.get::<_, DateTime<Utc>>(0),
        );

        match result {
            Ok(logged_at) => Ok(Some(logged_at)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(StorageError::Query(e)),
        }
    }
}
