use diesel::prelude::*;
use diesel::r2d2::{self, ConnectionManager, PooledConnection};
use diesel_migrations::{embed_migrations, EmbeddedMigrations, MigrationHarness};

use crate::error::ApiError;
use crate::models::todo::{Todo, TodoInput};
use crate::repository::schema::todos::dsl::*;

pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!();

type DBPool = r2d2::Pool<ConnectionManager<PgConnection>>;
type DBConnection = PooledConnection<ConnectionManager<PgConnection>>;

/// Handle over the connection pool. Constructed once at startup from the
/// connection string and injected into the HTTP layer as app data; dropped
/// with it on shutdown.
#[derive(Clone)]
pub struct Database {
    pool: DBPool,
}

impl Database {
    pub fn new(database_url: &str) -> Result<Self, ApiError> {
        let manager = ConnectionManager::<PgConnection>::new(database_url);
        let pool: DBPool = r2d2::Pool::builder().build(manager)?;
        Ok(Database { pool })
    }

    /// Applies any pending embedded migrations. Run once at startup so a
    /// fresh database is usable immediately.
    pub fn run_migrations(&self) -> Result<(), ApiError> {
        let mut conn = self.conn()?;
        conn.run_pending_migrations(MIGRATIONS)
            .map_err(|e| ApiError::Migration(e.to_string()))?;
        Ok(())
    }

    // One connection per statement; the guard returns it to the pool on
    // every exit path.
    fn conn(&self) -> Result<DBConnection, ApiError> {
        Ok(self.pool.get()?)
    }

    pub fn get_todos(&self) -> Result<Vec<Todo>, ApiError> {
        Ok(todos.load::<Todo>(&mut self.conn()?)?)
    }

    pub fn get_todo_by_id(&self, todo_id: i32) -> Result<Option<Todo>, ApiError> {
        Ok(todos
            .find(todo_id)
            .get_result::<Todo>(&mut self.conn()?)
            .optional()?)
    }

    pub fn create_todo(&self, input: TodoInput) -> Result<Todo, ApiError> {
        Ok(diesel::insert_into(todos)
            .values(&input)
            .get_result::<Todo>(&mut self.conn()?)?)
    }

    /// Full replacement of `text` and `completed`. No row is written when
    /// the id does not exist (no upsert).
    pub fn update_todo_by_id(
        &self,
        todo_id: i32,
        input: TodoInput,
    ) -> Result<Option<Todo>, ApiError> {
        Ok(diesel::update(todos.find(todo_id))
            .set(&input)
            .get_result::<Todo>(&mut self.conn()?)
            .optional()?)
    }

    /// Removes the row if present and returns its prior state.
    pub fn delete_todo_by_id(&self, todo_id: i32) -> Result<Option<Todo>, ApiError> {
        Ok(diesel::delete(todos.find(todo_id))
            .get_result::<Todo>(&mut self.conn()?)
            .optional()?)
    }
}
