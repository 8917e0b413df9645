use diesel_migrations::{EmbeddedMigrations, MigrationHarness, embed_migrations};
use pushkind_senders::db::{DbPool, establish_connection_pool};
use tempfile::TempDir;

pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!("./migrations");

/// Migrated SQLite database living in a temporary directory.
pub struct TestDb {
    _dir: TempDir,
    path: String,
    pool: DbPool,
}

impl TestDb {
    pub fn new(filename: &str) -> Self {
        let _ = env_logger::builder().is_test(true).try_init();

        let dir = tempfile::tempdir().expect("create temp dir");
        let path = dir
            .path()
            .join(filename)
            .to_str()
            .expect("utf-8 temp path")
            .to_string();
        let pool = establish_connection_pool(&path).expect("create pool");

        let mut conn = pool.get().expect("get connection");
        conn.run_pending_migrations(MIGRATIONS)
            .expect("run migrations");

        Self {
            _dir: dir,
            path,
            pool,
        }
    }

    pub fn pool(&self) -> DbPool {
        self.pool.clone()
    }

    #[allow(dead_code)]
    pub fn path(&self) -> &str {
        &self.path
    }
}
