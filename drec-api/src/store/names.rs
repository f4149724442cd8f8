//! Name-only entity stores (artists, labels)
//!
//! Both tables share the same shape, so one store serves both behind a
//! table selector enum. Static table names keep the SQL parameterized.

use drec_common::types::{NameList, NameRecord};
use drec_common::{Error, Result};
use sqlx::SqlitePool;

/// Which name table a query targets
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NameTable {
    Artists,
    Labels,
}

impl NameTable {
    fn table(self) -> &'static str {
        match self {
            NameTable::Artists => "artists",
            NameTable::Labels => "labels",
        }
    }
}

/// List names matching an optional substring query, newest id first.
pub async fn list(
    pool: &SqlitePool,
    table: NameTable,
    q: &str,
    page: i64,
    limit: i64,
) -> Result<NameList> {
    let q = q.trim();
    let clause = if q.is_empty() { "1=1" } else { "name LIKE ?" };
    let like = format!("%{}%", q);
    let offset = (page - 1) * limit;

    let count_sql = format!("SELECT COUNT(*) FROM {} WHERE {}", table.table(), clause);
    let mut count_query = sqlx::query_scalar::<_, i64>(&count_sql);
    if !q.is_empty() {
        count_query = count_query.bind(&like);
    }
    let total = count_query.fetch_one(pool).await?;

    let page_sql = format!(
        "SELECT id, name FROM {} WHERE {} ORDER BY id DESC LIMIT ? OFFSET ?",
        table.table(),
        clause
    );
    let mut page_query = sqlx::query_as::<_, (i64, String)>(&page_sql);
    if !q.is_empty() {
        page_query = page_query.bind(&like);
    }
    let rows = page_query.bind(limit).bind(offset).fetch_all(pool).await?;

    Ok(NameList {
        items: rows
            .into_iter()
            .map(|(id, name)| NameRecord { id, name })
            .collect(),
        page,
        limit,
        total,
        mock: false,
    })
}

/// Create a name entry; empty names are rejected.
pub async fn create(pool: &SqlitePool, table: NameTable, name: &str) -> Result<NameRecord> {
    let name = name.trim();
    if name.is_empty() {
        return Err(Error::Validation("Name is required".to_string()));
    }

    let sql = format!("INSERT INTO {} (name) VALUES (?)", table.table());
    let result = sqlx::query(&sql).bind(name).execute(pool).await?;

    Ok(NameRecord {
        id: result.last_insert_rowid(),
        name: name.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use sqlx::sqlite::SqlitePoolOptions;

    async fn test_pool() -> SqlitePool {
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect("sqlite::memory:")
            .await
            .unwrap();
        drec_common::db::run_migrations(&pool).await.unwrap();
        pool
    }

    #[tokio::test]
    async fn test_name_search_and_ordering() {
        let pool = test_pool().await;
        create(&pool, NameTable::Labels, "Swar Digital").await.unwrap();
        create(&pool, NameTable::Labels, "Independent").await.unwrap();

        let all = list(&pool, NameTable::Labels, "", 1, 20).await.unwrap();
        assert_eq!(all.total, 2);
        // Newest id first
        assert_eq!(all.items[0].name, "Independent");

        let matched = list(&pool, NameTable::Labels, "swar", 1, 20).await.unwrap();
        assert_eq!(matched.total, 1);
        assert_eq!(matched.items[0].name, "Swar Digital");
    }

    #[tokio::test]
    async fn test_tables_are_independent() {
        let pool = test_pool().await;
        create(&pool, NameTable::Artists, "Kuldeep Mahto").await.unwrap();

        let labels = list(&pool, NameTable::Labels, "", 1, 20).await.unwrap();
        assert_eq!(labels.total, 0);
        let artists = list(&pool, NameTable::Artists, "", 1, 20).await.unwrap();
        assert_eq!(artists.total, 1);
    }

    #[tokio::test]
    async fn test_empty_name_rejected() {
        let pool = test_pool().await;
        let err = create(&pool, NameTable::Artists, "  ").await.unwrap_err();
        assert!(matches!(err, Error::Validation(_)));
    }
}
