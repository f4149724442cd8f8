//! Release store: filtered/sorted/paged listing and CRUD
//!
//! The list query composes free-text search (case-insensitive substring on
//! title OR artist), exact status match and one of three fixed orderings,
//! each stabilized by a secondary `id` key so equal sort keys still produce
//! a deterministic window.

use drec_common::types::{CreatedRelease, NewRelease, ReleaseList, ReleaseRecord, UpdateRelease};
use drec_common::{Error, ReleaseFilter, Result, SortOrder};
use sqlx::SqlitePool;

const SELECT_COLUMNS: &str =
    "SELECT id, title, primary_artist AS artist, status, DATE(created_at) AS date FROM releases";

#[derive(Debug, sqlx::FromRow)]
struct ReleaseRow {
    id: i64,
    title: String,
    artist: String,
    status: String,
    date: String,
}

impl From<ReleaseRow> for ReleaseRecord {
    fn from(row: ReleaseRow) -> Self {
        ReleaseRecord {
            id: row.id,
            title: row.title,
            artist: row.artist,
            status: row.status,
            date: row.date,
        }
    }
}

/// WHERE clause and bind values for a filter (shared by count and page queries)
fn filter_clause(filter: &ReleaseFilter) -> (String, Vec<String>) {
    let mut clause = String::from("1=1");
    let mut binds = Vec::new();

    let q = filter.q.trim();
    if !q.is_empty() {
        clause.push_str(" AND (title LIKE ? OR primary_artist LIKE ?)");
        let like = format!("%{}%", q);
        binds.push(like.clone());
        binds.push(like);
    }

    if !filter.status.is_any() {
        clause.push_str(" AND status = ?");
        binds.push(filter.status.as_str().to_string());
    }

    (clause, binds)
}

fn order_clause(sort: SortOrder) -> &'static str {
    match sort {
        SortOrder::Newest => "ORDER BY created_at DESC, id DESC",
        SortOrder::Oldest => "ORDER BY created_at ASC, id ASC",
        SortOrder::TitleAz => "ORDER BY title ASC, id ASC",
    }
}

/// List releases matching the filter: at most `page_size` rows starting at
/// the page offset, plus the total count over the whole filtered set.
pub async fn list(pool: &SqlitePool, filter: &ReleaseFilter) -> Result<ReleaseList> {
    let (clause, binds) = filter_clause(filter);

    let count_sql = format!("SELECT COUNT(*) FROM releases WHERE {}", clause);
    let mut count_query = sqlx::query_scalar::<_, i64>(&count_sql);
    for bind in &binds {
        count_query = count_query.bind(bind);
    }
    let total = count_query.fetch_one(pool).await?;

    let page_sql = format!(
        "{} WHERE {} {} LIMIT ? OFFSET ?",
        SELECT_COLUMNS,
        clause,
        order_clause(filter.sort)
    );
    let mut page_query = sqlx::query_as::<_, ReleaseRow>(&page_sql);
    for bind in &binds {
        page_query = page_query.bind(bind);
    }
    let rows = page_query
        .bind(filter.page_size)
        .bind(filter.offset())
        .fetch_all(pool)
        .await?;

    Ok(ReleaseList {
        items: rows.into_iter().map(ReleaseRecord::from).collect(),
        page: filter.page,
        limit: filter.page_size,
        total,
        mock: false,
    })
}

/// Create a release and its tracks in one transaction.
///
/// Tracks get a 1-based `order_index` from array position; a missing track
/// artist defaults to the release artist, a missing title to "Untitled".
pub async fn create(pool: &SqlitePool, req: &NewRelease) -> Result<CreatedRelease> {
    let title = req.title.trim();
    let artist = req.artist.trim();
    if title.is_empty() || artist.is_empty() {
        return Err(Error::Validation("title and artist are required".to_string()));
    }

    let status = req
        .status
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .unwrap_or("In Review")
        .to_string();

    let mut tx = pool.begin().await?;

    let result = sqlx::query("INSERT INTO releases (title, primary_artist, status) VALUES (?, ?, ?)")
        .bind(title)
        .bind(artist)
        .bind(&status)
        .execute(&mut *tx)
        .await?;
    let id = result.last_insert_rowid();

    for (i, track) in req.tracks.iter().enumerate() {
        let track_title = track
            .title
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .unwrap_or("Untitled");
        let track_artist = track
            .artist
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .unwrap_or(artist);

        sqlx::query(
            "INSERT INTO tracks (release_id, title, artist, duration_sec, order_index) \
             VALUES (?, ?, ?, ?, ?)",
        )
        .bind(id)
        .bind(track_title)
        .bind(track_artist)
        .bind(track.duration_sec.max(0))
        .bind((i + 1) as i64)
        .execute(&mut *tx)
        .await?;
    }

    tx.commit().await?;

    Ok(CreatedRelease {
        id,
        title: title.to_string(),
        artist: artist.to_string(),
        status,
    })
}

/// Fetch one release by id
pub async fn get(pool: &SqlitePool, id: i64) -> Result<ReleaseRecord> {
    let sql = format!("{} WHERE id = ?", SELECT_COLUMNS);
    let row = sqlx::query_as::<_, ReleaseRow>(&sql)
        .bind(id)
        .fetch_optional(pool)
        .await?;

    row.map(ReleaseRecord::from)
        .ok_or_else(|| Error::NotFound(format!("release {}", id)))
}

/// Update title and artist of a release. No existence check; updating a
/// missing id is a no-op acknowledged as success, matching delete semantics.
pub async fn update(pool: &SqlitePool, id: i64, req: &UpdateRelease) -> Result<()> {
    let title = req.title.trim();
    let artist = req.artist.trim();
    if title.is_empty() || artist.is_empty() {
        return Err(Error::Validation("title and artist required".to_string()));
    }

    sqlx::query(
        "UPDATE releases SET title = ?, primary_artist = ?, updated_at = CURRENT_TIMESTAMP \
         WHERE id = ?",
    )
    .bind(title)
    .bind(artist)
    .bind(id)
    .execute(pool)
    .await?;

    Ok(())
}

/// Delete a release. Unconditional and idempotent; deleting an absent id
/// succeeds. Tracks cascade via the foreign key.
pub async fn delete(pool: &SqlitePool, id: i64) -> Result<()> {
    sqlx::query("DELETE FROM releases WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await?;
    Ok(())
}
