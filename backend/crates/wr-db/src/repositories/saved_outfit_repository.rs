use crate::repositories::columns::{parse_timestamp, parse_uuid};
use crate::{DbError, Result as DbErrorResult};

use wr_core::{OutfitTriple, SavedOutfit};

use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqliteConnection, SqlitePool};
use uuid::Uuid;

const TABLE: &str = "saved_outfits";

/// Result of a save/unsave toggle
#[derive(Debug, Clone, PartialEq)]
pub enum ToggleOutcome {
    Saved(SavedOutfit),
    Removed(Uuid),
}

impl ToggleOutcome {
    pub fn is_saved(&self) -> bool {
        matches!(self, Self::Saved(_))
    }

    pub fn outfit_id(&self) -> Uuid {
        match self {
            Self::Saved(outfit) => outfit.id,
            Self::Removed(id) => *id,
        }
    }
}

pub struct SavedOutfitRepository {
    pool: SqlitePool,
}

impl SavedOutfitRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Inserts the outfit. Returns false if the same triple was already saved.
    pub async fn create(&self, outfit: &SavedOutfit) -> DbErrorResult<bool> {
        let mut conn = self.pool.acquire().await?;
        insert_if_absent(&mut conn, outfit).await
    }

    pub async fn find_matching(
        &self,
        user_id: Uuid,
        triple: &OutfitTriple,
    ) -> DbErrorResult<Option<SavedOutfit>> {
        let mut conn = self.pool.acquire().await?;
        select_matching(&mut conn, user_id, triple).await
    }

    pub async fn delete(&self, user_id: Uuid, id: Uuid) -> DbErrorResult<bool> {
        let result = sqlx::query("DELETE FROM saved_outfits WHERE id = ? AND user_id = ?")
            .bind(id.to_string())
            .bind(user_id.to_string())
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    /// Newest first
    pub async fn list_by_user(&self, user_id: Uuid) -> DbErrorResult<Vec<SavedOutfit>> {
        let rows = sqlx::query(
            r#"
              SELECT id, user_id, top_item_id, bottom_item_id, shoes_item_id, created_at
              FROM saved_outfits
              WHERE user_id = ?
              ORDER BY created_at DESC, rowid DESC
              "#,
        )
        .bind(user_id.to_string())
        .fetch_all(&self.pool)
        .await?;

        rows.iter().map(map_outfit).collect()
    }

    /// Removes the saved triple if present, otherwise saves it.
    ///
    /// Runs in one `BEGIN IMMEDIATE` transaction, so concurrent toggles of the
    /// same triple take turns and each sees the other's result. The unique
    /// index still absorbs any insert that races past it.
    pub async fn toggle(
        &self,
        user_id: Uuid,
        triple: &OutfitTriple,
    ) -> DbErrorResult<ToggleOutcome> {
        let mut tx = self.pool.begin_with("BEGIN IMMEDIATE").await?;

        let outcome = match select_matching(&mut tx, user_id, triple).await? {
            Some(existing) => {
                sqlx::query("DELETE FROM saved_outfits WHERE id = ?")
                    .bind(existing.id.to_string())
                    .execute(&mut *tx)
                    .await?;
                ToggleOutcome::Removed(existing.id)
            }
            None => {
                let outfit = SavedOutfit::new(user_id, *triple);
                if insert_if_absent(&mut tx, &outfit).await? {
                    ToggleOutcome::Saved(outfit)
                } else {
                    let stored = select_matching(&mut tx, user_id, triple)
                        .await?
                        .ok_or_else(|| DbError::decode(TABLE, "conflicting row not found"))?;
                    ToggleOutcome::Saved(stored)
                }
            }
        };

        tx.commit().await?;

        Ok(outcome)
    }
}

async fn insert_if_absent(conn: &mut SqliteConnection, outfit: &SavedOutfit) -> DbErrorResult<bool> {
    let result = sqlx::query(
        r#"
          INSERT INTO saved_outfits (
              id, user_id, top_item_id, bottom_item_id, shoes_item_id, created_at
          ) VALUES (?, ?, ?, ?, ?, ?)
          ON CONFLICT(user_id, top_item_id, bottom_item_id, shoes_item_id) DO NOTHING
          "#,
    )
    .bind(outfit.id.to_string())
    .bind(outfit.user_id.to_string())
    .bind(outfit.top_item_id.to_string())
    .bind(outfit.bottom_item_id.to_string())
    .bind(outfit.shoes_item_id.to_string())
    .bind(outfit.created_at.timestamp())
    .execute(&mut *conn)
    .await?;

    Ok(result.rows_affected() > 0)
}

async fn select_matching(
    conn: &mut SqliteConnection,
    user_id: Uuid,
    triple: &OutfitTriple,
) -> DbErrorResult<Option<SavedOutfit>> {
    let row = sqlx::query(
        r#"
          SELECT id, user_id, top_item_id, bottom_item_id, shoes_item_id, created_at
          FROM saved_outfits
          WHERE user_id = ? AND top_item_id = ? AND bottom_item_id = ? AND shoes_item_id = ?
          "#,
    )
    .bind(user_id.to_string())
    .bind(triple.top.to_string())
    .bind(triple.bottom.to_string())
    .bind(triple.shoes.to_string())
    .fetch_optional(&mut *conn)
    .await?;

    row.as_ref().map(map_outfit).transpose()
}

fn map_outfit(row: &SqliteRow) -> DbErrorResult<SavedOutfit> {
    let id: String = row.try_get("id")?;
    let user_id: String = row.try_get("user_id")?;
    let top: String = row.try_get("top_item_id")?;
    let bottom: String = row.try_get("bottom_item_id")?;
    let shoes: String = row.try_get("shoes_item_id")?;

    Ok(SavedOutfit {
        id: parse_uuid(TABLE, &id)?,
        user_id: parse_uuid(TABLE, &user_id)?,
        top_item_id: parse_uuid(TABLE, &top)?,
        bottom_item_id: parse_uuid(TABLE, &bottom)?,
        shoes_item_id: parse_uuid(TABLE, &shoes)?,
        created_at: parse_timestamp(TABLE, row.try_get("created_at")?)?,
    })
}
