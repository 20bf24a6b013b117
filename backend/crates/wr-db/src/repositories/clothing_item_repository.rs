use crate::repositories::columns::{parse_timestamp, parse_uuid};
use crate::{DbError, Result as DbErrorResult};

use wr_core::{ClothingItem, Section};

use std::str::FromStr;

use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqlitePool};
use uuid::Uuid;

const TABLE: &str = "clothes";

pub struct ClothingItemRepository {
    pool: SqlitePool,
}

impl ClothingItemRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, item: &ClothingItem) -> DbErrorResult<()> {
        sqlx::query(
            r#"
              INSERT INTO clothes (
                  id, user_id, section, name, item_type, color, style, image_url,
                  created_at, updated_at
              ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
              "#,
        )
        .bind(item.id.to_string())
        .bind(item.user_id.to_string())
        .bind(item.section.as_str())
        .bind(&item.name)
        .bind(&item.item_type)
        .bind(&item.color)
        .bind(&item.style)
        .bind(&item.image_url)
        .bind(item.created_at.timestamp())
        .bind(item.updated_at.timestamp())
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    /// Returns the item only when it belongs to `user_id`
    pub async fn find_owned(
        &self,
        user_id: Uuid,
        id: Uuid,
    ) -> DbErrorResult<Option<ClothingItem>> {
        let row = sqlx::query(
            r#"
              SELECT id, user_id, section, name, item_type, color, style, image_url,
                     created_at, updated_at
              FROM clothes
              WHERE id = ? AND user_id = ?
              "#,
        )
        .bind(id.to_string())
        .bind(user_id.to_string())
        .fetch_optional(&self.pool)
        .await?;

        row.as_ref().map(map_item).transpose()
    }

    /// The user's catalog, oldest first, optionally narrowed to one section.
    pub async fn list_by_user(
        &self,
        user_id: Uuid,
        section: Option<Section>,
    ) -> DbErrorResult<Vec<ClothingItem>> {
        let rows = sqlx::query(
            r#"
              SELECT id, user_id, section, name, item_type, color, style, image_url,
                     created_at, updated_at
              FROM clothes
              WHERE user_id = ? AND (? IS NULL OR section = ?)
              ORDER BY created_at ASC, rowid ASC
              "#,
        )
        .bind(user_id.to_string())
        .bind(section.map(|s| s.as_str()))
        .bind(section.map(|s| s.as_str()))
        .fetch_all(&self.pool)
        .await?;

        rows.iter().map(map_item).collect()
    }

    /// Persists the editable metadata. Returns false when no owned row matched.
    pub async fn update(&self, item: &ClothingItem) -> DbErrorResult<bool> {
        let result = sqlx::query(
            r#"
              UPDATE clothes
              SET name = ?, item_type = ?, color = ?, style = ?, updated_at = ?
              WHERE id = ? AND user_id = ?
              "#,
        )
        .bind(&item.name)
        .bind(&item.item_type)
        .bind(&item.color)
        .bind(&item.style)
        .bind(item.updated_at.timestamp())
        .bind(item.id.to_string())
        .bind(item.user_id.to_string())
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }

    pub async fn delete(&self, user_id: Uuid, id: Uuid) -> DbErrorResult<bool> {
        let result = sqlx::query("DELETE FROM clothes WHERE id = ? AND user_id = ?")
            .bind(id.to_string())
            .bind(user_id.to_string())
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}

fn map_item(row: &SqliteRow) -> DbErrorResult<ClothingItem> {
    let id: String = row.try_get("id")?;
    let user_id: String = row.try_get("user_id")?;
    let section: String = row.try_get("section")?;

    Ok(ClothingItem {
        id: parse_uuid(TABLE, &id)?,
        user_id: parse_uuid(TABLE, &user_id)?,
        section: Section::from_str(&section)
            .map_err(|_| DbError::decode(TABLE, format!("unknown section '{section}'")))?,
        name: row.try_get("name")?,
        item_type: row.try_get("item_type")?,
        color: row.try_get("color")?,
        style: row.try_get("style")?,
        image_url: row.try_get("image_url")?,
        created_at: parse_timestamp(TABLE, row.try_get("created_at")?)?,
        updated_at: parse_timestamp(TABLE, row.try_get("updated_at")?)?,
    })
}
