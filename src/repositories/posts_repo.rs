use async_trait::async_trait;
use tracing::{debug, instrument};

use crate::{
    models::posts::{CreatePostDto, Post},
    Result,
};

use super::PostgresRepo;

/// Sole reader and writer of the `posts` table. Absence is reported through
/// `Option`/`bool`, never as an error.
#[async_trait]
pub trait PostsRepository: Sync + Send {
    async fn get_posts(&self) -> Result<Vec<Post>>;
    async fn get_post(&self, post_id: i32) -> Result<Option<Post>>;
    async fn create_post(&self, post: &CreatePostDto) -> Result<Post>;
    async fn update_post(&self, post_id: i32, post: &CreatePostDto) -> Result<Option<Post>>;
    async fn delete_post(&self, post_id: i32) -> Result<bool>;
}

#[async_trait]
impl PostsRepository for PostgresRepo {
    #[instrument(skip(self))]
    async fn get_posts(&self) -> Result<Vec<Post>> {
        let posts = sqlx::query_as::<_, Post>(
            r#"
            SELECT id, title, content, published, created_at FROM posts
            ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(posts)
    }

    #[instrument(skip(self))]
    async fn get_post(&self, post_id: i32) -> Result<Option<Post>> {
        let post = sqlx::query_as::<_, Post>(
            r#"
            SELECT id, title, content, published, created_at FROM posts
            WHERE id = $1
            "#,
        )
        .bind(post_id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(post)
    }

    #[instrument(skip(self))]
    async fn create_post(&self, post: &CreatePostDto) -> Result<Post> {
        let post = sqlx::query_as::<_, Post>(
            r#"
            INSERT INTO posts (title, content, published)
            VALUES ($1, $2, $3)
            RETURNING id, title, content, published, created_at
            "#,
        )
        .bind(&post.title)
        .bind(&post.content)
        .bind(post.published)
        .fetch_one(&self.pool)
        .await?;

        debug!("Created post {}", post.id);
        Ok(post)
    }

    #[instrument(skip(self))]
    async fn update_post(&self, post_id: i32, post: &CreatePostDto) -> Result<Option<Post>> {
        let post = sqlx::query_as::<_, Post>(
            r#"
            UPDATE posts
            SET title = $2,
                content = $3,
                published = $4
            WHERE id = $1
            RETURNING id, title, content, published, created_at
            "#,
        )
        .bind(post_id)
        .bind(&post.title)
        .bind(&post.content)
        .bind(post.published)
        .fetch_optional(&self.pool)
        .await?;

        Ok(post)
    }

    #[instrument(skip(self))]
    async fn delete_post(&self, post_id: i32) -> Result<bool> {
        let result = sqlx::query(
            r#"
            DELETE FROM posts WHERE id = $1
            "#,
        )
        .bind(post_id)
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }
}
