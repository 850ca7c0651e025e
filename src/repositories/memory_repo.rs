//! In-memory stand-in for the posts table, used by router tests.

use std::sync::Mutex;

use async_trait::async_trait;
use chrono::Utc;

use crate::{
    models::posts::{CreatePostDto, Post},
    Result,
};

use super::posts_repo::PostsRepository;

#[derive(Default)]
pub struct MemoryRepo {
    state: Mutex<MemoryState>,
}

#[derive(Default)]
struct MemoryState {
    last_id: i32,
    rows: Vec<Post>,
}

#[async_trait]
impl PostsRepository for MemoryRepo {
    async fn get_posts(&self) -> Result<Vec<Post>> {
        Ok(self.state.lock().unwrap().rows.clone())
    }

    async fn get_post(&self, post_id: i32) -> Result<Option<Post>> {
        let state = self.state.lock().unwrap();
        Ok(state.rows.iter().find(|p| p.id == post_id).cloned())
    }

    async fn create_post(&self, post: &CreatePostDto) -> Result<Post> {
        let mut state = self.state.lock().unwrap();
        state.last_id += 1;
        let row = Post {
            id: state.last_id,
            title: post.title.clone(),
            content: post.content.clone(),
            published: post.published,
            created_at: Utc::now(),
        };
        state.rows.push(row.clone());
        Ok(row)
    }

    async fn update_post(&self, post_id: i32, post: &CreatePostDto) -> Result<Option<Post>> {
        let mut state = self.state.lock().unwrap();
        Ok(state.rows.iter_mut().find(|p| p.id == post_id).map(|row| {
            row.title = post.title.clone();
            row.content = post.content.clone();
            row.published = post.published;
            row.clone()
        }))
    }

    async fn delete_post(&self, post_id: i32) -> Result<bool> {
        let mut state = self.state.lock().unwrap();
        let before = state.rows.len();
        state.rows.retain(|p| p.id != post_id);
        Ok(state.rows.len() < before)
    }
}
