use std::sync::Arc;

use axum::{
    extract::Path,
    http::StatusCode,
    response::IntoResponse,
    routing::get,
    Extension, Json, Router,
};
use axum_extra::extract::WithRejection;
use validator::Validate;

use crate::{models::posts::CreatePostDto, AppState, Error, Result};

pub fn posts_handler() -> Router {
    Router::new()
        .route("/", get(get_posts).post(create_post))
        .route("/{id}", get(get_post).put(update_post).delete(delete_post))
}

async fn get_posts(Extension(app_state): Extension<Arc<AppState>>) -> Result<impl IntoResponse> {
    let posts = app_state.posts_repo.get_posts().await?;
    Ok((StatusCode::OK, Json(posts)))
}

async fn create_post(
    Extension(app_state): Extension<Arc<AppState>>,
    WithRejection(Json(new_post), _): WithRejection<Json<CreatePostDto>, Error>,
) -> Result<impl IntoResponse> {
    new_post.validate()?;

    let post = app_state.posts_repo.create_post(&new_post).await?;
    Ok((StatusCode::CREATED, Json(post)))
}

async fn get_post(
    Extension(app_state): Extension<Arc<AppState>>,
    WithRejection(Path(post_id), _): WithRejection<Path<i32>, Error>,
) -> Result<impl IntoResponse> {
    let post = app_state
        .posts_repo
        .get_post(post_id)
        .await?
        .ok_or_else(|| Error::NotFound(format!("post with id: {post_id} was not found")))?;

    Ok((StatusCode::OK, Json(post)))
}

async fn update_post(
    Extension(app_state): Extension<Arc<AppState>>,
    WithRejection(Path(post_id), _): WithRejection<Path<i32>, Error>,
    WithRejection(Json(update_post), _): WithRejection<Json<CreatePostDto>, Error>,
) -> Result<impl IntoResponse> {
    update_post.validate()?;

    let post = app_state
        .posts_repo
        .update_post(post_id, &update_post)
        .await?
        .ok_or_else(|| does_not_exist(post_id))?;

    Ok((StatusCode::OK, Json(post)))
}

async fn delete_post(
    Extension(app_state): Extension<Arc<AppState>>,
    WithRejection(Path(post_id), _): WithRejection<Path<i32>, Error>,
) -> Result<impl IntoResponse> {
    if !app_state.posts_repo.delete_post(post_id).await? {
        return Err(does_not_exist(post_id));
    }

    Ok(StatusCode::NO_CONTENT)
}

fn does_not_exist(post_id: i32) -> Error {
    Error::NotFound(format!("Post with id: {post_id} does not exist"))
}
