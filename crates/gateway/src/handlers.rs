use database::Repository;
use futures::FutureExt;
use lambda_http::Request;

use crate::error::AppError;
use crate::response;
use crate::router::HandlerFuture;

/// # GET /hello
/// Returns the greeting the database produced, as `{"message": ...}`.
pub fn hello<'a>(repo: &'a dyn Repository, _request: &'a Request) -> HandlerFuture<'a> {
    async move { response::message(repo.hello_message().await.map_err(AppError::from)) }.boxed()
}

/// # GET /labour-participation
/// Returns every labour participation row as a JSON array.
pub fn labour_participation<'a>(
    repo: &'a dyn Repository,
    _request: &'a Request,
) -> HandlerFuture<'a> {
    async move { response::encode(repo.labour_participation().await.map_err(AppError::from)) }
        .boxed()
}
