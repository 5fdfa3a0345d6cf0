use bytes::Bytes;
use http_body_util::Full;
use hyper::{
    header::{self, HeaderValue},
    Response, StatusCode,
};
use log::error;
use serde::Serialize;
use std::sync::Arc;

use crate::controller::{DisplayState, RefreshCommand, RefreshController};

pub async fn handle_get_prices(
    controller: Arc<RefreshController>,
) -> Result<Response<Full<Bytes>>, hyper::Error> {
    let state = controller.state().await;

    Ok(json_response(StatusCode::OK, &state))
}

pub async fn handle_refresh(
    controller: Arc<RefreshController>,
) -> Result<Response<Full<Bytes>>, hyper::Error> {
    let state = controller.handle(RefreshCommand::Refresh).await;
    let status = match state {
        DisplayState::Failed { .. } => StatusCode::BAD_GATEWAY,
        _ => StatusCode::OK,
    };

    Ok(json_response(status, &state))
}

pub fn json_response<T: Serialize>(status: StatusCode, body: &T) -> Response<Full<Bytes>> {
    let (status, bytes) = match serde_json::to_vec(body) {
        Ok(bytes) => (status, bytes),
        Err(e) => {
            error!("serialize response: {:?}", e);

            (
                StatusCode::INTERNAL_SERVER_ERROR,
                br#"{"code":-1,"message":"Internal Server Error"}"#.to_vec(),
            )
        }
    };
    let mut response = Response::new(Full::new(Bytes::from(bytes)));

    *response.status_mut() = status;
    response.headers_mut().insert(
        header::CONTENT_TYPE,
        HeaderValue::from_static("application/json"),
    );

    response
}
