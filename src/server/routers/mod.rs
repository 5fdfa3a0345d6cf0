use bytes::Bytes;
use http_body_util::Full;
use hyper::StatusCode;
use hyper::{Request, Response};
use serde_json::json;
use std::sync::Arc;

use crate::controller::RefreshController;

mod prices;

pub async fn route<B>(
    req: Request<B>,
    controller: Arc<RefreshController>,
) -> Result<Response<Full<Bytes>>, hyper::Error> {
    match (req.method(), req.uri().path()) {
        (&hyper::Method::GET, "/api/v1/prices") => prices::handle_get_prices(controller).await,
        (&hyper::Method::POST, "/api/v1/prices/refresh") => {
            prices::handle_refresh(controller).await
        }
        _ => Ok(prices::json_response(
            StatusCode::NOT_FOUND,
            &json!({
                "code": -1,
                "message": "Not Found"
            }),
        )),
    }
}
