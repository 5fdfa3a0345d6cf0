use hyper::server::conn::http1;
use hyper::service::service_fn;
use hyper_util::rt::TokioIo;
use log::{error, info};
use std::sync::Arc;
use std::{io, net::SocketAddr};
use tokio::net::TcpListener;

use routers::route;

use crate::controller::RefreshController;

mod routers;

pub async fn run_server(controller: Arc<RefreshController>, port: u16) -> Result<(), io::Error> {
    let addr = SocketAddr::from(([127, 0, 0, 1], port));
    let listener = TcpListener::bind(&addr).await?;

    info!("Listening on http://{}", addr);

    loop {
        let (stream, _) = listener.accept().await?;
        let io = TokioIo::new(stream);
        let controller = Arc::clone(&controller);

        tokio::task::spawn(async move {
            let service = service_fn(move |req| route(req, Arc::clone(&controller)));

            if let Err(err) = http1::Builder::new().serve_connection(io, service).await {
                error!("Failed to serve connection: {:?}", err);
            }
        });
    }
}
