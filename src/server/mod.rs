//! JSON over HTTP front end for the regression engine.
//!
//! Routes:
//!
//! - `POST /generate`: run the pipeline for the parameters in the body
//! - `GET /health`: liveness probe
//!
//! Every error response carries `{"error": <message>}`. Each request runs the
//! pipeline on its own data; the only shared value is the immutable engine.

mod config;
mod http;
mod wire;

use std::io;
use std::sync::Arc;
use std::time::Duration;

use log::{error, info, warn};
use serde_json::json;
use tokio::io::BufReader;
use tokio::net::{TcpListener, TcpStream};
use tokio::time;

use crate::core::EvaluationSummary;
use crate::evaluation::{EngineError, RegressionEngine};

pub use config::{ConfigError, ServerConfig, DEFAULT_HOST, DEFAULT_PORT};
pub use http::{read_request, write_response, HttpError, Request, Response, MAX_BODY_BYTES};
/// How long a client has to deliver a complete request.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Pause after an accept failure not tied to a single peer.
const ACCEPT_BACKOFF: Duration = Duration::from_millis(100);

pub use wire::{
    validation_message, ErrorBody, GenerateRequest, GenerateResponse, PlotData, WireCoefficients,
    WireOutlier,
};

/// Dispatch one request to its handler.
pub fn route(request: &Request, engine: &RegressionEngine) -> Response {
    match (request.method.as_str(), request.path.as_str()) {
        ("POST", "/generate") => handle_generate(&request.body, engine),
        ("GET", "/health") => Response::json(200, &json!({ "status": "ok" })),
        (_, "/generate") | (_, "/health") => {
            Response::json(405, &ErrorBody::new("method not allowed"))
        }
        _ => Response::json(404, &ErrorBody::new("not found")),
    }
}

/// Handle `POST /generate`.
pub fn handle_generate(body: &[u8], engine: &RegressionEngine) -> Response {
    let request = match GenerateRequest::from_body(body) {
        Ok(request) => request,
        Err(e) => {
            return Response::json(400, &ErrorBody::new(format!("invalid request body: {e}")));
        }
    };

    let params = match request.into_params() {
        Ok(params) => params,
        Err(e) => return Response::json(400, &ErrorBody::new(validation_message(&e))),
    };

    generate_response(engine.run(&params), params.slope)
}

/// Turn a pipeline outcome into the `/generate` response.
pub fn generate_response(
    result: Result<EvaluationSummary, EngineError>,
    target_coefficient: f64,
) -> Response {
    match result {
        Ok(summary) => Response::json(
            200,
            &GenerateResponse::from_summary(summary, target_coefficient),
        ),
        Err(EngineError::Validation(e)) => {
            Response::json(400, &ErrorBody::new(validation_message(&e)))
        }
        Err(e) => {
            warn!("pipeline failed: {e}");
            Response::json(500, &ErrorBody::new(e.to_string()))
        }
    }
}

/// Serve one connection: read a request, answer it, close.
pub async fn handle_connection(stream: TcpStream, engine: &RegressionEngine) -> io::Result<()> {
    handle_connection_within(stream, engine, REQUEST_TIMEOUT).await
}

/// Like [`handle_connection`], answering 408 if the request takes longer than
/// `limit` to arrive.
pub async fn handle_connection_within(
    stream: TcpStream,
    engine: &RegressionEngine,
    limit: Duration,
) -> io::Result<()> {
    let (rx, mut tx) = stream.into_split();
    let mut rx = BufReader::new(rx);

    let response = match time::timeout(limit, read_request(&mut rx)).await {
        Ok(Ok(request)) => {
            let response = route(&request, engine);
            info!(
                "{} {} -> {}",
                request.method, request.path, response.status
            );
            response
        }
        Ok(Err(HttpError::Io(e))) => return Err(e),
        Ok(Err(e)) => {
            warn!("rejected request: {e}");
            Response::json(400, &ErrorBody::new(e.to_string()))
        }
        Err(_) => {
            warn!("request not received within {limit:?}");
            Response::json(408, &ErrorBody::new("request timed out"))
        }
    };

    write_response(&mut tx, &response).await
}

fn accept_backoff(err: &io::Error) -> Duration {
    match err.kind() {
        io::ErrorKind::ConnectionAborted
        | io::ErrorKind::ConnectionReset
        | io::ErrorKind::Interrupted => Duration::ZERO,
        _ => ACCEPT_BACKOFF,
    }
}

/// Accept connections forever, one task per connection.
///
/// Accept failures are logged and retried; running out of file descriptors
/// pauses the loop briefly instead of ending it.
pub async fn serve(listener: TcpListener, engine: Arc<RegressionEngine>) {
    loop {
        let (stream, addr) = match listener.accept().await {
            Ok(conn) => conn,
            Err(e) => {
                let pause = accept_backoff(&e);
                warn!("accept failed: {e}, retrying in {pause:?}");
                time::sleep(pause).await;
                continue;
            }
        };
        let engine = Arc::clone(&engine);

        tokio::spawn(async move {
            if let Err(e) = handle_connection(stream, &engine).await {
                error!("connection from {addr} failed: {e}");
            }
        });
    }
}
