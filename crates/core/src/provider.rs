use std::{
    fmt::Debug,
    future::Future,
    pin::Pin,
    task::{Context, Poll},
};

use alloy::{
    rpc::json_rpc::{RequestPacket, ResponsePacket},
    transports::TransportError,
};
use tower::{Layer, Service};
use tracing::debug;

/// A layer to be used with `ClientBuilder::layer` that logs each JSON-RPC request with its latency,
/// plus the tx hash returned by eth_sendRawTransaction.
#[derive(Clone, Copy, Debug, Default)]
pub struct LoggingLayer;

impl LoggingLayer {
    pub fn new() -> Self {
        Self
    }
}

impl<S> Layer<S> for LoggingLayer {
    type Service = LoggingService<S>;

    fn layer(&self, inner: S) -> Self::Service {
        LoggingService { inner }
    }
}

#[derive(Debug, Clone)]
pub struct LoggingService<S> {
    inner: S,
}

impl<S> Service<RequestPacket> for LoggingService<S>
where
    S: Service<RequestPacket, Response = ResponsePacket, Error = TransportError>,
    S::Future: Send + 'static,
    S::Response: Send + 'static + Debug,
    S::Error: Send + 'static + Debug,
{
    type Response = S::Response;
    type Error = S::Error;
    type Future = Pin<Box<dyn Future<Output = Result<Self::Response, Self::Error>> + Send>>;

    fn poll_ready(&mut self, cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.inner.poll_ready(cx)
    }

    fn call(&mut self, req: RequestPacket) -> Self::Future {
        let (method, id) = match &req {
            RequestPacket::Single(inner_req) => (
                inner_req.method().to_owned(),
                inner_req.id().as_number().unwrap_or_default(),
            ),
            RequestPacket::Batch(reqs) => (format!("batch({})", reqs.len()), 0),
        };

        let start_time = tokio::time::Instant::now();
        let fut = self.inner.call(req);

        Box::pin(async move {
            let res = fut.await;
            let elapsed = start_time.elapsed().as_millis() as u64;
            match &res {
                Ok(ResponsePacket::Single(inner_res)) => {
                    debug!("{method} (id {id}) answered in {elapsed}ms");
                    if method == "eth_sendRawTransaction" {
                        if let Some(payload) = inner_res.payload.as_success() {
                            debug!("tx delivered. hash: {}, id: {id}", payload.get());
                        }
                    }
                }
                Ok(ResponsePacket::Batch(_)) => {
                    debug!("{method} answered in {elapsed}ms");
                }
                Err(e) => {
                    debug!("{method} (id {id}) failed after {elapsed}ms: {e:?}");
                }
            }
            res
        })
    }
}
