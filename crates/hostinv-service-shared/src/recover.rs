//! Recovery boundary.
//!
//! Ordinary failures reach the client through [`crate::ApiFailure`]'s
//! `IntoResponse`; this layer is the containment for the remaining
//! uncontrolled case, a panic anywhere downstream. The panic is caught
//! (whether it fires while building the response future or while polling
//! it), its payload is logged, and the fixed `internal_server_error`
//! envelope is written exactly once. Nothing downstream of this layer can
//! leave the request without a response.

use std::any::Any;
use std::convert::Infallible;
use std::future::Future;
use std::panic::{catch_unwind, AssertUnwindSafe};
use std::pin::Pin;
use std::task::{Context, Poll};

use axum::{extract::Request, response::IntoResponse, response::Response};
use pin_project_lite::pin_project;
use tower::{Layer, Service};

use crate::error::ERR_INTERNAL_SERVER;

/// Tower layer installing the [`Recover`] boundary.
#[derive(Debug, Clone, Default)]
pub struct RecoverLayer;

impl<S> Layer<S> for RecoverLayer {
    type Service = Recover<S>;

    fn layer(&self, inner: S) -> Self::Service {
        Recover { inner }
    }
}

/// Middleware service converting downstream panics into error envelopes.
#[derive(Debug, Clone)]
pub struct Recover<S> {
    inner: S,
}

/// Best-effort extraction of a panic payload for the log line.
fn panic_message(payload: Box<dyn Any + Send>) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "non-string panic payload".to_string()
    }
}

fn recovered_response(payload: Box<dyn Any + Send>) -> Response {
    tracing::error!(panic = %panic_message(payload), "recovered from panic");
    ERR_INTERNAL_SERVER.into_response()
}

impl<S> Service<Request> for Recover<S>
where
    S: Service<Request, Response = Response, Error = Infallible>,
{
    type Response = Response;
    type Error = Infallible;
    type Future = RecoverFuture<S::Future>;

    fn poll_ready(&mut self, cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.inner.poll_ready(cx)
    }

    fn call(&mut self, req: Request) -> Self::Future {
        match catch_unwind(AssertUnwindSafe(|| self.inner.call(req))) {
            Ok(future) => RecoverFuture::Running { future },
            Err(payload) => RecoverFuture::Recovered {
                response: Some(recovered_response(payload)),
            },
        }
    }
}

pin_project! {
    /// Response future for [`Recover`].
    #[project = RecoverFutureProj]
    pub enum RecoverFuture<F> {
        Running {
            #[pin]
            future: F,
        },
        Recovered {
            response: Option<Response>,
        },
    }
}

impl<F> Future for RecoverFuture<F>
where
    F: Future<Output = Result<Response, Infallible>>,
{
    type Output = Result<Response, Infallible>;

    fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        match self.project() {
            RecoverFutureProj::Running { future } => {
                match catch_unwind(AssertUnwindSafe(|| future.poll(cx))) {
                    Ok(poll) => poll,
                    Err(payload) => Poll::Ready(Ok(recovered_response(payload))),
                }
            }
            RecoverFutureProj::Recovered { response } => {
                Poll::Ready(Ok(response.take().unwrap_or_default()))
            }
        }
    }
}
