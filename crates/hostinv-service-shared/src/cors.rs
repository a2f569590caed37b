//! CORS guard.
//!
//! Reflects the caller's `Origin` and advertises the fixed method and header
//! allow-lists on every response, and halts any `OPTIONS` request with an
//! empty 200 before the rest of the pipeline runs. Note the off-the-shelf
//! tower-http layer is not a drop-in here: it only short-circuits true
//! preflights and omits the allow-lists from non-preflight responses, while
//! this service's contract sets them whenever `Origin` is present.

use std::convert::Infallible;
use std::future::Future;
use std::pin::Pin;
use std::task::{Context, Poll};

use axum::{
    body::Body,
    extract::Request,
    http::{header, HeaderMap, HeaderValue, Method},
    response::Response,
};
use pin_project_lite::pin_project;
use tower::{Layer, Service};

const ALLOWED_METHODS: &str = "POST, GET, OPTIONS, PUT, DELETE";
const ALLOWED_HEADERS: &str =
    "Accept, Content-Type, Content-Length, Accept-Encoding, X-CSRF-Token, Authorization";

/// Tower layer installing the [`Cors`] guard.
#[derive(Debug, Clone, Default)]
pub struct CorsLayer;

impl<S> Layer<S> for CorsLayer {
    type Service = Cors<S>;

    fn layer(&self, inner: S) -> Self::Service {
        Cors { inner }
    }
}

/// Middleware service reflecting permitted origin/method/header sets.
#[derive(Debug, Clone)]
pub struct Cors<S> {
    inner: S,
}

/// Stamp the CORS response headers when the request carried an `Origin`.
fn apply_cors_headers(headers: &mut HeaderMap, origin: Option<&HeaderValue>) {
    if let Some(origin) = origin {
        headers.insert(header::ACCESS_CONTROL_ALLOW_ORIGIN, origin.clone());
        headers.insert(
            header::ACCESS_CONTROL_ALLOW_METHODS,
            HeaderValue::from_static(ALLOWED_METHODS),
        );
        headers.insert(
            header::ACCESS_CONTROL_ALLOW_HEADERS,
            HeaderValue::from_static(ALLOWED_HEADERS),
        );
    }
}

impl<S> Service<Request> for Cors<S>
where
    S: Service<Request, Response = Response, Error = Infallible>,
{
    type Response = Response;
    type Error = Infallible;
    type Future = CorsFuture<S::Future>;

    fn poll_ready(&mut self, cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.inner.poll_ready(cx)
    }

    fn call(&mut self, req: Request) -> Self::Future {
        let origin = req.headers().get(header::ORIGIN).cloned();

        // Any OPTIONS request halts here, preflight or not.
        if req.method() == Method::OPTIONS {
            let mut response = Response::new(Body::empty());
            apply_cors_headers(response.headers_mut(), origin.as_ref());
            return CorsFuture::Halted {
                response: Some(response),
            };
        }

        CorsFuture::Forwarded {
            future: self.inner.call(req),
            origin,
        }
    }
}

pin_project! {
    /// Response future for [`Cors`].
    #[project = CorsFutureProj]
    pub enum CorsFuture<F> {
        Halted {
            response: Option<Response>,
        },
        Forwarded {
            #[pin]
            future: F,
            origin: Option<HeaderValue>,
        },
    }
}

impl<F> Future for CorsFuture<F>
where
    F: Future<Output = Result<Response, Infallible>>,
{
    type Output = Result<Response, Infallible>;

    fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        match self.project() {
            CorsFutureProj::Halted { response } => {
                Poll::Ready(Ok(response.take().unwrap_or_default()))
            }
            CorsFutureProj::Forwarded { future, origin } => match future.poll(cx) {
                Poll::Ready(Ok(mut response)) => {
                    apply_cors_headers(response.headers_mut(), origin.as_ref());
                    Poll::Ready(Ok(response))
                }
                Poll::Ready(Err(err)) => match err {},
                Poll::Pending => Poll::Pending,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_headers_reflect_origin() {
        let origin = HeaderValue::from_static("http://ui.example");
        let mut headers = HeaderMap::new();
        apply_cors_headers(&mut headers, Some(&origin));

        assert_eq!(
            headers.get(header::ACCESS_CONTROL_ALLOW_ORIGIN).unwrap(),
            "http://ui.example"
        );
        assert_eq!(
            headers.get(header::ACCESS_CONTROL_ALLOW_METHODS).unwrap(),
            ALLOWED_METHODS
        );
        assert_eq!(
            headers.get(header::ACCESS_CONTROL_ALLOW_HEADERS).unwrap(),
            ALLOWED_HEADERS
        );
    }

    #[test]
    fn test_no_origin_no_headers() {
        let mut headers = HeaderMap::new();
        apply_cors_headers(&mut headers, None);
        assert!(headers.is_empty());
    }
}
