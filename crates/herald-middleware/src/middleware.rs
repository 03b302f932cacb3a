//! Tower metadata middleware.
//!
//! `MetadataLayer` and `MetadataService` run the resolver once per page
//! request, before the handler renders, and leave the result in the request
//! extensions.

use std::convert::Infallible;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use std::task::{Context, Poll};

use axum::body::Body;
use axum::response::IntoResponse;
use herald_core::{MetadataResolver, PageContext};
use http::{Method, Request};
use tower::{Layer, Service};

/// Tower `Layer` that wraps services with metadata resolution.
#[derive(Clone)]
pub struct MetadataLayer {
    resolver: Arc<MetadataResolver>,
}

impl MetadataLayer {
    /// Create a new metadata layer around a shared resolver.
    pub fn new(resolver: Arc<MetadataResolver>) -> Self {
        Self { resolver }
    }
}

impl<S> Layer<S> for MetadataLayer {
    type Service = MetadataService<S>;

    fn layer(&self, inner: S) -> Self::Service {
        MetadataService {
            inner,
            resolver: self.resolver.clone(),
        }
    }
}

/// Tower `Service` that resolves page metadata before forwarding requests.
///
/// For `GET` and `HEAD` requests, inserts both
/// [`ResolvedMetadata`](herald_core::ResolvedMetadata) and [`PageContext`]
/// into request extensions. Other methods pass through untouched.
#[derive(Clone)]
pub struct MetadataService<S> {
    inner: S,
    resolver: Arc<MetadataResolver>,
}

impl<S> Service<Request<Body>> for MetadataService<S>
where
    S: Service<Request<Body>, Error = Infallible> + Clone + Send + 'static,
    S::Response: IntoResponse,
    S::Future: Send,
{
    type Response = axum::response::Response;
    type Error = Infallible;
    type Future = Pin<Box<dyn Future<Output = Result<Self::Response, Self::Error>> + Send>>;

    fn poll_ready(&mut self, cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.inner.poll_ready(cx)
    }

    fn call(&mut self, mut req: Request<Body>) -> Self::Future {
        let clone = self.inner.clone();
        let mut inner = std::mem::replace(&mut self.inner, clone);

        if is_page_request(req.method()) {
            let resolved = self.resolver.resolve(&req);
            let context = PageContext::from(resolved.clone());
            req.extensions_mut().insert(resolved);
            req.extensions_mut().insert(context);
        } else {
            log::trace!("Skipping metadata for {} {}", req.method(), req.uri().path());
        }

        Box::pin(async move {
            let resp = inner
                .call(req)
                .await
                .unwrap_or_else(|infallible| match infallible {});
            Ok(resp.into_response())
        })
    }
}

fn is_page_request(method: &Method) -> bool {
    *method == Method::GET || *method == Method::HEAD
}
