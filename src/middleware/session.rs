// Only the error type: the crate-level Result alias would shadow
// std's two-parameter Result inside the Transform impls below.
use crate::core::AppError;
use actix_web::{
    dev::{forward_ready, Service, ServiceRequest, ServiceResponse, Transform},
    web::Query,
    Error, HttpMessage,
};
use futures_util::future::LocalBoxFuture;
use serde::Deserialize;
use std::future::{ready, Ready};
use std::rc::Rc;

/// Caller identity supplied by the external session collaborator.
///
/// The backend never issues or validates credentials; it only interprets
/// the claims handed to it per request.
#[derive(Debug, Clone, Deserialize)]
pub struct SessionClaims {
    /// Numeric user id, absent for malformed sessions
    pub id: Option<i64>,
    /// Admin flag: 1 = admin, 0 = scoped user
    pub admin: Option<i64>,
}

impl SessionClaims {
    pub fn is_admin(&self) -> crate::core::Result<bool> {
        match self.admin {
            Some(flag) => Ok(flag == 1),
            None => Err(AppError::access("session data missing 'admin' field")),
        }
    }

    pub fn user_id(&self) -> crate::core::Result<i64> {
        self.id
            .ok_or_else(|| AppError::access("session data missing 'id' field"))
    }
}

/// Parse raw session JSON into claims.
pub fn parse_session(raw: &str) -> crate::core::Result<SessionClaims> {
    serde_json::from_str(raw).map_err(|_| AppError::access("Invalid session data format"))
}

#[derive(Debug, Deserialize)]
struct SessionQuery {
    session_data: Option<String>,
}

/// Session extraction middleware.
///
/// Reads session claims from the `X-Session-Data` header or the
/// `session_data` query parameter and stores them in request extensions,
/// where handlers pick them up via `web::ReqData<SessionClaims>`.
pub struct SessionExtractor;

impl<S, B> Transform<S, ServiceRequest> for SessionExtractor
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type InitError = ();
    type Transform = SessionExtractorMiddleware<S>;
    type Future = Ready<std::result::Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(SessionExtractorMiddleware {
            service: Rc::new(service),
        }))
    }
}

pub struct SessionExtractorMiddleware<S> {
    service: Rc<S>,
}

impl<S, B> Service<ServiceRequest> for SessionExtractorMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, std::result::Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let svc = self.service.clone();

        Box::pin(async move {
            // Health check and root stay public
            let path = req.path();
            if path == "/health" || path == "/" {
                return svc.call(req).await;
            }

            let raw = req
                .headers()
                .get("X-Session-Data")
                .and_then(|h| h.to_str().ok())
                .map(str::to_owned)
                .or_else(|| {
                    Query::<SessionQuery>::from_query(req.query_string())
                        .ok()
                        .and_then(|q| q.into_inner().session_data)
                })
                .ok_or_else(|| Error::from(AppError::access("Session data not found")))?;

            let claims = parse_session(&raw).map_err(Error::from)?;
            req.extensions_mut().insert(claims);

            svc.call(req).await
        })
    }
}
