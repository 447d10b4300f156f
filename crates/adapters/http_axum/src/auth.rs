//! Role-based authorization middleware.
//!
//! Every protected route is wrapped with [`require_roles`], which reads the
//! caller's roles from the [`ROLES_HEADER`] set by the authenticating proxy
//! and lets the request through only when one of them is allowed.

use std::future::Future;
use std::pin::Pin;

use axum::extract::Request;
use axum::http::{HeaderMap, StatusCode};
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};

use staffhub_domain::role::{Role, UnknownRole};

use crate::error::ErrorBody;

/// Header carrying the caller's comma-separated role tags.
pub const ROLES_HEADER: &str = "x-user-roles";

/// Roles granted to the current caller, inserted into request extensions
/// once authorization succeeds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Caller {
    pub roles: Vec<Role>,
}

impl Caller {
    /// Read the caller's roles from request headers.
    ///
    /// # Errors
    ///
    /// Returns [`AuthRejection::MissingRoles`] when the header is absent,
    /// not valid text, or empty, and [`AuthRejection::UnknownRole`] when a
    /// tag does not name a known role.
    pub fn from_headers(headers: &HeaderMap) -> Result<Self, AuthRejection> {
        let raw = headers
            .get(ROLES_HEADER)
            .and_then(|value| value.to_str().ok())
            .ok_or(AuthRejection::MissingRoles)?;

        let roles = raw
            .split(',')
            .filter(|tag| !tag.trim().is_empty())
            .map(str::parse)
            .collect::<Result<Vec<Role>, _>>()?;

        if roles.is_empty() {
            return Err(AuthRejection::MissingRoles);
        }
        Ok(Self { roles })
    }

    /// Whether any of the caller's roles is in `allowed`.
    #[must_use]
    pub fn has_any(&self, allowed: &[Role]) -> bool {
        self.roles.iter().any(|role| allowed.contains(role))
    }
}

/// Why a request was refused before reaching its handler.
#[derive(Debug, thiserror::Error)]
pub enum AuthRejection {
    #[error("missing caller roles")]
    MissingRoles,

    #[error(transparent)]
    UnknownRole(#[from] UnknownRole),

    #[error("requires one of: {}", format_roles(.allowed))]
    Forbidden { allowed: &'static [Role] },
}

fn format_roles(roles: &[Role]) -> String {
    roles
        .iter()
        .map(|role| role.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}

impl IntoResponse for AuthRejection {
    fn into_response(self) -> Response {
        let status = match self {
            Self::MissingRoles | Self::UnknownRole(_) => StatusCode::UNAUTHORIZED,
            Self::Forbidden { .. } => StatusCode::FORBIDDEN,
        };
        ErrorBody::respond(status, self.to_string())
    }
}

type Guarded = Pin<Box<dyn Future<Output = Result<Response, AuthRejection>> + Send>>;

/// Build a middleware that admits callers holding any of `allowed`.
///
/// ```ignore
/// use axum::middleware;
/// Router::new()
///     .route("/employees", get(list).layer(middleware::from_fn(require_roles(&[Role::Manager]))));
/// ```
pub fn require_roles(allowed: &'static [Role]) -> impl Fn(Request, Next) -> Guarded + Clone {
    move |mut req: Request, next: Next| -> Guarded {
        Box::pin(async move {
            let caller = match Caller::from_headers(req.headers()) {
                Ok(caller) => caller,
                Err(rejection) => {
                    tracing::warn!(
                        method = %req.method(),
                        uri = %req.uri(),
                        reason = %rejection,
                        "request rejected"
                    );
                    return Err(rejection);
                }
            };

            if !caller.has_any(allowed) {
                tracing::warn!(
                    method = %req.method(),
                    uri = %req.uri(),
                    roles = ?caller.roles,
                    "permission denied"
                );
                return Err(AuthRejection::Forbidden { allowed });
            }

            req.extensions_mut().insert(caller);
            Ok(next.run(req).await)
        })
    }
}
