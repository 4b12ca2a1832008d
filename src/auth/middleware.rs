use crate::{domain::User, session_state::SessionState, utils};
use actix_web::middleware::Next;
use actix_web::{
    body::MessageBody,
    dev::{ServiceRequest, ServiceResponse},
    error::InternalError,
    FromRequest, HttpMessage,
};
use std::ops::Deref;

#[derive(Clone, Debug)]
pub struct AuthenticatedUser(User);

impl Deref for AuthenticatedUser {
    type Target = User;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

pub async fn reject_anonymous_users(
    mut req: ServiceRequest,
    next: Next<impl MessageBody>,
) -> Result<ServiceResponse<impl MessageBody>, actix_web::Error> {
    let session = {
        let (req, payload) = req.parts_mut();
        SessionState::from_request(req, payload).await
    }?;

    match session.user().get().map_err(utils::e500)? {
        Some(user) => {
            req.extensions_mut().insert(AuthenticatedUser(user));
            next.call(req).await
        }
        None => {
            let resp = utils::see_other("/login");
            let e = anyhow::anyhow!("The user has not logged in");
            Err(InternalError::from_response(e, resp).into())
        }
    }
}

/// Must run after [`reject_anonymous_users`].
pub async fn reject_non_admin_users(
    req: ServiceRequest,
    next: Next<impl MessageBody>,
) -> Result<ServiceResponse<impl MessageBody>, actix_web::Error> {
    let role = req
        .extensions()
        .get::<AuthenticatedUser>()
        .map(|user| user.role);

    match role {
        Some(role) if role.is_admin() => next.call(req).await,
        Some(_) => {
            let resp = utils::see_other("/dashboard");
            let e = anyhow::anyhow!("The user is not an administrator");
            Err(InternalError::from_response(e, resp).into())
        }
        None => {
            let resp = utils::see_other("/login");
            let e = anyhow::anyhow!("The user has not logged in");
            Err(InternalError::from_response(e, resp).into())
        }
    }
}
