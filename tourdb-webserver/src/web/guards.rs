use rocket::{
    self,
    http::Status,
    outcome::try_outcome,
    request::{FromRequest, Outcome, Request},
    State,
};

use crate::web::jwt;
use tourdb_core::entities::Id;

fn get_bearer_token(auth_header_val: &str) -> Option<&str> {
    let x: Vec<_> = auth_header_val.split(' ').collect();
    if x.len() == 2 && x[0] == "Bearer" {
        Some(x[1])
    } else {
        None
    }
}

/// The raw authentication state of a request.
///
/// Extraction never fails, routes decide whether an
/// authenticated account is required.
#[derive(Debug)]
pub struct Auth {
    bearer_tokens: Vec<String>,
    account_id: Option<Id>,
}

impl Auth {
    pub fn account_id(&self) -> Option<&Id> {
        self.account_id.as_ref()
    }

    pub fn bearer_tokens(&self) -> &Vec<String> {
        &self.bearer_tokens
    }

    fn bearer_tokens_from_header(request: &Request) -> Vec<String> {
        request
            .headers()
            .get("Authorization")
            .filter_map(get_bearer_token)
            .map(ToOwned::to_owned)
            .collect()
    }

    async fn account_id_from_jwt_in_header(
        request: &Request<'_>,
        bearer_tokens: &[String],
    ) -> Option<Id> {
        let jwt_state = request.guard::<&State<jwt::JwtState>>().await.succeeded()?;
        bearer_tokens
            .iter()
            .filter_map(|token| jwt_state.validate_token_and_get_user_id(token).ok())
            .next()
    }
}

#[rocket::async_trait]
impl<'r> FromRequest<'r> for Auth {
    type Error = ();
    async fn from_request(request: &'r Request<'_>) -> Outcome<Self, Self::Error> {
        let bearer_tokens = Self::bearer_tokens_from_header(request);
        let account_id = Self::account_id_from_jwt_in_header(request, &bearer_tokens).await;
        Outcome::Success(Self {
            bearer_tokens,
            account_id,
        })
    }
}

/// An authenticated account id extracted from a valid bearer token.
///
/// Requests without one are rejected before any handler logic runs.
/// The corresponding account and its role are always re-read from
/// the store, they are never trusted from the token itself.
#[derive(Debug)]
pub struct Account(Id);

impl Account {
    pub fn id(&self) -> &Id {
        &self.0
    }
}

#[rocket::async_trait]
impl<'r> FromRequest<'r> for Account {
    type Error = ();
    async fn from_request(request: &'r Request<'_>) -> Outcome<Self, Self::Error> {
        let auth = try_outcome!(Auth::from_request(request).await);
        match auth.account_id {
            Some(id) => Outcome::Success(Account(id)),
            None => Outcome::Error((Status::Unauthorized, ())),
        }
    }
}
