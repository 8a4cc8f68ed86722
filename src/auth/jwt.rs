use anyhow::Context;
use chrono::{TimeDelta, Utc};
use jsonwebtoken::{DecodingKey, EncodingKey, Header, TokenData, Validation, decode, encode};
use secrecy::ExposeSecret;
use uuid::Uuid;

use crate::{config::Jwt, error::Error};

use super::error::AuthError;

pub const ADMIN_SUBJECT: &str = "admin";

#[derive(serde::Deserialize, serde::Serialize, Debug, Clone)]
pub struct Claim {
    pub sub: String,
    pub jti: Uuid,
    pub exp: usize,
    aud: String,
    iss: String,
    iat: usize,
}

pub fn encode_jwt(jwt: &Jwt) -> Result<(String, Claim), Error> {
    let now = Utc::now();
    let expire = TimeDelta::try_hours(jwt.session_hours)
        .and_then(|session| now.checked_add_signed(session))
        .context("session length is out of range")
        .map_err(Error::Other)?;
    let exp = usize::try_from(expire.timestamp())
        .context("session expiry is before the epoch")
        .map_err(Error::Other)?;
    let iat = usize::try_from(now.timestamp())
        .context("clock is before the epoch")
        .map_err(Error::Other)?;

    let claim = Claim {
        sub: ADMIN_SUBJECT.to_string(),
        jti: Uuid::new_v4(),
        aud: jwt.aud.expose_secret().to_string(),
        iss: jwt.iss.expose_secret().to_string(),
        iat,
        exp,
    };

    let token = encode(
        &Header::default(),
        &claim,
        &EncodingKey::from_secret(jwt.secret.expose_secret().as_bytes()),
    )
    .map_err(|e| Error::Auth(AuthError::JwtError(e)))?;

    Ok((token, claim))
}

pub fn decode_jwt(jwt_token: &str, jwt: &Jwt) -> Result<TokenData<Claim>, Error> {
    let mut validation = Validation::default();
    validation.set_issuer(&[jwt.iss.expose_secret()]);
    validation.set_audience(&[jwt.aud.expose_secret()]);
    validation.sub = Some(ADMIN_SUBJECT.to_string());

    decode::<Claim>(
        jwt_token,
        &DecodingKey::from_secret(jwt.secret.expose_secret().as_bytes()),
        &validation,
    )
    .map_err(|e| Error::Auth(AuthError::JwtError(e)))
}
