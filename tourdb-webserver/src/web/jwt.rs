use std::collections::HashSet;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use anyhow::{anyhow, Result};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use parking_lot::{Mutex, MutexGuard};
use serde::{Deserialize, Serialize};
use tourdb_entities::id::Id;

const TOKEN_VALIDITY: Duration = Duration::from_secs(24 * 60 * 60);

#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    /// The id of the account.
    sub: String,
    /// Expiry time as Unix timestamp
    exp: usize,
}

pub struct JwtState {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    blacklist: Mutex<HashSet<String>>,
}

fn generate_secret() -> String {
    use base64::Engine as _;
    base64::engine::general_purpose::STANDARD.encode(rand::random::<[u8; 32]>())
}

impl JwtState {
    pub fn new(secret: Option<&str>) -> Self {
        let secret = match secret {
            Some(secret) => secret.to_owned(),
            None => generate_secret(),
        };
        Self {
            encoding_key: EncodingKey::from_secret(secret.as_ref()),
            decoding_key: DecodingKey::from_secret(secret.as_ref()),
            blacklist: Mutex::new(HashSet::new()),
        }
    }

    pub fn generate_token(&self, user_id: &Id) -> Result<String> {
        let exp = usize::try_from(
            (SystemTime::now() + TOKEN_VALIDITY)
                .duration_since(UNIX_EPOCH)?
                .as_secs(),
        )?;
        let claims = Claims {
            sub: user_id.to_string(),
            exp,
        };
        let token = encode(&Header::default(), &claims, &self.encoding_key)?;
        Ok(token)
    }

    pub fn validate_token_and_get_user_id(&self, token: &str) -> Result<Id> {
        if self.is_on_blacklist(token) {
            return Err(anyhow!("Token is no longer valid"));
        }
        let claims = self.decode(token)?;
        Ok(claims.sub.into())
    }

    pub fn blacklist_token(&self, token: String) {
        self.remove_invalid_tokens(); // do housekeeping
        self.lock().insert(token);
    }

    fn decode(&self, token: &str) -> Result<Claims> {
        let token_data = decode::<Claims>(token, &self.decoding_key, &Validation::default())?;
        Ok(token_data.claims)
    }

    fn is_on_blacklist(&self, token: &str) -> bool {
        self.lock().get(token).is_some()
    }

    // TODO: maybe this can be done more efficiently
    fn remove_invalid_tokens(&self) {
        let invalid_tokens = self
            .lock()
            .iter()
            .filter(|token| self.decode(token).is_err())
            .cloned()
            .collect::<Vec<_>>();
        for token in invalid_tokens {
            self.lock().remove(&token);
        }
    }

    fn lock(&self) -> MutexGuard<HashSet<String>> {
        self.blacklist.lock()
    }
}
