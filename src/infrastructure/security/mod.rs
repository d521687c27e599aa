mod argon2_hasher;
mod jwt_issuer;

pub use argon2_hasher::Argon2Hasher;
pub use jwt_issuer::{AccessTokenClaims, JwtTokenIssuer};
