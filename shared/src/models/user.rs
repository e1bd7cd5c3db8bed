//! User Model

use serde::{Deserialize, Serialize};

/// Marketplace role
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    Farmer,
    Buyer,
    Distributor,
}

impl UserRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            UserRole::Farmer => "farmer",
            UserRole::Buyer => "buyer",
            UserRole::Distributor => "distributor",
        }
    }
}

/// User record as persisted in the `users` collection.
///
/// The argon2 hash travels with the record into storage; API responses
/// use [`UserPublic`], which carries no credential material.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub role: UserRole,
    pub name: String,
    pub email: String,
    pub password_hash: String,
    #[serde(default)]
    pub created_at: i64,
}

/// User response (without password hash)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UserPublic {
    pub id: String,
    pub role: UserRole,
    pub name: String,
    pub email: String,
}

/// Create user payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserCreate {
    pub name: String,
    pub email: String,
    pub password: String,
    pub role: UserRole,
}

/// Update user payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserUpdate {
    pub name: Option<String>,
    pub email: Option<String>,
}

impl User {
    /// Verify password using argon2
    pub fn verify_password(&self, password: &str) -> Result<bool, argon2::password_hash::Error> {
        use argon2::{
            Argon2,
            password_hash::{PasswordHash, PasswordVerifier},
        };

        let parsed_hash = PasswordHash::new(&self.password_hash)?;
        Ok(Argon2::default()
            .verify_password(password.as_bytes(), &parsed_hash)
            .is_ok())
    }

    /// Hash password using argon2
    pub fn hash_password(password: &str) -> Result<String, argon2::password_hash::Error> {
        use argon2::{
            Argon2,
            password_hash::{PasswordHasher, SaltString, rand_core::OsRng},
        };

        let salt = SaltString::generate(&mut OsRng);
        let argon2 = Argon2::default();
        let password_hash = argon2.hash_password(password.as_bytes(), &salt)?;
        Ok(password_hash.to_string())
    }
}

impl From<&User> for UserPublic {
    fn from(user: &User) -> Self {
        Self {
            id: user.id.clone(),
            role: user.role,
            name: user.name.clone(),
            email: user.email.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::util::{new_id, now_millis};

    fn sample_user(password_hash: String) -> User {
        User {
            id: new_id(),
            role: UserRole::Farmer,
            name: "Ama Farmer".to_string(),
            email: "farmer@example.com".to_string(),
            password_hash,
            created_at: now_millis(),
        }
    }

    #[test]
    fn hash_then_verify_accepts_the_original_password() {
        let hash = User::hash_password("pass123").unwrap();
        let user = sample_user(hash);

        assert!(user.verify_password("pass123").unwrap());
        assert!(!user.verify_password("wrong-password").unwrap());
    }

    #[test]
    fn hashes_are_salted() {
        // 相同密码两次哈希结果不同（随机盐）
        let a = User::hash_password("pass123").unwrap();
        let b = User::hash_password("pass123").unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn role_wire_format_is_lowercase() {
        assert_eq!(serde_json::to_string(&UserRole::Farmer).unwrap(), "\"farmer\"");
        assert_eq!(serde_json::to_string(&UserRole::Buyer).unwrap(), "\"buyer\"");
        assert_eq!(
            serde_json::to_string(&UserRole::Distributor).unwrap(),
            "\"distributor\""
        );

        let role: UserRole = serde_json::from_str("\"buyer\"").unwrap();
        assert_eq!(role, UserRole::Buyer);
    }

    #[test]
    fn public_projection_drops_credential_material() {
        let user = sample_user(User::hash_password("pass123").unwrap());
        let public = UserPublic::from(&user);

        let json = serde_json::to_string(&public).unwrap();
        assert!(!json.contains("password"));
        assert_eq!(public.email, user.email);
    }
}
