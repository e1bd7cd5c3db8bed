//! 认证与会话
//!
//! 邮箱 + 口令注册/登录，口令以 Argon2 哈希落盘。会话是存储里的
//! 单个当前用户 id（`currentUserId` 键），跨进程重启仍然有效，
//! 直到显式登出。

use thiserror::Error;

use shared::models::{User, UserPublic, UserRole};
use shared::util::{new_id, now_millis};

use crate::store::{MarketStore, StorageError};

#[derive(Debug, Error)]
pub enum AuthError {
    #[error("Email already registered.")]
    EmailTaken,

    #[error("Invalid email or password.")]
    InvalidCredentials,

    #[error("Not logged in.")]
    NotAuthenticated,

    #[error("存储错误: {0}")]
    Storage(#[from] StorageError),

    #[error("口令哈希失败: {0}")]
    Hash(argon2::password_hash::Error),
}

pub type AuthResult<T> = Result<T, AuthError>;

/// 邮箱归一化：去空白 + 小写
fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

#[derive(Clone)]
pub struct AuthService {
    store: MarketStore,
}

impl AuthService {
    pub fn new(store: MarketStore) -> Self {
        Self { store }
    }

    /// 注册新用户并立即登录
    pub fn register(
        &self,
        name: &str,
        email: &str,
        password: &str,
        role: UserRole,
    ) -> AuthResult<UserPublic> {
        let email = normalize_email(email);

        let mut users = self.store.users()?;
        if users.iter().any(|u| normalize_email(&u.email) == email) {
            return Err(AuthError::EmailTaken);
        }

        let password_hash = User::hash_password(password).map_err(AuthError::Hash)?;

        let user = User {
            id: new_id(),
            role,
            name: name.trim().to_string(),
            email,
            password_hash,
            created_at: now_millis(),
        };

        let public = UserPublic::from(&user);
        users.push(user);
        self.store.put_users(&users)?;
        self.store.set_current_user_id(&public.id)?;

        tracing::info!("User {} registered as {}", public.id, public.role.as_str());

        Ok(public)
    }

    /// 登录
    ///
    /// 账号不存在和口令错误返回同一个错误，对外不可区分。
    pub fn login(&self, email: &str, password: &str) -> AuthResult<UserPublic> {
        let email = normalize_email(email);

        let users = self.store.users()?;
        let user = users
            .iter()
            .find(|u| normalize_email(&u.email) == email)
            .ok_or(AuthError::InvalidCredentials)?;

        let verified = user.verify_password(password).map_err(AuthError::Hash)?;
        if !verified {
            return Err(AuthError::InvalidCredentials);
        }

        self.store.set_current_user_id(&user.id)?;

        tracing::info!("User {} logged in", user.id);

        Ok(UserPublic::from(user))
    }

    /// 登出（重复调用无害）
    pub fn logout(&self) -> AuthResult<()> {
        self.store.clear_current_user()?;
        Ok(())
    }

    /// 当前登录用户
    ///
    /// 会话指向的用户已不存在时视为未登录。
    pub fn current_user(&self) -> AuthResult<Option<UserPublic>> {
        let Some(id) = self.store.current_user_id()? else {
            return Ok(None);
        };

        let users = self.store.users()?;
        Ok(users.iter().find(|u| u.id == id).map(UserPublic::from))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn service() -> AuthService {
        AuthService::new(MarketStore::open_in_memory().unwrap())
    }

    #[test]
    fn register_then_login_round_trip() {
        let auth = service();

        let registered = auth
            .register("Ama Farmer", "farmer@example.com", "pass123", UserRole::Farmer)
            .unwrap();
        assert_eq!(registered.role, UserRole::Farmer);

        // 注册即登录
        let current = auth.current_user().unwrap().unwrap();
        assert_eq!(current.id, registered.id);

        auth.logout().unwrap();
        assert!(auth.current_user().unwrap().is_none());

        let logged_in = auth.login("farmer@example.com", "pass123").unwrap();
        assert_eq!(logged_in.id, registered.id);
    }

    #[test]
    fn duplicate_email_is_rejected() {
        let auth = service();

        auth.register("Ama", "farmer@example.com", "pass123", UserRole::Farmer)
            .unwrap();

        let err = auth
            .register("Impostor", "FARMER@example.com ", "other", UserRole::Buyer)
            .unwrap_err();
        assert!(matches!(err, AuthError::EmailTaken));
    }

    #[test]
    fn wrong_password_and_unknown_email_are_indistinguishable() {
        let auth = service();
        auth.register("Ama", "farmer@example.com", "pass123", UserRole::Farmer)
            .unwrap();

        let wrong_password = auth.login("farmer@example.com", "nope").unwrap_err();
        let unknown_email = auth.login("ghost@example.com", "pass123").unwrap_err();

        assert_eq!(wrong_password.to_string(), unknown_email.to_string());
    }

    #[test]
    fn login_normalizes_email() {
        let auth = service();
        auth.register("Ama", " Farmer@Example.COM ", "pass123", UserRole::Farmer)
            .unwrap();
        auth.logout().unwrap();

        assert!(auth.login("farmer@example.com", "pass123").is_ok());
    }

    #[test]
    fn dangling_session_counts_as_logged_out() {
        let auth = service();
        auth.store.set_current_user_id("u_gone").unwrap();

        assert!(auth.current_user().unwrap().is_none());
    }
}
