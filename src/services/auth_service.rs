//! 认证服务：注册、登录

use crate::{
    auth::jwt::JwtService,
    auth::password::PasswordHasher,
    error::AppError,
    models::user::{LoginRequest, RegisterRequest, TokenResponse},
    repository::user_repo::UserRepository,
};
use sqlx::PgPool;
use std::sync::Arc;
use validator::Validate;

pub struct AuthService {
    db: PgPool,
    jwt_service: Arc<JwtService>,
}

impl AuthService {
    pub fn new(db: PgPool, jwt_service: Arc<JwtService>) -> Self {
        Self { db, jwt_service }
    }

    /// 用户注册
    /// 用户名重复时由存储层唯一约束产生 Conflict
    pub async fn register(&self, req: RegisterRequest) -> Result<TokenResponse, AppError> {
        req.validate()?;

        let hasher = PasswordHasher::new();
        let password_hash = hasher.hash(&req.password)?;

        let user_repo = UserRepository::new(self.db.clone());
        let user = user_repo.create(&req.username, &password_hash).await?;

        tracing::info!(username = %user.username, "User registered");

        let token = self.jwt_service.issue(&user.username)?;
        Ok(TokenResponse::bearer(token))
    }

    /// 用户登录
    /// 用户不存在与密码错误返回同一错误，避免泄露账户是否存在
    pub async fn login(&self, req: LoginRequest) -> Result<TokenResponse, AppError> {
        let user_repo = UserRepository::new(self.db.clone());

        let user = user_repo
            .find_by_username(&req.username)
            .await?
            .ok_or(AppError::InvalidCredentials)?;

        let hasher = PasswordHasher::new();
        if !hasher.verify(&req.password, &user.password_hash) {
            return Err(AppError::InvalidCredentials);
        }

        tracing::info!(username = %user.username, "User logged in");

        let token = self.jwt_service.issue(&user.username)?;
        Ok(TokenResponse::bearer(token))
    }
}
