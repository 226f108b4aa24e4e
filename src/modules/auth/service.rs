use sqlx::PgPool;
use tracing::instrument;
use uuid::Uuid;

use cinerent_auth::create_token;
use cinerent_config::JwtConfig;
use cinerent_core::AppError;
use cinerent_core::password::verify_password;

use super::model::{LoginDto, LoginResponse};

pub struct AuthService;

impl AuthService {
    /// Exchanges credentials for an identity token. Unknown email and wrong
    /// password produce the same response on purpose.
    #[instrument(skip(db, dto, jwt_config))]
    pub async fn login(
        db: &PgPool,
        dto: LoginDto,
        jwt_config: &JwtConfig,
    ) -> Result<LoginResponse, AppError> {
        #[derive(sqlx::FromRow)]
        struct UserWithPassword {
            id: Uuid,
            name: String,
            email: String,
            password: String,
            is_admin: bool,
        }

        let user = sqlx::query_as::<_, UserWithPassword>(
            "SELECT id, name, email, password, is_admin FROM users WHERE email = $1",
        )
        .bind(&dto.email)
        .fetch_optional(db)
        .await?
        .ok_or_else(|| AppError::bad_request(anyhow::anyhow!("Invalid email or password.")))?;

        let is_valid = verify_password(&dto.password, &user.password)?;

        if !is_valid {
            return Err(AppError::bad_request(anyhow::anyhow!(
                "Invalid email or password."
            )));
        }

        let token = create_token(user.id, &user.name, &user.email, user.is_admin, jwt_config)?;

        Ok(LoginResponse { token })
    }
}
