//! User data repository for database operations.
//!
//! This module provides the `UserRepository` for account records: registration, lookups by
//! the unique login identifiers, profile edits, and credential changes. Entity models are
//! converted to the `User` domain model at this boundary so password hashes only leave the
//! repository through the `find_credentials_by_*` lookups.

use std::collections::HashMap;

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    IntoActiveModel, PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::model::user::{CreateUserParams, UpdateProfileParams, User};

/// Repository providing database operations for user accounts.
pub struct UserRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserRepository<'a> {
    /// Creates a new UserRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `UserRepository` - New repository instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a new account.
    ///
    /// Uniqueness of username and email is enforced by the table's unique indexes; callers
    /// check availability first to produce friendly errors.
    ///
    /// # Arguments
    /// - `param` - Username, email, password hash, nickname, and role for the new account
    ///
    /// # Returns
    /// - `Ok(User)` - The created user
    /// - `Err(DbErr)` - Database error, including unique constraint violations
    pub async fn create(&self, param: CreateUserParams) -> Result<User, DbErr> {
        let now = Utc::now();
        let entity = entity::user::ActiveModel {
            username: ActiveValue::Set(param.username),
            email: ActiveValue::Set(param.email),
            password_hash: ActiveValue::Set(param.password_hash),
            nickname: ActiveValue::Set(param.nickname),
            role: ActiveValue::Set(param.role),
            avatar: ActiveValue::Set(None),
            description: ActiveValue::Set(None),
            face_photo: ActiveValue::Set(None),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(User::from_entity(entity))
    }

    /// Finds a user by primary key.
    ///
    /// # Returns
    /// - `Ok(Some(User))` - User found
    /// - `Ok(None)` - No user with that id
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_id(&self, user_id: i32) -> Result<Option<User>, DbErr> {
        let entity = entity::prelude::User::find_by_id(user_id)
            .one(self.db)
            .await?;

        Ok(entity.map(User::from_entity))
    }

    /// Finds the full account row, including the password hash, by username.
    ///
    /// Used only by login and credential checks, which need the hash.
    ///
    /// # Returns
    /// - `Ok(Some(Model))` - Account row found
    /// - `Ok(None)` - No account with that username
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_credentials_by_username(
        &self,
        username: &str,
    ) -> Result<Option<entity::user::Model>, DbErr> {
        entity::prelude::User::find()
            .filter(entity::user::Column::Username.eq(username))
            .one(self.db)
            .await
    }

    /// Finds the full account row by email.
    pub async fn find_credentials_by_email(
        &self,
        email: &str,
    ) -> Result<Option<entity::user::Model>, DbErr> {
        entity::prelude::User::find()
            .filter(entity::user::Column::Email.eq(email))
            .one(self.db)
            .await
    }

    /// Finds the full account row by nickname. Nicknames are not unique, so the oldest
    /// account wins.
    pub async fn find_credentials_by_nickname(
        &self,
        nickname: &str,
    ) -> Result<Option<entity::user::Model>, DbErr> {
        entity::prelude::User::find()
            .filter(entity::user::Column::Nickname.eq(nickname))
            .order_by_asc(entity::user::Column::Id)
            .one(self.db)
            .await
    }

    /// Finds the full account row by id.
    pub async fn find_credentials_by_id(
        &self,
        user_id: i32,
    ) -> Result<Option<entity::user::Model>, DbErr> {
        entity::prelude::User::find_by_id(user_id).one(self.db).await
    }

    /// Checks whether a username is already registered.
    pub async fn username_taken(&self, username: &str) -> Result<bool, DbErr> {
        let count = entity::prelude::User::find()
            .filter(entity::user::Column::Username.eq(username))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Checks whether an email is already registered.
    pub async fn email_taken(&self, email: &str) -> Result<bool, DbErr> {
        let count = entity::prelude::User::find()
            .filter(entity::user::Column::Email.eq(email))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Checks whether a nickname is used by an account other than `except_id`.
    pub async fn nickname_taken(&self, nickname: &str, except_id: i32) -> Result<bool, DbErr> {
        let count = entity::prelude::User::find()
            .filter(entity::user::Column::Nickname.eq(nickname))
            .filter(entity::user::Column::Id.ne(except_id))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Applies a partial profile update. Absent fields keep their stored values.
    ///
    /// # Returns
    /// - `Ok(Some(User))` - The updated user
    /// - `Ok(None)` - No user with that id
    /// - `Err(DbErr)` - Database error during update
    pub async fn update_profile(
        &self,
        user_id: i32,
        param: UpdateProfileParams,
    ) -> Result<Option<User>, DbErr> {
        let Some(entity) = entity::prelude::User::find_by_id(user_id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut active = entity.into_active_model();
        if let Some(nickname) = param.nickname {
            active.nickname = ActiveValue::Set(nickname);
        }
        if let Some(avatar) = param.avatar {
            active.avatar = ActiveValue::Set(Some(avatar));
        }
        if let Some(description) = param.description {
            active.description = ActiveValue::Set(Some(description));
        }
        if let Some(face_photo) = param.face_photo {
            active.face_photo = ActiveValue::Set(Some(face_photo));
        }
        active.updated_at = ActiveValue::Set(Utc::now());

        let updated = active.update(self.db).await?;
        Ok(Some(User::from_entity(updated)))
    }

    /// Replaces the email of an account.
    pub async fn update_email(&self, user_id: i32, email: &str) -> Result<(), DbErr> {
        entity::prelude::User::update_many()
            .filter(entity::user::Column::Id.eq(user_id))
            .col_expr(
                entity::user::Column::Email,
                sea_orm::sea_query::Expr::value(email),
            )
            .col_expr(
                entity::user::Column::UpdatedAt,
                sea_orm::sea_query::Expr::value(Utc::now()),
            )
            .exec(self.db)
            .await?;
        Ok(())
    }

    /// Replaces the password hash of an account.
    pub async fn update_password(&self, user_id: i32, password_hash: &str) -> Result<(), DbErr> {
        entity::prelude::User::update_many()
            .filter(entity::user::Column::Id.eq(user_id))
            .col_expr(
                entity::user::Column::PasswordHash,
                sea_orm::sea_query::Expr::value(password_hash),
            )
            .col_expr(
                entity::user::Column::UpdatedAt,
                sea_orm::sea_query::Expr::value(Utc::now()),
            )
            .exec(self.db)
            .await?;
        Ok(())
    }

    /// Loads several users at once, keyed by id.
    ///
    /// Used to attach author identity to comment pages and contributor lists without a
    /// query per row.
    pub async fn find_many(&self, ids: &[i32]) -> Result<HashMap<i32, entity::user::Model>, DbErr> {
        load_users(self.db, ids).await
    }
}

/// Loads users by id on any connection.
pub async fn load_users<C: sea_orm::ConnectionTrait>(
    conn: &C,
    ids: &[i32],
) -> Result<HashMap<i32, entity::user::Model>, DbErr> {
    if ids.is_empty() {
        return Ok(HashMap::new());
    }

    let mut ids = ids.to_vec();
    ids.sort_unstable();
    ids.dedup();

    let users = entity::prelude::User::find()
        .filter(entity::user::Column::Id.is_in(ids))
        .all(conn)
        .await?;

    Ok(users.into_iter().map(|u| (u.id, u)).collect())
}
