//! In-process [`UserStore`] for handler tests.

use super::UserStore;
use crate::error::AppError;
use crate::model::{NewUser, User};
use async_trait::async_trait;
use std::sync::Mutex;

#[derive(Default)]
pub(crate) struct MemoryUserStore {
    inner: Mutex<Inner>,
    /// When set, every call fails as if the database were unreachable.
    failing: bool,
}

#[derive(Default)]
struct Inner {
    rows: Vec<User>,
    last_id: i32,
}

impl MemoryUserStore {
    pub(crate) fn failing() -> Self {
        Self {
            failing: true,
            ..Self::default()
        }
    }

    pub(crate) fn with_users(users: &[(&str, &str)]) -> Self {
        let store = Self::default();
        {
            let mut inner = store.inner.lock().unwrap();
            for (name, email) in users {
                inner.last_id += 1;
                let id = inner.last_id;
                inner.rows.push(User {
                    id,
                    name: name.to_string(),
                    email: email.to_string(),
                });
            }
        }
        store
    }

    fn check(&self) -> Result<(), AppError> {
        if self.failing {
            return Err(AppError::Db(sqlx::Error::PoolClosed));
        }
        Ok(())
    }
}

#[async_trait]
impl UserStore for MemoryUserStore {
    async fn list(&self) -> Result<Vec<User>, AppError> {
        self.check()?;
        Ok(self.inner.lock().unwrap().rows.clone())
    }

    async fn get(&self, id: i32) -> Result<Option<User>, AppError> {
        self.check()?;
        let inner = self.inner.lock().unwrap();
        Ok(inner.rows.iter().find(|u| u.id == id).cloned())
    }

    async fn create(&self, input: &NewUser) -> Result<User, AppError> {
        self.check()?;
        let mut inner = self.inner.lock().unwrap();
        inner.last_id += 1;
        let user = input.clone().into_user(inner.last_id);
        inner.rows.push(user.clone());
        Ok(user)
    }

    async fn update(&self, id: i32, input: &NewUser) -> Result<bool, AppError> {
        self.check()?;
        let mut inner = self.inner.lock().unwrap();
        match inner.rows.iter_mut().find(|u| u.id == id) {
            Some(user) => {
                user.name = input.name.clone();
                user.email = input.email.clone();
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn delete(&self, id: i32) -> Result<bool, AppError> {
        self.check()?;
        let mut inner = self.inner.lock().unwrap();
        let before = inner.rows.len();
        inner.rows.retain(|u| u.id != id);
        Ok(inner.rows.len() < before)
    }

    async fn ping(&self) -> Result<(), AppError> {
        self.check()
    }
}
