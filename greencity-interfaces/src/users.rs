//! User lookup contract used by the principal argument resolver

use async_trait::async_trait;
use greencity_api_types::UserVo;

use crate::error::ServiceResult;

/// Resolves authenticated principals to domain users
#[cfg_attr(feature = "mocks", mockall::automock)]
#[async_trait]
pub trait UserService: Send + Sync {
    /// Look up the user behind an email principal. Fails with
    /// `NotFound` when no such user exists, which fails the whole
    /// request.
    async fn find_by_email(&self, email: &str) -> ServiceResult<UserVo>;
}
