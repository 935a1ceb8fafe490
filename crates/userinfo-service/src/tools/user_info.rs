//! `get_my_user_information` tool

use async_trait::async_trait;
use tracing::{info, instrument};

use crate::services::{ServiceContext, ServiceResult, UserInfoService};

use super::{Caller, Tool, ToolOutput};

/// Reports the calling user's own profile and remaining quota.
///
/// Takes no input; whatever the host passes is ignored.
#[derive(Debug, Clone, Copy, Default)]
pub struct GetMyUserInformation;

impl GetMyUserInformation {
    pub const NAME: &'static str = "get_my_user_information";
}

#[async_trait]
impl Tool for GetMyUserInformation {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn description(&self) -> &'static str {
        "获取当前登录的用户个人信息。 始终没有输入参数。"
    }

    fn return_direct(&self) -> bool {
        true
    }

    #[instrument(skip(self, ctx, caller, _input), fields(email = %caller.email))]
    async fn invoke(
        &self,
        ctx: &ServiceContext,
        caller: &Caller,
        _input: &str,
    ) -> ServiceResult<ToolOutput> {
        info!("Fetching user information for caller");

        let report = UserInfoService::new(ctx).report(&caller.email).await?;
        Ok(ToolOutput::direct(report))
    }
}
