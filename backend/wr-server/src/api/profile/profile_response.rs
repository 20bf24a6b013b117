use crate::ProfileDto;

use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct ProfileResponse {
    pub profile: ProfileDto,
}
