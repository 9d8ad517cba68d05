use utoipa::OpenApi;
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(ToSchema)]
pub struct HealthResponse { pub status: String }

#[derive(ToSchema)]
pub struct EmployeeDoc { pub id: Uuid, pub first_name: String, pub last_name: String, pub email: String }

/// Every field is required on create; on update absent fields are kept.
#[derive(ToSchema)]
pub struct EmployeeInputDoc { pub first_name: Option<String>, pub last_name: Option<String>, pub email: Option<String> }

#[derive(ToSchema)]
pub struct SocialAccountDoc {
    pub id: Uuid,
    /// `INSTAGRAM` or `TIKTOK`
    pub platform: String,
    pub username: String,
}

#[derive(ToSchema)]
pub struct SocialAccountInputDoc {
    /// Case-insensitive `INSTAGRAM` or `TIKTOK`
    pub platform: String,
    /// Instagram usernames must start with `@`
    pub username: String,
}

#[derive(ToSchema)]
pub struct InfluencerDoc {
    pub id: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub social_media_accounts: Vec<SocialAccountDoc>,
    pub manager: Option<EmployeeDoc>,
}

#[derive(ToSchema)]
pub struct InfluencerInputDoc {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    /// Write-only. On update, omitting it clears the manager.
    pub manager_id: Option<Uuid>,
    /// Required on create (may be empty). On update, a non-empty list replaces every stored account.
    pub social_media_accounts: Option<Vec<SocialAccountInputDoc>>,
}

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::health,
        crate::routes::employees::list,
        crate::routes::employees::create,
        crate::routes::employees::get,
        crate::routes::employees::update,
        crate::routes::employees::delete,
        crate::routes::influencers::list,
        crate::routes::influencers::create,
        crate::routes::influencers::get,
        crate::routes::influencers::update,
        crate::routes::influencers::delete,
    ),
    components(
        schemas(
            HealthResponse,
            EmployeeDoc,
            EmployeeInputDoc,
            SocialAccountDoc,
            SocialAccountInputDoc,
            InfluencerDoc,
            InfluencerInputDoc,
        )
    ),
    tags(
        (name = "health"),
        (name = "employees"),
        (name = "influencers")
    )
)]
pub struct ApiDoc;
