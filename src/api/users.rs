//! User profile endpoints

use axum::{
    extract::{Path, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    routing::get,
    Router,
};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::api::state::AppState;
use crate::api::types::{ApiError, Json};
use crate::domain::{UserProfileInput, UserRecord};
use crate::infrastructure::user::{RegisterOutcome, UpdateOutcome};

/// Age as submitted: form-style text or a bare JSON number
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum AgeField {
    Text(String),
    Number(serde_json::Number),
}

/// Raw profile form submitted for registration or update
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ProfileFormApiRequest {
    pub username: Option<String>,
    pub full_name: Option<String>,
    pub email: Option<String>,
    pub age: Option<AgeField>,
    pub about: Option<String>,
}

impl From<ProfileFormApiRequest> for UserProfileInput {
    fn from(request: ProfileFormApiRequest) -> Self {
        Self {
            username: request.username.unwrap_or_default(),
            full_name: request.full_name.unwrap_or_default(),
            email: request.email.unwrap_or_default(),
            age: match request.age {
                Some(AgeField::Text(text)) => text,
                Some(AgeField::Number(number)) => number.to_string(),
                None => String::new(),
            },
            about: request.about.unwrap_or_default(),
        }
    }
}

/// User profile response
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UserResponse {
    pub username: String,
    pub full_name: String,
    pub email: String,
    pub age: Option<i64>,
    pub about: String,
}

impl From<&UserRecord> for UserResponse {
    fn from(record: &UserRecord) -> Self {
        Self {
            username: record.username().to_string(),
            full_name: record.full_name().to_string(),
            email: record.email().to_string(),
            age: record.age(),
            about: record.about().to_string(),
        }
    }
}

/// List users response
#[derive(Debug, Clone, Serialize)]
pub struct ListUsersResponse {
    pub users: Vec<UserResponse>,
    pub total: usize,
}

/// Single profile response
#[derive(Debug, Clone, Serialize)]
pub struct ProfileResponse {
    pub user: UserResponse,
}

/// Successful registration or update
#[derive(Debug, Clone, Serialize)]
pub struct SavedProfileResponse {
    pub user: UserResponse,
    pub message: String,
}

/// Prefilled values for an edit form
#[derive(Debug, Clone, Serialize)]
pub struct EditFormResponse {
    pub form: UserProfileInput,
}

/// Rejected form submission
///
/// `user` carries the stored profile when an update was rejected.
#[derive(Debug, Clone, Serialize)]
pub struct ValidationErrorsResponse {
    pub errors: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<UserResponse>,
}

const REGISTERED_MESSAGE: &str = "Registration successful.";
const UPDATED_MESSAGE: &str = "Profile updated.";

/// Create the users router
pub fn create_users_router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_users).post(register_user))
        .route(
            "/{username}",
            get(get_user).put(update_user).post(update_user),
        )
        .route("/{username}/edit", get(edit_user_form))
}

fn profile_location(username: &str) -> String {
    format!("/users/{}", username)
}

fn user_not_found(username: &str) -> ApiError {
    ApiError::not_found(format!("User '{}' not found", username))
}

/// GET /users
pub async fn list_users(
    State(state): State<AppState>,
) -> Result<Json<ListUsersResponse>, ApiError> {
    debug!("Listing users");

    let users = state.user_service.list().await?;

    let users: Vec<UserResponse> = users.iter().map(UserResponse::from).collect();
    let total = users.len();

    Ok(Json(ListUsersResponse { users, total }))
}

/// POST /users
pub async fn register_user(
    State(state): State<AppState>,
    Json(request): Json<ProfileFormApiRequest>,
) -> Result<Response, ApiError> {
    debug!(username = ?request.username, "Registering user");

    let input = UserProfileInput::from(request);

    match state.user_service.register(&input).await? {
        RegisterOutcome::Registered(record) => Ok((
            StatusCode::CREATED,
            [(header::LOCATION, profile_location(record.username()))],
            Json(SavedProfileResponse {
                user: UserResponse::from(&record),
                message: REGISTERED_MESSAGE.to_string(),
            }),
        )
            .into_response()),
        RegisterOutcome::Rejected(errors) => Ok((
            StatusCode::UNPROCESSABLE_ENTITY,
            Json(ValidationErrorsResponse { errors, user: None }),
        )
            .into_response()),
    }
}

/// GET /users/{username}
pub async fn get_user(
    State(state): State<AppState>,
    Path(username): Path<String>,
) -> Result<Json<ProfileResponse>, ApiError> {
    debug!(username = %username, "Getting user profile");

    let record = state
        .user_service
        .profile(&username)
        .await?
        .ok_or_else(|| user_not_found(&username))?;

    Ok(Json(ProfileResponse {
        user: UserResponse::from(&record),
    }))
}

/// GET /users/{username}/edit
pub async fn edit_user_form(
    State(state): State<AppState>,
    Path(username): Path<String>,
) -> Result<Json<EditFormResponse>, ApiError> {
    debug!(username = %username, "Prefilling edit form");

    let form = state
        .user_service
        .edit_form(&username)
        .await?
        .ok_or_else(|| user_not_found(&username))?;

    Ok(Json(EditFormResponse { form }))
}

/// PUT /users/{username} (also accepted as POST)
pub async fn update_user(
    State(state): State<AppState>,
    Path(username): Path<String>,
    Json(request): Json<ProfileFormApiRequest>,
) -> Result<Response, ApiError> {
    debug!(username = %username, "Updating user profile");

    let input = UserProfileInput::from(request);

    match state.user_service.update(&username, &input).await? {
        UpdateOutcome::Updated(record) => Ok((
            StatusCode::OK,
            [(header::LOCATION, profile_location(record.username()))],
            Json(SavedProfileResponse {
                user: UserResponse::from(&record),
                message: UPDATED_MESSAGE.to_string(),
            }),
        )
            .into_response()),
        UpdateOutcome::Rejected { errors, original } => Ok((
            StatusCode::UNPROCESSABLE_ENTITY,
            Json(ValidationErrorsResponse {
                errors,
                user: Some(UserResponse::from(&original)),
            }),
        )
            .into_response()),
        UpdateOutcome::NotFound => Err(user_not_found(&username)),
    }
}
