use crate::api::errors::ApiError;
use crate::constants::EXECUTION_ERROR_PREFIX;
use crate::crew::{AgentType, Role, RoleDescriptor};
use crate::errors::ErrorKind;
use crate::profile::Profile;
use crate::service::FreelanceCrew;
use axum::{extract::Extension, Json};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use std::sync::Arc;
use tracing::error;
use uuid::Uuid;

/// Request payload running one agent type on a profile
#[derive(Deserialize)]
pub struct CreateRunRequest {
    #[serde(default)]
    pub profile: Profile,
    pub agent_type: String,
}

/// Request payload running every role, one after another
#[derive(Deserialize)]
pub struct CreateAllRunsRequest {
    #[serde(default)]
    pub profile: Profile,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RunStatus {
    Completed,
    Failed,
}

/// Outcome of one run
#[derive(Debug, Serialize)]
pub struct RunResponse {
    pub id: String,
    pub agent_type: String,
    pub status: RunStatus,
    /// Crew output, or the error message shown to the user
    pub result: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_kind: Option<ErrorKind>,
    pub created_at: String,
}

/// Public description of a role
#[derive(Debug, Serialize)]
pub struct RoleInfo {
    pub key: &'static str,
    pub title: &'static str,
    pub name: &'static str,
    pub goal: &'static str,
}

pub async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

/// Lists the roles of the crew in dispatch order
pub async fn list_roles() -> Json<Vec<RoleInfo>> {
    let roles = Role::ALL
        .into_iter()
        .map(|role| {
            let descriptor = RoleDescriptor::for_role(role, vec![]);
            RoleInfo {
                key: role.key(),
                title: role.title(),
                name: descriptor.name,
                goal: descriptor.goal,
            }
        })
        .collect();
    Json(roles)
}

/// Runs the agents of `agent_type` on the given profile
///
/// # Returns
/// * `Result<Json<RunResponse>, ApiError>` - Run outcome, or 400 for an unknown agent type
#[axum::debug_handler]
pub async fn create_run(
    Extension(crew): Extension<Arc<FreelanceCrew>>,
    Json(payload): Json<CreateRunRequest>,
) -> Result<Json<RunResponse>, ApiError> {
    payload
        .agent_type
        .parse::<AgentType>()
        .map_err(ApiError::bad_request)?;

    Ok(Json(
        run_one(&crew, &payload.profile, &payload.agent_type).await,
    ))
}

/// Runs positioning, finance and marketing one after another
#[axum::debug_handler]
pub async fn create_all_runs(
    Extension(crew): Extension<Arc<FreelanceCrew>>,
    Json(payload): Json<CreateAllRunsRequest>,
) -> Json<Vec<RunResponse>> {
    let mut runs = Vec::with_capacity(Role::ALL.len());
    for role in Role::ALL {
        runs.push(run_one(&crew, &payload.profile, role.key()).await);
    }
    Json(runs)
}

async fn run_one(crew: &FreelanceCrew, profile: &Profile, agent_type: &str) -> RunResponse {
    let id = Uuid::new_v4().to_string();
    let created_at = Utc::now().to_rfc3339();

    match crew.execute(profile, agent_type).await {
        Ok(result) => RunResponse {
            id,
            agent_type: agent_type.to_string(),
            status: RunStatus::Completed,
            result,
            error_kind: None,
            created_at,
        },
        Err(e) => {
            error!("Run {} ({}) failed: {}", id, agent_type, e);
            RunResponse {
                id,
                agent_type: agent_type.to_string(),
                status: RunStatus::Failed,
                result: format!("{}{}", EXECUTION_ERROR_PREFIX, e.message),
                error_kind: Some(e.kind),
                created_at,
            }
        }
    }
}
