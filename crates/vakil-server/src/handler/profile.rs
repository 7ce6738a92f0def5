//! Profile completion handlers.
//!
//! The onboarding flow moves an account from freshly provisioned to fully
//! onboarded: role selection, role-specific details, then an explicit
//! finish signal. Advocate submissions are validated field-by-field before
//! anything is written; a violation names the offending field and commits
//! nothing.

use aide::axum::ApiRouter;
use axum::http::StatusCode;
use vakil_core::identity::display_name_from_parts;
use vakil_postgres::model::UpdateAccount;
use vakil_postgres::query::AccountRepository;
use vakil_postgres::types::{AccountRole, ProfileStage};

use super::request::{AvatarUpdateRequest, ProfileSetupRequest};
use super::response::AccountResponse;
use crate::extract::{Json, PgPool, SessionAccount, ValidateJson};
use crate::handler::{Error, ErrorKind, Result};
use crate::service::ServiceState;

/// Tracing target for profile operations.
const TRACING_TARGET: &str = "vakil_server::handler::profile";

/// Rejects advocate submissions with a missing required field.
///
/// Fields are checked in form order so the reported field matches what the
/// user sees first.
fn validate_advocate_fields(request: &ProfileSetupRequest) -> Result<()> {
    fn missing(field: &'static str, label: &str) -> Error<'static> {
        ErrorKind::ValidationError
            .with_resource(field)
            .with_message(format!("{} is required for advocate profiles", label))
    }

    if request
        .bar_registration_no
        .as_deref()
        .is_none_or(|v| v.trim().is_empty())
    {
        return Err(missing("barRegistrationNo", "Bar registration number"));
    }
    if request.years_of_experience.is_none() {
        return Err(missing("yearsOfExperience", "Years of experience"));
    }
    if request.city.as_deref().is_none_or(|v| v.trim().is_empty()) {
        return Err(missing("city", "City"));
    }
    if request
        .specializations
        .as_deref()
        .is_none_or(|v| v.is_empty())
    {
        return Err(missing("specializations", "At least one specialization"));
    }
    if request.languages.as_deref().is_none_or(|v| v.is_empty()) {
        return Err(missing("languages", "At least one language"));
    }
    if request.education.as_deref().is_none_or(|v| v.is_empty()) {
        return Err(missing("education", "At least one practice qualification"));
    }

    Ok(())
}

/// Applies a profile-setup submission to the authenticated account.
#[tracing::instrument(skip_all)]
async fn setup_profile(
    PgPool(mut conn): PgPool,
    session: SessionAccount,
    ValidateJson(request): ValidateJson<ProfileSetupRequest>,
) -> Result<(StatusCode, Json<AccountResponse>)> {
    let account = session.persisted()?;

    tracing::trace!(
        target: TRACING_TARGET,
        account_id = %account.id,
        role = %request.role,
        finish = request.finish,
        "applying profile setup"
    );

    if request.role.is_administrator() {
        return Err(ErrorKind::ValidationError
            .with_resource("role")
            .with_message("Role must be general or advocate"));
    }

    if request.role == AccountRole::Advocate {
        validate_advocate_fields(&request)?;
    }

    // Role selection is always at least one step; details follow once the
    // role-specific fields are present (trivially so for general users).
    let mut stage = account.profile_stage.advance_to(ProfileStage::RoleSelected);
    stage = stage.advance_to(ProfileStage::DetailsComplete);
    if request.finish {
        stage = stage.advance_to(ProfileStage::Complete);
    }

    // The role is re-asserted on every submission, so a half-finished
    // toggle between general and advocate cannot leave a mismatched record
    // once the finish signal lands.
    let updates = UpdateAccount {
        display_name: Some(display_name_from_parts(
            &request.first_name,
            request.last_name.as_deref().unwrap_or_default(),
        )),
        role: Some(request.role),
        profile_stage: Some(stage),
        is_verified: request.finish.then_some(true),
        bar_registration_no: request.bar_registration_no,
        years_of_experience: request.years_of_experience,
        city: request.city,
        specializations: request.specializations,
        bio: request.bio,
        education: request.education,
        languages: request.languages,
        office_address: request.office_address,
        ..Default::default()
    };

    let account = conn.update_account(account.id, updates).await?;

    tracing::info!(
        target: TRACING_TARGET,
        account_id = %account.id,
        profile_stage = %account.profile_stage,
        role = %account.role,
        "profile setup applied"
    );

    Ok((StatusCode::OK, Json(AccountResponse::from_model(account))))
}

/// Updates the avatar image; allowed at any onboarding stage.
#[tracing::instrument(skip_all)]
async fn update_avatar(
    PgPool(mut conn): PgPool,
    session: SessionAccount,
    ValidateJson(request): ValidateJson<AvatarUpdateRequest>,
) -> Result<(StatusCode, Json<AccountResponse>)> {
    let account = session.persisted()?;

    let account = conn
        .update_account(
            account.id,
            UpdateAccount {
                avatar_url: Some(request.avatar_url),
                ..Default::default()
            },
        )
        .await?;

    tracing::info!(
        target: TRACING_TARGET,
        account_id = %account.id,
        "avatar updated"
    );

    Ok((StatusCode::OK, Json(AccountResponse::from_model(account))))
}

/// Returns a [`Router`] with all related routes.
///
/// [`Router`]: axum::routing::Router
pub fn routes(_state: ServiceState) -> ApiRouter<ServiceState> {
    use aide::axum::routing::*;

    ApiRouter::new()
        .api_route("/account/profile", post(setup_profile))
        .api_route("/account/avatar", patch(update_avatar))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn advocate_request() -> ProfileSetupRequest {
        ProfileSetupRequest {
            role: AccountRole::Advocate,
            first_name: "Priya".to_owned(),
            last_name: Some("Sharma".to_owned()),
            bar_registration_no: Some("MH/123/2010".to_owned()),
            years_of_experience: Some(12),
            city: Some("Mumbai".to_owned()),
            specializations: Some(vec!["Family Law".to_owned()]),
            bio: None,
            education: Some(vec!["LLB, Government Law College".to_owned()]),
            languages: Some(vec!["Hindi".to_owned(), "English".to_owned()]),
            office_address: None,
            finish: true,
        }
    }

    #[test]
    fn complete_advocate_submission_passes() {
        assert!(validate_advocate_fields(&advocate_request()).is_ok());
    }

    #[test]
    fn missing_bar_number_is_named() {
        let mut request = advocate_request();
        request.bar_registration_no = None;

        let error = validate_advocate_fields(&request).unwrap_err();
        assert_eq!(error.kind(), ErrorKind::ValidationError);
        assert_eq!(error.resource(), Some("barRegistrationNo"));
    }

    #[test]
    fn blank_city_is_named() {
        let mut request = advocate_request();
        request.city = Some("  ".to_owned());

        let error = validate_advocate_fields(&request).unwrap_err();
        assert_eq!(error.resource(), Some("city"));
    }

    #[test]
    fn empty_specializations_are_named() {
        let mut request = advocate_request();
        request.specializations = Some(vec![]);

        let error = validate_advocate_fields(&request).unwrap_err();
        assert_eq!(error.resource(), Some("specializations"));
    }

    #[test]
    fn empty_languages_are_named() {
        let mut request = advocate_request();
        request.languages = None;

        let error = validate_advocate_fields(&request).unwrap_err();
        assert_eq!(error.resource(), Some("languages"));
    }
}
