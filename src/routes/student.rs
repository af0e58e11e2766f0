use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Json, Response},
    Extension,
};

use crate::dto::dashboard_dto::StudentDashboard;
use crate::dto::notice_dto::Notice;
use crate::dto::survey_dto::{
    SurveyCompletionRequest, SurveyCompletionResponse, SurveyForCompletion,
};
use crate::error::{Error, Result};
use crate::middleware::auth::CurrentSession;
use crate::models::question::{single_choice_questions, SingleChoiceQuestion};
use crate::models::survey::Survey;
use crate::routes::teacher::survey_card;
use crate::services::grading_service::GradingService;
use crate::services::session_service::PatchOutcome;
use crate::utils::notice::{error_notice, precondition_notice};
use crate::utils::time::now;
use crate::AppState;

async fn load_gradable_survey(
    state: &AppState,
    survey_id: i64,
) -> Result<(Survey, Vec<SingleChoiceQuestion>)> {
    let survey = state.survey_service.get(survey_id).await?;
    let questions = single_choice_questions(&survey.questions)
        .map_err(|e| Error::MalformedSurvey(format!("survey {}: {}", survey_id, e)))?;
    Ok((survey, questions))
}

#[axum::debug_handler]
pub async fn dashboard(Extension(session): Extension<CurrentSession>) -> Json<StudentDashboard> {
    let at = now();
    let snapshot = session.snapshot;
    let pending = snapshot
        .available_surveys
        .iter()
        .filter(|s| snapshot.completed(s.survey_id).is_none())
        .map(|s| survey_card(s, at))
        .collect();

    Json(StudentDashboard {
        user_name: snapshot.user_name.clone(),
        pending,
        completed: snapshot.student_grades.clone(),
        disciplines: snapshot.available_disciplines.clone(),
    })
}

#[axum::debug_handler]
pub async fn get_survey(State(state): State<AppState>, Path(survey_id): Path<i64>) -> Response {
    match load_gradable_survey(&state, survey_id).await {
        Ok((survey, questions)) => Json(SurveyForCompletion::new(&survey, &questions)).into_response(),
        Err(e) => error_notice(e, &[], "Failed to load survey"),
    }
}

#[axum::debug_handler]
pub async fn complete_survey(
    State(state): State<AppState>,
    Extension(session): Extension<CurrentSession>,
    Path(survey_id): Path<i64>,
    Json(req): Json<SurveyCompletionRequest>,
) -> Response {
    if let Some(done) = session.snapshot.completed(survey_id) {
        return error_notice(
            Error::Conflict(format!("survey {} already graded {}", survey_id, done.grade)),
            &[],
            "Survey has already been completed",
        );
    }

    if session.snapshot.available(survey_id).is_none() {
        tracing::warn!(
            student_id = session.snapshot.user_id,
            "Survey {} is not available to this student",
            survey_id
        );
        return precondition_notice("Survey is not available");
    }

    let (_, questions) = match load_gradable_survey(&state, survey_id).await {
        Ok(loaded) => loaded,
        Err(e) => return error_notice(e, &[], "Failed to load survey"),
    };
    let report = GradingService::grade(&questions, &req.answers);

    let student_id = session.snapshot.user_id;
    if let Err(e) = state
        .student_grade_service
        .save(student_id, survey_id, report.grade)
        .await
    {
        return error_notice(e, &[], "Failed to save the result");
    }
    tracing::info!(
        student_id,
        grade = report.grade,
        max_grade = report.max_grade,
        "Survey {} completed",
        survey_id
    );

    let outcome = state
        .sessions
        .complete_survey(&session.token, survey_id, report.grade)
        .await;

    (
        StatusCode::OK,
        Json(SurveyCompletionResponse {
            survey_id,
            grade: report.grade,
            max_grade: report.max_grade,
            correct_answers: report.correct_answers,
            answered_questions: report.answered_questions,
            session_updated: outcome == PatchOutcome::Applied,
            notice: Notice::success("Survey completed"),
        }),
    )
        .into_response()
}
