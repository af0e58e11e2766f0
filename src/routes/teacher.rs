use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Json, Response},
    Extension,
};

use crate::dto::dashboard_dto::{SurveyCard, SurveyStatus, TeacherDashboard};
use crate::dto::notice_dto::{Notice, NoticeResponse};
use crate::dto::survey_dto::{
    CreateSurveyPayload, CreateSurveyRequest, CreateSurveyResult, ResultsQuery,
};
use crate::middleware::auth::CurrentSession;
use crate::models::question::{total_points, SingleChoiceQuestion};
use crate::models::survey::{SurveySummary, TeacherRef};
use crate::services::student_grade_service::StudentGradeService;
use crate::utils::notice::{error_notice, precondition_notice};
use crate::utils::time::{format_day, is_open, now};
use crate::utils::validation::validate;
use crate::AppState;

pub(crate) fn survey_card(survey: &SurveySummary, at: chrono::DateTime<chrono::Utc>) -> SurveyCard {
    SurveyCard {
        id: survey.survey_id,
        title: survey.survey_name.clone(),
        discipline: survey.survey_on_discipline.discipline_name.clone(),
        status: if is_open(&survey.survey_end_date, at) {
            SurveyStatus::Active
        } else {
            SurveyStatus::Completed
        },
        deadline: format_day(&survey.survey_end_date),
        created_date: survey.survey_created_date.as_deref().map(format_day),
    }
}

#[axum::debug_handler]
pub async fn dashboard(Extension(session): Extension<CurrentSession>) -> Json<TeacherDashboard> {
    let at = now();
    let (active, completed): (Vec<SurveyCard>, Vec<SurveyCard>) = session
        .snapshot
        .available_surveys
        .iter()
        .map(|s| survey_card(s, at))
        .partition(|c| c.status == SurveyStatus::Active);

    Json(TeacherDashboard {
        user_name: session.snapshot.user_name,
        total_surveys: active.len() + completed.len(),
        active_count: active.len(),
        completed_count: completed.len(),
        active,
        completed,
    })
}

#[axum::debug_handler]
pub async fn create_survey(
    State(state): State<AppState>,
    Extension(session): Extension<CurrentSession>,
    Json(req): Json<CreateSurveyRequest>,
) -> Response {
    let Some(discipline_id) = req.discipline_id else {
        return precondition_notice("Discipline is not selected");
    };
    if validate(&req).is_err() {
        return precondition_notice("Survey name, end date and at least one question are required");
    }
    let Some(discipline) = session.snapshot.discipline(discipline_id).cloned() else {
        return precondition_notice("Discipline is not available to this teacher");
    };
    for (idx, q) in req.questions.iter().enumerate() {
        let number = idx as i64 + 1;
        if q.question_text.trim().is_empty() {
            return precondition_notice(&format!("Question {} has no text", number));
        }
        let options = q
            .question_options
            .iter()
            .map(|o| (o.option_text.clone(), o.is_answer))
            .collect();
        if let Err(e) = SingleChoiceQuestion::new(number, q.question_text.clone(), q.question_points, options) {
            return precondition_notice(&format!("Invalid survey: {}", e));
        }
    }
    if let Err(e) = total_points(req.questions.iter().map(|q| q.question_points)) {
        return precondition_notice(&format!("Invalid survey: {}", e));
    }

    let payload = CreateSurveyPayload {
        survey_name: req.survey_name,
        survey_end_date: req.survey_end_date,
        survey_created_by_teacher_id: session.snapshot.user_id,
        discipline_id,
        questions: req.questions,
    };

    let response = match state.survey_service.create(&payload).await {
        Ok(response) => response,
        Err(e) => return error_notice(e, &[], "Failed to create survey"),
    };
    let created = match response.created_survey {
        Some(created) if response.status == "success" => created,
        _ => {
            tracing::warn!("Survey creation answered with status {}", response.status);
            return (
                StatusCode::BAD_GATEWAY,
                Json(NoticeResponse {
                    notice: Notice::error("Failed to create survey"),
                }),
            )
                .into_response();
        }
    };

    let summary = SurveySummary {
        survey_id: created.survey_id,
        survey_name: created.survey_name,
        survey_end_date: created.survey_end_date,
        survey_created_date: created.survey_created_date,
        survey_created_by: Some(TeacherRef {
            teacher_id: session.snapshot.user_id,
            teacher_name: session.snapshot.user_name.clone(),
        }),
        survey_on_discipline: discipline,
    };
    state
        .sessions
        .append_available_survey(&session.token, summary)
        .await;
    tracing::info!(
        teacher_id = session.snapshot.user_id,
        "Created survey {}",
        created.survey_id
    );

    (
        StatusCode::CREATED,
        Json(CreateSurveyResult {
            survey_id: created.survey_id,
            redirect_to: "/dashboard/teacher".to_string(),
            notice: Notice::success("Survey created successfully"),
        }),
    )
        .into_response()
}

#[axum::debug_handler]
pub async fn survey_results(
    State(state): State<AppState>,
    Path(survey_id): Path<i64>,
    Query(query): Query<ResultsQuery>,
) -> Response {
    match state.student_grade_service.list_by_survey(survey_id).await {
        Ok(results) => Json(StudentGradeService::summarize(survey_id, results, &query)).into_response(),
        Err(e) => error_notice(e, &[], "Failed to load survey results"),
    }
}
