use crate::infra::{AppState, DashboardState};
use axum::extract::{Path, Query};
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::Extension;
use axum::Json;
use serde::Deserialize;
use serde_json::json;
use std::sync::Arc;
use upsell_engine::config::parse_hot_threshold;
use upsell_engine::error::AppError;
use upsell_engine::upsell::outreach::{outreach_router, OutreachOutbox, OutreachService};
use upsell_engine::upsell::report::{
    build_dashboard, build_user_detail, find_user, user_row, DashboardView, UserDetailView,
    UserRow,
};
use upsell_engine::upsell::{Priority, RosterSource, ScoredUser};

#[derive(Debug, Default, Deserialize)]
pub(crate) struct DashboardQuery {
    #[serde(default)]
    pub(crate) threshold: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct UserListQuery {
    #[serde(default)]
    pub(crate) priority: Option<Priority>,
}

pub(crate) fn with_upsell_routes<R, O>(service: Arc<OutreachService<R, O>>) -> axum::Router
where
    R: RosterSource + 'static,
    O: OutreachOutbox + 'static,
{
    outreach_router(service)
        .route("/health", axum::routing::get(healthcheck))
        .route("/ready", axum::routing::get(readiness_endpoint))
        .route("/metrics", axum::routing::get(metrics_endpoint))
        .route(
            "/api/v1/upsell/dashboard",
            axum::routing::get(dashboard_endpoint),
        )
        .route("/api/v1/upsell/users", axum::routing::get(users_endpoint))
        .route(
            "/api/v1/upsell/users/:user_id",
            axum::routing::get(user_detail_endpoint),
        )
}

pub(crate) async fn healthcheck() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

pub(crate) async fn readiness_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    let ready = state.readiness.load(std::sync::atomic::Ordering::Relaxed);
    let status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let payload = if ready {
        json!({ "status": "ready" })
    } else {
        json!({ "status": "initializing" })
    };

    (status, Json(payload))
}

pub(crate) async fn metrics_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}

fn scored_roster(state: &DashboardState) -> Result<Vec<ScoredUser>, AppError> {
    let users = state.roster.load()?;
    Ok(state.engine.attach_score(&users))
}

pub(crate) async fn dashboard_endpoint(
    Extension(state): Extension<DashboardState>,
    Query(query): Query<DashboardQuery>,
) -> Result<Json<DashboardView>, AppError> {
    let hot_threshold = match query.threshold.as_deref() {
        Some(raw) => {
            parse_hot_threshold(raw).map_err(|err| AppError::InvalidRequest(err.to_string()))?
        }
        None => state.hot_threshold,
    };

    let scored = scored_roster(&state)?;
    Ok(Json(build_dashboard(&scored, hot_threshold)))
}

pub(crate) async fn users_endpoint(
    Extension(state): Extension<DashboardState>,
    Query(query): Query<UserListQuery>,
) -> Result<Json<Vec<UserRow>>, AppError> {
    let scored = scored_roster(&state)?;
    let rows = scored
        .iter()
        .filter(|user| query.priority.map_or(true, |wanted| user.priority == wanted))
        .map(user_row)
        .collect();
    Ok(Json(rows))
}

pub(crate) async fn user_detail_endpoint(
    Extension(state): Extension<DashboardState>,
    Path(user_id): Path<String>,
) -> Result<Json<UserDetailView>, AppError> {
    let scored = scored_roster(&state)?;
    let user = find_user(&scored, &user_id).ok_or(AppError::UnknownUser(user_id))?;
    Ok(Json(build_user_detail(&state.engine, user)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infra::InMemoryOutreachOutbox;
    use axum::body::{to_bytes, Body};
    use axum::http::Request;
    use metrics_exporter_prometheus::PrometheusBuilder;
    use std::sync::atomic::AtomicBool;
    use tower::ServiceExt;
    use upsell_engine::upsell::StaticRoster;

    fn dashboard_state() -> DashboardState {
        DashboardState::new(Arc::new(StaticRoster::sample()), 8.5)
    }

    #[tokio::test]
    async fn dashboard_endpoint_uses_configured_threshold() {
        let Json(view) = dashboard_endpoint(
            Extension(dashboard_state()),
            Query(DashboardQuery::default()),
        )
        .await
        .expect("dashboard builds");

        assert_eq!(view.hot_threshold, 8.5);
        assert_eq!(view.summary.total_users, 8);
        assert_eq!(view.hot_lead_names, vec!["Ava", "Marcus", "Lena"]);
    }

    #[tokio::test]
    async fn dashboard_endpoint_accepts_threshold_override() {
        let query = DashboardQuery {
            threshold: Some("9.5".to_string()),
        };
        let Json(view) = dashboard_endpoint(Extension(dashboard_state()), Query(query))
            .await
            .expect("dashboard builds");

        assert_eq!(view.hot_threshold, 9.5);
        assert_eq!(view.hot_lead_names, vec!["Ava", "Lena"]);
    }

    #[tokio::test]
    async fn dashboard_endpoint_rejects_out_of_scale_threshold() {
        let query = DashboardQuery {
            threshold: Some("42".to_string()),
        };
        let err = dashboard_endpoint(Extension(dashboard_state()), Query(query))
            .await
            .expect_err("threshold rejected");
        assert_eq!(err.into_response().status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn users_endpoint_filters_by_priority() {
        let query = UserListQuery {
            priority: Some(Priority::Warm),
        };
        let Json(rows) = users_endpoint(Extension(dashboard_state()), Query(query))
            .await
            .expect("users load");

        let names: Vec<&str> = rows.iter().map(|row| row.name.as_str()).collect();
        assert_eq!(names, vec!["Priya Natarajan", "Hannah Becker"]);
    }

    #[tokio::test]
    async fn user_detail_endpoint_returns_404_for_unknown_user() {
        let err = user_detail_endpoint(
            Extension(dashboard_state()),
            Path("usr-missing".to_string()),
        )
        .await
        .expect_err("unknown user");
        assert_eq!(err.into_response().status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn router_serves_dashboard_and_readiness() {
        let roster = Arc::new(StaticRoster::sample());
        let service = Arc::new(OutreachService::new(
            roster.clone(),
            Arc::new(InMemoryOutreachOutbox::default()),
        ));
        let app_state = AppState {
            readiness: Arc::new(AtomicBool::new(false)),
            metrics: Arc::new(PrometheusBuilder::new().build_recorder().handle()),
        };
        let app = with_upsell_routes(service)
            .layer(Extension(app_state))
            .layer(Extension(DashboardState::new(roster, 8.5)));

        let ready = app
            .clone()
            .oneshot(Request::get("/ready").body(Body::empty()).expect("request"))
            .await
            .expect("ready responds");
        assert_eq!(ready.status(), StatusCode::SERVICE_UNAVAILABLE);

        let response = app
            .oneshot(
                Request::get("/api/v1/upsell/dashboard?threshold=9")
                    .body(Body::empty())
                    .expect("request"),
            )
            .await
            .expect("dashboard responds");
        assert_eq!(response.status(), StatusCode::OK);

        let bytes = to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("body reads");
        let body: serde_json::Value = serde_json::from_slice(&bytes).expect("json body");
        assert_eq!(body["hot_threshold"], 9.0);
        assert_eq!(body["hot_lead_names"][0], "Ava");
    }
}
