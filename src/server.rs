use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use std::{
    net::SocketAddr,
    sync::{
        atomic::{AtomicUsize, Ordering},
        Arc,
    },
    time::{SystemTime, UNIX_EPOCH},
};
use tower_http::trace::TraceLayer;

use crate::api::{
    ApiAnalyzeRequest, ApiPowerHook, ApiRankRequest, ApiRankResponse, ApiTemplate, TemplateQuery,
};
use hook_ranker::config::RankerConfig;
use hook_ranker::{analyze, jitter_source, rank_content_with_limits, ContentSignals, Corpus};

#[derive(Clone)]
struct AppState {
    corpus: Arc<Corpus>,
    config: Arc<RankerConfig>,
}

static REQUEST_COUNTER: AtomicUsize = AtomicUsize::new(0);

pub async fn serve(args: crate::ServeArgs, config: RankerConfig, corpus: Corpus) -> Result<(), String> {
    let state = AppState {
        corpus: Arc::new(corpus),
        config: Arc::new(config),
    };

    let app = Router::new()
        .route("/api/health", get(health))
        .route("/api/analyze", post(analyze_handler))
        .route("/api/rank", post(rank_handler))
        .route("/api/templates", get(templates_handler))
        .route("/api/templates/:id", get(template_handler))
        .route("/api/power-hooks/:id", get(power_hook_handler))
        .route("/api/categories", get(categories_handler))
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    let addr: SocketAddr = format!("{}:{}", args.host, args.port)
        .parse()
        .map_err(|err| format!("invalid bind address: {}", err))?;

    tracing::info!(%addr, "listening");

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|err| format!("failed to bind server: {}", err))?;
    axum::serve(listener, app)
        .await
        .map_err(|err| format!("server error: {}", err))?;

    Ok(())
}

async fn health() -> impl IntoResponse {
    StatusCode::OK
}

async fn analyze_handler(
    State(state): State<AppState>,
    Json(request): Json<ApiAnalyzeRequest>,
) -> Result<Json<ContentSignals>, (StatusCode, String)> {
    let content = request
        .into_content(&state.config)
        .map_err(|err| (StatusCode::BAD_REQUEST, err))?;
    Ok(Json(analyze(&content)))
}

async fn rank_handler(
    State(state): State<AppState>,
    Json(request): Json<ApiRankRequest>,
) -> Result<Json<ApiRankResponse>, (StatusCode, String)> {
    let request_id = request
        .request_id
        .clone()
        .unwrap_or_else(generate_request_id);
    let content = request
        .content(&state.config)
        .map_err(|err| (StatusCode::BAD_REQUEST, err))?;
    let limits = request.limits(&state.config);

    let mut rng = jitter_source(&state.config, request.seed);
    let output = rank_content_with_limits(&content, &state.corpus, &state.config, limits, rng.as_mut());

    if output.is_empty() {
        tracing::warn!(%request_id, "no candidates selected");
    }

    Ok(Json(ApiRankResponse::from_output(output, request_id)))
}

async fn templates_handler(
    State(state): State<AppState>,
    Query(query): Query<TemplateQuery>,
) -> Json<Vec<ApiTemplate>> {
    let templates = match query.category.as_deref() {
        Some(category) => state
            .corpus
            .templates_in_category(category)
            .into_iter()
            .map(ApiTemplate::from)
            .collect(),
        None => state.corpus.templates().iter().map(ApiTemplate::from).collect(),
    };
    Json(templates)
}

async fn template_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ApiTemplate>, (StatusCode, String)> {
    state
        .corpus
        .template_by_id(&id)
        .map(|template| Json(ApiTemplate::from(template)))
        .ok_or_else(|| (StatusCode::NOT_FOUND, format!("template not found: {}", id)))
}

async fn power_hook_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ApiPowerHook>, (StatusCode, String)> {
    state
        .corpus
        .power_hook_by_id(&id)
        .map(|hook| Json(ApiPowerHook::from(hook)))
        .ok_or_else(|| (StatusCode::NOT_FOUND, format!("power hook not found: {}", id)))
}

async fn categories_handler(State(state): State<AppState>) -> Json<Vec<String>> {
    Json(
        state
            .corpus
            .template_categories()
            .into_iter()
            .map(str::to_string)
            .collect(),
    )
}

fn generate_request_id() -> String {
    let counter = REQUEST_COUNTER.fetch_add(1, Ordering::Relaxed);
    format!("req-{}-{}", now_ms(), counter)
}

fn now_ms() -> u128 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|duration| duration.as_millis())
        .unwrap_or(0)
}
