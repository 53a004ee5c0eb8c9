#![allow(dead_code)]

use artwork_picker::application::services::SelectionService;
use artwork_picker::application::table::TableController;
use artwork_picker::infrastructure::http::HttpArtworkRepository;
use axum::extract::{Query, State};
use axum::http::{HeaderMap, StatusCode, header};
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use serde::Deserialize;
use serde_json::{Value, json};
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::net::TcpListener;
use url::Url;

/// How the stub endpoint answers.
#[derive(Debug, Clone, Copy)]
pub enum Behaviour {
    /// Serves ids `1..=total`.
    Catalogue { total: u64 },
    /// Serves the catalogue, but answers 500 from `page` onwards.
    FailFromPage { total: u64, page: u32 },
    /// Answers every request with this status and no body.
    Status(u16),
    /// Answers 200 with a body of the wrong shape.
    Malformed,
    /// Serves the catalogue after sleeping for `delay_ms`.
    Delayed { total: u64, delay_ms: u64 },
}

#[derive(Clone)]
struct StubState {
    behaviour: Behaviour,
    requests: Arc<Mutex<Vec<(u32, u32)>>>,
    user_agents: Arc<Mutex<Vec<String>>>,
}

#[derive(Deserialize)]
struct ListQuery {
    page: u32,
    limit: u32,
}

/// An in-process stand-in for the remote artworks endpoint.
pub struct StubServer {
    pub url: Url,
    requests: Arc<Mutex<Vec<(u32, u32)>>>,
    user_agents: Arc<Mutex<Vec<String>>>,
}

impl StubServer {
    pub async fn start(behaviour: Behaviour) -> Self {
        let requests = Arc::new(Mutex::new(Vec::new()));
        let user_agents = Arc::new(Mutex::new(Vec::new()));
        let state = StubState {
            behaviour,
            requests: requests.clone(),
            user_agents: user_agents.clone(),
        };

        let app = Router::new()
            .route("/api/v1/artworks", get(list_artworks))
            .with_state(state);

        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self {
            url: Url::parse(&format!("http://{addr}/api/v1/artworks")).unwrap(),
            requests,
            user_agents,
        }
    }

    /// `(page, limit)` of every request received, in arrival order.
    pub fn requests(&self) -> Vec<(u32, u32)> {
        self.requests.lock().unwrap().clone()
    }

    /// `User-Agent` header of every request received; empty string when absent.
    pub fn user_agents(&self) -> Vec<String> {
        self.user_agents.lock().unwrap().clone()
    }

    pub fn repository(&self) -> HttpArtworkRepository {
        HttpArtworkRepository::new(reqwest::Client::new(), self.url.clone())
    }

    pub fn service(&self) -> SelectionService<HttpArtworkRepository> {
        SelectionService::new(Arc::new(self.repository()))
    }

    pub fn controller(&self, rows: u32) -> TableController<HttpArtworkRepository> {
        TableController::new(Arc::new(self.service()), rows)
    }
}

async fn list_artworks(
    State(stub): State<StubState>,
    headers: HeaderMap,
    Query(query): Query<ListQuery>,
) -> Response {
    let user_agent = headers
        .get(header::USER_AGENT)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_string();
    stub.user_agents.lock().unwrap().push(user_agent);
    stub.requests
        .lock()
        .unwrap()
        .push((query.page, query.limit));

    match stub.behaviour {
        Behaviour::Catalogue { total } => {
            Json(catalogue_body(query.page, query.limit, total)).into_response()
        }
        Behaviour::FailFromPage { total, page } => {
            if query.page >= page {
                StatusCode::INTERNAL_SERVER_ERROR.into_response()
            } else {
                Json(catalogue_body(query.page, query.limit, total)).into_response()
            }
        }
        Behaviour::Status(code) => StatusCode::from_u16(code).unwrap().into_response(),
        Behaviour::Malformed => Json(json!({ "data": "not a list" })).into_response(),
        Behaviour::Delayed { total, delay_ms } => {
            tokio::time::sleep(Duration::from_millis(delay_ms)).await;
            Json(catalogue_body(query.page, query.limit, total)).into_response()
        }
    }
}

/// A response body shaped like the real endpoint's, extra fields included.
pub fn catalogue_body(page: u32, limit: u32, total: u64) -> Value {
    let start = u64::from(page.saturating_sub(1)) * u64::from(limit);
    let end = (start + u64::from(limit)).min(total);

    let data: Vec<Value> = (start..end)
        .map(|i| {
            let id = i + 1;
            let inscriptions = if id % 2 == 0 {
                Value::Null
            } else {
                json!("signed")
            };
            json!({
                "id": id,
                "title": format!("Untitled {id}"),
                "place_of_origin": "Chicago",
                "artist_display": format!("Artist {id}\nAmerican"),
                "inscriptions": inscriptions,
                "date_start": 1900 + id,
                "date_end": (1905 + id).to_string(),
            })
        })
        .collect();

    json!({
        "pagination": {
            "total": total,
            "limit": limit,
            "offset": start,
            "total_pages": total.div_ceil(u64::from(limit.max(1))),
            "current_page": page,
        },
        "data": data,
        "info": { "license_text": "stub" },
    })
}
