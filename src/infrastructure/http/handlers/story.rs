//! Story HTTP Handlers

use axum::{extract::rejection::JsonRejection, extract::State, Json};
use serde_json::Value;
use std::num::IntErrorKind;
use std::sync::Arc;

use crate::application::{GetPageContent, ListStories};
use crate::domain::PageNumber;
use crate::infrastructure::http::dto::{
    GetPageContentRequest, PageContentResponse, StoriesResponse, StorySummaryDto,
};
use crate::infrastructure::http::error::ApiError;
use crate::infrastructure::http::state::AppState;

/// 列出所有故事
pub async fn get_all_stories(State(state): State<Arc<AppState>>) -> Json<StoriesResponse> {
    let stories = state
        .list_stories_handler
        .handle(ListStories)
        .into_iter()
        .map(StorySummaryDto::from)
        .collect();

    Json(StoriesResponse { stories })
}

/// 获取某个故事指定页的文本
pub async fn get_page_content(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<GetPageContentRequest>, JsonRejection>,
) -> Result<Json<PageContentResponse>, ApiError> {
    let Json(req) = payload?;

    let story_id = req
        .story_id
        .ok_or_else(|| ApiError::BadRequest("Missing field: storyId".to_string()))?;
    let page = req
        .page
        .ok_or_else(|| ApiError::BadRequest("Missing field: page".to_string()))
        .and_then(|value| parse_page(&value))?;

    let text = state
        .get_page_content_handler
        .handle(GetPageContent { story_id, page })?;

    Ok(Json(PageContentResponse { text }))
}

/// 把请求中的 `page` 转换为页码
///
/// 接受整数、浮点数（向零截断）以及内容为整数的字符串，超出 i64 的值按边界饱和
fn parse_page(value: &Value) -> Result<PageNumber, ApiError> {
    let page = match value {
        Value::Number(number) => number
            .as_i64()
            .or_else(|| number.as_f64().map(|f| f.trunc() as i64)),
        Value::String(s) => parse_integer_str(s.trim()),
        _ => None,
    };

    page.map(PageNumber::new).ok_or_else(|| {
        ApiError::BadRequest(format!("Invalid page number: {}", value))
    })
}

/// 整数字符串转 i64，超出范围时饱和，与 JSON 数字的处理保持一致
fn parse_integer_str(s: &str) -> Option<i64> {
    match s.parse::<i64>() {
        Ok(n) => Some(n),
        Err(e) => match e.kind() {
            IntErrorKind::PosOverflow => Some(i64::MAX),
            IntErrorKind::NegOverflow => Some(i64::MIN),
            _ => None,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::Body,
        http::{header, Request, StatusCode},
        Router,
    };
    use serde_json::json;
    use tower::util::ServiceExt;

    use crate::infrastructure::http::routes::create_routes;
    use crate::infrastructure::memory::InMemoryStoryCatalog;

    fn app() -> Router {
        let catalog = Arc::new(InMemoryStoryCatalog::builtin().unwrap());
        let state = AppState::new(catalog, "/static/images", None);
        create_routes().with_state(Arc::new(state))
    }

    async fn send(request: Request<Body>) -> (StatusCode, Value) {
        let response = app().oneshot(request).await.unwrap();
        let status = response.status();
        let body = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&body).unwrap())
    }

    async fn post_page(body: Value) -> (StatusCode, Value) {
        send(
            Request::post("/get_page_content")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
    }

    #[test]
    fn test_parse_page() {
        assert_eq!(parse_page(&json!(3)).unwrap(), PageNumber::new(3));
        assert_eq!(parse_page(&json!(-2)).unwrap(), PageNumber::new(-2));
        assert_eq!(parse_page(&json!(2.9)).unwrap(), PageNumber::new(2));
        assert_eq!(parse_page(&json!(" 4 ")).unwrap(), PageNumber::new(4));
        assert_eq!(
            parse_page(&json!("99999999999999999999")).unwrap(),
            PageNumber::new(i64::MAX)
        );
        assert_eq!(
            parse_page(&json!("-99999999999999999999")).unwrap(),
            PageNumber::new(i64::MIN)
        );
        assert!(parse_page(&json!("two")).is_err());
        assert!(parse_page(&json!("1.5")).is_err());
        assert!(parse_page(&json!(true)).is_err());
        assert!(parse_page(&json!([1])).is_err());
    }

    #[tokio::test]
    async fn test_get_all_stories() {
        let (status, body) = send(Request::get("/get_all_stories").body(Body::empty()).unwrap()).await;
        assert_eq!(status, StatusCode::OK);

        let stories = body["stories"].as_array().unwrap();
        assert_eq!(stories.len(), 3);
        assert_eq!(
            stories[0],
            json!({
                "id": "remy_rabbit",
                "title": "Remy the Curious Rabbit",
                "author": "RR",
                "cover_image": "/static/images/curious_rabbit.jpg"
            })
        );
        assert_eq!(stories[1]["id"], "space_cat");
        assert_eq!(stories[1]["cover_image"], "/static/images/cat_in_space.jpg");
        assert_eq!(stories[2]["id"], "magic_forest");
        assert_eq!(stories[2]["cover_image"], "/static/images/whispering_forest.jpg");
    }

    #[tokio::test]
    async fn test_first_page_of_remy_rabbit() {
        let (status, body) = post_page(json!({ "storyId": "remy_rabbit", "page": 0 })).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            body,
            json!({ "text": "Once upon a time, in a cozy little cottage nestled in the woods, lived a curious rabbit named Remy." })
        );
    }

    #[tokio::test]
    async fn test_numeric_string_page() {
        let (status, body) = post_page(json!({ "storyId": "space_cat", "page": "2" })).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            body["text"],
            "They soared past stars and nebulae, Whiskers gazing out with wide, wondering eyes."
        );
    }

    #[tokio::test]
    async fn test_page_past_the_end() {
        let (status, body) = post_page(json!({ "storyId": "remy_rabbit", "page": 6 })).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body, json!({ "error": "Page not found" }));

        let (status, body) = post_page(json!({ "storyId": "remy_rabbit", "page": -1 })).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body, json!({ "error": "Page not found" }));
    }

    #[tokio::test]
    async fn test_huge_page_is_not_found_however_it_arrives() {
        for page in [json!(1e20), json!(u64::MAX), json!("99999999999999999999")] {
            let (status, body) = post_page(json!({ "storyId": "remy_rabbit", "page": page })).await;
            assert_eq!(status, StatusCode::NOT_FOUND);
            assert_eq!(body, json!({ "error": "Page not found" }));
        }
    }

    #[tokio::test]
    async fn test_unknown_story() {
        let (status, body) = post_page(json!({ "storyId": "dragon", "page": 0 })).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body, json!({ "error": "Story not found" }));
    }

    #[tokio::test]
    async fn test_malformed_requests_are_bad_requests() {
        let bodies = [
            json!({ "storyId": "remy_rabbit" }),
            json!({ "storyId": "remy_rabbit", "page": null }),
            json!({ "storyId": "remy_rabbit", "page": "first" }),
            json!({ "page": 1 }),
            json!({ "storyId": 7, "page": 1 }),
        ];

        for body in bodies {
            let (status, response) = post_page(body.clone()).await;
            assert_eq!(status, StatusCode::BAD_REQUEST, "body: {}", body);
            assert!(response["error"].is_string(), "body: {}", body);
        }
    }

    #[tokio::test]
    async fn test_invalid_json_is_bad_request() {
        let (status, body) = send(
            Request::post("/get_page_content")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from("{not json"))
                .unwrap(),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["error"].is_string());
    }
}
