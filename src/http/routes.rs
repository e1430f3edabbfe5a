use serde_json::json;

use crate::http::errors::ServerError;
use crate::http::handler::Dispatcher;
use crate::http::request::HttpRequest;
use crate::http::response::{Response, OK};
use crate::questions::parser::QuestionParser;
use crate::utils::text;

// /hello
fn hello_handler(_req: &HttpRequest) -> Result<Response, ServerError> {
    Ok(Response::new(OK).with_body("Hello, World!"))
}

fn text_param<'a>(req: &'a HttpRequest) -> Result<&'a str, ServerError> {
    let text = req.query_param("text")
        .ok_or_else(|| ServerError::BadRequest("Missing query parameter 'text'".into()))?;
    if text.trim().is_empty() {
        return Err(ServerError::BadRequest("Parameter 'text' cannot be empty".into()));
    }
    Ok(text)
}

// /reverse?text=abcdef
fn reverse_handler(req: &HttpRequest) -> Result<Response, ServerError> {
    let text = text_param(req)?;
    let body = json!({ "original": text, "reversed": text::reverse(text) });
    Ok(Response::new(OK)
        .set_header("Content-Type", "application/json")
        .with_body(body.to_string()))
}

// /palindrome?text=racecar
fn palindrome_handler(req: &HttpRequest) -> Result<Response, ServerError> {
    let text = text_param(req)?;
    let body = json!({ "text": text, "palindrome": text::is_palindrome(text) });
    Ok(Response::new(OK)
        .set_header("Content-Type", "application/json")
        .with_body(body.to_string()))
}

// /help
fn help_handler(_req: &HttpRequest) -> Result<Response, ServerError> {
    Ok(Response::new(OK).with_body(text::help()))
}

// POST /questions with a markdown question document as the body
fn questions_handler(parser: &QuestionParser, req: &HttpRequest) -> Result<Response, ServerError> {
    let markdown = std::str::from_utf8(&req.body)
        .map_err(|_| ServerError::BadRequest("Body must be valid UTF-8".into()))?;
    if markdown.trim().is_empty() {
        return Err(ServerError::BadRequest("Request body cannot be empty".into()));
    }

    let questions = parser
        .parse_questions(markdown)
        .map_err(|e| ServerError::BadRequest(e.to_string()))?;
    let body = serde_json::to_string(&questions)
        .map_err(|e| ServerError::Internal(format!("Failed to encode questions: {}", e)))?;

    Ok(Response::new(OK)
        .set_header("Content-Type", "application/json")
        .with_body(body))
}

pub fn build_routes() -> Dispatcher {
    let parser = QuestionParser::new();
    Dispatcher::builder()
        .get_fn("/hello", hello_handler)
        .get_fn("/reverse", reverse_handler)
        .get_fn("/palindrome", palindrome_handler)
        .get_fn("/help", help_handler)
        .post_fn("/questions", move |req| questions_handler(&parser, req))
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::http::request::HttpMethod;
    use std::collections::HashMap;

    fn get(path: &str, query: &str) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::GET,
            path: path.to_string(),
            query: query.to_string(),
            version: "HTTP/1.0".to_string(),
            headers: HashMap::new(),
            body: Vec::new(),
        }
    }

    #[test]
    fn test_hello_returns_correct_message() {
        let dispatcher = build_routes();
        let resp = dispatcher.dispatch(&get("/hello", "")).unwrap();
        assert_eq!(resp.status.code, 200);
        assert_eq!(resp.body, b"Hello, World!");
    }

    #[test]
    fn test_hello_is_stable_across_invocations() {
        let dispatcher = build_routes();
        for _ in 0..3 {
            let resp = dispatcher.dispatch(&get("/hello", "")).unwrap();
            assert_eq!(resp.status.code, 200);
            assert_eq!(resp.body, b"Hello, World!");
        }
    }

    #[test]
    fn test_unknown_route_is_not_found() {
        let dispatcher = build_routes();
        let err = dispatcher.dispatch(&get("/missing", "")).unwrap_err();
        assert!(matches!(err, ServerError::NotFound));
    }

    #[test]
    fn test_unsupported_method_is_rejected() {
        let dispatcher = build_routes();
        let mut req = get("/hello", "");
        req.method = HttpMethod::Unsupported("PATCH".to_string());
        let err = dispatcher.dispatch(&req).unwrap_err();
        assert!(matches!(err, ServerError::BadRequest(_)));
    }

    #[test]
    fn test_reverse_route() {
        let dispatcher = build_routes();
        let resp = dispatcher.dispatch(&get("/reverse", "text=abc")).unwrap();
        assert_eq!(resp.status.code, 200);
        let body: serde_json::Value = serde_json::from_slice(&resp.body).unwrap();
        assert_eq!(body["original"], "abc");
        assert_eq!(body["reversed"], "cba");
    }

    #[test]
    fn test_reverse_route_requires_text() {
        let dispatcher = build_routes();
        let err = dispatcher.dispatch(&get("/reverse", "")).unwrap_err();
        assert!(matches!(err, ServerError::BadRequest(_)));
    }

    #[test]
    fn test_questions_route_parses_document() {
        let dispatcher = build_routes();
        let mut req = get("/questions", "");
        req.method = HttpMethod::POST;
        req.body = b"\
---
type: multiple-choice
tags:
  - Frontend Developer
---
What is the difference between a stack and a queue?

- [ ] A stack is FIFO, a queue is LIFO.
- [x] A stack is LIFO, a queue is FIFO.
"
        .to_vec();

        let resp = dispatcher.dispatch(&req).unwrap();
        assert_eq!(resp.status.code, 200);
        let body: serde_json::Value = serde_json::from_slice(&resp.body).unwrap();
        assert_eq!(body[0]["type"], "multiple-choice");
        assert_eq!(
            body[0]["description"],
            "What is the difference between a stack and a queue?"
        );
        assert_eq!(body[0]["options"][1]["is_correct"], true);
    }

    #[test]
    fn test_questions_route_rejects_empty_body() {
        let dispatcher = build_routes();
        let mut req = get("/questions", "");
        req.method = HttpMethod::POST;
        let err = dispatcher.dispatch(&req).unwrap_err();
        assert!(matches!(err, ServerError::BadRequest(_)));
    }

    #[test]
    fn test_questions_route_rejects_malformed_document() {
        let dispatcher = build_routes();
        let mut req = get("/questions", "");
        req.method = HttpMethod::POST;
        req.body = b"no frontmatter here".to_vec();
        let err = dispatcher.dispatch(&req).unwrap_err();
        assert!(matches!(err, ServerError::BadRequest(_)));
    }

    #[test]
    fn test_post_to_get_route_is_not_found() {
        let dispatcher = build_routes();
        let mut req = get("/hello", "");
        req.method = HttpMethod::POST;
        let err = dispatcher.dispatch(&req).unwrap_err();
        assert!(matches!(err, ServerError::NotFound));
    }

    #[test]
    fn test_palindrome_route() {
        let dispatcher = build_routes();
        let resp = dispatcher.dispatch(&get("/palindrome", "text=racecar")).unwrap();
        let body: serde_json::Value = serde_json::from_slice(&resp.body).unwrap();
        assert_eq!(body["palindrome"], true);

        let resp = dispatcher.dispatch(&get("/palindrome", "text=hello")).unwrap();
        let body: serde_json::Value = serde_json::from_slice(&resp.body).unwrap();
        assert_eq!(body["palindrome"], false);
    }
}
