//! Incoming request as seen by a resource.

use std::collections::HashMap;
use std::convert::Infallible;

use axum::Form;
use axum::extract::{FromRequest, FromRequestParts, Multipart, Query, RawPathParams, Request};
use axum::http::header::CONTENT_TYPE;
use axum::http::{HeaderMap, Method};

/// Request view handed to every resource method.
///
/// Built by the registrar wrapper before the resource is called. Form values
/// merge the query string with the text fields of an
/// `application/x-www-form-urlencoded` or `multipart/form-data` body; body
/// values win on conflicting keys. Multipart file parts are skipped.
#[derive(Debug, Clone, Default)]
pub struct ResourceRequest {
    method: Method,
    headers: HeaderMap,
    form: HashMap<String, String>,
    params: HashMap<String, String>,
}

impl ResourceRequest {
    /// Create an empty request for `method`.
    #[must_use]
    pub fn new(method: Method) -> Self {
        Self {
            method,
            ..Self::default()
        }
    }

    #[cfg(test)]
    #[must_use]
    pub(crate) fn with_form_value(
        mut self,
        key: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        self.form.insert(key.into(), value.into());
        self
    }

    #[cfg(test)]
    #[must_use]
    pub(crate) fn with_param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.params.insert(key.into(), value.into());
        self
    }

    /// HTTP verb of the request.
    #[must_use]
    pub fn method(&self) -> &Method {
        &self.method
    }

    #[must_use]
    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    /// Value of form field `key`, from the body or the query string.
    #[must_use]
    pub fn form_value(&self, key: &str) -> Option<&str> {
        self.form.get(key).map(String::as_str)
    }

    /// Value of the path parameter `key` captured by the router.
    #[must_use]
    pub fn param(&self, key: &str) -> Option<&str> {
        self.params.get(key).map(String::as_str)
    }
}

impl<S> FromRequest<S> for ResourceRequest
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let (mut parts, body) = req.into_parts();

        // Missing or non-UTF-8 params leave the map empty.
        let params = RawPathParams::from_request_parts(&mut parts, state)
            .await
            .map(|raw| {
                raw.iter()
                    .map(|(key, value)| (key.to_owned(), value.to_owned()))
                    .collect()
            })
            .unwrap_or_default();

        let mut form = Query::<HashMap<String, String>>::try_from_uri(&parts.uri)
            .map(|Query(query)| query)
            .unwrap_or_default();

        let method = parts.method.clone();
        let headers = parts.headers.clone();

        if method != Method::GET && method != Method::HEAD {
            let is_multipart = headers
                .get(CONTENT_TYPE)
                .and_then(|value| value.to_str().ok())
                .is_some_and(|value| value.starts_with("multipart/form-data"));
            let req = Request::from_parts(parts, body);
            if is_multipart {
                form.extend(multipart_fields(req, state).await);
            } else if let Ok(Form(body_form)) =
                Form::<HashMap<String, String>>::from_request(req, state).await
            {
                // Bodies that are not forms carry no form values.
                form.extend(body_form);
            }
        }

        Ok(Self {
            method,
            headers,
            form,
            params,
        })
    }
}

/// Text fields of a multipart body. Reading stops at the first malformed
/// part; fields read before it are kept.
async fn multipart_fields<S>(req: Request, state: &S) -> HashMap<String, String>
where
    S: Send + Sync,
{
    let mut fields = HashMap::new();
    let Ok(mut multipart) = Multipart::from_request(req, state).await else {
        return fields;
    };
    while let Ok(Some(field)) = multipart.next_field().await {
        if field.file_name().is_some() {
            continue;
        }
        let Some(name) = field.name().map(str::to_owned) else {
            continue;
        };
        if let Ok(text) = field.text().await {
            fields.insert(name, text);
        }
    }
    fields
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;

    async fn extract(req: Request) -> ResourceRequest {
        match ResourceRequest::from_request(req, &()).await {
            Ok(request) => request,
            Err(never) => match never {},
        }
    }

    fn form_post(uri: &str, body: &'static str) -> Request {
        Request::builder()
            .method(Method::POST)
            .uri(uri)
            .header(CONTENT_TYPE, "application/x-www-form-urlencoded")
            .body(Body::from(body))
            .unwrap()
    }

    #[tokio::test]
    async fn should_read_form_value_from_urlencoded_body() {
        let request = extract(form_post("/docs", "data=hello+world")).await;
        assert_eq!(request.method(), Method::POST);
        assert_eq!(request.form_value("data"), Some("hello world"));
    }

    #[tokio::test]
    async fn should_read_form_value_from_query_string() {
        let req = Request::builder()
            .uri("/docs?data=abc")
            .body(Body::empty())
            .unwrap();
        let request = extract(req).await;
        assert_eq!(request.form_value("data"), Some("abc"));
    }

    #[tokio::test]
    async fn should_prefer_body_value_over_query_value() {
        let request = extract(form_post("/docs?data=query", "data=body")).await;
        assert_eq!(request.form_value("data"), Some("body"));
    }

    #[tokio::test]
    async fn should_ignore_body_without_form_content_type() {
        let req = Request::builder()
            .method(Method::POST)
            .uri("/docs")
            .header(CONTENT_TYPE, "application/json")
            .body(Body::from(r#"{"data":"x"}"#))
            .unwrap();
        let request = extract(req).await;
        assert_eq!(request.form_value("data"), None);
    }

    #[tokio::test]
    async fn should_keep_headers_and_leave_params_empty_outside_router() {
        let req = Request::builder()
            .method(Method::DELETE)
            .uri("/docs")
            .header("x-request-id", "42")
            .body(Body::empty())
            .unwrap();
        let request = extract(req).await;
        assert_eq!(request.headers()["x-request-id"], "42");
        assert_eq!(request.param("id"), None);
    }

    #[test]
    fn should_build_request_by_hand() {
        let request = ResourceRequest::new(Method::PUT)
            .with_form_value("data", "x")
            .with_param("id", "7");
        assert_eq!(request.method(), Method::PUT);
        assert_eq!(request.form_value("data"), Some("x"));
        assert_eq!(request.param("id"), Some("7"));
    }

    fn multipart_post(body: &'static str) -> Request {
        Request::builder()
            .method(Method::POST)
            .uri("/docs?data=query")
            .header(CONTENT_TYPE, "multipart/form-data; boundary=XX")
            .body(Body::from(body))
            .unwrap()
    }

    #[tokio::test]
    async fn should_read_text_fields_from_multipart_body() {
        let body = "--XX\r\n\
            Content-Disposition: form-data; name=\"data\"\r\n\r\n\
            x\r\n\
            --XX\r\n\
            Content-Disposition: form-data; name=\"writer\"\r\n\r\n\
            alice\r\n\
            --XX--\r\n";
        let request = extract(multipart_post(body)).await;
        assert_eq!(request.form_value("data"), Some("x"));
        assert_eq!(request.form_value("writer"), Some("alice"));
    }

    #[tokio::test]
    async fn should_skip_multipart_file_parts() {
        let body = "--XX\r\n\
            Content-Disposition: form-data; name=\"data\"; filename=\"a.txt\"\r\n\
            Content-Type: text/plain\r\n\r\n\
            from-file\r\n\
            --XX--\r\n";
        let request = extract(multipart_post(body)).await;
        assert_eq!(request.form_value("data"), Some("query"));
    }

    #[tokio::test]
    async fn should_keep_query_values_when_multipart_body_is_malformed() {
        let request = extract(multipart_post("not a multipart body")).await;
        assert_eq!(request.form_value("data"), Some("query"));
    }
}
