//! Request extractors for form submissions.

use axum::body::Bytes;
use axum::extract::{FromRequest, Multipart, Request};
use axum::http::header::CONTENT_TYPE;
use axum::http::{HeaderMap, StatusCode};
use axum::Form;
use folio_core::profile::{ProfileForm, PICTURE_FIELD};

use crate::error::AppError;

/// An uploaded file part.
#[derive(Debug, Clone)]
pub struct Upload {
    /// Filename as reported by the client. Only its extension is kept.
    pub file_name: String,
    pub bytes: Bytes,
}

/// A "create portfolio" submission: the text fields plus an optional image.
///
/// Accepts `multipart/form-data` (the browser form) as well as
/// `application/x-www-form-urlencoded` (no image possible). An image part
/// with an empty filename or no content counts as "no image".
#[derive(Debug, Clone)]
pub struct ProfileSubmission {
    pub form: ProfileForm,
    pub picture: Option<Upload>,
}

impl<S> FromRequest<S> for ProfileSubmission
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        if !is_multipart(req.headers()) {
            let Form(form) = Form::<ProfileForm>::from_request(req, state)
                .await
                .map_err(|e| rejected(e.status(), e.body_text()))?;
            return Ok(Self {
                form,
                picture: None,
            });
        }

        let mut multipart = Multipart::from_request(req, state)
            .await
            .map_err(|e| rejected(e.status(), e.body_text()))?;

        let mut form = ProfileForm::default();
        let mut picture = None;

        while let Some(field) = multipart
            .next_field()
            .await
            .map_err(|e| rejected(e.status(), e.body_text()))?
        {
            let name = field.name().unwrap_or_default().to_string();

            if name == PICTURE_FIELD {
                let file_name = field.file_name().unwrap_or_default().to_string();
                let bytes = field
                    .bytes()
                    .await
                    .map_err(|e| rejected(e.status(), e.body_text()))?;
                if !file_name.is_empty() && !bytes.is_empty() {
                    picture = Some(Upload { file_name, bytes });
                }
            } else {
                let value = field
                    .text()
                    .await
                    .map_err(|e| rejected(e.status(), e.body_text()))?;
                form.set_field(&name, value);
            }
        }

        Ok(Self { form, picture })
    }
}

fn rejected(status: StatusCode, message: String) -> AppError {
    AppError::Rejected { status, message }
}

fn is_multipart(headers: &HeaderMap) -> bool {
    headers
        .get(CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|v| v.starts_with("multipart/form-data"))
}
