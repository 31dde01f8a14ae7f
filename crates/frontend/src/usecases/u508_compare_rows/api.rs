use super::error::ApiError;
use crate::shared::api_utils::api_url;
use contracts::usecases::u508_compare_rows::{
    DownloadType, ProcessReply, DOWNLOAD_PATH, FIELD_DOWNLOAD_TYPE, LOGS_PATH, PROCESS_PATH,
};
use gloo_net::http::{Request, Response};
use web_sys::{FormData, HtmlFormElement};

/// Extra multipart field that selects the category for `/download`
pub fn download_type_field(kind: DownloadType) -> (&'static str, &'static str) {
    (FIELD_DOWNLOAD_TYPE, kind.as_form_value())
}

/// Snapshot the form's current fields (files and key column) as multipart data
pub fn form_data(form: &HtmlFormElement) -> Result<FormData, ApiError> {
    FormData::new_with_form(form).map_err(|e| ApiError::Request(format!("{:?}", e)))
}

async fn send(request: Result<Request, gloo_net::Error>) -> Result<Response, ApiError> {
    let request = request.map_err(|e| ApiError::Request(e.to_string()))?;

    let response = request
        .send()
        .await
        .map_err(|e| ApiError::NoResponse(e.to_string()))?;

    if !response.ok() {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        return Err(ApiError::Status { status, body });
    }

    Ok(response)
}

/// POST the uploaded files to `/process`
pub async fn process(form: FormData) -> Result<ProcessReply, ApiError> {
    let response = send(Request::post(&api_url(PROCESS_PATH)).body(form)).await?;

    let text = response
        .text()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))?;
    serde_json::from_str(&text).map_err(|e| ApiError::Decode(format!("{}: {}", e, text)))
}

/// GET the server log feed
pub async fn fetch_logs() -> Result<Vec<String>, ApiError> {
    let response = send(Request::get(&api_url(LOGS_PATH)).build()).await?;

    response
        .json()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))
}

/// POST the form plus `download_type` to `/download` and return the xlsx bytes
pub async fn download(form: FormData, kind: DownloadType) -> Result<Vec<u8>, ApiError> {
    let (name, value) = download_type_field(kind);
    form.append_with_str(name, value)
        .map_err(|e| ApiError::Request(format!("{:?}", e)))?;

    let response = send(Request::post(&api_url(DOWNLOAD_PATH)).body(form)).await?;

    response
        .binary()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_download_type_field() {
        assert_eq!(
            download_type_field(DownloadType::NewRows),
            ("download_type", "new_rows")
        );
        assert_eq!(
            download_type_field(DownloadType::NonExistingRows),
            ("download_type", "non_existing_rows")
        );
    }
}
