/// Сохранение бинарного ответа сервера как файла через браузер
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Blob, BlobPropertyBag, HtmlAnchorElement, Url};

fn js_err(context: &str, e: JsValue) -> String {
    format!("{}: {:?}", context, e)
}

/// Оборачивает байты в Blob и инициирует скачивание под именем `filename`
pub fn save_bytes(bytes: &[u8], filename: &str, mime: &str) -> Result<(), String> {
    let blob = create_blob(bytes, mime)?;
    download_blob(&blob, filename)
}

fn create_blob(bytes: &[u8], mime: &str) -> Result<Blob, String> {
    let parts = js_sys::Array::new();
    parts.push(&js_sys::Uint8Array::from(bytes));

    let properties = BlobPropertyBag::new();
    properties.set_type(mime);

    Blob::new_with_u8_array_sequence_and_options(&parts, &properties)
        .map_err(|e| js_err("Failed to create blob", e))
}

/// Шаг сохранения файла, на котором возникла ошибка
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Step {
    CreateUrl,
    CreateAnchor,
    AppendAnchor,
    RemoveAnchor,
    RevokeUrl,
}

impl Step {
    fn describe(self) -> &'static str {
        match self {
            Step::CreateUrl => "Failed to create object URL",
            Step::CreateAnchor => "Failed to create anchor",
            Step::AppendAnchor => "Failed to append anchor",
            Step::RemoveAnchor => "Failed to remove anchor",
            Step::RevokeUrl => "Failed to revoke object URL",
        }
    }

    /// Steps after the click only tidy up; the file is already saved
    fn aborts_download(self) -> bool {
        matches!(self, Step::CreateUrl | Step::CreateAnchor | Step::AppendAnchor)
    }
}

/// Fatal steps become an error, cleanup steps only a warning
fn settle(step: Step, detail: String) -> Result<(), String> {
    let message = format!("{}: {}", step.describe(), detail);
    if step.aborts_download() {
        Err(message)
    } else {
        log::warn!("{}", message);
        Ok(())
    }
}

/// Кликает по временной скрытой ссылке с атрибутом `download`.
/// Object URL освобождается на любом пути после его создания.
fn download_blob(blob: &Blob, filename: &str) -> Result<(), String> {
    let window = web_sys::window().ok_or("No window object")?;
    let document = window.document().ok_or("No document object")?;
    let body = document.body().ok_or("No body element")?;

    let url = Url::create_object_url_with_blob(blob)
        .map_err(|e| js_err(Step::CreateUrl.describe(), e))?;

    let clicked = click_anchor(&document, &body, &url, filename);

    let revoked = Url::revoke_object_url(&url)
        .or_else(|e| settle(Step::RevokeUrl, format!("{:?}", e)));
    clicked.and(revoked)
}

fn click_anchor(
    document: &web_sys::Document,
    body: &web_sys::HtmlElement,
    url: &str,
    filename: &str,
) -> Result<(), String> {
    let anchor = document
        .create_element("a")
        .map_err(|e| format!("{:?}", e))
        .and_then(|el| {
            el.dyn_into::<HtmlAnchorElement>()
                .map_err(|_| "created element is not an anchor".to_string())
        });
    let anchor = match anchor {
        Ok(anchor) => anchor,
        Err(detail) => return settle(Step::CreateAnchor, detail),
    };
    anchor.set_href(url);
    anchor.set_download(filename);
    if let Err(e) = anchor.style().set_property("display", "none") {
        log::warn!("{}", js_err("Failed to hide download anchor", e));
    }

    if let Err(e) = body.append_child(&anchor) {
        return settle(Step::AppendAnchor, format!("{:?}", e));
    }
    anchor.click();

    body.remove_child(&anchor)
        .map(|_| ())
        .or_else(|e| settle(Step::RemoveAnchor, format!("{:?}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_failures_before_click_abort() {
        for step in [Step::CreateUrl, Step::CreateAnchor, Step::AppendAnchor] {
            let result = settle(step, "TypeError".to_string());
            assert_eq!(result, Err(format!("{}: TypeError", step.describe())));
        }
    }

    #[test]
    fn test_cleanup_failures_do_not_fail_saved_download() {
        assert_eq!(settle(Step::RemoveAnchor, "NotFoundError".to_string()), Ok(()));
        assert_eq!(settle(Step::RevokeUrl, "InvalidStateError".to_string()), Ok(()));
    }
}
