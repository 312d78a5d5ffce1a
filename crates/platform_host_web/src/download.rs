//! Anchor-driven downloads.

/// Asks the browser to save `href` under `file_name`.
///
/// # Errors
///
/// Returns an error when the document is unavailable or the anchor cannot be created.
pub fn trigger_download(href: &str, file_name: &str) -> Result<(), String> {
    #[cfg(target_arch = "wasm32")]
    {
        use wasm_bindgen::JsCast;

        let document = web_sys::window()
            .and_then(|window| window.document())
            .ok_or_else(|| "document unavailable".to_string())?;
        let anchor = document
            .create_element("a")
            .map_err(|err| format!("failed to create anchor: {err:?}"))?
            .dyn_into::<web_sys::HtmlAnchorElement>()
            .map_err(|_| "failed to cast anchor".to_string())?;
        anchor.set_href(href);
        anchor.set_download(file_name);

        let body = document
            .body()
            .ok_or_else(|| "document body unavailable".to_string())?;
        body.append_child(&anchor)
            .map_err(|err| format!("failed to attach anchor: {err:?}"))?;
        anchor.click();
        anchor.remove();
        Ok(())
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = (href, file_name);
        Err("downloads are only available when compiled for wasm32".to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn native_download_reports_unsupported() {
        let err = trigger_download("memory://a.png", "a.png").expect_err("native");
        assert!(err.contains("wasm32"));
    }
}
