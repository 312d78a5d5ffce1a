//! Browser file intake backed by `web_sys::File` and object URLs.

use platform_host::{ContentRef, RawFile};

#[derive(Debug, Clone)]
/// A file the user dropped or picked, as handed over by the browser.
pub struct BrowserFile(pub web_sys::File);

impl RawFile for BrowserFile {
    fn name(&self) -> String {
        self.0.name()
    }

    fn size(&self) -> u64 {
        self.0.size().max(0.0) as u64
    }

    fn mime_type(&self) -> String {
        self.0.type_()
    }

    fn open_content(&self) -> Result<ContentRef, String> {
        #[cfg(target_arch = "wasm32")]
        {
            let href = web_sys::Url::create_object_url_with_blob(&self.0)
                .map_err(|err| format!("failed to create object URL: {err:?}"))?;
            Ok(ContentRef::new(href, |href| {
                if let Err(err) = web_sys::Url::revoke_object_url(href) {
                    web_sys::console::warn_1(
                        &format!("failed to revoke object URL {href}: {err:?}").into(),
                    );
                }
            }))
        }

        #[cfg(not(target_arch = "wasm32"))]
        {
            Err("file content is only available when compiled for wasm32".to_string())
        }
    }
}

/// Wraps every entry of a browser `FileList` (drop payload or `<input type="file">`).
pub fn raw_files_from_list(list: &web_sys::FileList) -> Vec<Box<dyn RawFile>> {
    (0..list.length())
        .filter_map(|index| list.get(index))
        .map(|file| Box::new(BrowserFile(file)) as Box<dyn RawFile>)
        .collect()
}
