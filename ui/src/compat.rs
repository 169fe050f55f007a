// Re-export the public API from the appropriate module
#[cfg(target_arch = "wasm32")]
pub use wasm32::*;

#[cfg(not(target_arch = "wasm32"))]
pub use non_wasm32::*;

use std::cell::RefCell;
use std::rc::Rc;
use tokio::sync::oneshot;

/// A oneshot sender shared by several browser callbacks.
///
/// The first `send` wins; later ones are dropped.
pub struct OnceReply<T>(Rc<RefCell<Option<oneshot::Sender<T>>>>);

impl<T> Clone for OnceReply<T> {
    fn clone(&self) -> Self {
        Self(Rc::clone(&self.0))
    }
}

impl<T> OnceReply<T> {
    pub fn channel() -> (Self, oneshot::Receiver<T>) {
        let (tx, rx) = oneshot::channel();
        (Self(Rc::new(RefCell::new(Some(tx)))), rx)
    }

    /// Returns false if a reply was already sent.
    pub fn send(&self, value: T) -> bool {
        match self.0.borrow_mut().take() {
            Some(tx) => {
                let _ = tx.send(value);
                true
            }
            None => false,
        }
    }
}

#[cfg(target_arch = "wasm32")]
pub mod wasm32 {
    use super::OnceReply;
    use api::tables::CsvFile;
    use std::time::Duration;
    use wasm_bindgen::prelude::*;
    use wasm_bindgen_futures::JsFuture;
    use web_sys::{self, FileReader, HtmlInputElement, Window};

    pub async fn sleep(duration: Duration) {
        gloo_timers::future::sleep(duration).await;
    }

    pub async fn clipboard_set(text: String) -> bool {
        match web_sys::window().map(|win: Window| win.navigator().clipboard()) {
            Some(clipboard) => {
                let promise = clipboard.write_text(&text);
                JsFuture::from(promise).await.is_ok()
            }
            _ => false,
        }
    }

    fn js_err(e: JsValue) -> String {
        e.as_string().unwrap_or_else(|| format!("{:?}", e))
    }

    /// Prompts the user to select a file and reads it with its declared type.
    ///
    /// Resolves to `Ok(None)` when the dialog is dismissed.
    pub async fn pick_file(extension: &str) -> Result<Option<CsvFile>, String> {
        let (reply, rx) = OnceReply::channel();
        let window = web_sys::window().ok_or("no window")?;
        let document = window.document().ok_or("no document")?;
        let body = document.body().ok_or("no body")?;
        let input: HtmlInputElement = document
            .create_element("input")
            .map_err(js_err)?
            .dyn_into()
            .map_err(|_| "Failed to cast to HtmlInputElement".to_string())?;
        input.set_type("file");
        input.set_accept(&format!(".{}", extension));

        let on_cancel = reply.clone();
        let oncancel_closure = Closure::once(move |_: web_sys::Event| {
            on_cancel.send(Ok(None));
        });
        input
            .add_event_listener_with_callback("cancel", oncancel_closure.as_ref().unchecked_ref())
            .map_err(js_err)?;
        oncancel_closure.forget();

        let onchange_closure = Closure::once(move |event: web_sys::Event| {
            let file = event
                .target()
                .and_then(|t| t.dyn_into::<HtmlInputElement>().ok())
                .and_then(|input| input.files())
                .and_then(|files| files.get(0));
            let Some(file) = file else {
                reply.send(Ok(None));
                return;
            };
            let reader = match FileReader::new() {
                Ok(r) => r,
                Err(e) => {
                    reply.send(Err(js_err(e)));
                    return;
                }
            };
            let reader_clone = reader.clone();
            let name = file.name();
            let content_type = file.type_();
            let on_load = reply.clone();
            let onload_closure = Closure::once(move |_: web_sys::ProgressEvent| {
                let result = reader_clone.result().map(|buf| CsvFile {
                    name,
                    content_type,
                    bytes: js_sys::Uint8Array::new(&buf).to_vec(),
                });
                on_load.send(result.map(Some).map_err(js_err));
            });
            let on_error = reply.clone();
            let onerror_closure = Closure::once(move |_: web_sys::ProgressEvent| {
                on_error.send(Err("Could not read the selected file".to_string()));
            });
            reader.set_onload(Some(onload_closure.as_ref().unchecked_ref()));
            reader.set_onerror(Some(onerror_closure.as_ref().unchecked_ref()));
            if let Err(e) = reader.read_as_array_buffer(&file) {
                let e = js_err(e);
                dioxus_logger::tracing::warn!("could not read {}: {}", file.name(), e);
                reply.send(Err(e));
            }
            onload_closure.forget();
            onerror_closure.forget();
        });
        input.set_onchange(Some(onchange_closure.as_ref().unchecked_ref()));
        onchange_closure.forget();

        body.append_child(&input).map_err(js_err)?;
        input.click();
        body.remove_child(&input).map_err(js_err)?;

        rx.await.map_err(|e| e.to_string())?
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub mod non_wasm32 {
    use api::tables::CsvFile;
    use dioxus_clipboard::prelude::*;
    use std::path::Path;
    use std::time::Duration;

    pub async fn sleep(duration: Duration) {
        tokio::time::sleep(duration).await;
    }

    pub async fn clipboard_set(text: String) -> bool {
        let mut clipboard = use_clipboard();
        clipboard.set(text).is_ok()
    }

    /// The type a browser would declare for a file with this name.
    pub fn declared_type(path: &Path) -> mime::Mime {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("csv") => mime::TEXT_CSV,
            _ => mime::APPLICATION_OCTET_STREAM,
        }
    }

    /// Prompts the user to select a file and reads it with its declared type.
    pub async fn pick_file(extension: &str) -> Result<Option<CsvFile>, String> {
        let file_handle = rfd::AsyncFileDialog::new()
            .add_filter("CSV Files", &[extension])
            .pick_file()
            .await;

        if let Some(handle) = file_handle {
            let bytes = tokio::fs::read(handle.path())
                .await
                .map_err(|e| e.to_string())?;
            Ok(Some(CsvFile {
                name: handle.file_name(),
                content_type: declared_type(handle.path()).to_string(),
                bytes,
            }))
        } else {
            Ok(None)
        }
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        #[test]
        fn csv_extension_declares_text_csv() {
            assert_eq!(declared_type(Path::new("/tmp/Payments.CSV")), mime::TEXT_CSV);
            assert_eq!(
                declared_type(Path::new("/tmp/report.xlsx")),
                mime::APPLICATION_OCTET_STREAM
            );
            assert_eq!(
                declared_type(Path::new("/tmp/noext")).essence_str(),
                "application/octet-stream"
            );
        }
    }
}
