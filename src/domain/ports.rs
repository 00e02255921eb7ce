use crate::domain::model::{ServerReply, SubmissionPayload};
use crate::utils::error::Result;
use async_trait::async_trait;
use std::sync::Arc;

/// Page surface the controller works against. Handles are resolved by CSS
/// selector or by `name` attribute and stay valid for the locator's
/// lifetime. A missing element resolves to `None`; every other operation is
/// infallible on a live handle.
///
/// `set_content` carries display text, not markup: implementations must not
/// interpret the string as HTML.
pub trait ElementLocator: Send + Sync {
    type Handle: Clone + Send + Sync;

    fn by_selector(&self, selector: &str) -> Option<Self::Handle>;
    /// First element whose `name` attribute equals `name`.
    fn by_name(&self, name: &str) -> Option<Self::Handle>;

    fn value(&self, handle: &Self::Handle) -> String;
    fn set_value(&self, handle: &Self::Handle, value: &str);
    fn set_content(&self, handle: &Self::Handle, text: &str);
    fn set_visible(&self, handle: &Self::Handle, visible: bool);
    /// Programmatic activation, the equivalent of a click.
    fn activate(&self, handle: &Self::Handle);
}

impl<L: ElementLocator + ?Sized> ElementLocator for Arc<L> {
    type Handle = L::Handle;

    fn by_selector(&self, selector: &str) -> Option<Self::Handle> {
        (**self).by_selector(selector)
    }

    fn by_name(&self, name: &str) -> Option<Self::Handle> {
        (**self).by_name(name)
    }

    fn value(&self, handle: &Self::Handle) -> String {
        (**self).value(handle)
    }

    fn set_value(&self, handle: &Self::Handle, value: &str) {
        (**self).set_value(handle, value)
    }

    fn set_content(&self, handle: &Self::Handle, text: &str) {
        (**self).set_content(handle, text)
    }

    fn set_visible(&self, handle: &Self::Handle, visible: bool) {
        (**self).set_visible(handle, visible)
    }

    fn activate(&self, handle: &Self::Handle) {
        (**self).activate(handle)
    }
}

/// Presentation widget revealed after a successful submission. Opaque; the
/// controller only ever calls `show`.
pub trait ModalWidget: Send + Sync {
    fn show(&self);
}

impl<M: ModalWidget + ?Sized> ModalWidget for Arc<M> {
    fn show(&self) {
        (**self).show()
    }
}

/// Network port: one multipart POST per call, reply decoded to a
/// `ServerReply`. Any request or decode fault surfaces as `Err`.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn post_form(&self, endpoint: &str, payload: &SubmissionPayload) -> Result<ServerReply>;
}

#[async_trait]
impl<T: Transport + ?Sized> Transport for Arc<T> {
    async fn post_form(&self, endpoint: &str, payload: &SubmissionPayload) -> Result<ServerReply> {
        (**self).post_form(endpoint, payload).await
    }
}
