//! Component state for the activation form.
//!
//! All form semantics live in [`ActivationIntake`]; this struct only adds
//! what the browser needs on top of it: the language context subscription,
//! the client configuration and a handle on the hidden file input.

use common::config::ClientConfig;
use common::intake::ActivationIntake;
use common::model::activation::Attachment;
use yew::context::ContextHandle;
use yew::prelude::*;

use crate::config::client_config;
use crate::contexts::language::I18n;

/// A license document picked in the browser.
#[derive(Clone, Debug)]
pub struct LicenseUpload {
    pub file: gloo_file::File,
    name: String,
    mime_type: String,
}

impl From<web_sys::File> for LicenseUpload {
    fn from(file: web_sys::File) -> Self {
        let file = gloo_file::File::from(file);
        Self {
            name: file.name(),
            mime_type: file.raw_mime_type(),
            file,
        }
    }
}

impl Attachment for LicenseUpload {
    fn name(&self) -> &str {
        &self.name
    }

    fn size(&self) -> u64 {
        self.file.size()
    }

    fn mime_type(&self) -> &str {
        &self.mime_type
    }
}

pub struct ActivationForm {
    pub intake: ActivationIntake<LicenseUpload>,
    pub config: ClientConfig,
    pub i18n: I18n,
    pub _i18n_handle: Option<ContextHandle<I18n>>,
    /// Reset when the form clears so the picker forgets the old file.
    pub file_input_ref: NodeRef,
}

impl ActivationForm {
    pub fn new(ctx: &Context<Self>) -> Self {
        let config = client_config();
        let (i18n, handle) = match ctx
            .link()
            .context::<I18n>(ctx.link().callback(super::Msg::I18nChanged))
        {
            Some((i18n, handle)) => (i18n, Some(handle)),
            None => (I18n::fallback(), None),
        };
        Self {
            intake: ActivationIntake::new(config.license_required),
            config,
            i18n,
            _i18n_handle: handle,
            file_input_ref: NodeRef::default(),
        }
    }

    /// Shows every toast the controller queued since the last call.
    pub fn flush_notifications(&mut self) {
        for notification in self.intake.take_notifications() {
            crate::toast::show_notification(&notification, self.i18n.dictionary());
        }
    }

    pub fn clear_file_input(&self) {
        if let Some(input) = self.file_input_ref.cast::<web_sys::HtmlInputElement>() {
            input.set_value("");
        }
    }
}
