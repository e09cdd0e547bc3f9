//! Properties for the `ActivationForm`.

use common::model::activation::ActivationRequest;
use yew::prelude::*;

use super::state::LicenseUpload;

#[derive(Properties, PartialEq, Clone)]
pub struct ActivationFormProps {
    /// Receives the validated payload (normalized phone included) once the
    /// backend accepted the OTP request. The form has already been cleared.
    pub on_submit_success: Callback<ActivationRequest<LicenseUpload>>,
}
