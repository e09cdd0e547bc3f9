use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct VerificationModalProps {
    pub open: bool,
    /// Normalized phone number the code was sent to.
    pub phone: AttrValue,
    /// Emits `false` whenever the modal dismisses itself.
    pub on_open_change: Callback<bool>,
}
