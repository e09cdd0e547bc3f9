use common::api::SendOtpOutcome;
use common::error::ApiError;
use common::model::activation::Field;
use common::model::category::Category;

use crate::contexts::language::I18n;

pub enum Msg {
    I18nChanged(I18n),
    SetField(Field, String),
    SelectCategory(String),
    FileSelected(Option<web_sys::File>),
    CategoriesLoaded(Result<Vec<Category>, ApiError>),
    Submit,
    SubmitFinished(SendOtpOutcome),
}
