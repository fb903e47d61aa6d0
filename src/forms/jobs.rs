use serde::Deserialize;
use validator::Validate;

use crate::domain::job::{NewJob, UpdateJob};

#[derive(Debug, Deserialize, Validate)]
/// Form data shared by the create and edit job pages.
pub struct JobForm {
    #[validate(length(min = 1))]
    pub description: String,
}

impl From<&JobForm> for NewJob {
    fn from(form: &JobForm) -> Self {
        NewJob::new(form.description.clone())
    }
}

impl From<&JobForm> for UpdateJob {
    fn from(form: &JobForm) -> Self {
        UpdateJob::new(form.description.clone())
    }
}
