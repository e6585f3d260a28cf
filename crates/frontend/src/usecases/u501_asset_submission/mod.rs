//! Мастер подачи актива вендором (MVVM поверх `SubmissionWizard`)

mod dynamic_form;
mod model;
mod view;
pub mod view_model;

pub use dynamic_form::DynamicSpecForm;
pub use view::SubmissionWizardPage;
