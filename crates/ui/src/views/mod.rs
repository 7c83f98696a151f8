mod onboarding;
mod questionnaire;
mod summary;

#[cfg(test)]
mod test_harness;
#[cfg(test)]
mod view_smoke;

pub use onboarding::{PlayerOneSetupView, PlayerTwoSetupView};
pub use questionnaire::QuestionnaireView;
pub use summary::SummaryView;

#[cfg(test)]
pub(crate) use onboarding::{OnboardingIntent, OnboardingTestHandles};
#[cfg(test)]
pub(crate) use questionnaire::QuestionnaireTestHandles;
#[cfg(test)]
pub(crate) use summary::SummaryTestHandles;
