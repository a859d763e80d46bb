
mod access_test;
mod logging_test;
mod organization_test;
mod record_test;
mod site_test;
mod survey_test;
mod user_test;
