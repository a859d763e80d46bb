pub mod image;
pub mod lookup;
pub mod measurement;
pub mod note;
pub mod organization;
pub mod site;
pub mod survey;
pub mod user;
