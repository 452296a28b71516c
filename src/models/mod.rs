pub mod activities;
pub mod articles;
pub mod biodata;
pub mod contact_messages;
pub mod education;
pub mod experiences;
pub mod projects;
pub mod services;
pub mod skills;
pub mod social_links;
pub mod users;
pub mod validation;
