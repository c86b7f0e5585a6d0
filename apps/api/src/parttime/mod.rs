// Part-time job postings.
// Contact and requirement parsing are pure; handlers validate before anything
// reaches the store.

pub mod contact;
pub mod handlers;
pub mod posting;
pub mod requirements;
pub mod store;
pub mod validation;
