//! Routed pages.

mod home;
mod my_files;
mod not_found;

pub(crate) use home::HomePage;
pub(crate) use my_files::MyFilesPage;
pub(crate) use not_found::NotFoundPage;
